// src/api/mod.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::crypto::RandomSourceKind;

pub mod handlers;
pub mod routes;
pub mod types;

/// Shared, read-only state for request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub random_source: RandomSourceKind,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::strength::evaluate_password,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::education::list_topics,
        crate::api::handlers::education::get_topic
    ),
    components(
        schemas(
            crate::models::StrengthResult,
            crate::models::Rule,
            crate::education::Advice,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::api::types::ChecklistItem,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::EducationTopic,
            crate::api::types::TopicContent,
            crate::api::types::TopicListResponse,
            crate::api::types::TopicContentResponse
        )
    ),
    tags(
        (name = "Strength", description = "Password strength evaluation"),
        (name = "Generator", description = "Password generation"),
        (name = "Education", description = "Password tips and common mistakes")
    ),
    info(
        title = "Password Checker API",
        version = "0.1.0",
        description = "Evaluate password strength and generate random passwords",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: &Config) -> std::io::Result<()> {
    let base_path = config.web_base_path.clone();
    let state = web::Data::new(AppState {
        random_source: config.random_source,
    });

    log::info!(
        "Starting Password Checker API on {}:{}{}",
        config.web_address,
        config.web_port,
        base_path
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .service(web::scope(&base_path).configure(routes::configure_routes))
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}
