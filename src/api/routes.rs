// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Strength evaluation
    cfg.route("/strength", web::post().to(handlers::strength::evaluate_password));

    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::get().to(handlers::generator::generate_password))
    );

    // Education routes
    cfg.service(
        web::scope("/education")
            .route("", web::get().to(handlers::education::list_topics))
            .route("/{id}", web::get().to(handlers::education::get_topic))
    );
}
