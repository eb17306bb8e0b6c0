// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};

use crate::analysis::evaluate;
use crate::api::types::PasswordGenerationResponse;
use crate::api::AppState;
use crate::generators::PasswordGenerator;

/// Generate a password
///
/// Returns a random 16-character password drawn uniformly from uppercase,
/// lowercase, digit and special characters, with its strength. Every class
/// is likely but not guaranteed to appear.
#[utoipa::path(
    get,
    path = "/generator/password",
    tag = "Generator",
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 500, description = "Random source failure", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(state: web::Data<AppState>) -> impl Responder {
    // built per request: the thread-local source cannot cross workers
    let mut generator = PasswordGenerator::with_kind(state.random_source);

    match generator.generate_password() {
        Ok(password) => {
            let result = evaluate(&password);
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                result: Some(result),
                label: Some(result.level().label().to_string()),
                password: Some(password),
                error: None,
            })
        }
        Err(e) => {
            log::error!("Password generation failed: {}", e);
            HttpResponse::InternalServerError().json(PasswordGenerationResponse {
                success: false,
                password: None,
                result: None,
                label: None,
                error: Some(format!("Failed to generate password: {}", e)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::Value;

    use super::*;
    use crate::crypto::RandomSourceKind;
    use crate::generators::charset::in_alphabet;

    #[actix_web::test]
    async fn test_generates_sixteen_characters() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { random_source: RandomSourceKind::Os }))
                .route("/generator/password", web::get().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::get().uri("/generator/password").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(in_alphabet));
        assert_eq!(body["result"]["score"], evaluate(password).score());
    }

    #[actix_web::test]
    async fn test_consecutive_requests_differ() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { random_source: RandomSourceKind::Thread }))
                .route("/generator/password", web::get().to(generate_password)),
        )
        .await;

        let mut seen = Vec::new();
        for _ in 0..5 {
            let req = test::TestRequest::get().uri("/generator/password").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            seen.push(body["password"].as_str().unwrap().to_string());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }
}
