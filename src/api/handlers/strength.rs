// src/api/handlers/strength.rs
use actix_web::{web, HttpResponse, Responder};

use crate::analysis::evaluate;
use crate::api::types::{ChecklistItem, StrengthRequest, StrengthResponse};

/// Evaluate password strength
///
/// Scores the password against the five rules and returns the label,
/// strength bar width and rule checklist.
#[utoipa::path(
    post,
    path = "/strength",
    tag = "Strength",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength evaluation", body = StrengthResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn evaluate_password(req: web::Json<StrengthRequest>) -> impl Responder {
    let result = evaluate(&req.password);
    log::debug!("Evaluated password via API: score {}", result.score());

    HttpResponse::Ok().json(StrengthResponse {
        success: true,
        result: Some(result),
        label: Some(result.level().label().to_string()),
        percent: Some(result.percent()),
        checklist: ChecklistItem::from_result(&result),
        error: None,
    })
}
