// src/api/handlers/education.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{EducationTopic, TopicContentResponse, TopicListResponse};
use crate::education::EducationManager;

#[utoipa::path(
    get,
    path = "/education",
    tag = "Education",
    responses(
        (status = 200, description = "List of password tips and common mistakes", body = TopicListResponse)
    )
)]
pub async fn list_topics() -> impl Responder {
    let education_manager = EducationManager::new();
    let topics = education_manager
        .get_all_topics()
        .iter()
        .map(EducationTopic::from)
        .collect();

    HttpResponse::Ok().json(TopicListResponse {
        success: true,
        topics,
        error: None,
    })
}

#[utoipa::path(
    get,
    path = "/education/{id}",
    tag = "Education",
    params(
        ("id" = String, Path, description = "Topic ID to retrieve")
    ),
    responses(
        (status = 200, description = "Topic content", body = TopicContentResponse),
        (status = 404, description = "Topic not found", body = TopicContentResponse)
    )
)]
pub async fn get_topic(path: web::Path<String>) -> impl Responder {
    let topic_id = path.into_inner();
    let education_manager = EducationManager::new();

    match education_manager.get_topic_by_id(&topic_id) {
        Some(topic) => HttpResponse::Ok().json(TopicContentResponse {
            success: true,
            topic: Some(topic.into()),
            error: None,
        }),
        None => HttpResponse::NotFound().json(TopicContentResponse {
            success: false,
            topic: None,
            error: Some(format!("Topic not found: {}", topic_id)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_lists_both_topics() {
        let app = test::init_service(App::new().route("/education", web::get().to(list_topics))).await;

        let req = test::TestRequest::get().uri("/education").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let topics = body["topics"].as_array().unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0]["title"], "Password Tips");
        assert_eq!(topics[1]["advice"], "avoid");
        assert_eq!(topics[1]["items"][2], "Using sequential numbers or letters");
    }

    #[actix_web::test]
    async fn test_get_topic_and_missing_topic() {
        let app = test::init_service(
            App::new().route("/education/{id}", web::get().to(get_topic)),
        )
        .await;

        let req = test::TestRequest::get().uri("/education/tips").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(body["topic"]["content"].as_str().unwrap().starts_with("# Password Tips"));

        let req = test::TestRequest::get().uri("/education/2fa").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
