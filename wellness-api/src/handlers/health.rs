use crate::models::HealthResponse;
use actix_web::{get, HttpResponse, Responder};

#[get("/api/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
