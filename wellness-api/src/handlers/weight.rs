use super::error_response;
use crate::models::{HistoryResponse, SaveResponse};
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::info;
use wellness_core::weight::WEIGHT_SAVED;
use wellness_core::{WeightForm, WeightTracker};

#[get("/api/weight")]
pub async fn list_weight(state: web::Data<AppState>) -> impl Responder {
    let tracker = WeightTracker::new(state.store.clone());
    match tracker.history(&state.owner).await {
        Ok(entries) => HttpResponse::Ok().json(HistoryResponse { entries }),
        Err(e) => error_response(&e, "Error fetching weight entries"),
    }
}

#[post("/api/weight")]
pub async fn save_weight(
    state: web::Data<AppState>,
    form: web::Json<WeightForm>,
) -> impl Responder {
    let tracker = WeightTracker::new(state.store.clone());
    match tracker.save(&state.owner, &form).await {
        Ok(entry) => {
            info!(date = %entry.date_recorded, "Weight entry saved");
            HttpResponse::Created().json(SaveResponse::new(WEIGHT_SAVED, entry))
        }
        Err(e) => error_response(&e, "Error saving weight"),
    }
}
