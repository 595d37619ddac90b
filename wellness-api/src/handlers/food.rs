use super::error_response;
use crate::models::{HistoryResponse, SaveResponse};
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use wellness_core::food::FOOD_SAVED;
use wellness_core::{FoodForm, FoodTracker};

#[get("/api/food")]
pub async fn list_food(state: web::Data<AppState>) -> impl Responder {
    let tracker = FoodTracker::new(state.store.clone());
    match tracker.history(&state.owner).await {
        Ok(entries) => HttpResponse::Ok().json(HistoryResponse { entries }),
        Err(e) => error_response(&e, "Error fetching food entries"),
    }
}

#[post("/api/food")]
pub async fn save_food(state: web::Data<AppState>, form: web::Json<FoodForm>) -> impl Responder {
    let tracker = FoodTracker::new(state.store.clone());
    match tracker.save(&state.owner, &form).await {
        Ok(entry) => HttpResponse::Created().json(SaveResponse::new(FOOD_SAVED, entry)),
        Err(e) => error_response(&e, "Error saving food entry"),
    }
}
