use super::error_response;
use crate::models::{QuoteListQuery, SaveResponse};
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use wellness_core::quotes::QUOTE_SAVED;
use wellness_core::{QuoteBook, QuoteForm};
use wellness_store::RecordId;

#[get("/api/quotes")]
pub async fn list_quotes(
    state: web::Data<AppState>,
    query: web::Query<QuoteListQuery>,
) -> impl Responder {
    let book = QuoteBook::new(state.store.clone());
    match book.list(query.include_inactive.unwrap_or(false)).await {
        Ok(quotes) => HttpResponse::Ok().json(quotes),
        Err(e) => error_response(&e, "Error fetching quotes"),
    }
}

#[get("/api/quotes/random")]
pub async fn random_quote(state: web::Data<AppState>) -> impl Responder {
    let book = QuoteBook::new(state.store.clone());
    match book.random().await {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(e) => error_response(&e, "Error fetching random quote"),
    }
}

#[post("/api/quotes")]
pub async fn save_quote(state: web::Data<AppState>, form: web::Json<QuoteForm>) -> impl Responder {
    let book = QuoteBook::new(state.store.clone());
    match book.save(&form).await {
        Ok(quote) => HttpResponse::Created().json(SaveResponse::new(QUOTE_SAVED, quote)),
        Err(e) => error_response(&e, "Error saving quote"),
    }
}

#[post("/api/quotes/{quote_id}/toggle")]
pub async fn toggle_quote(
    state: web::Data<AppState>,
    quote_id: web::Path<String>,
) -> impl Responder {
    let id = RecordId::from(quote_id.as_str());
    let book = QuoteBook::new(state.store.clone());
    match book.toggle_active(&id).await {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(e) => error_response(&e, "Error toggling quote"),
    }
}
