use actix_web::web;

pub mod cli;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod state;

pub use state::AppState;

/// Register every wellness endpoint under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check)
        .service(handlers::weight::list_weight)
        .service(handlers::weight::save_weight)
        .service(handlers::food::list_food)
        .service(handlers::food::save_food)
        .service(handlers::checklist::checklist_entries)
        .service(handlers::checklist::get_checklist)
        .service(handlers::checklist::submit_checklist)
        .service(handlers::quotes::random_quote)
        .service(handlers::quotes::list_quotes)
        .service(handlers::quotes::save_quote)
        .service(handlers::quotes::toggle_quote);
}
