pub mod checklist;
pub mod food;
pub mod health;
pub mod quotes;
pub mod weight;

use crate::models::ErrorResponse;
use actix_web::HttpResponse;
use tracing::{error, warn};
use wellness_core::WellnessError;

/// Map a domain failure onto a JSON error response. Validation messages are
/// shown as is; store failures are prefixed with `context`.
pub(crate) fn error_response(err: &WellnessError, context: &str) -> HttpResponse {
    if err.is_validation() {
        warn!(error = %err, "Rejected form submission");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
    }

    if let WellnessError::NotFound { .. } = err {
        warn!(error = %err, "Record not found");
        return HttpResponse::NotFound().json(ErrorResponse {
            error: err.to_string(),
        });
    }

    error!(error = %err, "{}", context);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: format!("{}: {}", context, err),
    })
}
