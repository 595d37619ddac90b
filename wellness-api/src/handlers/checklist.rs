use super::error_response;
use crate::models::{
    ChecklistErrorResponse, ChecklistQuery, ChecklistSaved, ChecklistView, ErrorResponse,
    HistoryResponse, SaveResponse, SubmitChecklistRequest,
};
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{NaiveDate, Utc};
use tracing::{error, info, warn};
use wellness_core::checklist;
use wellness_core::form::parse_date;
use wellness_core::{ChecklistError, ChecklistSession, Question, WellnessError};

pub const CHECKLIST_SAVED: &str = "Checklist saved successfully!";

fn selected_date(raw: Option<&str>) -> Result<NaiveDate, WellnessError> {
    match raw.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => parse_date(date),
        None => Ok(Utc::now().date_naive()),
    }
}

#[get("/api/checklist")]
pub async fn get_checklist(
    state: web::Data<AppState>,
    query: web::Query<ChecklistQuery>,
) -> impl Responder {
    let date = match selected_date(query.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_response(&e, "Error loading checklist"),
    };

    match ChecklistSession::open(state.store.clone(), state.owner, date).await {
        Ok(session) => HttpResponse::Ok().json(ChecklistView {
            date,
            questions: session.questions(),
        }),
        Err(e) => error_response(&WellnessError::from(e), "Error loading checklist"),
    }
}

#[post("/api/checklist")]
pub async fn submit_checklist(
    state: web::Data<AppState>,
    request: web::Json<SubmitChecklistRequest>,
) -> impl Responder {
    let request = request.into_inner();

    let date = match selected_date(request.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return error_response(&e, "Error saving checklist"),
    };

    let mut edits = Vec::with_capacity(request.answers.len());
    for (text, answer) in &request.answers {
        match Question::from_text(text) {
            Some(question) => edits.push((question, *answer)),
            None => {
                warn!(question = %text, "Unknown checklist question submitted");
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: format!("Unknown checklist question: {}", text),
                });
            }
        }
    }

    let mut session = match ChecklistSession::open(state.store.clone(), state.owner, date).await {
        Ok(session) => session,
        Err(e) => return error_response(&WellnessError::from(e), "Error saving checklist"),
    };
    for (question, answer) in edits {
        session.edit(question, answer);
    }

    match session.commit().await {
        Ok(report) => {
            info!(date = %date, writes = report.writes(), "Checklist committed");
            HttpResponse::Ok().json(SaveResponse::new(
                CHECKLIST_SAVED,
                ChecklistSaved {
                    date,
                    report,
                    questions: session.questions(),
                },
            ))
        }
        Err(e) => commit_failed(&e),
    }
}

fn commit_failed(err: &ChecklistError) -> HttpResponse {
    if err.is_validation() {
        return HttpResponse::BadRequest().json(ChecklistErrorResponse::new(err.to_string(), err));
    }

    error!(
        error = %err,
        applied = err.applied().len(),
        "Checklist commit failed"
    );
    HttpResponse::InternalServerError().json(ChecklistErrorResponse::new(
        format!("Error saving checklist: {}", err),
        err,
    ))
}

#[get("/api/checklist/entries")]
pub async fn checklist_entries(state: web::Data<AppState>) -> impl Responder {
    match checklist::checklist_entries(state.store.as_ref(), &state.owner).await {
        Ok(entries) => HttpResponse::Ok().json(HistoryResponse { entries }),
        Err(e) => error_response(&e, "Error fetching checklist entries"),
    }
}
