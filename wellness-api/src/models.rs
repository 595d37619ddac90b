use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wellness_core::checklist::QuestionState;
use wellness_core::{ChecklistError, Question, ReconcileReport};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Checklist commit failure. `applied` lists the answers already written.
#[derive(Debug, Serialize)]
pub struct ChecklistErrorResponse {
    pub error: String,
    pub failed_question: Option<Question>,
    pub applied: Vec<Question>,
}

impl ChecklistErrorResponse {
    pub fn new(error: String, source: &ChecklistError) -> Self {
        Self {
            error,
            failed_question: source.question(),
            applied: source.applied().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> SaveResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse<T> {
    pub entries: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ChecklistQuery {
    pub date: Option<String>,
}

/// Answers are keyed by the full question text
#[derive(Debug, Deserialize)]
pub struct SubmitChecklistRequest {
    pub date: Option<String>,
    #[serde(default)]
    pub answers: HashMap<String, bool>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistView {
    pub date: NaiveDate,
    pub questions: Vec<QuestionState>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistSaved {
    pub date: NaiveDate,
    pub report: ReconcileReport,
    pub questions: Vec<QuestionState>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteListQuery {
    pub include_inactive: Option<bool>,
}
