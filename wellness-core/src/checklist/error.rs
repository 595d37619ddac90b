use super::Question;
use chrono::NaiveDate;
use thiserror::Error;
use wellness_store::StoreError;

/// Failures of a checklist load or commit. Writes made before a
/// `StoreRead`/`StoreWrite` failure are kept in the store and listed in
/// `applied`.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// Nothing to reconcile; the store was not contacted
    #[error("{0}")]
    Validation(String),

    #[error("Error reading saved answer for \"{question}\": {source}")]
    StoreRead {
        question: Question,
        applied: Vec<Question>,
        source: StoreError,
    },

    #[error("Error saving answer for \"{question}\": {source}")]
    StoreWrite {
        question: Question,
        applied: Vec<Question>,
        source: StoreError,
    },

    #[error("Error loading checklist for {date}: {source}")]
    Load { date: NaiveDate, source: StoreError },

    #[error("Invalid checklist row: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

impl ChecklistError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ChecklistError::Validation(_))
    }

    /// Questions written to the store before the failure
    pub fn applied(&self) -> &[Question] {
        match self {
            ChecklistError::StoreRead { applied, .. } | ChecklistError::StoreWrite { applied, .. } => {
                applied
            }
            _ => &[],
        }
    }

    /// The question whose store operation failed, if any
    pub fn question(&self) -> Option<Question> {
        match self {
            ChecklistError::StoreRead { question, .. }
            | ChecklistError::StoreWrite { question, .. } => Some(*question),
            _ => None,
        }
    }
}
