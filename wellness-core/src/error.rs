use crate::checklist::ChecklistError;
use thiserror::Error;
use wellness_store::{RecordId, StoreError, Table};

#[derive(Error, Debug)]
pub enum WellnessError {
    /// A required form field was missing or could not be converted
    #[error("{0}")]
    Validation(String),

    #[error("Error reading {table}: {source}")]
    StoreRead { table: Table, source: StoreError },

    #[error("Error saving to {table}: {source}")]
    StoreWrite { table: Table, source: StoreError },

    #[error("Invalid {table} row: {source}")]
    Decode {
        table: Table,
        source: serde_json::Error,
    },

    #[error("No {table} record with id {id}")]
    NotFound { table: Table, id: RecordId },

    #[error(transparent)]
    Checklist(#[from] ChecklistError),
}

impl WellnessError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// True for failures detected before the store was contacted
    pub fn is_validation(&self) -> bool {
        match self {
            WellnessError::Validation(_) => true,
            WellnessError::Checklist(e) => e.is_validation(),
            _ => false,
        }
    }
}
