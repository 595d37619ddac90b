//! Daily yes/no wellness checklist.
//!
//! A [`ChecklistSession`] tracks the answers saved for the selected date and
//! the edits made since; committing hands the combined answers to the
//! [`ChecklistReconciler`], which inserts or updates one row per question.

mod error;
mod history;
mod question;
mod reconciler;
mod session;


use std::collections::BTreeMap;

pub use error::ChecklistError;
pub use history::checklist_entries;
pub use question::Question;
pub use reconciler::{ChecklistReconciler, ReconcileReport, NOTHING_TO_SAVE};
pub use session::{ChecklistSession, QuestionState};

/// Answers keyed by question, iterated in display order
pub type Answers = BTreeMap<Question, bool>;
