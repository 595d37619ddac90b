//! Domain logic for the wellness tracker: weight log, food diary, quote
//! collection and the daily checklist, all persisted through a
//! [`wellness_store::RecordStore`].

pub mod checklist;
pub mod error;
pub mod food;
pub mod form;
pub mod history;
pub mod models;
pub mod owner;
pub mod quotes;
pub mod records;
pub mod weight;

pub use checklist::{
    Answers, ChecklistError, ChecklistReconciler, ChecklistSession, Question, ReconcileReport,
};
pub use error::WellnessError;
pub use food::{FoodForm, FoodTracker};
pub use models::{ChecklistEntry, FoodEntry, MealType, Quote, QuoteCategory, WeightEntry};
pub use owner::OwnerId;
pub use quotes::{QuoteBook, QuoteForm};
pub use weight::{WeightForm, WeightTracker};
