use super::{Answers, ChecklistError, Question};
use crate::models::ChecklistEntry;
use crate::owner::OwnerId;
use crate::records::{from_rows, to_row};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wellness_store::{Filter, Query, RecordStore, Row, StoreError, Table};

pub const NOTHING_TO_SAVE: &str = "Please answer at least one question before saving.";

/// What a successful reconcile did, per question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub inserted: Vec<Question>,
    pub updated: Vec<Question>,
    pub unchanged: Vec<Question>,
}

impl ReconcileReport {
    /// Number of insert and update calls issued
    pub fn writes(&self) -> usize {
        self.inserted.len() + self.updated.len()
    }

    fn applied(&self) -> Vec<Question> {
        let mut applied: Vec<Question> = self
            .inserted
            .iter()
            .chain(self.updated.iter())
            .copied()
            .collect();
        applied.sort();
        applied
    }
}

enum Outcome {
    Inserted,
    Updated,
    Unchanged,
}

#[derive(Serialize)]
struct NewChecklistAnswer<'a> {
    user_id: OwnerId,
    question: &'a str,
    answer: bool,
    date_recorded: NaiveDate,
    notes: &'a str,
}

/// Brings the stored `daily_checklist` rows of one date in line with a set
/// of answers, one question at a time.
#[derive(Clone)]
pub struct ChecklistReconciler {
    store: Arc<dyn RecordStore>,
}

impl ChecklistReconciler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Saved answers for `date`. Rows with unrecognised question text are
    /// skipped.
    pub async fn load(&self, owner: &OwnerId, date: NaiveDate) -> Result<Answers, ChecklistError> {
        let query = Query::new()
            .eq("user_id", owner.as_value())
            .eq("date_recorded", date.to_string());

        let rows = self
            .store
            .select(Table::DailyChecklist, &query)
            .await
            .map_err(|source| ChecklistError::Load { date, source })?;

        let entries: Vec<ChecklistEntry> = from_rows(rows)?;
        let mut answers = Answers::new();
        for entry in entries {
            match Question::from_text(&entry.question) {
                Some(question) => {
                    answers.insert(question, entry.answer);
                }
                None => warn!(question = %entry.question, date = %date, "Ignoring unknown checklist question"),
            }
        }

        debug!(owner = %owner, date = %date, answered = answers.len(), "Loaded checklist");
        Ok(answers)
    }

    /// Insert missing answers and update changed ones. Stops at the first
    /// store failure; earlier writes are not rolled back.
    pub async fn reconcile(
        &self,
        owner: &OwnerId,
        date: NaiveDate,
        answers: &Answers,
    ) -> Result<ReconcileReport, ChecklistError> {
        if answers.is_empty() {
            return Err(ChecklistError::Validation(NOTHING_TO_SAVE.to_string()));
        }

        let mut report = ReconcileReport::default();
        for (&question, &answer) in answers {
            match self.reconcile_one(owner, date, question, answer, &report).await? {
                Outcome::Inserted => report.inserted.push(question),
                Outcome::Updated => report.updated.push(question),
                Outcome::Unchanged => report.unchanged.push(question),
            }
        }

        info!(
            owner = %owner,
            date = %date,
            inserted = report.inserted.len(),
            updated = report.updated.len(),
            unchanged = report.unchanged.len(),
            "Checklist saved"
        );
        Ok(report)
    }

    async fn reconcile_one(
        &self,
        owner: &OwnerId,
        date: NaiveDate,
        question: Question,
        answer: bool,
        report: &ReconcileReport,
    ) -> Result<Outcome, ChecklistError> {
        let read_failed = |source: StoreError| ChecklistError::StoreRead {
            question,
            applied: report.applied(),
            source,
        };
        let write_failed = |source: StoreError| ChecklistError::StoreWrite {
            question,
            applied: report.applied(),
            source,
        };

        let query = Query::new()
            .eq("user_id", owner.as_value())
            .eq("date_recorded", date.to_string())
            .eq("question", question.text());

        let rows = self
            .store
            .select(Table::DailyChecklist, &query)
            .await
            .map_err(read_failed)?;
        let existing: Vec<ChecklistEntry> =
            from_rows(rows).map_err(|e| read_failed(StoreError::from(e)))?;

        let Some(current) = existing.into_iter().next() else {
            let row = to_row(&NewChecklistAnswer {
                user_id: *owner,
                question: question.text(),
                answer,
                date_recorded: date,
                notes: "",
            })
            .map_err(|e| write_failed(StoreError::from(e)))?;
            self.store
                .insert(Table::DailyChecklist, row)
                .await
                .map_err(write_failed)?;
            debug!(question = %question, answer, "Inserted checklist answer");
            return Ok(Outcome::Inserted);
        };

        if current.answer == answer {
            return Ok(Outcome::Unchanged);
        }

        let mut patch = Row::new();
        patch.insert("answer".to_string(), json!(answer));
        patch.insert("created_at".to_string(), json!(Utc::now().to_rfc3339()));

        let updated = self
            .store
            .update(
                Table::DailyChecklist,
                &[Filter::eq("id", current.id.to_value())],
                patch,
            )
            .await
            .map_err(write_failed)?;

        if updated.is_empty() {
            return Err(write_failed(StoreError::operation_failed(format!(
                "checklist row {} disappeared before update",
                current.id
            ))));
        }

        debug!(question = %question, from = current.answer, to = answer, "Updated checklist answer");
        Ok(Outcome::Updated)
    }
}
