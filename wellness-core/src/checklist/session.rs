use super::{Answers, ChecklistError, ChecklistReconciler, Question, ReconcileReport};
use crate::owner::OwnerId;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use wellness_store::RecordStore;

/// One question as the checklist form shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionState {
    pub question: Question,
    pub answer: Option<bool>,
    pub unsaved: bool,
}

/// Checklist editing state for one owner and one selected date.
///
/// `saved` mirrors the store for `date`; `pending` holds edits made since.
/// Changing the date or committing successfully clears `pending` and
/// reloads `saved` from the store.
pub struct ChecklistSession {
    reconciler: ChecklistReconciler,
    owner: OwnerId,
    date: NaiveDate,
    saved: Answers,
    pending: Answers,
}

impl ChecklistSession {
    pub async fn open(
        store: Arc<dyn RecordStore>,
        owner: OwnerId,
        date: NaiveDate,
    ) -> Result<Self, ChecklistError> {
        let reconciler = ChecklistReconciler::new(store);
        let saved = reconciler.load(&owner, date).await?;
        Ok(Self {
            reconciler,
            owner,
            date,
            saved,
            pending: Answers::new(),
        })
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn saved(&self) -> &Answers {
        &self.saved
    }

    pub fn pending(&self) -> &Answers {
        &self.pending
    }

    /// Switch to another date, discarding unsaved edits. On a load failure
    /// the session is left as it was.
    pub async fn select_date(&mut self, date: NaiveDate) -> Result<(), ChecklistError> {
        let saved = self.reconciler.load(&self.owner, date).await?;
        if !self.pending.is_empty() {
            debug!(date = %self.date, discarded = self.pending.len(), "Discarding unsaved checklist edits");
        }
        self.date = date;
        self.saved = saved;
        self.pending.clear();
        Ok(())
    }

    /// Record an answer locally; nothing is written until [`commit`](Self::commit)
    pub fn edit(&mut self, question: Question, answer: bool) {
        self.pending.insert(question, answer);
    }

    pub fn current_answer(&self, question: Question) -> Option<bool> {
        self.pending
            .get(&question)
            .or_else(|| self.saved.get(&question))
            .copied()
    }

    pub fn has_unsaved_change(&self, question: Question) -> bool {
        self.pending.contains_key(&question)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Saved answers overlaid with pending edits
    pub fn effective_answers(&self) -> Answers {
        let mut answers = self.saved.clone();
        answers.extend(self.pending.iter().map(|(q, a)| (*q, *a)));
        answers
    }

    /// Every question in display order with its current answer
    pub fn questions(&self) -> Vec<QuestionState> {
        Question::ALL
            .into_iter()
            .map(|question| QuestionState {
                question,
                answer: self.current_answer(question),
                unsaved: self.has_unsaved_change(question),
            })
            .collect()
    }

    /// Persist the effective answers. Pending edits survive a failed commit
    /// so it can be retried. Once the answers are stored the commit counts as
    /// successful; if reloading them fails, the committed answers become the
    /// saved state.
    pub async fn commit(&mut self) -> Result<ReconcileReport, ChecklistError> {
        let answers = self.effective_answers();
        let report = self
            .reconciler
            .reconcile(&self.owner, self.date, &answers)
            .await?;

        self.saved = match self.reconciler.load(&self.owner, self.date).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, date = %self.date, "Reload after checklist commit failed; keeping committed answers");
                answers
            }
        };
        self.pending.clear();
        Ok(report)
    }
}
