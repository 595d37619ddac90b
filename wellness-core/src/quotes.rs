use crate::error::WellnessError;
use crate::form::filled;
use crate::models::{NewQuote, Quote, QuoteCategory};
use crate::records::{from_row, from_rows, to_row};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};
use wellness_store::{Filter, Order, Query, RecordId, RecordStore, Row, Table};

pub const QUOTE_SAVED: &str = "Quote saved successfully!";

/// Shown when the collection has no active quotes
pub fn welcome_quote() -> Quote {
    Quote {
        id: None,
        quote_text: "Welcome to your wellness journey! Start by adding some inspirational quotes."
            .to_string(),
        author: Some("Your Wellness App".to_string()),
        category: QuoteCategory::Motivation,
        is_active: true,
        created_at: None,
    }
}

/// Submitted quote form. Author is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub quote_text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// The shared quote collection (not owner scoped)
pub struct QuoteBook {
    store: Arc<dyn RecordStore>,
}

impl QuoteBook {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Quotes newest first; inactive ones only when asked for
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Quote>, WellnessError> {
        let mut query = Query::new().order_by(Order::desc("created_at"));
        if !include_inactive {
            query = query.eq("is_active", true);
        }
        self.select(&query).await
    }

    /// A uniformly chosen active quote, or the welcome quote when none exist
    pub async fn random(&self) -> Result<Quote, WellnessError> {
        let active = self.select(&Query::new().eq("is_active", true)).await?;
        debug!(count = active.len(), "Picking random quote");
        Ok(pick_quote(&active, &mut rand::thread_rng()))
    }

    pub async fn save(&self, form: &QuoteForm) -> Result<Quote, WellnessError> {
        let (quote_text, category) = match (filled(&form.quote_text), filled(&form.category)) {
            (Some(text), Some(category)) => (text, category),
            _ => return Err(WellnessError::validation("Please fill in quote text and category")),
        };
        let category: QuoteCategory = category.parse().map_err(WellnessError::Validation)?;

        let row = to_row(&NewQuote {
            quote_text,
            author: filled(&form.author),
            category,
            is_active: true,
        })
        .map_err(|source| WellnessError::Decode {
            table: Table::Quotes,
            source,
        })?;

        let stored = self
            .store
            .insert(Table::Quotes, row)
            .await
            .map_err(|source| WellnessError::StoreWrite {
                table: Table::Quotes,
                source,
            })?;

        info!(category = %category, "Saved quote");
        decode(stored)
    }

    /// Flip the active flag of a quote and return it as stored
    pub async fn toggle_active(&self, id: &RecordId) -> Result<Quote, WellnessError> {
        let current = self
            .select(&Query::new().eq("id", id.to_value()))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WellnessError::NotFound {
                table: Table::Quotes,
                id: id.clone(),
            })?;

        let mut patch = Row::new();
        patch.insert("is_active".to_string(), json!(!current.is_active));

        let updated = self
            .store
            .update(Table::Quotes, &[Filter::eq("id", id.to_value())], patch)
            .await
            .map_err(|source| WellnessError::StoreWrite {
                table: Table::Quotes,
                source,
            })?;

        info!(quote_id = %id, is_active = !current.is_active, "Toggled quote");

        match updated.into_iter().next() {
            Some(row) => decode(row),
            None => Err(WellnessError::NotFound {
                table: Table::Quotes,
                id: id.clone(),
            }),
        }
    }

    async fn select(&self, query: &Query) -> Result<Vec<Quote>, WellnessError> {
        let rows = self
            .store
            .select(Table::Quotes, query)
            .await
            .map_err(|source| WellnessError::StoreRead {
                table: Table::Quotes,
                source,
            })?;

        from_rows(rows).map_err(|source| WellnessError::Decode {
            table: Table::Quotes,
            source,
        })
    }
}

fn decode(row: Row) -> Result<Quote, WellnessError> {
    from_row(row).map_err(|source| WellnessError::Decode {
        table: Table::Quotes,
        source,
    })
}

/// Choose one of `quotes` at random, falling back to [`welcome_quote`]
pub fn pick_quote<R: Rng + ?Sized>(quotes: &[Quote], rng: &mut R) -> Quote {
    quotes.choose(rng).cloned().unwrap_or_else(welcome_quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use wellness_store::InMemoryStore;

    fn form(text: &str, author: Option<&str>, category: &str) -> QuoteForm {
        QuoteForm {
            quote_text: Some(text.to_string()),
            author: author.map(String::from),
            category: Some(category.to_string()),
        }
    }

    #[tokio::test]
    async fn test_random_falls_back_to_welcome_quote() {
        let book = QuoteBook::new(Arc::new(InMemoryStore::new()));
        let quote = book.random().await.unwrap();
        assert_eq!(quote, welcome_quote());
        assert_eq!(quote.author.as_deref(), Some("Your Wellness App"));
    }

    #[tokio::test]
    async fn test_save_requires_text_and_category() {
        let store = InMemoryStore::new();
        let book = QuoteBook::new(Arc::new(store.clone()));

        let err = book
            .save(&QuoteForm {
                quote_text: Some("Keep going".to_string()),
                author: None,
                category: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please fill in quote text and category");
        assert!(store.is_empty(Table::Quotes));
    }

    #[tokio::test]
    async fn test_blank_author_stored_as_null() {
        let book = QuoteBook::new(Arc::new(InMemoryStore::new()));
        let quote = book
            .save(&form("One step at a time.", Some("  "), "motivation"))
            .await
            .unwrap();

        assert_eq!(quote.author, None);
        assert!(quote.is_active);
        assert!(quote.id.is_some());
    }

    #[tokio::test]
    async fn test_toggle_hides_quote_from_active_list() {
        let book = QuoteBook::new(Arc::new(InMemoryStore::new()));
        let first = book.save(&form("Rest is productive.", None, "wellness")).await.unwrap();
        book.save(&form("Drink water.", Some("Coach"), "nutrition")).await.unwrap();

        let id = first.id.clone().unwrap();
        let toggled = book.toggle_active(&id).await.unwrap();
        assert!(!toggled.is_active);

        let active = book.list(false).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].quote_text, "Drink water.");
        assert_eq!(book.list(true).await.unwrap().len(), 2);

        let restored = book.toggle_active(&id).await.unwrap();
        assert!(restored.is_active);
    }

    #[tokio::test]
    async fn test_toggle_unknown_quote() {
        let book = QuoteBook::new(Arc::new(InMemoryStore::new()));
        let err = book.toggle_active(&RecordId::Int(404)).await.unwrap_err();
        assert!(matches!(err, WellnessError::NotFound { .. }));
    }

    #[test]
    fn test_pick_quote_uses_rng() {
        let quotes = vec![
            Quote {
                id: Some(RecordId::Int(1)),
                quote_text: "a".to_string(),
                author: None,
                category: QuoteCategory::Exercise,
                is_active: true,
                created_at: None,
            },
            Quote {
                id: Some(RecordId::Int(2)),
                quote_text: "b".to_string(),
                author: None,
                category: QuoteCategory::Mindfulness,
                is_active: true,
                created_at: None,
            },
        ];

        let mut rng = StepRng::new(0, 0);
        let picked = pick_quote(&quotes, &mut rng);
        assert!(quotes.contains(&picked));
        assert_eq!(pick_quote(&[], &mut rng), welcome_quote());
    }
}
