use crate::error::WellnessError;
use crate::form::{filled, parse_date, string_or_number};
use crate::history::most_recent;
use crate::models::{NewWeightEntry, WeightEntry};
use crate::owner::OwnerId;
use crate::records::{from_row, from_rows, to_row};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use wellness_store::{Order, Query, RecordStore, Table};

pub const WEIGHT_SAVED: &str = "Weight saved successfully!";

/// Submitted weight form. Both fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightForm {
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

pub struct WeightTracker {
    store: Arc<dyn RecordStore>,
}

impl WeightTracker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, owner: &OwnerId, form: &WeightForm) -> Result<WeightEntry, WellnessError> {
        let (weight, date) = match (filled(&form.weight), filled(&form.date)) {
            (Some(weight), Some(date)) => (weight, date),
            _ => return Err(WellnessError::validation("Please fill in both weight and date")),
        };

        let weight: f64 = weight
            .parse()
            .ok()
            .filter(|w: &f64| w.is_finite())
            .ok_or_else(|| WellnessError::validation(format!("Weight must be a number, got \"{weight}\"")))?;
        let date_recorded = parse_date(date)?;

        let row = to_row(&NewWeightEntry {
            user_id: *owner,
            weight,
            date_recorded,
            notes: "",
        })
        .map_err(|source| WellnessError::Decode {
            table: Table::WeightEntries,
            source,
        })?;

        let stored = self
            .store
            .insert(Table::WeightEntries, row)
            .await
            .map_err(|source| WellnessError::StoreWrite {
                table: Table::WeightEntries,
                source,
            })?;

        info!(owner = %owner, weight, date = %date_recorded, "Saved weight entry");

        from_row(stored).map_err(|source| WellnessError::Decode {
            table: Table::WeightEntries,
            source,
        })
    }

    /// The five most recent entries, newest first
    pub async fn history(&self, owner: &OwnerId) -> Result<Vec<WeightEntry>, WellnessError> {
        let query = Query::new()
            .eq("user_id", owner.as_value())
            .order_by(Order::desc("date_recorded"));

        let rows = self
            .store
            .select(Table::WeightEntries, &query)
            .await
            .map_err(|source| WellnessError::StoreRead {
                table: Table::WeightEntries,
                source,
            })?;

        let entries = from_rows(rows).map_err(|source| WellnessError::Decode {
            table: Table::WeightEntries,
            source,
        })?;

        Ok(most_recent(entries))
    }
}
