use crate::error::WellnessError;
use crate::form::{filled, parse_date};
use crate::history::most_recent;
use crate::models::{FoodEntry, MealType, NewFoodEntry};
use crate::owner::OwnerId;
use crate::records::{from_row, from_rows, to_row};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use wellness_store::{Order, Query, RecordStore, Table};

pub const FOOD_SAVED: &str = "Food entry saved successfully!";

/// Submitted food diary form. Notes are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodForm {
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub food_description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub struct FoodTracker {
    store: Arc<dyn RecordStore>,
}

impl FoodTracker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, owner: &OwnerId, form: &FoodForm) -> Result<FoodEntry, WellnessError> {
        let (meal_type, food_description, date) = match (
            filled(&form.meal_type),
            filled(&form.food_description),
            filled(&form.date),
        ) {
            (Some(meal_type), Some(description), Some(date)) => (meal_type, description, date),
            _ => {
                return Err(WellnessError::validation(
                    "Please fill in meal type, food description, and date",
                ))
            }
        };

        let meal_type: MealType = meal_type.parse().map_err(WellnessError::Validation)?;
        let date_recorded = parse_date(date)?;

        let row = to_row(&NewFoodEntry {
            user_id: *owner,
            meal_type,
            food_description,
            date_recorded,
            notes: form.notes.as_deref().map(str::trim).unwrap_or(""),
        })
        .map_err(|source| WellnessError::Decode {
            table: Table::FoodDiary,
            source,
        })?;

        let stored = self
            .store
            .insert(Table::FoodDiary, row)
            .await
            .map_err(|source| WellnessError::StoreWrite {
                table: Table::FoodDiary,
                source,
            })?;

        info!(owner = %owner, meal_type = %meal_type, date = %date_recorded, "Saved food entry");

        from_row(stored).map_err(|source| WellnessError::Decode {
            table: Table::FoodDiary,
            source,
        })
    }

    /// The five most recent meals, newest first
    pub async fn history(&self, owner: &OwnerId) -> Result<Vec<FoodEntry>, WellnessError> {
        let query = Query::new()
            .eq("user_id", owner.as_value())
            .order_by(Order::desc("date_recorded"));

        let rows = self
            .store
            .select(Table::FoodDiary, &query)
            .await
            .map_err(|source| WellnessError::StoreRead {
                table: Table::FoodDiary,
                source,
            })?;

        let entries = from_rows(rows).map_err(|source| WellnessError::Decode {
            table: Table::FoodDiary,
            source,
        })?;

        Ok(most_recent(entries))
    }
}
