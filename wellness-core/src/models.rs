use crate::owner::OwnerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wellness_store::RecordId;

/// Row of the `weight_entries` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub id: RecordId,
    pub user_id: OwnerId,
    pub weight: f64,
    pub date_recorded: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewWeightEntry<'a> {
    pub user_id: OwnerId,
    pub weight: f64,
    pub date_recorded: NaiveDate,
    pub notes: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(format!("Unknown meal type: {other}")),
        }
    }
}

/// Row of the `food_diary` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    pub id: RecordId,
    pub user_id: OwnerId,
    pub meal_type: MealType,
    pub food_description: String,
    pub date_recorded: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewFoodEntry<'a> {
    pub user_id: OwnerId,
    pub meal_type: MealType,
    pub food_description: &'a str,
    pub date_recorded: NaiveDate,
    pub notes: &'a str,
}

/// Row of the `daily_checklist` table. The question is kept as stored text
/// so rows written by other clients still decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistEntry {
    pub id: RecordId,
    pub user_id: OwnerId,
    pub question: String,
    pub answer: bool,
    pub date_recorded: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCategory {
    Motivation,
    Meditation,
    Wellness,
    Nutrition,
    Mindfulness,
    Exercise,
}

impl QuoteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteCategory::Motivation => "motivation",
            QuoteCategory::Meditation => "meditation",
            QuoteCategory::Wellness => "wellness",
            QuoteCategory::Nutrition => "nutrition",
            QuoteCategory::Mindfulness => "mindfulness",
            QuoteCategory::Exercise => "exercise",
        }
    }
}

impl fmt::Display for QuoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "motivation" => Ok(QuoteCategory::Motivation),
            "meditation" => Ok(QuoteCategory::Meditation),
            "wellness" => Ok(QuoteCategory::Wellness),
            "nutrition" => Ok(QuoteCategory::Nutrition),
            "mindfulness" => Ok(QuoteCategory::Mindfulness),
            "exercise" => Ok(QuoteCategory::Exercise),
            other => Err(format!("Unknown quote category: {other}")),
        }
    }
}

/// Row of the `quotes` table. `id` is absent only for the built-in
/// welcome quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub quote_text: String,
    #[serde(default)]
    pub author: Option<String>,
    pub category: QuoteCategory,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewQuote<'a> {
    pub quote_text: &'a str,
    pub author: Option<&'a str>,
    pub category: QuoteCategory,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!("Lunch".parse::<MealType>().unwrap(), MealType::Lunch);
        assert!("brunch".parse::<MealType>().is_err());
        assert_eq!(serde_json::to_value(MealType::Snack).unwrap(), json!("snack"));
    }

    #[test]
    fn test_quote_without_author_decodes() {
        let quote: Quote = serde_json::from_value(json!({
            "id": "3f1c2a9e-1111-4222-8333-444455556666",
            "quote_text": "Breathe in, breathe out.",
            "author": null,
            "category": "meditation",
            "is_active": true,
            "created_at": "2024-01-15T08:00:00+00:00"
        }))
        .unwrap();

        assert_eq!(quote.author, None);
        assert_eq!(quote.category, QuoteCategory::Meditation);
        assert_eq!(
            quote.id,
            Some(RecordId::Text("3f1c2a9e-1111-4222-8333-444455556666".to_string()))
        );
    }

    #[test]
    fn test_weight_entry_decodes_store_row() {
        let entry: WeightEntry = serde_json::from_value(json!({
            "id": 12,
            "user_id": "550e8400-e29b-41d4-a716-446655440000",
            "weight": 72,
            "date_recorded": "2024-01-15",
            "notes": ""
        }))
        .unwrap();

        assert_eq!(entry.id, RecordId::Int(12));
        assert_eq!(entry.weight, 72.0);
        assert_eq!(entry.date_recorded, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(entry.created_at.is_none());
    }
}
