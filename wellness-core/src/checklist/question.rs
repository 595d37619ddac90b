use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of daily wellness questions, in display order.
/// Stored in `daily_checklist.question` as their full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Question {
    #[serde(rename = "Did you drink enough water today?")]
    Hydration,
    #[serde(rename = "Did you exercise or move your body today?")]
    Movement,
    #[serde(rename = "Did you get enough sleep last night?")]
    Sleep,
    #[serde(rename = "Did you eat nutritious meals today?")]
    Nutrition,
    #[serde(rename = "Did you take time for mindfulness or relaxation?")]
    Mindfulness,
    #[serde(rename = "Did you take your vitamins/supplements?")]
    Supplements,
}

impl Question {
    pub const ALL: [Question; 6] = [
        Question::Hydration,
        Question::Movement,
        Question::Sleep,
        Question::Nutrition,
        Question::Mindfulness,
        Question::Supplements,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            Question::Hydration => "Did you drink enough water today?",
            Question::Movement => "Did you exercise or move your body today?",
            Question::Sleep => "Did you get enough sleep last night?",
            Question::Nutrition => "Did you eat nutritious meals today?",
            Question::Mindfulness => "Did you take time for mindfulness or relaxation?",
            Question::Supplements => "Did you take your vitamins/supplements?",
        }
    }

    /// Exact match on the stored text, the same comparison the store applies
    /// when filtering on `question`
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.text() == text)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
