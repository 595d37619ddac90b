use serde::Deserialize;

/// Error body returned by PostgREST on non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestErrorResponse {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestErrorResponse {
    /// Message with the error code and details appended when present
    pub fn describe(&self) -> String {
        let mut text = self.message.clone();
        if let Some(code) = &self.code {
            text.push_str(&format!(" ({code})"));
        }
        if let Some(details) = &self.details {
            text.push_str(&format!(": {details}"));
        }
        text
    }
}
