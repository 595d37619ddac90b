use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    error::StoreError,
    query::{Filter, Query, Row, Table},
    supabase::types::PostgrestErrorResponse,
    RecordStore,
};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Record store backed by a hosted Supabase project, spoken to through its
/// PostgREST endpoint (`{base_url}/rest/v1/{table}`).
pub struct SupabaseStore {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl SupabaseStore {
    /// Create a client for the project at `base_url` using its anon key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        Self::with_timeout(base_url, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(StoreError::authentication("API key cannot be empty"));
        }

        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(StoreError::invalid_request("Base URL cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.as_str())
    }

    fn headers(&self, return_representation: bool) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| StoreError::authentication("Invalid API key format"))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| StoreError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if return_representation {
            headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        }
        Ok(headers)
    }

    async fn read_rows(&self, table: Table, response: reqwest::Response) -> Result<Vec<Row>, StoreError> {
        let status = response.status();
        debug!(table = %table, status = status.as_u16(), "Store response");

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            let rows: Vec<Row> = serde_json::from_str(&text)?;
            return Ok(rows);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match serde_json::from_str::<PostgrestErrorResponse>(&error_text) {
            Ok(error_response) => error_response.describe(),
            Err(_) => error_text,
        };

        warn!(table = %table, status = status.as_u16(), error = %message, "Store request failed");

        match status {
            reqwest::StatusCode::BAD_REQUEST => Err(StoreError::invalid_request(message)),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(StoreError::authentication(message))
            }
            _ => Err(StoreError::api_error(status.as_u16(), message)),
        }
    }
}

fn filter_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|f| (f.column.clone(), f.to_postgrest()))
        .collect()
}

#[async_trait::async_trait]
impl RecordStore for SupabaseStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(filter_params(&query.filters));
        if let Some(order) = &query.order {
            params.push(("order".to_string(), order.to_postgrest()));
        }

        let response = self
            .http_client
            .get(self.table_url(table))
            .headers(self.headers(false)?)
            .query(&params)
            .send()
            .await
            .map_err(|e| StoreError::Network { source: e })?;

        self.read_rows(table, response).await
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row, StoreError> {
        let response = self
            .http_client
            .post(self.table_url(table))
            .headers(self.headers(true)?)
            .json(&vec![row])
            .send()
            .await
            .map_err(|e| StoreError::Network { source: e })?;

        self.read_rows(table, response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::operation_failed(format!("Insert into {} returned no rows", table)))
    }

    async fn update(
        &self,
        table: Table,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, StoreError> {
        let response = self
            .http_client
            .patch(self.table_url(table))
            .headers(self.headers(true)?)
            .query(&filter_params(filters))
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::Network { source: e })?;

        self.read_rows(table, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = SupabaseStore::new("https://example.supabase.co", "");
        assert!(matches!(result, Err(StoreError::Authentication { .. })));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let store = SupabaseStore::new("https://example.supabase.co/", "key").unwrap();
        assert_eq!(store.base_url(), "https://example.supabase.co");
        assert_eq!(
            store.table_url(Table::DailyChecklist),
            "https://example.supabase.co/rest/v1/daily_checklist"
        );
    }
}
