use crate::query::{Filter, Query, Row, Table};
use crate::{RecordStore, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    rows: HashMap<Table, Vec<Row>>,
    next_id: i64,
}

/// Process-local store. Inserted rows get an integer `id` and a
/// `created_at` timestamp when the caller did not supply them, the way the
/// hosted tables fill their defaults.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held in `table`
    pub fn len(&self, table: Table) -> usize {
        self.lock()
            .map(|t| t.rows.get(&table).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, table: Table) -> bool {
        self.len(table) == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|e| StoreError::operation_failed(format!("Lock error: {}", e)))
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        let tables = self.lock()?;
        let mut rows: Vec<Row> = tables
            .rows
            .get(&table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        Ok(rows)
    }

    async fn insert(&self, table: Table, mut row: Row) -> Result<Row, StoreError> {
        let mut tables = self.lock()?;
        tables.next_id += 1;
        let id = tables.next_id;

        row.entry("id").or_insert_with(|| Value::from(id));
        row.entry("created_at")
            .or_insert_with(|| Value::from(chrono::Utc::now().to_rfc3339()));

        tables.rows.entry(table).or_default().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        table: Table,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, StoreError> {
        let mut tables = self.lock()?;
        let mut updated = Vec::new();

        if let Some(rows) = tables.rows.get_mut(&table) {
            for row in rows
                .iter_mut()
                .filter(|r| filters.iter().all(|f| f.matches(r)))
            {
                for (column, value) in &patch {
                    row.insert(column.clone(), value.clone());
                }
                updated.push(row.clone());
            }
        }

        Ok(updated)
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
