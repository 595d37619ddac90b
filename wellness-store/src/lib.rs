//! # Wellness Store
//!
//! Table-oriented record storage for the wellness tracker. The
//! [`RecordStore`] trait models the handful of operations the trackers need
//! (filtered select, insert, filtered update); [`SupabaseStore`] talks to a
//! hosted PostgREST database and [`InMemoryStore`] keeps everything in
//! process for tests and local runs.
//!
//! ```rust,no_run
//! use wellness_store::{Query, RecordStore, SupabaseStore, Table};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SupabaseStore::new("https://project.supabase.co", "anon-key")?;
//!     let rows = store
//!         .select(Table::Quotes, &Query::new().eq("is_active", true))
//!         .await?;
//!     println!("{} active quotes", rows.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

pub mod error;
mod memory;
pub mod query;
pub mod supabase;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use query::{Filter, Order, Query, RecordId, Row, Table};
pub use supabase::SupabaseStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Rows of `table` matching every filter in `query`, in the requested order
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError>;

    /// Insert a single row and return it as stored, including generated columns
    async fn insert(&self, table: Table, row: Row) -> Result<Row, StoreError>;

    /// Apply `patch` to every row matching `filters` and return the updated rows
    async fn update(
        &self,
        table: Table,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, StoreError>;
}
