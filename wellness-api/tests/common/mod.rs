#![allow(dead_code)]

use actix_web::{test, web, App};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wellness_api::{configure_routes, AppState};
use wellness_core::OwnerId;
use wellness_store::{Filter, InMemoryStore, Query, RecordStore, Row, StoreError, Table};

pub struct TestApp<S> {
    pub store: Arc<FlakyStore>,
    pub app: S,
}

/// In-memory store that can be told to fail its n-th insert (0 based)
#[derive(Default)]
pub struct FlakyStore {
    pub inner: InMemoryStore,
    pub fail_insert_at: Option<usize>,
    inserts: Mutex<usize>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_insert_at(index: usize) -> Self {
        Self {
            fail_insert_at: Some(index),
            ..Self::default()
        }
    }

    pub fn insert_count(&self) -> usize {
        *self.inserts.lock().unwrap()
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, StoreError> {
        self.inner.select(table, query).await
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row, StoreError> {
        let index = {
            let mut inserts = self.inserts.lock().unwrap();
            let index = *inserts;
            *inserts += 1;
            index
        };
        if self.fail_insert_at == Some(index) {
            return Err(StoreError::api_error(503, "service unavailable".to_string()));
        }
        self.inner.insert(table, row).await
    }

    async fn update(
        &self,
        table: Table,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, StoreError> {
        self.inner.update(table, filters, patch).await
    }
}

pub async fn setup_test_app() -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    setup_test_app_with_store(FlakyStore::new()).await
}

pub async fn setup_test_app_with_store(
    store: FlakyStore,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let store = Arc::new(store);
    let state = AppState::new(store.clone() as Arc<dyn RecordStore>, OwnerId::default());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    TestApp { store, app }
}
