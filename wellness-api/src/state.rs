use crate::config::{ApiConfig, StoreBackend};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wellness_core::OwnerId;
use wellness_store::{InMemoryStore, RecordStore, SupabaseStore};

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub owner: OwnerId,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, owner: OwnerId) -> Self {
        Self { store, owner }
    }

    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let owner = config.owner_id()?;
        let store = build_store(config)?;
        info!(owner = %owner, backend = ?config.store.backend, "Record store ready");
        Ok(Self { store, owner })
    }
}

fn build_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store; records are lost on shutdown");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreBackend::Supabase => {
            let Some(url) = config.store.url.as_deref() else {
                anyhow::bail!("store.url is not set (or set SUPABASE_URL)");
            };
            let Some(anon_key) = config.store.anon_key.as_deref() else {
                anyhow::bail!("store.anon_key is not set (or set SUPABASE_ANON_KEY)");
            };
            let store = SupabaseStore::with_timeout(
                url,
                anon_key,
                Duration::from_secs(config.store.timeout_secs),
            )?;
            Ok(Arc::new(store))
        }
    }
}
