//! Store whose writes block until the test releases them.

use std::sync::Arc;

use async_trait::async_trait;
use spotlight::{KeyValueStore, MemoryStore, StoreError};
use tokio::sync::Notify;

#[derive(Default)]
pub struct GatedStore {
    inner: MemoryStore,
    entered: Notify,
    release: Notify,
}

impl GatedStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Resolves once a write is parked at the gate.
    pub async fn wait_for_write(&self) {
        self.entered.notified().await;
    }

    /// Let one parked write through.
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.raw(key)
    }
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.set(key, value).await
    }
}
