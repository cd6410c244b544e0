use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::error::StoreError;

use super::{CounterStore, IntoOperation, Subscription};

/// Cloneable handle to a [`CounterStore`] shared between tasks. Every call
/// takes the lock, so operations are applied one at a time.
#[derive(Clone, Default)]
pub struct SharedCounterStore {
    inner: Arc<Mutex<CounterStore>>,
}

impl SharedCounterStore {
    pub fn new(store: CounterStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn value(&self) -> i64 {
        self.inner.lock().await.value()
    }

    pub async fn apply(&self, operation: impl IntoOperation) -> Result<i64, StoreError> {
        let mut store = self.inner.lock().await;
        store.apply(operation)
    }

    pub async fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(i64) + Send + Sync + 'static,
    {
        self.inner.lock().await.subscribe(listener)
    }

    pub async fn listener_count(&self) -> usize {
        self.inner.lock().await.listener_count()
    }
}
