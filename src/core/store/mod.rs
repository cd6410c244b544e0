pub mod listener;
pub mod shared;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, instrument, warn};

use crate::core::counter::{reduce, select_count, Action, CounterState, Operation};
use crate::core::error::StoreError;

use listener::ListenerRegistry;
pub use listener::Subscription;
pub use shared::SharedCounterStore;

/// Anything `CounterStore::apply` accepts: a typed operation, or an untyped
/// action that still has to be validated.
pub trait IntoOperation {
    fn into_operation(self) -> Result<Operation, StoreError>;
}

impl IntoOperation for Operation {
    fn into_operation(self) -> Result<Operation, StoreError> {
        Ok(self)
    }
}

impl IntoOperation for Action {
    fn into_operation(self) -> Result<Operation, StoreError> {
        self.to_operation()
    }
}

impl IntoOperation for &Action {
    fn into_operation(self) -> Result<Operation, StoreError> {
        self.to_operation()
    }
}

/// Holds the counter state and notifies listeners after every committed
/// transition.
#[derive(Default)]
pub struct CounterStore {
    state: CounterState,
    listeners: Arc<Mutex<ListenerRegistry>>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::with_state(CounterState::default())
    }

    pub fn with_state(state: CounterState) -> Self {
        info!("Creating counter store with value: {}", state.value);
        Self {
            state,
            listeners: Arc::default(),
        }
    }

    pub fn value(&self) -> i64 {
        select_count(&self.state)
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Validates `operation`, commits the reduced state and notifies
    /// listeners. On error nothing is committed and nobody is notified.
    #[instrument(name = "apply_operation", level = "debug", skip_all)]
    pub fn apply(&mut self, operation: impl IntoOperation) -> Result<i64, StoreError> {
        let operation = operation.into_operation().map_err(|e| {
            warn!("Rejected operation: {}", e);
            e
        })?;

        self.state = reduce(self.state, operation);
        info!("Applied {:?}, counter is now: {}", operation, self.state.value);

        self.notify();
        Ok(self.state.value)
    }

    /// Registers `listener`; it runs after every successful `apply`, in
    /// subscription order.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(i64) + Send + Sync + 'static,
    {
        let id = self.listeners.lock().insert(Arc::new(listener));
        tracing::debug!("Listener {} subscribed", id);
        Subscription::new(id, &self.listeners)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn notify(&self) {
        let listeners = self.listeners.lock().snapshot();
        let value = self.state.value;
        for listener in listeners {
            listener(value);
        }
    }
}
