pub mod action;
pub mod operation;

use tracing::instrument;

pub use action::Action;
pub use operation::Operation;

/// The whole application state: one signed integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn new(initial_value: i64) -> Self {
        tracing::debug!("Creating counter state with initial value: {}", initial_value);
        Self { value: initial_value }
    }
}

/// Pure transition function. Arithmetic wraps on overflow.
#[instrument(name = "reduce_counter", level = "trace")]
pub fn reduce(state: CounterState, operation: Operation) -> CounterState {
    let value = match operation {
        Operation::Increment => state.value.wrapping_add(1),
        Operation::Decrement => state.value.wrapping_sub(1),
        Operation::IncrementByAmount(amount) => state.value.wrapping_add(amount),
        Operation::DecrementByAmount(amount) => state.value.wrapping_sub(amount),
    };
    CounterState { value }
}

pub fn select_count(state: &CounterState) -> i64 {
    state.value
}
