use serde_json::Value;

use super::action::{
    Action, DECREMENT, DECREMENT_BY_AMOUNT, INCREMENT, INCREMENT_BY_AMOUNT,
};

/// A typed state transition for the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    DecrementByAmount(i64),
}

impl Operation {
    /// Action creator: the untyped `{type, payload}` form of this operation.
    pub fn to_action(&self) -> Action {
        match *self {
            Operation::Increment => Action::new(INCREMENT, None),
            Operation::Decrement => Action::new(DECREMENT, None),
            Operation::IncrementByAmount(amount) => {
                Action::new(INCREMENT_BY_AMOUNT, Some(Value::from(amount)))
            }
            Operation::DecrementByAmount(amount) => {
                Action::new(DECREMENT_BY_AMOUNT, Some(Value::from(amount)))
            }
        }
    }
}
