use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::error::StoreError;

use super::operation::Operation;

pub const INCREMENT: &str = "counter/increment";
pub const DECREMENT: &str = "counter/decrement";
pub const INCREMENT_BY_AMOUNT: &str = "counter/incrementByAmount";
pub const DECREMENT_BY_AMOUNT: &str = "counter/decrementByAmount";

/// Untyped action object as dispatched by a presentation layer.
///
/// The payload is kept as raw JSON so that a non-integer amount can be
/// rejected with [`StoreError::InvalidPayload`] instead of being coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    pub fn new(kind: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let bytes = serde_json::to_vec(self).map_err(StoreError::Malformed)?;
        debug!("Serialized action: {:?}", self);
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let action: Action = serde_json::from_slice(bytes).map_err(StoreError::Malformed)?;
        debug!("Deserialized action: {:?}", action);
        Ok(action)
    }

    /// Validates the action into a typed [`Operation`].
    pub fn to_operation(&self) -> Result<Operation, StoreError> {
        match self.kind.as_str() {
            INCREMENT => Ok(Operation::Increment),
            DECREMENT => Ok(Operation::Decrement),
            INCREMENT_BY_AMOUNT => self.amount().map(Operation::IncrementByAmount),
            DECREMENT_BY_AMOUNT => self.amount().map(Operation::DecrementByAmount),
            other => Err(StoreError::UnknownAction(other.to_string())),
        }
    }

    fn amount(&self) -> Result<i64, StoreError> {
        self.payload
            .as_ref()
            .and_then(Value::as_i64)
            .ok_or_else(|| StoreError::InvalidPayload {
                action: self.kind.clone(),
                payload: self
                    .payload
                    .as_ref()
                    .map_or_else(|| "nothing".to_string(), Value::to_string),
            })
    }
}
