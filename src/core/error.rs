use thiserror::Error;

/// Errors surfaced to callers of the counter store and its decoders.
///
/// None of these leave the store in a modified state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An amount action carried something other than an `i64`.
    #[error("Invalid payload for '{action}': expected an integer amount, got {payload}")]
    InvalidPayload { action: String, payload: String },

    #[error("Unknown action type '{0}'")]
    UnknownAction(String),

    #[error("Malformed action: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}
