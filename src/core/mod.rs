pub mod counter;
pub mod error;
pub mod store;

pub use error::StoreError;
