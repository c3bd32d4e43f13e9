pub mod browser;
pub mod config;
pub mod error;
pub mod favicon;
pub mod import_export;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export error types for convenience
pub use error::{LinkError, Result};
pub use store::LinkStore;
