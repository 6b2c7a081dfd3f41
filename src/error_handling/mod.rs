//! Error handling.
//!
//! Error taxonomy:
//! - **Not found**: expected negative answer, not an error (`QueryError::NoRecords`,
//!   `QueryError::NxDomain`)
//! - **Lookup errors**: resolver failures, contained per record (`QueryError::Failed`)
//! - **Configuration errors**: missing or unreadable input, fatal to the run (`InputError`)
//! - **Initialization errors**: logger setup (`InitializationError`)

mod types;

// Re-export public API
pub use types::{InitializationError, InputError, QueryError};
