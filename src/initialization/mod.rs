//! Application initialization and resource setup.
//!
//! - Logger (`env_logger` with plain or JSON formatting)
//! - DNS resolver

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
