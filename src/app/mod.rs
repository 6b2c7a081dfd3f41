//! Application-level input and terminal output.
//!
//! - Domain collection from the positional argument or a list file
//! - Console rendering of reports
//! - Startup banner

mod banner;
mod console;
mod input;

// Re-export public API
pub use banner::render_banner;
pub use console::{render_progress, render_report};
pub use input::{collect_domains, parse_domain_list};
