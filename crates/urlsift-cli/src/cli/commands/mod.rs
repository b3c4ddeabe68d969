//! CLI command handlers, one per file.

mod filter;
mod inspect;

pub use filter::run_filter;
pub use inspect::run_inspect;
