//! Configuration module for filecloner
//!
//! All configuration comes from CLI flags. It is validated once at startup
//! into an immutable [`WatchConfig`]:
//! 1. Source and target must exist and be directories
//! 2. Both are canonicalized to absolute paths
//! 3. The optional filter pattern must compile

mod filter;
#[cfg(test)]
mod tests;
mod types;

pub use filter::PathFilter;
pub use types::WatchConfig;
