//! Command-line argument parsing and handling.

pub mod definition;
pub mod news;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::{apply_overrides, determine_log_level, initial_city};
