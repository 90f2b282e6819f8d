//! Terminal application: runtime, workers and terminal lifecycle.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
