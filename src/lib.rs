//! Library entry for localnews exposing the runtime and core logic for integration tests.

pub mod app;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
