//! Quest game client library.
//!
//! Holds everything the `quest` binary assembles: environment configuration,
//! logging, platform directories and the menu frontend. The binary itself
//! only wires these together.

pub mod app;
pub mod config;
pub mod dirs;
pub mod logging;

pub use app::{App, Console, Content};
pub use config::ClientConfig;
