//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate.

pub mod errors;
pub mod providers;

pub use errors::{Result, SessionError};
pub use providers::{ActionProvider, BasicAttackProvider, ScriptedActionProvider};
