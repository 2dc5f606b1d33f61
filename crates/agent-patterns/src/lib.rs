//! Ready-made reflection and tool-use agents.
//!
//! The crate includes a CLI tool for using in the terminal. It can also be
//! used as a library, bringing the built-in tools and the environment based
//! provider settings into your own host apps.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod settings;
pub mod tools;

pub use settings::{Settings, SettingsError};

/// Re-exports of [`agent_patterns_core`] crate.
pub mod core {
    pub use agent_patterns_core::*;
}
