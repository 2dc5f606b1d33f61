//! An abstraction layer for chat-completion LLM providers.
//!
//! This crate establishes an unified protocol for the orchestrators to
//! talk to any OpenAI-style chat-completion endpoint, so that providers
//! can be swapped (or faked in tests) without touching the core logic.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod opaque;
mod provider;
mod request;
mod response;

pub use error::*;
pub use opaque::*;
pub use provider::*;
pub use request::*;
pub use response::*;
