//! Core logic of the reflection and tool-use agent patterns: the completion
//! gateway, conversations, the tool registry and both orchestrators.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod completion;
pub mod conversation;
mod error;
pub mod prompts;
pub mod reflection;
pub mod tool;
pub mod tool_use;

pub use completion::{Completion, CompletionGateway, CompletionOptions};
pub use conversation::Conversation;
pub use error::{Error, Result};
pub use reflection::{
    ApprovalMatch, ReflectionOrchestrator, ReflectionOrchestratorBuilder,
    ReflectionVerdict,
};
pub use tool::{Tool, ToolDescriptor, ToolRegistry, ToolRegistryBuilder};
pub use tool_use::{ToolOrchestrator, ToolOrchestratorBuilder};

/// Re-exports of the provider protocol crate.
pub mod model {
    pub use agent_patterns_model::*;
}
