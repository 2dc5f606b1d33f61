use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::OpaqueMessage;

/// A request to be sent to the model provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelRequest {
    /// The input messages.
    pub messages: Vec<ModelMessage>,
    /// Tools that are available to the model.
    pub tools: Vec<ModelTool>,
    /// How the model may pick tools. Ignored when `tools` is empty.
    pub tool_choice: Option<ToolChoice>,
    /// Upper bound of tokens generated for this completion.
    pub max_completion_tokens: Option<u32>,
    /// Overrides the model configured in the provider.
    pub model: Option<String>,
}

impl ModelRequest {
    /// Creates a plain text request with the given messages.
    #[inline]
    pub fn with_messages(messages: Vec<ModelMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }
}

/// A complete message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelMessage {
    /// The system instructions.
    System(String),
    /// A user input text.
    User(String),
    /// An assistant text.
    Assistant(String),
    /// A tool call result.
    Tool(ToolCallResult),
    /// An opaque message (usually an assistant message carrying tool calls).
    Opaque(OpaqueMessage),
}

impl ModelMessage {
    /// Returns the role name of this message as used by chat APIs.
    pub fn role(&self) -> &'static str {
        match self {
            ModelMessage::System(_) => "system",
            ModelMessage::User(_) => "user",
            ModelMessage::Assistant(_) | ModelMessage::Opaque(_) => {
                "assistant"
            }
            ModelMessage::Tool(_) => "tool",
        }
    }
}

/// The result of calling a tool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolCallResult {
    /// The identifier of the tool call request this result answers.
    pub id: String,
    /// The name of the tool that was called.
    pub name: String,
    /// The result of the tool call.
    pub content: String,
}

/// Describes a tool that can be used by the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelTool {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool, as a
    /// [JSON schema](https://json-schema.org/) object.
    pub parameters: Value,
}

/// Controls whether the model may call tools.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    /// The model decides.
    #[default]
    Auto,
    /// The model must not call tools.
    None,
    /// The model must call at least one tool.
    Required,
}
