use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::OpaqueMessage;

/// The first completion choice returned by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelResponse {
    /// Text content of the assistant message, if any.
    pub content: Option<String>,
    /// Tool calls requested by the model, in the order they were emitted.
    pub tool_calls: Vec<ToolCallRequest>,
    /// The reason the model finished generating.
    pub finish_reason: Option<ModelFinishReason>,
    /// The assistant message in the provider's own shape.
    ///
    /// Providers should set this whenever `tool_calls` is not empty, since
    /// the message usually has to be echoed back verbatim in the next
    /// request.
    pub opaque_msg: Option<OpaqueMessage>,
}

/// The reason why a model response has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFinishReason {
    /// The model needs to call a tool.
    ToolCalls,
    /// The model hit the completion token limit.
    Length,
    /// The model has finished generating text.
    Stop,
}

/// Describes a tool call request from the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The arguments to pass to the tool.
    ///
    /// Arguments that could not be decoded as JSON are kept as a raw
    /// string, so that the caller can report the problem to the model.
    pub arguments: Value,
}
