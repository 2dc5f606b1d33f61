//! Conversation-related types.

use agent_patterns_model::{ModelMessage, ToolCallResult};

/// An append-only message history.
///
/// A conversation always starts with the system message it was created
/// with. Messages can only be appended, never reordered or edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ModelMessage>,
}

impl Conversation {
    /// Starts a conversation with the given system prompt.
    #[inline]
    pub fn with_system_prompt<S: Into<String>>(prompt: S) -> Self {
        Self {
            messages: vec![ModelMessage::System(prompt.into())],
        }
    }

    /// Appends a user message.
    #[inline]
    pub fn push_user<S: Into<String>>(&mut self, content: S) {
        self.messages.push(ModelMessage::User(content.into()));
    }

    /// Appends an assistant message.
    #[inline]
    pub fn push_assistant<S: Into<String>>(&mut self, content: S) {
        self.messages.push(ModelMessage::Assistant(content.into()));
    }

    /// Appends the result of a tool call.
    #[inline]
    pub fn push_tool_result(&mut self, result: ToolCallResult) {
        self.messages.push(ModelMessage::Tool(result));
    }

    /// Appends a message as received from the model.
    #[inline]
    pub fn push_message(&mut self, message: ModelMessage) {
        self.messages.push(message);
    }

    /// Returns all messages in order.
    #[inline]
    pub fn messages(&self) -> &[ModelMessage] {
        &self.messages
    }

    /// Returns the most recent message.
    #[inline]
    pub fn last(&self) -> Option<&ModelMessage> {
        self.messages.last()
    }

    /// Returns the number of messages, the system message included.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`, a conversation holds at least its system message.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
