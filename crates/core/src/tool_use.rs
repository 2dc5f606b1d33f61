//! Lets the model call local tools before answering.

mod builder;

use std::sync::Arc;

use agent_patterns_model::ModelProvider;

pub use builder::ToolOrchestratorBuilder;

use crate::completion::{Completion, CompletionGateway, CompletionOptions};
use crate::conversation::Conversation;
use crate::error::Result;
use crate::prompts::BASE_TOOL_SYSTEM_PROMPT;
use crate::tool::ToolRegistry;

/// Default completion token limit of the tool-offering call.
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 4096;

/// Answers a request with the help of the tools in a [`ToolRegistry`].
///
/// A run makes at most two remote calls. The first one offers the tools,
/// if the model asks for some, they are called one by one in the requested
/// order and their results are sent back in a second call, which offers no
/// tools and produces the final answer.
pub struct ToolOrchestrator {
    gateway: CompletionGateway,
    registry: Arc<ToolRegistry>,
    options: CompletionOptions,
}

impl ToolOrchestrator {
    /// Creates a builder for the given model provider and tools.
    #[inline]
    pub fn builder<P: ModelProvider + 'static>(
        provider: P,
        registry: impl Into<Arc<ToolRegistry>>,
    ) -> ToolOrchestratorBuilder {
        ToolOrchestratorBuilder::with_model_provider(provider, registry)
    }

    fn from_builder(builder: ToolOrchestratorBuilder) -> Self {
        let ToolOrchestratorBuilder {
            gateway,
            registry,
            options,
        } = builder;
        Self {
            gateway,
            registry,
            options,
        }
    }

    /// Returns the tools offered to the model.
    #[inline]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Answers `user_request`, calling tools as the model sees fit.
    ///
    /// `system_prompt_prefix` is put in front of the built-in system prompt.
    /// Failing tool calls don't abort the run, the model is told about the
    /// failure instead. Provider failures abort it.
    pub async fn run(
        &self,
        user_request: &str,
        system_prompt_prefix: &str,
    ) -> Result<String> {
        let mut conversation = Conversation::with_system_prompt(format!(
            "{system_prompt_prefix}{BASE_TOOL_SYSTEM_PROMPT}"
        ));
        conversation.push_user(user_request);

        let tools = self.registry.describe();
        let completion = self
            .gateway
            .complete_with_tools(conversation.messages(), &tools, &self.options)
            .await?;
        let (calls, message) = match completion {
            Completion::Text(text) => {
                debug!("answered without tools");
                return Ok(text);
            }
            Completion::ToolCalls { calls, message } => (calls, message),
        };

        info!("model requested {} tool call(s)", calls.len());
        conversation.push_message(message);
        for call in calls {
            let result = self.registry.dispatch(call).await;
            conversation.push_tool_result(result);
        }

        let final_options = CompletionOptions {
            tool_choice: None,
            ..self.options.clone()
        };
        self.gateway
            .complete(conversation.messages(), &final_options)
            .await
    }
}
