use std::sync::Arc;

use agent_patterns_model::{ModelProvider, ToolChoice};

use super::{DEFAULT_MAX_COMPLETION_TOKENS, ToolOrchestrator};
use crate::completion::{CompletionGateway, CompletionOptions};
use crate::tool::ToolRegistry;

/// [`ToolOrchestrator`] builder.
pub struct ToolOrchestratorBuilder {
    pub(crate) gateway: CompletionGateway,
    pub(crate) registry: Arc<ToolRegistry>,
    pub(crate) options: CompletionOptions,
}

impl ToolOrchestratorBuilder {
    /// Creates a new builder with the specified model provider and tools.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
        registry: impl Into<Arc<ToolRegistry>>,
    ) -> Self {
        Self::with_gateway(CompletionGateway::new(provider), registry)
    }

    /// Creates a new builder sharing an existing gateway.
    #[inline]
    pub fn with_gateway(
        gateway: CompletionGateway,
        registry: impl Into<Arc<ToolRegistry>>,
    ) -> Self {
        Self {
            gateway,
            registry: registry.into(),
            options: CompletionOptions {
                model: None,
                tool_choice: Some(ToolChoice::Auto),
                max_completion_tokens: Some(DEFAULT_MAX_COMPLETION_TOKENS),
            },
        }
    }

    /// Sets the model to use.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.options.model = Some(model.into());
        self
    }

    /// Sets the tool choice policy of the tool-offering call.
    #[inline]
    pub fn with_tool_choice(mut self, tool_choice: ToolChoice) -> Self {
        self.options.tool_choice = Some(tool_choice);
        self
    }

    /// Limits the tokens generated by each call, `None` lifts the limit.
    #[inline]
    pub fn with_max_completion_tokens(mut self, tokens: Option<u32>) -> Self {
        self.options.max_completion_tokens = tokens;
        self
    }

    /// Builds the orchestrator.
    #[inline]
    pub fn build(self) -> ToolOrchestrator {
        ToolOrchestrator::from_builder(self)
    }
}
