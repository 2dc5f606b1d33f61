use agent_patterns_model::ModelProvider;

use super::{ApprovalMatch, ReflectionOrchestrator};
use crate::completion::{CompletionGateway, CompletionOptions};
use crate::prompts::APPROVAL_SENTINEL;

/// [`ReflectionOrchestrator`] builder.
pub struct ReflectionOrchestratorBuilder {
    pub(crate) gateway: CompletionGateway,
    pub(crate) options: CompletionOptions,
    pub(crate) approval_match: ApprovalMatch,
    pub(crate) sentinel: String,
}

impl ReflectionOrchestratorBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(provider: P) -> Self {
        Self::with_gateway(CompletionGateway::new(provider))
    }

    /// Creates a new builder sharing an existing gateway.
    #[inline]
    pub fn with_gateway(gateway: CompletionGateway) -> Self {
        Self {
            gateway,
            options: CompletionOptions::default(),
            approval_match: ApprovalMatch::default(),
            sentinel: APPROVAL_SENTINEL.to_owned(),
        }
    }

    /// Sets the model used for both generation and reflection.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.options.model = Some(model.into());
        self
    }

    /// Limits the tokens generated by each call.
    #[inline]
    pub fn with_max_completion_tokens(mut self, tokens: u32) -> Self {
        self.options.max_completion_tokens = Some(tokens);
        self
    }

    /// Sets how the approval sentinel is recognized.
    #[inline]
    pub fn with_approval_match(mut self, approval_match: ApprovalMatch) -> Self {
        self.approval_match = approval_match;
        self
    }

    /// Replaces the approval sentinel.
    ///
    /// The built-in reflection prompt mentions `<OK>`, so a custom sentinel
    /// should come with a reflection prompt prefix that asks for it. A blank
    /// sentinel would approve every critique and is ignored.
    pub fn with_sentinel<S: Into<String>>(mut self, sentinel: S) -> Self {
        let sentinel = sentinel.into();
        if sentinel.trim().is_empty() {
            warn!("ignoring blank approval sentinel");
            return self;
        }
        self.sentinel = sentinel;
        self
    }

    /// Builds the orchestrator.
    #[inline]
    pub fn build(self) -> ReflectionOrchestrator {
        ReflectionOrchestrator::from_builder(self)
    }
}
