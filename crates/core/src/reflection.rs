//! The generate → critique → regenerate loop.

mod builder;
mod verdict;

use agent_patterns_model::ModelProvider;
use tracing::Instrument;

pub use builder::ReflectionOrchestratorBuilder;
pub use verdict::{ApprovalMatch, ReflectionVerdict};

use crate::completion::{CompletionGateway, CompletionOptions};
use crate::conversation::Conversation;
use crate::error::{Error, Result};
use crate::prompts::{
    BASE_GENERATION_SYSTEM_PROMPT, BASE_REFLECTION_SYSTEM_PROMPT,
};

/// Iteration budget used by the command line driver.
pub const DEFAULT_MAX_ITERATIONS: usize = 3;

/// Alternates between producing content and critiquing it.
///
/// Two histories are kept for a run. The generation side sees the request
/// and every critique, the reflection side sees every generation as if a
/// user had written it. The loop ends as soon as the critic approves, or
/// when the iteration budget is spent, in which case the last generation
/// is returned as well.
pub struct ReflectionOrchestrator {
    gateway: CompletionGateway,
    options: CompletionOptions,
    approval_match: ApprovalMatch,
    sentinel: String,
}

impl ReflectionOrchestrator {
    /// Creates a builder for the given model provider.
    #[inline]
    pub fn builder<P: ModelProvider + 'static>(
        provider: P,
    ) -> ReflectionOrchestratorBuilder {
        ReflectionOrchestratorBuilder::with_model_provider(provider)
    }

    fn from_builder(builder: ReflectionOrchestratorBuilder) -> Self {
        let ReflectionOrchestratorBuilder {
            gateway,
            options,
            approval_match,
            sentinel,
        } = builder;
        Self {
            gateway,
            options,
            approval_match,
            sentinel,
        }
    }

    /// Runs up to `max_iterations` generate/reflect cycles for
    /// `user_request` and returns the latest generation.
    ///
    /// The prompt prefixes are put in front of the built-in system prompts.
    /// A budget of zero is rejected before anything is sent.
    pub async fn run(
        &self,
        user_request: &str,
        generation_prompt_prefix: &str,
        reflection_prompt_prefix: &str,
        max_iterations: usize,
    ) -> Result<String> {
        if max_iterations == 0 {
            return Err(Error::ZeroIterations);
        }

        let mut generation_history = Conversation::with_system_prompt(
            format!("{generation_prompt_prefix}{BASE_GENERATION_SYSTEM_PROMPT}"),
        );
        generation_history.push_user(user_request);
        let mut reflection_history = Conversation::with_system_prompt(
            format!("{reflection_prompt_prefix}{BASE_REFLECTION_SYSTEM_PROMPT}"),
        );

        let mut generation = String::new();
        for iteration in 1..=max_iterations {
            let (latest, verdict) = self
                .cycle(&mut generation_history, &mut reflection_history)
                .instrument(debug_span!("reflection cycle", iteration))
                .await?;
            generation = latest;

            match verdict {
                ReflectionVerdict::Approved => {
                    info!("content approved after {iteration} iteration(s)");
                    return Ok(generation);
                }
                ReflectionVerdict::NeedsRevision(critique) => {
                    debug!("revision requested: {critique}");
                    generation_history.push_user(critique);
                }
            }
        }

        info!("iteration budget of {max_iterations} spent without approval");
        Ok(generation)
    }

    async fn cycle(
        &self,
        generation_history: &mut Conversation,
        reflection_history: &mut Conversation,
    ) -> Result<(String, ReflectionVerdict)> {
        let generation = self.generate(generation_history).await?;
        reflection_history.push_user(generation.as_str());
        let verdict = self.reflect(reflection_history).await?;
        Ok((generation, verdict))
    }

    async fn generate(&self, history: &mut Conversation) -> Result<String> {
        let generation =
            self.gateway.complete(history.messages(), &self.options).await?;
        history.push_assistant(generation.as_str());
        Ok(generation)
    }

    async fn reflect(
        &self,
        history: &mut Conversation,
    ) -> Result<ReflectionVerdict> {
        let reflection =
            self.gateway.complete(history.messages(), &self.options).await?;
        history.push_assistant(reflection.as_str());
        Ok(ReflectionVerdict::parse_with_sentinel(
            &reflection,
            &self.sentinel,
            self.approval_match,
        ))
    }
}
