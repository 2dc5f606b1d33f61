use std::pin::Pin;
use std::sync::Arc;

use agent_patterns_model::{
    ModelMessage, ModelProvider, ModelProviderError, ModelRequest,
    ModelResponse, ToolCallRequest, ToolChoice,
};
use tracing::Instrument;

use crate::error::{Error, Result};
use crate::tool::ToolDescriptor;

type SendRequestResult = Result<ModelResponse, Box<dyn ModelProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn = Arc<dyn Fn(ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// Per-call settings forwarded to the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Model identifier, `None` uses the provider's configured model.
    pub model: Option<String>,
    /// Tool choice policy, only sent together with tools.
    pub tool_choice: Option<ToolChoice>,
    /// Upper bound of generated tokens.
    pub max_completion_tokens: Option<u32>,
}

/// The outcome of a completion that offered tools to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The model answered directly.
    Text(String),
    /// The model wants tools to be called.
    ToolCalls {
        /// Requests in the order the model emitted them.
        calls: Vec<ToolCallRequest>,
        /// The assistant message that must precede the tool results.
        message: ModelMessage,
    },
}

/// The single entry point to the remote model.
///
/// Wraps a [`ModelProvider`] behind a type-erased handle so that the
/// orchestrators are not generic over the provider. Cloning is cheap and
/// clones share the provider.
#[derive(Clone)]
pub struct CompletionGateway {
    handler_fn: HandlerFn,
}

impl CompletionGateway {
    /// Creates a gateway that sends requests to `provider`.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("sending request: {req:?}");
                    fut.await.map_err(|err| {
                        error!("got an error: {err:?}");
                        Box::new(err) as Box<dyn ModelProviderError>
                    })
                }
                .instrument(trace_span!("completion req")),
            )
        });
        Self { handler_fn }
    }

    /// Returns the text of the model's completion for `history`.
    ///
    /// The history is not modified, appending the answer is up to the
    /// caller. A missing text content yields an empty string.
    pub async fn complete(
        &self,
        history: &[ModelMessage],
        options: &CompletionOptions,
    ) -> Result<String> {
        check_history(history)?;
        let req = ModelRequest {
            messages: history.to_vec(),
            tools: vec![],
            tool_choice: None,
            max_completion_tokens: options.max_completion_tokens,
            model: options.model.clone(),
        };
        let resp = self.send(req).await?;
        Ok(resp.content.unwrap_or_default())
    }

    /// Like [`complete`](Self::complete), but offers `tools` to the model.
    pub async fn complete_with_tools(
        &self,
        history: &[ModelMessage],
        tools: &[ToolDescriptor],
        options: &CompletionOptions,
    ) -> Result<Completion> {
        check_history(history)?;
        let req = ModelRequest {
            messages: history.to_vec(),
            tools: tools.iter().map(ToolDescriptor::to_model_tool).collect(),
            tool_choice: options.tool_choice,
            max_completion_tokens: options.max_completion_tokens,
            model: options.model.clone(),
        };
        let resp = self.send(req).await?;
        if resp.tool_calls.is_empty() {
            return Ok(Completion::Text(resp.content.unwrap_or_default()));
        }

        let message = match resp.opaque_msg {
            Some(opaque_msg) => ModelMessage::Opaque(opaque_msg),
            // Downgrade to a text-only message.
            None => ModelMessage::Assistant(resp.content.unwrap_or_default()),
        };
        Ok(Completion::ToolCalls {
            calls: resp.tool_calls,
            message,
        })
    }

    async fn send(&self, req: ModelRequest) -> Result<ModelResponse> {
        debug!(
            "requesting completion: {} messages, {} tools",
            req.messages.len(),
            req.tools.len()
        );
        let resp = (self.handler_fn)(req).await.map_err(Error::from)?;
        debug!(
            "completion finished: {:?}, {} tool calls",
            resp.finish_reason,
            resp.tool_calls.len()
        );
        Ok(resp)
    }
}

fn check_history(history: &[ModelMessage]) -> Result<()> {
    match history.first() {
        None => Err(Error::InvalidHistory("history is empty")),
        Some(ModelMessage::System(_) | ModelMessage::User(_)) => Ok(()),
        Some(_) => Err(Error::InvalidHistory(
            "history must start with a system or user message",
        )),
    }
}
