use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::future::ready;

use agent_patterns_model::{
    ErrorKind, ModelFinishReason, ModelMessage, ModelProvider,
    ModelProviderError, ModelRequest, ModelResponse, ToolCallRequest,
};
use serde_json::json;

#[derive(Debug)]
struct FakeModelProviderError(ErrorKind);

impl Display for FakeModelProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeModelProviderError {}

impl ModelProviderError for FakeModelProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Echoes the last user message, or asks for the `echo` tool when one is
/// offered.
struct FakeModelProvider;

impl ModelProvider for FakeModelProvider {
    type Error = FakeModelProviderError;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let result = 'blk: {
            let Some(ModelMessage::User(text)) = req.messages.last() else {
                break 'blk Err(FakeModelProviderError(ErrorKind::Other));
            };

            if req.tools.iter().any(|tool| tool.name == "echo") {
                break 'blk Ok(ModelResponse {
                    tool_calls: vec![ToolCallRequest {
                        id: "call_0".to_owned(),
                        name: "echo".to_owned(),
                        arguments: json!({ "text": text }),
                    }],
                    finish_reason: Some(ModelFinishReason::ToolCalls),
                    ..Default::default()
                });
            }

            Ok(ModelResponse {
                content: Some(format!("You said {text}")),
                finish_reason: Some(ModelFinishReason::Stop),
                ..Default::default()
            })
        };
        ready(result)
    }
}

mod tests {
    use agent_patterns_model::ModelTool;

    use super::*;

    #[tokio::test]
    async fn test_completion() {
        let provider = FakeModelProvider;
        let req = ModelRequest::with_messages(vec![
            ModelMessage::System("Be brief.".to_owned()),
            ModelMessage::User("Good morning".to_owned()),
        ]);
        let resp = provider.send_request(&req).await.unwrap();
        assert_eq!(resp.content.as_deref(), Some("You said Good morning"));
        assert!(resp.tool_calls.is_empty());
    }

    #[tokio::test]
    async fn test_tool_call() {
        let provider = FakeModelProvider;
        let req = ModelRequest {
            tools: vec![ModelTool {
                name: "echo".to_owned(),
                description: "Repeats the text".to_owned(),
                parameters: json!({ "type": "object" }),
            }],
            ..ModelRequest::with_messages(vec![ModelMessage::User(
                "ping".to_owned(),
            )])
        };
        let resp = provider.send_request(&req).await.unwrap();
        assert_eq!(resp.content, None);
        assert_eq!(resp.finish_reason, Some(ModelFinishReason::ToolCalls));
        assert_eq!(resp.tool_calls[0].arguments, json!({ "text": "ping" }));
    }

    #[tokio::test]
    async fn test_error() {
        let provider = FakeModelProvider;
        let req = ModelRequest::default();
        let err = provider.send_request(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(ModelMessage::System(String::new()).role(), "system");
    }
}
