use agent_patterns_model::{
    ErrorKind, ModelFinishReason, ModelResponse, OpaqueMessage,
};

use crate::Error;
use crate::proto::{self, ChatCompletion, Message};

/// Turns the decoded completion body into a [`ModelResponse`], keeping only
/// the first choice.
pub fn from_completion(
    mut completion: ChatCompletion,
) -> Result<ModelResponse, Error> {
    if completion.choices.is_empty() {
        return Err(Error::new(
            "completion has no choices",
            ErrorKind::MalformedResponse,
        ));
    }
    let choice = completion.choices.swap_remove(0);
    trace!("first choice of {}: {choice:?}", completion.id);

    let finish_reason = choice.finish_reason.as_deref().map(|reason| {
        match reason {
            "tool_calls" => ModelFinishReason::ToolCalls,
            "length" => ModelFinishReason::Length,
            _ => ModelFinishReason::Stop,
        }
    });

    let wire_tool_calls = choice.message.tool_calls.unwrap_or_default();
    let tool_calls = wire_tool_calls
        .iter()
        .map(proto::create_tool_call_request)
        .collect::<Vec<_>>();

    // The assistant message must be echoed back before tool results, keep
    // the wire shape around for the next request.
    let opaque_msg = (!wire_tool_calls.is_empty()).then(|| {
        OpaqueMessage::new(
            completion.id,
            Message::Assistant {
                content: choice.message.content.clone(),
                tool_calls: Some(wire_tool_calls),
            },
        )
    });

    Ok(ModelResponse {
        content: choice.message.content,
        tool_calls,
        finish_reason,
        opaque_msg,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode(body: serde_json::Value) -> ChatCompletion {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_text_completion() {
        let completion = decode(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hello!" },
                "finish_reason": "stop"
            }, {
                "index": 1,
                "message": { "role": "assistant", "content": "Ignored" },
                "finish_reason": "stop"
            }]
        }));
        let resp = from_completion(completion).unwrap();
        assert_eq!(resp.content.as_deref(), Some("Hello!"));
        assert_eq!(resp.finish_reason, Some(ModelFinishReason::Stop));
        assert!(resp.tool_calls.is_empty());
        assert!(resp.opaque_msg.is_none());
    }

    #[test]
    fn test_tool_call_completion() {
        let completion = decode(json!({
            "id": "chatcmpl-2",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [
                        {
                            "id": "call_a",
                            "type": "function",
                            "function": {
                                "name": "get_current_temprature",
                                "arguments": "{\"location\":\"Austin, TX\"}"
                            }
                        },
                        {
                            "id": "call_b",
                            "type": "function",
                            "function": {
                                "name": "fetch_top_hacker_news_stories",
                                "arguments": "{\"top_n\":2}"
                            }
                        }
                    ]
                },
                "finish_reason": "tool_calls"
            }]
        }));
        let resp = from_completion(completion).unwrap();
        assert_eq!(resp.finish_reason, Some(ModelFinishReason::ToolCalls));
        let ids: Vec<_> = resp.tool_calls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["call_a", "call_b"]);
        assert_eq!(
            resp.tool_calls[0].arguments,
            json!({ "location": "Austin, TX" })
        );

        let opaque = resp.opaque_msg.unwrap();
        let Some(Message::Assistant { tool_calls, .. }) =
            opaque.to_raw::<Message>()
        else {
            panic!("unexpected opaque payload");
        };
        assert_eq!(tool_calls.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_no_choices() {
        let completion = decode(json!({ "id": "chatcmpl-3", "choices": [] }));
        let err = from_completion(completion).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedResponse);
    }
}
