use agent_patterns_model::{
    ModelFinishReason, ModelResponse, OpaqueMessage, ToolCallRequest,
};
use serde::{Deserialize, Serialize};

/// The events in a preset response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetEvent {
    #[serde(rename = "message_delta")]
    MessageDelta(String),
    #[serde(rename = "tool_call")]
    ToolCall(ToolCallRequest),
}

/// The preset response for one provider call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetResponse {
    /// Events in this response.
    pub events: Vec<PresetEvent>,
    /// If set, the request will fail in the first `failures` attempts.
    /// `Some(0)` means the request will fail infinitely.
    pub failures: Option<u64>,
}

impl PresetResponse {
    /// Creates a `PresetResponse` with the specified events.
    #[inline]
    pub fn with_events(events: impl Into<Vec<PresetEvent>>) -> Self {
        Self {
            events: events.into(),
            failures: None,
        }
    }

    /// Creates a text-only `PresetResponse`.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self::with_events([PresetEvent::MessageDelta(text.into())])
    }

    /// Sets failure times before a successful response. `0` means the
    /// response will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }

    /// Assembles the events into a complete response.
    pub(crate) fn to_model_response(&self, msg_id: String) -> ModelResponse {
        let mut content: Option<String> = None;
        let mut tool_calls = Vec::new();
        for event in &self.events {
            match event {
                PresetEvent::MessageDelta(delta) => {
                    content.get_or_insert_default().push_str(delta);
                }
                PresetEvent::ToolCall(req) => tool_calls.push(req.clone()),
            }
        }

        let (finish_reason, opaque_msg) = if tool_calls.is_empty() {
            (ModelFinishReason::Stop, None)
        } else {
            let opaque = OpaqueMessage::new(msg_id, self.events.clone());
            (ModelFinishReason::ToolCalls, Some(opaque))
        };

        ModelResponse {
            content,
            tool_calls,
            finish_reason: Some(finish_reason),
            opaque_msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let response = PresetResponse::with_events([
            PresetEvent::MessageDelta("Let me check the weather.".to_string()),
            PresetEvent::ToolCall(ToolCallRequest {
                id: "call_1".to_string(),
                name: "get_current_temprature".to_string(),
                arguments: json!({ "location": "Austin, TX" }),
            }),
        ]);

        let serialized = serde_json::to_string(&response).unwrap();
        let deserialized: PresetResponse =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(response, deserialized);
    }

    #[test]
    fn test_to_model_response() {
        let response = PresetResponse::with_events([
            PresetEvent::MessageDelta("Checking ".to_string()),
            PresetEvent::MessageDelta("now.".to_string()),
            PresetEvent::ToolCall(ToolCallRequest {
                id: "call_1".to_string(),
                name: "get_current_temprature".to_string(),
                arguments: json!({ "location": "Austin, TX" }),
            }),
        ]);
        let resp = response.to_model_response("msg:0".to_owned());
        assert_eq!(resp.content.as_deref(), Some("Checking now."));
        assert_eq!(resp.finish_reason, Some(ModelFinishReason::ToolCalls));
        assert_eq!(resp.tool_calls.len(), 1);
        assert!(resp.opaque_msg.is_some());

        let resp = PresetResponse::with_text("Done.")
            .to_model_response("msg:1".to_owned());
        assert_eq!(resp.finish_reason, Some(ModelFinishReason::Stop));
        assert!(resp.opaque_msg.is_none());
    }
}
