use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A provider-specific message that the orchestrators keep in the history
/// without looking inside.
///
/// OpenAI-compatible APIs require the assistant message carrying the tool
/// calls to be sent back verbatim before the tool results. The provider
/// wraps its own wire message in an `OpaqueMessage` and unwraps it again
/// when building the next request.
#[derive(Clone)]
pub struct OpaqueMessage {
    id: Arc<str>,
    value: Arc<dyn Any + Send + Sync>,
}

impl OpaqueMessage {
    /// Creates a new `OpaqueMessage`.
    ///
    /// The `id` identifies the message and should be unique within a
    /// conversation. Two opaque messages compare equal iff their ids do.
    #[inline]
    pub fn new<ID, T>(id: ID, value: T) -> Self
    where
        ID: Into<String>,
        T: Send + Sync + 'static,
    {
        Self {
            id: id.into().into(),
            value: Arc::new(value),
        }
    }

    /// Returns the identifier of this message.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Borrows the wrapped value if it has type `T`.
    #[inline]
    pub fn to_raw<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl Debug for OpaqueMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueMessage")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OpaqueMessage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OpaqueMessage {}

impl Hash for OpaqueMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct WireToolCallMessage {
        call_ids: Vec<String>,
    }

    #[test]
    fn test_downcast() {
        let opaque = OpaqueMessage::new(
            "chatcmpl-1",
            WireToolCallMessage {
                call_ids: vec!["call_a".to_owned()],
            },
        );
        let raw = opaque.to_raw::<WireToolCallMessage>().unwrap();
        assert_eq!(raw.call_ids, ["call_a"]);
        assert!(opaque.to_raw::<String>().is_none());
        assert_eq!(opaque.id(), "chatcmpl-1");
    }

    #[test]
    fn test_equality_by_id() {
        let a = OpaqueMessage::new("chatcmpl-1", 1_u32);
        let b = OpaqueMessage::new("chatcmpl-1", "different payload");
        let c = OpaqueMessage::new("chatcmpl-2", 1_u32);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
