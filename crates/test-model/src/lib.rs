//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::future::ready;
use std::sync::{Arc, Mutex, MutexGuard};

use agent_patterns_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Script {
    responses: VecDeque<PresetResponse>,
    requests: Vec<ModelRequest>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, queue the responses the model should give. Each
/// request consumes the response at the front of the queue, in call order,
/// no matter which conversation it belongs to. If the queue is empty, an
/// error is returned. Every request is recorded and can be inspected with
/// [`TestModelProvider::requests`].
///
/// Clones share the same script, so a test can keep a handle while the
/// provider itself is moved into an orchestrator.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<Script>>,
}

impl TestModelProvider {
    /// Queues a response.
    #[inline]
    pub fn add_response(&self, preset: PresetResponse) {
        self.lock().responses.push_back(preset);
    }

    /// Queues a text-only response.
    #[inline]
    pub fn add_text_response<S: Into<String>>(&self, text: S) {
        self.add_response(PresetResponse::with_text(text));
    }

    /// Returns all requests received so far.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.lock().requests.clone()
    }

    /// Returns the number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Returns the number of queued responses not consumed yet.
    pub fn remaining_responses(&self) -> usize {
        self.lock().responses.len()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        // A panicking test thread must not hide the script from the others.
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn next_response(&self, req: &ModelRequest) -> Result<ModelResponse, Error> {
        let mut script = self.lock();
        script.requests.push(req.clone());
        let msg_id = format!("msg:{}", script.requests.len() - 1);

        let Some(front) = script.responses.front_mut() else {
            return Err(Error {
                message: "no enough responses",
                kind: ErrorKind::RateLimitExceeded,
            });
        };
        if let Some(remaining) = front.failures {
            if remaining > 0 {
                front.failures = Some(remaining - 1).filter(|n| *n > 0);
            }
            return Err(Error {
                message: "preset failure",
                kind: ErrorKind::Network,
            });
        }

        let response = front.to_model_response(msg_id);
        script.responses.pop_front();
        Ok(response)
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        ready(self.next_response(req))
    }
}
