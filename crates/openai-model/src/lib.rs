//! A model provider for OpenAI-compatible chat-completion APIs (OpenAI,
//! Groq, local servers speaking the same dialect).

#[macro_use]
extern crate tracing;

mod config;
mod proto;
mod response;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use agent_patterns_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};
use mime::Mime;
use reqwest::{Client, StatusCode, header};

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAIConfig, OpenAIConfigBuilder,
};
use proto::{ChatCompletion, ErrorBody};

/// Error type for [`OpenAIProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// OpenAI-compatible model provider.
#[derive(Clone, Debug)]
pub struct OpenAIProvider {
    client: Client,
    config: Arc<OpenAIConfig>,
}

impl OpenAIProvider {
    /// Creates a new `OpenAIProvider` with the given configuration.
    #[inline]
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl ModelProvider for OpenAIProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let openai_req = proto::create_request(req, &self.config);
        let resp_fut = self
            .client
            .post(self.config.completions_url())
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key),
            )
            .header(header::ACCEPT, "application/json")
            .json(&openai_req)
            .send();

        async move {
            let resp = resp_fut
                .await
                .map_err(|err| Error::new(format!("{err}"), ErrorKind::Network))?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(status, &body));
            }

            let is_json = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<Mime>().ok())
                .map(|m| m.subtype() == mime::JSON)
                .unwrap_or(false);
            if !is_json {
                return Err(Error::new(
                    "response is not JSON",
                    ErrorKind::MalformedResponse,
                ));
            }

            let completion = resp.json::<ChatCompletion>().await.map_err(
                |err| Error::new(format!("{err}"), ErrorKind::MalformedResponse),
            )?;
            response::from_completion(completion)
        }
    }
}

fn status_error(status: StatusCode, body: &str) -> Error {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ErrorKind::Authentication
        }
        StatusCode::TOO_MANY_REQUESTS => ErrorKind::RateLimitExceeded,
        _ => ErrorKind::Other,
    };
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| body.to_owned());
    warn!("provider answered {status}: {detail}");
    Error::new(format!("{status}: {detail}"), kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#,
        );
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert!(err.message().contains("Invalid API Key"));

        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
        assert!(err.message().ends_with("slow down"));

        let err = status_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
