use agent_patterns_model::{ErrorKind, ModelProviderError};

/// Errors that abort an orchestrator run or a registry construction.
///
/// Failures of individual tool calls are not represented here, they are
/// reported back to the model as tool results (see [`crate::tool::Error`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model provider failed: network, authentication, rate limit or a
    /// response that could not be decoded.
    #[error("remote service error ({kind}): {message}")]
    RemoteService {
        /// What went wrong, as classified by the provider.
        kind: ErrorKind,
        /// Provider supplied details.
        message: String,
    },
    /// The history handed to the completion gateway is unusable.
    #[error("invalid conversation history: {0}")]
    InvalidHistory(&'static str),
    /// A reflection run was asked to perform no iteration at all.
    #[error("reflection needs at least one iteration")]
    ZeroIterations,
    /// Tool descriptors and callables disagree.
    #[error("tool registry is inconsistent: {0}")]
    RegistryConsistency(String),
}

/// A specialized `Result` type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Returns the provider error kind if this is a remote service error.
    pub fn remote_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::RemoteService { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<Box<dyn ModelProviderError>> for Error {
    fn from(err: Box<dyn ModelProviderError>) -> Self {
        Error::RemoteService {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
