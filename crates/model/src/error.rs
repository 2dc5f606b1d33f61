use std::fmt::{self, Display};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The provider rejected the credentials.
    Authentication,
    /// The content is moderated.
    Moderated,
    /// The model provider is rate limited.
    RateLimitExceeded,
    /// The provider could not be reached.
    Network,
    /// The provider answered with something that is not a valid completion.
    MalformedResponse,
    /// Any other errors.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Authentication => write!(f, "authentication failed"),
            ErrorKind::Moderated => write!(f, "content moderated"),
            ErrorKind::RateLimitExceeded => write!(f, "rate limit exceeded"),
            ErrorKind::Network => write!(f, "network failure"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
            ErrorKind::Other => write!(f, "provider error"),
        }
    }
}
