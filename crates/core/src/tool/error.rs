use std::borrow::Cow;
use std::fmt::{self, Display};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The model asked for a tool that is not registered.
    UnknownTool,
    /// The arguments are not a JSON object, miss a required parameter, or
    /// don't fit the tool's input type.
    InvalidArguments,
    /// Error occurred while executing the tool.
    ExecutionError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownTool => write!(f, "Unknown tool"),
            ErrorKind::InvalidArguments => write!(f, "Invalid arguments"),
            ErrorKind::ExecutionError => write!(f, "Execution error"),
        }
    }
}

/// Describes a tool call error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    reason: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{}: {reason}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates a new error with the `UnknownTool` kind.
    #[inline]
    pub fn unknown_tool() -> Self {
        Self {
            kind: ErrorKind::UnknownTool,
            reason: None,
        }
    }

    /// Creates a new error with the `InvalidArguments` kind.
    #[inline]
    pub fn invalid_arguments() -> Self {
        Self {
            kind: ErrorKind::InvalidArguments,
            reason: None,
        }
    }

    /// Creates a new error with the `ExecutionError` kind.
    #[inline]
    pub fn execution_error() -> Self {
        Self {
            kind: ErrorKind::ExecutionError,
            reason: None,
        }
    }

    /// Attaches a reason to the error.
    #[inline]
    pub fn with_reason<S: Into<String>>(self, reason: S) -> Self {
        Self {
            kind: self.kind,
            reason: Some(reason.into()),
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the reason for the error.
    #[inline]
    pub fn reason(&self) -> Cow<'_, str> {
        match self.reason.as_deref() {
            Some(reason) => Cow::Borrowed(reason),
            None => Cow::Owned(format!("{}", self.kind)),
        }
    }

    /// Renders the error as the content of a tool-role message.
    #[inline]
    pub fn to_tool_content(&self) -> String {
        format!("Error: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_content() {
        let err = Error::unknown_tool().with_reason("`get_stock_price`");
        assert_eq!(err.kind(), ErrorKind::UnknownTool);
        assert_eq!(
            err.to_tool_content(),
            "Error: Unknown tool: `get_stock_price`"
        );

        let err = Error::execution_error();
        assert_eq!(err.reason(), "Execution error");
        assert_eq!(err.to_tool_content(), "Error: Execution error");
    }
}
