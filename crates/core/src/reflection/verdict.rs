use crate::prompts::APPROVAL_SENTINEL;

/// How the approval sentinel is recognized in a critique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApprovalMatch {
    /// The critique contains the sentinel anywhere.
    #[default]
    Contains,
    /// The critique is the sentinel and nothing else, surrounding
    /// whitespace aside.
    Exact,
}

/// What the critic thinks of the latest generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReflectionVerdict {
    /// Nothing left to change.
    Approved,
    /// The generation should be revised according to the critique.
    NeedsRevision(String),
}

impl ReflectionVerdict {
    /// Interprets a critique using the default [`APPROVAL_SENTINEL`].
    #[inline]
    pub fn parse(reflection: &str, mode: ApprovalMatch) -> Self {
        Self::parse_with_sentinel(reflection, APPROVAL_SENTINEL, mode)
    }

    /// Interprets a critique, looking for `sentinel`.
    pub fn parse_with_sentinel(
        reflection: &str,
        sentinel: &str,
        mode: ApprovalMatch,
    ) -> Self {
        let trimmed = reflection.trim();
        let approved = match mode {
            ApprovalMatch::Contains => trimmed.contains(sentinel),
            ApprovalMatch::Exact => trimmed == sentinel,
        };
        if approved {
            ReflectionVerdict::Approved
        } else {
            ReflectionVerdict::NeedsRevision(reflection.to_owned())
        }
    }

    /// Returns `true` for [`ReflectionVerdict::Approved`].
    #[inline]
    pub fn is_approved(&self) -> bool {
        matches!(self, ReflectionVerdict::Approved)
    }
}
