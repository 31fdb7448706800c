//! Terminal outcomes for an invocation.

/// Terminal disposition of one invocation, reflected in the finalization
/// edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The resource was created and every follow-up action succeeded.
    Success,
    /// The resource was created but a follow-up grant was refused; the
    /// created resource stands.
    SuccessWithWarning,
    /// Nothing was created.
    Failure,
}

/// Result of one attempted role grant.
///
/// Grant failures are ordinary values, not errors: a refused grant never
/// rolls back the created role, it only downgrades the invocation to
/// success-with-warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    /// The role was added to the member.
    Granted,
    /// The member already received the role earlier in this invocation;
    /// no second add call was made.
    AlreadyGranted,
    /// The platform refused the grant.
    Failed(String),
}

impl GrantOutcome {
    /// Whether this outcome downgrades the invocation to
    /// success-with-warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_grants_warn() {
        assert!(!GrantOutcome::Granted.is_warning());
        assert!(!GrantOutcome::AlreadyGranted.is_warning());
        assert!(GrantOutcome::Failed("hierarchy".to_string()).is_warning());
    }
}
