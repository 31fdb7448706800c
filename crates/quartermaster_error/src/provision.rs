//! Provisioning error types with source location tracking.

use std::fmt;

/// Guild resource categories the bot can provision.
///
/// Carried inside [`ProvisionErrorKind::ResourceCreation`] so failure logs
/// name the resource that was being created, and used by user-facing
/// message rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A channel category.
    Category,
    /// A guild text channel.
    TextChannel,
    /// A guild voice channel.
    VoiceChannel,
    /// A guild role.
    Role,
    /// A thread, anchored to a message or orphaned in a channel.
    Thread,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::TextChannel => write!(f, "channel"),
            Self::VoiceChannel => write!(f, "voice channel"),
            Self::Role => write!(f, "role"),
            Self::Thread => write!(f, "thread"),
        }
    }
}

/// Provisioning error variants.
///
/// Represents the distinct failure classes of one command invocation, from
/// pre-flight validation through remote creation and post-creation grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionErrorKind {
    /// User-supplied option rejected before any remote call was made.
    Validation(String),

    /// The acknowledgment window elapsed before the initial reply was sent;
    /// the invocation is void and nothing further runs.
    ProtocolTimeout(String),

    /// The platform rejected a creation call (missing permission, invalid
    /// field). Nothing was created.
    ResourceCreation {
        /// The resource that was being created.
        resource: ResourceKind,
        /// The platform-reported reason.
        reason: String,
    },

    /// The requested structure is impossible (threads cannot parent
    /// threads). No remote call was attempted.
    StructuralConstraint(String),

    /// The target already carries the requested resource (a message can
    /// hold at most one thread).
    AlreadyExists(String),

    /// A post-creation role grant was refused by the platform. The created
    /// role stands; this downgrades success to success-with-warning.
    GrantDenied(String),

    /// Platform API error outside a creation call (context reads, edits).
    Api(String),

    /// Process configuration could not be loaded (unreadable or malformed
    /// TOML, missing environment variable).
    Configuration(String),
}

impl fmt::Display for ProvisionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::ProtocolTimeout(msg) => write!(f, "Acknowledgment window missed: {msg}"),
            Self::ResourceCreation { resource, reason } => {
                write!(f, "Failed to create {resource}: {reason}")
            }
            Self::StructuralConstraint(msg) => write!(f, "Structural constraint: {msg}"),
            Self::AlreadyExists(msg) => write!(f, "Already exists: {msg}"),
            Self::GrantDenied(msg) => write!(f, "Role grant denied: {msg}"),
            Self::Api(msg) => write!(f, "Discord API error: {msg}"),
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

/// Provisioning error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone)]
pub struct ProvisionError {
    /// Error variant.
    pub kind: ProvisionErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl ProvisionError {
    /// Create a new ProvisionError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use quartermaster_error::{ProvisionError, ProvisionErrorKind};
    ///
    /// let err = ProvisionError::new(ProvisionErrorKind::ProtocolTimeout(
    ///     "interaction token expired".to_string(),
    /// ));
    /// assert!(err.to_string().contains("window missed"));
    /// ```
    #[track_caller]
    pub fn new(kind: ProvisionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a validation error from a user-facing message.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ProvisionErrorKind::Validation(message.into()))
    }

    /// Create a configuration error from a message.
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProvisionErrorKind::Configuration(message.into()))
    }
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Provision Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ProvisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Result type for provisioning operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

// Convenience From implementations for external error types
#[cfg(feature = "serenity")]
impl From<serenity::Error> for ProvisionError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        ProvisionError::new(ProvisionErrorKind::Api(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_resource_in_creation_failures() {
        let err = ProvisionError::new(ProvisionErrorKind::ResourceCreation {
            resource: ResourceKind::VoiceChannel,
            reason: "Missing Permissions".to_string(),
        });
        let rendered = err.to_string();
        assert!(rendered.contains("voice channel"));
        assert!(rendered.contains("Missing Permissions"));
    }

    #[test]
    fn configuration_errors_carry_their_message() {
        let err = ProvisionError::configuration("DISCORD_TOKEN is not set in the environment");
        assert!(matches!(err.kind, ProvisionErrorKind::Configuration(_)));
        assert!(err.to_string().contains("Configuration error: DISCORD_TOKEN"));
    }

    #[test]
    fn location_points_at_raise_site() {
        let err = ProvisionError::validation("empty name");
        assert!(err.file.ends_with("provision.rs"));
        assert!(err.line > 0);
    }
}
