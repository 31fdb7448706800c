//! User-facing reply text.
//!
//! Every string a requester can see lives here so handlers stay free of
//! literals and tests can assert on exact wording.

use quartermaster_error::ResourceKind;

/// The initial acknowledgment, sent before any other work.
pub const WORKING: &str = "Fetched all input and working on your request!";

/// Fail message when a thread command is issued from inside a thread.
pub const THREAD_IN_THREAD: &str =
    "It's impossible to create a thread within another thread. Try again inside a text channel!";

/// Fail message when the acknowledgment message already carries a thread.
pub const MESSAGE_HAS_THREAD: &str =
    "It was not possible to create a thread in this message because it already has one.";

/// Warning when the self-grant follow-up is refused.
pub const SELF_GRANT_FAILED: &str =
    "Failed to give you the new role. Do you have any roles with higher priority than me?";

/// Warning when the target-member grant follow-up is refused.
pub const TARGET_GRANT_FAILED: &str =
    "Failed to give the new role to the member. Do they have any roles with higher priority than me?";

/// Notice when the requester names themselves as target after already
/// opting into the self-grant.
pub const ALREADY_GRANTED: &str = "You were already granted the role!";

/// Full-success message for a created resource.
pub fn created(resource: ResourceKind) -> String {
    match resource {
        // Roles keep their historical wording.
        ResourceKind::Role => "Your role was created successfully!".to_string(),
        other => format!("Your {other} was successfully created!"),
    }
}

/// Success message for a voice channel nested beside its origin.
pub fn created_in_category() -> String {
    "Your voice channel was successfully created in the same category!".to_string()
}

/// Generic failure message; deliberately vague so platform error detail
/// stays in the logs.
pub fn creation_failed(resource: ResourceKind) -> String {
    format!("Your {resource} could not be created! Please check if the bot has the necessary permissions!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_wording_per_resource() {
        assert_eq!(
            created(ResourceKind::Role),
            "Your role was created successfully!"
        );
        assert_eq!(
            created(ResourceKind::TextChannel),
            "Your channel was successfully created!"
        );
        assert_eq!(
            created(ResourceKind::VoiceChannel),
            "Your voice channel was successfully created!"
        );
        assert_eq!(
            created(ResourceKind::Thread),
            "Your thread was successfully created!"
        );
        assert_eq!(
            created(ResourceKind::Category),
            "Your category was successfully created!"
        );
    }

    #[test]
    fn failure_wording_names_resource_only() {
        let message = creation_failed(ResourceKind::VoiceChannel);
        assert!(message.starts_with("Your voice channel could not be created!"));
        assert!(!message.contains("Missing Permissions"));
    }
}
