//! Validated creation payloads.
//!
//! A [`ResourceSpec`] is derived deterministically from a
//! [`crate::CommandRequest`]'s options and is the only payload shape the
//! resource creator accepts. Name bounds are enforced here, before any
//! remote call, so predictable platform rejections never cost a round
//! trip.

use derive_getters::Getters;
use quartermaster_error::{ProvisionError, ProvisionResult, ResourceKind};

/// Channel, voice-channel, and category names past 25 characters get cut
/// off in the client, so that is the hard limit at registration and here.
pub const CHANNEL_NAME_MAX: usize = 25;
/// Hard platform limit for role names.
pub const ROLE_NAME_MAX: usize = 100;
/// Hard platform limit for thread names.
pub const THREAD_NAME_MAX: usize = 100;

/// The validated, resource-type-specific payload for one creation call.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ResourceSpec {
    /// The resource to create.
    kind: ResourceKind,
    /// Trimmed, bounds-checked display name.
    name: String,
    /// Role color as a 24-bit value; `None` leaves the platform default.
    color: Option<u32>,
    /// Parent category for nested voice channels.
    parent: Option<u64>,
    /// Thread only: anchor to the acknowledgment message instead of
    /// creating an orphaned thread.
    anchor_to_message: bool,
}

impl ResourceSpec {
    /// Payload for a new category.
    pub fn category(name: &str) -> ProvisionResult<Self> {
        Ok(Self {
            kind: ResourceKind::Category,
            name: validated_name(name, CHANNEL_NAME_MAX, ResourceKind::Category)?,
            color: None,
            parent: None,
            anchor_to_message: false,
        })
    }

    /// Payload for a new text channel.
    pub fn text_channel(name: &str) -> ProvisionResult<Self> {
        Ok(Self {
            kind: ResourceKind::TextChannel,
            name: validated_name(name, CHANNEL_NAME_MAX, ResourceKind::TextChannel)?,
            color: None,
            parent: None,
            anchor_to_message: false,
        })
    }

    /// Payload for a new voice channel, nested under `parent` when the
    /// invoking channel belongs to a category.
    pub fn voice_channel(name: &str, parent: Option<u64>) -> ProvisionResult<Self> {
        Ok(Self {
            kind: ResourceKind::VoiceChannel,
            name: validated_name(name, CHANNEL_NAME_MAX, ResourceKind::VoiceChannel)?,
            color: None,
            parent,
            anchor_to_message: false,
        })
    }

    /// Payload for a new role with an optional resolved color.
    pub fn role(name: &str, color: Option<u32>) -> ProvisionResult<Self> {
        Ok(Self {
            kind: ResourceKind::Role,
            name: validated_name(name, ROLE_NAME_MAX, ResourceKind::Role)?,
            color,
            parent: None,
            anchor_to_message: false,
        })
    }

    /// Payload for a new thread.
    pub fn thread(name: &str, anchor_to_message: bool) -> ProvisionResult<Self> {
        Ok(Self {
            kind: ResourceKind::Thread,
            name: validated_name(name, THREAD_NAME_MAX, ResourceKind::Thread)?,
            color: None,
            parent: None,
            anchor_to_message,
        })
    }
}

/// Trim and bounds-check a user-supplied name.
#[track_caller]
fn validated_name(raw: &str, max: usize, resource: ResourceKind) -> ProvisionResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ProvisionError::validation(format!(
            "The {resource} name must not be empty."
        )));
    }
    if name.chars().count() > max {
        return Err(ProvisionError::validation(format!(
            "The {resource} name must be at most {max} characters."
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        let spec = ResourceSpec::text_channel("  general  ").unwrap();
        assert_eq!(spec.name(), "general");
    }

    #[test]
    fn empty_after_trim_is_rejected() {
        assert!(ResourceSpec::category("   ").is_err());
    }

    #[test]
    fn channel_names_are_capped_at_25() {
        let ok = "a".repeat(25);
        let too_long = "a".repeat(26);
        assert!(ResourceSpec::voice_channel(&ok, None).is_ok());
        assert!(ResourceSpec::voice_channel(&too_long, None).is_err());
    }

    #[test]
    fn role_names_are_capped_at_100() {
        let ok = "r".repeat(100);
        let too_long = "r".repeat(101);
        assert!(ResourceSpec::role(&ok, None).is_ok());
        assert!(ResourceSpec::role(&too_long, None).is_err());
    }

    #[test]
    fn voice_spec_carries_parent() {
        let spec = ResourceSpec::voice_channel("lounge", Some(7)).unwrap();
        assert_eq!(spec.parent(), &Some(7));
        let stray = ResourceSpec::voice_channel("lounge", None).unwrap();
        assert_eq!(stray.parent(), &None);
    }

    #[test]
    fn thread_spec_carries_anchor_flag() {
        let anchored = ResourceSpec::thread("help", true).unwrap();
        assert!(anchored.anchor_to_message());
        let orphan = ResourceSpec::thread("help", false).unwrap();
        assert!(!orphan.anchor_to_message());
    }
}
