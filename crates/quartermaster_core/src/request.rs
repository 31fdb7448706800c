//! Invocation snapshots.
//!
//! A [`CommandRequest`] is built once from the delivered interaction and
//! owned by the handler for that invocation; nothing here is shared across
//! invocations.

use derive_getters::Getters;
use quartermaster_error::ResourceKind;
use std::collections::BTreeMap;
use typed_builder::TypedBuilder;

/// The slash commands Quartermaster answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `createchannel` - create a text channel.
    CreateChannel,
    /// `createcategory` - create a channel category.
    CreateCategory,
    /// `createvoicechannel` - create a voice channel, nested beside the
    /// invoking channel when that channel belongs to a category.
    CreateVoiceChannel,
    /// `createrole` - create a role.
    CreateRole,
    /// `createandgrantrole` - create a role and grant it to members.
    CreateAndGrantRole,
    /// `createthread` - create a thread, optionally anchored to the
    /// acknowledgment message.
    CreateThread,
}

impl CommandKind {
    /// Look up a command by its registered slash-command name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "createchannel" => Some(Self::CreateChannel),
            "createcategory" => Some(Self::CreateCategory),
            "createvoicechannel" => Some(Self::CreateVoiceChannel),
            "createrole" => Some(Self::CreateRole),
            "createandgrantrole" => Some(Self::CreateAndGrantRole),
            "createthread" => Some(Self::CreateThread),
            _ => None,
        }
    }

    /// The registered slash-command name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateChannel => "createchannel",
            Self::CreateCategory => "createcategory",
            Self::CreateVoiceChannel => "createvoicechannel",
            Self::CreateRole => "createrole",
            Self::CreateAndGrantRole => "createandgrantrole",
            Self::CreateThread => "createthread",
        }
    }

    /// The resource this command provisions.
    pub fn resource(&self) -> ResourceKind {
        match self {
            Self::CreateChannel => ResourceKind::TextChannel,
            Self::CreateCategory => ResourceKind::Category,
            Self::CreateVoiceChannel => ResourceKind::VoiceChannel,
            Self::CreateRole | Self::CreateAndGrantRole => ResourceKind::Role,
            Self::CreateThread => ResourceKind::Thread,
        }
    }
}

/// A typed slash-command option value.
///
/// Option schemas are enforced platform-side at registration, so a value
/// delivered under a declared name always has the declared type; lookups
/// by the wrong type return `None` rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A string option.
    String(String),
    /// A boolean option.
    Boolean(bool),
    /// A guild member reference, by user id.
    Member(u64),
}

/// Immutable snapshot of one command invocation.
#[derive(Debug, Clone, Getters, TypedBuilder)]
pub struct CommandRequest {
    /// Which command was invoked.
    command: CommandKind,
    /// Options by exact registered name.
    #[builder(default)]
    options: BTreeMap<String, OptionValue>,
    /// User id of the invoking member.
    invoker_id: u64,
    /// Channel the command was issued from.
    channel_id: u64,
    /// Guild the command was issued in.
    guild_id: u64,
}

impl CommandRequest {
    /// Retrieve a string option by exact name.
    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Retrieve a boolean option by exact name. Unset booleans default
    /// through `unwrap_or(false)` at the call site.
    pub fn get_boolean(&self, name: &str) -> Option<bool> {
        match self.options.get(name) {
            Some(OptionValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Retrieve a member-reference option by exact name.
    pub fn get_member(&self, name: &str) -> Option<u64> {
        match self.options.get(name) {
            Some(OptionValue::Member(id)) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(options: BTreeMap<String, OptionValue>) -> CommandRequest {
        CommandRequest::builder()
            .command(CommandKind::CreateRole)
            .options(options)
            .invoker_id(11)
            .channel_id(22)
            .guild_id(33)
            .build()
    }

    #[test]
    fn command_names_round_trip() {
        for kind in [
            CommandKind::CreateChannel,
            CommandKind::CreateCategory,
            CommandKind::CreateVoiceChannel,
            CommandKind::CreateRole,
            CommandKind::CreateAndGrantRole,
            CommandKind::CreateThread,
        ] {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("createwebhook"), None);
    }

    #[test]
    fn typed_lookups_require_exact_name_and_type() {
        let mut options = BTreeMap::new();
        options.insert(
            "rolename".to_string(),
            OptionValue::String("Scout".to_string()),
        );
        options.insert(
            "grantroletocommanduser".to_string(),
            OptionValue::Boolean(true),
        );
        let request = request_with(options);

        assert_eq!(request.get_string("rolename"), Some("Scout"));
        assert_eq!(request.get_string("roleName"), None);
        assert_eq!(request.get_boolean("grantroletocommanduser"), Some(true));
        assert_eq!(request.get_boolean("rolename"), None);
        assert_eq!(request.get_member("rolename"), None);
    }

    #[test]
    fn unset_boolean_defaults_to_false() {
        let request = request_with(BTreeMap::new());
        assert!(!request.get_boolean("messageparent").unwrap_or(false));
    }
}
