//! Interaction-to-request extraction.

use quartermaster_core::{CommandKind, CommandRequest, OptionValue};
use quartermaster_error::{ProvisionError, ProvisionResult};
use serenity::all::{CommandInteraction, ResolvedValue};
use std::collections::BTreeMap;

/// Build the invocation snapshot from a delivered interaction.
///
/// Option types beyond string/boolean/user are not part of any registered
/// schema and are skipped.
///
/// # Errors
///
/// Returns a validation error for an unregistered command name or an
/// interaction delivered outside a guild.
pub fn request_from_interaction(
    interaction: &CommandInteraction,
) -> ProvisionResult<CommandRequest> {
    let command = CommandKind::from_name(&interaction.data.name).ok_or_else(|| {
        ProvisionError::validation(format!("Unknown command: {}", interaction.data.name))
    })?;

    let guild_id = interaction
        .guild_id
        .ok_or_else(|| ProvisionError::validation("This command only works inside a server."))?;

    let mut options = BTreeMap::new();
    for option in interaction.data.options() {
        let value = match option.value {
            ResolvedValue::String(s) => OptionValue::String(s.to_string()),
            ResolvedValue::Boolean(b) => OptionValue::Boolean(b),
            ResolvedValue::User(user, _) => OptionValue::Member(user.id.get()),
            _ => continue,
        };
        options.insert(option.name.to_string(), value);
    }

    Ok(CommandRequest::builder()
        .command(command)
        .options(options)
        .invoker_id(interaction.user.id.get())
        .channel_id(interaction.channel_id.get())
        .guild_id(guild_id.get())
        .build())
}
