//! Slash-command registration metadata.
//!
//! Declarative only: names, descriptions, option schemas, and permission
//! flags. Every command is restricted to members who can manage channels
//! and disabled in DMs; none of these resources can exist outside a guild.

use quartermaster_core::{CHANNEL_NAME_MAX, ROLE_COLOR_PRESETS, ROLE_NAME_MAX, THREAD_NAME_MAX};
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

/// All command definitions, ready to register globally or per guild.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        create_channel(),
        create_category(),
        create_voice_channel(),
        create_role(),
        create_and_grant_role(),
        create_thread(),
    ]
}

fn restricted(command: CreateCommand) -> CreateCommand {
    command
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .dm_permission(false)
}

fn name_option(name: &str, description: &str, max: usize) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description)
        .min_length(1)
        .max_length(max as u16)
        .required(true)
}

fn create_channel() -> CreateCommand {
    restricted(
        CreateCommand::new("createchannel")
            .description("Creates a new text channel")
            .add_option(name_option(
                "channelname",
                "Choose the name to give to the channel",
                CHANNEL_NAME_MAX,
            )),
    )
}

fn create_category() -> CreateCommand {
    restricted(
        CreateCommand::new("createcategory")
            .description("Creates a new category")
            .add_option(name_option(
                "categoryname",
                "Choose the name to give to the category",
                CHANNEL_NAME_MAX,
            )),
    )
}

fn create_voice_channel() -> CreateCommand {
    restricted(
        CreateCommand::new("createvoicechannel")
            .description("Creates a new voice channel")
            .add_option(name_option(
                "voicechannelname",
                "Choose the name to give to the voice channel",
                CHANNEL_NAME_MAX,
            )),
    )
}

fn create_role() -> CreateCommand {
    restricted(
        CreateCommand::new("createrole")
            .description("Creates a new role")
            .add_option(name_option(
                "rolename",
                "Choose the name to give to the role",
                ROLE_NAME_MAX,
            )),
    )
}

fn create_and_grant_role() -> CreateCommand {
    let mut preset = CreateCommandOption::new(
        CommandOptionType::String,
        "rolecolor",
        "Select a color for your role (using Discord defaults)",
    );
    for (name, value) in ROLE_COLOR_PRESETS {
        preset = preset.add_string_choice(name, value);
    }

    restricted(
        CreateCommand::new("createandgrantrole")
            .description("Creates a new role and then grants it to a member")
            .add_option(name_option(
                "rolename",
                "Choose the name to give to the role",
                ROLE_NAME_MAX,
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "membertoreceiverole",
                    "The user you want to give the newly created role to",
                )
                .required(true),
            )
            .add_option(preset)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "customrolecolor",
                    "Select a custom color for your role (hex code only. overrides \"rolecolor\")",
                )
                .min_length(8)
                .max_length(8),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::Boolean,
                "grantroletocommanduser",
                "Choose if you should be granted the role after creation",
            )),
    )
}

fn create_thread() -> CreateCommand {
    restricted(
        CreateCommand::new("createthread")
            .description("Creates a new thread")
            .add_option(name_option(
                "threadname",
                "Choose the name to give to the thread",
                THREAD_NAME_MAX,
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "messageparent",
                    "Choose if this thread should use the initial message as parent",
                )
                .required(true),
            ),
    )
}
