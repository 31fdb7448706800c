//! Tests for slash-command registration metadata.
//!
//! Serenity's builders serialize to the exact JSON sent to the API, so the
//! declared schemas are asserted through their serialized form.

use quartermaster_discord::command_definitions;
use serde_json::Value as JsonValue;

fn definitions_json() -> Vec<JsonValue> {
    command_definitions()
        .into_iter()
        .map(|command| serde_json::to_value(command).expect("command serializes"))
        .collect()
}

fn find<'a>(commands: &'a [JsonValue], name: &str) -> &'a JsonValue {
    commands
        .iter()
        .find(|c| c["name"] == name)
        .unwrap_or_else(|| panic!("command {name} not registered"))
}

#[test]
fn all_six_commands_are_declared() {
    let commands = definitions_json();
    let mut names: Vec<&str> = commands
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "createandgrantrole",
            "createcategory",
            "createchannel",
            "createrole",
            "createthread",
            "createvoicechannel",
        ]
    );
}

#[test]
fn every_command_is_guild_only_and_permission_gated() {
    for command in definitions_json() {
        let name = command["name"].as_str().unwrap();
        // MANAGE_CHANNELS has bit value 16; permissions serialize as a string.
        assert_eq!(
            command["default_member_permissions"], "16",
            "{name} missing permission gate"
        );
        assert_eq!(command["dm_permission"], false, "{name} allows DMs");
    }
}

#[test]
fn name_options_carry_length_bounds() {
    let commands = definitions_json();
    for (command, option, max) in [
        ("createchannel", "channelname", 25),
        ("createcategory", "categoryname", 25),
        ("createvoicechannel", "voicechannelname", 25),
        ("createrole", "rolename", 100),
        ("createthread", "threadname", 100),
    ] {
        let options = find(&commands, command)["options"].as_array().unwrap();
        let declared = options
            .iter()
            .find(|o| o["name"] == option)
            .unwrap_or_else(|| panic!("{command} missing {option}"));
        assert_eq!(declared["required"], true);
        assert_eq!(declared["min_length"], 1);
        assert_eq!(declared["max_length"], max);
    }
}

#[test]
fn grant_role_command_declares_full_schema() {
    let commands = definitions_json();
    let options = find(&commands, "createandgrantrole")["options"]
        .as_array()
        .unwrap();

    let names: Vec<&str> = options
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    // Required options must precede optional ones.
    assert_eq!(
        names,
        vec![
            "rolename",
            "membertoreceiverole",
            "rolecolor",
            "customrolecolor",
            "grantroletocommanduser",
        ]
    );

    let preset = options.iter().find(|o| o["name"] == "rolecolor").unwrap();
    assert_eq!(preset["choices"].as_array().unwrap().len(), 25);

    let custom = options
        .iter()
        .find(|o| o["name"] == "customrolecolor")
        .unwrap();
    assert_eq!(custom["min_length"], 8);
    assert_eq!(custom["max_length"], 8);
}

#[test]
fn thread_command_requires_anchor_decision() {
    let commands = definitions_json();
    let options = find(&commands, "createthread")["options"].as_array().unwrap();
    let anchor = options
        .iter()
        .find(|o| o["name"] == "messageparent")
        .unwrap();
    assert_eq!(anchor["required"], true);
    // CommandOptionType::Boolean
    assert_eq!(anchor["type"], 5);
}
