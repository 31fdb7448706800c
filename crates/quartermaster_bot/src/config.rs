use derive_getters::Getters;
use quartermaster_error::{ProvisionError, ProvisionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use typed_builder::TypedBuilder;

/// Configuration for the bot process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct BotConfig {
    /// Guild to register commands in; commands register globally when
    /// unset. Guild registration propagates immediately, which is what
    /// you want while iterating on schemas.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    command_guild: Option<u64>,
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> ProvisionResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ProvisionError::configuration(format!("failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| ProvisionError::configuration(format!("failed to parse config file: {e}")))
    }
}

/// Resolve the bot token from the environment (a `.env` file is honored).
///
/// The token never lives in the config file.
pub fn bot_token() -> ProvisionResult<String> {
    dotenvy::dotenv().ok();
    std::env::var("DISCORD_TOKEN")
        .map_err(|_| ProvisionError::configuration("DISCORD_TOKEN is not set in the environment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartermaster_error::ProvisionErrorKind;

    #[test]
    fn empty_config_registers_globally() {
        let config: BotConfig = toml::from_str("").unwrap();
        assert_eq!(config.command_guild(), &None);
    }

    #[test]
    fn command_guild_parses() {
        let config: BotConfig = toml::from_str("command_guild = 1234567890").unwrap();
        assert_eq!(config.command_guild(), &Some(1234567890));
    }

    #[test]
    fn unreadable_config_reports_configuration_error() {
        let err = BotConfig::from_file("/nonexistent/quartermaster.toml").unwrap_err();
        assert!(matches!(err.kind, ProvisionErrorKind::Configuration(_)));
        assert!(err.to_string().contains("failed to read config file"));
    }
}
