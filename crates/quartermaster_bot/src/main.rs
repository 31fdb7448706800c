//! Gateway binary for Quartermaster.
//!
//! Connects to the Discord gateway, registers the slash-command schemas on
//! `ready`, and runs one [`dispatch`] per delivered command interaction.

mod config;

use config::{BotConfig, bot_token};
use quartermaster_discord::{HttpProvisioner, command_definitions, dispatch, request_from_interaction};
use serenity::all::{
    Client, Command, Context, EventHandler, GatewayIntents, GuildId, Interaction, Ready,
};
use serenity::async_trait;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

struct Handler {
    config: BotConfig,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "quartermaster connected");

        let definitions = command_definitions();
        let registered = match self.config.command_guild() {
            Some(guild) => GuildId::new(*guild).set_commands(&ctx.http, definitions).await,
            None => Command::set_global_commands(&ctx.http, definitions).await,
        };
        match registered {
            Ok(commands) => info!(count = commands.len(), "slash commands registered"),
            Err(e) => error!(error = %e, "slash command registration failed"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let request = match request_from_interaction(&command) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, command = %command.data.name, "could not read interaction");
                return;
            }
        };

        let api = match HttpProvisioner::new(ctx.http.clone(), &command) {
            Ok(api) => api,
            Err(e) => {
                error!(error = %e, "could not bind provisioner to interaction");
                return;
            }
        };

        match dispatch(&api, &request).await {
            Ok(outcome) => info!(?outcome, "invocation finalized"),
            Err(e) => error!(error = %e, "invocation aborted before finalization"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BotConfig::from_file(path)?,
        None => BotConfig::default(),
    };
    let token = bot_token()?;

    // Slash commands arrive over the gateway without privileged intents.
    let intents = GatewayIntents::empty();
    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { config })
        .await?;

    info!("starting quartermaster");
    client.start().await?;
    Ok(())
}
