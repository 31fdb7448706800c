//! Live [`Provisioner`] over Serenity's HTTP client.

use crate::api::{AckTicket, Provisioner};
use async_trait::async_trait;
use quartermaster_core::ChannelContext;
use quartermaster_error::{ProvisionError, ProvisionErrorKind, ProvisionResult, ResourceKind};
use serenity::all::{
    Channel, ChannelId, ChannelType, Colour, CommandInteraction, CreateChannel,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateThread, EditInteractionResponse, EditRole, GuildId,
    Http,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Per-invocation Discord API facade.
///
/// Holds the interaction it serves plus a shared HTTP client; dropped when
/// the invocation finishes. Rate limiting and request timeouts are
/// Serenity's concern.
pub struct HttpProvisioner {
    http: Arc<Http>,
    interaction: CommandInteraction,
    guild_id: GuildId,
}

impl HttpProvisioner {
    /// Bind a provisioner to one delivered interaction.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the interaction arrived outside a
    /// guild; every registered command is guild-only.
    pub fn new(http: Arc<Http>, interaction: &CommandInteraction) -> ProvisionResult<Self> {
        let guild_id = interaction
            .guild_id
            .ok_or_else(|| ProvisionError::validation("This command only works inside a server."))?;
        Ok(Self {
            http,
            interaction: interaction.clone(),
            guild_id,
        })
    }

    fn creation_error(resource: ResourceKind, err: serenity::Error) -> ProvisionError {
        ProvisionError::new(ProvisionErrorKind::ResourceCreation {
            resource,
            reason: err.to_string(),
        })
    }
}

#[async_trait]
impl Provisioner for HttpProvisioner {
    #[instrument(skip(self, content))]
    async fn acknowledge(&self, content: &str) -> ProvisionResult<AckTicket> {
        let reply = CreateInteractionResponseMessage::new().content(content);
        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(reply))
            .await
            .map_err(|e| {
                ProvisionError::new(ProvisionErrorKind::ProtocolTimeout(e.to_string()))
            })?;
        debug!("interaction acknowledged");
        Ok(AckTicket::new())
    }

    #[instrument(skip(self, content))]
    async fn finalize(&self, _ticket: AckTicket, content: &str) -> ProvisionResult<()> {
        self.interaction
            .edit_response(&self.http, EditInteractionResponse::new().content(content))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, content))]
    async fn notify(&self, content: &str) -> ProvisionResult<()> {
        let followup = CreateInteractionResponseFollowup::new()
            .content(content)
            .ephemeral(true);
        self.interaction.create_followup(&self.http, followup).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn channel_context(&self) -> ProvisionResult<ChannelContext> {
        let channel = self.http.get_channel(self.interaction.channel_id).await?;
        let Channel::Guild(channel) = channel else {
            return Err(ProvisionError::new(ProvisionErrorKind::Api(
                "interaction channel is not a guild channel".to_string(),
            )));
        };

        let is_thread = matches!(
            channel.kind,
            ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread
        );
        // For threads parent_id is the owning text channel, not a category.
        let parent_category = if is_thread {
            None
        } else {
            channel.parent_id.map(|id| id.get())
        };
        Ok(ChannelContext {
            is_thread,
            parent_category,
        })
    }

    #[instrument(skip_all)]
    async fn reply_has_thread(&self, _ticket: &AckTicket) -> ProvisionResult<bool> {
        // Fetched on demand; the interaction token addresses the reply.
        let message = self.interaction.get_response(&self.http).await?;
        Ok(message.thread.is_some())
    }

    #[instrument(skip(self))]
    async fn create_category(&self, name: &str) -> ProvisionResult<u64> {
        let builder = CreateChannel::new(name).kind(ChannelType::Category);
        let channel = self
            .guild_id
            .create_channel(&self.http, builder)
            .await
            .map_err(|e| Self::creation_error(ResourceKind::Category, e))?;
        Ok(channel.id.get())
    }

    #[instrument(skip(self))]
    async fn create_text_channel(&self, name: &str) -> ProvisionResult<u64> {
        let builder = CreateChannel::new(name).kind(ChannelType::Text);
        let channel = self
            .guild_id
            .create_channel(&self.http, builder)
            .await
            .map_err(|e| Self::creation_error(ResourceKind::TextChannel, e))?;
        Ok(channel.id.get())
    }

    #[instrument(skip(self))]
    async fn create_voice_channel(&self, name: &str, parent: Option<u64>) -> ProvisionResult<u64> {
        let mut builder = CreateChannel::new(name).kind(ChannelType::Voice);
        if let Some(category) = parent {
            builder = builder.category(ChannelId::new(category));
        }
        let channel = self
            .guild_id
            .create_channel(&self.http, builder)
            .await
            .map_err(|e| Self::creation_error(ResourceKind::VoiceChannel, e))?;
        Ok(channel.id.get())
    }

    #[instrument(skip(self))]
    async fn create_role(&self, name: &str, color: Option<u32>) -> ProvisionResult<u64> {
        let mut builder = EditRole::new().name(name);
        if let Some(value) = color {
            builder = builder.colour(Colour::new(value));
        }
        let role = self
            .guild_id
            .create_role(&self.http, builder)
            .await
            .map_err(|e| Self::creation_error(ResourceKind::Role, e))?;
        Ok(role.id.get())
    }

    #[instrument(skip(self))]
    async fn create_orphan_thread(&self, name: &str) -> ProvisionResult<u64> {
        let builder = CreateThread::new(name).kind(ChannelType::PublicThread);
        let thread = self
            .interaction
            .channel_id
            .create_thread(&self.http, builder)
            .await
            .map_err(|e| Self::creation_error(ResourceKind::Thread, e))?;
        Ok(thread.id.get())
    }

    #[instrument(skip_all)]
    async fn create_thread_on_message(
        &self,
        _ticket: &AckTicket,
        name: &str,
    ) -> ProvisionResult<u64> {
        let message = self
            .interaction
            .get_response(&self.http)
            .await
            .map_err(|e| Self::creation_error(ResourceKind::Thread, e))?;
        let thread = message
            .channel_id
            .create_thread_from_message(&self.http, message.id, CreateThread::new(name))
            .await
            .map_err(|e| Self::creation_error(ResourceKind::Thread, e))?;
        Ok(thread.id.get())
    }

    #[instrument(skip(self))]
    async fn grant_role(&self, member_id: u64, role_id: u64) -> ProvisionResult<()> {
        self.http
            .add_member_role(
                self.guild_id,
                serenity::all::UserId::new(member_id),
                serenity::all::RoleId::new(role_id),
                Some("quartermaster role grant"),
            )
            .await
            .map_err(|e| ProvisionError::new(ProvisionErrorKind::GrantDenied(e.to_string())))
    }
}
