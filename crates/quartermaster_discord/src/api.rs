//! The remote-call seam for one invocation.

use async_trait::async_trait;
use quartermaster_core::ChannelContext;
use quartermaster_error::ProvisionResult;

/// Proof that the single acknowledgment reply of one invocation was sent.
///
/// Minted only by [`Provisioner::acknowledge`] and consumed by
/// [`Provisioner::finalize`], so a handler cannot finalize twice, and
/// operations that act on the acknowledgment message cannot run before the
/// acknowledgment exists. The reply itself is addressed through the
/// interaction, so the ticket carries no ids.
#[derive(Debug)]
pub struct AckTicket {
    _private: (),
}

impl AckTicket {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Remote operations one invocation needs, bound to a single interaction.
///
/// Each method maps to a single Discord HTTP call. [`crate::HttpProvisioner`]
/// is the live implementation; orchestration tests substitute a recording
/// mock. Implementations are per-invocation, so no state is shared across
/// concurrent invocations.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Send the initial reply inside the acknowledgment window and mint
    /// the invocation's ticket. Failure voids the whole invocation.
    async fn acknowledge(&self, content: &str) -> ProvisionResult<AckTicket>;

    /// Edit the acknowledgment with the terminal outcome. Consumes the
    /// ticket; there is no second finalization.
    async fn finalize(&self, ticket: AckTicket, content: &str) -> ProvisionResult<()>;

    /// Send an ephemeral follow-up notice (grant warnings, idempotency
    /// notices) without touching the acknowledgment message.
    async fn notify(&self, content: &str) -> ProvisionResult<()>;

    /// Observe the invoking channel: thread status and parent category.
    async fn channel_context(&self) -> ProvisionResult<ChannelContext>;

    /// Whether the acknowledgment message already carries a thread.
    async fn reply_has_thread(&self, ticket: &AckTicket) -> ProvisionResult<bool>;

    /// Create a category at the top of the channel list. Returns its id.
    async fn create_category(&self, name: &str) -> ProvisionResult<u64>;

    /// Create a stray text channel. Returns its id.
    async fn create_text_channel(&self, name: &str) -> ProvisionResult<u64>;

    /// Create a voice channel, nested under `parent` when given. Returns
    /// its id.
    async fn create_voice_channel(&self, name: &str, parent: Option<u64>) -> ProvisionResult<u64>;

    /// Create a role with an optional 24-bit color. Returns its id.
    async fn create_role(&self, name: &str, color: Option<u32>) -> ProvisionResult<u64>;

    /// Create an orphaned thread in the invoking channel. Returns its id.
    async fn create_orphan_thread(&self, name: &str) -> ProvisionResult<u64>;

    /// Create a thread anchored to the acknowledgment message. Returns
    /// its id.
    async fn create_thread_on_message(
        &self,
        ticket: &AckTicket,
        name: &str,
    ) -> ProvisionResult<u64>;

    /// Add a role to a guild member.
    async fn grant_role(&self, member_id: u64, role_id: u64) -> ProvisionResult<()>;
}
