//! Per-command orchestration.
//!
//! [`dispatch`] drives one invocation end to end: acknowledge, run the
//! command-specific branch, and finalize exactly once on every path. All
//! remote effects go through the [`Provisioner`] seam, so the decision
//! trees here are testable against a recording mock.

use crate::api::{AckTicket, Provisioner};
use quartermaster_core::{
    CommandKind, CommandRequest, GrantOutcome, Outcome, ResourceSpec, reply, resolve_role_color,
};
use quartermaster_error::{ProvisionError, ProvisionErrorKind, ProvisionResult, ResourceKind};
use tracing::{error, info, instrument, warn};


/// Terminal result of a command branch, before finalization.
struct Completion {
    outcome: Outcome,
    message: String,
}

impl Completion {
    fn success(message: String) -> Self {
        Self {
            outcome: Outcome::Success,
            message,
        }
    }

    fn with_warning(message: String) -> Self {
        Self {
            outcome: Outcome::SuccessWithWarning,
            message,
        }
    }
}

/// Run one invocation end to end.
///
/// Acknowledges inside the platform window, executes the command branch,
/// and guarantees a terminal edit whatever the branch did. Only an
/// acknowledgment failure returns `Err`; everything later is recorded,
/// logged, and folded into the finalization message.
#[instrument(skip(api, request), fields(command = request.command().name()))]
pub async fn dispatch(api: &dyn Provisioner, request: &CommandRequest) -> ProvisionResult<Outcome> {
    // The gate: nothing else runs unless the initial reply lands in time.
    let ticket = api.acknowledge(reply::WORKING).await?;

    let run = match request.command() {
        CommandKind::CreateChannel => create_channel(api, request).await,
        CommandKind::CreateCategory => create_category(api, request).await,
        CommandKind::CreateVoiceChannel => create_voice_channel(api, request).await,
        CommandKind::CreateRole => create_role(api, request).await,
        CommandKind::CreateAndGrantRole => create_and_grant_role(api, request).await,
        CommandKind::CreateThread => create_thread(api, request, &ticket).await,
    };

    let completion = match run {
        Ok(completion) => completion,
        Err(err) => {
            error!(error = %err, "invocation failed");
            Completion {
                outcome: Outcome::Failure,
                message: failure_reply(&err, *request.command()),
            }
        }
    };

    api.finalize(ticket, &completion.message).await?;
    info!(outcome = ?completion.outcome, "invocation finalized");
    Ok(completion.outcome)
}

/// Translate an error into the terminal user-facing message. Validation
/// feedback passes through; platform error detail stays in the logs.
fn failure_reply(err: &ProvisionError, command: CommandKind) -> String {
    match &err.kind {
        ProvisionErrorKind::Validation(message) => message.clone(),
        ProvisionErrorKind::StructuralConstraint(_) => reply::THREAD_IN_THREAD.to_string(),
        ProvisionErrorKind::AlreadyExists(_) => reply::MESSAGE_HAS_THREAD.to_string(),
        ProvisionErrorKind::ResourceCreation { resource, .. } => reply::creation_failed(*resource),
        _ => reply::creation_failed(command.resource()),
    }
}

async fn create_channel(
    api: &dyn Provisioner,
    request: &CommandRequest,
) -> ProvisionResult<Completion> {
    let spec = ResourceSpec::text_channel(request.get_string("channelname").unwrap_or_default())?;
    let channel_id = api.create_text_channel(spec.name()).await?;
    info!(channel_id, "text channel created");
    Ok(Completion::success(reply::created(
        ResourceKind::TextChannel,
    )))
}

async fn create_category(
    api: &dyn Provisioner,
    request: &CommandRequest,
) -> ProvisionResult<Completion> {
    let spec = ResourceSpec::category(request.get_string("categoryname").unwrap_or_default())?;
    let category_id = api.create_category(spec.name()).await?;
    info!(category_id, "category created");
    Ok(Completion::success(reply::created(ResourceKind::Category)))
}

/// Voice channels mirror the invoking context: a command issued from a
/// channel inside a category lands the new sibling in that same category,
/// one issued from a stray channel lands at the top level.
async fn create_voice_channel(
    api: &dyn Provisioner,
    request: &CommandRequest,
) -> ProvisionResult<Completion> {
    let context = api.channel_context().await?;
    let spec = ResourceSpec::voice_channel(
        request.get_string("voicechannelname").unwrap_or_default(),
        context.parent_category,
    )?;
    let channel_id = api.create_voice_channel(spec.name(), *spec.parent()).await?;
    info!(channel_id, nested = spec.parent().is_some(), "voice channel created");

    let message = if spec.parent().is_some() {
        reply::created_in_category()
    } else {
        reply::created(ResourceKind::VoiceChannel)
    };
    Ok(Completion::success(message))
}

async fn create_role(
    api: &dyn Provisioner,
    request: &CommandRequest,
) -> ProvisionResult<Completion> {
    let spec = ResourceSpec::role(request.get_string("rolename").unwrap_or_default(), None)?;
    let role_id = api.create_role(spec.name(), *spec.color()).await?;
    info!(role_id, "role created");
    Ok(Completion::success(reply::created(ResourceKind::Role)))
}

async fn create_and_grant_role(
    api: &dyn Provisioner,
    request: &CommandRequest,
) -> ProvisionResult<Completion> {
    let color = resolve_role_color(
        request.get_string("customrolecolor"),
        request.get_string("rolecolor"),
    )?;
    let spec = ResourceSpec::role(request.get_string("rolename").unwrap_or_default(), color)?;
    let role_id = api.create_role(spec.name(), *spec.color()).await?;
    info!(role_id, "role created");

    if resolve_grants(api, request, role_id).await {
        Ok(Completion::with_warning(reply::created(ResourceKind::Role)))
    } else {
        Ok(Completion::success(reply::created(ResourceKind::Role)))
    }
}

/// Post-creation grant branch. Grant outcomes are values, never errors:
/// a refused grant surfaces as an ephemeral warning and downgrades the
/// invocation to success-with-warning, but the created role stands.
/// Returns whether any grant warned.
async fn resolve_grants(api: &dyn Provisioner, request: &CommandRequest, role_id: u64) -> bool {
    let invoker = *request.invoker_id();
    let self_grant = request
        .get_boolean("grantroletocommanduser")
        .unwrap_or(false);
    let mut warned = false;

    if self_grant {
        if let GrantOutcome::Failed(reason) = attempt_grant(api, invoker, role_id).await {
            warn!(%reason, "self-grant refused");
            send_notice(api, reply::SELF_GRANT_FAILED).await;
            warned = true;
        }
    }

    if let Some(target) = request.get_member("membertoreceiverole") {
        let outcome = if target == invoker && self_grant {
            // The invoker already received the role above; adding it twice
            // would be a duplicate call the platform rejects.
            GrantOutcome::AlreadyGranted
        } else {
            attempt_grant(api, target, role_id).await
        };
        match outcome {
            GrantOutcome::Granted => {}
            GrantOutcome::AlreadyGranted => send_notice(api, reply::ALREADY_GRANTED).await,
            GrantOutcome::Failed(reason) => {
                warn!(%reason, target, "member grant refused");
                send_notice(api, reply::TARGET_GRANT_FAILED).await;
                warned = true;
            }
        }
    }

    warned
}

async fn attempt_grant(api: &dyn Provisioner, member_id: u64, role_id: u64) -> GrantOutcome {
    match api.grant_role(member_id, role_id).await {
        Ok(()) => {
            info!(member_id, role_id, "role granted");
            GrantOutcome::Granted
        }
        Err(err) => GrantOutcome::Failed(err.to_string()),
    }
}

/// Follow-up notices are best-effort; a failed notice never changes the
/// invocation outcome.
async fn send_notice(api: &dyn Provisioner, content: &str) {
    if let Err(err) = api.notify(content).await {
        error!(error = %err, "follow-up notice failed");
    }
}

async fn create_thread(
    api: &dyn Provisioner,
    request: &CommandRequest,
    ticket: &AckTicket,
) -> ProvisionResult<Completion> {
    let spec = ResourceSpec::thread(
        request.get_string("threadname").unwrap_or_default(),
        request.get_boolean("messageparent").unwrap_or(false),
    )?;

    let context = api.channel_context().await?;
    if context.is_thread {
        // Threads cannot parent threads; stop before any creation call.
        return Err(ProvisionError::new(
            ProvisionErrorKind::StructuralConstraint(
                "threads cannot parent threads".to_string(),
            ),
        ));
    }

    let thread_id = if *spec.anchor_to_message() {
        if api.reply_has_thread(ticket).await? {
            return Err(ProvisionError::new(ProvisionErrorKind::AlreadyExists(
                "the acknowledgment message already has a thread".to_string(),
            )));
        }
        api.create_thread_on_message(ticket, spec.name()).await?
    } else {
        api.create_orphan_thread(spec.name()).await?
    };
    info!(thread_id, anchored = *spec.anchor_to_message(), "thread created");
    Ok(Completion::success(reply::created(ResourceKind::Thread)))
}
