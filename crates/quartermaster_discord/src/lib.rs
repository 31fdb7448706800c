//! Discord integration for Quartermaster.
//!
//! This crate owns everything that touches the Discord API: the
//! [`Provisioner`] trait abstracting the remote calls one invocation needs,
//! its live [`HttpProvisioner`] implementation over Serenity's HTTP client,
//! interaction-to-request extraction, slash-command registration metadata,
//! and the per-command orchestration in [`dispatch`].
//!
//! # Invocation protocol
//!
//! Discord voids an interaction that is not acknowledged within 3 seconds,
//! so every invocation follows the same strictly ordered phases:
//! acknowledge, validate, create, post-creation follow-ups, finalize. The
//! [`AckTicket`] type makes the protocol structural: creation-on-message
//! and finalization both require the ticket only a successful
//! acknowledgment can mint, and finalization consumes it.

#![warn(missing_docs)]

mod api;
mod extract;
mod handlers;
mod http_api;
mod registry;

pub use api::{AckTicket, Provisioner};
pub use extract::request_from_interaction;
pub use handlers::dispatch;
pub use http_api::HttpProvisioner;
pub use registry::command_definitions;
