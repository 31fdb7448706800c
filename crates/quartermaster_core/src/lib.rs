//! Command model and decision logic for Quartermaster.
//!
//! Everything in this crate is platform-agnostic: invocation snapshots,
//! option defaulting, payload validation, role-color resolution, and the
//! terminal outcome model. Network I/O lives in `quartermaster_discord`;
//! this crate never suspends.

#![warn(missing_docs)]

mod color;
mod context;
mod outcome;
pub mod reply;
mod request;
mod spec;

pub use color::{ROLE_COLOR_PRESETS, parse_color, resolve_role_color};
pub use context::ChannelContext;
pub use outcome::{GrantOutcome, Outcome};
pub use request::{CommandKind, CommandRequest, OptionValue};
pub use spec::{CHANNEL_NAME_MAX, ROLE_NAME_MAX, THREAD_NAME_MAX, ResourceSpec};
