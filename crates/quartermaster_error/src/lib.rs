//! Error types for the Quartermaster provisioning bot.
//!
//! Every error carries the source location where it was raised, captured
//! with `#[track_caller]`, so operator logs point at the failing call site
//! without a backtrace.

#![warn(missing_docs)]

mod provision;

pub use provision::{ProvisionError, ProvisionErrorKind, ProvisionResult, ResourceKind};
