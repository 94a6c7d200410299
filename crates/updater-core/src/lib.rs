//! Serverless template runtime patching
//!
//! Loads a CloudFormation/SAM YAML template, rewrites outdated Lambda
//! `Runtime` values found at `Resources.*.Properties.Runtime`, and writes
//! the template back in place. Intrinsic-function tags (`!Sub`, `!Ref`)
//! are tolerated on load and normalized to plain scalars.

pub mod config;
pub mod document;
pub mod error;
pub mod update;
pub mod updater;

pub use config::{DEFAULT_REPLACEMENT, DEFAULT_THRESHOLD, UpdaterConfig};
pub use error::{Error, Result};
pub use update::{RuntimeChange, update_runtime};
pub use updater::{Outcome, TemplateUpdater};
