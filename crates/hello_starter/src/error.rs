//! Starter error contracts.
//!
//! # Invariants
//! - `Resolution` is startup-fatal: callers must not fall back silently.
//! - Error messages are single-line and safe to log.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result alias used across starter APIs.
pub type StarterResult<T> = Result<T, StarterError>;

/// Starter registration, resolution, and bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarterError {
    /// No implementation is registered for the requested capability.
    Resolution { capability: &'static str },
    /// A second explicit implementation was offered for one capability.
    DuplicateRegistration {
        capability: &'static str,
        existing: String,
        attempted: String,
    },
    InvalidComponentName(String),
    /// A one-shot runner was asked to run again.
    RunnerAlreadyCompleted(&'static str),
    Config(String),
    Logging(String),
}

impl Display for StarterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution { capability } => {
                write!(f, "no component registered for capability `{capability}`")
            }
            Self::DuplicateRegistration {
                capability,
                existing,
                attempted,
            } => write!(
                f,
                "capability `{capability}` already has explicit component `{existing}`; refusing `{attempted}`"
            ),
            Self::InvalidComponentName(value) => write!(f, "component name is invalid: {value}"),
            Self::RunnerAlreadyCompleted(name) => {
                write!(f, "runner `{name}` already completed")
            }
            Self::Config(message) => write!(f, "configuration error: {message}"),
            Self::Logging(message) => write!(f, "logging error: {message}"),
        }
    }
}

impl Error for StarterError {}
