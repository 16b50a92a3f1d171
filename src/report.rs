// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reporting backends.
//!
//! A failed check is reported exactly once, through one of two backends
//! chosen at startup:
//!
//! - **Development**: the failure is logged and handed to a [`Listener`]. The
//!   default listener, [`BreakListener`], panics with the diagnostic, which is
//!   the Rust equivalent of stopping in the debugger. Test harnesses install a
//!   recording listener instead and inspect what was reported.
//! - **Deployment**: no listener; the caller gets the typed error and handles
//!   it like any other `Result`.
//!
//! Either way the message text is the same. The backend is a value, not a
//! `cfg`, so both paths run in the same test binary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Which reporting path failed checks take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Interrupt with a diagnostic (listener), for interactive inspection.
    Development,
    /// Return the typed error to the caller.
    Deployment,
}

impl Backend {
    /// `Development` in debug builds, `Deployment` in release builds.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Backend::Development
        } else {
            Backend::Deployment
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Development => "development",
            Backend::Deployment => "deployment",
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::for_build()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "debug" => Ok(Backend::Development),
            "deployment" | "release" => Ok(Backend::Deployment),
            _ => Err(ConfigError::UnknownBackend {
                value: value.to_string(),
            }),
        }
    }
}

/// Receives development-mode failures.
///
/// `fail` is called once per failed check, after the message is rendered.
/// Implementations may panic (interrupt) or record and return.
pub trait Listener: Send + Sync {
    fn fail(&self, message: &str, detail: Option<&str>);
}

/// Default development listener: stop right here.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreakListener;

impl Listener for BreakListener {
    fn fail(&self, message: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => panic!("{}: {}", message, detail),
            None => panic!("{}", message),
        }
    }
}
