// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Startup configuration for the process-wide checker.
//!
//! The only knob is the reporting backend. It comes from
//! `METHOD_CONTRACTS_BACKEND` when set, else from the build profile.
//! `Config` also deserializes, so a host application can nest it in its own
//! config file and hand it to [`Contract::from_config`](crate::Contract::from_config).

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::Backend;

/// Environment variable selecting the backend.
pub const BACKEND_ENV: &str = "METHOD_CONTRACTS_BACKEND";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown contract backend '{value}'")]
    UnknownBackend { value: String },
    #[error("METHOD_CONTRACTS_BACKEND is not valid unicode")]
    NotUnicode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: Backend,
}

impl Config {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Read the backend from the environment.
    ///
    /// Unset or empty means "follow the build profile".
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BACKEND_ENV) {
            Ok(value) => Self::from_value(Some(&value)),
            Err(env::VarError::NotPresent) => Self::from_value(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }

    fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let backend = match value {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Backend::for_build(),
        };
        Ok(Self { backend })
    }
}
