// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by contract checks.
//!
//! Two sides, never mixed:
//!
//! - **Caller misuse**: `ArgumentNull` and `InvalidArgument`. The caller broke a
//!   precondition and can fix its call.
//! - **Contract violation**: `Broken`. The checked code broke its own promise
//!   (postcondition, invariant, non-exhaustive table, unexpected panic).
//!
//! `BrokenContract` keeps a snapshot of whatever caused it as a chain of
//! [`Cause`] messages rather than a live `Box<dyn Error>`. The snapshot is
//! `Clone`, comparable, and survives a round trip through serde.

use std::any::Any;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for contract checks.
pub type Result<T, E = ContractError> = std::result::Result<T, E>;

/// Failure of a contract check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A required argument was absent.
    #[error("{message}")]
    ArgumentNull { message: String },
    /// An argument was present but unacceptable.
    #[error("{message}")]
    InvalidArgument { message: String },
    /// The checked code broke its contract.
    #[error(transparent)]
    Broken(#[from] BrokenContract),
}

impl ContractError {
    /// The diagnostic text, identical across backends.
    pub fn message(&self) -> &str {
        match self {
            ContractError::ArgumentNull { message } | ContractError::InvalidArgument { message } => {
                message
            }
            ContractError::Broken(broken) => broken.message(),
        }
    }

    /// `true` for postconditions, invariants and other internal bugs.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, ContractError::Broken(_))
    }

    /// `true` when the caller is to blame.
    pub fn is_caller_misuse(&self) -> bool {
        !self.is_contract_violation()
    }
}

/// A detected breach of an invariant or postcondition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct BrokenContract {
    message: String,
    #[source]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<Box<Cause>>,
}

impl BrokenContract {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// What went wrong underneath, if anything was captured.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_deref()
    }
}

/// Snapshot of an error chain: each link's message, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct Cause {
    message: String,
    #[source]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Box<Cause>>,
}

impl Cause {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// A link whose underlying cause is `inner`.
    pub fn wrapping(message: impl Into<String>, inner: Cause) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(inner)),
        }
    }

    /// Walk `error` and its `source()` chain.
    pub fn capture(error: &(dyn StdError + 'static)) -> Self {
        Self {
            message: error.to_string(),
            source: error.source().map(|inner| Box::new(Cause::capture(inner))),
        }
    }

    /// Describe a panic payload. `panic!` payloads are `&str` or `String`;
    /// anything else is reported by type only.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        Self::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn inner(&self) -> Option<&Cause> {
        self.source.as_deref()
    }

    /// Messages of this link and every link below it.
    pub fn chain(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self), |cause| cause.inner()).map(Cause::message)
    }
}
