// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract checker.
//!
//! [`Contract`] holds the reporting backend and listener; every check funnels
//! its failure through [`Contract::fail`], so message text and category are the
//! same whichever backend runs. On success no check allocates: the [`Site`] is
//! static data and the message is only rendered after the condition fails.
//!
//! Most code never builds a `Contract` by hand. The macros (`require!`,
//! `ensure!`, `invariant!`, ...) use [`Contract::global`], which is configured
//! from the environment on first use. Tests and embedders that want their own
//! listener pass a `Contract` explicitly: `require!(contract; len > 0)`.
//!
//! # Assert vs Require
//!
//! | Family     | Who must uphold it | Error on failure                    |
//! |------------|--------------------|-------------------------------------|
//! | `require*` | the caller         | `ArgumentNull` / `InvalidArgument`  |
//! | `ensure`   | the implementation | `Broken`                            |
//! | `assert*`  | the implementation | `Broken`                            |

use std::any::{type_name, Any};
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::diagnostic::{Category, Violation};
use crate::dynamic::Dynamic;
use crate::error::{Cause, ContractError, Result};
use crate::report::{Backend, BreakListener, Listener};
use crate::site::Site;

static GLOBAL: OnceLock<Contract> = OnceLock::new();

/// A contract checker bound to a reporting backend.
#[derive(Clone)]
pub struct Contract {
    backend: Backend,
    listener: Arc<dyn Listener>,
}

impl fmt::Debug for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::new(Backend::for_build())
    }
}

impl Contract {
    /// A checker on `backend` with the default [`BreakListener`].
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            listener: Arc::new(BreakListener),
        }
    }

    /// Development backend reporting to `listener`.
    pub fn development(listener: Arc<dyn Listener>) -> Self {
        Self {
            backend: Backend::Development,
            listener,
        }
    }

    /// Deployment backend: failures come back as errors.
    pub fn deployment() -> Self {
        Self::new(Backend::Deployment)
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(config.backend)
    }

    /// Replace the development listener.
    pub fn with_listener(mut self, listener: Arc<dyn Listener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The process-wide checker used by the macros.
    ///
    /// Built from [`Config::from_env`] on first use unless [`Contract::install`]
    /// ran earlier. An unreadable environment falls back to the build profile.
    pub fn global() -> &'static Contract {
        GLOBAL.get_or_init(|| {
            let config = Config::from_env().unwrap_or_else(|err| {
                tracing::warn!(
                    target: "method_contracts",
                    error = %err,
                    "ignoring contract configuration"
                );
                Config::default()
            });
            tracing::debug!(
                target: "method_contracts",
                backend = %config.backend,
                "contract checker initialized"
            );
            Contract::from_config(config)
        })
    }

    /// Select the process-wide checker. Only the first call before any use of
    /// [`Contract::global`] takes effect; later calls get their argument back.
    pub fn install(contract: Contract) -> std::result::Result<(), Contract> {
        GLOBAL.set(contract)
    }

    /// Report a failed check through the backend and build the caller's error.
    pub fn fail(&self, violation: Violation, cause: Option<Cause>) -> ContractError {
        // INVARIANT: called once per failed check; no check reports twice.
        let message = violation.to_string();
        let site = violation.site();

        match self.backend {
            Backend::Development => {
                tracing::error!(
                    target: "method_contracts",
                    category = violation.category().name(),
                    file = site.file(),
                    line = site.line(),
                    "{}",
                    message
                );
                self.listener.fail(&message, violation.detail());
            }
            Backend::Deployment => {
                tracing::debug!(
                    target: "method_contracts",
                    category = violation.category().name(),
                    file = site.file(),
                    line = site.line(),
                    "{}",
                    message
                );
            }
        }

        violation.into_error(message, cause)
    }

    fn check(&self, condition: bool, category: Category, site: Site) -> Result<()> {
        if condition {
            Ok(())
        } else {
            Err(self.fail(Violation::new(category, site), None))
        }
    }

    // ========================================================================
    // BOOLEAN CHECKS
    // ========================================================================

    /// Precondition: the caller must have made `condition` true.
    #[inline]
    pub fn require(&self, condition: bool, site: Site) -> Result<()> {
        self.check(condition, Category::RequirementNotMet, site)
    }

    /// Postcondition: this code promised `condition`.
    #[inline]
    pub fn ensure(&self, condition: bool, site: Site) -> Result<()> {
        self.check(condition, Category::PostconditionFailed, site)
    }

    /// Internal invariant.
    #[inline]
    pub fn assert(&self, condition: bool, site: Site) -> Result<()> {
        self.check(condition, Category::AssertFailed, site)
    }

    // ========================================================================
    // PRESENCE AND TYPE CHECKS
    // ========================================================================

    /// The value must be present; this code is responsible for that.
    #[inline]
    pub fn assert_not_null<T>(&self, value: Option<T>, site: Site) -> Result<T> {
        match value {
            Some(value) => Ok(value),
            None => Err(self.fail(Violation::new(Category::UnexpectedNull, site), None)),
        }
    }

    /// The value must be present and a `T`; this code is responsible for that.
    pub fn assert_of_type<'a, T: Any>(
        &self,
        value: Option<&'a dyn Dynamic>,
        site: Site,
    ) -> Result<&'a T> {
        let value = self.assert_not_null(value, site)?;
        match value.downcast_ref::<T>() {
            Some(typed) => Ok(typed),
            None => Err(self.fail(
                Violation::new(
                    Category::UnexpectedType {
                        expected: type_name::<T>(),
                    },
                    site,
                ),
                None,
            )),
        }
    }

    /// The caller must pass a present value of type `T`.
    ///
    /// Absent gives `ArgumentNull`, wrong type gives `InvalidArgument`.
    pub fn require_not_null_as<'a, T: Any>(
        &self,
        value: Option<&'a dyn Dynamic>,
        site: Site,
    ) -> Result<&'a T> {
        // INVARIANT: presence before type. Absent is never a type mismatch.
        let Some(value) = value else {
            return Err(self.fail(Violation::new(Category::NullArgument, site), None));
        };
        match value.downcast_ref::<T>() {
            Some(typed) => Ok(typed),
            None => Err(self.fail(
                Violation::new(
                    Category::InvalidArgumentType {
                        expected: type_name::<T>(),
                        actual: value.type_name(),
                    },
                    site,
                ),
                None,
            )),
        }
    }

    /// The caller must pass a present value.
    ///
    /// Meant for owned resources: the value moves through untouched, so its
    /// `Drop` still runs wherever the caller's scope ends.
    #[inline]
    pub fn require_not_null<T>(&self, value: Option<T>, site: Site) -> Result<T> {
        match value {
            Some(value) => Ok(value),
            None => Err(self.fail(Violation::new(Category::InvalidNullArgument, site), None)),
        }
    }

    // ========================================================================
    // NO-THROW CHECKS
    // ========================================================================

    /// Run `f`, treating a panic as a broken contract.
    ///
    /// The panic is caught; the returned error wraps its message. The default
    /// panic hook still prints it.
    pub fn assert_no_throw<T>(&self, f: impl FnOnce() -> T, site: Site) -> Result<T> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Ok(value),
            Err(payload) => {
                let cause = Cause::from_panic(payload.as_ref());
                Err(self.unexpected(cause, site))
            }
        }
    }

    /// Run `f`, treating an `Err` as a broken contract.
    pub fn assert_ok<T, E>(&self, f: impl FnOnce() -> std::result::Result<T, E>, site: Site) -> Result<T>
    where
        E: StdError + 'static,
    {
        f().map_err(|err| self.unexpected(Cause::capture(&err), site))
    }

    fn unexpected(&self, cause: Cause, site: Site) -> ContractError {
        let detail = cause.message().to_string();
        self.fail(
            Violation::new(Category::UnexpectedException { detail }, site),
            Some(cause),
        )
    }
}
