// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design-by-contract checks for ordinary Rust functions.
//!
//! Preconditions, postconditions and invariants are written inline as macros
//! that capture their own source text and line, so a failure reads
//! `Requirement not met, line 42: len > 0` without hand-written messages.
//! Runtime-built dispatch tables keyed by enums get the exhaustiveness a
//! `match` would have given them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  macros.rs  │────▶│ contract.rs  │────▶│    report.rs     │
//! │ (require!,  │     │ (Contract,   │     │ (Backend,        │
//! │  map!, ...) │     │  fail)       │     │  Listener)       │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   site.rs   │     │ diagnostic.rs│────▶│    error.rs      │
//! │ (expr text, │     │ (Category,   │     │ (ContractError,  │
//! │  line)      │     │  messages)   │     │  BrokenContract) │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! # Backends
//!
//! | Backend       | On failure                                      |
//! |---------------|-------------------------------------------------|
//! | `Development` | log at `error`, notify the listener, return Err |
//! | `Deployment`  | log at `debug`, return Err                      |
//!
//! The default development listener panics, which stops a debugger or a test
//! at the broken contract. Pick the backend with `METHOD_CONTRACTS_BACKEND`
//! or [`Contract::install`].
//!
//! # Usage
//!
//! ```
//! use method_contracts::{require, ensure, Contract, Result};
//!
//! fn average(values: &[f64]) -> Result<f64> {
//!     let contract = Contract::deployment();
//!     require!(contract; !values.is_empty())?;
//!     let mean = values.iter().sum::<f64>() / values.len() as f64;
//!     ensure!(contract; mean.is_finite())?;
//!     Ok(mean)
//! }
//!
//! assert_eq!(average(&[1.0, 3.0]).unwrap(), 2.0);
//! let err = average(&[]).unwrap_err();
//! assert!(err.message().ends_with(": !values.is_empty()"));
//! ```

extern crate self as method_contracts;

mod config;
mod contract;
mod diagnostic;
mod dynamic;
mod error;
mod macros;
mod map;
pub mod metadata;
mod report;
mod site;
pub mod testing;

pub use config::{Config, ConfigError, BACKEND_ENV};
pub use contract::Contract;
pub use diagnostic::{Category, Fault, Violation};
pub use dynamic::Dynamic;
pub use error::{BrokenContract, Cause, ContractError, Result};
pub use map::Enumeration;
pub use report::{Backend, BreakListener, Listener};
pub use site::Site;

/// `#[derive(Enumeration)]` for fieldless enums.
pub use method_contracts_macros::Enumeration;

/// Attribute macros that record contract metadata on a function.
///
/// See [`metadata`] for the records they produce. Methods of a trait or of a
/// trait impl need [`contracts`](attr::contracts) on the enclosing block.
pub mod attr {
    pub use method_contracts_macros::{
        access, contracts, ensure, initialize_with, require, require_not_null,
    };
}
