// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Code generation for the contract metadata constants.

pub mod records;

pub use records::{contract_const, contract_table, screaming_snake};
