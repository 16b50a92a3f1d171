// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the recording listener used in place of a debugger break.

#![doc(hidden)]

use std::sync::Arc;

use parking_lot::Mutex;

use crate::contract::Contract;
use crate::report::Listener;

/// One reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub message: String,
    pub detail: Option<String>,
}

/// Listener that records failures and lets execution continue.
#[derive(Debug, Default)]
pub struct RecordingListener {
    records: Mutex<Vec<Record>>,
}

impl RecordingListener {
    /// Did any check fail?
    pub fn is_assert_triggered(&self) -> bool {
        !self.records.lock().is_empty()
    }

    pub fn is_only_one_message(&self) -> bool {
        self.records.lock().len() == 1
    }

    pub fn last_message(&self) -> Option<String> {
        self.records.lock().last().map(|r| r.message.clone())
    }

    pub fn last_detail(&self) -> Option<String> {
        self.records.lock().last().and_then(|r| r.detail.clone())
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Listener for RecordingListener {
    fn fail(&self, message: &str, detail: Option<&str>) {
        self.records.lock().push(Record {
            message: message.to_string(),
            detail: detail.map(str::to_string),
        });
    }
}

/// A development-backend checker wired to a fresh recording listener.
pub fn recording_contract() -> (Contract, Arc<RecordingListener>) {
    let listener = Arc::new(RecordingListener::default());
    (Contract::development(listener.clone()), listener)
}
