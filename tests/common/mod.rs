//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use method_contracts::testing::{recording_contract, RecordingListener};
use method_contracts::{Contract, ContractError, Enumeration};

// ============================================================================
// ENUM FIXTURES
// ============================================================================

/// Three-valued key used by the dispatch tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
pub enum Level {
    None,
    Some,
    More,
}

/// `{None: 10, Some: 20, More: 30}`.
pub fn level_table() -> HashMap<Level, i32> {
    HashMap::from([(Level::None, 10), (Level::Some, 20), (Level::More, 30)])
}

/// `level_table` without `More`.
pub fn short_level_table() -> HashMap<Level, i32> {
    HashMap::from([(Level::None, 10), (Level::Some, 20)])
}

/// Enum whose hand-written `Enumeration` forgets its last variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partial {
    A,
    B,
    C,
}

impl Enumeration for Partial {
    const VARIANTS: &'static [Self] = &[Partial::A, Partial::B];

    fn discriminant(self) -> i128 {
        self as i128
    }
}

// ============================================================================
// CHECKERS
// ============================================================================

/// Development checker that records instead of breaking.
pub fn recording() -> (Contract, Arc<RecordingListener>) {
    recording_contract()
}

/// Both backends, each with a listener that records (deployment never calls it).
pub fn both_backends() -> Vec<(Contract, Arc<RecordingListener>)> {
    let (development, dev_listener) = recording_contract();
    let deployment_listener = Arc::new(RecordingListener::default());
    let deployment = Contract::deployment().with_listener(deployment_listener.clone());
    vec![(development, dev_listener), (deployment, deployment_listener)]
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// The listener saw exactly one failure, with this message.
pub fn assert_reported_once(listener: &RecordingListener, expected: &str) {
    assert!(
        listener.is_only_one_message(),
        "expected one report, got {:?}",
        listener.messages()
    );
    assert_eq!(listener.last_message().as_deref(), Some(expected));
}

/// Message with the `, line N` fragment removed, for comparing against the
/// line-free forms.
pub fn without_line(message: &str) -> String {
    match message.find(", line ") {
        Some(start) => {
            let rest = &message[start + ", line ".len()..];
            let digits = rest.chars().take_while(char::is_ascii_digit).count();
            format!("{}{}", &message[..start], &rest[digits..])
        }
        None => message.to_string(),
    }
}

pub fn assert_broken(err: &ContractError) {
    assert!(err.is_contract_violation(), "expected Broken, got {:?}", err);
}

pub fn assert_argument_null(err: &ContractError) {
    assert!(
        matches!(err, ContractError::ArgumentNull { .. }),
        "expected ArgumentNull, got {:?}",
        err
    );
}

pub fn assert_invalid_argument(err: &ContractError) {
    assert!(
        matches!(err, ContractError::InvalidArgument { .. }),
        "expected InvalidArgument, got {:?}",
        err
    );
}
