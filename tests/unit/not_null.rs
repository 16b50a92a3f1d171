//! Tests for presence and type checks.

use std::fs::File;

use super::common::{
    assert_argument_null, assert_broken, assert_invalid_argument, assert_reported_once,
    both_backends, recording,
};
use method_contracts::{
    assert_not_null, assert_of_type, require_not_null, require_not_null_as, Backend, Dynamic,
    Site,
};

#[test]
fn test_assert_not_null_returns_same_value() {
    for (contract, listener) in both_backends() {
        let name = String::from("value");
        let ptr = name.as_ptr();
        let returned = assert_not_null!(contract; Some(name)).unwrap();
        assert_eq!(returned.as_ptr(), ptr);
        assert!(!listener.is_assert_triggered());
    }
}

#[test]
fn test_assert_not_null_absent() {
    for (contract, listener) in both_backends() {
        let err = contract
            .assert_not_null::<&str>(None, Site::text("Value"))
            .unwrap_err();
        assert_eq!(err.message(), "Unexpected null value: Value");
        assert_broken(&err);
        match contract.backend() {
            Backend::Development => assert_reported_once(&listener, "Unexpected null value: Value"),
            Backend::Deployment => assert!(!listener.is_assert_triggered()),
        }
    }
}

#[test]
fn test_assert_of_type_narrows() {
    let (contract, listener) = recording();
    let value = String::from("text");
    let narrowed = assert_of_type!(String, Some(&value as &dyn Dynamic); contract).unwrap();
    assert_eq!(narrowed, "text");
    assert!(!listener.is_assert_triggered());
}

#[test]
fn test_assert_of_type_incompatible() {
    let (contract, listener) = recording();
    let value = 12_u64;
    let err = contract
        .assert_of_type::<String>(Some(&value as &dyn Dynamic), Site::text("Value"))
        .unwrap_err();
    let expected = format!("Expected type '{}' for value: Value", std::any::type_name::<String>());
    assert_reported_once(&listener, &expected);
    assert_broken(&err);
}

#[test]
fn test_assert_of_type_absent_is_unexpected_null() {
    let (contract, listener) = recording();
    let err = contract
        .assert_of_type::<u64>(None, Site::text("Value"))
        .unwrap_err();
    assert_reported_once(&listener, "Unexpected null value: Value");
    assert_broken(&err);
}

#[test]
fn test_require_not_null_as_absent_is_argument_null() {
    let (contract, listener) = recording();
    let err = contract
        .require_not_null_as::<String>(None, Site::text("Value"))
        .unwrap_err();
    assert_reported_once(&listener, "Unexpected null value: Value");
    assert_argument_null(&err);
}

#[test]
fn test_require_not_null_as_wrong_type_is_invalid_argument() {
    let (contract, listener) = recording();
    let value = 3.5_f64;
    let err = require_not_null_as!(i32, Some(&value as &dyn Dynamic); contract).unwrap_err();
    assert!(
        err.message().starts_with("Invalid argument type, expected 'i32', got 'f64', line "),
        "{}",
        err.message()
    );
    assert!(listener.is_only_one_message());
    assert_invalid_argument(&err);
}

#[test]
fn test_require_not_null_moves_owned_resource() {
    let (contract, listener) = recording();
    let file = File::open(file!()).ok();
    let file = require_not_null!(contract; file).unwrap();
    assert!(file.metadata().is_ok());
    assert!(!listener.is_assert_triggered());
}

#[test]
fn test_require_not_null_absent_resource() {
    for (contract, _) in both_backends() {
        let missing: Option<File> = None;
        let err = require_not_null!(contract; missing).unwrap_err();
        assert!(err.message().starts_with("Invalid null argument 'missing', line "));
        assert_argument_null(&err);
    }
}
