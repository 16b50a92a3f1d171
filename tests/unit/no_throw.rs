//! Tests for `assert_no_throw` and `assert_ok`.

use std::io;

use super::common::{assert_broken, both_backends, recording};
use method_contracts::{assert_no_throw, assert_ok, Backend, ContractError, Site};

#[test]
fn test_non_panicking_closure_result_is_returned() {
    for (contract, listener) in both_backends() {
        let value = assert_no_throw!(contract; || 6 * 7).unwrap();
        assert_eq!(value, 42);
        assert!(!listener.is_assert_triggered());
    }
}

#[test]
fn test_panicking_closure_is_reported_with_cause() {
    for (contract, listener) in both_backends() {
        let err = contract
            .assert_no_throw(|| -> u8 { panic!("disk on fire") }, Site::text("write"))
            .unwrap_err();

        assert_eq!(err.message(), "Unexpected exception");
        assert_broken(&err);
        let ContractError::Broken(broken) = &err else {
            unreachable!()
        };
        assert_eq!(broken.cause().map(|c| c.message()), Some("disk on fire"));

        match contract.backend() {
            Backend::Development => {
                assert!(listener.is_only_one_message());
                assert_eq!(listener.last_message().as_deref(), Some("Unexpected exception"));
                assert_eq!(listener.last_detail().as_deref(), Some("disk on fire"));
            }
            Backend::Deployment => assert!(!listener.is_assert_triggered()),
        }
    }
}

#[test]
fn test_formatted_panic_payload_is_kept() {
    let (contract, _) = recording();
    let code = 7;
    let err = contract
        .assert_no_throw(|| -> u8 { panic!("exit code {}", code) }, Site::text("run"))
        .unwrap_err();
    let ContractError::Broken(broken) = err else {
        unreachable!()
    };
    assert_eq!(broken.cause().unwrap().message(), "exit code 7");
}

#[test]
fn test_assert_ok_passes_value_through() {
    let (contract, listener) = recording();
    let parsed = assert_ok!(contract; || "17".parse::<u32>()).unwrap();
    assert_eq!(parsed, 17);
    assert!(!listener.is_assert_triggered());
}

#[test]
fn test_assert_ok_keeps_error_chain() {
    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("config unreadable")
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    let (contract, listener) = recording();
    let err = contract
        .assert_ok(
            || -> Result<(), Wrapped> {
                Err(Wrapped(io::Error::new(io::ErrorKind::NotFound, "no such file")))
            },
            Site::text("load"),
        )
        .unwrap_err();

    assert!(listener.is_only_one_message());
    let ContractError::Broken(broken) = err else {
        unreachable!()
    };
    let chain: Vec<&str> = broken.cause().unwrap().chain().collect();
    assert_eq!(chain, vec!["config unreadable", "no such file"]);
}
