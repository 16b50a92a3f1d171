//! Tests for error values and configuration.

use method_contracts::{Backend, BrokenContract, Cause, Config, ConfigError, ContractError, Site};

#[test]
fn test_broken_contract_round_trips_through_json() {
    let cause = Cause::capture(&"x".parse::<i32>().unwrap_err());
    let original = BrokenContract::with_cause("Unexpected exception", cause);

    let json = serde_json::to_string(&original).unwrap();
    let restored: BrokenContract = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.message(), "Unexpected exception");
    assert_eq!(
        restored.cause().map(Cause::message),
        Some("invalid digit found in string")
    );
}

#[test]
fn test_broken_contract_without_cause_omits_field() {
    let json = serde_json::to_value(BrokenContract::new("Assert failed: x")).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "Assert failed: x" }));

    let restored: BrokenContract = serde_json::from_value(json).unwrap();
    assert!(restored.cause().is_none());
}

#[test]
fn test_error_display_is_the_message() {
    let contract = method_contracts::Contract::deployment();
    let err = contract.require(false, Site::text("ready")).unwrap_err();
    assert_eq!(err.to_string(), "Requirement not met: ready");
    assert!(err.is_caller_misuse());

    let err: ContractError = BrokenContract::new("Postcondition failed: done").into();
    assert_eq!(err.to_string(), "Postcondition failed: done");
    assert!(err.is_contract_violation());
}

#[test]
fn test_config_deserializes_backend_names() {
    let config: Config = serde_json::from_str(r#"{ "backend": "deployment" }"#).unwrap();
    assert_eq!(config.backend, Backend::Deployment);

    let config: Config = serde_json::from_str(r#"{ "backend": "development" }"#).unwrap();
    assert_eq!(config.backend, Backend::Development);

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.backend, Backend::for_build());

    assert!(serde_json::from_str::<Config>(r#"{ "backend": "verbose" }"#).is_err());
}

#[test]
fn test_backend_parsing_rejects_unknown_names() {
    assert_eq!("Development".parse::<Backend>(), Ok(Backend::Development));
    assert_eq!("deployment".parse::<Backend>(), Ok(Backend::Deployment));
    assert_eq!(
        "staging".parse::<Backend>(),
        Err(ConfigError::UnknownBackend {
            value: "staging".to_string()
        })
    );
}
