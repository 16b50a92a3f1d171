//! Tests for the contract metadata attributes.

use method_contracts::attr::{
    access, contracts, ensure, initialize_with, require, require_not_null,
};
use method_contracts::metadata::MethodContract;

#[access("pub")]
#[require_not_null("text", ty = "&str", alias = "text")]
#[require("!text.is_empty()")]
#[require("text.len() < 1024", debug_only = true)]
#[ensure("result <= text.len()")]
fn first_word_len(text: Option<&str>) -> usize {
    text.and_then(|t| t.split_whitespace().next()).map_or(0, str::len)
}

#[ensure("result.is_empty()", "result.capacity() == 0")]
fn empty() -> Vec<u8> {
    Vec::new()
}

struct Session {
    open: bool,
}

impl Session {
    #[initialize_with("connect")]
    #[access("pub", "const")]
    fn new() -> Self {
        Session { open: false }
    }

    fn connect(mut self) -> Self {
        self.open = true;
        self
    }
}

#[contracts]
trait Greeter {
    #[require("!name.is_empty()")]
    fn greet(&self, name: &str) -> usize;

    #[ensure("result")]
    fn ready(&self) -> bool {
        true
    }

    fn reset(&self) {}
}

struct Plain;

#[contracts]
impl Greeter for Plain {
    #[require_not_null("name", alias = "name")]
    #[ensure("result == name.len() + 7")]
    fn greet(&self, name: &str) -> usize {
        format!("Hello, {}", name).len()
    }
}

#[test]
fn test_attributed_functions_still_run() {
    assert_eq!(first_word_len(Some("hello world")), 5);
    assert!(empty().is_empty());
    assert!(Session::new().connect().open);
    assert_eq!(Plain.greet("Ada"), 10);
    assert!(Plain.ready());
    Plain.reset();
}

#[test]
fn test_metadata_lists_every_declaration() {
    let contract: MethodContract = FIRST_WORD_LEN_CONTRACT;
    assert_eq!(contract.method(), "first_word_len");
    assert_eq!(contract.access().map(|a| a.specifiers()), Some(&["pub"][..]));

    let requires = contract.requires();
    assert_eq!(requires.len(), 2);
    assert_eq!(requires[0].expressions(), &["!text.is_empty()"]);
    assert!(!requires[0].is_debug_only());
    assert_eq!(requires[1].expressions(), &["text.len() < 1024"]);
    assert!(requires[1].is_debug_only());

    assert_eq!(contract.ensures()[0].expressions(), &["result <= text.len()"]);

    let not_null = &contract.require_not_null()[0];
    assert_eq!(not_null.argument_names(), &["text"]);
    assert_eq!(not_null.get_type_name(), "&str");
    assert_eq!(not_null.get_alias_name(), "text");
    assert_eq!(not_null.get_name(), "");

    assert!(contract.initialize_with().is_none());
}

#[test]
fn test_single_attribute_keeps_all_expressions() {
    assert!(EMPTY_CONTRACT.access().is_none());
    assert!(EMPTY_CONTRACT.requires().is_empty());
    assert_eq!(
        EMPTY_CONTRACT.ensures()[0].expressions(),
        &["result.is_empty()", "result.capacity() == 0"]
    );
}

#[test]
fn test_methods_get_associated_constant() {
    let contract = Session::NEW_CONTRACT;
    assert_eq!(contract.method(), "new");
    assert_eq!(contract.initialize_with().map(|i| i.method_name()), Some("connect"));
    assert_eq!(
        contract.access().map(|a| a.specifiers()),
        Some(&["pub", "const"][..])
    );
}

#[test]
fn test_metadata_serializes() {
    let json: serde_json::Value =
        serde_json::from_str(&FIRST_WORD_LEN_CONTRACT.to_json().unwrap()).unwrap();
    assert_eq!(json["method"], "first_word_len");
    assert_eq!(json["requires"][1]["debug_only"], true);
    assert_eq!(json["require_not_null"][0]["alias_name"], "text");
}

#[test]
fn test_trait_definition_gets_table() {
    let methods: Vec<&str> = GREETER_CONTRACTS.iter().map(MethodContract::method).collect();
    assert_eq!(methods, ["greet", "ready"]);
    assert_eq!(GREETER_CONTRACTS[0].requires()[0].expressions(), &["!name.is_empty()"]);
    assert_eq!(GREETER_CONTRACTS[1].ensures()[0].expressions(), &["result"]);
}

#[test]
fn test_trait_impl_gets_table() {
    assert_eq!(GREETER_FOR_PLAIN_CONTRACTS.len(), 1);
    let contract = &GREETER_FOR_PLAIN_CONTRACTS[0];
    assert_eq!(contract.method(), "greet");
    assert_eq!(contract.require_not_null()[0].get_alias_name(), "name");
    assert_eq!(contract.ensures()[0].expressions(), &["result == name.len() + 7"]);
    assert!(contract.requires().is_empty());
}
