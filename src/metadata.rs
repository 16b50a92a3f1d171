// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contract metadata for code generators.
//!
//! These records carry no behavior. A method annotated with the attributes in
//! [`attr`](crate::attr) gets a `<NAME>_CONTRACT` constant holding a
//! [`MethodContract`]; a generator reads it (directly, or as JSON through
//! [`MethodContract::to_json`]) and emits the actual checks.
//!
//! ```ignore
//! use method_contracts::attr::{access, ensure, require, require_not_null};
//!
//! #[access("pub")]
//! #[require_not_null("text")]
//! #[require("text.len() >= 1")]
//! #[ensure("result <= text.len()", debug_only = true)]
//! fn first_word(text: Option<&str>) -> usize { ... }
//!
//! assert_eq!(FIRST_WORD_CONTRACT.requires()[0].expressions(), &["text.len() >= 1"]);
//! ```
//!
//! | Record           | Fields                                         | Per method |
//! |------------------|------------------------------------------------|------------|
//! | `Access`         | specifiers                                     | 0 or 1     |
//! | `Require`        | expressions, debug_only                        | any        |
//! | `Ensure`         | expressions, debug_only                        | any        |
//! | `RequireNotNull` | argument names, type name, name, alias name    | any        |
//! | `InitializeWith` | method name                                    | 0 or 1     |
//!
//! All records are `const`-constructible so generated constants need no
//! runtime initialization.

use serde::Serialize;

/// Access specifiers of the generated method, e.g. `["pub", "async"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Access {
    specifiers: &'static [&'static str],
}

impl Access {
    pub const fn new(specifiers: &'static [&'static str]) -> Self {
        Self { specifiers }
    }

    pub fn specifiers(&self) -> &'static [&'static str] {
        self.specifiers
    }
}

/// One or more preconditions, as source expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Require {
    expressions: &'static [&'static str],
    debug_only: bool,
}

impl Require {
    pub const fn new(expressions: &'static [&'static str]) -> Self {
        Self {
            expressions,
            debug_only: false,
        }
    }

    /// Only generate the check in development builds.
    pub const fn debug_only(mut self, debug_only: bool) -> Self {
        self.debug_only = debug_only;
        self
    }

    pub fn expressions(&self) -> &'static [&'static str] {
        self.expressions
    }

    pub fn is_debug_only(&self) -> bool {
        self.debug_only
    }
}

/// One or more postconditions, as source expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ensure {
    expressions: &'static [&'static str],
    debug_only: bool,
}

impl Ensure {
    pub const fn new(expressions: &'static [&'static str]) -> Self {
        Self {
            expressions,
            debug_only: false,
        }
    }

    pub const fn debug_only(mut self, debug_only: bool) -> Self {
        self.debug_only = debug_only;
        self
    }

    pub fn expressions(&self) -> &'static [&'static str] {
        self.expressions
    }

    pub fn is_debug_only(&self) -> bool {
        self.debug_only
    }
}

/// Arguments that must be present.
///
/// `type_name`, `name` and `alias_name` tell a generator how to declare the
/// unwrapped alias; all default to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequireNotNull {
    argument_names: &'static [&'static str],
    type_name: &'static str,
    name: &'static str,
    alias_name: &'static str,
}

impl RequireNotNull {
    pub const fn new(argument_names: &'static [&'static str]) -> Self {
        Self {
            argument_names,
            type_name: "",
            name: "",
            alias_name: "",
        }
    }

    pub const fn type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub const fn alias_name(mut self, alias_name: &'static str) -> Self {
        self.alias_name = alias_name;
        self
    }

    pub fn argument_names(&self) -> &'static [&'static str] {
        self.argument_names
    }

    pub fn get_type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn get_name(&self) -> &'static str {
        self.name
    }

    pub fn get_alias_name(&self) -> &'static str {
        self.alias_name
    }
}

/// Initializer a constructor's result must be passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InitializeWith {
    method_name: &'static str,
}

impl InitializeWith {
    pub const fn new(method_name: &'static str) -> Self {
        Self { method_name }
    }

    pub fn method_name(&self) -> &'static str {
        self.method_name
    }
}

/// Everything declared on one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MethodContract {
    method: &'static str,
    access: Option<Access>,
    requires: &'static [Require],
    ensures: &'static [Ensure],
    require_not_null: &'static [RequireNotNull],
    initialize_with: Option<InitializeWith>,
}

impl MethodContract {
    pub const fn new(method: &'static str) -> Self {
        Self {
            method,
            access: None,
            requires: &[],
            ensures: &[],
            require_not_null: &[],
            initialize_with: None,
        }
    }

    pub const fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    pub const fn with_requires(mut self, requires: &'static [Require]) -> Self {
        self.requires = requires;
        self
    }

    pub const fn with_ensures(mut self, ensures: &'static [Ensure]) -> Self {
        self.ensures = ensures;
        self
    }

    pub const fn with_require_not_null(mut self, require_not_null: &'static [RequireNotNull]) -> Self {
        self.require_not_null = require_not_null;
        self
    }

    pub const fn with_initialize_with(mut self, initialize_with: InitializeWith) -> Self {
        self.initialize_with = Some(initialize_with);
        self
    }

    /// Name of the annotated function.
    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn access(&self) -> Option<&Access> {
        self.access.as_ref()
    }

    pub fn requires(&self) -> &'static [Require] {
        self.requires
    }

    pub fn ensures(&self) -> &'static [Ensure] {
        self.ensures
    }

    pub fn require_not_null(&self) -> &'static [RequireNotNull] {
        self.require_not_null
    }

    pub fn initialize_with(&self) -> Option<&InitializeWith> {
        self.initialize_with.as_ref()
    }

    /// Serialized form for out-of-process generators.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
