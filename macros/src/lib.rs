// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for `method-contracts`.
//!
//! Two jobs. `#[derive(Enumeration)]` lists the variants of a fieldless enum
//! so the exhaustive dispatch checks know how many entries a table needs. The
//! contract attributes record preconditions, postconditions and friends on a
//! function as a `const` a code generator can read back.
//!
//! # Example
//!
//! ```ignore
//! use method_contracts::attr::{access, ensure, require, require_not_null};
//! use method_contracts::Enumeration;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
//! enum Level { None, Some, More }
//!
//! #[access("pub")]
//! #[require_not_null("text", alias = "text")]
//! #[require("text.len() >= 1")]
//! #[ensure("result <= text.len()", debug_only = true)]
//! fn first_word(text: Option<&str>) -> usize { ... }
//!
//! // Generates, next to the function:
//! // const FIRST_WORD_CONTRACT: ::method_contracts::metadata::MethodContract = ...;
//! ```

use proc_macro::TokenStream;

mod codegen;
mod contract_attr;
mod enumeration;

use contract_attr::Kind;

/// Derive `method_contracts::Enumeration` for a fieldless enum.
///
/// # Generated Output
///
/// - `VARIANTS`: every variant, in declaration order
/// - `discriminant`: `self as i128`, so explicit discriminants are honored
///
/// Enums with fields or generics are rejected at compile time.
#[proc_macro_derive(Enumeration)]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    enumeration::derive(input)
}

// ============================================================================
// CONTRACT METADATA ATTRIBUTES
// ============================================================================
//
// The outermost contract attribute on a function does all the work: it reads
// every contract attribute below it, leaves each as a `__collected` marker, and
// emits the function plus a `<NAME>_CONTRACT` constant. The markers expand to
// the item unchanged.

/// Access specifiers for the generated method: `#[access("pub", "async")]`.
///
/// At most one per function.
#[proc_macro_attribute]
pub fn access(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract_attr::process(Kind::Access, attr, item)
}

/// Preconditions: `#[require("a > 0", "b.is_some()", debug_only = true)]`.
#[proc_macro_attribute]
pub fn require(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract_attr::process(Kind::Require, attr, item)
}

/// Postconditions: `#[ensure("result >= 0", debug_only = true)]`.
#[proc_macro_attribute]
pub fn ensure(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract_attr::process(Kind::Ensure, attr, item)
}

/// Arguments that must be present.
///
/// # Attributes
///
/// - one or more argument names as string literals
/// - `ty = "Type"` - type of the unwrapped alias
/// - `name = "arg"` - argument the alias is taken from
/// - `alias = "name"` - name of the unwrapped alias
#[proc_macro_attribute]
pub fn require_not_null(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract_attr::process(Kind::RequireNotNull, attr, item)
}

/// Initializer a constructor's result goes through: `#[initialize_with("init")]`.
///
/// At most one per function.
#[proc_macro_attribute]
pub fn initialize_with(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract_attr::process(Kind::InitializeWith, attr, item)
}

/// Collect the contract attributes of every method in a trait or trait impl.
///
/// Members of a trait impl must belong to the trait, so the per-method
/// constants have nowhere to go. This emits one module-level table instead:
///
/// - `impl Greeter for Plain` gives `GREETER_FOR_PLAIN_CONTRACTS`
/// - `trait Greeter` gives `GREETER_CONTRACTS`, with the trait's visibility
///
/// Methods without contract attributes are left out of the table. On an
/// inherent impl this does nothing.
#[proc_macro_attribute]
pub fn contracts(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract_attr::process_block(attr, item)
}
