// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token builders for `method_contracts::metadata` records.
//!
//! The emitted constant is built from `const fn` constructors only. Record
//! slices get their own inner `const` items so the references live for
//! `'static` without relying on promotion.
//!
//! | Declared                        | Emitted                                        |
//! |---------------------------------|------------------------------------------------|
//! | `#[access("pub")]`              | `.with_access(Access::new(&["pub"]))`          |
//! | `#[require("a", debug_only = true)]` | `Require::new(&["a"]).debug_only(true)`   |
//! | `#[ensure("r")]`                | `Ensure::new(&["r"]).debug_only(false)`        |
//! | `#[require_not_null("x", ty = "T")]` | `RequireNotNull::new(&["x"]).type_name("T")...` |
//! | `#[initialize_with("init")]`    | `.with_initialize_with(InitializeWith::new("init"))` |

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, Ident, Visibility};

use crate::contract_attr::{Condition, Declared, NotNull};

fn str_slice(values: &[String]) -> TokenStream2 {
    quote! { &[#(#values),*] }
}

fn condition(record: &TokenStream2, condition: &Condition) -> TokenStream2 {
    let expressions = str_slice(&condition.expressions);
    let debug_only = condition.debug_only;
    quote! { #record::new(#expressions).debug_only(#debug_only) }
}

fn not_null(record: &TokenStream2, not_null: &NotNull) -> TokenStream2 {
    let arguments = str_slice(&not_null.arguments);
    let NotNull {
        type_name,
        name,
        alias,
        ..
    } = not_null;
    quote! {
        #record::new(#arguments)
            .type_name(#type_name)
            .name(#name)
            .alias_name(#alias)
    }
}

/// A `MethodContract` block expression for `method`.
fn contract_value(method: &str, declared: &Declared) -> TokenStream2 {
    let root = quote!(::method_contracts::metadata);

    let require = quote!(#root::Require);
    let ensure = quote!(#root::Ensure);
    let require_not_null = quote!(#root::RequireNotNull);
    let requires = declared.requires.iter().map(|c| condition(&require, c));
    let ensures = declared.ensures.iter().map(|c| condition(&ensure, c));
    let not_nulls = declared
        .require_not_null
        .iter()
        .map(|n| not_null(&require_not_null, n));

    let access = declared.access.as_ref().map(|specifiers| {
        let specifiers = str_slice(specifiers);
        quote! { .with_access(#root::Access::new(#specifiers)) }
    });
    let initialize_with = declared.initialize_with.as_ref().map(|method_name| {
        quote! { .with_initialize_with(#root::InitializeWith::new(#method_name)) }
    });

    quote! {
        {
            const REQUIRES: &[#require] = &[#(#requires),*];
            const ENSURES: &[#ensure] = &[#(#ensures),*];
            const REQUIRE_NOT_NULL: &[#require_not_null] = &[#(#not_nulls),*];
            #root::MethodContract::new(#method)
                .with_requires(REQUIRES)
                .with_ensures(ENSURES)
                .with_require_not_null(REQUIRE_NOT_NULL)
                #access
                #initialize_with
        }
    }
}

/// `<NAME>_CONTRACT` for the function `ident`, with the function's visibility.
pub fn contract_const(ident: &Ident, vis: &Visibility, declared: &Declared) -> TokenStream2 {
    let method = ident.unraw().to_string();
    let const_name = format_ident!(
        "{}_CONTRACT",
        method.to_uppercase(),
        span = ident.span()
    );
    let doc = format!("Contract metadata for `{}`.", method);
    let value = contract_value(&method, declared);

    quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        #vis const #const_name: ::method_contracts::metadata::MethodContract = #value;
    }
}

/// A `&[MethodContract]` constant named `name`, one entry per method.
pub fn contract_table(
    name: &Ident,
    vis: &Visibility,
    doc: &str,
    methods: &[(Ident, Declared)],
) -> TokenStream2 {
    let entries: Vec<Ident> = (0..methods.len())
        .map(|i| format_ident!("CONTRACT_{}", i))
        .collect();
    let values = methods
        .iter()
        .map(|(ident, declared)| contract_value(&ident.unraw().to_string(), declared));

    quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        #vis const #name: &[::method_contracts::metadata::MethodContract] = {
            #(const #entries: ::method_contracts::metadata::MethodContract = #values;)*
            &[#(#entries),*]
        };
    }
}

/// `PlainGreeter` to `PLAIN_GREETER`.
pub fn screaming_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;
    for c in name.chars() {
        if c.is_uppercase() && previous_lower {
            out.push('_');
        }
        previous_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_uppercase());
    }
    out
}
