// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `#[derive(Enumeration)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, punctuated::Punctuated, Data, DeriveInput, Fields, Meta, Token};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "Enumeration can only be derived for enums",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumeration cannot be derived for generic enums",
        ));
    }

    // `i128` holds every other primitive discriminant exactly.
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        let hints = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        if hints.iter().any(|hint| hint.path().is_ident("u128")) {
            return Err(syn::Error::new_spanned(
                attr,
                "Enumeration does not support #[repr(u128)]",
            ));
        }
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Enumeration requires fieldless variants",
            ));
        }
    }

    let variants = data.variants.iter().map(|v| &v.ident);

    // An uninhabited enum has no value to cast.
    let discriminant = if data.variants.is_empty() {
        quote! { match self {} }
    } else {
        quote! { self as i128 }
    };

    Ok(quote! {
        impl ::method_contracts::Enumeration for #name {
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            #[inline]
            fn discriminant(self) -> i128 {
                #discriminant
            }
        }
    })
}
