// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract metadata attributes.
//!
//! `#[access]`, `#[require]`, `#[ensure]`, `#[require_not_null]` and
//! `#[initialize_with]` share one entry point. Whichever expands first (the
//! outermost) collects the rest from the function's attribute list, so the
//! declaration order on the function is the order in the emitted constant.
//!
//! Siblings are recognized by the last path segment, so both
//! `#[require(..)]` and `#[method_contracts::attr::require(..)]` work. A
//! collected sibling stays on the function as `#[require(__collected)]`, which
//! expands to nothing.
//!
//! Trait definitions and trait impls cannot hold the per-method constants, so
//! there `#[contracts]` on the block does the collecting instead.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream, Parser},
    parse_quote,
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Ident, ImplItem, Item, ItemFn, Lit, LitStr, Meta, Token, TraitItem, TraitItemFn,
    Type,
};

use crate::codegen::{contract_const, contract_table, screaming_snake};

/// Which attribute is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Access,
    Require,
    Ensure,
    RequireNotNull,
    InitializeWith,
}

impl Kind {
    const ALL: [Kind; 5] = [
        Kind::Access,
        Kind::Require,
        Kind::Ensure,
        Kind::RequireNotNull,
        Kind::InitializeWith,
    ];

    fn name(self) -> &'static str {
        match self {
            Kind::Access => "access",
            Kind::Require => "require",
            Kind::Ensure => "ensure",
            Kind::RequireNotNull => "require_not_null",
            Kind::InitializeWith => "initialize_with",
        }
    }

    fn from_attr(attr: &syn::Attribute) -> Option<Self> {
        let segment = attr.path().segments.last()?;
        Self::ALL.into_iter().find(|kind| segment.ident == kind.name())
    }
}

/// One attribute argument: a string literal or `key = literal`.
enum Arg {
    Text(LitStr),
    Key { key: Ident, value: Lit },
}

impl Parse for Arg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Arg::Text(input.parse()?));
        }
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: Lit = input.parse()?;
        Ok(Arg::Key { key, value })
    }
}

type Args = Punctuated<Arg, Token![,]>;

/// A `#[require]` or `#[ensure]` entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Condition {
    pub expressions: Vec<String>,
    pub debug_only: bool,
}

/// A `#[require_not_null]` entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NotNull {
    pub arguments: Vec<String>,
    pub type_name: String,
    pub name: String,
    pub alias: String,
}

/// Everything declared on one function.
#[derive(Debug, Default)]
pub struct Declared {
    pub access: Option<Vec<String>>,
    pub requires: Vec<Condition>,
    pub ensures: Vec<Condition>,
    pub require_not_null: Vec<NotNull>,
    pub initialize_with: Option<String>,
}

impl Declared {
    fn is_empty(&self) -> bool {
        self.access.is_none()
            && self.requires.is_empty()
            && self.ensures.is_empty()
            && self.require_not_null.is_empty()
            && self.initialize_with.is_none()
    }

    fn add(&mut self, kind: Kind, args: Args, span: Span) -> syn::Result<()> {
        let mut texts = Vec::new();
        let mut keys = Vec::new();
        for arg in args {
            match arg {
                Arg::Text(text) => texts.push(text.value()),
                Arg::Key { key, value } => keys.push((key, value)),
            }
        }

        if texts.is_empty() {
            return Err(syn::Error::new(
                span,
                format!("#[{}] needs at least one string literal", kind.name()),
            ));
        }

        match kind {
            Kind::Access => {
                no_keys(kind, &keys)?;
                if self.access.is_some() {
                    return Err(syn::Error::new(span, "duplicate #[access]"));
                }
                self.access = Some(texts);
            }
            Kind::Require | Kind::Ensure => {
                let mut condition = Condition {
                    expressions: texts,
                    debug_only: false,
                };
                for (key, value) in keys {
                    match (key.to_string().as_str(), value) {
                        ("debug_only", Lit::Bool(flag)) => condition.debug_only = flag.value,
                        _ => return Err(unknown_key(kind, &key)),
                    }
                }
                if kind == Kind::Require {
                    self.requires.push(condition);
                } else {
                    self.ensures.push(condition);
                }
            }
            Kind::RequireNotNull => {
                let mut not_null = NotNull {
                    arguments: texts,
                    ..NotNull::default()
                };
                for (key, value) in keys {
                    let Lit::Str(text) = value else {
                        return Err(syn::Error::new_spanned(&key, "expected a string literal"));
                    };
                    match key.to_string().as_str() {
                        "ty" => not_null.type_name = text.value(),
                        "name" => not_null.name = text.value(),
                        "alias" => not_null.alias = text.value(),
                        _ => return Err(unknown_key(kind, &key)),
                    }
                }
                self.require_not_null.push(not_null);
            }
            Kind::InitializeWith => {
                no_keys(kind, &keys)?;
                if texts.len() != 1 {
                    return Err(syn::Error::new(span, "#[initialize_with] takes one method name"));
                }
                if self.initialize_with.is_some() {
                    return Err(syn::Error::new(span, "duplicate #[initialize_with]"));
                }
                self.initialize_with = texts.pop();
            }
        }

        Ok(())
    }
}

fn no_keys(kind: Kind, keys: &[(Ident, Lit)]) -> syn::Result<()> {
    match keys.first() {
        Some((key, _)) => Err(unknown_key(kind, key)),
        None => Ok(()),
    }
}

fn unknown_key(kind: Kind, key: &Ident) -> syn::Error {
    syn::Error::new_spanned(key, format!("unknown #[{}] argument `{}`", kind.name(), key))
}

/// Argument a collected sibling is left with. It expands to the item unchanged.
const COLLECTED: &str = "__collected";

fn is_collected(args: &TokenStream2) -> bool {
    syn::parse2::<Ident>(args.clone()).is_ok_and(|ident| ident == COLLECTED)
}

/// Read every contract attribute in `attrs`, leaving each one as a marker.
///
/// The markers keep the attribute paths resolving, so imports of the sibling
/// attributes stay in use.
fn collect_attrs(declared: &mut Declared, attrs: &mut [Attribute]) -> syn::Result<()> {
    for attr in attrs {
        let Some(kind) = Kind::from_attr(attr) else {
            continue;
        };
        let args = match &attr.meta {
            Meta::List(list) if is_collected(&list.tokens) => continue,
            Meta::List(list) => list.parse_args_with(Args::parse_terminated)?,
            _ => Args::new(),
        };
        declared.add(kind, args, attr.span())?;

        let path = attr.path().clone();
        let marker = Ident::new(COLLECTED, Span::call_site());
        attr.meta = parse_quote!(#path(#marker));
    }
    Ok(())
}

/// Read the invoked attribute and its siblings.
fn collect(kind: Kind, attr: TokenStream2, func: &mut ItemFn) -> syn::Result<Declared> {
    let mut declared = Declared::default();
    declared.add(kind, Args::parse_terminated.parse2(attr)?, Span::call_site())?;
    collect_attrs(&mut declared, &mut func.attrs)?;
    Ok(declared)
}

fn expand(kind: Kind, attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if is_collected(&attr) {
        return Ok(item);
    }

    let mut func: ItemFn = match syn::parse2(item.clone()) {
        Ok(func) => func,
        Err(err) => {
            return match syn::parse2::<TraitItemFn>(item) {
                Ok(decl) => Err(syn::Error::new_spanned(
                    &decl.sig,
                    "contract attributes on a trait method declaration need #[contracts] on the trait",
                )),
                Err(_) => Err(err),
            };
        }
    };

    let declared = collect(kind, attr, &mut func)?;
    let constant = contract_const(&func.sig.ident, &func.vis, &declared);
    Ok(quote! {
        #func

        #constant
    })
}

/// Main entry point for every contract attribute.
pub fn process(kind: Kind, attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(kind, attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

// ============================================================================
// TRAITS AND TRAIT IMPLS
// ============================================================================
//
// Items inside `impl Trait for T` must be members of the trait, so the method
// attributes cannot put their constant there. `#[contracts]` on the block
// collects every method's attributes and emits one module-level table.

/// Last path segment of the implementing type.
fn self_type_name(ty: &Type) -> syn::Result<&Ident> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map(|segment| &segment.ident)
            .ok_or_else(|| syn::Error::new_spanned(ty, "#[contracts] needs a named self type")),
        Type::Reference(reference) => self_type_name(&reference.elem),
        Type::Paren(paren) => self_type_name(&paren.elem),
        Type::Group(group) => self_type_name(&group.elem),
        _ => Err(syn::Error::new_spanned(ty, "#[contracts] needs a named self type")),
    }
}

/// Declarations of every method that has any, in source order.
fn collect_methods<'a>(
    methods: impl Iterator<Item = (&'a Ident, &'a mut Vec<Attribute>)>,
) -> syn::Result<Vec<(Ident, Declared)>> {
    let mut collected = Vec::new();
    for (ident, attrs) in methods {
        let mut declared = Declared::default();
        collect_attrs(&mut declared, attrs)?;
        if !declared.is_empty() {
            collected.push((ident.clone(), declared));
        }
    }
    Ok(collected)
}

fn expand_block(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "#[contracts] takes no arguments"));
    }

    let mut item: Item = syn::parse2(item)?;
    let table = match &mut item {
        // Inherent methods get their own associated constants.
        Item::Impl(block) if block.trait_.is_none() => None,
        Item::Impl(block) => {
            let trait_name = block
                .trait_
                .as_ref()
                .and_then(|(_, path, _)| path.segments.last())
                .map(|segment| segment.ident.to_string())
                .unwrap_or_default();
            let self_name = self_type_name(&block.self_ty)?.to_string();
            let methods = collect_methods(block.items.iter_mut().filter_map(|item| match item {
                ImplItem::Fn(method) => Some((&method.sig.ident, &mut method.attrs)),
                _ => None,
            }))?;
            let name = format_ident!(
                "{}_FOR_{}_CONTRACTS",
                screaming_snake(&trait_name),
                screaming_snake(&self_name)
            );
            let doc = format!("Contract metadata for `impl {} for {}`.", trait_name, self_name);
            Some(contract_table(&name, &parse_quote!(pub), &doc, &methods))
        }
        Item::Trait(definition) => {
            let trait_name = definition.ident.to_string();
            let methods = collect_methods(definition.items.iter_mut().filter_map(|item| {
                match item {
                    TraitItem::Fn(method) => Some((&method.sig.ident, &mut method.attrs)),
                    _ => None,
                }
            }))?;
            let name = format_ident!("{}_CONTRACTS", screaming_snake(&trait_name));
            let doc = format!("Contract metadata for the methods of `{}`.", trait_name);
            Some(contract_table(&name, &definition.vis, &doc, &methods))
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[contracts] applies to impl blocks and traits",
            ));
        }
    };

    Ok(quote! {
        #item

        #table
    })
}

/// Entry point for `#[contracts]`.
pub fn process_block(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand_block(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
