// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive enum dispatch.
//!
//! A `match` catches missing arms at compile time, but a table built at
//! runtime (`HashMap<Level, Handler>`) does not. These routines close the gap:
//! before looking anything up they check that the table has exactly one entry
//! per variant of the key enum, so a forgotten case fails on the first call,
//! whichever key that call uses.
//!
//! # Checks, in order
//!
//! 1. the table is present: `Invalid null dictionary`
//! 2. `table.len() == K::VARIANTS.len()`: `Invalid dictionary`
//! 3. the key is in the table: `Enum '<key>' with value <n> not in dictionary`
//!
//! With a correct `Enumeration` impl, (2) implies (3). (3) still runs, since a
//! hand-written impl can list fewer variants than the enum has.
//!
//! The first failure is reported and returned; nothing is looked up after it.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;

use crate::contract::Contract;
use crate::diagnostic::{Category, Violation};
use crate::error::Result;
use crate::site::Site;

/// A finite set of keys, all known up front.
///
/// Derive it for fieldless enums with `#[derive(Enumeration)]`.
pub trait Enumeration: Copy + Eq + Hash + Debug + 'static {
    /// Every value of the type, each listed once.
    const VARIANTS: &'static [Self];

    /// Numeric value, used in diagnostics.
    fn discriminant(self) -> i128;
}

impl Contract {
    /// Checks (1) and (2): table present and exhaustive.
    fn valid_table<'t, K: Enumeration, E>(
        &self,
        table: Option<&'t HashMap<K, E>>,
        table_site: Site,
    ) -> Result<&'t HashMap<K, E>> {
        let Some(table) = table else {
            return Err(self.fail(
                Violation::new(Category::InvalidNullDictionary, table_site),
                None,
            ));
        };

        // INVARIANT: exhaustiveness. One entry per variant, checked on every call.
        if table.len() != K::VARIANTS.len() {
            return Err(self.fail(Violation::new(Category::InvalidDictionary, table_site), None));
        }

        Ok(table)
    }

    /// Check (3).
    fn entry<'t, K: Enumeration, E>(
        &self,
        key: K,
        table: &'t HashMap<K, E>,
        key_site: Site,
    ) -> Result<&'t E> {
        match table.get(&key) {
            Some(entry) => Ok(entry),
            None => Err(self.fail(
                Violation::new(
                    Category::KeyNotInDictionary {
                        value: key.discriminant(),
                    },
                    key_site,
                ),
                None,
            )),
        }
    }

    /// Look up a precomputed value.
    pub fn map<'t, K: Enumeration, V>(
        &self,
        key: K,
        table: Option<&'t HashMap<K, V>>,
        key_site: Site,
        table_site: Site,
    ) -> Result<&'t V> {
        let table = self.valid_table(table, table_site)?;
        self.entry(key, table, key_site)
    }

    /// Look up a producer and call it. An action table is `V = ()`.
    pub fn map_with<K, F, V>(
        &self,
        key: K,
        table: Option<&HashMap<K, F>>,
        key_site: Site,
        table_site: Site,
    ) -> Result<V>
    where
        K: Enumeration,
        F: Fn() -> V,
    {
        let table = self.valid_table(table, table_site)?;
        let producer = self.entry(key, table, key_site)?;
        Ok(producer())
    }

    /// Look up an async producer, start it and await it.
    ///
    /// The only suspension point is the selected future. Cancellation and
    /// timeouts belong to that future; nothing is added here.
    pub async fn map_async<K, F, Fut, V>(
        &self,
        key: K,
        table: Option<&HashMap<K, F>>,
        key_site: Site,
        table_site: Site,
    ) -> Result<V>
    where
        K: Enumeration,
        F: Fn() -> Fut,
        Fut: Future<Output = V>,
    {
        let table = self.valid_table(table, table_site)?;
        let producer = self.entry(key, table, key_site)?;
        Ok(producer().await)
    }
}
