// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Call-site macros.
//!
//! Each macro captures the source text and line of its argument, then calls
//! the matching [`Contract`](crate::Contract) method. Every macro has two forms:
//!
//! ```ignore
//! require!(len > 0)?;             // process-wide checker
//! require!(contract; len > 0)?;   // explicit checker
//! ```
//!
//! [`assert_of_type!`](crate::assert_of_type) and
//! [`require_not_null_as!`](crate::require_not_null_as) lead with a type, so
//! their checker goes last instead: `assert_of_type!(u32, value; contract)`.
//!
//! All of them evaluate to a `Result`, so `?` propagates the failure when the
//! backend returns instead of breaking.

/// Precondition check. Fails with `Requirement not met, line N: <expr>`.
#[macro_export]
macro_rules! require {
    ($contract:expr; $cond:expr $(,)?) => {
        $contract.require($cond, $crate::site!($cond))
    };
    ($cond:expr $(,)?) => {
        $crate::require!($crate::Contract::global(); $cond)
    };
}

/// Postcondition check. Fails with `Postcondition failed, line N: <expr>`.
#[macro_export]
macro_rules! ensure {
    ($contract:expr; $cond:expr $(,)?) => {
        $contract.ensure($cond, $crate::site!($cond))
    };
    ($cond:expr $(,)?) => {
        $crate::ensure!($crate::Contract::global(); $cond)
    };
}

/// Invariant check (`Assert`). Fails with `Assert failed, line N: <expr>`.
#[macro_export]
macro_rules! invariant {
    ($contract:expr; $cond:expr $(,)?) => {
        $contract.assert($cond, $crate::site!($cond))
    };
    ($cond:expr $(,)?) => {
        $crate::invariant!($crate::Contract::global(); $cond)
    };
}

/// Unwrap an `Option` this code guarantees is `Some`.
#[macro_export]
macro_rules! assert_not_null {
    ($contract:expr; $value:expr $(,)?) => {
        $contract.assert_not_null($value, $crate::site!($value))
    };
    ($value:expr $(,)?) => {
        $crate::assert_not_null!($crate::Contract::global(); $value)
    };
}

/// Narrow an `Option<&dyn Dynamic>` this code guarantees holds a `T`.
#[macro_export]
macro_rules! assert_of_type {
    ($ty:ty, $value:expr; $contract:expr $(,)?) => {
        $contract.assert_of_type::<$ty>($value, $crate::site!($value))
    };
    ($ty:ty, $value:expr $(,)?) => {
        $crate::assert_of_type!($ty, $value; $crate::Contract::global())
    };
}

/// Unwrap an `Option` the caller was required to fill.
#[macro_export]
macro_rules! require_not_null {
    ($contract:expr; $value:expr $(,)?) => {
        $contract.require_not_null($value, $crate::site!($value))
    };
    ($value:expr $(,)?) => {
        $crate::require_not_null!($crate::Contract::global(); $value)
    };
}

/// Narrow a caller-supplied `Option<&dyn Dynamic>` to `&T`.
#[macro_export]
macro_rules! require_not_null_as {
    ($ty:ty, $value:expr; $contract:expr $(,)?) => {
        $contract.require_not_null_as::<$ty>($value, $crate::site!($value))
    };
    ($ty:ty, $value:expr $(,)?) => {
        $crate::require_not_null_as!($ty, $value; $crate::Contract::global())
    };
}

/// Run a closure that must not panic.
#[macro_export]
macro_rules! assert_no_throw {
    ($contract:expr; $f:expr $(,)?) => {
        $contract.assert_no_throw($f, $crate::site!($f))
    };
    ($f:expr $(,)?) => {
        $crate::assert_no_throw!($crate::Contract::global(); $f)
    };
}

/// Run a closure that must not return `Err`.
#[macro_export]
macro_rules! assert_ok {
    ($contract:expr; $f:expr $(,)?) => {
        $contract.assert_ok($f, $crate::site!($f))
    };
    ($f:expr $(,)?) => {
        $crate::assert_ok!($crate::Contract::global(); $f)
    };
}

/// Exhaustive lookup in a value table. `$table` is borrowed.
#[macro_export]
macro_rules! map {
    ($contract:expr; $key:expr, $table:expr $(,)?) => {
        $contract.map(
            $key,
            ::core::option::Option::Some(&$table),
            $crate::site!($key),
            $crate::site!($table),
        )
    };
    ($key:expr, $table:expr $(,)?) => {
        $crate::map!($crate::Contract::global(); $key, $table)
    };
}

/// Exhaustive lookup in a producer or action table, then call the entry.
#[macro_export]
macro_rules! map_with {
    ($contract:expr; $key:expr, $table:expr $(,)?) => {
        $contract.map_with(
            $key,
            ::core::option::Option::Some(&$table),
            $crate::site!($key),
            $crate::site!($table),
        )
    };
    ($key:expr, $table:expr $(,)?) => {
        $crate::map_with!($crate::Contract::global(); $key, $table)
    };
}

/// Exhaustive lookup in an async producer table; evaluates to a future.
#[macro_export]
macro_rules! map_async {
    ($contract:expr; $key:expr, $table:expr $(,)?) => {
        $contract.map_async(
            $key,
            ::core::option::Option::Some(&$table),
            $crate::site!($key),
            $crate::site!($table),
        )
    };
    ($key:expr, $table:expr $(,)?) => {
        $crate::map_async!($crate::Contract::global(); $key, $table)
    };
}
