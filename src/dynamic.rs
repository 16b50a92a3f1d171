// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loosely typed values.
//!
//! `assert_of_type` and `require_not_null_as` take values whose concrete type
//! the caller does not know statically (plugin registries, reflection-style
//! dispatch, heterogeneous maps). `dyn Any` can downcast but cannot say what
//! it holds, and the diagnostics need the actual type name, so [`Dynamic`]
//! adds that. Every `'static` type implements it.

use std::any::{type_name, Any};

pub trait Dynamic: Any + 'static {
    /// Name of the concrete type behind the trait object.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Dynamic for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Dynamic {
    /// Borrow as `T` if that is what this value is.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
