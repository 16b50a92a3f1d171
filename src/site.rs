// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where a check was written, and what it said.
//!
//! Every diagnostic embeds the source text of the checked expression and,
//! when known, its line. The macros capture both for free with `stringify!`
//! and `line!`, so a failing `require!(len > 0)` reads
//! `Requirement not met, line 42: len > 0` without the caller typing anything.
//!
//! A `Site` is three `&'static` pieces of data and is `Copy`. Building one
//! costs nothing, which keeps the success path of every check allocation-free.

use std::fmt;

/// Source location and expression text of a contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    text: &'static str,
    file: &'static str,
    line: Option<u32>,
}

impl Site {
    /// A fully located call site. This is what the macros build.
    pub const fn new(text: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            text,
            file,
            line: Some(line),
        }
    }

    /// A call site known only by its expression text.
    ///
    /// Diagnostics built from it omit the `, line N` fragment.
    pub const fn text(text: &'static str) -> Self {
        Self {
            text,
            file: "",
            line: None,
        }
    }

    /// The source text of the checked expression.
    pub fn expression(&self) -> &'static str {
        self.text
    }

    /// The source file, empty when unknown.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The source line, if captured.
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file.is_empty(), self.line) {
            (false, Some(line)) => write!(f, "{}:{}: {}", self.file, line, self.text),
            (true, Some(line)) => write!(f, "line {}: {}", line, self.text),
            (_, None) => f.write_str(self.text),
        }
    }
}

/// Capture the call site of an expression.
///
/// ```
/// let site = method_contracts::site!(1 + 1 == 2);
/// assert_eq!(site.expression(), "1 + 1 == 2");
/// assert!(site.line().is_some());
/// ```
#[macro_export]
macro_rules! site {
    ($($expr:tt)+) => {
        $crate::Site::new(::core::stringify!($($expr)+), ::core::file!(), ::core::line!())
    };
}
