// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic messages for failed checks.
//!
//! The message formats are part of the public contract: tests (ours and
//! downstream) compare them as literal strings. Each category knows its own
//! wording and which side of the caller/implementation divide it falls on.
//!
//! | Category               | Message                                                     | Fault   |
//! |------------------------|-------------------------------------------------------------|---------|
//! | `RequirementNotMet`    | `Requirement not met, line N: <expr>`                       | misuse  |
//! | `PostconditionFailed`  | `Postcondition failed, line N: <expr>`                      | defect  |
//! | `AssertFailed`         | `Assert failed, line N: <expr>`                             | defect  |
//! | `UnexpectedNull`       | `Unexpected null value, line N: <expr>`                     | defect  |
//! | `UnexpectedType`       | `Expected type '<T>' for value: <expr>, line N`             | defect  |
//! | `NullArgument`         | `Unexpected null value, line N: <expr>`                     | misuse  |
//! | `InvalidArgumentType`  | `Invalid argument type, expected '<T>', got '<U>', line N`  | misuse  |
//! | `InvalidNullArgument`  | `Invalid null argument '<expr>', line N`                    | misuse  |
//! | `UnexpectedException`  | `Unexpected exception, line N`                              | defect  |
//! | `InvalidNullDictionary`| `Invalid null dictionary, line N: <table>`                  | misuse  |
//! | `InvalidDictionary`    | `Invalid dictionary, line N: <table>`                       | defect  |
//! | `KeyNotInDictionary`   | `Enum '<key>' with value <n> not in dictionary, line N`     | defect  |
//!
//! When the site has no line, the `, line N` fragment is dropped:
//! `Requirement not met: <expr>`.

use std::fmt;

use crate::error::{BrokenContract, Cause, ContractError};
use crate::site::Site;

/// What kind of check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    RequirementNotMet,
    PostconditionFailed,
    AssertFailed,
    UnexpectedNull,
    UnexpectedType {
        expected: &'static str,
    },
    /// A caller passed nothing where a value was required.
    NullArgument,
    InvalidArgumentType {
        expected: &'static str,
        actual: &'static str,
    },
    InvalidNullArgument,
    UnexpectedException {
        detail: String,
    },
    InvalidNullDictionary,
    InvalidDictionary,
    KeyNotInDictionary {
        value: i128,
    },
}

/// Who is to blame for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The caller passed nothing where a value was required.
    MissingArgument,
    /// The caller passed a bad value or broke a precondition.
    BadArgument,
    /// The checked code broke its own promise.
    Defect,
}

impl Category {
    /// Short stable name, used as a structured logging field.
    pub fn name(&self) -> &'static str {
        match self {
            Category::RequirementNotMet => "requirement_not_met",
            Category::PostconditionFailed => "postcondition_failed",
            Category::AssertFailed => "assert_failed",
            Category::UnexpectedNull => "unexpected_null",
            Category::UnexpectedType { .. } => "unexpected_type",
            Category::NullArgument => "null_argument",
            Category::InvalidArgumentType { .. } => "invalid_argument_type",
            Category::InvalidNullArgument => "invalid_null_argument",
            Category::UnexpectedException { .. } => "unexpected_exception",
            Category::InvalidNullDictionary => "invalid_null_dictionary",
            Category::InvalidDictionary => "invalid_dictionary",
            Category::KeyNotInDictionary { .. } => "key_not_in_dictionary",
        }
    }

    pub fn fault(&self) -> Fault {
        match self {
            Category::NullArgument
            | Category::InvalidNullArgument
            | Category::InvalidNullDictionary => Fault::MissingArgument,
            Category::RequirementNotMet | Category::InvalidArgumentType { .. } => {
                Fault::BadArgument
            }
            Category::PostconditionFailed
            | Category::AssertFailed
            | Category::UnexpectedNull
            | Category::UnexpectedType { .. }
            | Category::UnexpectedException { .. }
            | Category::InvalidDictionary
            | Category::KeyNotInDictionary { .. } => Fault::Defect,
        }
    }
}

/// A failed check: the category plus where it happened.
///
/// Rendering is deferred to `Display`, so a `Violation` is only turned into
/// text once a check has actually failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    category: Category,
    site: Site,
}

impl Violation {
    pub fn new(category: Category, site: Site) -> Self {
        Self { category, site }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn site(&self) -> Site {
        self.site
    }

    /// Secondary text handed to listeners next to the message.
    pub fn detail(&self) -> Option<&str> {
        match &self.category {
            Category::UnexpectedException { detail } => Some(detail),
            _ => None,
        }
    }

    /// Turn the rendered message into the error the caller sees.
    pub fn into_error(self, message: String, cause: Option<Cause>) -> ContractError {
        // INVARIANT: only defects become `Broken`; caller misuse never does.
        match self.category.fault() {
            Fault::MissingArgument => ContractError::ArgumentNull { message },
            Fault::BadArgument => ContractError::InvalidArgument { message },
            Fault::Defect => ContractError::Broken(match cause {
                Some(cause) => BrokenContract::with_cause(message, cause),
                None => BrokenContract::new(message),
            }),
        }
    }
}

/// `", line N"` or nothing.
struct LineSuffix(Option<u32>);

impl fmt::Display for LineSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(line) => write!(f, ", line {}", line),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.site.expression();
        let line = LineSuffix(self.site.line());

        match &self.category {
            Category::RequirementNotMet => write!(f, "Requirement not met{}: {}", line, text),
            Category::PostconditionFailed => write!(f, "Postcondition failed{}: {}", line, text),
            Category::AssertFailed => write!(f, "Assert failed{}: {}", line, text),
            Category::UnexpectedNull | Category::NullArgument => {
                write!(f, "Unexpected null value{}: {}", line, text)
            }
            Category::UnexpectedType { expected } => {
                write!(f, "Expected type '{}' for value: {}{}", expected, text, line)
            }
            Category::InvalidArgumentType { expected, actual } => write!(
                f,
                "Invalid argument type, expected '{}', got '{}'{}",
                expected, actual, line
            ),
            Category::InvalidNullArgument => {
                write!(f, "Invalid null argument '{}'{}", text, line)
            }
            Category::UnexpectedException { .. } => write!(f, "Unexpected exception{}", line),
            Category::InvalidNullDictionary => {
                write!(f, "Invalid null dictionary{}: {}", line, text)
            }
            Category::InvalidDictionary => write!(f, "Invalid dictionary{}: {}", line, text),
            Category::KeyNotInDictionary { value } => write!(
                f,
                "Enum '{}' with value {} not in dictionary{}",
                text, value, line
            ),
        }
    }
}
