//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use uri_pattern::prelude::*;
//!
//! let pattern = UriPattern::compile("/items/{id}").unwrap();
//! assert_eq!(pattern.resolve("/items/42").status(), ResolveStatus::Resolved);
//! ```
//!
//! The codec functions and grammar constants are left out; use them through
//! their modules.

pub use crate::{
    // Core types
    Parameters, ResolveStatus, Token, UriPattern, UriResolveResult, Variable, VariableType,
    // Builder
    UriPatternBuilder,
    // Errors
    TemplateError, TemplateErrorKind, VariableError, VariableTypeError,
};
