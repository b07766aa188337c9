//! Compile URI templates into patterns that expand, match and resolve URIs.
//!
//! A URI template is a string of literal text and `{name}` or
//! `{name=default}` placeholders. Compiling it yields a [`UriPattern`], a
//! single source of truth for both building and parsing URIs:
//!
//! - [`UriPattern::expand`] substitutes percent-encoded values into the
//!   template;
//! - [`UriPattern::matches`] tests whether a URI has the template's shape;
//! - [`UriPattern::resolve`] extracts the decoded values from a matching URI.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_pattern::{ResolveStatus, UriPattern};
//!
//! let pattern = UriPattern::compile("/users/{user}/posts/{post=latest}").unwrap();
//!
//! // Build a URI
//! let uri = pattern.expand(&[("user", "ann lee")]);
//! assert_eq!(uri, "/users/ann%20lee/posts/latest");
//!
//! // Parse it back
//! let result = pattern.resolve(&uri);
//! assert_eq!(result.status(), ResolveStatus::Resolved);
//! assert_eq!(result.get("user"), Some("ann lee"));
//! assert_eq!(result.get("post"), Some("latest"));
//!
//! // URIs of another shape are reported, not raised
//! assert_eq!(pattern.resolve("/groups/1").status(), ResolveStatus::Error);
//! ```
//!
//! # Builder
//!
//! Use the builder to assemble a pattern from tokens, for example to attach
//! a [`VariableType`] to a variable:
//!
//! ```rust
//! use uri_pattern::{UriPatternBuilder, Variable, VariableType};
//!
//! let pattern = UriPatternBuilder::new()
//!     .literal("/items/")
//!     .variable(Variable::new("id").unwrap().with_type(VariableType::new("integer").unwrap()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(pattern.to_string(), "/items/{id}");
//! ```
//!
//! # Grammar
//!
//! This crate implements the ABNF grammar defined in `grammar.abnf` at the crate root:
//!
//! ```text
//! template    = *( literal / "{" var "}" )
//! var         = varname [ "=" vardefault ]
//! varname     = (ALPHA / DIGIT) *(ALPHA / DIGIT / "." / "_" / "-")
//! vardefault  = *(unreserved / pct-encoded)
//! ```
//!
//! Expanded values are one or more unreserved characters or percent-encoded
//! triples. Only simple substitution is supported; the RFC 6570 operators
//! (`+`, `#`, lists and associative arrays) are not.
//!
//! # Features
//!
//! - `serde`: serializes patterns, variables and variable types as strings,
//!   and resolve results as `{status, values}`.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
pub mod codec;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod parameters;
mod pattern;
pub mod prelude;
mod resolve;
mod token;
mod variable;
mod variable_type;

pub use builder::UriPatternBuilder;
pub use constants::{
    DEFAULT_SEPARATOR, EXPRESSION_END, EXPRESSION_START, PERCENT, UNRESERVED_MARKS, VALUE_PATTERN,
};
pub use error::{TemplateError, TemplateErrorKind, VariableError, VariableTypeError};
pub use parameters::Parameters;
pub use pattern::UriPattern;
pub use resolve::{ResolveStatus, UriResolveResult};
pub use token::Token;
pub use variable::Variable;
pub use variable_type::VariableType;
