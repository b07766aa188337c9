//! Constants for URI template parsing and matching.

/// Opens a variable expression in a template.
pub const EXPRESSION_START: char = '{';

/// Closes a variable expression in a template.
pub const EXPRESSION_END: char = '}';

/// Separates a variable name from its default value.
pub const DEFAULT_SEPARATOR: char = '=';

/// Introduces a percent-encoded triple.
pub const PERCENT: char = '%';

/// Non-alphanumeric characters of the RFC 3986 unreserved set.
pub const UNRESERVED_MARKS: &str = "-._~";

/// Regular expression matching one expanded variable value.
///
/// One or more unreserved characters or percent-encoded triples. Every
/// variable token contributes this fragment, wrapped in a capture group.
pub const VALUE_PATTERN: &str = "(?:[A-Za-z0-9._~-]|%[0-9A-Fa-f]{2})+";
