//! Error types for URI template compilation.

use std::fmt;

/// Errors that can occur when compiling a URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    /// The template that failed to compile
    pub input: String,
    /// The specific error that occurred
    pub kind: TemplateErrorKind,
}

/// Specific template compilation error types.
///
/// Positions are byte offsets into the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateErrorKind {
    /// An opening brace has no matching closing brace
    UnclosedExpression {
        /// Position of the opening brace
        position: usize,
    },
    /// A brace appears where it cannot (nested `{` or stray `}`)
    UnexpectedBrace {
        /// The brace character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// A pair of braces encloses nothing
    EmptyExpression {
        /// Position of the opening brace
        position: usize,
    },
    /// A variable expression could not be parsed
    InvalidVariable {
        /// Position of the opening brace
        position: usize,
        /// Why the expression was rejected
        error: VariableError,
    },
    /// The regex engine rejected the combined pattern
    Pattern {
        /// Message reported by the regex engine
        reason: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to compile URI template '{}': ", self.input)?;
        match &self.kind {
            TemplateErrorKind::UnclosedExpression { position } => {
                write!(f, "expression opened at position {position} is never closed")
            }
            TemplateErrorKind::UnexpectedBrace { char, position } => {
                write!(f, "unexpected '{char}' at position {position}")
            }
            TemplateErrorKind::EmptyExpression { position } => {
                write!(f, "empty expression at position {position}")
            }
            TemplateErrorKind::InvalidVariable { position, error } => {
                write!(f, "invalid variable at position {position}: {error}")
            }
            TemplateErrorKind::Pattern { reason } => {
                write!(f, "could not build matching pattern: {reason}")
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TemplateErrorKind::InvalidVariable { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Errors for variable expression parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// Variable name is empty
    EmptyName,
    /// Invalid character in the variable name
    InvalidName {
        /// The invalid name
        name: String,
        /// The invalid character
        char: char,
        /// Position in the name
        position: usize,
    },
    /// Default value is not composed of unreserved or percent-encoded characters
    InvalidDefault {
        /// The invalid default
        value: String,
        /// Position of the first invalid byte in the default
        position: usize,
    },
}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "variable name cannot be empty"),
            Self::InvalidName {
                name,
                char,
                position,
            } => {
                if *position == 0 {
                    write!(
                        f,
                        "variable name '{name}' must start with a letter or digit, found '{char}'"
                    )
                } else {
                    write!(
                        f,
                        "invalid character '{char}' at position {position} in variable name '{name}'; only letters, digits, '.', '_' and '-' allowed"
                    )
                }
            }
            Self::InvalidDefault { value, position } => {
                write!(
                    f,
                    "invalid default '{value}' at position {position}; only unreserved characters and percent-encoded triples allowed"
                )
            }
        }
    }
}

impl std::error::Error for VariableError {}

/// Errors for variable type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableTypeError {
    /// Type name is empty
    Empty,
    /// Invalid character in the type name
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for VariableTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "variable type name cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position} in variable type name"
                )
            }
        }
    }
}

impl std::error::Error for VariableTypeError {}
