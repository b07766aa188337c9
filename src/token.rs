//! Compiled template tokens.

use std::borrow::Cow;
use std::fmt;

use crate::codec;
use crate::constants::{EXPRESSION_END, EXPRESSION_START, VALUE_PATTERN};
use crate::error::{TemplateError, TemplateErrorKind, VariableError};
use crate::parameters::Parameters;
use crate::resolve::UriResolveResult;
use crate::variable::Variable;

/// One unit of a compiled URI template.
///
/// A template is a sequence of literal runs and variable placeholders. Each
/// token knows how to expand itself, how it contributes to the matching
/// pattern of the whole template, and how a matched segment is resolved.
///
/// # Examples
///
/// ```
/// use uri_pattern::Token;
///
/// let token = Token::parse_variable("id").unwrap();
/// assert_eq!(token.to_string(), "{id}");
/// assert_eq!(token.expand(&[("id", "a b")]), "a%20b");
/// assert!(token.matches("a%20b"));
/// assert!(!token.matches("a b"));
///
/// let token = Token::literal("/items/").unwrap();
/// assert_eq!(token.expand(&[("id", "ignored")]), "/items/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Fixed text, expanded verbatim and matched exactly
    Literal(String),
    /// A variable placeholder, written `{expression}`
    Variable(Variable),
}

impl Token {
    /// Creates a literal token.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` with [`TemplateErrorKind::UnexpectedBrace`] if
    /// the text contains `{` or `}`.
    pub fn literal(text: &str) -> Result<Self, TemplateError> {
        if let Some((position, char)) = text
            .char_indices()
            .find(|&(_, c)| c == EXPRESSION_START || c == EXPRESSION_END)
        {
            return Err(TemplateError {
                input: text.to_string(),
                kind: TemplateErrorKind::UnexpectedBrace { char, position },
            });
        }
        Ok(Self::Literal(text.to_string()))
    }

    /// Creates a variable token from an expression (without braces).
    ///
    /// # Errors
    ///
    /// Returns `VariableError` if the expression is not a valid variable.
    pub fn parse_variable(expression: &str) -> Result<Self, VariableError> {
        Variable::parse(expression).map(Self::Variable)
    }

    /// Returns true if this token is a variable placeholder.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns the wrapped variable, if this is a variable token.
    #[must_use]
    pub const fn variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(var) => Some(var),
            Self::Literal(_) => None,
        }
    }

    /// Expands this token.
    ///
    /// Literal text is returned verbatim. A variable with a non-empty
    /// parameter expands to the percent-encoded parameter; otherwise it
    /// expands to its default as written, with the hex digits uppercased, or
    /// to nothing.
    #[must_use]
    pub fn expand<'a, P: Parameters + ?Sized>(&'a self, parameters: &'a P) -> Cow<'a, str> {
        match self {
            Self::Literal(text) => Cow::Borrowed(text),
            Self::Variable(var) => match parameters.value_of(var.name()) {
                Some(value) if !value.is_empty() => codec::encode(value),
                _ => var
                    .default_value()
                    .map_or(Cow::Borrowed(""), codec::normalize),
            },
        }
    }

    /// Returns true if `segment` could have been produced by this token.
    ///
    /// Literal tokens only accept their own text; variable tokens accept any
    /// well-formed expanded value.
    #[must_use]
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Literal(text) => text == segment,
            Self::Variable(_) => Variable::is_valid_value(segment),
        }
    }

    /// Returns the regex fragment this token contributes to a pattern.
    ///
    /// Literal text is escaped. Variables contribute the shared value grammar
    /// in a capture group, so a pattern has one group per variable token.
    #[must_use]
    pub fn pattern(&self) -> String {
        match self {
            Self::Literal(text) => regex::escape(text),
            Self::Variable(_) => format!("({VALUE_PATTERN})"),
        }
    }

    /// Resolves a matched segment into `result`.
    ///
    /// Variable tokens store the decoded segment under the variable name.
    /// Literal tokens record nothing.
    pub(crate) fn resolve(&self, segment: &str, result: &mut UriResolveResult<'_>) {
        if let Self::Variable(var) = self {
            result.put(var.name(), codec::decode(segment).into_owned());
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text}"),
            Self::Variable(var) => write!(f, "{EXPRESSION_START}{var}{EXPRESSION_END}"),
        }
    }
}

impl From<Variable> for Token {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UriPattern;

    #[test]
    fn literal_rejects_braces() {
        let result = Token::literal("/a{b");
        assert!(matches!(
            result,
            Err(TemplateError {
                kind: TemplateErrorKind::UnexpectedBrace { char: '{', position: 2 },
                ..
            })
        ));
        assert!(Token::literal("}").is_err());
    }

    #[test]
    fn literal_expands_verbatim() {
        let token = Token::literal("/a b/").unwrap();
        assert_eq!(token.expand(&[("x", "1")]), "/a b/");
        assert!(!token.is_variable());
        assert!(token.variable().is_none());
    }

    #[test]
    fn literal_pattern_is_escaped() {
        let token = Token::literal("/v1.0/items?").unwrap();
        assert_eq!(token.pattern(), r"/v1\.0/items\?");
    }

    #[test]
    fn literal_matches_own_text_only() {
        let token = Token::literal("/items/").unwrap();
        assert!(token.matches("/items/"));
        assert!(!token.matches("/items"));
    }

    #[test]
    fn variable_display_wraps_expression() {
        let token = Token::parse_variable("id=0").unwrap();
        assert_eq!(token.to_string(), "{id=0}");
        assert!(token.is_variable());
        assert_eq!(token.variable().map(Variable::name), Some("id"));
    }

    #[test]
    fn variable_expands_encoded_value() {
        let token = Token::parse_variable("path").unwrap();
        assert_eq!(token.expand(&[("path", "a/b c")]), "a%2Fb%20c");
    }

    #[test]
    fn variable_expands_default_in_encoded_form() {
        let token = Token::parse_variable("q=a%20b").unwrap();
        assert_eq!(token.expand(&[("other", "x")]), "a%20b");
    }

    #[test]
    fn default_triples_expand_without_decoding() {
        let token = Token::parse_variable("v=%FF").unwrap();
        assert_eq!(token.expand(&[("other", "x")]), "%FF");

        let token = Token::parse_variable("v=%41b%2fc").unwrap();
        assert_eq!(token.expand(&[("v", "")]), "%41b%2Fc");
    }

    #[test]
    fn parameter_overrides_default() {
        let token = Token::parse_variable("v=%FF").unwrap();
        assert_eq!(token.expand(&[("v", "é")]), "%C3%A9");
    }

    #[test]
    fn variable_missing_expands_empty() {
        let token = Token::parse_variable("id").unwrap();
        assert_eq!(token.expand(&[("other", "x")]), "");
    }

    #[test]
    fn variable_pattern_is_shared() {
        let a = Token::parse_variable("a").unwrap();
        let b = Token::parse_variable("b=1").unwrap();
        assert_eq!(a.pattern(), b.pattern());
        assert_eq!(a.pattern(), format!("({VALUE_PATTERN})"));
    }

    #[test]
    fn variable_matches_value_grammar() {
        let token = Token::parse_variable("id").unwrap();
        assert!(token.matches("42"));
        assert!(token.matches("abc-1"));
        assert!(!token.matches(""));
        assert!(!token.matches("42/x"));
    }

    #[test]
    fn variable_resolve_decodes_segment() {
        let pattern = UriPattern::compile("/{q}").unwrap();
        let mut result = UriResolveResult::new(&pattern);
        let token = Token::parse_variable("q").unwrap();

        token.resolve("a%20b", &mut result);
        assert_eq!(result.get("q"), Some("a b"));
    }

    #[test]
    fn literal_resolve_records_nothing() {
        let pattern = UriPattern::compile("/x").unwrap();
        let mut result = UriResolveResult::new(&pattern);
        let token = Token::literal("/x").unwrap();

        token.resolve("/x", &mut result);
        assert!(result.is_empty());
    }
}
