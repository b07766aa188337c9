//! Builder for constructing [`UriPattern`] instances from tokens.

use crate::error::{TemplateError, TemplateErrorKind, VariableError};
use crate::pattern::UriPattern;
use crate::token::Token;
use crate::variable::Variable;

/// A builder for assembling a [`UriPattern`] token by token.
///
/// Unlike [`UriPattern::compile`], the builder accepts [`Variable`] values
/// directly, so variables can carry a [`VariableType`](crate::VariableType).
/// Consecutive literals are merged and empty literals dropped, so a built
/// pattern has the same tokens as the compiled form of its template.
///
/// # Examples
///
/// ```
/// use uri_pattern::{UriPatternBuilder, Variable, VariableType};
///
/// let id = Variable::new("id")?.with_type(VariableType::new("integer")?);
///
/// let pattern = UriPatternBuilder::new()
///     .literal("/items/")
///     .variable(id)
///     .literal("/")
///     .literal("history")
///     .build()?;
///
/// assert_eq!(pattern.template(), "/items/{id}/history");
/// assert_eq!(pattern.variables().next().and_then(|v| v.variable_type()).map(|t| t.name()), Some("integer"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriPatternBuilder {
    tokens: Vec<Token>,
}

impl UriPatternBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text.
    ///
    /// Braces are rejected when the pattern is built.
    #[must_use]
    pub fn literal(mut self, text: &str) -> Self {
        if text.is_empty() {
            return self;
        }
        if let Some(Token::Literal(last)) = self.tokens.last_mut() {
            last.push_str(text);
        } else {
            self.tokens.push(Token::Literal(text.to_string()));
        }
        self
    }

    /// Appends a variable.
    #[must_use]
    pub fn variable(mut self, variable: Variable) -> Self {
        self.tokens.push(Token::Variable(variable));
        self
    }

    /// Parses and appends a variable expression.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError`] if the expression is not a valid variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_pattern::UriPatternBuilder;
    ///
    /// let pattern = UriPatternBuilder::new()
    ///     .literal("/page/")
    ///     .try_variable("n=1")?
    ///     .build()?;
    /// assert_eq!(pattern.expand(&[("x", "y")]), "/page/1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_variable(self, expression: &str) -> Result<Self, VariableError> {
        let variable = Variable::parse(expression)?;
        Ok(self.variable(variable))
    }

    /// Builds the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if a literal contains `{` or `}`, with the
    /// position of the brace in the assembled template, or if the regex
    /// engine rejects the combined pattern.
    pub fn build(self) -> Result<UriPattern, TemplateError> {
        let mut offset = 0;
        for token in &self.tokens {
            if let Token::Literal(text) = token {
                Token::literal(text).map_err(|e| Self::relocate(e, offset, &self.tokens))?;
            }
            offset += token.to_string().len();
        }
        UriPattern::from_tokens(self.tokens)
    }

    fn relocate(error: TemplateError, offset: usize, tokens: &[Token]) -> TemplateError {
        let input = tokens.iter().map(ToString::to_string).collect();
        let kind = match error.kind {
            TemplateErrorKind::UnexpectedBrace { char, position } => {
                TemplateErrorKind::UnexpectedBrace {
                    char,
                    position: offset + position,
                }
            }
            kind => kind,
        };
        TemplateError { input, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariableType;

    #[test]
    fn build_matches_compiled_template() {
        let built = UriPatternBuilder::new()
            .literal("/a/")
            .try_variable("b")
            .unwrap()
            .literal("/c")
            .build()
            .unwrap();
        let compiled = UriPattern::compile("/a/{b}/c").unwrap();
        assert_eq!(built, compiled);
        assert_eq!(built.regex_str(), compiled.regex_str());
    }

    #[test]
    fn consecutive_literals_are_merged() {
        let pattern = UriPatternBuilder::new()
            .literal("/a")
            .literal("")
            .literal("/b")
            .build()
            .unwrap();
        assert_eq!(pattern.tokens(), [Token::Literal("/a/b".to_string())]);
    }

    #[test]
    fn empty_builder_builds_empty_pattern() {
        let pattern = UriPatternBuilder::new().build().unwrap();
        assert_eq!(pattern.template(), "");
        assert!(pattern.matches(""));
    }

    #[test]
    fn variable_type_is_kept() {
        let kind = VariableType::new("date").unwrap();
        let pattern = UriPatternBuilder::new()
            .literal("/log/")
            .variable(Variable::new("day").unwrap().with_type(kind.clone()))
            .build()
            .unwrap();
        let var = pattern.variables().next().unwrap();
        assert_eq!(var.variable_type(), Some(&kind));
        assert_ne!(pattern, UriPattern::compile("/log/{day}").unwrap());
    }

    #[test]
    fn brace_in_literal_fails_with_template_position() {
        let err = UriPatternBuilder::new()
            .literal("/x/")
            .try_variable("id")
            .unwrap()
            .literal("/y}")
            .build()
            .unwrap_err();
        assert_eq!(err.input, "/x/{id}/y}");
        assert_eq!(
            err.kind,
            TemplateErrorKind::UnexpectedBrace {
                char: '}',
                position: 9
            }
        );
    }

    #[test]
    fn try_variable_rejects_invalid_expression() {
        let result = UriPatternBuilder::new().try_variable("-bad");
        assert!(matches!(result, Err(VariableError::InvalidName { .. })));
    }
}
