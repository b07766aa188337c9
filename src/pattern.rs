//! Compiled URI patterns.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use regex::Regex;

use crate::constants::{EXPRESSION_END, EXPRESSION_START};
use crate::error::{TemplateError, TemplateErrorKind};
use crate::parameters::Parameters;
use crate::resolve::{ResolveStatus, UriResolveResult};
use crate::token::Token;
use crate::variable::Variable;

/// A compiled URI template.
///
/// A pattern is compiled once from a template such as `/items/{id=0}` and can
/// then be used any number of times to:
///
/// - expand the template into a URI from variable values,
/// - test whether a URI matches the template,
/// - resolve the variable values out of a matching URI.
///
/// The template is split into literal and variable [`Token`]s. Their regex
/// fragments are concatenated, anchored at both ends, into a single regular
/// expression with one capture group per variable.
///
/// # Adjacent variables
///
/// Two variables with no literal text between them, as in `{a}{b}`, are
/// accepted but cannot be split reliably. The left variable takes the longest
/// value that still lets the rest of the URI match: resolving `abc` against
/// `{a}{b}` yields `a = "ab"` and `b = "c"`.
///
/// # Examples
///
/// ```
/// use uri_pattern::UriPattern;
///
/// let pattern = UriPattern::compile("/items/{id=0}").unwrap();
///
/// assert_eq!(pattern.expand(&[("id", "42")]), "/items/42");
/// assert_eq!(pattern.expand(&[("other", "x")]), "/items/0");
///
/// assert!(pattern.matches("/items/abc-1"));
/// assert!(!pattern.matches("/items/"));
/// assert!(!pattern.matches("/items/42/x"));
///
/// let result = pattern.resolve("/items/42");
/// assert!(result.is_resolved());
/// assert_eq!(result.get("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct UriPattern {
    template: String,
    tokens: Vec<Token>,
    regex: Regex,
}

impl UriPattern {
    /// Compiles a URI template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if:
    /// - A `{` is never closed
    /// - A `{` appears inside an expression, or a `}` outside one
    /// - An expression is empty
    /// - An expression is not a valid variable
    /// - The regex engine rejects the combined pattern
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        let tokens = Self::tokenize(template).map_err(|kind| TemplateError {
            input: template.to_string(),
            kind,
        })?;
        Self::from_parts(template.to_string(), tokens)
    }

    /// Builds a pattern from tokens whose literals are already validated.
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Result<Self, TemplateError> {
        let template = tokens.iter().map(ToString::to_string).collect();
        Self::from_parts(template, tokens)
    }

    /// Returns the template this pattern was compiled from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the template this pattern was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Returns the tokens of the template, in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the variables of the template, in order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.tokens.iter().filter_map(Token::variable)
    }

    /// Returns the variable names of the template, in order.
    ///
    /// A name used more than once is yielded each time.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables().map(Variable::name)
    }

    /// Returns the source of the compiled regular expression.
    #[must_use]
    pub fn regex_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Expands the template with the given parameters.
    ///
    /// Variables without a value expand to their default, or to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use uri_pattern::UriPattern;
    ///
    /// let pattern = UriPattern::compile("/search?q={query}&lang={lang=en}").unwrap();
    /// let params = HashMap::from([("query", "rust lang")]);
    /// assert_eq!(pattern.expand(&params), "/search?q=rust%20lang&lang=en");
    /// ```
    #[must_use]
    pub fn expand<P: Parameters + ?Sized>(&self, parameters: &P) -> String {
        self.tokens
            .iter()
            .map(|token| token.expand(parameters))
            .collect()
    }

    /// Returns true if the whole candidate matches this pattern.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Resolves the variable values of a candidate URI.
    ///
    /// The result status is [`ResolveStatus::Resolved`] if the candidate
    /// matches, with one decoded value per variable, and
    /// [`ResolveStatus::Error`] with no values otherwise.
    #[must_use]
    pub fn resolve(&self, candidate: &str) -> UriResolveResult<'_> {
        let mut result = UriResolveResult::new(self);

        let Some(captures) = self.regex.captures(candidate) else {
            tracing::debug!(
                template = %self.template,
                candidate,
                "URI does not match pattern"
            );
            result.set_status(ResolveStatus::Error);
            return result;
        };

        let variables = self.tokens.iter().filter(|token| token.is_variable());
        for (token, segment) in variables.zip(captures.iter().skip(1)) {
            token.resolve(segment.map_or("", |m| m.as_str()), &mut result);
        }

        result.set_status(ResolveStatus::Resolved);
        result
    }

    fn from_parts(template: String, tokens: Vec<Token>) -> Result<Self, TemplateError> {
        warn_adjacent_variables(&template, &tokens);

        let source = Self::regex_source(&tokens);
        let regex = match Regex::new(&source) {
            Ok(regex) => regex,
            Err(e) => {
                return Err(TemplateError {
                    input: template,
                    kind: TemplateErrorKind::Pattern {
                        reason: e.to_string(),
                    },
                });
            }
        };

        tracing::trace!(template = %template, pattern = %source, "compiled URI pattern");

        Ok(Self {
            template,
            tokens,
            regex,
        })
    }

    fn regex_source(tokens: &[Token]) -> String {
        let mut source = String::from("^");
        for token in tokens {
            source.push_str(&token.pattern());
        }
        source.push('$');
        source
    }

    fn tokenize(template: &str) -> Result<Vec<Token>, TemplateErrorKind> {
        let mut tokens = Vec::new();
        let mut literal_start = 0;
        let mut open: Option<usize> = None;

        for (i, c) in template.char_indices() {
            match (c, open) {
                (EXPRESSION_START, None) => {
                    if i > literal_start {
                        tokens.push(Token::Literal(template[literal_start..i].to_string()));
                    }
                    open = Some(i);
                }
                (EXPRESSION_END, Some(start)) => {
                    let expression = &template[start + 1..i];
                    if expression.is_empty() {
                        return Err(TemplateErrorKind::EmptyExpression { position: start });
                    }
                    let var = Variable::parse(expression).map_err(|error| {
                        TemplateErrorKind::InvalidVariable {
                            position: start,
                            error,
                        }
                    })?;
                    tokens.push(Token::Variable(var));
                    open = None;
                    literal_start = i + 1;
                }
                (EXPRESSION_START, Some(_)) | (EXPRESSION_END, None) => {
                    return Err(TemplateErrorKind::UnexpectedBrace {
                        char: c,
                        position: i,
                    });
                }
                _ => {}
            }
        }

        if let Some(position) = open {
            return Err(TemplateErrorKind::UnclosedExpression { position });
        }

        if literal_start < template.len() {
            tokens.push(Token::Literal(template[literal_start..].to_string()));
        }

        Ok(tokens)
    }
}

fn warn_adjacent_variables(template: &str, tokens: &[Token]) {
    for pair in tokens.windows(2) {
        if let [Token::Variable(left), Token::Variable(right)] = pair {
            tracing::warn!(
                template,
                left = left.name(),
                right = right.name(),
                "adjacent variables have no separator; the left one takes the longest value"
            );
        }
    }
}

impl PartialEq for UriPattern {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for UriPattern {}

impl Hash for UriPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tokens.hash(state);
    }
}

impl fmt::Display for UriPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

impl FromStr for UriPattern {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl TryFrom<&str> for UriPattern {
    type Error = TemplateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::compile(s)
    }
}

impl AsRef<str> for UriPattern {
    fn as_ref(&self) -> &str {
        &self.template
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UriPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.template)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UriPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::compile(&s).map_err(serde::de::Error::custom)
    }
}
