//! Template variables.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::constants::{DEFAULT_SEPARATOR, PERCENT};
use crate::error::VariableError;
use crate::parameters::Parameters;
use crate::variable_type::{VariableType, invalid_name_char};

/// A named placeholder in a URI template.
///
/// Variables are written in templates as `{name}` or `{name=default}`:
///
/// ```text
/// var         = varname [ "=" vardefault ]
/// varname     = (ALPHA / DIGIT) *(ALPHA / DIGIT / "." / "_" / "-")
/// vardefault  = *(unreserved / pct-encoded)
/// ```
///
/// The default is kept in its encoded form, as written in the template. A
/// variable may also carry a [`VariableType`], which has no textual syntax and
/// is attached with [`Variable::with_type`].
///
/// # Examples
///
/// ```
/// use uri_pattern::Variable;
///
/// let var = Variable::parse("id=0").unwrap();
/// assert_eq!(var.name(), "id");
/// assert_eq!(var.default_value(), Some("0"));
/// assert_eq!(var.to_string(), "id=0");
///
/// assert_eq!(var.value(&[("id", "42")]), "42");
/// assert_eq!(var.value(&[("other", "x")]), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    default: Option<String>,
    variable_type: Option<VariableType>,
}

impl Variable {
    /// Parses a variable from its expression (the text between braces).
    ///
    /// The expression is split on the first `=`: the left part is the name
    /// and the right part, if any, the default.
    ///
    /// # Errors
    ///
    /// Returns `VariableError` if:
    /// - The name is empty
    /// - The name does not start with a letter or digit, or contains a
    ///   character other than letters, digits, `.`, `_` and `-`
    /// - The default contains anything other than unreserved characters and
    ///   percent-encoded triples
    pub fn parse(expression: &str) -> Result<Self, VariableError> {
        match expression.split_once(DEFAULT_SEPARATOR) {
            Some((name, default)) => Self::with_default(name, default),
            None => Self::new(expression),
        }
    }

    /// Creates a variable without a default.
    ///
    /// # Errors
    ///
    /// Returns `VariableError` if the name is invalid.
    pub fn new(name: &str) -> Result<Self, VariableError> {
        Self::validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            default: None,
            variable_type: None,
        })
    }

    /// Creates a variable with a default value.
    ///
    /// The default must already be percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `VariableError` if the name or the default is invalid.
    pub fn with_default(name: &str, default: &str) -> Result<Self, VariableError> {
        Self::validate_name(name)?;
        if let Some(position) = invalid_value_position(default) {
            return Err(VariableError::InvalidDefault {
                value: default.to_string(),
                position,
            });
        }
        Ok(Self {
            name: name.to_string(),
            default: Some(default.to_string()),
            variable_type: None,
        })
    }

    /// Returns this variable tagged with the given type.
    #[must_use]
    pub fn with_type(mut self, variable_type: VariableType) -> Self {
        self.variable_type = Some(variable_type);
        self
    }

    /// Returns the variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default value in its encoded form, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns the variable type, if any.
    #[must_use]
    pub const fn variable_type(&self) -> Option<&VariableType> {
        self.variable_type.as_ref()
    }

    /// Returns the raw value of this variable.
    ///
    /// This is the parameter bound to the variable name when it is present
    /// and non-empty, otherwise the decoded default, otherwise the empty
    /// string.
    #[must_use]
    pub fn value<'a, P: Parameters + ?Sized>(&'a self, parameters: &'a P) -> Cow<'a, str> {
        match parameters.value_of(&self.name) {
            Some(value) if !value.is_empty() => Cow::Borrowed(value),
            _ => self
                .default
                .as_deref()
                .map_or(Cow::Borrowed(""), codec::decode),
        }
    }

    /// Returns true if the name follows the variable name grammar.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        Self::validate_name(name).is_ok()
    }

    /// Returns true if the value is a well-formed expanded value.
    ///
    /// A valid value is one or more unreserved characters or percent-encoded
    /// triples.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_pattern::Variable;
    ///
    /// assert!(Variable::is_valid_value("abc-1"));
    /// assert!(Variable::is_valid_value("a%20b"));
    /// assert!(!Variable::is_valid_value("a b"));
    /// assert!(!Variable::is_valid_value("100%"));
    /// assert!(!Variable::is_valid_value(""));
    /// ```
    #[must_use]
    pub fn is_valid_value(value: &str) -> bool {
        !value.is_empty() && invalid_value_position(value).is_none()
    }

    fn validate_name(name: &str) -> Result<(), VariableError> {
        if name.is_empty() {
            return Err(VariableError::EmptyName);
        }
        match invalid_name_char(name) {
            Some((position, char)) => Err(VariableError::InvalidName {
                name: name.to_string(),
                char,
                position,
            }),
            None => Ok(()),
        }
    }
}

/// Returns the byte offset of the first byte that is neither unreserved nor
/// part of a well-formed percent-encoded triple.
fn invalid_value_position(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if char::from(b) == PERCENT {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return Some(i),
            }
        } else if b.is_ascii() && codec::is_unreserved(char::from(b)) {
            i += 1;
        } else {
            return Some(i);
        }
    }

    None
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(f, "{}{DEFAULT_SEPARATOR}{default}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for Variable {
    type Err = VariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Variable {
    type Error = VariableError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Variable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Variable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
