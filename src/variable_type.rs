//! Variable type tags.

use std::fmt;
use std::str::FromStr;

use crate::error::VariableTypeError;

/// A semantic tag qualifying a [`Variable`](crate::Variable) beyond its name.
///
/// The type carries no behavior of its own. Applications may use it to pick
/// a conversion for resolved values or to enforce a kind of value.
///
/// Type names follow the variable name grammar: a letter or digit followed by
/// letters, digits, `.`, `_` or `-`. Two types are equal when their names
/// are equal.
///
/// # Examples
///
/// ```
/// use uri_pattern::VariableType;
///
/// let numeric = VariableType::new("integer").unwrap();
/// assert_eq!(numeric.name(), "integer");
/// assert!(VariableType::new("_private").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableType(String);

impl VariableType {
    /// Creates a variable type from its name.
    ///
    /// # Errors
    ///
    /// Returns `VariableTypeError` if the name is empty or does not follow
    /// the name grammar.
    pub fn new(name: &str) -> Result<Self, VariableTypeError> {
        if name.is_empty() {
            return Err(VariableTypeError::Empty);
        }
        if let Some((position, char)) = invalid_name_char(name) {
            return Err(VariableTypeError::InvalidChar { char, position });
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name of this type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is a valid type name.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && invalid_name_char(name).is_none()
    }

    /// Returns true if the character may follow the first one in a name.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
    }
}

/// Returns the char index and character of the first violation of the name
/// grammar shared by variables and types.
pub(crate) fn invalid_name_char(name: &str) -> Option<(usize, char)> {
    name.chars().enumerate().find(|&(i, c)| {
        if i == 0 {
            !c.is_ascii_alphanumeric()
        } else {
            !VariableType::is_valid_char(c)
        }
    })
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VariableType {
    type Err = VariableTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for VariableType {
    type Error = VariableTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for VariableType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VariableType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VariableType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_valid_type() {
        let t = VariableType::new("date").unwrap();
        assert_eq!(t.name(), "date");
        assert_eq!(t.to_string(), "date");
    }

    #[test]
    fn new_type_with_punctuation() {
        let t = VariableType::new("iso.date-time_v2").unwrap();
        assert_eq!(t.name(), "iso.date-time_v2");
    }

    #[test]
    fn new_empty_fails() {
        assert!(matches!(VariableType::new(""), Err(VariableTypeError::Empty)));
    }

    #[test]
    fn new_leading_punctuation_fails() {
        let result = VariableType::new(".hidden");
        assert!(matches!(
            result,
            Err(VariableTypeError::InvalidChar { char: '.', position: 0 })
        ));
    }

    #[test]
    fn new_space_fails() {
        let result = VariableType::new("big int");
        assert!(matches!(
            result,
            Err(VariableTypeError::InvalidChar { char: ' ', position: 3 })
        ));
    }

    #[test]
    fn equality_by_name() {
        let a = VariableType::new("integer").unwrap();
        let b: VariableType = "integer".parse().unwrap();
        assert_eq!(a, b);

        let set: HashSet<VariableType> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn is_valid_name_agrees_with_new() {
        for name in ["a", "9", "a.b", "a_b", "a-b", "", "-a", "a b", "a/b"] {
            assert_eq!(VariableType::is_valid_name(name), VariableType::new(name).is_ok());
        }
    }
}
