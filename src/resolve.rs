//! Results of resolving a URI against a pattern.

use std::collections::BTreeMap;
use std::fmt;

use crate::parameters::Parameters;
use crate::pattern::UriPattern;

/// The status of a resolve result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolveStatus {
    /// No resolution has been attempted yet
    #[default]
    Unresolved,
    /// The URI matched and every variable was resolved
    Resolved,
    /// The URI did not match the pattern
    Error,
}

impl ResolveStatus {
    /// Returns the lowercase name of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Resolved => "resolved",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values resolved from a URI by [`UriPattern::resolve`].
///
/// A result is produced fresh by each call and borrows the pattern that
/// produced it. Its status is [`ResolveStatus::Resolved`] when the URI matched
/// and [`ResolveStatus::Error`] otherwise, in which case it holds no values.
///
/// Values are the decoded segments, keyed by variable name.
///
/// # Examples
///
/// ```
/// use uri_pattern::{ResolveStatus, UriPattern};
///
/// let pattern = UriPattern::compile("/users/{user}/posts/{post}").unwrap();
///
/// let result = pattern.resolve("/users/ann%20lee/posts/7");
/// assert_eq!(result.status(), ResolveStatus::Resolved);
/// assert_eq!(result.get("user"), Some("ann lee"));
/// assert_eq!(result.names().collect::<Vec<_>>(), ["post", "user"]);
///
/// let result = pattern.resolve("/groups/7");
/// assert_eq!(result.status(), ResolveStatus::Error);
/// assert!(result.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriResolveResult<'p> {
    status: ResolveStatus,
    values: BTreeMap<String, String>,
    pattern: &'p UriPattern,
}

impl<'p> UriResolveResult<'p> {
    pub(crate) const fn new(pattern: &'p UriPattern) -> Self {
        Self {
            status: ResolveStatus::Unresolved,
            values: BTreeMap::new(),
            pattern,
        }
    }

    /// Returns the status of this result.
    #[must_use]
    pub const fn status(&self) -> ResolveStatus {
        self.status
    }

    /// Returns true if the URI matched and was resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == ResolveStatus::Resolved
    }

    /// Returns the pattern that produced this result.
    #[must_use]
    pub const fn pattern(&self) -> &'p UriPattern {
        self.pattern
    }

    /// Returns the resolved value of a variable, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the names of the resolved variables, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns an iterator over the resolved name/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of resolved variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variable was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn put(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), value);
    }

    pub(crate) fn set_status(&mut self, status: ResolveStatus) {
        self.status = status;
    }
}

impl Parameters for UriResolveResult<'_> {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResolveStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UriResolveResult<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("UriResolveResult", 2)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("values", &self.values)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_is_unresolved() {
        let pattern = UriPattern::compile("/{id}").unwrap();
        let result = UriResolveResult::new(&pattern);
        assert_eq!(result.status(), ResolveStatus::Unresolved);
        assert!(!result.is_resolved());
        assert!(result.is_empty());
        assert_eq!(result.pattern(), &pattern);
    }

    #[test]
    fn put_and_get() {
        let pattern = UriPattern::compile("/{a}/{b}").unwrap();
        let mut result = UriResolveResult::new(&pattern);
        result.put("b", "2".to_string());
        result.put("a", "1".to_string());
        result.set_status(ResolveStatus::Resolved);

        assert!(result.is_resolved());
        assert_eq!(result.get("a"), Some("1"));
        assert_eq!(result.get("c"), None);
        assert_eq!(result.len(), 2);
        assert_eq!(result.iter().collect::<Vec<_>>(), [("a", "1"), ("b", "2")]);
    }

    #[test]
    fn later_put_overwrites() {
        let pattern = UriPattern::compile("/{a}").unwrap();
        let mut result = UriResolveResult::new(&pattern);
        result.put("a", "first".to_string());
        result.put("a", "second".to_string());
        assert_eq!(result.get("a"), Some("second"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn status_display() {
        assert_eq!(ResolveStatus::Unresolved.to_string(), "unresolved");
        assert_eq!(ResolveStatus::Resolved.to_string(), "resolved");
        assert_eq!(ResolveStatus::Error.to_string(), "error");
        assert_eq!(ResolveStatus::default(), ResolveStatus::Unresolved);
    }

    #[test]
    fn result_drives_expansion() {
        let from = UriPattern::compile("/old/{id}").unwrap();
        let to = UriPattern::compile("/new/{id}").unwrap();
        let result = from.resolve("/old/a%2Fb");
        assert_eq!(to.expand(&result), "/new/a%2Fb");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_result() {
        let pattern = UriPattern::compile("/items/{id}").unwrap();
        let json = serde_json::to_string(&pattern.resolve("/items/42")).unwrap();
        assert_eq!(json, r#"{"status":"resolved","values":{"id":"42"}}"#);

        let json = serde_json::to_string(&pattern.resolve("/other")).unwrap();
        assert_eq!(json, r#"{"status":"error","values":{}}"#);
    }
}
