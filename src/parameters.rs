//! Parameter sources used when expanding templates.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A read-only source of raw (unencoded) variable values.
///
/// Implemented for the standard maps keyed by anything that borrows as
/// `str`, and for lists of name/value pairs where the first matching name
/// wins.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use uri_pattern::Parameters;
///
/// let mut params = HashMap::new();
/// params.insert("id", "42");
/// assert_eq!(params.value_of("id"), Some("42"));
///
/// let pairs = [("lang", "en"), ("lang", "fr")];
/// assert_eq!(pairs.value_of("lang"), Some("en"));
/// ```
pub trait Parameters {
    /// Returns the raw value bound to `name`, if any.
    fn value_of(&self, name: &str) -> Option<&str>;
}

impl<P: Parameters + ?Sized> Parameters for &P {
    fn value_of(&self, name: &str) -> Option<&str> {
        (**self).value_of(name)
    }
}

impl<K, V, S> Parameters for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> Parameters for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Parameters for [(K, V)] {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> Parameters for [(K, V); N] {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.as_slice().value_of(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Parameters for Vec<(K, V)> {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.as_slice().value_of(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_of_owned_strings() {
        let mut params: HashMap<String, String> = HashMap::new();
        params.insert("id".to_string(), "42".to_string());
        assert_eq!(params.value_of("id"), Some("42"));
        assert_eq!(params.value_of("missing"), None);
    }

    #[test]
    fn btree_map_of_borrowed_strings() {
        let params = BTreeMap::from([("a", "1"), ("b", "2")]);
        assert_eq!(params.value_of("b"), Some("2"));
    }

    #[test]
    fn pairs_first_match_wins() {
        let pairs = vec![("x".to_string(), "first"), ("x".to_string(), "second")];
        assert_eq!(pairs.value_of("x"), Some("first"));
    }

    #[test]
    fn references_delegate() {
        let params = [("id", "7")];
        let by_ref = &params;
        assert_eq!(by_ref.value_of("id"), Some("7"));
    }

    #[test]
    fn empty_value_is_still_present() {
        let params = [("id", "")];
        assert_eq!(params.value_of("id"), Some(""));
    }
}
