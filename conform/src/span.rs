//! Location of a value inside the input that is being validated.
//!
//! Errors raised deep inside objects and arrays carry a [Keys](Keys) span,
//! so the caller knows which field or element was rejected without
//! walking the input again.

#[cfg(feature = "smallvec")]
/// Most inputs are only a few levels deep, smallvec avoids
/// an allocation for those.
type Path = smallvec_crate::SmallVec<[String; 6]>;

#[cfg(not(feature = "smallvec"))]
type Path = Vec<String>;

/// Field names and array indices leading to a value, outermost first.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Keys(Path);

impl Keys {
    /// The root value.
    pub fn new() -> Self {
        Keys(Path::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the span points at the root value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `user.tags.0`
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }

    /// Descend into `key`.
    pub fn push(&mut self, key: impl ToString) {
        self.0.push(key.to_string())
    }

    /// Errors are created at the innermost value and gain their
    /// parents while they travel back up the validator tree.
    pub fn prepend(&mut self, key: impl ToString) {
        self.0.insert(0, key.to_string())
    }
}

impl core::fmt::Display for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        let mut keys = Self::new();
        keys.push(key);
        keys
    }
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Self::from(key.to_string())
    }
}

impl<K: ToString> FromIterator<K> for Keys {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Keys(iter.into_iter().map(|k| k.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Keys;

    #[test]
    fn prepend_builds_outermost_first() {
        let mut keys = Keys::from("0");
        keys.prepend("tags");
        keys.prepend("user");

        assert_eq!(keys.dotted(), "user.tags.0");
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn indices_are_keys() {
        let keys: Keys = vec!["address".to_string(), 2.to_string()].into_iter().collect();
        assert_eq!(keys.to_string(), "address.2");
        assert_eq!(keys.iter().last(), Some("2"));
    }
}
