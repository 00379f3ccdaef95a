//! Domain identifier for board configurations.
//!
//! A [`StateKey`] wraps the serialized board contents supplied by the caller.
//! The key is opaque to the engine: equal boards must serialize to equal
//! strings, and lookup uses exact byte equality with no normalization.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Unique identifier for one board configuration.
///
/// # Examples
///
/// ```
/// use qslide::StateKey;
///
/// let key = StateKey::new("2,0,0,4|0,0,0,0|0,0,0,0|0,0,0,2");
/// assert_eq!(key.as_str(), "2,0,0,4|0,0,0,0|0,0,0,0|0,0,0,2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Create a new state key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the key into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for StateKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<StateKey> for &str {
    fn eq(&self, other: &StateKey) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for StateKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for StateKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StateKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
