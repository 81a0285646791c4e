use serde::{Deserialize, Serialize};
use std::fmt;

/// Content address of a captured clipboard text.
///
/// The value is the lowercase hex digest of the raw UTF-8 bytes. It is both
/// the store key and the record's externally visible identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ContentHash {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let hash = ContentHash::from("abc123");
        assert_eq!(serde_json::to_string(&hash).unwrap(), "\"abc123\"");
        assert_eq!(hash.to_string(), "abc123");
    }
}
