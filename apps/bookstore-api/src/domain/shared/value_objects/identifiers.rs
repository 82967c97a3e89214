//! Strongly-typed identifiers for domain entities.
//!
//! Identifiers are assigned by persistence adapters, never by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a book within a store.
///
/// The in-memory adapter renders a monotonically increasing sequence number
/// as a decimal string. Other adapters may use any opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Create a new identifier from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Create an identifier from a store sequence number.
    #[must_use]
    pub fn from_sequence(sequence: u64) -> Self {
        Self(sequence.to_string())
    }

    /// Interpret the identifier as a store sequence number.
    ///
    /// Returns `None` for identifiers that were not produced by
    /// [`BookId::from_sequence`].
    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        // Reject forms like "+1" or "01" that parse but were never issued.
        let seq: u64 = self.0.parse().ok()?;
        (seq.to_string() == self.0).then_some(seq)
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
