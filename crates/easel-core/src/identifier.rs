//! Identifier management using string interning
//!
//! Node and edge ids arrive as strings from the editor and are compared
//! constantly while building adjacency and level tables. [`Id`] interns them
//! once so the engines can hash and copy a small symbol instead.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned identifier of a node or an edge.
///
/// Serializes as the plain string it was created from, so documents keep
/// their original ids.
///
/// # Examples
///
/// ```
/// use easel_core::identifier::Id;
///
/// let a = Id::new("node-1");
/// let b: Id = "node-1".into();
///
/// assert_eq!(a, b);
/// assert_eq!(a, "node-1");
/// assert_eq!(a.to_string(), "node-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f.write_str(str_value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        interner
            .resolve(self.0)
            .is_some_and(|self_str| self_str == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_interns_to_same_id() {
        let a = Id::new("shared");
        let b = Id::new("shared");
        let c = Id::new("other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_round_trips_name() {
        assert_eq!(Id::new("node_42").to_string(), "node_42");
    }

    #[test]
    fn test_compare_with_str() {
        let id = Id::new("Rectangle");
        assert!(id == "Rectangle");
        assert!(id != "Oval");
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let id = Id::new("edge-a-b");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""edge-a-b""#);

        let back: Id = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
