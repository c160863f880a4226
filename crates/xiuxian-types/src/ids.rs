//! String-keyed identifier wrappers for catalog entities.
//!
//! Node and path identifiers are human-authored catalog keys (`baihui`,
//! `main_meridian`), unique within a realm. Wrapping them in newtypes keeps
//! the two id spaces from being mixed at compile time even though both are
//! strings on the wire.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from a catalog key.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Return the key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner [`String`] value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_key! {
    /// Identifier for an acupoint node, unique within its realm.
    NodeId
}

define_key! {
    /// Identifier for a meridian path, unique within its realm.
    PathId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let node = NodeId::from("baihui");
        let path = PathId::from("main_meridian");
        // These are different types -- the compiler enforces no mixing.
        assert_eq!(node.as_str(), "baihui");
        assert_eq!(path.as_str(), "main_meridian");
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = NodeId::from("dantian");
        let json = serde_json::to_string(&original).ok();
        // Transparent serialization: a bare JSON string, not an object.
        assert_eq!(json.as_deref(), Some("\"dantian\""));
        let restored: Result<NodeId, _> = serde_json::from_str(json.as_deref().unwrap_or("\"\""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn id_display_matches_key() {
        let id = NodeId::from("qihai");
        assert_eq!(id.to_string(), "qihai");
        assert_eq!(id.into_inner(), "qihai");
    }
}
