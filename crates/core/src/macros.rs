// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sq-scheduler Authors

//! Declarative macros for reducing boilerplate.
//!
//! - [`define_id!`] — newtype ID wrapper with a type prefix and nanoid suffix

/// Generate setter methods inside an existing `impl` block.
///
/// Each `set { field: Type }` entry generates a consuming setter that
/// returns `Self`, so calls chain: `Config::default().pool_size(8)`.
#[macro_export]
macro_rules! setters {
    ($( set { $field:ident : $ty:ty } )*) => {
        $(
            pub fn $field(mut self, v: $ty) -> Self {
                self.$field = v;
                self
            }
        )*
    };
}

/// Define a newtype ID wrapper around `String` with a type prefix.
///
/// Generates `new()` for random ID generation, `from_string()` for parsing,
/// `as_str()`, `Display`, `From<String>`, `From<&str>`, and `Hash`/`Eq`
/// implementations suitable for use as a `HashMap` key.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct QueueItemId("qi-");
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($prefix:literal);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new random, server-assigned ID with the type prefix.
            pub fn new() -> Self {
                Self(format!("{}{}", Self::PREFIX, nanoid::nanoid!(16)))
            }

            /// Construct an ID from an existing string (parsing/deserialization/tests).
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_string(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from_string(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
