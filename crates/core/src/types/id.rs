//! Newtype IDs for type-safe entity references.
//!
//! Content-store documents are keyed by opaque strings, so these wrappers
//! hold `String` rather than integers. Use the `define_id!` macro to create
//! type-safe ID wrappers that prevent accidentally mixing IDs from different
//! entity types.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper around a content-store document ID.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use crystal_harmony_core::define_id;
/// define_id!(CustomerId);
/// define_id!(OrderRef);
///
/// let customer = CustomerId::new("customer-abc123");
/// let order = OrderRef::new("order-xyz789");
///
/// // These are different types, so this won't compile:
/// // let _: CustomerId = order;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

// Define standard entity IDs
define_id!(CustomerId);
define_id!(OrderRef);
