//! Layout persistence
//!
//! Serializes the icon store to the flat key-value store's JSON value and
//! rebuilds it tolerantly on load.

mod layout;

pub use layout::{decode_store, encode_store, LayoutSnapshot, PersistedIcon};
