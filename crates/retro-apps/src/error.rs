//! Error types for app registry operations

use thiserror::Error;

/// Errors that can occur while maintaining the app registry
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A manifest with this package id is already registered
    #[error("package {0} is already registered")]
    DuplicatePackage(String),

    /// The manifest is missing required identity fields
    #[error("manifest for {0} has an empty display name")]
    InvalidManifest(String),
}
