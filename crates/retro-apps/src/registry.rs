//! Installed application registry
//!
//! Holds the current installed set and diffs it against fresh platform
//! snapshots. The shell glue feeds each [`AppChange`] back into the icon
//! store (new install -> new icon record, uninstall -> record removal).

use crate::error::RegistryError;
use crate::manifest::{built_in_manifests, AppManifest};

/// A detected change between two installed-app snapshots
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppChange {
    /// A package appeared that was not present before
    Installed(AppManifest),
    /// A previously present package disappeared
    Removed(String),
}

/// Registry of installed applications
///
/// Insertion-ordered; lookups go by package id.
pub struct AppRegistry {
    apps: Vec<AppManifest>,
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Create a registry seeded with the built-in mini-programs
    pub fn with_built_ins() -> Self {
        Self {
            apps: built_in_manifests(),
        }
    }

    /// Number of registered apps
    #[inline]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// All manifests in registration order
    #[inline]
    pub fn manifests(&self) -> &[AppManifest] {
        &self.apps
    }

    /// Look up a manifest by package id
    pub fn get(&self, package: &str) -> Option<&AppManifest> {
        self.apps.iter().find(|m| m.package == package)
    }

    /// Register a single manifest
    pub fn insert(&mut self, manifest: AppManifest) -> Result<(), RegistryError> {
        if manifest.display_name.is_empty() {
            return Err(RegistryError::InvalidManifest(manifest.package));
        }
        if self.get(&manifest.package).is_some() {
            return Err(RegistryError::DuplicatePackage(manifest.package));
        }
        self.apps.push(manifest);
        Ok(())
    }

    /// Remove a manifest by package id
    pub fn remove(&mut self, package: &str) -> bool {
        let before = self.apps.len();
        self.apps.retain(|m| m.package != package);
        self.apps.len() != before
    }

    /// Diff a fresh installed-app snapshot against the current set and apply it
    ///
    /// Built-in `system.*` entries never appear in platform snapshots and are
    /// never reported as removed. Returns the applied changes in a stable
    /// order: removals first, then installs in snapshot order.
    pub fn sync(&mut self, snapshot: &[AppManifest]) -> Vec<AppChange> {
        let mut changes = Vec::new();

        let removed: Vec<String> = self
            .apps
            .iter()
            .filter(|m| !m.is_system() && !snapshot.iter().any(|s| s.package == m.package))
            .map(|m| m.package.clone())
            .collect();
        for package in removed {
            self.remove(&package);
            log::debug!("app removed: {}", package);
            changes.push(AppChange::Removed(package));
        }

        for manifest in snapshot {
            if self.get(&manifest.package).is_none() {
                self.apps.push(manifest.clone());
                log::debug!("app installed: {}", manifest.package);
                changes.push(AppChange::Installed(manifest.clone()));
            }
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_insert_and_get() {
        let mut registry = AppRegistry::new();
        registry
            .insert(AppManifest::new("com.vendor.mail", "Mail"))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("com.vendor.mail").unwrap().display_name, "Mail");
        assert!(registry.get("com.vendor.other").is_none());
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = AppRegistry::new();
        registry
            .insert(AppManifest::new("com.vendor.mail", "Mail"))
            .unwrap();

        let err = registry
            .insert(AppManifest::new("com.vendor.mail", "Mail 2"))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicatePackage("com.vendor.mail".to_string()));
    }

    #[test]
    fn test_registry_rejects_empty_display_name() {
        let mut registry = AppRegistry::new();
        let err = registry
            .insert(AppManifest::new("com.vendor.mail", ""))
            .unwrap_err();
        assert_eq!(err, RegistryError::InvalidManifest("com.vendor.mail".to_string()));
    }

    #[test]
    fn test_sync_detects_installs_and_removals() {
        let mut registry = AppRegistry::new();
        registry
            .insert(AppManifest::new("com.vendor.mail", "Mail"))
            .unwrap();

        let snapshot = vec![AppManifest::new("com.vendor.camera", "Camera")];
        let changes = registry.sync(&snapshot);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0], AppChange::Removed("com.vendor.mail".to_string()));
        assert_eq!(
            changes[1],
            AppChange::Installed(AppManifest::new("com.vendor.camera", "Camera"))
        );
        assert!(registry.get("com.vendor.camera").is_some());
        assert!(registry.get("com.vendor.mail").is_none());
    }

    #[test]
    fn test_sync_never_removes_built_ins() {
        let mut registry = AppRegistry::with_built_ins();
        let before = registry.len();

        let changes = registry.sync(&[]);

        assert!(changes.is_empty());
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut registry = AppRegistry::new();
        let snapshot = vec![
            AppManifest::new("com.vendor.mail", "Mail"),
            AppManifest::new("com.vendor.camera", "Camera"),
        ];

        let first = registry.sync(&snapshot);
        assert_eq!(first.len(), 2);

        let second = registry.sync(&snapshot);
        assert!(second.is_empty());
    }
}
