//! Application manifests
//!
//! Declares the identity of launchable targets. Built-in mini-programs use
//! the synthetic `system.*` namespace; real applications carry their own
//! package ids.

use serde::{Deserialize, Serialize};

/// Package id prefix for built-in mini-programs
pub const SYSTEM_PREFIX: &str = "system.";

/// Package id of the recycle bin pseudo-app
pub const RECYCLE_BIN_PACKAGE: &str = "system.recyclebin";

/// Manifest describing one launchable target
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    /// Unique package id, reverse-domain format or `system.*`
    pub package: String,
    /// Human-readable name
    pub display_name: String,
}

impl AppManifest {
    /// Create a manifest
    pub fn new(package: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            display_name: display_name.into(),
        }
    }

    /// Whether this is a built-in mini-program
    #[inline]
    pub fn is_system(&self) -> bool {
        self.package.starts_with(SYSTEM_PREFIX)
    }
}

/// Built-in mini-programs present on every install
const BUILT_IN: &[(&str, &str)] = &[
    ("system.notepad", "Notepad"),
    ("system.dialer", "Dialer"),
    ("system.browser", "Browser"),
    ("system.minesweeper", "Minesweeper"),
    ("system.solitaire", "Solitaire"),
];

/// Manifests for the built-in mini-programs
pub fn built_in_manifests() -> Vec<AppManifest> {
    BUILT_IN
        .iter()
        .map(|(package, name)| AppManifest::new(*package, *name))
        .collect()
}
