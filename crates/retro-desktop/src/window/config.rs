//! Window configuration for creation

use super::window::{NullContent, WindowContent};

/// Configuration for showing a window
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Logical identifier for singleton reuse (`system.notepad`,
    /// `folder:<folderId>`); `None` allows any number of instances
    pub identifier: Option<String>,
    /// Content lifecycle collaborator
    pub content: Box<dyn WindowContent>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            identifier: None,
            content: Box::new(NullContent),
        }
    }
}

impl WindowConfig {
    /// Create a config with a title and no identifier
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the logical identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the content collaborator
    pub fn with_content(mut self, content: Box<dyn WindowContent>) -> Self {
        self.content = content;
        self
    }
}
