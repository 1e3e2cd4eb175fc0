//! Theme state and change observers
//!
//! Theme-aware components register as observers and receive a typed change
//! event; nothing walks a view tree looking for them.

/// Active visual theme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Whether window fade effects are enabled
    pub effects_enabled: bool,
    /// Resource key for the placeholder icon substituted on resolution failure
    pub placeholder_icon: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "classic".to_string(),
            effects_enabled: true,
            placeholder_icon: "placeholder".to_string(),
        }
    }
}

/// Typed theme-change notification
#[derive(Clone, Debug)]
pub enum ThemeEvent {
    /// The active theme was replaced
    Changed(Theme),
}

/// Receives theme-change notifications
pub trait ThemeObserver {
    fn on_theme_event(&mut self, event: &ThemeEvent);
}

/// Owns the active theme and its observers
#[derive(Default)]
pub struct ThemeRegistry {
    theme: Theme,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl ThemeRegistry {
    /// Create a registry with the default theme
    pub fn new() -> Self {
        Self::default()
    }

    /// The active theme
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Register an observer
    pub fn subscribe(&mut self, observer: Box<dyn ThemeObserver>) {
        self.observers.push(observer);
    }

    /// Number of registered observers
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Replace the active theme and notify every observer
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        let event = ThemeEvent::Changed(self.theme.clone());
        for observer in &mut self.observers {
            observer.on_theme_event(&event);
        }
    }
}
