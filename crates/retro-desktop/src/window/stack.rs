//! Ordered window stack
//!
//! The stack owns every open floating window, back to front. Ordering is
//! append-based; the only promotion is an explicit bring-to-front. Every
//! operation on an absent window is a no-op, and removal suppresses
//! already-detached views instead of propagating them.

use super::{WindowConfig, WindowHandle, WindowId};

/// Manager for the ordered list of open floating windows
pub struct WindowStack {
    /// Back-to-front; the last element is front-most
    windows: Vec<WindowHandle>,
    next_id: WindowId,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of tracked windows
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Check if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All windows, back to front
    #[inline]
    pub fn windows(&self) -> &[WindowHandle] {
        &self.windows
    }

    /// Get a window by id
    pub fn get(&self, id: WindowId) -> Option<&WindowHandle> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get a window by logical identifier
    pub fn get_by_identifier(&self, identifier: &str) -> Option<&WindowHandle> {
        self.windows
            .iter()
            .find(|w| w.identifier.as_deref() == Some(identifier))
    }

    /// The front-most window
    pub fn front(&self) -> Option<&WindowHandle> {
        self.windows.last()
    }

    /// The focused window's id
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.focused).map(|w| w.id)
    }

    /// Show a window: attach, append front-most, focus
    ///
    /// When the config carries an identifier that is already tracked, the
    /// existing window is focused and returned instead of opening a
    /// duplicate; the no-duplicate-identifier invariant holds no matter
    /// what callers do.
    pub fn show(&mut self, config: WindowConfig) -> WindowId {
        if let Some(identifier) = &config.identifier {
            if let Some(existing) = self.get_by_identifier(identifier).map(|w| w.id) {
                log::debug!("window {} reused for {}", existing, identifier);
                self.find_and_focus(identifier);
                return existing;
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        self.unfocus_all();
        let mut window = WindowHandle {
            id,
            identifier: config.identifier,
            title: config.title,
            focused: true,
            minimized: false,
            content: config.content,
        };
        window.content.on_show();
        self.windows.push(window);
        id
    }

    /// Remove a window: unregister hook, detach, drop from the list
    ///
    /// Idempotent: removing an absent id returns `false` and does nothing.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let index = match self.windows.iter().position(|w| w.id == id) {
            Some(index) => index,
            None => return false,
        };

        let mut window = self.windows.remove(index);
        window.content.on_unregister();
        if let Err(err) = window.content.detach() {
            // Already gone is a recoverable terminal state, not an error.
            log::debug!("window {}: {}", id, err);
        }

        if window.focused {
            self.focus_front();
        }
        true
    }

    /// Promote a window to front-most and focus it
    ///
    /// Re-layering only; the view is not reattached.
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        let index = match self.windows.iter().position(|w| w.id == id) {
            Some(index) => index,
            None => return false,
        };

        self.unfocus_all();
        let mut window = self.windows.remove(index);
        window.focused = true;
        window.content.raise();
        self.windows.push(window);
        true
    }

    /// Find a window by identifier, restore it if minimized, and focus it
    ///
    /// Returns whether a match was found; callers use this to reuse
    /// singleton windows instead of opening duplicates.
    pub fn find_and_focus(&mut self, identifier: &str) -> bool {
        let found = self
            .windows
            .iter_mut()
            .find(|w| w.identifier.as_deref() == Some(identifier));

        let id = match found {
            Some(window) => {
                if window.minimized {
                    window.minimized = false;
                    window.content.on_restore();
                }
                window.id
            }
            None => return false,
        };

        self.bring_to_front(id);
        true
    }

    /// Close the front-most window, if any
    ///
    /// Invokes the close hook before removal. Returns whether a window was
    /// closed, letting a back-navigation gesture fall through to the home
    /// level when the stack is empty.
    pub fn close_front(&mut self) -> bool {
        let id = match self.windows.last_mut() {
            Some(window) => {
                window.content.on_close();
                window.id
            }
            None => return false,
        };
        self.remove(id)
    }

    /// Minimize a window and pass focus to the next eligible one
    pub fn minimize(&mut self, id: WindowId) {
        let minimized = match self.windows.iter_mut().find(|w| w.id == id) {
            Some(window) if !window.minimized => {
                window.minimized = true;
                window.focused = false;
                window.content.on_minimize();
                true
            }
            _ => false,
        };
        if minimized {
            self.focus_front();
        }
    }

    fn unfocus_all(&mut self) {
        for window in &mut self.windows {
            window.focused = false;
        }
    }

    /// Focus the front-most non-minimized window, if any
    fn focus_front(&mut self) {
        self.unfocus_all();
        if let Some(window) = self.windows.iter_mut().rev().find(|w| !w.minimized) {
            window.focused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowContent;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Probe {
        shows: Arc<AtomicUsize>,
        closes: Arc<AtomicUsize>,
        unregisters: Arc<AtomicUsize>,
        restores: Arc<AtomicUsize>,
        raises: Arc<AtomicUsize>,
    }

    impl WindowContent for Probe {
        fn on_show(&mut self) {
            self.shows.fetch_add(1, Ordering::Relaxed);
        }
        fn on_close(&mut self) {
            self.closes.fetch_add(1, Ordering::Relaxed);
        }
        fn on_restore(&mut self) {
            self.restores.fetch_add(1, Ordering::Relaxed);
        }
        fn on_unregister(&mut self) {
            self.unregisters.fetch_add(1, Ordering::Relaxed);
        }
        fn raise(&mut self) {
            self.raises.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn show_plain(stack: &mut WindowStack, title: &str) -> WindowId {
        stack.show(WindowConfig::new(title))
    }

    #[test]
    fn test_show_focuses_new_window() {
        let mut stack = WindowStack::new();
        let a = show_plain(&mut stack, "A");
        let b = show_plain(&mut stack, "B");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.focused(), Some(b));
        assert!(!stack.get(a).unwrap().focused);
        assert_eq!(stack.front().unwrap().id, b);
    }

    #[test]
    fn test_bring_to_front_reorders_and_refocuses() {
        let mut stack = WindowStack::new();
        let a = stack.show(WindowConfig::new("A").with_identifier("w1"));
        let b = show_plain(&mut stack, "B");

        assert!(stack.bring_to_front(a));

        // Order becomes [B, A], A focused, B unfocused
        let order: Vec<WindowId> = stack.windows().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, a]);
        assert!(stack.get(a).unwrap().focused);
        assert!(!stack.get(b).unwrap().focused);
    }

    #[test]
    fn test_singleton_reuse_by_identifier() {
        let mut stack = WindowStack::new();
        let probe = Probe::default();
        let first = stack.show(
            WindowConfig::new("Notepad")
                .with_identifier("system.notepad")
                .with_content(Box::new(probe.clone())),
        );
        show_plain(&mut stack, "Other");

        assert!(stack.find_and_focus("system.notepad"));

        let matching = stack
            .windows()
            .iter()
            .filter(|w| w.identifier.as_deref() == Some("system.notepad"))
            .count();
        assert_eq!(matching, 1);
        assert_eq!(stack.focused(), Some(first));

        // Showing the same identifier again reuses rather than duplicates
        let again = stack.show(WindowConfig::new("Notepad").with_identifier("system.notepad"));
        assert_eq!(again, first);
        assert_eq!(stack.len(), 2);
        assert_eq!(probe.shows.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_find_and_focus_restores_minimized() {
        let mut stack = WindowStack::new();
        let probe = Probe::default();
        let id = stack.show(
            WindowConfig::new("Notepad")
                .with_identifier("system.notepad")
                .with_content(Box::new(probe.clone())),
        );

        stack.minimize(id);
        assert!(stack.get(id).unwrap().minimized);

        assert!(stack.find_and_focus("system.notepad"));
        let window = stack.get(id).unwrap();
        assert!(!window.minimized);
        assert!(window.focused);
        assert_eq!(probe.restores.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_find_and_focus_miss_returns_false() {
        let mut stack = WindowStack::new();
        show_plain(&mut stack, "A");
        assert!(!stack.find_and_focus("system.notepad"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut stack = WindowStack::new();
        let probe = Probe::default();
        let id = stack.show(WindowConfig::new("A").with_content(Box::new(probe.clone())));

        assert!(stack.remove(id));
        assert!(!stack.remove(id));
        assert_eq!(probe.unregisters.load(Ordering::Relaxed), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_remove_unregisters_before_detach() {
        struct OrderProbe {
            log: Arc<std::sync::Mutex<Vec<&'static str>>>,
        }
        impl WindowContent for OrderProbe {
            fn on_unregister(&mut self) {
                self.log.lock().unwrap().push("unregister");
            }
            fn detach(&mut self) -> Result<(), crate::error::DetachedError> {
                self.log.lock().unwrap().push("detach");
                Ok(())
            }
        }

        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut stack = WindowStack::new();
        let id = stack.show(
            WindowConfig::new("A").with_content(Box::new(OrderProbe { log: log.clone() })),
        );
        stack.remove(id);

        assert_eq!(*log.lock().unwrap(), vec!["unregister", "detach"]);
    }

    #[test]
    fn test_remove_suppresses_detach_failure() {
        struct Detached;
        impl WindowContent for Detached {
            fn detach(&mut self) -> Result<(), crate::error::DetachedError> {
                Err(crate::error::DetachedError)
            }
        }

        let mut stack = WindowStack::new();
        let id = stack.show(WindowConfig::new("A").with_content(Box::new(Detached)));

        assert!(stack.remove(id));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_remove_focused_passes_focus_to_front() {
        let mut stack = WindowStack::new();
        let a = show_plain(&mut stack, "A");
        let b = show_plain(&mut stack, "B");

        stack.remove(b);
        assert_eq!(stack.focused(), Some(a));
    }

    #[test]
    fn test_close_front_window() {
        let mut stack = WindowStack::new();
        let probe = Probe::default();
        show_plain(&mut stack, "A");
        stack.show(WindowConfig::new("B").with_content(Box::new(probe.clone())));

        assert!(stack.close_front());
        assert_eq!(probe.closes.load(Ordering::Relaxed), 1);
        assert_eq!(probe.unregisters.load(Ordering::Relaxed), 1);
        assert_eq!(stack.len(), 1);

        assert!(stack.close_front());
        assert!(!stack.close_front());
    }

    #[test]
    fn test_minimize_passes_focus_and_ignores_repeat() {
        let mut stack = WindowStack::new();
        let a = show_plain(&mut stack, "A");
        let b = show_plain(&mut stack, "B");

        stack.minimize(b);
        assert_eq!(stack.focused(), Some(a));

        // Minimizing again is a no-op
        stack.minimize(b);
        assert_eq!(stack.focused(), Some(a));

        // Minimizing everything leaves nothing focused
        stack.minimize(a);
        assert_eq!(stack.focused(), None);
    }

    #[test]
    fn test_operations_on_absent_windows_are_noops() {
        let mut stack = WindowStack::new();
        assert!(!stack.bring_to_front(99));
        assert!(!stack.remove(99));
        stack.minimize(99);
        assert!(stack.is_empty());
    }
}
