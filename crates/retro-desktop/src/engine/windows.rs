//! Window operations
//!
//! Thin delegation to the window stack, plus the fade effects the active
//! theme asks for. Fades are render hints sampled by the host with its own
//! clock; the engine only tracks which ones are still running.

use crate::transition::Fade;
use crate::window::{WindowConfig, WindowId};
use super::ShellEngine;

impl ShellEngine {
    /// Show a window, front-most and focused
    ///
    /// Configs carrying an already-open identifier reuse the existing window
    /// instead of opening a duplicate.
    pub fn show_window(&mut self, config: WindowConfig, now_ms: f64) -> WindowId {
        let before = self.windows.len();
        let id = self.windows.show(config);
        let created = self.windows.len() > before;

        if created && self.themes.theme().effects_enabled {
            self.fades.push((id, Fade::fade_in(now_ms)));
        }
        id
    }

    /// Remove a window; absent ids are a no-op
    pub fn remove_window(&mut self, id: WindowId, now_ms: f64) -> bool {
        let removed = self.windows.remove(id);
        if removed && self.themes.theme().effects_enabled {
            self.fades.push((id, Fade::fade_out(now_ms)));
        }
        removed
    }

    /// Promote a window to front-most and focus it
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        self.windows.bring_to_front(id)
    }

    /// Focus an open window by logical identifier, restoring it if minimized
    ///
    /// Returns whether a match was found; callers open a fresh window only
    /// on `false`.
    pub fn find_and_focus_window(&mut self, identifier: &str) -> bool {
        self.windows.find_and_focus(identifier)
    }

    /// Close the front-most window; returns whether one was closed
    ///
    /// A back-navigation gesture calls this first and falls through to the
    /// home level when it returns `false`.
    pub fn close_front_window(&mut self, now_ms: f64) -> bool {
        let front = self.windows.front().map(|w| w.id);
        let closed = self.windows.close_front();
        if closed && self.themes.theme().effects_enabled {
            if let Some(id) = front {
                self.fades.push((id, Fade::fade_out(now_ms)));
            }
        }
        closed
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: WindowId) {
        self.windows.minimize(id);
    }

    /// Open (or refocus) the singleton window for a folder record
    pub fn open_folder_window(&mut self, folder_id: &str, now_ms: f64) -> Option<WindowId> {
        let (identifier, title) = {
            let record = self.store.get(folder_id)?;
            (record.window_identifier(), record.display_name.clone())
        };

        if self.find_and_focus_window(&identifier) {
            return self.windows.get_by_identifier(&identifier).map(|w| w.id);
        }
        let config = WindowConfig::new(title).with_identifier(identifier);
        Some(self.show_window(config, now_ms))
    }

    /// Fades still running; `(window, fade)` pairs for the renderer
    #[inline]
    pub fn active_fades(&self) -> &[(WindowId, Fade)] {
        &self.fades
    }

    /// Drop fades that have finished by `now_ms`
    pub fn tick(&mut self, now_ms: f64) {
        self.fades.retain(|(_, fade)| !fade.is_complete(now_ms));
    }
}
