//! Window transition effects
//!
//! Fades are pure timing state; renderers sample opacity with their own
//! clock. Whether a fade is produced at all depends on the active theme.

mod easing;
mod fade;

pub use easing::{ease_in_out, ease_out_cubic, linear};
pub use fade::{Fade, FadeDirection, FADE_DURATION_MS};
