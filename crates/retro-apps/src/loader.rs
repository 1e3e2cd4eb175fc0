//! Batched background icon loading
//!
//! Icon resolution for a whole desktop can involve slow asset decoding, so it
//! runs off the UI thread. The worker resolves packages in batches, checks a
//! shared cancel flag between batches, and sends each completed batch over a
//! channel. The UI thread drains the channel and commits results like any
//! other synchronous mutation; a cancelled load keeps every batch that was
//! already delivered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::icon_cache::{IconHandle, IconResolver};

/// Shared cooperative cancellation flag
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One resolved icon result
#[derive(Clone, Debug)]
pub struct LoadedIcon {
    pub package: String,
    /// `None` when resolution failed; the receiver substitutes a placeholder
    pub icon: Option<IconHandle>,
}

/// Resolve `packages` in batches, sending each batch over `results`
///
/// Returns `true` when every package was processed, `false` when the run was
/// cancelled between batches. Batches sent before cancellation stay sent.
pub fn load_icon_batches(
    packages: &[String],
    resolver: &mut dyn IconResolver,
    cancel: &CancelFlag,
    batch_size: usize,
    results: &Sender<Vec<LoadedIcon>>,
) -> bool {
    let batch_size = batch_size.max(1);

    for batch in packages.chunks(batch_size) {
        if cancel.is_cancelled() {
            log::debug!("icon load cancelled with {} packages remaining", batch.len());
            return false;
        }

        let loaded: Vec<LoadedIcon> = batch
            .iter()
            .map(|package| LoadedIcon {
                package: package.clone(),
                icon: resolver.resolve(package),
            })
            .collect();

        if results.send(loaded).is_err() {
            // Receiver dropped; treat like cancellation.
            return false;
        }
    }

    true
}
