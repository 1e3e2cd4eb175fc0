//! Icon resolution and the bounded image cache
//!
//! Icon bitmaps are decoded elsewhere; this module only moves shared
//! references around. The cache is read-through with least-recently-used
//! eviction under a byte budget. Eviction never invalidates a handle a
//! record already holds: handles are shared references, so an evicted
//! entry only costs a re-resolve on the next cache miss.

use std::collections::HashMap;
use std::sync::Arc;

/// Decoded icon bitmap, RGBA8
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl IconImage {
    /// Create an image from raw RGBA8 pixels
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Approximate heap footprint in bytes
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }
}

/// Shared opaque reference to a decoded icon
pub type IconHandle = Arc<IconImage>;

/// Resolves a package id to its icon bitmap
///
/// May fail (return `None`); callers substitute a theme placeholder.
pub trait IconResolver {
    fn resolve(&mut self, package: &str) -> Option<IconHandle>;
}

struct CacheEntry {
    handle: IconHandle,
    last_used: u64,
}

/// Bounded read-through icon cache with LRU eviction
pub struct IconCache {
    entries: HashMap<String, CacheEntry>,
    budget_bytes: usize,
    used_bytes: usize,
    clock: u64,
}

impl IconCache {
    /// Create a cache with an explicit byte budget
    pub fn with_budget(budget_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            budget_bytes,
            used_bytes: 0,
            clock: 0,
        }
    }

    /// Create a cache budgeted at one eighth of the given memory amount
    pub fn for_memory(available_bytes: usize) -> Self {
        Self::with_budget(available_bytes / 8)
    }

    /// Number of cached entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes currently held
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Check whether a package is cached
    #[inline]
    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    /// Fetch an icon, resolving and caching on miss
    pub fn get_or_resolve(
        &mut self,
        package: &str,
        resolver: &mut dyn IconResolver,
    ) -> Option<IconHandle> {
        self.clock += 1;

        if let Some(entry) = self.entries.get_mut(package) {
            entry.last_used = self.clock;
            return Some(entry.handle.clone());
        }

        let handle = match resolver.resolve(package) {
            Some(handle) => handle,
            None => {
                log::warn!("icon resolution failed for {}", package);
                return None;
            }
        };

        self.used_bytes += handle.byte_size();
        self.entries.insert(
            package.to_string(),
            CacheEntry {
                handle: handle.clone(),
                last_used: self.clock,
            },
        );
        self.evict_over_budget();

        Some(handle)
    }

    /// Drop a cached entry (e.g. after uninstall)
    pub fn invalidate(&mut self, package: &str) {
        if let Some(entry) = self.entries.remove(package) {
            self.used_bytes -= entry.handle.byte_size();
        }
    }

    fn evict_over_budget(&mut self) {
        while self.used_bytes > self.budget_bytes && self.entries.len() > 1 {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(package, _)| package.clone());
            match oldest {
                Some(package) => {
                    log::debug!("evicting icon {} from cache", package);
                    self.invalidate(&package);
                }
                None => break,
            }
        }
    }
}
