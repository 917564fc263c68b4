// SPDX-License-Identifier: MPL-2.0
//! Display handles for locally previewed images.
//!
//! A [`DisplayHandle`] wraps the `iced` image handle built from a file's bytes.
//! It is deliberately not `Clone`: the record that owns it is the only holder,
//! and dropping it is the release. Every creation and release is counted in a
//! shared [`HandleLedger`], so "released exactly once" can be checked at any
//! time by comparing the two counters.

use iced::widget::image;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Process-wide tally of display handles.
#[derive(Debug, Default)]
pub struct HandleLedger {
    created: AtomicUsize,
    released: AtomicUsize,
}

impl HandleLedger {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }

    /// Handles created but not yet released.
    pub fn outstanding(&self) -> usize {
        self.created().saturating_sub(self.released())
    }
}

/// Owned, releasable reference to an image's pixels for rendering.
pub struct DisplayHandle {
    image: image::Handle,
    ledger: Arc<HandleLedger>,
}

impl DisplayHandle {
    /// Creates a handle from encoded image bytes. Decoding is left to the
    /// renderer, which caches by handle id.
    pub fn create(bytes: Vec<u8>, ledger: &Arc<HandleLedger>) -> Self {
        ledger.created.fetch_add(1, Ordering::Relaxed);
        let image = image::Handle::from_bytes(bytes);
        tracing::trace!(id = ?image.id(), "display handle created");
        Self {
            image,
            ledger: Arc::clone(ledger),
        }
    }

    /// The renderer-facing handle. Cloning it for a widget is a reference
    /// bump, not a new display handle.
    pub fn image(&self) -> &image::Handle {
        &self.image
    }
}

impl Drop for DisplayHandle {
    fn drop(&mut self) {
        self.ledger.released.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(id = ?self.image.id(), "display handle released");
    }
}

impl fmt::Debug for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayHandle")
            .field("id", &self.image.id())
            .finish()
    }
}
