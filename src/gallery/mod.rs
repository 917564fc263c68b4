// SPDX-License-Identifier: MPL-2.0
//! Local image gallery: records, display handles and their lifecycle.
//!
//! Nothing here touches the UI toolkit beyond the image handle type; the
//! widget in [`crate::ui::gallery`] renders a [`Gallery`] and forwards user
//! actions to it.
//!
//! # Lifecycle
//!
//! - [`Gallery::select`] creates one [`DisplayHandle`] per accepted file.
//! - [`Gallery::remove`] drops the record, which releases its handle.
//! - [`Gallery::teardown`] (or dropping the gallery) releases the rest.
//!
//! The [`HandleLedger`] shared by a gallery's handles counts both sides.

pub mod file;
pub mod handle;
pub mod record;
mod state;

pub use file::{FileInfo, SelectedFile};
pub use handle::{DisplayHandle, HandleLedger};
pub use record::{ImageRecord, RecordId};
pub use state::Gallery;
