// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Grid**: Thumbnail grid layout
//! - **Upload**: Hints shown by the upload control

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of thumbnails per grid row.
pub const DEFAULT_GRID_COLUMNS: u32 = 4;

/// Minimum thumbnails per row.
pub const MIN_GRID_COLUMNS: u32 = 1;

/// Maximum thumbnails per row.
pub const MAX_GRID_COLUMNS: u32 = 8;

/// Default edge length of a square thumbnail, in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 160.0;

/// Smallest thumbnail edge.
pub const MIN_THUMBNAIL_SIZE: f32 = 80.0;

/// Largest thumbnail edge.
pub const MAX_THUMBNAIL_SIZE: f32 = 320.0;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// File size shown in the upload hint. Advisory only: nothing enforces it.
pub const DEFAULT_ADVISORY_MAX_FILE_MB: u32 = 10;

const _: () = {
    assert!(MIN_GRID_COLUMNS <= DEFAULT_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    assert!(MIN_THUMBNAIL_SIZE <= DEFAULT_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};
