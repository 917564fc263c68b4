// SPDX-License-Identifier: MPL-2.0
//! `ayush_hub` is the AYUSH startup portal landing page, built with the Iced
//! GUI framework.
//!
//! Besides the static page it hosts an image gallery: local images are picked
//! or dropped, previewed in a grid, viewed enlarged in a modal and removed.
//! Each preview owns one display handle, released exactly once.

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;
