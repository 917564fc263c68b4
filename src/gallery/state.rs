// SPDX-License-Identifier: MPL-2.0
//! The gallery: an ordered list of image records and the one being viewed.

use super::file::SelectedFile;
use super::handle::{DisplayHandle, HandleLedger};
use super::record::{ImageRecord, RecordId};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Owns every record and, through them, every display handle.
///
/// Insertion order is display order. `viewed` only ever names a record that
/// is in `records`.
pub struct Gallery {
    records: Vec<ImageRecord>,
    viewed: Option<RecordId>,
    ledger: Arc<HandleLedger>,
    next_sequence: u64,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_ledger(HandleLedger::new())
    }
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gallery that reports handle activity to `ledger`.
    #[must_use]
    pub fn with_ledger(ledger: Arc<HandleLedger>) -> Self {
        Self {
            records: Vec::new(),
            viewed: None,
            ledger,
            next_sequence: 0,
        }
    }

    /// Appends one record per file, in the given order, and returns how many
    /// were added. An empty selection changes nothing.
    pub fn select<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let before = self.records.len();
        for file in files {
            let created_at = Utc::now();
            let id = RecordId::new(file.name(), created_at, self.next_sequence);
            self.next_sequence += 1;

            let (info, bytes) = file.into_parts();
            let handle = DisplayHandle::create(bytes, &self.ledger);
            tracing::debug!(%id, size = info.size_bytes, mime = %info.mime_type, "image selected");
            self.records.push(ImageRecord::new(id, info, handle, created_at));
        }
        self.records.len() - before
    }

    /// Removes the record and releases its handle. Clears the viewed
    /// reference if it pointed here. Returns `false` when `id` is unknown.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        if self.viewed.as_ref() == Some(id) {
            self.viewed = None;
        }
        let record = self.records.remove(index);
        let held_ms = (Utc::now() - record.created_at()).num_milliseconds();
        tracing::debug!(id = %record.id(), held_ms, "image removed");
        true
    }

    /// Shows the record in the viewer. Unknown ids leave the state untouched.
    pub fn view(&mut self, id: &RecordId) -> bool {
        if self.position(id).is_none() {
            tracing::debug!(%id, "view requested for unknown image");
            return false;
        }
        self.viewed = Some(id.clone());
        true
    }

    pub fn close_viewer(&mut self) {
        self.viewed = None;
    }

    /// Releases every handle still held and empties the gallery.
    ///
    /// Calling it again is harmless: there is nothing left to release.
    pub fn teardown(&mut self) {
        self.viewed = None;
        let count = self.records.len();
        self.records.clear();
        if count > 0 {
            tracing::debug!(count, "gallery torn down");
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// The record currently shown in the viewer, if any.
    pub fn viewed(&self) -> Option<&ImageRecord> {
        self.viewed.as_ref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ledger(&self) -> &Arc<HandleLedger> {
        &self.ledger
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl fmt::Debug for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("records", &self.records.len())
            .field("viewed", &self.viewed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn png(name: &str, size: usize) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![0; size])
    }

    fn names(gallery: &Gallery) -> Vec<String> {
        gallery
            .records()
            .iter()
            .map(|record| record.file().name.clone())
            .collect()
    }

    #[test]
    fn select_single_file_adds_one_record() {
        let mut gallery = Gallery::new();
        let added = gallery.select([png("a.png", 2048)]);

        assert_eq!(added, 1);
        assert_eq!(gallery.len(), 1);
        assert!(!gallery.is_empty());
        let record = &gallery.records()[0];
        assert_eq!(record.file().name, "a.png");
        assert_eq!(record.file().size_bytes, 2048);
        assert_eq!(record.file().mime_type, "image/png");
        assert_eq!(gallery.ledger().created(), 1);
    }

    #[test]
    fn select_nothing_changes_nothing() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.select(Vec::new()), 0);
        assert!(gallery.is_empty());
        assert_eq!(gallery.ledger().created(), 0);
    }

    #[test]
    fn select_preserves_call_and_batch_order() {
        let mut gallery = Gallery::new();
        gallery.select([png("c.png", 1), png("a.png", 1)]);
        gallery.select(Vec::new());
        gallery.select([png("b.png", 1)]);
        gallery.select([png("e.png", 1), png("d.png", 1), png("f.png", 1)]);

        assert_eq!(gallery.len(), 6);
        assert_eq!(
            names(&gallery),
            vec!["c.png", "a.png", "b.png", "e.png", "d.png", "f.png"]
        );
    }

    #[test]
    fn record_id_carries_its_creation_time() {
        let mut gallery = Gallery::new();
        let before = Utc::now();
        gallery.select(vec![png("a.png", 1)]);
        let after = Utc::now();

        let record = &gallery.records()[0];
        assert!(record.created_at() >= before && record.created_at() <= after);
        let expected = format!("a.png-{}-0", record.created_at().timestamp_millis());
        assert_eq!(record.id().as_str(), expected);
    }

    #[test]
    fn same_named_files_get_distinct_ids() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1), png("a.png", 1)]);
        gallery.select([png("a.png", 1)]);

        let ids: HashSet<_> = gallery.records().iter().map(|r| r.id().clone()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn remove_present_id_shrinks_by_one() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1), png("b.png", 1)]);
        let id = gallery.records()[0].id().clone();

        assert!(gallery.remove(&id));
        assert_eq!(gallery.len(), 1);
        assert_eq!(names(&gallery), vec!["b.png"]);
        assert!(gallery.get(&id).is_none());
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1)]);
        let id = gallery.records()[0].id().clone();
        gallery.remove(&id);

        assert!(!gallery.remove(&id));
        assert_eq!(gallery.len(), 0);
        assert_eq!(gallery.ledger().released(), 1);
    }

    #[test]
    fn remove_releases_the_handle() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1), png("b.png", 1)]);
        let id = gallery.records()[1].id().clone();

        gallery.remove(&id);
        assert_eq!(gallery.ledger().created(), 2);
        assert_eq!(gallery.ledger().released(), 1);
        assert_eq!(gallery.ledger().outstanding(), gallery.len());
    }

    #[test]
    fn view_sets_viewed_record() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 2048)]);
        let id = gallery.records()[0].id().clone();

        assert!(gallery.view(&id));
        let viewed = gallery.viewed().expect("viewed record");
        assert_eq!(viewed.file().name, "a.png");
        assert_eq!(viewed.file().size_label(), "2.00 KB");
        assert_eq!(viewed.file().mime_type, "image/png");
    }

    #[test]
    fn view_unknown_id_keeps_state() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1)]);
        let id = gallery.records()[0].id().clone();
        gallery.view(&id);
        let mut other = Gallery::new();
        other.select([png("z.png", 1)]);
        let foreign = other.records()[0].id().clone();

        assert!(!gallery.view(&foreign));
        assert_eq!(gallery.viewed().map(|r| r.id()), Some(&id));
    }

    #[test]
    fn removing_viewed_record_clears_viewer() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1), png("b.png", 1)]);
        let id = gallery.records()[0].id().clone();
        gallery.view(&id);

        gallery.remove(&id);
        assert!(gallery.viewed().is_none());
    }

    #[test]
    fn removing_other_record_keeps_viewer() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1), png("b.png", 1)]);
        let viewed = gallery.records()[0].id().clone();
        let other = gallery.records()[1].id().clone();
        gallery.view(&viewed);

        gallery.remove(&other);
        assert_eq!(gallery.viewed().map(|r| r.id()), Some(&viewed));
    }

    #[test]
    fn close_viewer_clears_reference_only() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1)]);
        let id = gallery.records()[0].id().clone();
        gallery.view(&id);

        gallery.close_viewer();
        assert!(gallery.viewed().is_none());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn teardown_releases_everything_once() {
        let mut gallery = Gallery::new();
        gallery.select([png("a.png", 1), png("b.png", 1), png("c.png", 1)]);
        let first = gallery.records()[0].id().clone();
        gallery.remove(&first);
        let remaining = gallery.records()[0].id().clone();
        gallery.view(&remaining);

        gallery.teardown();
        gallery.teardown();

        let ledger = gallery.ledger();
        assert!(gallery.is_empty());
        assert!(gallery.viewed().is_none());
        assert_eq!(ledger.created(), 3);
        assert_eq!(ledger.released(), 3);
    }

    #[test]
    fn dropping_the_gallery_releases_remaining_handles() {
        let ledger = HandleLedger::new();
        {
            let mut gallery = Gallery::with_ledger(Arc::clone(&ledger));
            gallery.select([png("a.png", 1), png("b.png", 1)]);
            assert_eq!(ledger.outstanding(), 2);
        }
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.released(), 2);
    }

    #[test]
    fn handles_outstanding_always_match_list_length() {
        let mut gallery = Gallery::new();
        let mut step = 0u8;
        for round in 0..20 {
            step = step.wrapping_mul(31).wrapping_add(17);
            if step % 3 == 0 && !gallery.is_empty() {
                let idx = usize::from(step) % gallery.len();
                let id = gallery.records()[idx].id().clone();
                gallery.remove(&id);
            } else {
                let batch = usize::from(step % 4);
                gallery.select((0..batch).map(|i| png(&format!("{round}-{i}.png"), i)));
            }
            assert_eq!(gallery.ledger().outstanding(), gallery.len());
        }
    }
}
