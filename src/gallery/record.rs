// SPDX-License-Identifier: MPL-2.0
//! Image records and their identifiers.

use super::file::FileInfo;
use super::handle::DisplayHandle;
use chrono::{DateTime, Utc};
use std::fmt;

/// Identifier of a record, unique within its gallery.
///
/// Shaped `"{file name}-{created ms}-{sequence}"`. The sequence comes from the
/// owning gallery and never repeats, so two same-named files picked in the
/// same millisecond still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub(crate) fn new(name: &str, created_at: DateTime<Utc>, sequence: u64) -> Self {
        Self(format!(
            "{}-{}-{}",
            name,
            created_at.timestamp_millis(),
            sequence
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selected file plus the display handle used to preview it.
#[derive(Debug)]
pub struct ImageRecord {
    id: RecordId,
    file: FileInfo,
    handle: DisplayHandle,
    created_at: DateTime<Utc>,
}

impl ImageRecord {
    pub(crate) fn new(
        id: RecordId,
        file: FileInfo,
        handle: DisplayHandle,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            file,
            handle,
            created_at,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn file(&self) -> &FileInfo {
        &self.file
    }

    pub fn handle(&self) -> &DisplayHandle {
        &self.handle
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_combines_name_time_and_sequence() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let id = RecordId::new("a.png", at, 7);
        assert_eq!(id.as_str(), "a.png-1700000000123-7");
        assert_eq!(id.to_string(), "a.png-1700000000123-7");
    }

    #[test]
    fn same_name_and_time_differ_by_sequence() {
        let at = Utc.timestamp_millis_opt(42).unwrap();
        assert_ne!(RecordId::new("a.png", at, 0), RecordId::new("a.png", at, 1));
    }
}
