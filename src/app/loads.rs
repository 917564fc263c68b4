// SPDX-License-Identifier: MPL-2.0
//! Ordering of background file loads.
//!
//! Each load request gets a ticket when it is issued. Reads run concurrently
//! and may finish in any order, so finished batches wait here until every
//! earlier ticket has been applied.

use crate::gallery::SelectedFile;
use std::collections::BTreeMap;

/// Ticket identifying one load request, in issue order.
pub type LoadTicket = u64;

#[derive(Debug, Default)]
pub struct LoadQueue {
    next_ticket: LoadTicket,
    next_to_apply: LoadTicket,
    finished: BTreeMap<LoadTicket, Vec<SelectedFile>>,
}

impl LoadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next ticket. Call once per request, before the read starts.
    pub fn issue(&mut self) -> LoadTicket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    /// Records a finished request and returns the batches that are now ready,
    /// oldest first. Returns nothing while an earlier request is still running.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        files: Vec<SelectedFile>,
    ) -> Vec<Vec<SelectedFile>> {
        if ticket < self.next_to_apply || ticket >= self.next_ticket {
            tracing::warn!(ticket, "ignoring load result with unknown ticket");
            return Vec::new();
        }
        self.finished.insert(ticket, files);

        let mut ready = Vec::new();
        while let Some(files) = self.finished.remove(&self.next_to_apply) {
            ready.push(files);
            self.next_to_apply += 1;
        }
        if !self.finished.is_empty() {
            tracing::debug!(
                waiting = self.finished.len(),
                blocked_on = self.next_to_apply,
                "load results held back"
            );
        }
        ready
    }

    /// Requests issued but not yet applied.
    pub fn in_flight(&self) -> usize {
        (self.next_ticket - self.next_to_apply) as usize
    }
}
