// ============================================================================
// REQUEST TRACKER - drops superseded and late responses
// ============================================================================
// Every async call takes a ticket for its key before it starts. Issuing a new
// ticket for the same key supersedes the old one; closing the tracker (on
// unmount) invalidates everything still in flight.
// ============================================================================

use std::collections::HashMap;

use crate::models::ProposalId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowOp {
    Edit,
    Delete,
    Review,
    Restore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKey {
    Fetch,
    Row { id: ProposalId, op: RowOp },
}

impl RequestKey {
    pub fn row(id: ProposalId, op: RowOp) -> Self {
        RequestKey::Row { id, op }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestTracker {
    next: u64,
    live: HashMap<RequestKey, Ticket>,
    closed: bool,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, key: RequestKey) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.live.insert(key, ticket);
        ticket
    }

    /// True when `ticket` is still the latest for `key`. Consumes it either way.
    pub fn settle(&mut self, key: RequestKey, ticket: Ticket) -> bool {
        if self.closed {
            return false;
        }
        match self.live.get(&key) {
            Some(current) if *current == ticket => {
                self.live.remove(&key);
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.live.clear();
    }

    /// Accept tickets again after `close`. Anything issued before stays dead.
    pub fn reopen(&mut self) {
        self.closed = false;
    }

    pub fn in_flight(&self) -> usize {
        self.live.len()
    }
}
