use std::sync::atomic::{AtomicU64, Ordering};

/// Orders overlapping requests of one screen.
///
/// Each request takes a ticket before it starts; when it completes, its
/// response is applied only if no newer ticket was issued in the meantime.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
