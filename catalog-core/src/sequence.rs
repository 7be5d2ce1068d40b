//! Ordering of overlapping fetches.

/// Identifies the request a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub const fn number(self) -> u64 {
        self.0
    }
}

/// Which response wins when fetches overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued request is applied.
    #[default]
    LatestRequest,
    /// Whichever response resolves last is applied, even if it answers an
    /// older request.
    LastResponse,
}

/// Monotonic ticket issuer for one kind of fetch.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    pub fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    #[must_use]
    pub const fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Whether a response carrying `ticket` should be applied.
    #[must_use]
    pub const fn accepts(&self, ticket: LoadTicket, ordering: ResponseOrdering) -> bool {
        match ordering {
            ResponseOrdering::LatestRequest => self.is_latest(ticket),
            ResponseOrdering::LastResponse => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_accepted_by_default() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(first < second);
        assert!(!seq.accepts(first, ResponseOrdering::default()));
        assert!(seq.accepts(second, ResponseOrdering::default()));
    }

    #[test]
    fn legacy_ordering_accepts_everything() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let _ = seq.issue();
        assert!(seq.accepts(first, ResponseOrdering::LastResponse));
    }
}
