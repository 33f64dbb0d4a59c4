//! Single-slot holder for the latest result batch, fenced by request generation.

use api::ResultBatch;

/// Identifies one issued request. Only the most recently issued ticket may
/// replace the stored batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    issued: u64,
    loaded: Option<u64>,
    batch: ResultBatch,
}

impl ResultStore {
    /// Issue a ticket for a new request. Every earlier ticket becomes stale.
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket {
            generation: self.issued,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.issued
    }

    /// Swap in `batch` if `ticket` is current. A stale ticket leaves the store as is.
    pub fn accept(&mut self, ticket: RequestTicket, batch: ResultBatch) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.batch = batch;
        self.loaded = Some(ticket.generation);
        true
    }

    pub fn batch(&self) -> &ResultBatch {
        &self.batch
    }

    /// Whether any request has delivered a batch (possibly empty).
    pub fn has_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn loaded_generation(&self) -> Option<u64> {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::OptimizationResult;

    fn batch_named(id: &str) -> ResultBatch {
        vec![OptimizationResult {
            traffic_light_id: id.to_string(),
            ..OptimizationResult::default()
        }]
    }

    #[test]
    fn latest_ticket_wins_regardless_of_completion_order() {
        let mut store = ResultStore::default();
        let first = store.issue();
        let second = store.issue();

        assert!(store.accept(second, batch_named("second")));
        assert!(!store.accept(first, batch_named("first")));
        assert_eq!(store.batch()[0].traffic_light_id, "second");
        assert_eq!(store.loaded_generation(), Some(second.generation()));
    }

    #[test]
    fn replacement_is_whole_batch() {
        let mut store = ResultStore::default();
        let ticket = store.issue();
        store.accept(ticket, batch_named("a"));
        let ticket = store.issue();
        store.accept(ticket, Vec::new());
        assert!(store.batch().is_empty());
        assert!(store.has_loaded());
    }
}
