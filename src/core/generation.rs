use std::sync::atomic::{
    AtomicU64,
    Ordering,
};

/// Hands out increasing tickets so a view can tell whether the response it is
/// holding still belongs to the latest chapter/translation selection.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    current: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation; every earlier ticket becomes stale.
    pub fn next(&self) -> FetchTicket {
        FetchTicket(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Arc,
        time::Duration,
    };

    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let generation = FetchGeneration::new();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[tokio::test]
    async fn test_late_response_is_discarded() {
        let generation = Arc::new(FetchGeneration::new());

        let slow = {
            let generation = generation.clone();
            let ticket = generation.next();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(30)).await;
                generation.is_current(ticket)
            })
        };
        let fast = {
            let generation = generation.clone();
            let ticket = generation.next();
            tokio::spawn(async move { generation.is_current(ticket) })
        };

        assert!(fast.await.unwrap());
        assert!(!slow.await.unwrap());
    }
}
