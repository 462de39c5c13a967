use std::sync::atomic::{AtomicU64, Ordering};

/// Generation number handed out when a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Last-request-wins bookkeeping for searches that may overlap.
///
/// Each new search takes a [`Ticket`]; only the holder of the newest ticket
/// may publish its results.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[test]
    fn test_newer_ticket_supersedes() {
        let session = SearchSession::new();
        let first = session.begin();
        assert!(session.is_current(first));

        let second = session.begin();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[tokio::test]
    async fn test_slow_superseded_result_is_dropped() {
        let session = Arc::new(SearchSession::new());
        let shown: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let spawn = |label: &'static str, delay_ms: u64| {
            let ticket = session.begin();
            let session = Arc::clone(&session);
            let shown = Arc::clone(&shown);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                if session.is_current(ticket) {
                    shown.lock().unwrap().push(label);
                }
            })
        };

        let slow = spawn("old", 80);
        let fast = spawn("new", 5);
        fast.await.unwrap();
        slow.await.unwrap();

        assert_eq!(*shown.lock().unwrap(), vec!["new"]);
    }
}
