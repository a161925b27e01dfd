use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::algorithm::search::SearchModule;
use crate::model::network::Node;
use crate::model::unit::Cost;

/// default number of settled nodes between wall clock reads, since
/// reading the clock at every settle is measurable on large searches
const DEFAULT_CHECK_FREQUENCY: u64 = 1024;

/// ends a search once its wall clock allowance runs out. the clock
/// starts at construction, so a module instance serves exactly one
/// request.
pub struct DeadlineModule {
    started: Instant,
    limit: Duration,
    frequency: u64,
    settles: AtomicU64,
}

impl DeadlineModule {
    pub fn new(limit: Duration) -> DeadlineModule {
        DeadlineModule {
            started: Instant::now(),
            limit,
            frequency: DEFAULT_CHECK_FREQUENCY,
            settles: AtomicU64::new(0),
        }
    }

    pub fn with_frequency(limit: Duration, frequency: u64) -> DeadlineModule {
        DeadlineModule {
            started: Instant::now(),
            limit,
            frequency: frequency.max(1),
            settles: AtomicU64::new(0),
        }
    }
}

impl SearchModule for DeadlineModule {
    fn should_abort(&self, _settled: &Node, _cost: Cost) -> bool {
        let count = self.settles.fetch_add(1, Ordering::Relaxed);
        if count % self.frequency == 0 {
            self.started.elapsed() > self.limit
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::Node;

    #[test]
    fn test_expired_deadline_aborts() {
        let module = DeadlineModule::with_frequency(Duration::ZERO, 1);
        let node = Node::new(0, 0.0, 0.0);
        std::thread::sleep(Duration::from_millis(2));
        assert!(module.should_abort(&node, Cost::ZERO));
    }

    #[test]
    fn test_open_deadline_does_not_abort() {
        let module = DeadlineModule::with_frequency(Duration::from_secs(3600), 1);
        let node = Node::new(0, 0.0, 0.0);
        for _ in 0..100 {
            assert!(!module.should_abort(&node, Cost::ZERO));
        }
    }

    #[test]
    fn test_frequency_gates_the_clock_read() {
        let module = DeadlineModule::with_frequency(Duration::ZERO, 4);
        let node = Node::new(0, 0.0, 0.0);
        std::thread::sleep(Duration::from_millis(2));
        // settle counter starts at zero, so the first call reads the clock
        assert!(module.should_abort(&node, Cost::ZERO));
        assert!(!module.should_abort(&node, Cost::ZERO));
        assert!(!module.should_abort(&node, Cost::ZERO));
        assert!(!module.should_abort(&node, Cost::ZERO));
        assert!(module.should_abort(&node, Cost::ZERO));
    }
}
