//! Termination and resource-limit checks evaluated once per driver
//! iteration.
//!
//! Single-threaded and synchronous by design: no suspension, no
//! cooperative yield points. A timeout is enforced by polling
//! `Instant::now()` at the top of each iteration rather than by spawning
//! a timer task.

use std::time::{Duration, Instant};

use crate::stats::Stats;

/// Why the driver stopped before reaching a definitive SAT/UNSAT answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Timeout,
    DecisionCapReached,
    NoProgress,
    IterationCapReached,
}

/// Tracks wall-clock and iteration budgets for one solve.
pub struct ResourceGuard {
    start: Instant,
    timeout: Option<Duration>,
    max_decisions: Option<u32>,
    /// Safety-net cap on driver iterations, independent of the
    /// caller-visible `max_decisions`: guards against an iteration that
    /// neither decides, propagates, nor backtracks due to an
    /// implementation bug slipping past the progress guard.
    iteration_cap: u64,
    iterations: u64,
}

impl ResourceGuard {
    pub fn new(timeout: Option<Duration>, max_decisions: Option<u32>) -> ResourceGuard {
        ResourceGuard {
            start: Instant::now(),
            timeout,
            max_decisions,
            iteration_cap: 50_000_000,
            iterations: 0,
        }
    }

    /// Called once at the top of every driver iteration. Returns `Some`
    /// with the reason to stop, or `None` to keep going.
    pub fn check(&mut self, stats: &Stats) -> Option<StopReason> {
        self.iterations += 1;
        if let Some(timeout) = self.timeout {
            if self.start.elapsed() >= timeout {
                return Some(StopReason::Timeout);
            }
        }
        if let Some(cap) = self.max_decisions {
            if stats.decisions >= cap as u64 {
                return Some(StopReason::DecisionCapReached);
            }
        }
        if self.iterations >= self.iteration_cap {
            return Some(StopReason::IterationCapReached);
        }
        None
    }
}

/// Detects livelock: if a full driver iteration backtracks zero times,
/// assigns zero new variables, and chooses zero new decisions, forward
/// progress is impossible and the search must stop. This is a defensive
/// invariant of the outer loop, not expected to fire on a correct
/// implementation against any reasonably sized instance.
pub struct ProgressGuard {
    last_stack_len: usize,
    last_decisions: u64,
    last_backtracks: u64,
}

impl ProgressGuard {
    pub fn new(stack_len: usize, stats: &Stats) -> ProgressGuard {
        ProgressGuard {
            last_stack_len: stack_len,
            last_decisions: stats.decisions,
            last_backtracks: stats.backtracks,
        }
    }

    /// Call at the end of an iteration; returns `true` if no progress was
    /// made relative to the snapshot taken at construction or the last
    /// `reset`.
    pub fn stalled(&self, stack_len: usize, stats: &Stats) -> bool {
        stack_len == self.last_stack_len
            && stats.decisions == self.last_decisions
            && stats.backtracks == self.last_backtracks
    }

    pub fn reset(&mut self, stack_len: usize, stats: &Stats) {
        self.last_stack_len = stack_len;
        self.last_decisions = stats.decisions;
        self.last_backtracks = stats.backtracks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_caps_never_stops() {
        let mut guard = ResourceGuard::new(None, None);
        let stats = Stats::default();
        assert_eq!(guard.check(&stats), None);
    }

    #[test]
    fn decision_cap_triggers_when_reached() {
        let mut guard = ResourceGuard::new(None, Some(3));
        let mut stats = Stats::default();
        stats.decisions = 3;
        assert_eq!(guard.check(&stats), Some(StopReason::DecisionCapReached));
    }

    #[test]
    fn progress_guard_detects_stall() {
        let stats = Stats::default();
        let guard = ProgressGuard::new(0, &stats);
        assert!(guard.stalled(0, &stats));
    }

    #[test]
    fn progress_guard_does_not_flag_a_changed_stack() {
        let stats = Stats::default();
        let guard = ProgressGuard::new(0, &stats);
        assert!(!guard.stalled(1, &stats));
    }
}
