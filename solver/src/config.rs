//! Solver configuration.
//!
//! `SolverConfig` is the single knob-carrying value threaded through a
//! solve; a library caller constructs one directly, while the CLI builds
//! one from parsed flags via [`SolverConfig::cli_default`] plus overrides.

use std::time::Duration;

use crate::heuristics::Strategy;

/// Default RNG seed, used whenever a caller doesn't supply one.
pub const DEFAULT_SEED: u32 = 0xC0FF_EE42;

/// Library default timeout: unset, meaning no cap.
const LIBRARY_TIMEOUT: Option<Duration> = None;
/// Library default decision cap: unset, meaning no cap.
const LIBRARY_MAX_DECISIONS: Option<u32> = None;

/// CLI default timeout, applied when the user passes `0` (meaning "use
/// the default cap") or omits `-t` entirely.
pub const CLI_DEFAULT_TIMEOUT_SECS: u64 = 5;
/// CLI default decision cap, applied under the same conditions.
pub const CLI_DEFAULT_MAX_DECISIONS: u32 = 1000;

/// All tunable behavior of one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub enable_propagation: bool,
    pub enable_pure_literal: bool,
    pub enable_restarts: bool,
    pub restart_threshold: u32,
    pub timeout: Option<Duration>,
    pub max_decisions: Option<u32>,
    pub rng_seed: u32,
}

impl SolverConfig {
    /// Library defaults: every optimization on, no restarts, no resource
    /// cap, Jeroslow-Wang branching — the heuristic most likely to finish
    /// fastest on an arbitrary instance, which is what a library caller
    /// who hasn't expressed a preference should get.
    pub fn default() -> SolverConfig {
        SolverConfig {
            strategy: Strategy::JeroslowWang,
            enable_propagation: true,
            enable_pure_literal: true,
            enable_restarts: false,
            restart_threshold: 128,
            timeout: LIBRARY_TIMEOUT,
            max_decisions: LIBRARY_MAX_DECISIONS,
            rng_seed: DEFAULT_SEED,
        }
    }

    /// CLI defaults: same engine toggles, but a 5-second timeout, a
    /// 1000-decision cap, and first-unassigned branching, matching the
    /// documented default divergence between the library and the command
    /// line.
    pub fn cli_default() -> SolverConfig {
        SolverConfig {
            strategy: Strategy::First,
            timeout: Some(Duration::from_secs(CLI_DEFAULT_TIMEOUT_SECS)),
            max_decisions: Some(CLI_DEFAULT_MAX_DECISIONS),
            ..SolverConfig::default()
        }
    }

    /// Interprets a CLI `-t` value. `0` means **unlimited** — translated
    /// to `None` — rather than silently aliasing to the default cap; this
    /// resolves the ambiguity left open about what a zero resource limit
    /// should mean, in favor of the reading that matches what `0` means
    /// for every other numeric CLI flag in this tool.
    pub fn timeout_from_cli_secs(secs: u64) -> Option<Duration> {
        if secs == 0 {
            None
        } else {
            Some(Duration::from_secs(secs))
        }
    }

    /// Interprets a CLI `-d` value under the same zero-means-unlimited rule.
    pub fn max_decisions_from_cli(n: u32) -> Option<u32> {
        if n == 0 {
            None
        } else {
            Some(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_default_has_no_resource_caps() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.timeout, None);
        assert_eq!(cfg.max_decisions, None);
        assert_eq!(cfg.strategy, Strategy::JeroslowWang);
    }

    #[test]
    fn cli_default_diverges_in_strategy_and_caps() {
        let cfg = SolverConfig::cli_default();
        assert_eq!(cfg.strategy, Strategy::First);
        assert_eq!(cfg.max_decisions, Some(1000));
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_means_unlimited() {
        assert_eq!(SolverConfig::timeout_from_cli_secs(0), None);
        assert_eq!(
            SolverConfig::timeout_from_cli_secs(30),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn zero_decisions_means_unlimited() {
        assert_eq!(SolverConfig::max_decisions_from_cli(0), None);
        assert_eq!(SolverConfig::max_decisions_from_cli(50), Some(50));
    }
}
