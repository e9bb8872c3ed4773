//! Limit-testing harness: grow n until construction fails or gets too slow.

use std::time::Duration;

use sl_core::timing::Timer;
use sl_core::{Family, SlResult, StarParams};
use sl_labeling::construct;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct LimitsConfig {
    pub family: Family,
    pub start: u32,
    pub step: u32,
    pub m: Option<u32>,
    pub budget: Duration,
    pub max_n: u32,
}

/// Why the sweep stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// Construction at `n` returned an error.
    Failed { n: u32, error: String },
    /// Construction at `n` succeeded but took longer than the budget.
    TooSlow { n: u32, seconds: f64 },
    /// The next n would exceed `max_n`.
    ReachedMax,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LimitsOutcome {
    /// Largest n that finished within budget, with its time in seconds.
    pub largest: Option<(u32, f64)>,
    pub attempts: u32,
    pub stop: StopReason,
}

/// Run the sweep. Only an invalid starting configuration is an error; every
/// later failure ends the sweep and is reported in the outcome.
pub fn run_limits(config: &LimitsConfig) -> SlResult<LimitsOutcome> {
    // Validate the first point up front so a bad family/m combination is
    // reported as a usage error rather than as a limit.
    StarParams::new(config.family, config.start, config.m, None)?;

    let step = config.step.max(1);
    let budget = config.budget.as_secs_f64();
    let mut largest = None;
    let mut attempts = 0;
    let mut n = config.start;

    let stop = loop {
        if n > config.max_n {
            break StopReason::ReachedMax;
        }
        attempts += 1;

        let timer = Timer::start("limits");
        let result = StarParams::new(config.family, n, config.m, None)
            .map_err(sl_labeling::LabelingError::from)
            .and_then(|params| construct(&params));
        let seconds = timer.stop();

        match result {
            Ok(_) if seconds > budget => {
                warn!(n, seconds, "construction exceeded the time budget");
                break StopReason::TooSlow { n, seconds };
            }
            Ok(_) => {
                debug!(n, seconds, "construction succeeded");
                largest = Some((n, seconds));
            }
            Err(err) => {
                warn!(n, error = %err, infeasible = err.is_infeasible(), "construction failed");
                break StopReason::Failed {
                    n,
                    error: err.to_string(),
                };
            }
        }

        match n.checked_add(step) {
            Some(next) => n = next,
            None => break StopReason::ReachedMax,
        }
    };

    info!(?largest, attempts, "limit sweep finished");
    Ok(LimitsOutcome {
        largest,
        attempts,
        stop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(family: Family, start: u32, m: Option<u32>, max_n: u32) -> LimitsConfig {
        LimitsConfig {
            family,
            start,
            step: 1,
            m,
            budget: Duration::from_secs(60),
            max_n,
        }
    }

    #[test]
    fn closed_form_sweep_reaches_max() {
        let outcome = run_limits(&config(Family::AmalgamatedThree, 1, None, 20)).unwrap();
        assert_eq!(outcome.stop, StopReason::ReachedMax);
        assert_eq!(outcome.attempts, 20);
        assert_eq!(outcome.largest.map(|(n, _)| n), Some(20));
    }

    #[test]
    fn tiny_budget_stops_immediately() {
        let mut cfg = config(Family::Snowflake, 3, None, 50);
        cfg.budget = Duration::from_nanos(1);
        let outcome = run_limits(&cfg).unwrap();
        assert_eq!(outcome.attempts, 1);
        assert!(outcome.largest.is_none());
        assert!(matches!(outcome.stop, StopReason::TooSlow { n: 3, .. }));
    }

    #[test]
    fn invalid_start_is_an_error() {
        assert!(run_limits(&config(Family::Snowflake, 2, None, 10)).is_err());
        assert!(run_limits(&config(Family::Amalgamated, 1, Some(3), 10)).is_err());
    }

    #[test]
    fn greedy_sweep_ends_in_success_or_failure() {
        let outcome = run_limits(&config(Family::Amalgamated, 2, Some(2), 30)).unwrap();
        match outcome.stop {
            StopReason::Failed { n, .. } => assert!(n >= 2),
            StopReason::ReachedMax => assert_eq!(outcome.largest.map(|(n, _)| n), Some(30)),
            StopReason::TooSlow { .. } => panic!("sixty seconds is plenty"),
        }
    }
}
