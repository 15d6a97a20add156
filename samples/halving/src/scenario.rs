//! The halving step and the scenarios built from it.
//!
//! Scenario A halves the starting value once and expects a present half.
//! Scenario B keeps halving that result and expects the chain to reach zero,
//! whose half is absent, within the configured number of steps.

use monadic::control::Maybe;
use thiserror::Error;

use crate::config::HalvingConfig;

/// Failures of the checked scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// The first halving produced no value.
    #[error("halving {start} produced no value")]
    UnexpectedAbsent {
        /// The starting value.
        start: i32,
    },
    /// The first halving produced the wrong value.
    #[error("halving {start} produced {actual}, expected {expected}")]
    WrongHalf {
        /// The starting value.
        start: i32,
        /// The exact half of `start`, rounded toward zero.
        expected: i32,
        /// The value the chain produced.
        actual: i32,
    },
    /// The chain still held a value after all steps.
    #[error("still present after {steps} more halvings: {value}")]
    StillPresent {
        /// The number of halvings applied.
        steps: usize,
        /// The value left in the chain.
        value: i32,
    },
}

/// Results of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Result of scenario A.
    pub first: Maybe<i32>,
    /// Result of scenario B.
    pub last: Maybe<i32>,
}

/// Halves `value`, which is only defined for non-zero input.
///
/// # Examples
///
/// ```rust
/// use halving::half;
/// use monadic::control::Maybe;
///
/// assert_eq!(half(20), Maybe::Present(10));
/// assert_eq!(half(1), Maybe::Present(0));
/// assert_eq!(half(0), Maybe::Absent);
/// ```
pub fn half(value: i32) -> Maybe<i32> {
    let result = if value == 0 {
        Maybe::Absent
    } else {
        Maybe::Present(value / 2)
    };
    tracing::debug!(input = value, output = %result, "half");
    result
}

/// Chains [`half`] onto `start` `steps` times.
pub fn halve_repeatedly(start: Maybe<i32>, steps: usize) -> Maybe<i32> {
    (0..steps).fold(start, |chain, _| chain | half)
}

/// Runs scenario A and then scenario B on its result.
///
/// # Errors
///
/// Returns a [`ScenarioError`] describing the first scenario whose result
/// does not match.
pub fn run(config: HalvingConfig) -> Result<ScenarioReport, ScenarioError> {
    let first = Maybe::Present(config.start) | half;
    check_first(config.start, first)?;
    tracing::info!(start = config.start, result = %first, "Test 1 passed");

    let last = halve_repeatedly(first, config.steps);
    check_last(config.steps, last)?;
    tracing::info!(steps = config.steps, result = %last, "Test 2 passed");

    Ok(ScenarioReport { first, last })
}

fn check_first(start: i32, first: Maybe<i32>) -> Result<(), ScenarioError> {
    match first {
        Maybe::Absent => Err(ScenarioError::UnexpectedAbsent { start }),
        Maybe::Present(actual) if actual != start / 2 => Err(ScenarioError::WrongHalf {
            start,
            expected: start / 2,
            actual,
        }),
        Maybe::Present(_) => Ok(()),
    }
}

const fn check_last(steps: usize, last: Maybe<i32>) -> Result<(), ScenarioError> {
    match last {
        Maybe::Absent => Ok(()),
        Maybe::Present(value) => Err(ScenarioError::StillPresent { steps, value }),
    }
}
