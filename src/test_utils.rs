//! Test utilities for building results and classes
//!
//! These builders keep unit tests, integration tests and benchmarks terse.
//! Times are given as `Option<f64>` seconds, with `None` for a missed punch.

#![cfg(any(test, feature = "benchmark"))]

use crate::types::{Competitor, TimeValue, times_from};
use crate::{CourseClass, RaceResult};

/// Competitor named after the result's input position.
pub fn competitor(order: usize) -> Competitor {
    Competitor::new(format!("Competitor {order}"), "TST")
}

/// Wrap plain seconds as known time values.
pub fn known(seconds: &[f64]) -> Vec<TimeValue> {
    seconds.iter().copied().map(TimeValue::Known).collect()
}

/// Build a result from split times with no start time.
pub fn split_result(order: usize, splits: &[Option<f64>]) -> RaceResult {
    split_result_with_start(order, None, splits)
}

/// Build a result from split times and a start time.
///
/// # Panics
///
/// Panics if `splits` is empty.
pub fn split_result_with_start(
    order: usize,
    start_time: Option<f64>,
    splits: &[Option<f64>],
) -> RaceResult {
    RaceResult::from_split_times(order, start_time, competitor(order), times_from(splits))
        .expect("split times fixture must not be empty")
}

/// Build a named result from split times and a start time.
///
/// # Panics
///
/// Panics if `splits` is empty.
pub fn named_split_result(
    order: usize,
    name: &str,
    start_time: Option<f64>,
    splits: &[Option<f64>],
) -> RaceResult {
    let competitor = Competitor::new(name, "TST");
    RaceResult::from_split_times(order, start_time, competitor, times_from(splits))
        .expect("split times fixture must not be empty")
}

/// Build a result from cumulative times with no start time.
///
/// # Panics
///
/// Panics if `cum_times` does not start with zero or has fewer than two entries.
pub fn cum_result(order: usize, cum_times: &[Option<f64>]) -> RaceResult {
    RaceResult::from_cumulative_times(order, None, competitor(order), times_from(cum_times))
        .expect("cumulative times fixture must start at zero")
}

/// Build a class whose control count is taken from the first result.
///
/// # Panics
///
/// Panics if `results` is empty.
pub fn class_of(name: &str, results: Vec<RaceResult>) -> CourseClass {
    let num_controls = results
        .first()
        .map(RaceResult::num_controls)
        .expect("class fixture needs results");
    CourseClass::new(name, num_controls, results)
}

/// A synthetic class of `num_results` finishers over `num_controls` controls,
/// with varied but deterministic splits. Used by the benchmarks.
pub fn synthetic_class(num_results: usize, num_controls: usize) -> CourseClass {
    let results = (0..num_results)
        .map(|order| {
            let splits: Vec<Option<f64>> = (0..=num_controls)
                .map(|control| Some(60.0 + ((order * 37 + control * 53) % 240) as f64))
                .collect();
            split_result_with_start(order, Some(36000.0 + 60.0 * order as f64), &splits)
        })
        .collect();
    CourseClass::new("Synthetic", num_controls, results)
}
