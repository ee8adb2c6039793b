//! A competitor's or team's timing record.
//!
//! Every [`RaceResult`] carries two parallel time tracks:
//!
//! - the **original** cumulative and split times, exactly as supplied by the parser
//! - the **repaired** times, which start out equal to the originals and are replaced
//!   wholesale by the data repair pass (see [`crate::repair`])
//!
//! Index 0 of every cumulative-time array is the start (always zero) and the last
//! index is the finish. Split time `i` is the time taken to reach control `i`
//! from the previous control, so split arrays are one shorter than cumulative ones.
//!
//! ```rust
//! use splitscope::{Competitor, RaceResult, TimeValue};
//!
//! let splits = vec![TimeValue::Known(65.0), TimeValue::Known(221.0), TimeValue::Known(184.0)];
//! let fred = Competitor::new("Fred", "ABC");
//! let result = RaceResult::from_split_times(0, Some(36000.0), fred, splits)?;
//!
//! assert_eq!(result.cumulative_time_to(2), TimeValue::Known(286.0));
//! assert_eq!(result.total_time(), Some(470.0));
//! assert!(result.completed());
//! # Ok::<(), splitscope::SplitsError>(())
//! ```

mod reference;
mod team;
mod time_loss;

use crate::types::{Owner, ResultStatus, StatusFlags, TimeValue, classify_status};
use crate::{Result, SplitsError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Range of control indexes bracketing one or more dubious times.
///
/// `start` and `end` are the indexes of the nearest usable times either side of
/// the dubious run, so the chart layer can draw the segment between them specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct DubiousRange {
    pub start: usize,
    pub end: usize,
}

/// Timing record for one competitor or relay team.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    order: usize,
    start_time: Option<f64>,
    owner: Owner,
    flags: StatusFlags,
    original_cum_times: Vec<TimeValue>,
    original_split_times: Vec<TimeValue>,
    cum_times: Vec<TimeValue>,
    split_times: Vec<TimeValue>,
    repaired: bool,
    total_time: Option<f64>,
    time_losses: Option<Vec<TimeValue>>,
    legs: Vec<RaceResult>,
}

fn split_times_from_cum_times(cum_times: &[TimeValue]) -> Vec<TimeValue> {
    cum_times.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

fn cum_times_from_split_times(split_times: &[TimeValue]) -> Vec<TimeValue> {
    let mut cum_times = Vec::with_capacity(split_times.len() + 1);
    cum_times.push(TimeValue::ZERO);
    for split in split_times {
        let previous = cum_times[cum_times.len() - 1];
        cum_times.push(previous + *split);
    }
    cum_times
}

fn total_time_of(cum_times: &[TimeValue]) -> Option<f64> {
    if cum_times.iter().all(|time| time.is_known()) {
        cum_times.last().and_then(|time| time.known())
    } else {
        None
    }
}

impl RaceResult {
    /// Create a result from split times.
    ///
    /// A missing split makes every later cumulative time missing too.
    pub fn from_split_times(
        order: usize,
        start_time: Option<f64>,
        owner: impl Into<Owner>,
        split_times: Vec<TimeValue>,
    ) -> Result<Self> {
        if split_times.is_empty() {
            return Err(SplitsError::invalid_data("Array of split times must not be empty"));
        }
        let cum_times = cum_times_from_split_times(&split_times);
        Ok(Self::build(order, start_time, owner.into(), cum_times, split_times))
    }

    /// Create a result from cumulative times, which must start with a zero.
    pub fn from_cumulative_times(
        order: usize,
        start_time: Option<f64>,
        owner: impl Into<Owner>,
        cum_times: Vec<TimeValue>,
    ) -> Result<Self> {
        if cum_times.is_empty() {
            return Err(SplitsError::invalid_data("Array of cumulative times must not be empty"));
        }
        if cum_times[0] != TimeValue::ZERO {
            return Err(SplitsError::invalid_data(format!(
                "Cumulative time array must start with a zero time, got {:?}",
                cum_times[0]
            )));
        }
        if cum_times.len() == 1 {
            return Err(SplitsError::invalid_data(
                "Cumulative time array must have more than one element",
            ));
        }
        let split_times = split_times_from_cum_times(&cum_times);
        Ok(Self::build(order, start_time, owner.into(), cum_times, split_times))
    }

    fn build(
        order: usize,
        start_time: Option<f64>,
        owner: Owner,
        cum_times: Vec<TimeValue>,
        split_times: Vec<TimeValue>,
    ) -> Self {
        let total_time = total_time_of(&cum_times);
        Self {
            order,
            start_time,
            owner,
            flags: StatusFlags::default(),
            original_cum_times: cum_times.clone(),
            original_split_times: split_times.clone(),
            cum_times,
            split_times,
            repaired: false,
            total_time,
            time_losses: None,
            legs: Vec::new(),
        }
    }

    /// Position in the input list, used as a stable tie-break.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Start time in seconds since midnight, if known.
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn name(&self) -> &str {
        self.owner.name()
    }

    pub fn is_team(&self) -> bool {
        self.owner.is_team()
    }

    /// Leg results of a team result; empty for individual results.
    pub fn legs(&self) -> &[RaceResult] {
        &self.legs
    }

    /// Number of controls, excluding start and finish.
    pub fn num_controls(&self) -> usize {
        self.original_cum_times.len() - 2
    }

    /// Total time, or `None` if any original time is missing.
    pub fn total_time(&self) -> Option<f64> {
        self.total_time
    }

    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    pub fn status(&self) -> ResultStatus {
        classify_status(self.flags, self.total_time.is_some())
    }

    pub fn set_non_competitive(&mut self) {
        self.flags.non_competitive = true;
    }

    pub fn set_non_starter(&mut self) {
        self.flags.non_starter = true;
    }

    pub fn set_non_finisher(&mut self) {
        self.flags.non_finisher = true;
    }

    pub fn disqualify(&mut self) {
        self.flags.disqualified = true;
    }

    pub fn set_over_max_time(&mut self) {
        self.flags.over_max_time = true;
    }

    /// Mark the result as OK even though some times are missing.
    ///
    /// The total time is then taken from the original finish time, so that the
    /// result can still be ranked.
    pub fn set_ok_despite_missing_times(&mut self) {
        self.flags.ok_despite_missing_times = true;
        self.total_time = self.original_cum_times.last().and_then(|time| time.known());
    }

    pub fn is_non_competitive(&self) -> bool {
        self.flags.non_competitive
    }

    pub fn is_non_starter(&self) -> bool {
        self.flags.non_starter
    }

    pub fn is_non_finisher(&self) -> bool {
        self.flags.non_finisher
    }

    pub fn is_disqualified(&self) -> bool {
        self.flags.disqualified
    }

    pub fn is_over_max_time(&self) -> bool {
        self.flags.over_max_time
    }

    pub fn is_ok_despite_missing_times(&self) -> bool {
        self.flags.ok_despite_missing_times
    }

    /// Whether the result has a total time and was neither disqualified nor over max time.
    pub fn completed(&self) -> bool {
        self.total_time.is_some() && !self.flags.disqualified && !self.flags.over_max_time
    }

    /// Whether any time other than the start was recorded.
    pub fn has_any_times(&self) -> bool {
        self.original_cum_times[1..].iter().any(|time| !time.is_missing())
    }

    /// Repaired split time to the given control; zero at the start.
    pub fn split_time_to(&self, control_index: usize) -> TimeValue {
        if control_index == 0 {
            TimeValue::ZERO
        } else {
            self.split_times.get(control_index - 1).copied().unwrap_or_default()
        }
    }

    /// Original split time to the given control; always missing for non-starters.
    pub fn original_split_time_to(&self, control_index: usize) -> TimeValue {
        if self.flags.non_starter {
            TimeValue::Missing
        } else if control_index == 0 {
            TimeValue::ZERO
        } else {
            self.original_split_times.get(control_index - 1).copied().unwrap_or_default()
        }
    }

    /// Repaired cumulative time to the given control.
    pub fn cumulative_time_to(&self, control_index: usize) -> TimeValue {
        self.cum_times.get(control_index).copied().unwrap_or_default()
    }

    /// Original cumulative time to the given control; always missing for non-starters.
    pub fn original_cumulative_time_to(&self, control_index: usize) -> TimeValue {
        if self.flags.non_starter {
            TimeValue::Missing
        } else {
            self.original_cum_times.get(control_index).copied().unwrap_or_default()
        }
    }

    /// Whether repair changed the split time to the given control.
    pub fn is_split_time_dubious(&self, control_index: usize) -> bool {
        control_index > 0
            && self.original_split_times.get(control_index - 1)
                != self.split_times.get(control_index - 1)
    }

    /// Whether repair changed the cumulative time to the given control.
    pub fn is_cumulative_time_dubious(&self, control_index: usize) -> bool {
        control_index > 0
            && self.original_cum_times.get(control_index) != self.cum_times.get(control_index)
    }

    pub fn all_cumulative_times(&self) -> &[TimeValue] {
        &self.cum_times
    }

    pub fn all_original_cumulative_times(&self) -> &[TimeValue] {
        &self.original_cum_times
    }

    pub fn split_times(&self) -> &[TimeValue] {
        &self.split_times
    }

    pub fn original_split_times(&self) -> &[TimeValue] {
        &self.original_split_times
    }

    /// Whether a repair or transfer pass has set the repaired track.
    pub fn has_repaired_times(&self) -> bool {
        self.repaired
    }

    /// Replace the repaired track.
    ///
    /// Only the data repair pass calls this; the original track is never touched.
    pub(crate) fn set_repaired_cumulative_times(
        &mut self,
        cum_times: Vec<TimeValue>,
    ) -> Result<()> {
        if cum_times.len() != self.original_cum_times.len() {
            return Err(SplitsError::invalid_data(format!(
                "Repaired cumulative times have length {} but the original times have length {}",
                cum_times.len(),
                self.original_cum_times.len()
            )));
        }
        self.split_times = split_times_from_cum_times(&cum_times);
        self.cum_times = cum_times;
        self.repaired = true;
        Ok(())
    }
}

/// Order results for ranking.
///
/// Disqualified results go after everything else. Otherwise lower total time
/// first, results without a total time last, and ties broken by input order.
pub fn compare_results(a: &RaceResult, b: &RaceResult) -> Ordering {
    if a.flags.disqualified != b.flags.disqualified {
        return if a.flags.disqualified { Ordering::Greater } else { Ordering::Less };
    }

    match (a.total_time, b.total_time) {
        (Some(a_time), Some(b_time)) if a_time != b_time => {
            a_time.partial_cmp(&b_time).unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => a.order.cmp(&b.order),
    }
}
