//! Data repair: detecting impossible cumulative times
//!
//! Punching systems sometimes record the same time twice, or a time that
//! cannot be right because it is later than the time at the following control.
//! This module inspects each result's original cumulative times and builds the
//! repaired track, replacing suspect times with [`TimeValue::Dubious`]. The
//! original times are never modified.
//!
//! Three repairs are made, in order:
//!
//! 1. A cumulative time equal to the previous recorded one is dubious (the
//!    finish is exempt).
//! 2. While some pair of recorded times is not strictly ascending, times around
//!    the pair are made dubious until the next bad pair lies further along.
//!    Pairs ending at the finish are left alone.
//! 3. For a result that did not complete, a finish time far below the time at
//!    the last control is dubious.
//!
//! When repair is turned off, [`transfer_result_data`] copies the original track
//! unchanged so that the repaired track is always populated.

use crate::types::TimeValue;
use crate::{CourseClass, RaceResult, Result};
use tracing::{debug, trace};

/// Default margin below the last control's time at which a finish time is treated as absurd.
pub const DEFAULT_ABSURD_FINISH_MARGIN_SECS: f64 = 150.0 * 60.0;

/// Indexes of the first pair of recorded cumulative times that are not
/// strictly ascending, skipping missing and dubious times.
fn first_non_ascending_indexes(cum_times: &[TimeValue]) -> Option<(usize, usize)> {
    let mut last_known_index = 0;
    for (index, time) in cum_times.iter().enumerate().skip(1) {
        if let Some(time) = time.known() {
            let last_known = cum_times[last_known_index].known().unwrap_or_default();
            if time <= last_known {
                return Some((last_known_index, index));
            }
            last_known_index = index;
        }
    }
    None
}

/// Sets of indexes to try making dubious, in order of preference, to fix the
/// non-ascending pair `(first, second)`:
///
/// 1. the first of the pair
/// 2. the second of the pair
/// 3. both
/// 4. the run of recorded times ending at `first` that are all later than `second`
/// 5. the run of recorded times starting at `second` that are all earlier than `first`,
///    stopping before the finish
fn removal_candidates(cum_times: &[TimeValue], first: usize, second: usize) -> Vec<Vec<usize>> {
    let first_time = cum_times[first].known().unwrap_or_default();
    let second_time = cum_times[second].known().unwrap_or_default();

    let backward_run: Vec<usize> = (1..=first)
        .rev()
        .filter(|&index| cum_times[index].is_known())
        .take_while(|&index| cum_times[index].known().is_some_and(|time| time > second_time))
        .collect();

    let forward_run: Vec<usize> = (second..cum_times.len() - 1)
        .filter(|&index| cum_times[index].is_known())
        .take_while(|&index| cum_times[index].known().is_some_and(|time| time <= first_time))
        .collect();

    vec![vec![first], vec![second], vec![first, second], backward_run, forward_run]
}

/// Repairs the results of one class at a time, recording whether it changed anything.
#[derive(Debug, Clone)]
pub struct Repairer {
    absurd_finish_margin: f64,
    made_any_changes: bool,
}

impl Default for Repairer {
    fn default() -> Self {
        Self::new(DEFAULT_ABSURD_FINISH_MARGIN_SECS)
    }
}

impl Repairer {
    pub fn new(absurd_finish_margin: f64) -> Self {
        Self { absurd_finish_margin, made_any_changes: false }
    }

    fn mark_dubious(&mut self, cum_times: &mut [TimeValue], index: usize, reason: &'static str) {
        trace!(index, ?reason, "Marking cumulative time as dubious");
        cum_times[index] = TimeValue::Dubious;
        self.made_any_changes = true;
    }

    fn remove_cumulative_times_equal_to_previous(&mut self, cum_times: &mut [TimeValue]) {
        let mut last_time = cum_times[0];
        for index in 1..cum_times.len() - 1 {
            let time = cum_times[index];
            if time.is_known() {
                if time == last_time {
                    self.mark_dubious(cum_times, index, "equal to previous");
                } else {
                    last_time = time;
                }
            }
        }
    }

    fn remove_cumulative_times_causing_negative_splits(&mut self, cum_times: &mut Vec<TimeValue>) {
        let mut non_ascending = first_non_ascending_indexes(cum_times);
        while let Some((first, second)) = non_ascending {
            if second + 1 >= cum_times.len() {
                break;
            }

            let mut progress = None;
            for removals in removal_candidates(cum_times, first, second) {
                if removals.is_empty() || removals.contains(&0) {
                    continue;
                }
                let mut adjusted = cum_times.clone();
                for &index in &removals {
                    adjusted[index] = TimeValue::Dubious;
                }
                let next = first_non_ascending_indexes(&adjusted);
                if next.is_none_or(|(next_first, _)| next_first > first) {
                    progress = Some((adjusted, next, removals));
                    break;
                }
            }

            match progress {
                Some((adjusted, next, removals)) => {
                    trace!(?removals, "Removed cumulative times causing negative splits");
                    *cum_times = adjusted;
                    self.made_any_changes = true;
                    non_ascending = next;
                }
                None => break,
            }
        }
    }

    fn remove_finish_time_if_absurd(&mut self, cum_times: &mut [TimeValue]) {
        let finish_index = cum_times.len() - 1;
        if let (Some(finish), Some(last_control)) =
            (cum_times[finish_index].known(), cum_times[finish_index - 1].known())
        {
            if finish <= last_control - self.absurd_finish_margin {
                self.mark_dubious(cum_times, finish_index, "absurd finish time");
            }
        }
    }

    /// Build and store the repaired track for one result.
    pub fn repair_result(&mut self, result: &mut RaceResult) -> Result<()> {
        let mut cum_times = result.all_original_cumulative_times().to_vec();

        self.remove_cumulative_times_equal_to_previous(&mut cum_times);
        self.remove_cumulative_times_causing_negative_splits(&mut cum_times);
        if !result.completed() {
            self.remove_finish_time_if_absurd(&mut cum_times);
        }

        result.set_repaired_cumulative_times(cum_times)
    }

    /// Repair every result in a class, flagging the class if anything changed.
    pub fn repair_class(&mut self, class: &mut CourseClass) -> Result<()> {
        self.made_any_changes = false;
        for result in class.results_mut() {
            self.repair_result(result)?;
        }

        if self.made_any_changes {
            debug!(class = %class.name(), "Data repair changed times in class");
            class.record_has_dubious_data();
        }
        Ok(())
    }
}

/// Repair every class of an event with the default settings.
pub fn repair_event_data(classes: &mut [CourseClass]) -> Result<()> {
    repair_event_data_with(classes, &mut Repairer::default())
}

/// Repair every class of an event with the given repairer.
pub fn repair_event_data_with(classes: &mut [CourseClass], repairer: &mut Repairer) -> Result<()> {
    for class in classes.iter_mut() {
        repairer.repair_class(class)?;
    }
    debug!(
        classes = classes.len(),
        dubious_classes = classes.iter().filter(|class| class.has_dubious_data()).count(),
        "Data repair complete"
    );
    Ok(())
}

/// Copy every original track to the repaired track unchanged.
pub fn transfer_result_data(classes: &mut [CourseClass]) -> Result<()> {
    for class in classes.iter_mut() {
        for result in class.results_mut() {
            let cum_times = result.all_original_cumulative_times().to_vec();
            result.set_repaired_cumulative_times(cum_times)?;
        }
    }
    debug!(classes = classes.len(), "Transferred original times without repair");
    Ok(())
}
