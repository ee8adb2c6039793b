//! Comparisons of a result against reference times and other results

use super::{DubiousRange, RaceResult};
use crate::types::TimeValue;
use crate::{Result, SplitsError};

impl RaceResult {
    fn check_reference(&self, reference_cum_times: &[TimeValue]) -> Result<()> {
        if reference_cum_times.len() != self.cum_times.len() {
            return Err(SplitsError::invalid_data(format!(
                "Cannot adjust cumulative times of length {} to reference times of length {}",
                self.cum_times.len(),
                reference_cum_times.len()
            )));
        }
        if reference_cum_times.iter().any(|time| time.is_missing()) {
            return Err(SplitsError::invalid_data(
                "Cannot adjust cumulative times to reference times containing a missing time",
            ));
        }
        Ok(())
    }

    /// Repaired cumulative times minus the reference cumulative times.
    ///
    /// Missing times stay missing and dubious times stay dubious.
    pub fn cum_times_adjusted_to_reference(
        &self,
        reference_cum_times: &[TimeValue],
    ) -> Result<Vec<TimeValue>> {
        self.check_reference(reference_cum_times)?;
        Ok(self
            .cum_times
            .iter()
            .zip(reference_cum_times)
            .map(|(time, reference)| *time - *reference)
            .collect())
    }

    /// As [`Self::cum_times_adjusted_to_reference`], with the start time added
    /// to every value. All values are missing if the start time is unknown.
    pub fn cum_times_adjusted_to_reference_with_start_added(
        &self,
        reference_cum_times: &[TimeValue],
    ) -> Result<Vec<TimeValue>> {
        let start = TimeValue::from(self.start_time);
        Ok(self
            .cum_times_adjusted_to_reference(reference_cum_times)?
            .into_iter()
            .map(|adjusted| adjusted + start)
            .collect())
    }

    /// Percentage by which each split is slower than the reference split.
    ///
    /// The start is always zero. A split is missing if either of its
    /// cumulative times is missing, or the reference split is not positive.
    pub fn split_percents_behind_reference_cum_times(
        &self,
        reference_cum_times: &[TimeValue],
    ) -> Result<Vec<TimeValue>> {
        self.check_reference(reference_cum_times)?;

        let mut percents_behind = Vec::with_capacity(reference_cum_times.len());
        percents_behind.push(TimeValue::ZERO);
        for index in 1..reference_cum_times.len() {
            let split = self.cum_times[index] - self.cum_times[index - 1];
            let reference_split = reference_cum_times[index] - reference_cum_times[index - 1];
            let percent = match (split, reference_split) {
                (TimeValue::Missing, _) => TimeValue::Missing,
                (_, TimeValue::Known(reference)) if reference > 0.0 => {
                    split.map(|split| 100.0 * (split - reference) / reference)
                }
                _ => TimeValue::Missing,
            };
            percents_behind.push(percent);
        }
        Ok(percents_behind)
    }

    /// Whether this result and `other` overtake each other at some point.
    ///
    /// Compares clock times (start time plus cumulative time) at every control
    /// where both have a usable time. Results without a known start time never cross.
    pub fn crosses(&self, other: &RaceResult) -> Result<bool> {
        if self.cum_times.len() != other.cum_times.len() {
            return Err(SplitsError::invalid_data(
                "Cannot determine if two results with different numbers of controls have crossed",
            ));
        }

        let (Some(own_start), Some(other_start)) = (self.start_time, other.start_time) else {
            return Ok(false);
        };

        let mut before_other = false;
        let mut after_other = false;
        for (own, theirs) in self.cum_times.iter().zip(&other.cum_times) {
            if let (Some(own), Some(theirs)) = (own.known(), theirs.known()) {
                let own_clock = own_start + own;
                let other_clock = other_start + theirs;
                if own_clock < other_clock {
                    before_other = true;
                } else if own_clock > other_clock {
                    after_other = true;
                }
            }
        }
        Ok(before_other && after_other)
    }

    /// Ranges around runs of dubious repaired cumulative times.
    pub fn control_indexes_around_omitted_cumulative_times(&self) -> Vec<DubiousRange> {
        indexes_around_omitted_times(&self.cum_times)
    }

    /// Ranges around runs of dubious repaired split times.
    pub fn control_indexes_around_omitted_split_times(&self) -> Vec<DubiousRange> {
        let mut times = Vec::with_capacity(self.split_times.len() + 1);
        times.push(TimeValue::ZERO);
        times.extend_from_slice(&self.split_times);
        indexes_around_omitted_times(&times)
    }
}

/// Runs of dubious values that have a non-missing value immediately either side.
fn indexes_around_omitted_times(times: &[TimeValue]) -> Vec<DubiousRange> {
    let mut ranges = Vec::new();
    let mut start_index = 1;
    while start_index + 1 < times.len() {
        if times[start_index].is_dubious() {
            let mut end_index = start_index;
            while end_index + 1 < times.len() && times[end_index + 1].is_dubious() {
                end_index += 1;
            }

            if end_index + 1 < times.len()
                && !times[start_index - 1].is_missing()
                && !times[end_index + 1].is_missing()
            {
                ranges.push(DubiousRange { start: start_index - 1, end: end_index + 1 });
            }

            start_index = end_index + 1;
        } else {
            start_index += 1;
        }
    }
    ranges
}
