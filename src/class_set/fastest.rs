//! Fastest splits and gap filling for reference lines

use crate::RaceResult;
use crate::types::TimeValue;
use serde::{Deserialize, Serialize};

/// Default split used to extrapolate past the last known time to an interior control.
pub const DEFAULT_INTERIOR_SPLIT_SECS: f64 = 180.0;

/// Default split used to extrapolate the finish.
pub const DEFAULT_FINISH_SPLIT_SECS: f64 = 60.0;

/// One entry in a fastest-splits table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct FastestSplit {
    pub name: String,
    pub class_name: String,
    /// Split time in seconds.
    pub split: f64,
}

/// Run of unusable times, bounded by the indexes of the usable times either side.
///
/// `end` equals the array length when the run reaches the end of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlankRange {
    pub start: usize,
    pub end: usize,
}

/// Runs of non-known times after index 0.
///
/// A run that reaches the end of the array is only reported if `include_end` is set.
pub(crate) fn blank_ranges(times: &[TimeValue], include_end: bool) -> Vec<BlankRange> {
    let mut ranges = Vec::new();
    let mut index = 1;
    while index < times.len() {
        if times[index].is_known() {
            index += 1;
            continue;
        }

        let mut end = index;
        while end < times.len() && !times[end].is_known() {
            end += 1;
        }
        if end < times.len() || include_end {
            ranges.push(BlankRange { start: index - 1, end });
        }
        index = end + 1;
    }
    ranges
}

/// Fill every gap in a cumulative-time array so it can be drawn as a line.
///
/// Interior gaps are interpolated linearly between the known times either
/// side. A gap running to the finish is extrapolated with default splits.
/// Index 0 is assumed to be known.
pub fn fill_blank_ranges(cum_times: &[TimeValue]) -> Vec<TimeValue> {
    let mut filled = cum_times.to_vec();
    let last_index = filled.len().saturating_sub(1);

    for range in blank_ranges(cum_times, true) {
        let before = filled[range.start].known().unwrap_or_default();
        if range.end < filled.len() {
            let after = filled[range.end].known().unwrap_or_default();
            let step = (after - before) / (range.end - range.start) as f64;
            for index in range.start + 1..range.end {
                filled[index] = TimeValue::Known(before + step * (index - range.start) as f64);
            }
        } else {
            let mut running = before;
            for index in range.start + 1..filled.len() {
                running += if index == last_index {
                    DEFAULT_FINISH_SPLIT_SECS
                } else {
                    DEFAULT_INTERIOR_SPLIT_SECS
                };
                filled[index] = TimeValue::Known(running);
            }
        }
    }
    filled
}

/// Fastest repaired split to each control `1..=num_controls + 1`.
///
/// Entry `i` is the split to control `i + 1`, or `Missing` if no result has a
/// known split there.
pub fn fastest_split_times<'a>(
    results: impl IntoIterator<Item = &'a RaceResult>,
    num_controls: usize,
) -> Vec<TimeValue> {
    let mut fastest = vec![TimeValue::Missing; num_controls + 1];
    for result in results {
        for (index, best) in fastest.iter_mut().enumerate() {
            if let Some(split) = result.split_time_to(index + 1).known() {
                if best.known().is_none_or(|current| split < current) {
                    *best = TimeValue::Known(split);
                }
            }
        }
    }
    fastest
}

/// Fill missing fastest splits from the results' own blank ranges.
///
/// For each run of controls nobody has a split to, the smallest gap in any
/// result's cumulative times that spans the run supplies its average split.
/// Returns `None` if some run is not spanned by any result.
pub(crate) fn fill_fastest_split_gaps<'a>(
    fastest_splits: &mut [TimeValue],
    results: impl Iterator<Item = &'a RaceResult> + Clone,
) -> Option<()> {
    // Work in cumulative indexes, where control `i` is index `i`.
    let mut indexed = Vec::with_capacity(fastest_splits.len() + 1);
    indexed.push(TimeValue::ZERO);
    indexed.extend_from_slice(fastest_splits);

    for gap in blank_ranges(&indexed, true) {
        // A result spans the run if it has known times at or before gap.start and
        // at or after the run's last control.
        let first_control = gap.start + 1;
        let last_control = gap.end - 1;

        let best = results
            .clone()
            .flat_map(|result| {
                let cum_times = result.all_cumulative_times();
                blank_ranges(cum_times, false)
                    .into_iter()
                    .filter(move |range| range.start < first_control && range.end >= last_control)
                    .filter_map(move |range| {
                        let size = range.end - range.start;
                        let overall = cum_times[range.end] - cum_times[range.start];
                        overall.known().map(|overall| (size, overall / size as f64))
                    })
            })
            .min_by(|(a_size, a_average), (b_size, b_average)| {
                a_size.cmp(b_size).then(a_average.total_cmp(b_average))
            });

        let (_, average_split) = best?;
        for control in first_control..=last_control {
            fastest_splits[control - 1] = TimeValue::Known(average_split);
        }
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{cum_result, known, split_result};
    use crate::types::times_from;

    #[test]
    fn test_blank_ranges() {
        let times = times_from(&[Some(0.0), Some(65.0), None, Some(f64::NAN), Some(470.0), None]);
        assert_eq!(blank_ranges(&times, false), vec![BlankRange { start: 1, end: 4 }]);
        assert_eq!(
            blank_ranges(&times, true),
            vec![BlankRange { start: 1, end: 4 }, BlankRange { start: 4, end: 6 }]
        );
        assert!(blank_ranges(&known(&[0.0, 1.0, 2.0]), true).is_empty());
    }

    #[test]
    fn test_fill_interpolates_interior_gaps() {
        let times = times_from(&[Some(0.0), Some(60.0), None, None, Some(240.0), Some(300.0)]);
        assert_eq!(fill_blank_ranges(&times), known(&[0.0, 60.0, 120.0, 180.0, 240.0, 300.0]));
    }

    #[test]
    fn test_fill_extrapolates_trailing_gap_with_defaults() {
        let times = times_from(&[Some(0.0), Some(60.0), None, None, None]);
        assert_eq!(fill_blank_ranges(&times), known(&[0.0, 60.0, 240.0, 420.0, 480.0]));

        let finish_only = times_from(&[Some(0.0), Some(60.0), None]);
        assert_eq!(fill_blank_ranges(&finish_only), known(&[0.0, 60.0, 120.0]));
    }

    #[test]
    fn test_fill_leaves_complete_times_alone() {
        let times = known(&[0.0, 65.0, 286.0]);
        assert_eq!(fill_blank_ranges(&times), times);
    }

    #[test]
    fn test_fastest_split_times_ignore_dubious_and_missing() {
        let results = vec![
            split_result(0, &[Some(65.0), Some(f64::NAN), None]),
            split_result(1, &[Some(81.0), Some(197.0), None]),
        ];
        assert_eq!(
            fastest_split_times(&results, 2),
            times_from(&[Some(65.0), Some(197.0), None])
        );
    }

    #[test]
    fn test_gap_filled_from_smallest_covering_range() {
        let results = vec![
            cum_result(0, &[Some(0.0), Some(65.0), None, Some(470.0), Some(570.0)]),
            cum_result(1, &[Some(0.0), None, None, Some(500.0), Some(600.0)]),
        ];
        let mut fastest = fastest_split_times(&results, 3);
        assert_eq!(fastest, times_from(&[Some(65.0), None, None, Some(100.0)]));

        fill_fastest_split_gaps(&mut fastest, results.iter()).unwrap();
        assert_eq!(fastest, known(&[65.0, 202.5, 202.5, 100.0]));
    }

    #[test]
    fn test_gap_without_covering_range_cannot_be_filled() {
        let results = vec![
            split_result(0, &[Some(65.0), None, Some(184.0), Some(100.0)]),
            split_result(1, &[Some(81.0), None, Some(212.0), Some(106.0)]),
        ];
        let mut fastest = fastest_split_times(&results, 3);
        assert!(fill_fastest_split_gaps(&mut fastest, results.iter()).is_none());
    }
}
