//! Class sets: one or more classes compared together
//!
//! A [`CourseClassSet`] merges the starters of classes that share a control
//! sequence, sorts them with [`compare_results`] and ranks them at every
//! control. Ranks live in the set, so several sets built over the same
//! classes never interfere with each other.
//!
//! ```rust
//! use splitscope::{Competitor, CourseClass, CourseClassSet, RaceResult, TimeValue};
//!
//! let splits = |times: &[f64]| times.iter().copied().map(TimeValue::Known).collect::<Vec<_>>();
//! let fred = Competitor::new("Fred", "ABC");
//! let john = Competitor::new("John", "DEF");
//! let fred_splits = splits(&[65.0, 221.0, 184.0, 100.0]);
//! let john_splits = splits(&[81.0, 197.0, 212.0, 106.0]);
//! let fred = RaceResult::from_split_times(0, Some(36000.0), fred, fred_splits)?;
//! let john = RaceResult::from_split_times(1, Some(37800.0), john, john_splits)?;
//! let class = CourseClass::new("M21", 3, vec![fred, john]);
//!
//! let set = CourseClassSet::new([&class])?;
//! assert_eq!(set.result(0).map(|result| result.name().to_string()), Some("Fred".to_string()));
//! assert_eq!(
//!     set.get_fastest_cum_times(),
//!     Some(splits(&[0.0, 65.0, 262.0, 446.0, 546.0]))
//! );
//! # Ok::<(), splitscope::SplitsError>(())
//! ```

mod chart;
mod fastest;
mod ranks;

pub use chart::{ChartData, ChartType, DataColumn, DEFAULT_Y_EXTENT};
pub use fastest::{
    DEFAULT_FINISH_SPLIT_SECS, DEFAULT_INTERIOR_SPLIT_SECS, FastestSplit, fastest_split_times,
    fill_blank_ranges,
};

use crate::result::{DubiousRange, compare_results};
use crate::types::TimeValue;
use crate::{CourseClass, RaceResult, Result, SplitsError};
use chart::{extent, non_degenerate, reference_seconds};
use fastest::fill_fastest_split_gaps;
use ranks::{Ranks, compute_ranks};
use std::ops::Deref;
use tracing::debug;

/// A result seen through a class set, with the ranks the set computed for it.
#[derive(Debug, Clone, Copy)]
pub struct RankedResult<'s> {
    result: &'s RaceResult,
    class_name: &'s str,
    ranks: &'s Ranks,
}

impl<'s> RankedResult<'s> {
    pub fn result(&self) -> &'s RaceResult {
        self.result
    }

    /// Name of the class the result came from.
    pub fn class_name(&self) -> &'s str {
        self.class_name
    }

    /// Rank on the split to the given control; `None` at the start or if the split is unusable.
    pub fn split_rank_to(&self, control_index: usize) -> Option<u32> {
        control_index
            .checked_sub(1)
            .and_then(|index| self.ranks.split.get(index).copied().flatten())
    }

    /// Rank on cumulative time at the given control.
    pub fn cumulative_rank_to(&self, control_index: usize) -> Option<u32> {
        control_index
            .checked_sub(1)
            .and_then(|index| self.ranks.cumulative.get(index).copied().flatten())
    }
}

impl Deref for RankedResult<'_> {
    type Target = RaceResult;

    fn deref(&self) -> &RaceResult {
        self.result
    }
}

/// Results of one or more classes with the same number of controls, sorted and ranked.
#[derive(Debug, Clone)]
pub struct CourseClassSet<'a> {
    classes: Vec<&'a CourseClass>,
    results: Vec<(&'a RaceResult, &'a str)>,
    num_controls: Option<usize>,
    ranks: Vec<Ranks>,
}

impl<'a> CourseClassSet<'a> {
    /// Merge the starters of the given classes, then sort and rank them.
    ///
    /// Fails if the classes, or any of their results, disagree on the number of controls.
    pub fn new(classes: impl IntoIterator<Item = &'a CourseClass>) -> Result<Self> {
        let classes: Vec<&'a CourseClass> = classes.into_iter().collect();
        let num_controls = classes.first().map(|class| class.num_controls());

        let mut results = Vec::new();
        for class in classes.iter().copied() {
            if Some(class.num_controls()) != num_controls {
                return Err(SplitsError::invalid_data(format!(
                    "Cannot create a class set from classes with different numbers of controls: \
                     class '{}' has {} controls, expected {}",
                    class.name(),
                    class.num_controls(),
                    num_controls.unwrap_or_default()
                )));
            }
            for result in class.results().iter().filter(|result| !result.is_non_starter()) {
                if result.num_controls() != class.num_controls() {
                    return Err(SplitsError::invalid_data(format!(
                        "Result '{}' has {} controls but class '{}' has {}",
                        result.name(),
                        result.num_controls(),
                        class.name(),
                        class.num_controls()
                    )));
                }
                results.push((result, class.name()));
            }
        }

        results.sort_by(|(a, _), (b, _)| compare_results(a, b));

        let ranks = match num_controls {
            Some(num_controls) if !results.is_empty() => {
                let sorted: Vec<&RaceResult> = results.iter().map(|(result, _)| *result).collect();
                compute_ranks(&sorted, num_controls)
            }
            _ => Vec::new(),
        };

        debug!(
            classes = classes.len(),
            results = results.len(),
            num_controls = num_controls.unwrap_or_default(),
            "Built class set"
        );

        Ok(Self { classes, results, num_controls, ranks })
    }

    pub fn classes(&self) -> &[&'a CourseClass] {
        &self.classes
    }

    /// Whether the set has no starters at all.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Number of controls shared by every class, `None` for a set of no classes.
    pub fn num_controls(&self) -> Option<usize> {
        self.num_controls
    }

    /// Whether data repair changed times in any member class.
    pub fn has_dubious_data(&self) -> bool {
        self.classes.iter().any(|class| class.has_dubious_data())
    }

    /// Whether any member class holds team results.
    pub fn has_team_data(&self) -> bool {
        self.classes.iter().any(|class| class.is_team_class())
    }

    /// The result at the given position in ranking order.
    pub fn result(&self, index: usize) -> Option<RankedResult<'_>> {
        let (result, class_name) = *self.results.get(index)?;
        Some(RankedResult { result, class_name, ranks: self.ranks.get(index)? })
    }

    /// Every result in ranking order.
    pub fn results(&self) -> impl Iterator<Item = RankedResult<'_>> + '_ {
        (0..self.results.len()).filter_map(|index| self.result(index))
    }

    fn raw_results(&self) -> impl Iterator<Item = &'a RaceResult> + Clone + '_ {
        self.results.iter().map(|(result, _)| *result)
    }

    fn checked_result(&self, index: usize) -> Result<RankedResult<'_>> {
        self.result(index).ok_or_else(|| {
            SplitsError::invalid_data(format!(
                "Result index {} is out of range for a class set of {} results",
                index,
                self.results.len()
            ))
        })
    }

    /// Cumulative times of the winner with gaps filled, or `None` if the
    /// first-ranked result did not complete.
    pub fn get_winner_cum_times(&self) -> Option<Vec<TimeValue>> {
        let (winner, _) = self.results.first()?;
        winner.completed().then(|| fill_blank_ranges(winner.all_cumulative_times()))
    }

    /// Cumulative times of the given result with gaps filled.
    pub fn get_cumulative_times_for_result(&self, index: usize) -> Result<Vec<TimeValue>> {
        let result = self.checked_result(index)?;
        Ok(fill_blank_ranges(result.all_cumulative_times()))
    }

    /// Cumulative times of the fastest split to every control.
    pub fn get_fastest_cum_times(&self) -> Option<Vec<TimeValue>> {
        self.get_fastest_cum_times_plus_percentage(0.0)
    }

    /// Cumulative times of the fastest split to every control, each split
    /// made `percent` per cent slower.
    ///
    /// Controls nobody has a usable split to are filled from the results'
    /// surrounding times. Returns `None` for an empty set, or if such a gap
    /// cannot be filled.
    pub fn get_fastest_cum_times_plus_percentage(&self, percent: f64) -> Option<Vec<TimeValue>> {
        let num_controls = self.num_controls.filter(|_| !self.is_empty())?;

        let mut fastest_splits = fastest_split_times(self.raw_results(), num_controls);
        if fastest_splits.iter().any(|split| !split.is_known()) {
            fill_fastest_split_gaps(&mut fastest_splits, self.raw_results())?;
        }

        let ratio = 1.0 + percent / 100.0;
        let mut cum_times = Vec::with_capacity(fastest_splits.len() + 1);
        cum_times.push(TimeValue::ZERO);
        for split in fastest_splits {
            let previous = cum_times[cum_times.len() - 1];
            cum_times.push(previous + split.map(|split| split * ratio));
        }
        Some(cum_times)
    }

    /// The `num_splits` fastest splits to a control among completed results,
    /// fastest first, ties broken by total time.
    pub fn get_fastest_splits_to(
        &self,
        num_splits: usize,
        control_index: usize,
    ) -> Result<Vec<FastestSplit>> {
        if num_splits == 0 {
            return Err(SplitsError::invalid_data("Number of splits to return must be positive"));
        }
        let finish_index = self.num_controls.unwrap_or_default() + 1;
        if !(1..=finish_index).contains(&control_index) {
            return Err(SplitsError::invalid_data(format!(
                "Control index {control_index} must be between 1 and {finish_index}"
            )));
        }

        let mut splits: Vec<(&RaceResult, &str, f64)> = self
            .results
            .iter()
            .filter(|(result, _)| result.completed())
            .filter_map(|(result, class_name)| {
                let split = result.split_time_to(control_index).known()?;
                Some((*result, *class_name, split))
            })
            .collect();

        splits.sort_by(|(a, _, a_split), (b, _, b_split)| {
            let a_total = a.total_time().unwrap_or(f64::INFINITY);
            let b_total = b.total_time().unwrap_or(f64::INFINITY);
            a_split.total_cmp(b_split).then_with(|| a_total.total_cmp(&b_total))
        });

        Ok(splits
            .into_iter()
            .take(num_splits)
            .map(|(result, class_name, split)| FastestSplit {
                name: result.name().to_string(),
                class_name: class_name.to_string(),
                split,
            })
            .collect())
    }

    /// Series for the selected results, plotted against the reference cumulative times.
    ///
    /// `current_indexes` are positions in ranking order.
    pub fn get_chart_data(
        &self,
        reference_cum_times: &[TimeValue],
        current_indexes: &[usize],
        chart_type: ChartType,
    ) -> Result<ChartData> {
        let reference = reference_seconds(reference_cum_times)?;
        let skip = chart_type.min_viewable_control();

        let selected: Vec<RankedResult<'_>> =
            current_indexes.iter().map(|index| self.checked_result(*index)).collect::<Result<_>>()?;

        let mut series = Vec::with_capacity(selected.len());
        for result in &selected {
            let data = chart_type.data_selector(result, reference_cum_times)?;
            series.push(data.into_iter().skip(skip).collect::<Vec<_>>());
        }

        let x_extent = reference
            .iter()
            .fold(None, |extent: Option<[f64; 2]>, x| match extent {
                None => Some([*x, *x]),
                Some([min, max]) => Some([min.min(*x), max.max(*x)]),
            })
            .unwrap_or_default();

        let y_extent = if series.is_empty() {
            match self.result(0) {
                Some(first) => {
                    let first_series = chart_type.data_selector(&first, reference_cum_times)?;
                    extent(first_series.iter().skip(skip))
                }
                None => None,
            }
        } else {
            extent(series.iter().flatten())
        };
        let y_extent = non_degenerate(y_extent.unwrap_or(DEFAULT_Y_EXTENT));

        let dubious_times_info = selected
            .iter()
            .map(|result| {
                chart_type
                    .indexes_around_omitted_times(result)
                    .into_iter()
                    .filter(|range| range.start >= skip)
                    .map(|range| DubiousRange { start: range.start - skip, end: range.end - skip })
                    .collect()
            })
            .collect();

        let data_columns = reference
            .iter()
            .skip(skip)
            .enumerate()
            .map(|(column, x)| DataColumn {
                x: *x,
                ys: series
                    .iter()
                    .map(|values| values.get(column).copied().unwrap_or_default())
                    .collect(),
            })
            .collect();

        Ok(ChartData {
            data_columns,
            result_names: selected.iter().map(|result| result.name().to_string()).collect(),
            num_controls: self.num_controls.unwrap_or_default(),
            x_extent,
            y_extent,
            dubious_times_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{class_of, cum_result, known, named_split_result, split_result};
    use proptest::prelude::*;

    fn two_result_class() -> CourseClass {
        class_of(
            "M21",
            vec![
                named_split_result(
                    0,
                    "Fred",
                    Some(36000.0),
                    &[Some(65.0), Some(221.0), Some(184.0), Some(100.0)],
                ),
                named_split_result(
                    1,
                    "John",
                    Some(37800.0),
                    &[Some(81.0), Some(197.0), Some(212.0), Some(106.0)],
                ),
            ],
        )
    }

    #[test]
    fn test_results_are_sorted_and_non_starters_dropped() {
        let mut non_starter = split_result(2, &[None, None, None, None]);
        non_starter.set_non_starter();
        let class = class_of(
            "M21",
            vec![
                named_split_result(
                    0,
                    "Slow",
                    None,
                    &[Some(90.0), Some(230.0), Some(200.0), Some(110.0)],
                ),
                named_split_result(
                    1,
                    "Fast",
                    None,
                    &[Some(65.0), Some(221.0), Some(184.0), Some(100.0)],
                ),
                non_starter,
            ],
        );

        let set = CourseClassSet::new([&class]).unwrap();
        let names: Vec<&str> = set.results().map(|result| result.result().name()).collect();
        assert_eq!(names, vec!["Fast", "Slow"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.num_controls(), Some(3));
    }

    #[test]
    fn test_classes_with_different_controls_are_rejected() {
        let three = two_result_class();
        let two = class_of("W21", vec![split_result(0, &[Some(65.0), Some(221.0), Some(100.0)])]);
        let err = CourseClassSet::new([&three, &two]).unwrap_err();
        assert!(err.is_invalid_data());
    }

    #[test]
    fn test_merged_classes_rank_together() {
        let men = two_result_class();
        let women = class_of(
            "W21",
            vec![named_split_result(
                0,
                "Jane",
                None,
                &[Some(70.0), Some(197.0), Some(190.0), Some(101.0)],
            )],
        );
        let set = CourseClassSet::new([&men, &women]).unwrap();

        let jane = set.results().find(|result| result.name() == "Jane").unwrap();
        assert_eq!(jane.class_name(), "W21");
        assert_eq!(jane.split_rank_to(2), Some(1));
        assert_eq!(jane.split_rank_to(1), Some(2));
        assert_eq!(jane.cumulative_rank_to(4), Some(1));
        assert_eq!(jane.split_rank_to(0), None);
    }

    #[test]
    fn test_split_ranks_with_ties() {
        let class = class_of(
            "M21",
            vec![
                split_result(0, &[Some(65.0), Some(197.0), Some(100.0)]),
                split_result(1, &[Some(70.0), Some(197.0), Some(100.0)]),
                split_result(2, &[Some(75.0), Some(209.0), Some(100.0)]),
            ],
        );
        let set = CourseClassSet::new([&class]).unwrap();
        let ranks: Vec<Option<u32>> = set.results().map(|result| result.split_rank_to(2)).collect();
        assert_eq!(ranks, vec![Some(1), Some(1), Some(2)]);
    }

    #[test]
    fn test_overlapping_sets_keep_their_own_ranks() {
        let men = two_result_class();
        let women = class_of(
            "W21",
            vec![named_split_result(
                0,
                "Jane",
                None,
                &[Some(60.0), Some(190.0), Some(180.0), Some(90.0)],
            )],
        );
        let men_only = CourseClassSet::new([&men]).unwrap();
        let combined = CourseClassSet::new([&men, &women]).unwrap();

        assert_eq!(men_only.result(0).unwrap().cumulative_rank_to(4), Some(1));
        assert_eq!(combined.result(1).unwrap().cumulative_rank_to(4), Some(2));
        assert_eq!(men_only.result(0).unwrap().cumulative_rank_to(4), Some(1));
    }

    #[test]
    fn test_fastest_cum_times() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        assert_eq!(set.get_fastest_cum_times(), Some(known(&[0.0, 65.0, 262.0, 446.0, 546.0])));
        assert_eq!(
            set.get_fastest_cum_times_plus_percentage(100.0),
            Some(known(&[0.0, 130.0, 524.0, 892.0, 1092.0]))
        );
    }

    #[test]
    fn test_fastest_cum_times_none_when_everyone_mispunches_same_control() {
        let class = class_of(
            "M21",
            vec![
                split_result(0, &[Some(65.0), None, Some(184.0), Some(100.0)]),
                split_result(1, &[Some(81.0), None, Some(212.0), Some(106.0)]),
            ],
        );
        let set = CourseClassSet::new([&class]).unwrap();
        assert_eq!(set.get_fastest_cum_times(), None);
    }

    #[test]
    fn test_fastest_cum_times_fill_common_gap_from_cumulative_times() {
        let class = class_of(
            "M21",
            vec![
                cum_result(0, &[Some(0.0), Some(65.0), None, Some(470.0), Some(570.0)]),
                cum_result(1, &[Some(0.0), Some(81.0), None, Some(490.0), Some(596.0)]),
            ],
        );
        let set = CourseClassSet::new([&class]).unwrap();
        let fastest = set.get_fastest_cum_times().unwrap();
        assert_eq!(fastest, known(&[0.0, 65.0, 267.5, 470.0, 570.0]));
    }

    #[test]
    fn test_empty_set() {
        let set = CourseClassSet::new(std::iter::empty()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.num_controls(), None);
        assert_eq!(set.get_winner_cum_times(), None);
        assert_eq!(set.get_fastest_cum_times(), None);
        assert!(!set.has_dubious_data());
    }

    #[test]
    fn test_winner_cum_times_fill_gaps() {
        let mut winner = cum_result(0, &[Some(0.0), Some(65.0), None, Some(470.0), Some(570.0)]);
        winner.set_ok_despite_missing_times();
        let class = class_of("M21", vec![winner]);
        let set = CourseClassSet::new([&class]).unwrap();
        assert_eq!(set.get_winner_cum_times(), Some(known(&[0.0, 65.0, 267.5, 470.0, 570.0])));
    }

    #[test]
    fn test_winner_must_have_completed() {
        let class = class_of("M21", vec![split_result(0, &[Some(65.0), None])]);
        let set = CourseClassSet::new([&class]).unwrap();
        assert_eq!(set.get_winner_cum_times(), None);
        assert_eq!(set.get_cumulative_times_for_result(0).unwrap(), known(&[0.0, 65.0, 125.0]));
        assert!(set.get_cumulative_times_for_result(1).unwrap_err().is_invalid_data());
    }

    #[test]
    fn test_fastest_splits_to() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();

        let splits = set.get_fastest_splits_to(2, 3).unwrap();
        assert_eq!(splits.len(), 2);
        assert_eq!((splits[0].name.as_str(), splits[0].split), ("Fred", 184.0));
        assert_eq!((splits[1].name.as_str(), splits[1].split), ("John", 212.0));

        assert_eq!(set.get_fastest_splits_to(5, 2).unwrap().len(), 2);
        assert_eq!(set.get_fastest_splits_to(1, 2).unwrap()[0].name, "John");
    }

    #[test]
    fn test_fastest_splits_to_ties_broken_by_total_time() {
        let class = class_of(
            "M21",
            vec![
                named_split_result(0, "Slower", None, &[Some(60.0), Some(300.0)]),
                named_split_result(1, "Faster", None, &[Some(60.0), Some(200.0)]),
            ],
        );
        let set = CourseClassSet::new([&class]).unwrap();
        let splits = set.get_fastest_splits_to(2, 1).unwrap();
        assert_eq!(splits[0].name, "Faster");
    }

    #[test]
    fn test_fastest_splits_to_validates_arguments() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        assert!(set.get_fastest_splits_to(0, 1).unwrap_err().is_invalid_data());
        assert!(set.get_fastest_splits_to(1, 0).unwrap_err().is_invalid_data());
        assert!(set.get_fastest_splits_to(1, 5).unwrap_err().is_invalid_data());
        assert!(set.get_fastest_splits_to(1, 4).is_ok());
    }

    #[test]
    fn test_splits_graph_chart_data() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        let reference = set.get_fastest_cum_times().unwrap();

        let data = set.get_chart_data(&reference, &[0, 1], ChartType::SplitsGraph).unwrap();
        assert_eq!(data.data_columns.len(), 5);
        assert_eq!(data.data_columns[0].x, 0.0);
        assert_eq!(data.data_columns[4].x, 546.0);
        assert_eq!(
            data.data_columns[4].ys,
            vec![TimeValue::Known(0.4), TimeValue::Known(50.0 / 60.0)]
        );
        assert_eq!(data.result_names, vec!["Fred".to_string(), "John".to_string()]);
        assert_eq!(data.x_extent, [0.0, 546.0]);
        assert_eq!(data.y_extent[0], 0.0);
        assert_eq!(data.num_controls, 3);
        assert_eq!(data.dubious_times_info, vec![vec![], vec![]]);
    }

    #[test]
    fn test_x_extent_of_non_monotonic_reference() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        let reference = known(&[0.0, 65.0, -20.0, 600.0, 546.0]);

        let data = set.get_chart_data(&reference, &[0, 1], ChartType::SplitsGraph).unwrap();
        assert_eq!(data.x_extent, [-20.0, 600.0]);
        let xs: Vec<f64> = data.data_columns.iter().map(|column| column.x).collect();
        assert_eq!(xs, vec![0.0, 65.0, -20.0, 600.0, 546.0]);
    }

    #[test]
    fn test_position_chart_skips_start() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        let reference = set.get_fastest_cum_times().unwrap();

        let data = set.get_chart_data(&reference, &[1], ChartType::PositionAfterLeg).unwrap();
        assert_eq!(data.data_columns.len(), 4);
        assert_eq!(data.data_columns[0].x, 65.0);
        let ranks: Vec<TimeValue> = data.data_columns.iter().map(|column| column.ys[0]).collect();
        assert_eq!(ranks, known(&[2.0, 1.0, 2.0, 2.0]));
        assert_eq!(data.y_extent, [1.0, 2.0]);
    }

    #[test]
    fn test_chart_without_selection_uses_first_result_extent() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        let reference = set.get_fastest_cum_times().unwrap();

        let data = set.get_chart_data(&reference, &[], ChartType::SplitPosition).unwrap();
        assert!(data.result_names.is_empty());
        assert_eq!(data.y_extent, [1.0, 2.0]);
        assert!(data.data_columns.iter().all(|column| column.ys.is_empty()));

        let empty = CourseClassSet::new(std::iter::empty()).unwrap();
        let data = empty.get_chart_data(&known(&[0.0, 60.0]), &[], ChartType::SplitsGraph).unwrap();
        assert_eq!(data.y_extent, DEFAULT_Y_EXTENT);
    }

    #[test]
    fn test_chart_data_reports_dubious_ranges_in_column_indexes() {
        let mut result =
            cum_result(0, &[Some(0.0), Some(65.0), Some(65.0), Some(286.0), Some(400.0)]);
        crate::repair::Repairer::default().repair_result(&mut result).unwrap();
        let mut class = class_of("M21", vec![result]);
        class.record_has_dubious_data();
        let set = CourseClassSet::new([&class]).unwrap();
        assert!(set.has_dubious_data());
        let reference = set.get_winner_cum_times().unwrap();

        let splits = set.get_chart_data(&reference, &[0], ChartType::SplitsGraph).unwrap();
        assert_eq!(splits.dubious_times_info, vec![vec![DubiousRange { start: 1, end: 3 }]]);

        let positions = set.get_chart_data(&reference, &[0], ChartType::PositionAfterLeg).unwrap();
        assert_eq!(positions.dubious_times_info, vec![vec![DubiousRange { start: 0, end: 2 }]]);
    }

    #[test]
    fn test_chart_data_validates_arguments() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        let reference = set.get_fastest_cum_times().unwrap();

        let err = set.get_chart_data(&[], &[0], ChartType::SplitsGraph).unwrap_err();
        assert!(err.is_usage_error());
        let err = set.get_chart_data(&reference, &[2], ChartType::SplitsGraph).unwrap_err();
        assert!(err.is_invalid_data());
        let short = &reference[..3];
        let err = set.get_chart_data(short, &[0], ChartType::RaceGraph).unwrap_err();
        assert!(err.is_invalid_data());
    }

    #[test]
    fn test_race_graph_adds_start_time() {
        let class = two_result_class();
        let set = CourseClassSet::new([&class]).unwrap();
        let reference = set.get_fastest_cum_times().unwrap();

        let data = set.get_chart_data(&reference, &[0], ChartType::RaceGraph).unwrap();
        assert_eq!(data.data_columns[0].ys, vec![TimeValue::Known(600.0)]);
    }

    proptest! {
        #[test]
        fn prop_single_result_ranks_first(splits in prop::collection::vec(1.0f64..1000.0, 2..10)) {
            let wrapped: Vec<Option<f64>> = splits.iter().copied().map(Some).collect();
            let class = class_of("Solo", vec![split_result(0, &wrapped)]);
            let set = CourseClassSet::new([&class]).unwrap();
            let only = set.result(0).unwrap();
            for control in 1..=splits.len() {
                prop_assert_eq!(only.split_rank_to(control), Some(1));
                prop_assert_eq!(only.cumulative_rank_to(control), Some(1));
            }
        }

        #[test]
        fn prop_distinct_splits_rank_as_permutation(
            values in prop::collection::hash_set(1u32..10_000, 1..12),
        ) {
            let results: Vec<RaceResult> = values
                .iter()
                .enumerate()
                .map(|(order, value)| split_result(order, &[Some(f64::from(*value)), Some(60.0)]))
                .collect();
            let class = class_of("Many", results);
            let set = CourseClassSet::new([&class]).unwrap();
            let mut ranks: Vec<u32> =
                set.results().filter_map(|result| result.split_rank_to(1)).collect();
            ranks.sort_unstable();
            prop_assert_eq!(ranks, (1..=values.len() as u32).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_dubious_split_is_unranked() {
        let class = class_of(
            "M21",
            vec![
                split_result(0, &[Some(65.0), Some(100.0)]),
                split_result(1, &[Some(f64::NAN), Some(100.0)]),
            ],
        );
        let set = CourseClassSet::new([&class]).unwrap();
        assert_eq!(set.result(1).unwrap().split_rank_to(1), None);
        assert_eq!(set.result(1).unwrap().cumulative_rank_to(2), None);
    }
}
