//! Chart types and the series they plot

use super::RankedResult;
use crate::result::DubiousRange;
use crate::types::TimeValue;
use crate::{Result, SplitsError};
use serde::{Deserialize, Serialize};

/// Fallback y-extent, in minutes, when there is nothing to measure.
pub const DEFAULT_Y_EXTENT: [f64; 2] = [0.0, 60.0];

/// The kinds of chart the engine can produce series for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    /// Time behind the reference at each control, in minutes.
    SplitsGraph,
    /// Clock time at each control relative to the reference, in minutes.
    RaceGraph,
    /// Cumulative rank after each leg.
    PositionAfterLeg,
    /// Rank on each individual split.
    SplitPosition,
    /// Percentage behind the reference split.
    PercentBehind,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::SplitsGraph,
        ChartType::RaceGraph,
        ChartType::PositionAfterLeg,
        ChartType::SplitPosition,
        ChartType::PercentBehind,
    ];

    /// Values to plot for one result, one per cumulative index.
    pub fn data_selector(
        self,
        result: &RankedResult<'_>,
        reference_cum_times: &[TimeValue],
    ) -> Result<Vec<TimeValue>> {
        let data: Vec<TimeValue> = match self {
            ChartType::SplitsGraph => result
                .cum_times_adjusted_to_reference(reference_cum_times)?
                .into_iter()
                .map(TimeValue::to_minutes)
                .collect(),
            ChartType::RaceGraph => result
                .cum_times_adjusted_to_reference_with_start_added(reference_cum_times)?
                .into_iter()
                .map(TimeValue::to_minutes)
                .collect(),
            ChartType::PositionAfterLeg => (0..reference_cum_times.len())
                .map(|control| result.cumulative_rank_to(control).into())
                .collect(),
            ChartType::SplitPosition => (0..reference_cum_times.len())
                .map(|control| result.split_rank_to(control).into())
                .collect(),
            ChartType::PercentBehind => {
                result.split_percents_behind_reference_cum_times(reference_cum_times)?
            }
        };
        Ok(data)
    }

    /// Whether the start is left off the chart. Ranks have no value at the start.
    pub fn skip_start(self) -> bool {
        matches!(self, ChartType::PositionAfterLeg | ChartType::SplitPosition)
    }

    /// First control index shown on the chart.
    pub fn min_viewable_control(self) -> usize {
        usize::from(self.skip_start())
    }

    /// Ranges of control indexes around the dubious times this chart plots.
    pub fn indexes_around_omitted_times(self, result: &RankedResult<'_>) -> Vec<DubiousRange> {
        match self {
            ChartType::SplitsGraph | ChartType::RaceGraph | ChartType::PositionAfterLeg => {
                result.control_indexes_around_omitted_cumulative_times()
            }
            ChartType::SplitPosition | ChartType::PercentBehind => {
                result.control_indexes_around_omitted_split_times()
            }
        }
    }

    pub fn is_race_graph(self) -> bool {
        self == ChartType::RaceGraph
    }
}

/// One x position on the chart and the value of each selected series there.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct DataColumn {
    /// Reference cumulative time, in seconds.
    pub x: f64,
    pub ys: Vec<TimeValue>,
}

/// Everything a chart needs to draw the selected results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ChartData {
    pub data_columns: Vec<DataColumn>,
    pub result_names: Vec<String>,
    pub num_controls: usize,
    pub x_extent: [f64; 2],
    pub y_extent: [f64; 2],
    /// Per selected result, ranges of data-column indexes to draw as dubious.
    pub dubious_times_info: Vec<Vec<DubiousRange>>,
}

/// Minimum and maximum of the known values, if there are any.
pub(crate) fn extent<'a>(values: impl IntoIterator<Item = &'a TimeValue>) -> Option<[f64; 2]> {
    values.into_iter().filter_map(|value| value.known()).fold(None, |extent, value| match extent {
        None => Some([value, value]),
        Some([min, max]) => Some([min.min(value), max.max(value)]),
    })
}

/// Widen a degenerate extent so the axis has some height.
pub(crate) fn non_degenerate(extent: [f64; 2]) -> [f64; 2] {
    let [min, max] = extent;
    if (max - min).abs() < 1e-8 { [min, min + 1.0] } else { extent }
}

/// Reference cumulative times as plain seconds.
pub(crate) fn reference_seconds(reference_cum_times: &[TimeValue]) -> Result<Vec<f64>> {
    if reference_cum_times.is_empty() {
        return Err(SplitsError::usage("Chart data requires reference cumulative times"));
    }
    reference_cum_times
        .iter()
        .map(|time| {
            time.known().ok_or_else(|| {
                SplitsError::invalid_data(format!(
                    "Reference cumulative times must all be known, got {time:?}"
                ))
            })
        })
        .collect()
}
