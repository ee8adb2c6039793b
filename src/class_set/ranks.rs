//! Per-control split and cumulative ranking

use crate::RaceResult;
use crate::types::TimeValue;

/// Split and cumulative ranks of one result, indexed by `control - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Ranks {
    pub split: Vec<Option<u32>>,
    pub cumulative: Vec<Option<u32>>,
}

/// Rank a list of times. Tied times share a rank and the next distinct time
/// gets the next rank, so `[197, 197, 209]` ranks as `[1, 1, 2]`. Times that
/// are not known get no rank.
pub(crate) fn rank_times(times: &[TimeValue]) -> Vec<Option<u32>> {
    let mut distinct: Vec<f64> = times.iter().filter_map(|time| time.known()).collect();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();

    times
        .iter()
        .map(|time| {
            time.known().map(|time| {
                let smaller = distinct.partition_point(|other| *other < time);
                (smaller + 1) as u32
            })
        })
        .collect()
}

/// Compute split and cumulative ranks at every control for a sorted list of results.
///
/// A result that lost its cumulative rank at one control keeps losing it
/// at every later control, unless it is marked OK despite missing times.
pub(crate) fn compute_ranks(results: &[&RaceResult], num_controls: usize) -> Vec<Ranks> {
    let mut ranks: Vec<Ranks> = results
        .iter()
        .map(|_| Ranks {
            split: Vec::with_capacity(num_controls + 1),
            cumulative: Vec::with_capacity(num_controls + 1),
        })
        .collect();

    for control in 1..=num_controls + 1 {
        let splits: Vec<TimeValue> =
            results.iter().map(|result| result.split_time_to(control)).collect();
        for (result_ranks, rank) in ranks.iter_mut().zip(rank_times(&splits)) {
            result_ranks.split.push(rank);
        }

        let cum_times: Vec<TimeValue> = results
            .iter()
            .zip(&ranks)
            .map(|(result, result_ranks)| {
                let lost_rank_earlier =
                    control > 1 && result_ranks.cumulative[control - 2].is_none();
                if lost_rank_earlier && !result.is_ok_despite_missing_times() {
                    TimeValue::Missing
                } else {
                    result.cumulative_time_to(control)
                }
            })
            .collect();
        for (result_ranks, rank) in ranks.iter_mut().zip(rank_times(&cum_times)) {
            result_ranks.cumulative.push(rank);
        }
    }
    ranks
}
