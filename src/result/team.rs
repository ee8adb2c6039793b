//! Relay team results built from leg results

use super::RaceResult;
use crate::types::{Team, TimeValue};
use crate::{Result, SplitsError};

/// Offset of each leg's times from the team's start.
///
/// Uses the previous leg's total time where it has one, otherwise the gap
/// between the two legs' start times. Once an offset is unknown, later ones are too.
fn leg_offsets(legs: &[RaceResult]) -> Vec<TimeValue> {
    let mut offsets = Vec::with_capacity(legs.len());
    offsets.push(TimeValue::ZERO);
    for pair in legs.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        let previous_offset = offsets[offsets.len() - 1];
        let offset = if let Some(total) = previous.total_time() {
            previous_offset + TimeValue::Known(total)
        } else {
            match (previous.start_time, next.start_time) {
                (Some(previous_start), Some(next_start)) => {
                    previous_offset + TimeValue::Known(next_start - previous_start)
                }
                _ => TimeValue::Missing,
            }
        };
        offsets.push(offset);
    }
    offsets
}

fn concatenate_legs<'a>(
    legs: &'a [RaceResult],
    offsets: &[TimeValue],
    times_of: impl Fn(&'a RaceResult) -> &'a [TimeValue],
) -> Vec<TimeValue> {
    let mut cum_times = vec![TimeValue::ZERO];
    for (leg, offset) in legs.iter().zip(offsets) {
        cum_times.extend(times_of(leg)[1..].iter().map(|time| *offset + *time));
    }
    cum_times
}

/// A leg that finished normally.
fn is_ok_leg(leg: &RaceResult) -> bool {
    leg.completed() && !leg.flags.non_starter && !leg.flags.non_finisher
}

impl RaceResult {
    /// Build a team result from the results of its legs, in running order.
    ///
    /// The team's cumulative times are the legs' times laid end to end. A
    /// repaired track is only built if every leg has one. The team's status is
    /// derived from the legs' statuses.
    pub fn create_team_result(order: usize, legs: Vec<RaceResult>, team: Team) -> Result<Self> {
        if legs.len() < 2 {
            return Err(SplitsError::invalid_data(
                "Team results can only be created from at least two other results",
            ));
        }

        let offsets = leg_offsets(&legs);
        let original = concatenate_legs(&legs, &offsets, |leg| leg.original_cum_times.as_slice());

        let mut team_result =
            RaceResult::from_cumulative_times(order, legs[0].start_time, team, original)?;

        if legs.iter().all(|leg| leg.repaired) {
            let repaired = concatenate_legs(&legs, &offsets, |leg| leg.cum_times.as_slice());
            team_result.set_repaired_cumulative_times(repaired)?;
        }

        team_result.apply_aggregate_status(&legs);
        team_result.legs = legs;
        Ok(team_result)
    }

    fn apply_aggregate_status(&mut self, legs: &[RaceResult]) {
        if legs.iter().any(|leg| leg.flags.disqualified) {
            self.disqualify();
            return;
        }
        if legs.iter().all(|leg| leg.flags.non_starter) {
            self.set_non_starter();
            return;
        }

        let ok_count = legs.iter().take_while(|leg| is_ok_leg(leg)).count();
        let trailing_non_starters =
            legs.iter().rev().take_while(|leg| leg.flags.non_starter).count();
        let first_non_starter = legs.len() - trailing_non_starters;

        let stopped_after_ok_legs = ok_count == first_non_starter && first_non_starter < legs.len();
        let one_non_finisher_then_stopped =
            ok_count + 1 == first_non_starter && legs[ok_count].flags.non_finisher;

        if stopped_after_ok_legs || one_non_finisher_then_stopped {
            self.set_non_finisher();
        } else if legs.iter().any(|leg| leg.flags.over_max_time) {
            self.set_over_max_time();
        } else if legs.iter().any(|leg| leg.flags.non_competitive) {
            self.set_non_competitive();
        }
    }
}
