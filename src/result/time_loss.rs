//! Per-control time loss estimation

use super::RaceResult;
use crate::types::TimeValue;
use crate::{Result, SplitsError};

/// Median of a non-empty list of ratios; the mean of the two middle values
/// for an even count.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 { values[mid] } else { (values[mid - 1] + values[mid]) / 2.0 }
}

/// Rounds halves towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

impl RaceResult {
    /// Estimate the time lost at each control relative to the fastest splits.
    ///
    /// Each split is compared to the fastest split scaled by the median ratio
    /// of this result's splits to the fastest ones, so overall pace is
    /// factored out. Results that did not complete get no time losses.
    /// Every loss is dubious if a fastest split is zero or missing, or if
    /// this result has dubious or missing splits.
    pub fn determine_time_losses(&mut self, fastest_split_times: &[TimeValue]) -> Result<()> {
        if fastest_split_times.len() != self.split_times.len() {
            return Err(SplitsError::invalid_data(format!(
                "Cannot determine time loss of result with {} split times using {} fastest splits",
                self.split_times.len(),
                fastest_split_times.len()
            )));
        }
        if fastest_split_times.iter().any(|split| split.is_dubious()) {
            return Err(SplitsError::invalid_data(
                "Cannot determine time loss of result with dubious fastest splits",
            ));
        }

        if !self.completed() {
            return Ok(());
        }

        let all_dubious = || vec![TimeValue::Dubious; fastest_split_times.len()];

        let fastest: Option<Vec<f64>> =
            fastest_split_times.iter().map(|split| split.known().filter(|s| *s != 0.0)).collect();
        let own: Option<Vec<f64>> = self.split_times.iter().map(|split| split.known()).collect();

        let losses = match (fastest, own) {
            (Some(fastest), Some(own)) if !self.flags.ok_despite_missing_times => {
                let ratios = own.iter().zip(&fastest).map(|(split, best)| split / best).collect();
                let median_ratio = median(ratios);
                own.iter()
                    .zip(&fastest)
                    .map(|(split, best)| {
                        TimeValue::Known(round_half_up(split - best * median_ratio))
                    })
                    .collect()
            }
            _ => all_dubious(),
        };

        self.time_losses = Some(losses);
        Ok(())
    }

    /// Time lost at the given control, if time losses have been determined.
    pub fn time_loss_at(&self, control_index: usize) -> TimeValue {
        match &self.time_losses {
            Some(losses) if control_index > 0 => {
                losses.get(control_index - 1).copied().unwrap_or_default()
            }
            _ => TimeValue::Missing,
        }
    }

    pub fn time_losses(&self) -> Option<&[TimeValue]> {
        self.time_losses.as_deref()
    }
}
