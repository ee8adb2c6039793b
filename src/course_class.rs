//! Classes: the results of everyone who ran the same class

use crate::class_set::fastest_split_times;
use crate::types::TimeValue;
use crate::{RaceResult, Result};
use tracing::debug;

/// A named class of results sharing one control sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseClass {
    name: String,
    num_controls: usize,
    results: Vec<RaceResult>,
    has_dubious_data: bool,
}

impl CourseClass {
    pub fn new(name: impl Into<String>, num_controls: usize, results: Vec<RaceResult>) -> Self {
        Self { name: name.into(), num_controls, results, has_dubious_data: false }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of controls, excluding start and finish.
    pub fn num_controls(&self) -> usize {
        self.num_controls
    }

    pub fn results(&self) -> &[RaceResult] {
        &self.results
    }

    /// Mutable access for the parser and repair passes.
    pub fn results_mut(&mut self) -> &mut [RaceResult] {
        &mut self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether this class holds relay team results.
    pub fn is_team_class(&self) -> bool {
        self.results.iter().any(RaceResult::is_team)
    }

    /// Whether data repair changed any time in this class.
    pub fn has_dubious_data(&self) -> bool {
        self.has_dubious_data
    }

    pub fn record_has_dubious_data(&mut self) {
        self.has_dubious_data = true;
    }

    /// Fastest repaired split to each control, `Missing` where nobody has a usable split.
    pub fn fastest_split_times(&self) -> Vec<TimeValue> {
        fastest_split_times(self.results.iter(), self.num_controls)
    }

    /// Work out time losses for every result against this class's fastest splits.
    pub fn determine_time_losses(&mut self) -> Result<()> {
        let fastest = self.fastest_split_times();
        debug!(class = %self.name, results = self.results.len(), "Determining time losses");
        for result in &mut self.results {
            result.determine_time_losses(&fastest)?;
        }
        Ok(())
    }
}
