//! Courses: the physical control sequences that classes run

use crate::class_set::FastestSplit;
use crate::{CourseClass, Result, SplitsError};

/// Pseudo control code for the start of a course.
pub const START_CONTROL_CODE: &str = "__START__";

/// Pseudo control code for the finish of a course.
pub const FINISH_CONTROL_CODE: &str = "__FINISH__";

/// A course, run by one or more classes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Course {
    pub name: String,
    /// Names of the classes that run this course.
    pub class_names: Vec<String>,
    /// Length in kilometres.
    pub length: Option<f64>,
    /// Climb in metres.
    pub climb: Option<f64>,
    /// Control codes in order, without start and finish. `None` if the
    /// source data did not list them.
    pub control_codes: Option<Vec<String>>,
}

impl Course {
    pub fn new(name: impl Into<String>, class_names: Vec<String>) -> Self {
        Self { name: name.into(), class_names, ..Default::default() }
    }

    pub fn has_length_and_climb(&self) -> bool {
        self.length.is_some() && self.climb.is_some()
    }

    /// Whether the course visits the given control code.
    pub fn has_control(&self, code: &str) -> bool {
        self.control_codes.as_ref().is_some_and(|codes| codes.iter().any(|c| c == code))
    }

    fn codes_with_start_and_finish(&self) -> Option<Vec<&str>> {
        let codes = self.control_codes.as_ref()?;
        let mut all = Vec::with_capacity(codes.len() + 2);
        all.push(START_CONTROL_CODE);
        all.extend(codes.iter().map(String::as_str));
        all.push(FINISH_CONTROL_CODE);
        Some(all)
    }

    /// Codes of the controls that follow every visit to `code`.
    pub fn get_next_controls(&self, code: &str) -> Result<Vec<String>> {
        let all = self.codes_with_start_and_finish().ok_or_else(|| {
            SplitsError::invalid_data(format!("Course '{}' has no control codes", self.name))
        })?;

        let next: Vec<String> = all
            .windows(2)
            .filter(|pair| pair[0] == code)
            .map(|pair| pair[1].to_string())
            .collect();

        if next.is_empty() {
            Err(SplitsError::invalid_data(format!(
                "Control '{}' not found on course '{}'",
                code, self.name
            )))
        } else {
            Ok(next)
        }
    }

    /// Control index (1-based, the finish being `num_controls + 1`) at the end
    /// of the leg from `start_code` to `end_code`.
    pub fn get_leg_number(&self, start_code: &str, end_code: &str) -> Option<usize> {
        let all = self.codes_with_start_and_finish()?;
        all.windows(2)
            .position(|pair| pair[0] == start_code && pair[1] == end_code)
            .map(|index| index + 1)
    }

    pub fn uses_leg(&self, start_code: &str, end_code: &str) -> bool {
        self.get_leg_number(start_code, end_code).is_some()
    }

    /// Splits of every completed result on this course for the given leg, fastest first.
    ///
    /// `classes` may contain classes from other courses; only this course's are used.
    pub fn get_fastest_splits_for_leg(
        &self,
        classes: &[CourseClass],
        start_code: &str,
        end_code: &str,
    ) -> Result<Vec<FastestSplit>> {
        if self.control_codes.is_none() {
            return Err(SplitsError::invalid_data(format!(
                "Cannot find fastest leg splits: course '{}' has no control codes",
                self.name
            )));
        }
        let control_index = self.get_leg_number(start_code, end_code).ok_or_else(|| {
            SplitsError::invalid_data(format!(
                "Leg from '{}' to '{}' not found in course '{}'",
                start_code, end_code, self.name
            ))
        })?;

        let mut splits: Vec<FastestSplit> = classes
            .iter()
            .filter(|class| self.class_names.iter().any(|name| name == class.name()))
            .flat_map(|class| {
                class
                    .results()
                    .iter()
                    .filter(|result| result.completed())
                    .filter_map(move |result| {
                        result.split_time_to(control_index).known().map(|split| FastestSplit {
                            name: result.name().to_string(),
                            class_name: class.name().to_string(),
                            split,
                        })
                    })
            })
            .collect();

        splits.sort_by(|a, b| a.split.total_cmp(&b.split));
        Ok(splits)
    }
}
