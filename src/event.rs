//! Events: every class and course loaded from one results file

use crate::config::{AnalysisConfig, RepairMode};
use crate::repair::{Repairer, repair_event_data_with, transfer_result_data};
use crate::{Course, CourseClass, CourseClassSet, Result};
use tracing::{debug, warn};

/// All the classes and courses of one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Event {
    pub classes: Vec<CourseClass>,
    pub courses: Vec<Course>,
    /// Problems found while preparing the data that did not stop the analysis.
    pub warnings: Vec<String>,
}

impl Event {
    pub fn new(classes: Vec<CourseClass>, courses: Vec<Course>) -> Self {
        Self { classes, courses, warnings: Vec::new() }
    }

    /// Whether some result has not had its repaired track populated yet.
    pub fn needs_repair(&self) -> bool {
        self.classes
            .iter()
            .flat_map(|class| class.results())
            .any(|result| !result.has_repaired_times())
    }

    /// Populate every repaired track, then work out time losses if configured.
    ///
    /// This runs once, after loading and before any class set is built.
    pub fn prepare(&mut self, config: &AnalysisConfig) -> Result<()> {
        config.validate()?;
        match config.repair_mode {
            RepairMode::Repair => {
                let mut repairer = Repairer::new(config.absurd_finish_margin_secs);
                repair_event_data_with(&mut self.classes, &mut repairer)?;
            }
            RepairMode::Transfer => transfer_result_data(&mut self.classes)?,
        }

        if config.determine_time_losses {
            self.determine_time_losses()?;
        }
        debug!(
            classes = self.classes.len(),
            courses = self.courses.len(),
            warnings = self.warnings.len(),
            "Prepared event"
        );
        Ok(())
    }

    /// Work out time losses in every class.
    ///
    /// A class whose data cannot support time losses is skipped with a warning.
    pub fn determine_time_losses(&mut self) -> Result<()> {
        for class in &mut self.classes {
            match class.determine_time_losses() {
                Ok(()) => {}
                Err(err) if err.is_invalid_data() => {
                    warn!(class = %class.name(), error = %err, "Skipping time losses for class");
                    self.warnings.push(format!(
                        "Could not determine time losses for class '{}': {}",
                        class.name(),
                        err
                    ));
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    pub fn find_class(&self, name: &str) -> Option<&CourseClass> {
        self.classes.iter().find(|class| class.name() == name)
    }

    pub fn find_course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.name == name)
    }

    /// The course a class runs, if the event lists one.
    pub fn course_of_class(&self, class_name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.class_names.iter().any(|name| name == class_name))
    }

    /// A class set of every class on the given course.
    pub fn course_class_set(&self, course: &Course) -> Result<CourseClassSet<'_>> {
        CourseClassSet::new(
            self.classes
                .iter()
                .filter(|class| course.class_names.iter().any(|name| name == class.name())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{class_of, cum_result, split_result};

    fn event() -> Event {
        let men = class_of(
            "M21",
            vec![
                split_result(0, &[Some(65.0), Some(221.0), Some(184.0), Some(100.0)]),
                cum_result(1, &[Some(0.0), Some(81.0), Some(81.0), Some(490.0), Some(596.0)]),
            ],
        );
        let women = class_of(
            "W21",
            vec![split_result(0, &[Some(70.0), Some(200.0), Some(190.0), Some(101.0)])],
        );
        let course = Course::new("Long", vec!["M21".to_string(), "W21".to_string()]);
        Event::new(vec![men, women], vec![course])
    }

    #[test]
    fn test_prepare_repairs_and_determines_time_losses() {
        let mut event = event();
        assert!(event.needs_repair());

        event.prepare(&AnalysisConfig::default()).unwrap();
        assert!(!event.needs_repair());

        let men = event.find_class("M21").unwrap();
        assert!(men.has_dubious_data());
        assert!(men.results()[1].is_cumulative_time_dubious(2));
        assert!(men.results()[0].time_losses().is_some());
        assert!(event.warnings.is_empty());
    }

    #[test]
    fn test_prepare_in_transfer_mode_keeps_originals() {
        let mut event = event();
        let config = AnalysisConfig {
            repair_mode: RepairMode::Transfer,
            determine_time_losses: false,
            ..Default::default()
        };
        event.prepare(&config).unwrap();

        let men = event.find_class("M21").unwrap();
        assert!(!men.has_dubious_data());
        assert!(!men.results()[1].is_cumulative_time_dubious(2));
        assert!(men.results()[0].time_losses().is_none());
    }

    #[test]
    fn test_lookups() {
        let event = event();
        assert!(event.find_class("M21").is_some());
        assert!(event.find_class("M99").is_none());
        assert_eq!(event.course_of_class("W21").map(|course| course.name.as_str()), Some("Long"));
        assert!(event.find_course("Short").is_none());

        let course = event.find_course("Long").unwrap();
        let set = event.course_class_set(course).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let mut event = event();
        let config = AnalysisConfig { absurd_finish_margin_secs: 0.0, ..Default::default() };
        assert!(event.prepare(&config).is_err());
    }
}
