//! Competitor-only class sets

use crate::class_set::CourseClassSet;
use crate::{CourseClass, Result, SplitsError};
use std::ops::Deref;

/// A [`CourseClassSet`] restricted to individual competitors.
///
/// Older consumers compare age classes only and have no notion of relay
/// teams, so building one from a team class is an error.
#[derive(Debug, Clone)]
pub struct AgeClassSet<'a> {
    inner: CourseClassSet<'a>,
}

impl<'a> AgeClassSet<'a> {
    pub fn new(classes: impl IntoIterator<Item = &'a CourseClass>) -> Result<Self> {
        let classes: Vec<&'a CourseClass> = classes.into_iter().collect();
        if let Some(team_class) = classes.iter().find(|class| class.is_team_class()) {
            return Err(SplitsError::invalid_data(format!(
                "Class '{}' holds team results and cannot be used in an age-class set",
                team_class.name()
            )));
        }
        Ok(Self { inner: CourseClassSet::new(classes)? })
    }

    pub fn into_inner(self) -> CourseClassSet<'a> {
        self.inner
    }
}

impl<'a> Deref for AgeClassSet<'a> {
    type Target = CourseClassSet<'a>;

    fn deref(&self) -> &CourseClassSet<'a> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RaceResult;
    use crate::test_utils::{class_of, split_result};
    use crate::types::Team;

    #[test]
    fn test_competitor_classes_are_accepted() {
        let class = class_of("M21", vec![split_result(0, &[Some(65.0), Some(100.0)])]);
        let set = AgeClassSet::new([&class]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_fastest_cum_times().unwrap().len(), 3);
    }

    #[test]
    fn test_team_classes_are_rejected() {
        let legs = vec![
            split_result(0, &[Some(65.0), Some(100.0)]),
            split_result(1, &[Some(81.0), Some(106.0)]),
        ];
        let team = RaceResult::create_team_result(0, legs, Team::new("Team A", "ABC")).unwrap();
        let relay = class_of("Relay", vec![team]);

        let err = AgeClassSet::new([&relay]).unwrap_err();
        assert!(err.is_invalid_data());
        assert!(CourseClassSet::new([&relay]).is_ok());
    }
}
