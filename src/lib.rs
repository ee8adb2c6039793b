//! Split-time analysis engine for orienteering results.
//!
//! Splitscope takes the control-to-control times of competitors and relay
//! teams and computes what a splits browser needs to compare them: cumulative
//! times, per-control ranks, a synthetic fastest result, time-loss estimates
//! and chart-ready series.
//!
//! # Features
//!
//! - **Three-state times**: every time is known, missing (a missed punch) or
//!   dubious (rejected by data repair), and the state survives all arithmetic
//! - **Data repair**: duplicate and impossible cumulative times are detected
//!   without touching the original data
//! - **Class sets**: classes sharing a course are merged, sorted and ranked
//! - **Chart data**: series, extents and dubious ranges for five chart types
//!
//! File parsing and rendering are left to the application; parsers build
//! [`RaceResult`]s and [`CourseClass`]es, and views read the outputs.
//!
//! # Quick Start
//!
//! ```rust
//! use splitscope::{
//!     AnalysisConfig, ChartType, Competitor, CourseClass, CourseClassSet, Event, RaceResult,
//!     TimeValue,
//! };
//!
//! let splits = |times: &[f64]| times.iter().copied().map(TimeValue::Known).collect::<Vec<_>>();
//! let fred = Competitor::new("Fred", "ABC");
//! let john = Competitor::new("John", "DEF");
//! let results = vec![
//!     RaceResult::from_split_times(0, Some(36000.0), fred, splits(&[65.0, 221.0, 184.0, 100.0]))?,
//!     RaceResult::from_split_times(1, Some(37800.0), john, splits(&[81.0, 197.0, 212.0, 106.0]))?,
//! ];
//! let mut event = Event::new(vec![CourseClass::new("M21", 3, results)], vec![]);
//! event.prepare(&AnalysisConfig::default())?;
//!
//! let set = CourseClassSet::new(&event.classes)?;
//! let reference = set.get_fastest_cum_times().expect("every control has a split");
//! let chart = set.get_chart_data(&reference, &[0, 1], ChartType::SplitsGraph)?;
//! assert_eq!(chart.result_names, vec!["Fred", "John"]);
//! # Ok::<(), splitscope::SplitsError>(())
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod time;
pub mod types;
mod yaml_utils;

// Results, classes and courses
pub mod course;
pub mod course_class;
pub mod result;

// Analysis
pub mod age_class_set;
pub mod class_set;
pub mod config;
pub mod event;
pub mod repair;

// Core exports
pub use error::*;
pub use types::*;

// Data model exports
pub use course::Course;
pub use course_class::CourseClass;
pub use result::{DubiousRange, RaceResult, compare_results};

// Analysis exports
pub use age_class_set::AgeClassSet;
pub use class_set::{ChartData, ChartType, CourseClassSet, DataColumn, FastestSplit, RankedResult};
pub use config::{AnalysisConfig, RepairMode};
pub use event::Event;
pub use repair::{repair_event_data, transfer_result_data};
