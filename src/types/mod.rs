//! Small value types shared by every part of the engine.
//!
//! - [`TimeValue`] is the three-state time (known / missing / dubious) that every
//!   time array in the crate is made of
//! - [`Owner`] names who a result belongs to, a [`Competitor`] or a relay [`Team`]
//! - [`StatusFlags`] and [`ResultStatus`] describe how a result ended
//!
//! ```rust
//! use splitscope::types::TimeValue;
//!
//! let split = TimeValue::Known(262.0) - TimeValue::Known(65.0);
//! assert_eq!(split, TimeValue::Known(197.0));
//! assert_eq!(TimeValue::Known(65.0) - TimeValue::Missing, TimeValue::Missing);
//! ```

mod owner;
mod status;
mod time_value;

pub use owner::{Competitor, Gender, Owner, Team};
pub use status::{ResultStatus, StatusFlags, classify_status};
pub use time_value::{TimeValue, times_from};
