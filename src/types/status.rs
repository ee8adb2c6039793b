//! Result status flags and their display classification

use serde::{Deserialize, Serialize};

/// Raw status flags recorded against a result.
///
/// The flags are informative rather than exclusive: a disqualified competitor
/// may also be non-competitive, for example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct StatusFlags {
    pub non_competitive: bool,
    pub non_starter: bool,
    pub non_finisher: bool,
    pub disqualified: bool,
    pub over_max_time: bool,
    pub ok_despite_missing_times: bool,
}

/// Single status used when a result is shown in a table or list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum ResultStatus {
    Ok,
    NonCompetitive,
    Mispunched,
    NonStarter,
    NonFinisher,
    Disqualified,
    OverMaxTime,
}

impl ResultStatus {
    /// Short label as shown in results tables.
    pub fn label(self) -> &'static str {
        match self {
            ResultStatus::Ok => "",
            ResultStatus::NonCompetitive => "n/c",
            ResultStatus::Mispunched => "mp",
            ResultStatus::NonStarter => "dns",
            ResultStatus::NonFinisher => "dnf",
            ResultStatus::Disqualified => "dsq",
            ResultStatus::OverMaxTime => "over max",
        }
    }
}

/// Classify a set of flags, given whether a total time is known.
pub fn classify_status(flags: StatusFlags, has_total_time: bool) -> ResultStatus {
    if flags.non_starter {
        ResultStatus::NonStarter
    } else if flags.non_finisher {
        ResultStatus::NonFinisher
    } else if flags.disqualified {
        ResultStatus::Disqualified
    } else if flags.over_max_time {
        ResultStatus::OverMaxTime
    } else if !has_total_time {
        ResultStatus::Mispunched
    } else if flags.non_competitive {
        ResultStatus::NonCompetitive
    } else {
        ResultStatus::Ok
    }
}
