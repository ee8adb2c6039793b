//! Who a result belongs to

use serde::{Deserialize, Serialize};

/// Competitor gender as recorded by the organiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Gender {
    Male,
    Female,
}

/// An individual competitor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Competitor {
    pub name: String,
    pub club: String,
    pub year_of_birth: Option<u32>,
    pub gender: Option<Gender>,
}

impl Competitor {
    pub fn new(name: impl Into<String>, club: impl Into<String>) -> Self {
        Self { name: name.into(), club: club.into(), year_of_birth: None, gender: None }
    }
}

/// A relay team.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Team {
    pub name: String,
    pub club: String,
}

impl Team {
    pub fn new(name: impl Into<String>, club: impl Into<String>) -> Self {
        Self { name: name.into(), club: club.into() }
    }
}

/// Owner of a result: either a competitor or a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Owner {
    Competitor(Competitor),
    Team(Team),
}

impl Owner {
    pub fn name(&self) -> &str {
        match self {
            Owner::Competitor(competitor) => &competitor.name,
            Owner::Team(team) => &team.name,
        }
    }

    pub fn club(&self) -> &str {
        match self {
            Owner::Competitor(competitor) => &competitor.club,
            Owner::Team(team) => &team.club,
        }
    }

    pub fn is_team(&self) -> bool {
        matches!(self, Owner::Team(_))
    }
}

impl From<Competitor> for Owner {
    fn from(competitor: Competitor) -> Self {
        Owner::Competitor(competitor)
    }
}

impl From<Team> for Owner {
    fn from(team: Team) -> Self {
        Owner::Team(team)
    }
}
