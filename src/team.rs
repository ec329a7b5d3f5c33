pub mod roles;
pub mod split;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Participant;

/// One of the two sides in a team-split, draft or series.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// The opposing side.
    pub fn other(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Blue => write!(f, "Blue"),
            Team::Red => write!(f, "Red"),
        }
    }
}

/// A finished split of the lobby into two teams of five.
///
/// Produced by [`split::random_teams`], [`roles::role_teams`] and a
/// completed [`crate::draft::DraftSession`]; always a partition of the ten
/// players that went in.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TeamAssignment {
    pub blue: Vec<Participant>,
    pub red: Vec<Participant>,
}

impl TeamAssignment {
    pub fn team(&self, team: Team) -> &[Participant] {
        match team {
            Team::Blue => &self.blue,
            Team::Red => &self.red,
        }
    }
}
