use serde::{Deserialize, Serialize};
use serenity::model::id::UserId;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::player::Participant;

/// A throw in rock-paper-scissors. Each choice beats exactly one other and
/// loses to exactly one other.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// The choice this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    pub fn emoji(self) -> char {
        match self {
            Choice::Rock => '🪨',
            Choice::Paper => '📄',
            Choice::Scissors => '✂',
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Rock => write!(f, "rock"),
            Choice::Paper => write!(f, "paper"),
            Choice::Scissors => write!(f, "scissors"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TiebreakError {
    #[error("<@{0}> is not part of this game")]
    ForeignUser(UserId),
    #[error("<@{0}> already made their choice")]
    AlreadyChosen(UserId),
    #[error("both players must choose before the round can be resolved")]
    IncompleteRound,
}

/// One round of rock-paper-scissors between two captains, used to decide
/// who drafts first.
///
/// Each player submits at most one choice; once both are in the round can
/// be resolved. A tie resolves to no winner rather than an error, and the
/// game does not replay itself: the caller starts a fresh round if it needs
/// a decisive result.
pub struct TiebreakGame {
    players: [Participant; 2],
    choices: [Option<Choice>; 2],
}

impl TiebreakGame {
    pub fn new(player_one: Participant, player_two: Participant) -> Self {
        TiebreakGame {
            players: [player_one, player_two],
            choices: [None, None],
        }
    }

    pub fn players(&self) -> (&Participant, &Participant) {
        (&self.players[0], &self.players[1])
    }

    /// Record a player's choice. Returns whether both players have now
    /// chosen, i.e. whether [`TiebreakGame::resolve`] may be called.
    pub fn submit(&mut self, user_id: UserId, choice: Choice) -> Result<bool, TiebreakError> {
        let slot = self
            .players
            .iter()
            .position(|player| player.user_id() == user_id)
            .ok_or(TiebreakError::ForeignUser(user_id))?;
        if self.choices[slot].is_some() {
            return Err(TiebreakError::AlreadyChosen(user_id));
        }

        debug!(player = %user_id, %choice, "tiebreak choice locked in");
        self.choices[slot] = Some(choice);
        Ok(self.is_ready())
    }

    pub fn is_ready(&self) -> bool {
        self.choices.iter().all(Option::is_some)
    }

    /// Determine the winner once both choices are present. Equal choices
    /// yield [`None`].
    pub fn resolve(&self) -> Result<Option<&Participant>, TiebreakError> {
        match (self.choices[0], self.choices[1]) {
            (Some(first), Some(second)) => {
                if first == second {
                    Ok(None)
                } else if first.beats() == second {
                    Ok(Some(&self.players[0]))
                } else {
                    Ok(Some(&self.players[1]))
                }
            }
            _ => Err(TiebreakError::IncompleteRound),
        }
    }
}
