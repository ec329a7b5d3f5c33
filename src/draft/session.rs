use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serenity::model::id::UserId;
use thiserror::Error;
use tracing::{debug, info};

use super::pick_sequence;
use crate::player::{Participant, Participants};
use crate::team::{split::TEAM_SIZE, Team, TeamAssignment};

/// Picks made by captains in a full draft: ten players minus the two
/// captains seated at construction.
pub const CAPTAIN_PICKS: usize = 8;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("need exactly {CAPTAIN_PICKS} undrafted players, got {0}")]
    WrongPoolSize(usize),
    #[error("captain <@{0}> cannot also be in the draft pool")]
    CaptainInPool(UserId),
    #[error("captains must be two different players")]
    DuplicateCaptain,
}

#[derive(Debug, Error)]
pub enum PickError {
    #[error("the draft is already complete")]
    DraftComplete,
    #[error("it is the {0} captain's turn to pick")]
    NotYourTurn(Team),
    #[error("<@{0}> is not available to be picked")]
    NotAvailable(UserId),
}

/// Represents the successful assignment of a player to a team; the variants
/// describe the team that is to pick next, or that picking is concluded.
#[derive(Debug, Eq, PartialEq)]
pub enum PickSuccess {
    /// Blue captain's turn to pick.
    BlueTurn,
    /// Red captain's turn to pick.
    RedTurn,
    /// All players have been picked; teams can be gotten with
    /// [`DraftSession::teams`].
    Complete,
}

/// A captain draft over a lobby of ten.
///
/// Both captains are seated the moment the session is created: the captain
/// who won the tiebreak lands on the first-pick side, the other captain on
/// the opposite side. The remaining eight players sit in the pool, in join
/// order, and move to a roster one accepted pick at a time following
/// [`pick_sequence::generate`].
///
/// The session holds no lock and never expires itself; callers serialize
/// access (one draft per channel) and use [`DraftSession::created`] to
/// discard sessions that sat idle too long.
pub struct DraftSession {
    captain_blue: Participant,
    captain_red: Participant,
    first_pick: Team,
    pick_sequence: Vec<Team>,
    pick_index: usize,
    blue_team: Vec<Participant>,
    red_team: Vec<Participant>,
    pool: Participants,
    created: DateTime<Utc>,
}

impl DraftSession {
    /// Seat `winner` on `first_pick`'s side, the `runner_up` opposite, and
    /// open the draft over the eight players of `pool`.
    pub fn new(
        first_pick: Team,
        winner: Participant,
        runner_up: Participant,
        pool: Participants,
    ) -> Result<Self, DraftError> {
        if winner == runner_up {
            return Err(DraftError::DuplicateCaptain);
        }
        if pool.len() != CAPTAIN_PICKS {
            return Err(DraftError::WrongPoolSize(pool.len()));
        }
        for captain in [&winner, &runner_up] {
            if pool.contains(&captain.user_id()) {
                return Err(DraftError::CaptainInPool(captain.user_id()));
            }
        }

        let (captain_blue, captain_red) = match first_pick {
            Team::Blue => (winner, runner_up),
            Team::Red => (runner_up, winner),
        };
        info!(
            blue_captain = %captain_blue.user_id(),
            red_captain = %captain_red.user_id(),
            %first_pick,
            "draft session opened"
        );

        Ok(DraftSession {
            blue_team: vec![captain_blue.clone()],
            red_team: vec![captain_red.clone()],
            captain_blue,
            captain_red,
            first_pick,
            pick_sequence: pick_sequence::generate(CAPTAIN_PICKS, first_pick),
            pick_index: 0,
            pool,
            created: Utc::now(),
        })
    }

    /// Move a pool player onto `acting`'s roster.
    ///
    /// Rejected picks (`NotYourTurn`, `NotAvailable`, `DraftComplete`)
    /// leave the session untouched, so the caller can surface the error and
    /// keep the draft running.
    pub fn pick(&mut self, acting: Team, user_id: UserId) -> Result<PickSuccess, PickError> {
        let turn = self
            .pick_sequence
            .get(self.pick_index)
            .copied()
            .ok_or(PickError::DraftComplete)?;
        if acting != turn {
            return Err(PickError::NotYourTurn(turn));
        }

        let picked = self
            .pool
            .iter()
            .find(|player| player.user_id() == user_id)
            .cloned()
            .ok_or(PickError::NotAvailable(user_id))?;
        self.pool.remove(&user_id);

        debug!(team = %turn, player = %picked.user_id(), pick = self.pick_index, "player picked");
        match turn {
            Team::Blue => self.blue_team.push(picked),
            Team::Red => self.red_team.push(picked),
        }
        self.pick_index += 1;

        Ok(match self.pick_sequence.get(self.pick_index) {
            Some(Team::Blue) => PickSuccess::BlueTurn,
            Some(Team::Red) => PickSuccess::RedTurn,
            None => {
                info!("draft complete");
                PickSuccess::Complete
            }
        })
    }

    /// Yet unpicked players, in the order they joined.
    pub fn remaining(&self) -> impl Iterator<Item = &Participant> {
        self.pool.iter()
    }

    /// Which team picks next, or [`None`] once the draft is complete.
    pub fn currently_picking(&self) -> Option<Team> {
        self.pick_sequence.get(self.pick_index).copied()
    }

    /// The captain whose turn it is, or [`None`] once the draft is complete.
    pub fn currently_picking_captain(&self) -> Option<&Participant> {
        self.currently_picking().map(|team| self.captain(team))
    }

    pub fn captain(&self, team: Team) -> &Participant {
        match team {
            Team::Blue => &self.captain_blue,
            Team::Red => &self.captain_red,
        }
    }

    pub fn first_pick(&self) -> Team {
        self.first_pick
    }

    pub fn blue_team(&self) -> &[Participant] {
        &self.blue_team
    }

    pub fn red_team(&self) -> &[Participant] {
        &self.red_team
    }

    pub fn pick_index(&self) -> usize {
        self.pick_index
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn is_complete(&self) -> bool {
        self.pool.is_empty()
            && self.blue_team.len() == TEAM_SIZE
            && self.red_team.len() == TEAM_SIZE
    }

    /// The final rosters, once every pool player has been drafted.
    pub fn teams(&self) -> Option<TeamAssignment> {
        if !self.is_complete() {
            return None;
        }
        Some(TeamAssignment {
            blue: self.blue_team.clone(),
            red: self.red_team.clone(),
        })
    }

    /// Plain-data view of the session, for rendering or for parking the
    /// draft in external storage.
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            first_pick: self.first_pick,
            captain_blue: self.captain_blue.clone(),
            captain_red: self.captain_red.clone(),
            blue_team: self.blue_team.clone(),
            red_team: self.red_team.clone(),
            pool: self.pool.iter().cloned().collect(),
            pick_index: self.pick_index,
            created: self.created,
        }
    }

    /// Rebuild a session from a snapshot taken with
    /// [`DraftSession::snapshot`]; rosters, pool order and whose turn it is
    /// all come back identical.
    pub fn from_snapshot(snapshot: DraftSnapshot) -> Self {
        DraftSession {
            captain_blue: snapshot.captain_blue,
            captain_red: snapshot.captain_red,
            first_pick: snapshot.first_pick,
            pick_sequence: pick_sequence::generate(CAPTAIN_PICKS, snapshot.first_pick),
            pick_index: snapshot.pick_index,
            blue_team: snapshot.blue_team,
            red_team: snapshot.red_team,
            pool: snapshot.pool.into_iter().collect(),
            created: snapshot.created,
        }
    }
}

/// Serializable state of a [`DraftSession`].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DraftSnapshot {
    pub first_pick: Team,
    pub captain_blue: Participant,
    pub captain_red: Participant,
    pub blue_team: Vec<Participant>,
    pub red_team: Vec<Participant>,
    pub pool: Vec<Participant>,
    pub pick_index: usize,
    pub created: DateTime<Utc>,
}
