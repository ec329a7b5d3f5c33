use chrono::{DateTime, Utc};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::series::{SeriesStatus, SeriesType};
use crate::team::Team;

/// A player's cumulative record across every completed match.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub discord_id: u64,
    pub username: String,
    pub total_games: u32,
    pub total_wins: u32,
}

impl UserProfile {
    pub fn new(discord_id: u64, username: impl Into<String>) -> Self {
        UserProfile {
            discord_id,
            username: username.into(),
            total_games: 0,
            total_wins: 0,
        }
    }

    pub fn losses(&self) -> u32 {
        self.total_games - self.total_wins
    }

    /// Win rate as a percentage; zero with no games on record.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.total_wins) / f64::from(self.total_games) * 100.0
    }

    pub fn apply_result(&mut self, won: bool) {
        self.total_games += 1;
        if won {
            self.total_wins += 1;
        }
    }
}

/// A match series as stored: one row per series, games kept separately.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MatchRecord {
    pub match_id: String,
    pub series_type: SeriesType,
    pub status: SeriesStatus,
    pub winner: Option<Team>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    pub fn new(series_type: SeriesType) -> Self {
        MatchRecord {
            match_id: nanoid!(),
            series_type,
            status: SeriesStatus::Ongoing,
            winner: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

/// One game's result within a stored match.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GameRecord {
    pub match_id: String,
    pub game_number: u32,
    pub winner: Team,
}

/// A player's membership in a match; `won` is filled in at completion.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TeamEntry {
    pub discord_id: u64,
    pub match_id: String,
    pub team: Team,
    pub won: Option<bool>,
}

/// Rank profiles for the leaderboard: only players with at least one game,
/// best win rate first, total wins breaking ties.
pub fn rank_leaderboard(mut profiles: Vec<UserProfile>, limit: usize) -> Vec<UserProfile> {
    profiles.retain(|profile| profile.total_games > 0);
    profiles.sort_by(|a, b| {
        // Cross-multiplied win rates, so ordering needs no float compare.
        let a_rate = u64::from(a.total_wins) * u64::from(b.total_games);
        let b_rate = u64::from(b.total_wins) * u64::from(a.total_games);
        match b_rate.cmp(&a_rate) {
            Ordering::Equal => b.total_wins.cmp(&a.total_wins),
            unequal => unequal,
        }
    });
    profiles.truncate(limit);
    profiles
}
