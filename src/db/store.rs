use async_trait::async_trait;
use thiserror::Error;

use super::model::{GameRecord, MatchRecord, UserProfile};
use crate::series::SeriesType;
use crate::team::Team;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no match found with id {0:?}")]
    MatchNotFound(String),
    #[error("no user found with discord id {0}")]
    UserNotFound(u64),
    #[error("datastore request failed: {0}")]
    Backend(String),
}

/// The narrow surface the engine needs from durable storage.
///
/// Sessions themselves live in memory; this trait only covers what outlives
/// them — user win/loss counters, match series and their games. The bot's
/// command layer wires in a client for the hosted datastore; tests and
/// single-process deployments use [`super::memory::MemoryStore`].
#[async_trait]
pub trait StatsStore {
    /// Fetch a user's profile, creating a zeroed one on first sight.
    async fn get_or_create_user(
        &self,
        discord_id: u64,
        username: &str,
    ) -> Result<UserProfile, StoreError>;

    async fn get_user(&self, discord_id: u64) -> Result<Option<UserProfile>, StoreError>;

    /// Count one more game for the user, won or lost.
    async fn update_user_stats(&self, discord_id: u64, won: bool) -> Result<(), StoreError>;

    /// Open a new match series with five players per side.
    async fn create_match(
        &self,
        series_type: SeriesType,
        blue: &[u64],
        red: &[u64],
    ) -> Result<MatchRecord, StoreError>;

    async fn get_match(&self, match_id: &str) -> Result<Option<MatchRecord>, StoreError>;

    /// Append one game's result to an existing match.
    async fn record_game(
        &self,
        match_id: &str,
        game_number: u32,
        winner: Team,
    ) -> Result<GameRecord, StoreError>;

    /// Games of a match, ordered by game number.
    async fn get_match_games(&self, match_id: &str) -> Result<Vec<GameRecord>, StoreError>;

    /// Player ids of a match, as (blue, red).
    async fn get_match_players(&self, match_id: &str) -> Result<(Vec<u64>, Vec<u64>), StoreError>;

    /// Mark the match decided and fold a win/loss into every player's
    /// cumulative record.
    async fn complete_match(&self, match_id: &str, winner: Team) -> Result<(), StoreError>;

    /// Top players by win rate; see [`super::model::rank_leaderboard`] for
    /// the exact ordering.
    async fn leaderboard(&self, limit: usize) -> Result<Vec<UserProfile>, StoreError>;

    /// Most recently created matches first.
    async fn recent_matches(&self, limit: usize) -> Result<Vec<MatchRecord>, StoreError>;

    /// Matches a user took part in, most recent first.
    async fn user_match_history(
        &self,
        discord_id: u64,
        limit: usize,
    ) -> Result<Vec<MatchRecord>, StoreError>;
}
