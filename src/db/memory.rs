use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::model::{rank_leaderboard, GameRecord, MatchRecord, TeamEntry, UserProfile};
use super::store::{StatsStore, StoreError};
use crate::series::{SeriesStatus, SeriesType};
use crate::team::Team;

#[derive(Default)]
struct Tables {
    users: HashMap<u64, UserProfile>,
    // Insertion order doubles as creation order.
    matches: Vec<MatchRecord>,
    games: Vec<GameRecord>,
    entries: Vec<TeamEntry>,
}

/// In-memory [`StatsStore`] with the same row shapes and semantics as the
/// hosted datastore. Serves as the reference implementation and as the test
/// double for anything that talks to storage.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatsStore for MemoryStore {
    async fn get_or_create_user(
        &self,
        discord_id: u64,
        username: &str,
    ) -> Result<UserProfile, StoreError> {
        let mut tables = self.tables.write().await;
        let profile = tables
            .users
            .entry(discord_id)
            .or_insert_with(|| UserProfile::new(discord_id, username));
        Ok(profile.clone())
    }

    async fn get_user(&self, discord_id: u64) -> Result<Option<UserProfile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&discord_id).cloned())
    }

    async fn update_user_stats(&self, discord_id: u64, won: bool) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let profile = tables
            .users
            .get_mut(&discord_id)
            .ok_or(StoreError::UserNotFound(discord_id))?;
        profile.apply_result(won);
        Ok(())
    }

    async fn create_match(
        &self,
        series_type: SeriesType,
        blue: &[u64],
        red: &[u64],
    ) -> Result<MatchRecord, StoreError> {
        let record = MatchRecord::new(series_type);
        let mut tables = self.tables.write().await;
        for (team, ids) in [(Team::Blue, blue), (Team::Red, red)] {
            for &discord_id in ids {
                tables.entries.push(TeamEntry {
                    discord_id,
                    match_id: record.match_id.clone(),
                    team,
                    won: None,
                });
            }
        }
        tables.matches.push(record.clone());
        info!(match_id = %record.match_id, %series_type, "match created");
        Ok(record)
    }

    async fn get_match(&self, match_id: &str) -> Result<Option<MatchRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .matches
            .iter()
            .find(|record| record.match_id == match_id)
            .cloned())
    }

    async fn record_game(
        &self,
        match_id: &str,
        game_number: u32,
        winner: Team,
    ) -> Result<GameRecord, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.matches.iter().any(|r| r.match_id == match_id) {
            return Err(StoreError::MatchNotFound(match_id.to_string()));
        }
        let game = GameRecord {
            match_id: match_id.to_string(),
            game_number,
            winner,
        };
        tables.games.push(game.clone());
        Ok(game)
    }

    async fn get_match_games(&self, match_id: &str) -> Result<Vec<GameRecord>, StoreError> {
        let tables = self.tables.read().await;
        let mut games: Vec<GameRecord> = tables
            .games
            .iter()
            .filter(|game| game.match_id == match_id)
            .cloned()
            .collect();
        games.sort_by_key(|game| game.game_number);
        Ok(games)
    }

    async fn get_match_players(&self, match_id: &str) -> Result<(Vec<u64>, Vec<u64>), StoreError> {
        let tables = self.tables.read().await;
        let mut blue = Vec::new();
        let mut red = Vec::new();
        for entry in tables.entries.iter().filter(|e| e.match_id == match_id) {
            match entry.team {
                Team::Blue => blue.push(entry.discord_id),
                Team::Red => red.push(entry.discord_id),
            }
        }
        Ok((blue, red))
    }

    async fn complete_match(&self, match_id: &str, winner: Team) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let record = tables
            .matches
            .iter_mut()
            .find(|record| record.match_id == match_id)
            .ok_or_else(|| StoreError::MatchNotFound(match_id.to_string()))?;
        record.status = SeriesStatus::Completed;
        record.winner = Some(winner);
        record.completed_at = Some(Utc::now());

        let mut results = Vec::new();
        for entry in tables.entries.iter_mut().filter(|e| e.match_id == match_id) {
            let won = entry.team == winner;
            entry.won = Some(won);
            results.push((entry.discord_id, won));
        }
        for (discord_id, won) in results {
            // Players without a profile are skipped, matching the hosted
            // datastore's behavior.
            if let Some(profile) = tables.users.get_mut(&discord_id) {
                profile.apply_result(won);
            }
        }
        info!(match_id, %winner, "match completed, player stats updated");
        Ok(())
    }

    async fn leaderboard(&self, limit: usize) -> Result<Vec<UserProfile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(rank_leaderboard(
            tables.users.values().cloned().collect(),
            limit,
        ))
    }

    async fn recent_matches(&self, limit: usize) -> Result<Vec<MatchRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.matches.iter().rev().take(limit).cloned().collect())
    }

    async fn user_match_history(
        &self,
        discord_id: u64,
        limit: usize,
    ) -> Result<Vec<MatchRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .matches
            .iter()
            .rev()
            .filter(|record| {
                tables
                    .entries
                    .iter()
                    .any(|e| e.match_id == record.match_id && e.discord_id == discord_id)
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
