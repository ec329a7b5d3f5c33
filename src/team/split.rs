use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use serenity::model::id::UserId;
use thiserror::Error;
use tracing::debug;

use super::TeamAssignment;
use crate::player::Participant;

/// Players needed before any split can run.
pub const LOBBY_SIZE: usize = 10;
/// Players per side after a split.
pub const TEAM_SIZE: usize = 5;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("need exactly {LOBBY_SIZE} players, got {0}")]
    WrongPlayerCount(usize),
    #[error("<@{0}> appears more than once")]
    DuplicatePlayer(UserId),
}

/// Completely random team generation: one unbiased shuffle of the lobby,
/// first five players to blue, the rest to red.
///
/// The caller supplies the [`Rng`] so outcomes can be pinned in tests.
pub fn random_teams(
    players: &[Participant],
    rng: &mut impl Rng,
) -> Result<TeamAssignment, SplitError> {
    if players.len() != LOBBY_SIZE {
        return Err(SplitError::WrongPlayerCount(players.len()));
    }
    if let Some(repeat) = players.iter().map(Participant::user_id).duplicates().next() {
        return Err(SplitError::DuplicatePlayer(repeat));
    }

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);
    let red = shuffled.split_off(TEAM_SIZE);
    debug!(blue = shuffled.len(), red = red.len(), "random split done");
    Ok(TeamAssignment {
        blue: shuffled,
        red,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn lobby(count: usize) -> Vec<Participant> {
        (1..=count as u64)
            .map(|n| Participant::new(UserId::new(n), format!("player{n}")))
            .collect()
    }

    #[test]
    fn split_partitions_the_lobby() {
        let players = lobby(10);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let teams = random_teams(&players, &mut rng).unwrap();

            assert_eq!(teams.blue.len(), TEAM_SIZE);
            assert_eq!(teams.red.len(), TEAM_SIZE);

            let combined: HashSet<UserId> = teams
                .blue
                .iter()
                .chain(teams.red.iter())
                .map(Participant::user_id)
                .collect();
            let original: HashSet<UserId> = players.iter().map(Participant::user_id).collect();
            assert_eq!(combined, original);
        }
    }

    #[test]
    fn rejects_wrong_player_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            random_teams(&lobby(9), &mut rng),
            Err(SplitError::WrongPlayerCount(9))
        ));
        assert!(matches!(
            random_teams(&lobby(11), &mut rng),
            Err(SplitError::WrongPlayerCount(11))
        ));
    }

    #[test]
    fn rejects_duplicate_player() {
        let mut players = lobby(9);
        players.push(Participant::new(UserId::new(4), "player4 again"));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            random_teams(&players, &mut rng),
            Err(SplitError::DuplicatePlayer(id)) if id == UserId::new(4)
        ));
    }
}
