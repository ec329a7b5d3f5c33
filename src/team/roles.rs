use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use thiserror::Error;

use super::{split::TEAM_SIZE, TeamAssignment};
use crate::player::Participant;

/// The five positions of a standard 5v5 lobby.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; TEAM_SIZE] = [
        Role::Top,
        Role::Jungle,
        Role::Mid,
        Role::Adc,
        Role::Support,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Adc => "ADC",
            Role::Support => "Support",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("need exactly 2 players for {0}")]
    IncompleteRole(Role),
}

/// Role-balanced team generation: every role must have signed up exactly
/// two players, and an independent coin flip per role decides which of the
/// pair lands on blue. Each side ends up with one player in every role.
pub fn role_teams(
    assignments: &HashMap<Role, Vec<Participant>>,
    rng: &mut impl Rng,
) -> Result<TeamAssignment, BalanceError> {
    let mut blue = Vec::with_capacity(TEAM_SIZE);
    let mut red = Vec::with_capacity(TEAM_SIZE);

    for role in Role::ALL {
        let pair = assignments
            .get(&role)
            .filter(|players| players.len() == 2)
            .ok_or(BalanceError::IncompleteRole(role))?;

        if rng.gen::<bool>() {
            blue.push(pair[0].clone());
            red.push(pair[1].clone());
        } else {
            blue.push(pair[1].clone());
            red.push(pair[0].clone());
        }
    }

    Ok(TeamAssignment { blue, red })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use serenity::model::id::UserId;
    use std::collections::HashSet;

    fn signups() -> HashMap<Role, Vec<Participant>> {
        Role::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| {
                let first = 2 * i as u64 + 1;
                let pair = vec![
                    Participant::new(UserId::new(first), format!("player{first}")),
                    Participant::new(UserId::new(first + 1), format!("player{}", first + 1)),
                ];
                (*role, pair)
            })
            .collect()
    }

    #[test]
    fn one_player_per_role_per_side() {
        let assignments = signups();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let teams = role_teams(&assignments, &mut rng).unwrap();

            assert_eq!(teams.blue.len(), TEAM_SIZE);
            assert_eq!(teams.red.len(), TEAM_SIZE);

            // Slot i of each roster is the pair signed up for role i.
            for (i, role) in Role::ALL.iter().enumerate() {
                let pair: HashSet<UserId> =
                    assignments[role].iter().map(Participant::user_id).collect();
                let placed: HashSet<UserId> =
                    [teams.blue[i].user_id(), teams.red[i].user_id()].into();
                assert_eq!(pair, placed, "role {role} split across both sides");
            }
        }
    }

    #[test]
    fn rejects_missing_role() {
        let mut assignments = signups();
        assignments.remove(&Role::Jungle);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            role_teams(&assignments, &mut rng),
            Err(BalanceError::IncompleteRole(Role::Jungle))
        ));
    }

    #[test]
    fn rejects_role_without_two_players() {
        let mut assignments = signups();
        assignments
            .get_mut(&Role::Support)
            .unwrap()
            .push(Participant::new(UserId::new(99), "third wheel"));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            role_teams(&assignments, &mut rng),
            Err(BalanceError::IncompleteRole(Role::Support))
        ));
    }
}
