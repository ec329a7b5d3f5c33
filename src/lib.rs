//! Building blocks for Discord bots that run 10-player in-house lobbies.
//!
//! The crate covers the parts of a lobby that are awkward to get right in
//! the middle of a command handler: forming two teams of five (uniformly at
//! random, balanced by role, or through a captain snake-draft seeded by a
//! rock-paper-scissors tiebreak), tracking best-of-3/best-of-5 series game
//! by game, and keeping cumulative win/loss records behind a storage trait.
//!
//! Nothing here talks to Discord directly. Sessions hand out plain data
//! (rosters, pools, scores) for the caller to render, and accept user
//! actions back through their public methods. Randomized operations take an
//! injected [`rand::Rng`] so behavior is reproducible under test.

pub mod db;
pub mod draft;
pub mod error;
pub mod player;
pub mod registry;
pub mod series;
pub mod team;
pub mod tiebreak;

pub use error::InhouseError;
pub use player::{Participant, Participants};
pub use team::{Team, TeamAssignment};
