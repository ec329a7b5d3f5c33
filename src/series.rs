use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::info;

use crate::team::Team;

/// Length of a match series.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum SeriesType {
    BestOf3,
    BestOf5,
}

impl SeriesType {
    /// Game wins required to clinch the series.
    pub fn win_threshold(self) -> u32 {
        match self {
            SeriesType::BestOf3 => 2,
            SeriesType::BestOf5 => 3,
        }
    }

    /// Most games the series can possibly run.
    pub fn max_games(self) -> u32 {
        match self {
            SeriesType::BestOf3 => 3,
            SeriesType::BestOf5 => 5,
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesType::BestOf3 => write!(f, "BO3"),
            SeriesType::BestOf5 => write!(f, "BO5"),
        }
    }
}

#[derive(Debug, Error)]
#[error("series type must be BO3 or BO5, got {0:?}")]
pub struct ParseSeriesTypeError(String);

impl FromStr for SeriesType {
    type Err = ParseSeriesTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BO3" => Ok(SeriesType::BestOf3),
            "BO5" => Ok(SeriesType::BestOf5),
            other => Err(ParseSeriesTypeError(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum SeriesStatus {
    Ongoing,
    Completed,
}

/// Outcome of a single game within a series.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct GameResult {
    pub game_number: u32,
    pub winner: Team,
}

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("this series is already completed")]
    AlreadyCompleted,
    #[error("expected game number {expected}, got {got}")]
    OutOfOrderGame { expected: u32, got: u32 },
    #[error("impossible {series_type} score: {blue_wins}-{red_wins}")]
    InvalidScore {
        series_type: SeriesType,
        blue_wins: u32,
        red_wins: u32,
    },
}

/// Successful recording of a game, with what the caller should announce.
#[derive(Debug, Eq, PartialEq)]
pub enum RecordSuccess {
    /// Series continues; current score included for display.
    Ongoing { blue_wins: u32, red_wins: u32 },
    /// This game clinched the series.
    Completed { winner: Team },
}

/// A best-of-3 or best-of-5 series between two teams.
///
/// Games are recorded one at a time, strictly in order starting at 1; the
/// series flips to [`SeriesStatus::Completed`] the moment one side reaches
/// the win threshold and accepts nothing further. The struct is plain serde
/// data, so persisting and restoring a series is a round trip through its
/// serialized form.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Series {
    series_type: SeriesType,
    games: Vec<GameResult>,
    status: SeriesStatus,
    winner: Option<Team>,
    reconstructed: bool,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Series {
            series_type,
            games: Vec::new(),
            status: SeriesStatus::Ongoing,
            winner: None,
            reconstructed: false,
        }
    }

    /// Record the result of game `game_number`.
    ///
    /// Games must arrive in order: the call is rejected with
    /// [`SeriesError::OutOfOrderGame`] unless `game_number` is exactly one
    /// past the games recorded so far, and with
    /// [`SeriesError::AlreadyCompleted`] once the series is decided. A
    /// rejected call leaves the series unchanged.
    pub fn record_game(
        &mut self,
        game_number: u32,
        winner: Team,
    ) -> Result<RecordSuccess, SeriesError> {
        if self.status == SeriesStatus::Completed {
            return Err(SeriesError::AlreadyCompleted);
        }
        let expected = self.games.len() as u32 + 1;
        if game_number != expected {
            return Err(SeriesError::OutOfOrderGame {
                expected,
                got: game_number,
            });
        }

        self.games.push(GameResult {
            game_number,
            winner,
        });

        let (blue_wins, red_wins) = self.score();
        let threshold = self.series_type.win_threshold();
        if blue_wins >= threshold || red_wins >= threshold {
            // Wins arrive one at a time, so the counts can never tie here.
            let series_winner = if blue_wins > red_wins {
                Team::Blue
            } else {
                Team::Red
            };
            self.status = SeriesStatus::Completed;
            self.winner = Some(series_winner);
            info!(series_type = %self.series_type, winner = %series_winner, "series complete");
            return Ok(RecordSuccess::Completed {
                winner: series_winner,
            });
        }

        Ok(RecordSuccess::Ongoing {
            blue_wins,
            red_wins,
        })
    }

    /// Import an already-finished series from its final score alone.
    ///
    /// The winner must hold exactly the win threshold and the loser
    /// strictly fewer. Since the true game order is unknown, blue's wins
    /// are written as games `1..=blue_wins` followed by red's; the series
    /// is flagged [`Series::is_reconstructed`] so callers never mistake the
    /// synthesized game numbers for history.
    pub fn from_final_score(
        series_type: SeriesType,
        blue_wins: u32,
        red_wins: u32,
    ) -> Result<Self, SeriesError> {
        let threshold = series_type.win_threshold();
        let (winner, winner_wins, loser_wins) = if blue_wins >= red_wins {
            (Team::Blue, blue_wins, red_wins)
        } else {
            (Team::Red, red_wins, blue_wins)
        };
        if winner_wins != threshold || loser_wins >= threshold {
            return Err(SeriesError::InvalidScore {
                series_type,
                blue_wins,
                red_wins,
            });
        }

        let games = (1..=blue_wins + red_wins)
            .map(|game_number| GameResult {
                game_number,
                winner: if game_number <= blue_wins {
                    Team::Blue
                } else {
                    Team::Red
                },
            })
            .collect();

        Ok(Series {
            series_type,
            games,
            status: SeriesStatus::Completed,
            winner: Some(winner),
            reconstructed: true,
        })
    }

    pub fn series_type(&self) -> SeriesType {
        self.series_type
    }

    pub fn games(&self) -> &[GameResult] {
        &self.games
    }

    pub fn status(&self) -> SeriesStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Whether the per-game history was synthesized by
    /// [`Series::from_final_score`] rather than recorded live.
    pub fn is_reconstructed(&self) -> bool {
        self.reconstructed
    }

    pub fn wins(&self, team: Team) -> u32 {
        self.games.iter().filter(|game| game.winner == team).count() as u32
    }

    /// Current score as (blue wins, red wins).
    pub fn score(&self) -> (u32, u32) {
        (self.wins(Team::Blue), self.wins(Team::Red))
    }
}
