//! Team, RotationQueue, and the serializable queue snapshot.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a drawn team.
pub type TeamId = Uuid;

/// Terminal result of one contest between the queue's front pair.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The team at queue index 0 won.
    WinA,
    /// The team at queue index 1 won.
    WinB,
    Draw,
}

/// A team produced by the draw. Membership is fixed once drawn; only `score`
/// and queue position change afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Hosts may persist the minimal `{ name, players, score? }` shape;
    /// teams restored without an id get a fresh one.
    #[serde(default = "Uuid::new_v4")]
    pub id: TeamId,
    /// Display label assigned by draw order: "Team A", "Team B", ...
    pub name: String,
    pub players: Vec<Player>,
    /// Goals in the team's current (or most recent) contest.
    #[serde(default)]
    pub score: u32,
}

impl Team {
    /// Create the `index`-th team of a draw (0 -> "Team A", 1 -> "Team B", ...).
    /// Callers cap the draw at 26 teams, so the letter never wraps.
    pub fn new(index: usize, players: Vec<Player>) -> Self {
        let letter = (b'A' + index as u8) as char;
        Self {
            id: Uuid::new_v4(),
            name: format!("Team {letter}"),
            players,
            score: 0,
        }
    }
}

/// "King of the court" queue: the teams at indices 0 and 1 are the active
/// pair; everyone else is waiting. Rotation reorders teams, never creates or
/// destroys them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RotationQueue {
    pub teams: Vec<Team>,
}

impl RotationQueue {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// The two currently contesting teams, if the queue still has a pair.
    pub fn active_pair(&self) -> Option<(&Team, &Team)> {
        match self.teams.as_slice() {
            [a, b, ..] => Some((a, b)),
            _ => None,
        }
    }

    /// Fewer than two teams left: no further match can start until a redraw.
    pub fn is_exhausted(&self) -> bool {
        self.teams.len() < 2
    }

    /// Requeue after a result. Winner stays at the front, the loser goes to
    /// the tail; on a draw both front teams go to the tail in their original
    /// relative order. Callers must only invoke this while a pair is active.
    pub fn rotate(&mut self, outcome: MatchOutcome) {
        debug_assert!(self.teams.len() >= 2);
        match outcome {
            MatchOutcome::WinA => {
                let loser = self.teams.remove(1);
                self.teams.push(loser);
            }
            MatchOutcome::WinB => {
                let loser = self.teams.remove(0);
                self.teams.push(loser);
            }
            MatchOutcome::Draw => {
                let first = self.teams.remove(0);
                let second = self.teams.remove(0);
                self.teams.push(first);
                self.teams.push(second);
            }
        }
    }
}

/// The one artifact the host persists and restores: current queue order with
/// per-team scores. The engine never depends on how the host stores it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub teams: Vec<Team>,
}
