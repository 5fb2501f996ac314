//! Player and Position data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (stable for the lifetime of a court session).
pub type PlayerId = Uuid;

/// Where a player plays: outfield or in goal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Line,
    Goalkeeper,
}

/// A participant in the pool that feeds the team draw.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Opaque reference to a displayable avatar (e.g. a storage URL).
    #[serde(default)]
    pub avatar_ref: Option<String>,
}

impl Player {
    /// Create a new player with the given name and position, no avatar.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            avatar_ref: None,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position == Position::Goalkeeper
    }
}
