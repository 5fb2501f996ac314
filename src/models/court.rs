//! Court: the engine aggregate (player pool, rotation queue, active session).

use crate::models::player::{Player, PlayerId, Position};
use crate::models::session::MatchSession;
use crate::models::team::{MatchOutcome, QueueSnapshot, RotationQueue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during court operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CourtError {
    /// Player name is empty after trimming.
    BlankPlayerName,
    /// Draw attempted with too few players; `missing` is the shortfall to
    /// reach two full teams.
    InsufficientPlayers { missing: usize },
    /// Configured team size is outside the supported small-sided rosters.
    InvalidTeamSize { team_size: usize },
    /// Operation invoked in a state that forbids it.
    InvalidState,
    /// Fewer than two teams queued; a redraw is required before the next match.
    QueueExhausted,
}

impl std::fmt::Display for CourtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourtError::BlankPlayerName => write!(f, "Player name cannot be blank"),
            CourtError::InsufficientPlayers { missing } => {
                write!(f, "Need {} more player(s) to draw two full teams", missing)
            }
            CourtError::InvalidTeamSize { team_size } => {
                write!(f, "Team size must be 5 or 6 (got {})", team_size)
            }
            CourtError::InvalidState => write!(f, "Invalid state for this action"),
            CourtError::QueueExhausted => {
                write!(f, "Fewer than two teams left; redraw required")
            }
        }
    }
}

/// Unique identifier for a court session.
pub type CourtId = Uuid;

/// Draw and match configuration. Small-sided rosters only (5 or 6 a side).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CourtConfig {
    #[serde(default = "default_team_size")]
    pub team_size: usize,
    #[serde(default = "default_match_duration")]
    pub match_duration_seconds: u32,
    /// Golden-goal limit for the ad-hoc variant; `None` for clock-only play.
    #[serde(default)]
    pub goal_limit: Option<u32>,
}

fn default_team_size() -> usize {
    5
}

fn default_match_duration() -> u32 {
    600
}

impl CourtConfig {
    /// Reject team sizes outside the supported 5/6-a-side rosters. Serde
    /// defaults only cover absent fields, so request bodies still need this
    /// check.
    pub fn validate(&self) -> Result<(), CourtError> {
        if !(5..=6).contains(&self.team_size) {
            return Err(CourtError::InvalidTeamSize {
                team_size: self.team_size,
            });
        }
        Ok(())
    }
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            team_size: default_team_size(),
            match_duration_seconds: default_match_duration(),
            goal_limit: None,
        }
    }
}

/// Terminal result of the most recently finished match, kept for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub team_a: String,
    pub team_b: String,
    pub score_a: u32,
    pub score_b: u32,
    pub outcome: MatchOutcome,
}

/// A confirmed-attendance entry used to seed the pool from the host's
/// presence records.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedPlayer {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub avatar_ref: Option<String>,
}

/// Full court state: pool, drawn queue, leftover players, and the active
/// match session. The host persists `snapshot()` whenever it chooses; the
/// engine itself never touches storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub config: CourtConfig,
    /// Players available to the next draw.
    pub pool: Vec<Player>,
    /// Current king-of-the-court queue (empty until a draw runs).
    pub queue: RotationQueue,
    /// Pool members not assigned in the last draw (pool did not divide
    /// evenly). They stay in the pool for the next draw.
    pub leftover: Vec<Player>,
    /// The one active contest, if any.
    pub session: Option<MatchSession>,
    /// Result of the last finished match.
    pub last_result: Option<MatchSummary>,
}

impl Court {
    /// Create a court with an empty pool and no queue.
    pub fn new(config: CourtConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            pool: Vec::new(),
            queue: RotationQueue::default(),
            leftover: Vec::new(),
            session: None,
            last_result: None,
        }
    }

    /// Create a court with an initial pool (e.g. in tests).
    pub fn with_pool(pool: Vec<Player>, config: CourtConfig) -> Self {
        Self {
            pool,
            ..Self::new(config)
        }
    }

    /// Add a player to the pool. The name is trimmed; blank names are
    /// rejected with `BlankPlayerName`.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        position: Position,
    ) -> Result<(), CourtError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CourtError::BlankPlayerName);
        }
        self.pool.push(Player::new(trimmed, position));
        Ok(())
    }

    /// Remove a player from the pool by id. Absent ids are a no-op, not an
    /// error.
    pub fn remove_player(&mut self, player_id: PlayerId) {
        self.pool.retain(|p| p.id != player_id);
        self.leftover.retain(|p| p.id != player_id);
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Replace the pool from a confirmed-attendance list (schedule-triggered
    /// draws). Every name is validated as in `add_player`; on error the pool
    /// is left unchanged.
    pub fn seed_confirmed(&mut self, entries: &[ConfirmedPlayer]) -> Result<(), CourtError> {
        let mut pool = Vec::with_capacity(entries.len());
        for entry in entries {
            let trimmed = entry.name.trim();
            if trimmed.is_empty() {
                return Err(CourtError::BlankPlayerName);
            }
            let mut player = Player::new(trimmed, entry.position);
            player.avatar_ref = entry.avatar_ref.clone();
            pool.push(player);
        }
        self.pool = pool;
        self.leftover.clear();
        Ok(())
    }

    /// Reset for a fresh draw: clears pool, queue, leftovers, and any active
    /// session.
    pub fn reset_pool(&mut self) {
        self.pool.clear();
        self.leftover.clear();
        self.queue = RotationQueue::default();
        self.session = None;
        self.last_result = None;
    }

    /// Current queue order and per-team scores, ready for the host to
    /// persist.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            teams: self.queue.teams.clone(),
        }
    }

    /// Restore a previously persisted queue. The restored order is
    /// authoritative: any in-flight session is discarded (single writer,
    /// last writer wins).
    pub fn restore_snapshot(&mut self, snapshot: QueueSnapshot) {
        self.queue = RotationQueue::new(snapshot.teams);
        self.session = None;
        self.last_result = None;
    }
}
