//! Baba organizer web app: library with models and the team-draw /
//! rotation engine.

pub mod logic;
pub mod models;

pub use logic::{generate_teams, record_goal, start_match, tick, toggle_clock};
pub use models::{
    ConfirmedPlayer, Court, CourtConfig, CourtError, CourtId, MatchOutcome, MatchSession,
    MatchSummary, Player, PlayerId, Position, QueueSnapshot, RotationQueue, SessionState, Side,
    Team, TeamId,
};
