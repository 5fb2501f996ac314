//! Data structures for the baba organizer: players, teams, queue, court state.

mod court;
mod player;
mod session;
mod team;

pub use court::{ConfirmedPlayer, Court, CourtConfig, CourtError, CourtId, MatchSummary};
pub use player::{Player, PlayerId, Position};
pub use session::{MatchSession, SessionState, Side};
pub use team::{MatchOutcome, QueueSnapshot, RotationQueue, Team, TeamId};
