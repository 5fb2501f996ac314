//! Court business logic: team draw and king-of-the-court match flow.

mod draw;
mod match_flow;

pub use draw::generate_teams;
pub use match_flow::{record_goal, start_match, tick, toggle_clock};
