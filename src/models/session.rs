//! MatchSession: clock, score, and termination for one contest.

use crate::models::court::CourtError;
use crate::models::team::MatchOutcome;
use serde::{Deserialize, Serialize};

/// Lifecycle of a single contest between the queue's front pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Pending,
    InProgress,
    Finished,
}

/// Which of the two active teams a goal is recorded for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// One active contest. Owns score and clock for exactly one match; the
/// terminal outcome is handed back to the rotation queue and the session
/// discarded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSession {
    pub score_a: u32,
    pub score_b: u32,
    /// Remaining countdown time in seconds.
    pub clock_seconds: u32,
    /// Whether the clock is actively decrementing (pause/resume).
    pub running: bool,
    pub state: SessionState,
    /// Golden goal: reaching this score ends the match immediately,
    /// overriding the clock. `None` means clock-only termination.
    pub goal_limit: Option<u32>,
}

impl MatchSession {
    /// A fresh session awaiting `start`.
    pub fn new(goal_limit: Option<u32>) -> Self {
        Self {
            score_a: 0,
            score_b: 0,
            clock_seconds: 0,
            running: false,
            state: SessionState::Pending,
            goal_limit,
        }
    }

    /// Start the contest: Pending -> InProgress with a full clock.
    pub fn start(&mut self, duration_seconds: u32) -> Result<(), CourtError> {
        if self.state != SessionState::Pending {
            return Err(CourtError::InvalidState);
        }
        self.score_a = 0;
        self.score_b = 0;
        self.clock_seconds = duration_seconds;
        self.running = true;
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Pause or resume the clock. Only valid while in progress.
    pub fn toggle_clock(&mut self) -> Result<(), CourtError> {
        if self.state != SessionState::InProgress {
            return Err(CourtError::InvalidState);
        }
        self.running = !self.running;
        Ok(())
    }

    /// Advance the one-second scheduling tick. Decrements the clock while
    /// running; hitting zero finishes the match in whatever score state it
    /// holds (a full-duration tie is a valid outcome). Ticking a paused or
    /// finished session changes nothing.
    pub fn tick(&mut self) {
        if self.state != SessionState::InProgress || !self.running {
            return;
        }
        if self.clock_seconds > 0 {
            self.clock_seconds -= 1;
        }
        if self.clock_seconds == 0 {
            self.finish();
        }
    }

    /// Adjust one side's score by `delta` (+1 typical, -1 to correct a
    /// misentry; clamped at 0). With a goal limit configured, reaching it
    /// ends the match immediately.
    pub fn record_goal(&mut self, side: Side, delta: i32) -> Result<(), CourtError> {
        if self.state != SessionState::InProgress {
            return Err(CourtError::InvalidState);
        }
        let score = match side {
            Side::A => &mut self.score_a,
            Side::B => &mut self.score_b,
        };
        *score = score.saturating_add_signed(delta);
        if let Some(limit) = self.goal_limit {
            if self.score_a >= limit || self.score_b >= limit {
                self.finish();
            }
        }
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Win/loss/draw per the current scores.
    pub fn outcome(&self) -> MatchOutcome {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => MatchOutcome::WinA,
            std::cmp::Ordering::Less => MatchOutcome::WinB,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        self.running = false;
    }
}
