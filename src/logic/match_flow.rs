//! Match lifecycle: start, clock, goals, and applying the outcome to the
//! rotation queue.

use crate::models::{Court, CourtError, MatchSession, MatchSummary, Side};

/// Start the next match between the queue's front pair.
///
/// Requires no match in progress (`InvalidState`) and at least two queued
/// teams (`QueueExhausted` -> redraw required). Both contestants' scoreboards
/// reset to 0; the clock starts running at the configured duration.
pub fn start_match(court: &mut Court) -> Result<(), CourtError> {
    if court.session.is_some() {
        return Err(CourtError::InvalidState);
    }
    if court.queue.is_exhausted() {
        return Err(CourtError::QueueExhausted);
    }
    for team in court.queue.teams.iter_mut().take(2) {
        team.score = 0;
    }
    let mut session = MatchSession::new(court.config.goal_limit);
    session.start(court.config.match_duration_seconds)?;
    court.session = Some(session);
    Ok(())
}

/// Pause or resume the active match's clock.
pub fn toggle_clock(court: &mut Court) -> Result<(), CourtError> {
    match court.session.as_mut() {
        Some(session) => session.toggle_clock(),
        None => Err(CourtError::InvalidState),
    }
}

/// Drive the one-second scheduling tick. A tick with no active match is a
/// no-op; a tick that exhausts the clock settles the match.
pub fn tick(court: &mut Court) {
    if let Some(session) = court.session.as_mut() {
        session.tick();
        settle_if_finished(court);
    }
}

/// Record a goal (or correct one with a negative delta) for the given side.
/// If a golden-goal limit is configured and reached, the match settles
/// immediately.
pub fn record_goal(court: &mut Court, side: Side, delta: i32) -> Result<(), CourtError> {
    let session = court.session.as_mut().ok_or(CourtError::InvalidState)?;
    session.record_goal(side, delta)?;
    settle_if_finished(court);
    Ok(())
}

/// Apply a finished session to the queue: write the final scores onto the two
/// contesting teams, keep a summary, rotate per the outcome, and discard the
/// session. Queue length is unchanged by rotation.
fn settle_if_finished(court: &mut Court) {
    let finished = matches!(court.session.as_ref(), Some(s) if s.is_finished());
    if !finished {
        return;
    }
    let Some(session) = court.session.take() else {
        return;
    };
    let outcome = session.outcome();
    if let [a, b, ..] = court.queue.teams.as_mut_slice() {
        a.score = session.score_a;
        b.score = session.score_b;
        court.last_result = Some(MatchSummary {
            team_a: a.name.clone(),
            team_b: b.name.clone(),
            score_a: session.score_a,
            score_b: session.score_b,
            outcome,
        });
    }
    court.queue.rotate(outcome);
}
