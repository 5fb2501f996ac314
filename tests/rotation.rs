//! Integration tests for king-of-the-court requeueing.

use baba_court_web::{MatchOutcome, RotationQueue, Team};

fn queue_of(n: usize) -> RotationQueue {
    RotationQueue::new((0..n).map(|i| Team::new(i, Vec::new())).collect())
}

fn names(queue: &RotationQueue) -> Vec<&str> {
    queue.teams.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn winner_stays_loser_to_tail() {
    let mut q = queue_of(4); // [A, B, C, D]
    q.rotate(MatchOutcome::WinA);
    assert_eq!(names(&q), vec!["Team A", "Team C", "Team D", "Team B"]);
}

#[test]
fn challenger_win_sends_holder_to_tail() {
    let mut q = queue_of(4);
    q.rotate(MatchOutcome::WinB);
    assert_eq!(names(&q), vec!["Team B", "Team C", "Team D", "Team A"]);
}

#[test]
fn draw_rotates_both_in_order() {
    let mut q = queue_of(4);
    q.rotate(MatchOutcome::Draw);
    assert_eq!(names(&q), vec!["Team C", "Team D", "Team A", "Team B"]);
}

#[test]
fn rotation_preserves_queue_length() {
    for outcome in [MatchOutcome::WinA, MatchOutcome::WinB, MatchOutcome::Draw] {
        for n in 2..6 {
            let mut q = queue_of(n);
            q.rotate(outcome);
            assert_eq!(q.teams.len(), n);
        }
    }
}

#[test]
fn two_team_queue_keeps_cycling() {
    let mut q = queue_of(2);
    q.rotate(MatchOutcome::WinB);
    assert_eq!(names(&q), vec!["Team B", "Team A"]);
    q.rotate(MatchOutcome::Draw);
    assert_eq!(names(&q), vec!["Team B", "Team A"]);
    assert!(!q.is_exhausted());
}

#[test]
fn exhausted_below_two_teams() {
    assert!(queue_of(0).is_exhausted());
    assert!(queue_of(1).is_exhausted());
    assert!(!queue_of(2).is_exhausted());
}

#[test]
fn active_pair_is_front_two() {
    let q = queue_of(3);
    let (a, b) = q.active_pair().unwrap();
    assert_eq!(a.name, "Team A");
    assert_eq!(b.name, "Team B");
    assert!(queue_of(1).active_pair().is_none());
}
