//! Integration tests for the team draw: sizing, goalkeeper distribution,
//! partition completeness.

use baba_court_web::{generate_teams, Court, CourtConfig, CourtError, Player, Position};
use std::collections::HashSet;

fn court_with_players(line: usize, keepers: usize, team_size: usize) -> Court {
    let mut pool: Vec<Player> =
        (0..line).map(|i| Player::new(format!("L{i}"), Position::Line)).collect();
    pool.extend((0..keepers).map(|i| Player::new(format!("G{i}"), Position::Goalkeeper)));
    let config = CourtConfig {
        team_size,
        ..CourtConfig::default()
    };
    Court::with_pool(pool, config)
}

#[test]
fn draw_requires_two_full_teams() {
    let mut c = court_with_players(7, 0, 5);
    assert_eq!(
        generate_teams(&mut c),
        Err(CourtError::InsufficientPlayers { missing: 3 })
    );
    assert!(c.queue.teams.is_empty());
}

#[test]
fn unsupported_team_size_is_rejected() {
    // A zero team size from an unchecked config must error, never divide by
    // zero in the draw
    let mut c = court_with_players(4, 0, 0);
    assert_eq!(
        generate_teams(&mut c),
        Err(CourtError::InvalidTeamSize { team_size: 0 })
    );
    assert!(c.queue.teams.is_empty());

    let mut c = court_with_players(20, 2, 7);
    assert_eq!(
        generate_teams(&mut c),
        Err(CourtError::InvalidTeamSize { team_size: 7 })
    );
}

#[test]
fn draw_size_invariant() {
    // 12 players, team size 5 -> 2 full teams, 2 left over
    let mut c = court_with_players(10, 2, 5);
    generate_teams(&mut c).unwrap();
    assert_eq!(c.queue.teams.len(), 2);
    for t in &c.queue.teams {
        assert_eq!(t.players.len(), 5);
        assert_eq!(t.score, 0);
    }
    assert_eq!(c.leftover.len(), 2);
}

#[test]
fn teams_are_named_by_draw_order() {
    let mut c = court_with_players(15, 3, 6);
    generate_teams(&mut c).unwrap();
    let names: Vec<&str> = c.queue.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Team A", "Team B", "Team C"]);
}

#[test]
fn one_goalkeeper_per_team_when_supply_fits() {
    // 3 keepers, 3 teams: every team gets exactly one
    let mut c = court_with_players(12, 3, 5);
    generate_teams(&mut c).unwrap();
    assert_eq!(c.queue.teams.len(), 3);
    for t in &c.queue.teams {
        let gk = t.players.iter().filter(|p| p.is_goalkeeper()).count();
        assert_eq!(gk, 1, "{} should have exactly one goalkeeper", t.name);
    }
}

#[test]
fn surplus_goalkeepers_fill_line_slots() {
    // 5 keepers but only 2 teams: each team one designated keeper, the other
    // 3 keepers take line slots somewhere
    let mut c = court_with_players(5, 5, 5);
    generate_teams(&mut c).unwrap();
    assert_eq!(c.queue.teams.len(), 2);
    for t in &c.queue.teams {
        let gk = t.players.iter().filter(|p| p.is_goalkeeper()).count();
        assert!(gk >= 1, "{} should have at least one goalkeeper", t.name);
    }
    let total_gk: usize = c
        .queue
        .teams
        .iter()
        .map(|t| t.players.iter().filter(|p| p.is_goalkeeper()).count())
        .sum();
    assert_eq!(total_gk, 5);
}

#[test]
fn partition_is_complete_and_disjoint() {
    let mut c = court_with_players(14, 3, 5); // 17 players -> 3 teams, 2 left over
    let pool_ids: HashSet<_> = c.pool.iter().map(|p| p.id).collect();
    generate_teams(&mut c).unwrap();

    let mut drawn_ids: Vec<_> = c
        .queue
        .teams
        .iter()
        .flat_map(|t| t.players.iter().map(|p| p.id))
        .chain(c.leftover.iter().map(|p| p.id))
        .collect();
    assert_eq!(drawn_ids.len(), pool_ids.len(), "no duplicates or omissions");
    let unique: HashSet<_> = drawn_ids.drain(..).collect();
    assert_eq!(unique, pool_ids);

    // The pool itself is untouched by the draw
    assert_eq!(c.pool.len(), 17);
}

#[test]
fn redraw_replaces_queue_and_discards_session() {
    let mut c = court_with_players(10, 2, 5);
    generate_teams(&mut c).unwrap();
    baba_court_web::start_match(&mut c).unwrap();
    assert!(c.session.is_some());

    generate_teams(&mut c).unwrap();
    assert!(c.session.is_none());
    assert_eq!(c.queue.teams.len(), 2);
}

#[test]
fn blank_player_name_is_rejected() {
    let mut c = Court::new(CourtConfig::default());
    assert_eq!(
        c.add_player("   ", Position::Line).err(),
        Some(CourtError::BlankPlayerName)
    );
    assert_eq!(c.pool_size(), 0);
    c.add_player("  Zico ", Position::Line).unwrap();
    assert_eq!(c.pool[0].name, "Zico");
}

#[test]
fn remove_absent_player_is_a_noop() {
    let mut c = Court::new(CourtConfig::default());
    c.add_player("Bebeto", Position::Line).unwrap();
    c.remove_player(uuid::Uuid::new_v4());
    assert_eq!(c.pool_size(), 1);
}
