//! Team draw: partition the pool into balanced teams under positional
//! constraints.

use crate::models::{Court, CourtError, Player, RotationQueue, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Letter-named teams only ("Team A" .. "Team Z"); a draw never produces
/// more than this.
const MAX_TEAMS: usize = 26;

/// Draw balanced teams from the court's pool and install them as a fresh
/// rotation queue.
///
/// 1. Require a valid config (`InvalidTeamSize` otherwise) and at least
///    `team_size * 2` players (else `InsufficientPlayers` with the exact
///    shortfall).
/// 2. Split the pool into goalkeepers and line players; shuffle each
///    uniformly.
/// 3. `num_teams = pool / team_size` (capped at 26); one goalkeeper per team
///    in order, surplus goalkeepers ahead of the line players, then
///    round-robin fill to `team_size`.
/// 4. Players that don't fit stay in the pool and are reported on
///    `court.leftover` (not an error).
///
/// A successful draw replaces any previous queue and discards an active
/// session.
pub fn generate_teams(court: &mut Court) -> Result<(), CourtError> {
    court.config.validate()?;
    let team_size = court.config.team_size;
    let required = team_size * 2;
    if court.pool.len() < required {
        return Err(CourtError::InsufficientPlayers {
            missing: required - court.pool.len(),
        });
    }

    let mut rng = rand::thread_rng();
    let (teams, leftover) = partition_teams(court.pool.clone(), team_size, &mut rng);

    court.queue = RotationQueue::new(teams);
    court.leftover = leftover;
    court.session = None;
    court.last_result = None;
    Ok(())
}

/// Pure draw step: pool -> (teams, leftover). Callers have already checked
/// the two-team minimum.
fn partition_teams(
    players: Vec<Player>,
    team_size: usize,
    rng: &mut impl Rng,
) -> (Vec<Team>, Vec<Player>) {
    let total = players.len();
    let (mut keepers, mut line): (Vec<Player>, Vec<Player>) =
        players.into_iter().partition(Player::is_goalkeeper);
    keepers.shuffle(rng);
    line.shuffle(rng);

    let num_teams = (total / team_size).min(MAX_TEAMS);
    let mut rosters: Vec<Vec<Player>> = (0..num_teams)
        .map(|_| Vec::with_capacity(team_size))
        .collect();

    // One goalkeeper per team, in assignment order, until the supply runs out.
    let mut keepers = keepers.into_iter();
    for roster in rosters.iter_mut() {
        match keepers.next() {
            Some(keeper) => roster.push(keeper),
            None => break,
        }
    }

    // Surplus goalkeepers go ahead of the line players for the remaining slots.
    let mut rest: Vec<Player> = keepers.collect();
    rest.extend(line);

    // Round-robin fill until every roster is full or the pool runs dry.
    let mut rest = rest.into_iter();
    'fill: loop {
        let mut open_slots = false;
        for roster in rosters.iter_mut() {
            if roster.len() < team_size {
                match rest.next() {
                    Some(player) => roster.push(player),
                    None => break 'fill,
                }
                open_slots = true;
            }
        }
        if !open_slots {
            break;
        }
    }

    let teams = rosters
        .into_iter()
        .enumerate()
        .map(|(i, roster)| Team::new(i, roster))
        .collect();
    (teams, rest.collect())
}
