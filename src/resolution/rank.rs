//! Enumeration and ranking of every relay lineup.
//!
//! The problem has a fixed shape (five swimmers, four legs, one swimmer
//! sitting out), so the ranker simply walks the whole space of candidate
//! assignments in lexicographic order, keeps those for which every leg has a
//! time and sorts them by total time.

use ordered_float::OrderedFloat;
use tracing::debug;

use super::model::{Assignment, RankedLineup, TimeMatrix, EXCLUDED_SLOT, NB_LEGS, NB_SWIMMERS};

/// Ranks all valid lineups of the matrix by ascending total time.
///
/// Lineups with the same total keep their lexicographic assignment order. An
/// empty vector means no lineup can be formed.
pub fn rank(matrix: &TimeMatrix) -> Vec<RankedLineup> {
    let mut explored = 0;
    let mut ranked = vec![];

    for assignment in candidates().filter_map(Assignment::new) {
        explored += 1;
        if let Some(total_seconds) = total_time(matrix, &assignment) {
            ranked.push(RankedLineup { total_seconds, assignment });
        }
    }

    ranked.sort_by_key(|lineup| OrderedFloat(lineup.total_seconds));

    debug!(explored, valid = ranked.len(), "ranked relay lineups");
    ranked
}

/// Sums the leg times of the assignment, or `None` when fewer than four of
/// its slots have a time. The excluded slot never counts.
///
/// Times are added in swimmer order. Since `encode` truncates, the order of
/// the additions can show up in the displayed total.
fn total_time(matrix: &TimeMatrix, assignment: &Assignment) -> Option<f64> {
    let mut by_swimmer = [None; NB_SWIMMERS];
    for (slot, &swimmer) in assignment.slots().iter().enumerate() {
        if slot != EXCLUDED_SLOT {
            by_swimmer[swimmer] = matrix.get(slot, swimmer);
        }
    }

    if by_swimmer.iter().flatten().count() != NB_LEGS {
        return None;
    }

    Some(by_swimmer.iter().flatten().sum())
}

/// Every tuple of `NB_SWIMMERS` swimmer indices, in lexicographic order.
fn candidates() -> impl Iterator<Item = [usize; NB_SWIMMERS]> {
    (0..NB_SWIMMERS.pow(NB_SWIMMERS as u32)).map(|mut code| {
        let mut slots = [0; NB_SWIMMERS];
        for slot in slots.iter_mut().rev() {
            *slot = code % NB_SWIMMERS;
            code /= NB_SWIMMERS;
        }
        slots
    })
}
