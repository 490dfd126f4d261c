use serde::Serialize;
use smallbitset::Set64;

/// Number of candidate swimmers
pub const NB_SWIMMERS: usize = 5;
/// Number of legs in the relay
pub const NB_LEGS: usize = 4;
/// Position of the assignment holding the swimmer who sits out
pub const EXCLUDED_SLOT: usize = NB_LEGS;

/// The times of every swimmer on every leg, in seconds. A `None` entry means
/// the swimmer has no usable time for that leg.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeMatrix {
    times: [[Option<f64>; NB_SWIMMERS]; NB_LEGS],
}

impl TimeMatrix {
    /// Builds the matrix from one row of leg times per swimmer.
    pub fn from_swimmer_rows(rows: [[Option<f64>; NB_LEGS]; NB_SWIMMERS]) -> Self {
        let mut times = [[None; NB_SWIMMERS]; NB_LEGS];
        for (swimmer, row) in rows.iter().enumerate() {
            for (leg, time) in row.iter().enumerate() {
                times[leg][swimmer] = *time;
            }
        }
        TimeMatrix { times }
    }

    pub fn get(&self, leg: usize, swimmer: usize) -> Option<f64> {
        self.times[leg][swimmer]
    }
}

/// A lineup: the swimmer of each leg followed by the swimmer who sits out.
/// Always a permutation of `0..NB_SWIMMERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Assignment([usize; NB_SWIMMERS]);

impl Assignment {
    /// Returns `None` unless every swimmer appears exactly once.
    pub fn new(slots: [usize; NB_SWIMMERS]) -> Option<Self> {
        let mut seen = Set64::default();
        for &swimmer in slots.iter() {
            if swimmer >= NB_SWIMMERS {
                return None;
            }
            seen.add_inplace(swimmer);
        }

        if seen.len() == NB_SWIMMERS {
            Some(Assignment(slots))
        } else {
            None
        }
    }

    pub fn legs(&self) -> &[usize] {
        &self.0[..NB_LEGS]
    }

    pub fn excluded(&self) -> usize {
        self.0[EXCLUDED_SLOT]
    }

    pub fn slots(&self) -> &[usize; NB_SWIMMERS] {
        &self.0
    }
}

/// A valid lineup together with its total race time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedLineup {
    pub total_seconds: f64,
    pub assignment: Assignment,
}
