use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A proposed new road from `s` to `t`, absent (capacity zero) in the base
/// network.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CandidateRoad {
    pub s: usize,
    pub t: usize,
    pub capacity: i64,
}

impl CandidateRoad {
    pub fn new(s: usize, t: usize, capacity: i64) -> Self {
        CandidateRoad { s, t, capacity }
    }
}

impl Display for CandidateRoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -> {}, capacity {})", self.s, self.t, self.capacity)
    }
}
