mod algorithms;
mod matrix;
mod network;
mod planner;
mod util;

pub use algorithms::edmonds_karp;
pub use matrix::Matrix;
pub use network::Network;
pub use planner::{evaluate_variant, explore_all, CandidateRoad, Evaluation, Exploration, Project};
pub use util::{Result, SolverError};
