mod candidate;
mod explore;
mod project;

pub use candidate::CandidateRoad;
pub use explore::{evaluate_variant, explore_all, Evaluation, Exploration};
pub use project::Project;
