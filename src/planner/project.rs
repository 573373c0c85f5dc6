use std::{fs::File, io::BufReader};

use serde::{Deserialize, Serialize};

use crate::{
    network::Network,
    planner::{explore_all, CandidateRoad, Exploration},
    util::Result,
};

/// A road-building project: the base network, the catalog of candidate roads,
/// and how many of them may be built.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Project {
    pub network: Network,
    #[serde(default)]
    pub candidates: Vec<CandidateRoad>,
    #[serde(default)]
    pub budget: usize,
}

impl Project {
    pub fn from_file(filename: &str) -> Result<Self> {
        log::debug!("Deserializing project from {filename}");
        let file = File::open(filename)?;
        let reader = BufReader::new(file);
        let project: Project = serde_json::from_reader(reader)?;
        project.network.validate()?;
        Ok(project)
    }

    pub fn save(&self, filename: &str) -> Result<()> {
        let json_str = serde_json::to_string(self)?;
        log::debug!("Writing\n{json_str}\nto {filename}");
        std::fs::write(filename, json_str)?;
        Ok(())
    }

    pub fn explore(&self) -> Result<Exploration> {
        explore_all(&self.network, &self.candidates, self.budget)
    }

    /// The bundled example: a 12-vertex road network with three proposed
    /// roads, of which two can be built.
    pub fn example() -> Self {
        let edges = [
            (0, 1, 34),
            (0, 3, 4),
            (0, 2, 11),
            (1, 3, 18),
            (1, 2, 15),
            (2, 1, 12),
            (2, 4, 6),
            (2, 5, 10),
            (3, 4, 24),
            (4, 5, 10),
            (4, 6, 22),
            (5, 3, 8),
            (5, 7, 24),
            (6, 8, 16),
            (7, 8, 9),
            (7, 10, 38),
            (8, 7, 13),
            (8, 9, 31),
            (9, 10, 3),
            (9, 11, 17),
            (10, 9, 7),
            (10, 11, 28),
        ];

        let mut network = Network::new(12).expect("example network size is fixed");
        for (s, t, capacity) in edges {
            network
                .set_capacity(s, t, capacity)
                .expect("example edges are in range");
        }

        Project {
            network,
            candidates: vec![
                CandidateRoad::new(5, 8, 8),
                CandidateRoad::new(2, 7, 5),
                CandidateRoad::new(4, 8, 9),
            ],
            budget: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_is_valid() {
        let project = Project::example();
        assert!(project.network.validate().is_ok());
        assert_eq!(0, project.network.source().unwrap());
        assert_eq!(11, project.network.sink().unwrap());
    }

    #[test]
    fn test_example_candidates_absent_from_base_network() {
        let project = Project::example();
        assert!(project
            .candidates
            .iter()
            .all(|road| project.network.capacity(road.s, road.t) == 0));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let project = Project::example();
        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }

    #[test]
    fn test_candidates_and_budget_default_to_empty() {
        let json = r#"{"network": {"capacities": [[0, 3], [0, 0]]}}"#;
        let parsed: Project = serde_json::from_str(json).unwrap();
        assert!(parsed.candidates.is_empty());
        assert_eq!(0, parsed.budget);
    }
}
