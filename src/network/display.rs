use std::fmt::Display;

use crate::network::Network;

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut string_repr: Vec<String> = vec![];
        string_repr.push("\nRoad network:".to_string());
        string_repr.push("=============".to_string());
        string_repr.push(format!("Vertices: {}", self.num_vertices()));
        string_repr.push(format!("Capacities:\n{}", self.capacities));
        write!(f, "{}", string_repr.join("\n"))
    }
}
