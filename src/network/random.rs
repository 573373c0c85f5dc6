use rand::Rng;

use crate::{
    network::Network,
    util::{Result, SolverError},
};

impl Network {
    /// Generates a random network satisfying the single-source/single-sink
    /// invariant.
    ///
    /// Edges only run from lower to higher vertex indices, so vertex `0` is
    /// the source and vertex `num_vertices - 1` the sink. Every other vertex
    /// is wired up with at least one incoming and one outgoing edge.
    pub fn from_random(
        num_vertices: usize,
        arc_density: f64,
        capacity_range: (i64, i64),
    ) -> Result<Self> {
        log::debug!(
            "Randomizing network: num_vertices={num_vertices}, arc_density={arc_density}, capacity_range={capacity_range:?}."
        );
        if num_vertices < 2 {
            return Err(SolverError::InvalidSizeError);
        }

        let mut network = Network::new(num_vertices)?;
        let mut rng = rand::thread_rng();
        let (umin, umax) = capacity_range;

        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                if rng.gen_bool(arc_density) {
                    network.capacities.set(i, j, rng.gen_range(umin..=umax));
                }
            }
        }

        // Prevent unreachable vertices and dead ends
        for v in 1..num_vertices {
            if (0..v).all(|u| network.capacity(u, v) == 0) {
                let u = rng.gen_range(0..v);
                network.capacities.set(u, v, rng.gen_range(umin..=umax));
            }
        }
        for v in 0..num_vertices - 1 {
            if (v + 1..num_vertices).all(|w| network.capacity(v, w) == 0) {
                let w = rng.gen_range(v + 1..num_vertices);
                network.capacities.set(v, w, rng.gen_range(umin..=umax));
            }
        }

        network.validate()?;
        Ok(network)
    }
}
