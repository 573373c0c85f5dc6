use crate::{
    algorithms::augmenting_path,
    network::Network,
    util::{Result, SolverError},
};

/// Computes the maximum flow from the network's source to its sink via the
/// Edmonds-Karp algorithm.
///
/// Operates on a private clone, the caller's network is never mutated. Each
/// iteration pushes the bottleneck capacity of the shortest augmenting path
/// and mirrors it onto the reverse residual edges, until no residual-positive
/// path remains.
pub fn edmonds_karp(network: &Network) -> Result<i64> {
    let mut residual = network.clone();
    let source = residual.source()?;
    let sink = residual.sink()?;
    if source == sink {
        return Ok(0);
    }

    let mut flow = 0;
    loop {
        let (reached, predecessors) = augmenting_path(&residual, source, sink);
        if !reached {
            break;
        }

        let mut bottleneck = i64::MAX;
        let mut vertex = sink;
        while vertex != source {
            let predecessor =
                predecessors[vertex].ok_or(SolverError::PredecessorChainCorruptError)?;
            bottleneck = bottleneck.min(residual.capacity(predecessor, vertex));
            vertex = predecessor;
        }

        let mut vertex = sink;
        while vertex != source {
            let predecessor =
                predecessors[vertex].ok_or(SolverError::PredecessorChainCorruptError)?;
            residual.push_flow(predecessor, vertex, bottleneck);
            vertex = predecessor;
        }

        flow += bottleneck;
        log::debug!("Pushed {bottleneck} units, total flow is now {flow}.");
    }

    log::debug!("Maximum flow from {source} to {sink} is {flow}.");
    Ok(flow)
}
