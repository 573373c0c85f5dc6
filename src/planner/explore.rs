use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    algorithms::edmonds_karp,
    network::Network,
    planner::CandidateRoad,
    util::{Result, SolverError},
};

/// One evaluated road combination and the maximum flow it achieves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub roads: Vec<CandidateRoad>,
    pub flow: i64,
}

/// The full result of exploring all budget-sized road combinations.
#[derive(Debug, Clone)]
pub struct Exploration {
    pub baseline: i64,
    pub evaluations: Vec<Evaluation>,
}

/// Computes the maximum flow of `network` with exactly the given candidate
/// roads activated. The activation happens on a private clone, the base
/// network is left untouched.
pub fn evaluate_variant(network: &Network, roads: &[CandidateRoad]) -> Result<i64> {
    let mut variant = network.clone();
    for road in roads {
        variant.set_capacity(road.s, road.t, road.capacity)?;
    }
    edmonds_karp(&variant)
}

/// Evaluates every combination of exactly `budget` distinct candidate roads,
/// along with the baseline flow of the unmodified network.
///
/// The evaluations are independent and run on the rayon worker pool; indexed
/// collection keeps them in enumeration order, so the result is identical to
/// a serial run. Aggregation over the results only happens once all of them
/// exist.
pub fn explore_all(
    network: &Network,
    candidates: &[CandidateRoad],
    budget: usize,
) -> Result<Exploration> {
    if budget > candidates.len() {
        return Err(SolverError::InvalidBudgetError {
            budget,
            available: candidates.len(),
        });
    }

    let baseline = edmonds_karp(network)?;
    log::info!("Baseline maximum flow without new roads is {baseline}.");

    let combinations: Vec<Vec<CandidateRoad>> =
        candidates.iter().cloned().combinations(budget).collect();
    log::info!(
        "Evaluating {} road combinations of size {budget}.",
        combinations.len()
    );

    let evaluations = combinations
        .into_par_iter()
        .map(|roads| {
            let flow = evaluate_variant(network, &roads)?;
            Ok(Evaluation { roads, flow })
        })
        .collect::<Result<Vec<Evaluation>>>()?;

    Ok(Exploration {
        baseline,
        evaluations,
    })
}

impl Exploration {
    /// The highest flow achieved by any evaluated combination.
    pub fn best_flow(&self) -> Option<i64> {
        self.evaluations.iter().map(|e| e.flow).max()
    }

    /// All combinations achieving [`Exploration::best_flow`]. Ties are all
    /// reported, not just the first.
    pub fn best_combinations(&self) -> Vec<&Evaluation> {
        let Some(best) = self.best_flow() else {
            return vec![];
        };
        self.evaluations.iter().filter(|e| e.flow == best).collect()
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} achieve{} a maximum flow of {}",
            if self.roads.is_empty() {
                "no new roads".to_string()
            } else {
                self.roads.iter().map(|r| r.to_string()).join(" + ")
            },
            if self.roads.len() == 1 { "s" } else { "" },
            self.flow
        )
    }
}

impl Display for Exploration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let best = self.best_flow().unwrap_or(self.baseline);
        let mut string_repr: Vec<String> = vec![];
        string_repr.push(format!(
            "Maximum flow in the road network without building new roads: {}",
            self.baseline
        ));
        for evaluation in &self.evaluations {
            let line = evaluation.to_string();
            string_repr.push(if evaluation.flow == best {
                line.green().to_string()
            } else {
                line
            });
        }
        write!(f, "{}", string_repr.join("\n"))
    }
}
