use serde::{Deserialize, Serialize};

use crate::{
    matrix::Matrix,
    util::{Result, SolverError},
};

/// A capacitated directed road network over vertices `0..n`.
///
/// A positive entry `capacities[i][j]` is a directed edge from `i` to `j` with
/// that residual capacity, zero means no edge. Negative entries only appear as
/// residual bookkeeping, either written by [`Network::mirror_reverse_edges`]
/// or by the solver pushing flow.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Network {
    pub capacities: Matrix<i64>,
}

impl Network {
    pub fn new(num_vertices: usize) -> Result<Self> {
        if num_vertices == 0 {
            return Err(SolverError::InvalidSizeError);
        }
        Ok(Network {
            capacities: Matrix::filled_with(0, num_vertices, num_vertices),
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.capacities.num_rows()
    }

    pub fn capacity(&self, s: usize, t: usize) -> i64 {
        *self.capacities.get(s, t)
    }

    pub fn set_capacity(&mut self, s: usize, t: usize, capacity: i64) -> Result<()> {
        self.check_vertex(s)?;
        self.check_vertex(t)?;
        self.capacities.set(s, t, capacity);
        Ok(())
    }

    fn check_vertex(&self, index: usize) -> Result<()> {
        if index >= self.num_vertices() {
            return Err(SolverError::IndexOutOfRangeError {
                index,
                size: self.num_vertices(),
            });
        }
        Ok(())
    }

    /// Mirrors every positive edge `(i, j)` as a negative reverse entry
    /// `capacities[j][i] = -capacities[i][j]`.
    ///
    /// Intended for networks whose reverse residual edges were not authored
    /// manually; the solver itself never calls this. The pass is live and
    /// row-major: if both `(i, j)` and `(j, i)` were authored positive, the
    /// lower-indexed edge wins and overwrites the other.
    pub fn mirror_reverse_edges(&mut self) {
        for i in 0..self.num_vertices() {
            for j in 0..self.num_vertices() {
                let capacity = self.capacity(i, j);
                if capacity > 0 {
                    self.capacities.set(j, i, -capacity);
                }
            }
        }
    }

    /// The unique vertex without positive incoming edges.
    pub fn source(&self) -> Result<usize> {
        let candidates: Vec<usize> = (0..self.num_vertices())
            .filter(|&v| (0..self.num_vertices()).all(|u| self.capacity(u, v) <= 0))
            .collect();
        match candidates.as_slice() {
            [source] => Ok(*source),
            _ => Err(SolverError::NoSourceError(candidates.len())),
        }
    }

    /// The unique vertex without positive outgoing edges.
    pub fn sink(&self) -> Result<usize> {
        let candidates: Vec<usize> = (0..self.num_vertices())
            .filter(|&v| (0..self.num_vertices()).all(|u| self.capacity(v, u) <= 0))
            .collect();
        match candidates.as_slice() {
            [sink] => Ok(*sink),
            _ => Err(SolverError::NoSinkError(candidates.len())),
        }
    }

    /// All vertices `j` with a non-zero entry `(vertex, j)`, in ascending
    /// order. Negative residual placeholders are included; forward traversal
    /// has to filter for positive capacity itself.
    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        (0..self.num_vertices())
            .filter(|&j| self.capacity(vertex, j) != 0)
            .collect()
    }

    /// Moves `amount` units of flow onto the edge `(from, to)`, lowering its
    /// residual and raising the reverse residual by the same amount.
    pub(crate) fn push_flow(&mut self, from: usize, to: usize, amount: i64) {
        let forward = self.capacity(from, to);
        self.capacities.set(from, to, forward - amount);
        let reverse = self.capacity(to, from);
        self.capacities.set(to, from, reverse + amount);
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacities.num_rows() != self.capacities.num_columns() {
            return Err(SolverError::NetworkShapeError(format!(
                "capacity matrix has shape ({}, {}), but must be quadratic",
                self.capacities.num_rows(),
                self.capacities.num_columns()
            )));
        }

        self.source()?;
        self.sink()?;

        log::info!("Network is valid.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Network {
        let mut network = Network::new(4).unwrap();
        network.set_capacity(0, 1, 10).unwrap();
        network.set_capacity(1, 2, 5).unwrap();
        network.set_capacity(0, 2, 3).unwrap();
        network.set_capacity(2, 3, 15).unwrap();
        network
    }

    #[test]
    fn test_new_rejects_empty_network() {
        assert!(matches!(
            Network::new(0),
            Err(SolverError::InvalidSizeError)
        ));
    }

    #[test]
    fn test_set_capacity_rejects_unknown_vertex() {
        let mut network = Network::new(3).unwrap();
        assert!(matches!(
            network.set_capacity(0, 3, 5),
            Err(SolverError::IndexOutOfRangeError { index: 3, size: 3 })
        ));
        assert!(matches!(
            network.set_capacity(4, 0, 5),
            Err(SolverError::IndexOutOfRangeError { index: 4, size: 3 })
        ));
    }

    #[test]
    fn test_source_and_sink() {
        let network = diamond();
        assert_eq!(0, network.source().unwrap());
        assert_eq!(3, network.sink().unwrap());
    }

    #[test]
    fn test_ambiguous_source_fails() {
        // No edges at all, so every vertex qualifies both ways.
        let network = Network::new(2).unwrap();
        assert!(matches!(network.source(), Err(SolverError::NoSourceError(2))));
        assert!(matches!(network.sink(), Err(SolverError::NoSinkError(2))));
    }

    #[test]
    fn test_missing_source_fails() {
        let mut network = Network::new(2).unwrap();
        network.set_capacity(0, 1, 1).unwrap();
        network.set_capacity(1, 0, 1).unwrap();
        assert!(matches!(network.source(), Err(SolverError::NoSourceError(0))));
    }

    #[test]
    fn test_neighbors_are_ascending_and_include_residuals() {
        let mut network = Network::new(4).unwrap();
        network.set_capacity(1, 3, 7).unwrap();
        network.set_capacity(1, 0, -2).unwrap();
        network.set_capacity(1, 2, 4).unwrap();
        assert_eq!(vec![0, 2, 3], network.neighbors(1));
    }

    #[test]
    fn test_mirror_reverse_edges() {
        let mut network = diamond();
        network.mirror_reverse_edges();
        assert_eq!(-10, network.capacity(1, 0));
        assert_eq!(-5, network.capacity(2, 1));
        assert_eq!(-3, network.capacity(2, 0));
        assert_eq!(-15, network.capacity(3, 2));
    }

    #[test]
    fn test_mirror_reverse_edges_overwrites_authored_reverse() {
        let mut network = Network::new(3).unwrap();
        network.set_capacity(0, 1, 3).unwrap();
        network.set_capacity(1, 0, 2).unwrap();
        network.mirror_reverse_edges();
        // (0, 1) is visited first and claims the reverse slot.
        assert_eq!(3, network.capacity(0, 1));
        assert_eq!(-3, network.capacity(1, 0));
    }

    #[test]
    fn test_push_flow_creates_reverse_residual() {
        let mut network = diamond();
        network.push_flow(0, 1, 4);
        assert_eq!(6, network.capacity(0, 1));
        assert_eq!(4, network.capacity(1, 0));
    }

    #[test]
    fn test_validate() {
        assert!(diamond().validate().is_ok());
        assert!(Network::new(2).unwrap().validate().is_err());
    }
}
