use std::{error::Error, fmt::Display};

pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Debug)]
pub enum SolverError {
    NetworkIOError(std::io::Error),
    NetworkSerializationError(serde_json::Error),
    NetworkShapeError(String),

    InvalidSizeError,
    IndexOutOfRangeError { index: usize, size: usize },
    NoSourceError(usize),
    NoSinkError(usize),
    InvalidBudgetError { budget: usize, available: usize },

    PredecessorChainCorruptError,
}

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SolverError::NetworkIOError(e) => format!("Failed to read network from file: {e}."),
                SolverError::NetworkSerializationError(e) =>
                    format!("Failed to parse the network: {e}."),
                SolverError::NetworkShapeError(e) => format!("Network is invalid: {e}"),
                SolverError::InvalidSizeError =>
                    "A network must contain at least one vertex.".to_owned(),
                SolverError::IndexOutOfRangeError { index, size } =>
                    format!("Vertex {index} does not exist, the network has {size} vertices."),
                SolverError::NoSourceError(found) =>
                    format!("Expected exactly one source vertex, found {found}."),
                SolverError::NoSinkError(found) =>
                    format!("Expected exactly one sink vertex, found {found}."),
                SolverError::InvalidBudgetError { budget, available } => format!(
                    "Cannot build {budget} roads, only {available} candidates are available."
                ),
                SolverError::PredecessorChainCorruptError =>
                    "The BFS predecessor chain is corrupted.".to_owned(),
            }
        )
    }
}

impl Error for SolverError {}

impl From<serde_json::Error> for SolverError {
    fn from(value: serde_json::Error) -> Self {
        SolverError::NetworkSerializationError(value)
    }
}

impl From<std::io::Error> for SolverError {
    fn from(value: std::io::Error) -> Self {
        SolverError::NetworkIOError(value)
    }
}
