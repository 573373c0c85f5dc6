mod display;
mod eq;
mod matrix;
mod serde;

pub use matrix::Matrix;
