mod display;
mod network;
mod random;

pub use network::Network;
