pub mod circuit;
pub mod components;
pub mod connections;
pub mod error;
pub mod execution;
pub mod state;
pub mod types;

pub use circuit::{Circuit, CircuitStats};
pub use execution::Simulator;

#[cfg(test)]
mod tests;
