pub mod config;
pub mod edits;
pub mod simulation_engine;
pub mod tick_engine;

// Re-export commonly used types
pub use config::{ConcurrencyMode, SimulationConfig};
pub use edits::{Edit, EditEffect, EditOutcome, EditQueue, EditSender};
pub use simulation_engine::{Simulator, TickObserver, TickReport};
pub use tick_engine::TickEngine;
