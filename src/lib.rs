pub mod core;

// Re-export commonly used types
pub use crate::core::circuit::Circuit;
pub use crate::core::components::{Component, Kind};
pub use crate::core::error::{RejectReason, SimError, SimResult};
pub use crate::core::execution::{ConcurrencyMode, Edit, SimulationConfig, Simulator, TickObserver};
pub use crate::core::state::{CircuitSnapshot, ComponentState, WireState};
pub use crate::core::types::{ComponentId, Polarity, PortRef, WireId};
