use crate::core::components::{Component, Kind};
use crate::core::connections::Wire;
use crate::core::types::{ComponentId, WireId};
use serde::{Deserialize, Serialize};

/// Read-only view of a component for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentState {
    pub id: ComponentId,
    pub kind: Kind,
    pub input_states: Vec<bool>,
    pub output_state: bool,
    pub toggle_state: bool,
    /// BULB display flag, always false for other kinds
    pub lit: bool,
}

impl From<&Component> for ComponentState {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id(),
            kind: component.kind(),
            input_states: component.input_states().to_vec(),
            output_state: component.output_state(),
            toggle_state: component.toggle_state(),
            lit: component.is_lit(),
        }
    }
}

/// Read-only view of a wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireState {
    pub id: WireId,
    pub source: ComponentId,
    pub source_port: usize,
    pub target: ComponentId,
    pub target_port: usize,
    pub last_signal: bool,
}

impl From<&Wire> for WireState {
    fn from(wire: &Wire) -> Self {
        Self {
            id: wire.id(),
            source: wire.source_component_id(),
            source_port: wire.source_port_index(),
            target: wire.target_component_id(),
            target_port: wire.target_port_index(),
            last_signal: wire.last_signal(),
        }
    }
}

/// Every component and wire state, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitSnapshot {
    pub components: Vec<ComponentState>,
    pub wires: Vec<WireState>,
}

impl CircuitSnapshot {
    pub fn component(&self, id: ComponentId) -> Option<&ComponentState> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn wire(&self, id: WireId) -> Option<&WireState> {
        self.wires.iter().find(|w| w.id == id)
    }
}
