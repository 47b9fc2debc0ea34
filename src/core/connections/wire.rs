use crate::core::types::{ComponentId, WireId};

/// Normalized endpoints of an accepted connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSpec {
    pub source_component_id: ComponentId,
    pub source_port_index: usize,
    pub target_component_id: ComponentId,
    pub target_port_index: usize,
}

/// A directed connection from one output slot to one input slot
#[derive(Debug, Clone)]
pub struct Wire {
    id: WireId,
    spec: WireSpec,
    /// Value carried during the most recent propagate phase. Render-only.
    pub(crate) last_signal: bool,
}

impl Wire {
    pub(crate) fn new(id: WireId, spec: WireSpec) -> Self {
        Self {
            id,
            spec,
            last_signal: false,
        }
    }

    pub fn id(&self) -> WireId {
        self.id
    }

    pub fn source_component_id(&self) -> ComponentId {
        self.spec.source_component_id
    }

    pub fn source_port_index(&self) -> usize {
        self.spec.source_port_index
    }

    pub fn target_component_id(&self) -> ComponentId {
        self.spec.target_component_id
    }

    pub fn target_port_index(&self) -> usize {
        self.spec.target_port_index
    }

    pub fn last_signal(&self) -> bool {
        self.last_signal
    }

    /// Check if either endpoint sits on the given component
    pub fn touches(&self, component_id: ComponentId) -> bool {
        self.spec.source_component_id == component_id || self.spec.target_component_id == component_id
    }
}
