use serde::{Deserialize, Serialize};

/// Identifier of a component placed in a circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub(crate) u64);

impl ComponentId {
    /// Get the raw numeric value
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Create an input port handle
    pub fn input(&self, index: usize) -> PortRef {
        PortRef {
            component_id: *self,
            index,
            polarity: Polarity::Input,
        }
    }

    /// Create an output port handle
    pub fn output(&self, index: usize) -> PortRef {
        PortRef {
            component_id: *self,
            index,
            polarity: Polarity::Output,
        }
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Identifier of a wire in a circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(pub(crate) u64);

impl WireId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Direction of a port slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Receives a signal from a wire
    Input,
    /// Drives a signal onto wires
    Output,
}

impl Polarity {
    /// Check if a port of this polarity can be wired to a port of the other polarity
    pub fn can_connect_to(&self, other: &Polarity) -> bool {
        self != other
    }
}

/// Handle for a positional port on a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    pub component_id: ComponentId,
    pub index: usize,
    pub polarity: Polarity,
}

impl PortRef {
    pub fn new(component_id: ComponentId, index: usize, polarity: Polarity) -> Self {
        Self {
            component_id,
            index,
            polarity,
        }
    }

    pub fn is_input(&self) -> bool {
        self.polarity == Polarity::Input
    }
}

impl std::fmt::Display for PortRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.polarity {
            Polarity::Input => "in",
            Polarity::Output => "out",
        };
        write!(f, "{}.{}{}", self.component_id, dir, self.index)
    }
}
