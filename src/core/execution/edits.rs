use crate::core::circuit::Circuit;
use crate::core::components::Kind;
use crate::core::error::SimResult;
use crate::core::types::{ComponentId, PortRef, WireId};
use std::sync::mpsc::{channel, Receiver, Sender};

/// A structural or toggle edit waiting for the next tick boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Place { kind: Kind, toggle: Option<bool> },
    Delete(ComponentId),
    Connect(PortRef, PortRef),
    Disconnect(WireId),
    SetToggle(ComponentId, bool),
    Toggle(ComponentId),
}

/// What an applied edit did to the circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEffect {
    Placed(ComponentId),
    /// `false` when the component was already gone
    Deleted(bool),
    Connected(WireId),
    /// `false` when the wire was already gone
    Disconnected(bool),
    /// `false` when the component was already gone
    Toggled(bool),
}

impl Edit {
    /// Apply this edit to a circuit
    pub fn apply(&self, circuit: &mut Circuit) -> SimResult<EditEffect> {
        match *self {
            Edit::Place { kind, toggle } => Ok(EditEffect::Placed(circuit.place_component(kind, toggle))),
            Edit::Delete(id) => Ok(EditEffect::Deleted(circuit.delete_component(id))),
            Edit::Connect(a, b) => circuit.connect(a, b).map(EditEffect::Connected),
            Edit::Disconnect(id) => Ok(EditEffect::Disconnected(circuit.disconnect(id))),
            Edit::SetToggle(id, pressed) => circuit.set_toggle(id, pressed).map(EditEffect::Toggled),
            Edit::Toggle(id) => circuit.toggle(id).map(EditEffect::Toggled),
        }
    }
}

/// Result of one queued edit, reported by the tick that applied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub edit: Edit,
    pub result: SimResult<EditEffect>,
}

/// Queue of edits drained at tick boundaries
pub struct EditQueue {
    sender: Sender<Edit>,
    receiver: Receiver<Edit>,
}

impl EditQueue {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Get a handle for submitting edits, possibly from another thread
    pub fn sender(&self) -> EditSender {
        EditSender {
            sender: self.sender.clone(),
        }
    }

    /// Take every edit submitted so far, in submission order
    pub fn drain(&self) -> Vec<Edit> {
        self.receiver.try_iter().collect()
    }
}

impl Default for EditQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle that submits edits to a simulator
#[derive(Clone)]
pub struct EditSender {
    sender: Sender<Edit>,
}

impl EditSender {
    /// Submit an edit. Returns false if the simulator is gone.
    pub fn send(&self, edit: Edit) -> bool {
        self.sender.send(edit).is_ok()
    }

    pub fn place(&self, kind: Kind, toggle: Option<bool>) -> bool {
        self.send(Edit::Place { kind, toggle })
    }

    pub fn delete(&self, id: ComponentId) -> bool {
        self.send(Edit::Delete(id))
    }

    pub fn connect(&self, a: PortRef, b: PortRef) -> bool {
        self.send(Edit::Connect(a, b))
    }

    pub fn disconnect(&self, id: WireId) -> bool {
        self.send(Edit::Disconnect(id))
    }

    pub fn set_toggle(&self, id: ComponentId, pressed: bool) -> bool {
        self.send(Edit::SetToggle(id, pressed))
    }

    pub fn toggle(&self, id: ComponentId) -> bool {
        self.send(Edit::Toggle(id))
    }
}
