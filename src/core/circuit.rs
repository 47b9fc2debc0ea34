use crate::core::components::{Component, Kind};
use crate::core::connections::{ConnectionValidator, Wire};
use crate::core::error::{SimError, SimResult};
use crate::core::state::{CircuitSnapshot, ComponentState, WireState};
use crate::core::types::{ComponentId, PortRef, WireId};
use log::debug;
use std::collections::HashMap;

/// Owns the live components and wires of one circuit
///
/// Both collections keep insertion order; wire order decides which write
/// wins when several wires drive the same input slot. Every wire's
/// endpoints are live components of this circuit: deleting a component
/// deletes every wire touching it.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    components: Vec<Component>,
    /// Position of each component in `components`
    index: HashMap<ComponentId, usize>,
    wires: Vec<Wire>,
    next_component_id: u64,
    next_wire_id: u64,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a component of the given kind.
    ///
    /// `initial_toggle` seeds SWITCH/BUTTON state and is ignored for other kinds.
    pub fn place_component(&mut self, kind: Kind, initial_toggle: Option<bool>) -> ComponentId {
        let id = ComponentId(self.next_component_id);
        self.next_component_id += 1;

        self.index.insert(id, self.components.len());
        self.components
            .push(Component::new(id, kind, initial_toggle.unwrap_or(false)));
        debug!("Placed {} as {}", kind, id);
        id
    }

    /// Place a component by catalog name, failing with `InvalidKind` for unknown names
    pub fn place_component_named(
        &mut self,
        kind: &str,
        initial_toggle: Option<bool>,
    ) -> SimResult<ComponentId> {
        let kind: Kind = kind.parse()?;
        Ok(self.place_component(kind, initial_toggle))
    }

    /// Remove a component and every wire touching it.
    ///
    /// Returns false if the id was not present.
    pub fn delete_component(&mut self, id: ComponentId) -> bool {
        let Some(position) = self.index.remove(&id) else {
            debug!("Delete of unknown component {} ignored", id);
            return false;
        };

        self.components.remove(position);
        for (i, component) in self.components.iter().enumerate().skip(position) {
            self.index.insert(component.id(), i);
        }

        let before = self.wires.len();
        self.wires.retain(|wire| !wire.touches(id));
        debug!(
            "Deleted {} and {} attached wire(s)",
            id,
            before - self.wires.len()
        );
        true
    }

    /// Create a wire between two ports, given in either order
    pub fn connect(&mut self, a: PortRef, b: PortRef) -> SimResult<WireId> {
        let spec = ConnectionValidator::validate(
            a,
            self.component(a.component_id),
            b,
            self.component(b.component_id),
        )
        .map_err(|reason| {
            debug!("Rejected connection {} <-> {}: {}", a, b, reason);
            SimError::ConnectionRejected(reason)
        })?;

        let id = WireId(self.next_wire_id);
        self.next_wire_id += 1;
        self.wires.push(Wire::new(id, spec));
        debug!(
            "Connected {} : {}.out{} -> {}.in{}",
            id,
            spec.source_component_id,
            spec.source_port_index,
            spec.target_component_id,
            spec.target_port_index
        );
        Ok(id)
    }

    /// Remove a wire. Returns false if it was not present.
    pub fn disconnect(&mut self, id: WireId) -> bool {
        let before = self.wires.len();
        self.wires.retain(|wire| wire.id() != id);
        let removed = self.wires.len() != before;
        if removed {
            debug!("Disconnected {}", id);
        } else {
            debug!("Disconnect of unknown wire {} ignored", id);
        }
        removed
    }

    /// Set the toggle state of a SWITCH or BUTTON.
    ///
    /// A missing id is a no-op returning `Ok(false)`; any other kind is
    /// `UnsupportedOperation`.
    pub fn set_toggle(&mut self, id: ComponentId, pressed: bool) -> SimResult<bool> {
        let Some(component) = self.component_mut(id) else {
            debug!("Toggle of unknown component {} ignored", id);
            return Ok(false);
        };
        if !component.kind().is_source() {
            return Err(SimError::UnsupportedOperation(format!(
                "{} is a {} and has no toggle state",
                id,
                component.kind()
            )));
        }
        component.set_toggle_state(pressed);
        debug!("Set toggle of {} to {}", id, pressed);
        Ok(true)
    }

    /// Invert the toggle state of a SWITCH or BUTTON
    pub fn toggle(&mut self, id: ComponentId) -> SimResult<bool> {
        match self.component(id).map(|component| !component.toggle_state()) {
            Some(flipped) => self.set_toggle(id, flipped),
            None => Ok(false),
        }
    }

    pub fn read_state(&self, id: ComponentId) -> SimResult<ComponentState> {
        self.component(id)
            .map(ComponentState::from)
            .ok_or_else(|| SimError::NotFound(format!("component {}", id)))
    }

    pub fn read_wire(&self, id: WireId) -> SimResult<WireState> {
        self.wire(id)
            .map(WireState::from)
            .ok_or_else(|| SimError::NotFound(format!("wire {}", id)))
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.index.get(&id).map(|&i| &self.components[i])
    }

    fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        match self.index.get(&id) {
            Some(&i) => self.components.get_mut(i),
            None => None,
        }
    }

    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.iter().find(|wire| wire.id() == id)
    }

    pub fn has_component(&self, id: ComponentId) -> bool {
        self.index.contains_key(&id)
    }

    /// Components in insertion order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Wires in insertion order
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn component_ids(&self) -> Vec<ComponentId> {
        self.components.iter().map(Component::id).collect()
    }

    pub fn wire_ids(&self) -> Vec<WireId> {
        self.wires.iter().map(Wire::id).collect()
    }

    /// Wires whose target is the given component
    pub fn wires_into(&self, id: ComponentId) -> Vec<&Wire> {
        self.wires
            .iter()
            .filter(|wire| wire.target_component_id() == id)
            .collect()
    }

    /// Wires whose source is the given component
    pub fn wires_from(&self, id: ComponentId) -> Vec<&Wire> {
        self.wires
            .iter()
            .filter(|wire| wire.source_component_id() == id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot {
            components: self.components.iter().map(ComponentState::from).collect(),
            wires: self.wires.iter().map(WireState::from).collect(),
        }
    }

    pub fn stats(&self) -> CircuitStats {
        let mut by_kind: HashMap<Kind, usize> = HashMap::new();
        for component in &self.components {
            *by_kind.entry(component.kind()).or_insert(0) += 1;
        }
        CircuitStats {
            components: self.components.len(),
            wires: self.wires.len(),
            by_kind,
        }
    }

    /// Check graph consistency
    pub fn validate_consistency(&self) -> Result<(), String> {
        if self.index.len() != self.components.len() {
            return Err(format!(
                "Index holds {} entries for {} components",
                self.index.len(),
                self.components.len()
            ));
        }
        for (i, component) in self.components.iter().enumerate() {
            if self.index.get(&component.id()) != Some(&i) {
                return Err(format!("Component {} is not indexed at {}", component.id(), i));
            }
        }
        for wire in &self.wires {
            let source = self.component(wire.source_component_id()).ok_or_else(|| {
                format!("Wire {} references missing source {}", wire.id(), wire.source_component_id())
            })?;
            let target = self.component(wire.target_component_id()).ok_or_else(|| {
                format!("Wire {} references missing target {}", wire.id(), wire.target_component_id())
            })?;
            if wire.source_port_index() >= source.kind().output_arity()
                || wire.target_port_index() >= target.kind().input_arity()
            {
                return Err(format!("Wire {} addresses a port out of range", wire.id()));
            }
        }
        Ok(())
    }

    /// Split borrow used by the tick engine
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (&mut [Component], &mut [Wire], &HashMap<ComponentId, usize>) {
        (
            self.components.as_mut_slice(),
            self.wires.as_mut_slice(),
            &self.index,
        )
    }
}

/// Component and wire counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitStats {
    pub components: usize,
    pub wires: usize,
    pub by_kind: HashMap<Kind, usize>,
}

impl CircuitStats {
    pub fn count_of(&self, kind: Kind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
