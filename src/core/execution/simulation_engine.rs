use crate::core::circuit::Circuit;
use crate::core::components::Kind;
use crate::core::error::{SimError, SimResult};
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::edits::{EditOutcome, EditQueue, EditSender};
use crate::core::execution::tick_engine::TickEngine;
use crate::core::state::{CircuitSnapshot, ComponentState, WireState};
use crate::core::types::{ComponentId, PortRef, WireId};
use log::{debug, warn};

/// Observer trait for simulation ticks
pub trait TickObserver {
    /// Called after a tick has finished all three phases
    fn on_tick_complete(&mut self, tick: u64, circuit: &Circuit);
}

/// What happened during one call to `Simulator::tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Queued edits applied before the tick ran, in submission order
    pub applied: Vec<EditOutcome>,
}

/// Owns a circuit and drives it tick by tick
///
/// Structural edits reach the circuit either through the `&mut self`
/// methods below or through an `EditSender`; queued edits are applied at
/// the start of the next `tick`, never while a tick is running.
pub struct Simulator {
    circuit: Circuit,
    engine: TickEngine,
    edits: EditQueue,
    max_ticks: Option<u64>,
    observers: Vec<Box<dyn TickObserver>>,
}

impl Simulator {
    /// Create an empty sequential simulator
    pub fn new() -> Self {
        Self::from_parts(Circuit::new(), TickEngine::new_sequential(), None)
    }

    pub fn with_config(config: SimulationConfig) -> SimResult<Self> {
        Self::from_circuit(Circuit::new(), config)
    }

    /// Drive an already built circuit
    pub fn from_circuit(circuit: Circuit, config: SimulationConfig) -> SimResult<Self> {
        let max_ticks = config.max_ticks;
        let engine = TickEngine::new(config)?;
        Ok(Self::from_parts(circuit, engine, max_ticks))
    }

    fn from_parts(circuit: Circuit, engine: TickEngine, max_ticks: Option<u64>) -> Self {
        Self {
            circuit,
            engine,
            edits: EditQueue::new(),
            max_ticks,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) {
        self.observers.push(observer);
    }

    /// Handle for submitting edits applied at the next tick boundary
    pub fn edit_sender(&self) -> EditSender {
        self.edits.sender()
    }

    pub fn place_component(&mut self, kind: Kind, initial_toggle: Option<bool>) -> ComponentId {
        self.circuit.place_component(kind, initial_toggle)
    }

    pub fn place_component_named(
        &mut self,
        kind: &str,
        initial_toggle: Option<bool>,
    ) -> SimResult<ComponentId> {
        self.circuit.place_component_named(kind, initial_toggle)
    }

    pub fn delete_component(&mut self, id: ComponentId) -> bool {
        self.circuit.delete_component(id)
    }

    pub fn connect(&mut self, a: PortRef, b: PortRef) -> SimResult<WireId> {
        self.circuit.connect(a, b)
    }

    pub fn disconnect(&mut self, id: WireId) -> bool {
        self.circuit.disconnect(id)
    }

    pub fn set_toggle(&mut self, id: ComponentId, pressed: bool) -> SimResult<bool> {
        self.circuit.set_toggle(id, pressed)
    }

    pub fn toggle(&mut self, id: ComponentId) -> SimResult<bool> {
        self.circuit.toggle(id)
    }

    pub fn read_state(&self, id: ComponentId) -> SimResult<ComponentState> {
        self.circuit.read_state(id)
    }

    pub fn read_wire(&self, id: WireId) -> SimResult<WireState> {
        self.circuit.read_wire(id)
    }

    /// Apply queued edits, then advance the circuit by exactly one tick
    pub fn tick(&mut self) -> TickReport {
        let applied: Vec<EditOutcome> = self
            .edits
            .drain()
            .into_iter()
            .map(|edit| {
                let result = edit.apply(&mut self.circuit);
                if let Err(e) = &result {
                    warn!("Queued edit {:?} failed: {}", edit, e);
                }
                EditOutcome { edit, result }
            })
            .collect();

        self.engine.tick(&mut self.circuit);
        let tick = self.engine.current_tick();
        debug!(
            "=== Tick {} === {} components, {} wires, {} edits applied",
            tick,
            self.circuit.components().len(),
            self.circuit.wires().len(),
            applied.len()
        );

        for observer in &mut self.observers {
            observer.on_tick_complete(tick, &self.circuit);
        }

        TickReport { tick, applied }
    }

    /// Tick exactly `ticks` times, returns the final tick count
    pub fn run_for(&mut self, ticks: u64) -> u64 {
        for _ in 0..ticks {
            self.tick();
        }
        self.current_tick()
    }

    /// Tick until the configured `max_ticks`, returns the final tick count
    pub fn run(&mut self) -> SimResult<u64> {
        let max = self.max_ticks.ok_or_else(|| {
            SimError::Configuration("run() needs max_ticks; use run_for or tick instead".to_string())
        })?;
        while self.current_tick() < max {
            self.tick();
        }
        Ok(self.current_tick())
    }

    pub fn current_tick(&self) -> u64 {
        self.engine.current_tick()
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn snapshot(&self) -> CircuitSnapshot {
        self.circuit.snapshot()
    }

    pub fn config(&self) -> &SimulationConfig {
        self.engine.config()
    }

    /// Hand back the circuit, dropping any edits still queued
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
