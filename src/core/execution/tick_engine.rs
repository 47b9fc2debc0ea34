use crate::core::circuit::Circuit;
use crate::core::components::Component;
use crate::core::connections::Wire;
use crate::core::error::{SimError, SimResult};
use crate::core::execution::config::{ConcurrencyMode, SimulationConfig};
use crate::core::types::ComponentId;
use log::{trace, warn};
use rayon::prelude::*;
use std::collections::HashMap;

/// Advances a circuit by discrete ticks
///
/// Each tick runs three phases over the whole graph, in order:
/// reset (all input slots low), propagate (wires in insertion order copy
/// the previous tick's outputs into target slots), evaluate (every
/// component recomputes its output from the slots just written).
/// A change therefore travels one wire per tick.
#[derive(Debug)]
pub struct TickEngine {
    config: SimulationConfig,
    /// Dedicated pool for Rayon mode with an explicit size
    pool: Option<rayon::ThreadPool>,
    current_tick: u64,
}

impl TickEngine {
    /// Create a tick engine with the given configuration
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        let pool = match (config.concurrency_mode, config.thread_pool_size) {
            (ConcurrencyMode::Rayon, Some(size)) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(size)
                    .build()
                    .map_err(|e| SimError::Configuration(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            config,
            pool,
            current_tick: 0,
        })
    }

    pub fn new_sequential() -> Self {
        Self {
            config: SimulationConfig::new(),
            pool: None,
            current_tick: 0,
        }
    }

    /// Run one reset, propagate, evaluate pass
    pub fn tick(&mut self, circuit: &mut Circuit) {
        self.current_tick += 1;
        let (components, wires, index) = circuit.parts_mut();

        trace!("tick {}: reset {} components", self.current_tick, components.len());
        Self::reset(components);

        trace!("tick {}: propagate {} wires", self.current_tick, wires.len());
        Self::propagate(components, wires, index);

        trace!("tick {}: evaluate", self.current_tick);
        self.evaluate(components);
    }

    fn reset(components: &mut [Component]) {
        for component in components.iter_mut() {
            component.reset_inputs();
        }
    }

    fn propagate(
        components: &mut [Component],
        wires: &mut [Wire],
        index: &HashMap<ComponentId, usize>,
    ) {
        for wire in wires.iter_mut() {
            let (Some(&source), Some(&target)) = (
                index.get(&wire.source_component_id()),
                index.get(&wire.target_component_id()),
            ) else {
                warn!("Wire {} has a dangling endpoint, skipped", wire.id());
                continue;
            };

            let signal = components[source].output_state;
            wire.last_signal = signal;
            // later wires into the same slot overwrite earlier ones
            if let Some(slot) = components[target]
                .input_states
                .get_mut(wire.target_port_index())
            {
                *slot = signal;
            }
        }
    }

    fn evaluate(&self, components: &mut [Component]) {
        match (self.config.concurrency_mode, &self.pool) {
            (ConcurrencyMode::Sequential, _) => {
                components.iter_mut().for_each(|c| c.evaluate());
            }
            (ConcurrencyMode::Rayon, Some(pool)) => {
                pool.install(|| components.par_iter_mut().for_each(|c| c.evaluate()));
            }
            (ConcurrencyMode::Rayon, None) => {
                components.par_iter_mut().for_each(|c| c.evaluate());
            }
        }
    }

    /// Number of ticks run so far
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

impl Default for TickEngine {
    fn default() -> Self {
        Self::new_sequential()
    }
}
