use super::kind::Kind;
use crate::core::types::ComponentId;

/// A placed gate, source or sink
#[derive(Debug, Clone)]
pub struct Component {
    id: ComponentId,
    kind: Kind,
    /// One slot per input port, rewritten every tick
    pub(crate) input_states: Vec<bool>,
    /// Result of the most recent evaluate phase
    pub(crate) output_state: bool,
    /// Held/latched state of SWITCH and BUTTON
    pub(crate) toggle_state: bool,
    /// BULB display flag
    pub(crate) lit: bool,
}

impl Component {
    pub(crate) fn new(id: ComponentId, kind: Kind, toggle_state: bool) -> Self {
        let toggle_state = kind.is_source() && toggle_state;
        Self {
            id,
            kind,
            input_states: vec![false; kind.input_arity()],
            output_state: toggle_state,
            toggle_state,
            lit: false,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn input_states(&self) -> &[bool] {
        &self.input_states
    }

    pub fn output_state(&self) -> bool {
        self.output_state
    }

    pub fn toggle_state(&self) -> bool {
        self.toggle_state
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Latch a new toggle state on a source.
    ///
    /// A source has no inputs, so its output is the toggle state itself and
    /// is visible to the very next propagate phase.
    pub(crate) fn set_toggle_state(&mut self, pressed: bool) {
        self.toggle_state = pressed;
        self.output_state = pressed;
    }

    /// Drive every input slot low
    pub(crate) fn reset_inputs(&mut self) {
        self.input_states.iter_mut().for_each(|slot| *slot = false);
    }

    /// Recompute the output from the current inputs
    pub(crate) fn evaluate(&mut self) {
        match self.kind.evaluate(&self.input_states, self.toggle_state) {
            Some(out) => self.output_state = out,
            // sinks mirror their single input into the display flag
            None => self.lit = self.input_states.first().copied().unwrap_or(false),
        }
    }
}
