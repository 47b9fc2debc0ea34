use crate::core::components::Component;
use crate::core::error::RejectReason;
use log::trace;

/// Port range checks for wire endpoints
pub struct PortValidator;

impl PortValidator {
    /// Validate that a component has an output slot at `index`
    pub fn validate_source_port(component: &Component, index: usize) -> Result<(), RejectReason> {
        let arity = component.kind().output_arity();
        if index >= arity {
            trace!(
                "Output port {} not found on {} ({} has {} outputs)",
                index,
                component.id(),
                component.kind(),
                arity
            );
            return Err(RejectReason::PortOutOfRange);
        }
        Ok(())
    }

    /// Validate that a component has an input slot at `index`
    pub fn validate_target_port(component: &Component, index: usize) -> Result<(), RejectReason> {
        let arity = component.kind().input_arity();
        if index >= arity {
            trace!(
                "Input port {} not found on {} ({} has {} inputs)",
                index,
                component.id(),
                component.kind(),
                arity
            );
            return Err(RejectReason::PortOutOfRange);
        }
        Ok(())
    }
}
