use crate::core::components::Component;
use crate::core::connections::port_validator::PortValidator;
use crate::core::connections::wire::WireSpec;
use crate::core::error::RejectReason;
use crate::core::types::PortRef;

/// Decides whether a proposed wire between two ports may exist
///
/// Pure: it never touches the circuit. Callers resolve both endpoint
/// components and pass `None` for an id that is not in the graph.
pub struct ConnectionValidator;

impl ConnectionValidator {
    /// Validate a connection and normalize it so the output endpoint is the source.
    ///
    /// The endpoints may be given in either order. Duplicate drivers on one
    /// input are not checked here; propagation resolves them last-writer-wins.
    pub fn validate(
        a: PortRef,
        component_a: Option<&Component>,
        b: PortRef,
        component_b: Option<&Component>,
    ) -> Result<WireSpec, RejectReason> {
        let (component_a, component_b) = match (component_a, component_b) {
            (Some(ca), Some(cb)) => (ca, cb),
            _ => return Err(RejectReason::UnknownComponent),
        };

        if a.component_id == b.component_id {
            return Err(RejectReason::SelfConnection);
        }

        if !a.polarity.can_connect_to(&b.polarity) {
            return Err(RejectReason::SamePolarity);
        }

        let ((source, source_component), (target, target_component)) = if a.is_input() {
            ((b, component_b), (a, component_a))
        } else {
            ((a, component_a), (b, component_b))
        };

        PortValidator::validate_source_port(source_component, source.index)?;
        PortValidator::validate_target_port(target_component, target.index)?;

        Ok(WireSpec {
            source_component_id: source.component_id,
            source_port_index: source.index,
            target_component_id: target.component_id,
            target_port_index: target.index,
        })
    }
}
