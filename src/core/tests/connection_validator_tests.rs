use crate::core::components::{Component, Kind};
use crate::core::connections::{ConnectionValidator, PortValidator, WireSpec};
use crate::core::error::RejectReason;
use crate::core::types::{ComponentId, PortRef};

fn component(id: u64, kind: Kind) -> Component {
    Component::new(ComponentId(id), kind, false)
}

#[test]
fn test_output_to_input_is_accepted() {
    let switch = component(0, Kind::Switch);
    let not = component(1, Kind::Not);

    let spec = ConnectionValidator::validate(
        switch.id().output(0),
        Some(&switch),
        not.id().input(0),
        Some(&not),
    )
    .expect("output to input should be accepted");

    assert_eq!(
        spec,
        WireSpec {
            source_component_id: switch.id(),
            source_port_index: 0,
            target_component_id: not.id(),
            target_port_index: 0,
        }
    );
}

#[test]
fn test_endpoints_are_normalized_regardless_of_order() {
    let and = component(0, Kind::And);
    let bulb = component(1, Kind::Bulb);

    let forward = ConnectionValidator::validate(
        and.id().output(0),
        Some(&and),
        bulb.id().input(0),
        Some(&bulb),
    )
    .unwrap();
    let reversed = ConnectionValidator::validate(
        bulb.id().input(0),
        Some(&bulb),
        and.id().output(0),
        Some(&and),
    )
    .unwrap();

    assert_eq!(forward, reversed);
    assert_eq!(reversed.source_component_id, and.id());
    assert_eq!(reversed.target_component_id, bulb.id());
}

#[test]
fn test_same_polarity_is_rejected() {
    let a = component(0, Kind::And);
    let b = component(1, Kind::Or);

    let inputs = ConnectionValidator::validate(a.id().input(0), Some(&a), b.id().input(1), Some(&b));
    assert_eq!(inputs, Err(RejectReason::SamePolarity));

    let outputs = ConnectionValidator::validate(a.id().output(0), Some(&a), b.id().output(0), Some(&b));
    assert_eq!(outputs, Err(RejectReason::SamePolarity));
}

#[test]
fn test_self_connection_is_rejected() {
    let nand = component(0, Kind::Nand);

    let result = ConnectionValidator::validate(
        nand.id().output(0),
        Some(&nand),
        nand.id().input(1),
        Some(&nand),
    );
    assert_eq!(result, Err(RejectReason::SelfConnection));
}

#[test]
fn test_unknown_component_is_rejected() {
    let not = component(0, Kind::Not);
    let ghost = PortRef::new(ComponentId(42), 0, crate::core::types::Polarity::Output);

    let result = ConnectionValidator::validate(ghost, None, not.id().input(0), Some(&not));
    assert_eq!(result, Err(RejectReason::UnknownComponent));
}

#[test]
fn test_port_out_of_range_is_rejected() {
    let switch = component(0, Kind::Switch);
    let not = component(1, Kind::Not);
    let bulb = component(2, Kind::Bulb);

    // NOT has a single input
    let result = ConnectionValidator::validate(
        switch.id().output(0),
        Some(&switch),
        not.id().input(1),
        Some(&not),
    );
    assert_eq!(result, Err(RejectReason::PortOutOfRange));

    // BULB has no outputs, so it can never be a source
    let result = ConnectionValidator::validate(
        bulb.id().output(0),
        Some(&bulb),
        not.id().input(0),
        Some(&not),
    );
    assert_eq!(result, Err(RejectReason::PortOutOfRange));

    // SWITCH has no inputs
    let result = ConnectionValidator::validate(
        not.id().output(0),
        Some(&not),
        switch.id().input(0),
        Some(&switch),
    );
    assert_eq!(result, Err(RejectReason::PortOutOfRange));
}

#[test]
fn test_port_validator_bounds() {
    let and = component(0, Kind::And);
    assert!(PortValidator::validate_target_port(&and, 0).is_ok());
    assert!(PortValidator::validate_target_port(&and, 1).is_ok());
    assert!(PortValidator::validate_target_port(&and, 2).is_err());
    assert!(PortValidator::validate_source_port(&and, 0).is_ok());
    assert!(PortValidator::validate_source_port(&and, 1).is_err());
}
