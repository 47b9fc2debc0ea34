pub mod connection_validator;
pub mod port_validator;
pub mod wire;

pub use connection_validator::ConnectionValidator;
pub use port_validator::PortValidator;
pub use wire::{Wire, WireSpec};
