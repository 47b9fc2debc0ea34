/// Why a proposed wire was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Both endpoints are inputs, or both are outputs
    SamePolarity,
    /// Both endpoints sit on the same component
    SelfConnection,
    /// An endpoint names a component that is not in the circuit
    UnknownComponent,
    /// An endpoint index is not below the component's arity for that polarity
    PortOutOfRange,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::SamePolarity => write!(f, "both ports have the same polarity"),
            RejectReason::SelfConnection => write!(f, "a component cannot be wired to itself"),
            RejectReason::UnknownComponent => write!(f, "endpoint component does not exist"),
            RejectReason::PortOutOfRange => write!(f, "port index out of range"),
        }
    }
}

/// Error types for circuit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Unknown component kind name
    InvalidKind(String),
    /// Connection validator refused the wire
    ConnectionRejected(RejectReason),
    /// Read of a component or wire that does not exist
    NotFound(String),
    /// Operation not meaningful for this component kind
    UnsupportedOperation(String),
    /// Invalid simulation configuration
    Configuration(String),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidKind(name) => write!(f, "Invalid component kind: {}", name),
            SimError::ConnectionRejected(reason) => write!(f, "Connection rejected: {}", reason),
            SimError::NotFound(msg) => write!(f, "Not found: {}", msg),
            SimError::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
            SimError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<RejectReason> for SimError {
    fn from(reason: RejectReason) -> Self {
        SimError::ConnectionRejected(reason)
    }
}

pub type SimResult<T> = Result<T, SimError>;
