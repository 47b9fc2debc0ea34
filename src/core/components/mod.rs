pub mod component;
pub mod kind;

// Re-export commonly used types
pub use component::Component;
pub use kind::Kind;
