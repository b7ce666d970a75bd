//! Circuit canvas entities - terminals, wires and their hit-testing support

// Core entity modules
pub mod io;
pub mod wire;
pub mod named_pin;

// Supporting modules
pub mod collider;
pub mod direction;
pub mod events;
pub mod math_utils;

#[cfg(test)]
mod io_tests;

// Re-export core types
pub use io::{compute_bound, compute_outlet_position, IoTerminal, TerminalRegion};
pub use named_pin::NamedPin;
pub use wire::{Wire, WireEnd};

pub use collider::{BoxCollider, Collider, ColliderShape, LineCollider, PointCollider};
pub use direction::Direction;
pub use events::{EventDispatcher, EventId, ListenerId, TerminalEvent};
