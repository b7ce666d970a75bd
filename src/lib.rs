//! logic-canvas library
//!
//! Canvas entities for a logic-circuit diagram editor: directional IO
//! terminals with derived geometry, hit-testing, hover/selection state and
//! move notifications, plus the wires that follow them.

pub mod circuit;
pub mod config;
pub mod constants;
pub mod editor;
pub mod theme;

// Re-export commonly used types
pub use circuit::{Direction, EventId, IoTerminal, NamedPin, TerminalEvent, TerminalRegion, Wire};
pub use config::LayoutConfig;
pub use editor::{CanvasEditor, TerminalRenderer};
