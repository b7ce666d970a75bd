//! Logical pins that terminals visualize

use serde::{Deserialize, Serialize};

/// A named circuit pin. The simulator owns its power state; terminals only
/// read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPin {
    pub name: String,
    pub power_state: bool,
}

impl NamedPin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power_state: false,
        }
    }

    pub fn with_power_state(mut self, power_state: bool) -> Self {
        self.power_state = power_state;
        self
    }
}
