//! Canvas editor - owns terminals and wires and routes pointer input to them

pub mod terminal_rendering;

pub use terminal_rendering::TerminalRenderer;

use crate::circuit::{Direction, IoTerminal, NamedPin, Wire, WireEnd};
use crate::config::LayoutConfig;
use egui::{Painter, Pos2, Vec2};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Index of a terminal inside a [`CanvasEditor`]
pub type TerminalId = usize;

/// Owns every canvas entity; terminals and wires only reference each other
#[derive(Debug)]
pub struct CanvasEditor {
    layout: LayoutConfig,
    pins: Vec<Rc<RefCell<NamedPin>>>,
    terminals: Vec<IoTerminal>,
    wires: Vec<Rc<RefCell<Wire>>>,
}

impl CanvasEditor {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            pins: Vec::new(),
            terminals: Vec::new(),
            wires: Vec::new(),
        }
    }

    /// Adds a terminal for a new named pin and returns its ID
    pub fn add_terminal(
        &mut self,
        name: impl Into<String>,
        position: Pos2,
        direction: Direction,
    ) -> TerminalId {
        let pin = Rc::new(RefCell::new(NamedPin::new(name)));
        let terminal = IoTerminal::new(&pin, position, direction).with_layout(self.layout);

        self.pins.push(pin);
        self.terminals.push(terminal);
        self.terminals.len() - 1
    }

    pub fn terminal(&self, id: TerminalId) -> Option<&IoTerminal> {
        self.terminals.get(id)
    }

    pub fn terminal_mut(&mut self, id: TerminalId) -> Option<&mut IoTerminal> {
        self.terminals.get_mut(id)
    }

    pub fn terminals(&self) -> &[IoTerminal] {
        &self.terminals
    }

    pub fn wires(&self) -> &[Rc<RefCell<Wire>>] {
        &self.wires
    }

    /// Join two terminal outlets with a wire that follows both
    pub fn connect(&mut self, from: TerminalId, to: TerminalId) -> Result<Rc<RefCell<Wire>>, String> {
        if from == to {
            return Err("Cannot connect a terminal to itself".to_string());
        }
        if from >= self.terminals.len() {
            return Err(format!("Source terminal {} does not exist", from));
        }
        if to >= self.terminals.len() {
            return Err(format!("Target terminal {} does not exist", to));
        }

        let wire = Wire::shared(Pos2::ZERO, Pos2::ZERO);
        Wire::attach(&wire, WireEnd::Start, &mut self.terminals[from]);
        Wire::attach(&wire, WireEnd::End, &mut self.terminals[to]);
        self.wires.push(Rc::clone(&wire));

        debug!("Connected terminal {} to terminal {}", from, to);
        Ok(wire)
    }

    /// Update hover state on every terminal; returns the first one hit
    pub fn pointer_moved(&mut self, point: Pos2) -> Option<TerminalId> {
        let mut hovered = None;
        for (id, terminal) in self.terminals.iter_mut().enumerate() {
            if terminal.check_hover(point) && hovered.is_none() {
                hovered = Some(id);
            }
        }
        hovered
    }

    /// Click: clear the selection, then select whatever lies under the pointer
    pub fn click(&mut self, point: Pos2) -> Vec<TerminalId> {
        for terminal in &mut self.terminals {
            terminal.deselect();
        }

        for terminal in &mut self.terminals {
            terminal.select(point);
        }

        self.selected()
    }

    pub fn selected(&self) -> Vec<TerminalId> {
        self.terminals
            .iter()
            .enumerate()
            .filter(|(_, terminal)| terminal.is_selected())
            .map(|(id, _)| id)
            .collect()
    }

    /// Move every selected terminal by `delta`
    pub fn drag_selected(&mut self, delta: Vec2) {
        for terminal in self.terminals.iter_mut().filter(|t| t.is_selected()) {
            terminal.move_by(delta);
        }
    }

    /// Paint wires underneath terminals
    pub fn render(&self, painter: &Painter, curr_time: f64, delta_time: f32) {
        for wire in &self.wires {
            TerminalRenderer::render_wire(painter, &wire.borrow());
        }
        for terminal in &self.terminals {
            TerminalRenderer::render(painter, terminal, curr_time, delta_time);
        }
    }
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
