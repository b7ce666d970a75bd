//! Wires joining terminal outlets
//!
//! A wire does not own the terminals it joins. It follows them by
//! subscribing to their [`EventId::OnOutletMove`] channel.

use super::events::{EventId, ListenerId, TerminalEvent};
use super::io::IoTerminal;
use egui::Pos2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Which endpoint of a wire is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEnd {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub id: Uuid,
    pub start: Pos2,
    pub end: Pos2,
}

impl Wire {
    pub fn new(start: Pos2, end: Pos2) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
        }
    }

    /// Shared handle, the form terminals hold references to
    pub fn shared(start: Pos2, end: Pos2) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(start, end)))
    }

    pub fn endpoint(&self, end: WireEnd) -> Pos2 {
        match end {
            WireEnd::Start => self.start,
            WireEnd::End => self.end,
        }
    }

    pub fn set_endpoint(&mut self, end: WireEnd, position: Pos2) {
        match end {
            WireEnd::Start => self.start = position,
            WireEnd::End => self.end = position,
        }
    }

    /// Snap one endpoint to the terminal's outlet and keep it there as the
    /// terminal moves.
    ///
    /// The listener holds a weak reference, so dropping the wire silences it
    /// until [`IoTerminal::prune_wires`] unsubscribes it.
    /// The wire must not be borrowed while the terminal dispatches.
    pub fn attach(wire: &Rc<RefCell<Wire>>, end: WireEnd, terminal: &mut IoTerminal) -> ListenerId {
        wire.borrow_mut().set_endpoint(end, terminal.outlet_position());

        let weak: Weak<RefCell<Wire>> = Rc::downgrade(wire);
        let listener_id = terminal
            .dispatcher_mut()
            .subscribe(EventId::OnOutletMove, move |event| {
                if let (TerminalEvent::OutletMoved(position), Some(wire)) = (event, weak.upgrade()) {
                    wire.borrow_mut().set_endpoint(end, *position);
                }
            });
        terminal.add_wire(wire, listener_id);
        listener_id
    }
}
