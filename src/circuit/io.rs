//! IO terminals: directional connection points on a circuit boundary
//!
//! A terminal is a square body centered on its anchor `position`, a connector
//! line leaving the body in its [`Direction`], and a small square outlet at
//! the far end where wires attach. Everything except the anchor and the
//! direction is derived, and is recomputed in place by
//! [`IoTerminal::update_colliders`] whenever either changes.

use super::collider::{BoxCollider, Collider, LineCollider, PointCollider};
use super::direction::Direction;
use super::events::{EventDispatcher, EventId, ListenerId, TerminalEvent};
use super::named_pin::NamedPin;
use super::wire::Wire;
use crate::config::LayoutConfig;
use crate::theme;
use egui::{Color32, Pos2, Rect, Vec2};
use log::{debug, trace};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Sub-region of a terminal hit by the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalRegion {
    Outlet,
    Main,
    OutletLine,
}

/// Center of the outlet for a terminal anchored at `position`
pub fn compute_outlet_position(position: Pos2, direction: Direction, layout: &LayoutConfig) -> Pos2 {
    position + direction.vector() * layout.outlet_offset()
}

/// Smallest axis-aligned box holding body, connector line and outlet
pub fn compute_bound(position: Pos2, direction: Direction, layout: &LayoutConfig) -> Rect {
    let dir = direction.vector();
    let mut start = position - dir * (layout.body_size / 2.0);
    let mut end = position + dir * layout.outlet_extent();

    // Widen across the direction
    let half_cross = layout.cross_extent() / 2.0;
    match direction {
        Direction::Left | Direction::Right => {
            start.y -= half_cross;
            end.y += half_cross;
        }
        Direction::Top | Direction::Bottom => {
            start.x -= half_cross;
            end.x += half_cross;
        }
    }

    Rect::from_two_pos(start, end)
}

/// One connection point of a circuit boundary element
#[derive(Debug)]
pub struct IoTerminal {
    named_pin: Weak<RefCell<NamedPin>>,

    position: Pos2,
    outlet_position: Pos2,
    direction: Direction,
    color: Color32,
    layout: LayoutConfig,

    collider: BoxCollider,
    outlet_collider: BoxCollider,
    outlet_line_collider: LineCollider,
    bound: BoxCollider,

    wires: Vec<(Weak<RefCell<Wire>>, ListenerId)>,

    is_selected: bool,
    is_hovering: bool,
    is_outlet_hovering: bool,
    is_outlet_line_hovering: bool,

    dispatcher: EventDispatcher,
}

impl IoTerminal {
    /// Creates a terminal with the default layout and color
    pub fn new(named_pin: &Rc<RefCell<NamedPin>>, position: Pos2, direction: Direction) -> Self {
        let mut terminal = Self {
            named_pin: Rc::downgrade(named_pin),
            position,
            outlet_position: position,
            direction,
            color: theme::colors().terminal_default,
            layout: LayoutConfig::default(),
            collider: BoxCollider::new(position, 0.0, 0.0),
            outlet_collider: BoxCollider::new(position, 0.0, 0.0),
            outlet_line_collider: LineCollider::new(position, position, 0.0),
            bound: BoxCollider::new(position, 0.0, 0.0),
            wires: Vec::new(),
            is_selected: false,
            is_hovering: false,
            is_outlet_hovering: false,
            is_outlet_line_hovering: false,
            dispatcher: EventDispatcher::new(),
        };

        terminal.update_colliders();
        terminal.init_events();
        terminal
    }

    /// Sets the color of the terminal
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Replaces the layout and recomputes all geometry
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self.update_colliders();
        self
    }

    fn init_events(&mut self) {
        self.dispatcher.register_channel(EventId::OnMove);
        self.dispatcher.register_channel(EventId::OnOutletMove);
    }

    pub fn named_pin(&self) -> Option<Rc<RefCell<NamedPin>>> {
        self.named_pin.upgrade()
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn outlet_position(&self) -> Pos2 {
        self.outlet_position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Main body box, centered on the anchor
    pub fn collider(&self) -> &BoxCollider {
        &self.collider
    }

    pub fn outlet_collider(&self) -> &BoxCollider {
        &self.outlet_collider
    }

    pub fn outlet_line_collider(&self) -> &LineCollider {
        &self.outlet_line_collider
    }

    pub fn bound(&self) -> &BoxCollider {
        &self.bound
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Subscribe to [`EventId::OnMove`] / [`EventId::OnOutletMove`] here
    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    // Wires

    /// Records a wire as attached, along with the [`EventId::OnOutletMove`]
    /// listener that keeps it in place. The terminal never keeps it alive.
    pub fn add_wire(&mut self, wire: &Rc<RefCell<Wire>>, listener_id: ListenerId) {
        self.wires.push((Rc::downgrade(wire), listener_id));
    }

    /// Attached wires that still exist, in attachment order
    pub fn wires(&self) -> Vec<Rc<RefCell<Wire>>> {
        self.wires.iter().filter_map(|(wire, _)| wire.upgrade()).collect()
    }

    /// Forget wires that have been dropped and unsubscribe their listeners;
    /// returns how many were removed
    pub fn prune_wires(&mut self) -> usize {
        let (live, dead): (Vec<_>, Vec<_>) = std::mem::take(&mut self.wires)
            .into_iter()
            .partition(|(wire, _)| wire.strong_count() > 0);
        self.wires = live;

        for (_, listener_id) in &dead {
            self.dispatcher.unsubscribe(EventId::OnOutletMove, *listener_id);
        }
        if !dead.is_empty() {
            trace!("Pruned {} dropped wires", dead.len());
        }
        dead.len()
    }

    // Geometry

    /// Start of the connector line, offset by half the line width
    fn outlet_line_start(&self) -> Pos2 {
        self.position - Vec2::splat(self.layout.outlet_line_width / 2.0)
    }

    /// Recompute the outlet and reposition every collider and the bound
    pub fn update_colliders(&mut self) {
        self.outlet_position = compute_outlet_position(self.position, self.direction, &self.layout);

        self.outlet_collider.set_rect(Rect::from_center_size(
            self.outlet_position,
            Vec2::splat(self.layout.outlet_size),
        ));

        self.outlet_line_collider.start_position = self.outlet_line_start();
        self.outlet_line_collider.end_position = self.outlet_position;
        self.outlet_line_collider.width = self.layout.outlet_line_width;

        self.bound.set_rect(compute_bound(self.position, self.direction, &self.layout));

        self.collider.set_rect(Rect::from_center_size(
            self.position,
            Vec2::splat(self.layout.body_size),
        ));
    }

    /// Translate the anchor, then notify `OnMove` and `OnOutletMove` in that order
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
        self.update_colliders();

        debug!(
            "Terminal moved by ({:.1}, {:.1}) to ({:.1}, {:.1})",
            delta.x, delta.y, self.position.x, self.position.y
        );

        self.dispatcher.dispatch(EventId::OnMove, &TerminalEvent::Moved(delta));
        let outlet_position = self.outlet_position;
        self.dispatcher
            .dispatch(EventId::OnOutletMove, &TerminalEvent::OutletMoved(outlet_position));
    }

    /// Turn the terminal; the outlet moves, so `OnOutletMove` fires
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }

        debug!("Terminal direction changed {} -> {}", self.direction, direction);
        self.direction = direction;
        self.update_colliders();

        let outlet_position = self.outlet_position;
        self.dispatcher
            .dispatch(EventId::OnOutletMove, &TerminalEvent::OutletMoved(outlet_position));
    }

    // Hit testing

    pub fn is_colliding_outlet(&self, collider: &dyn Collider) -> bool {
        self.outlet_collider.is_colliding(collider)
    }

    pub fn is_colliding_outlet_line(&self, collider: &dyn Collider) -> bool {
        self.outlet_line_collider.is_colliding(collider)
    }

    pub fn is_colliding_main(&self, collider: &dyn Collider) -> bool {
        self.collider.is_colliding(collider)
    }

    /// Region under `point`. Outlet wins over the body, the body over the line.
    pub fn hit_test(&self, point: Pos2) -> Option<TerminalRegion> {
        let pointer = PointCollider::new(point);

        if self.is_colliding_outlet(&pointer) {
            Some(TerminalRegion::Outlet)
        } else if self.is_colliding_main(&pointer) {
            Some(TerminalRegion::Main)
        } else if self.is_colliding_outlet_line(&pointer) {
            Some(TerminalRegion::OutletLine)
        } else {
            None
        }
    }

    // Hover and selection

    /// Re-evaluate hover flags for `point`; returns whether anything was hit
    pub fn check_hover(&mut self, point: Pos2) -> bool {
        self.reset_hover();

        let Some(region) = self.hit_test(point) else {
            return false;
        };

        trace!("Terminal hover on {:?}", region);
        match region {
            TerminalRegion::Outlet => self.is_outlet_hovering = true,
            TerminalRegion::Main => self.is_hovering = true,
            TerminalRegion::OutletLine => self.is_outlet_line_hovering = true,
        }
        true
    }

    pub fn reset_hover(&mut self) {
        self.is_outlet_hovering = false;
        self.is_outlet_line_hovering = false;
        self.is_hovering = false;
    }

    /// The hovered region, if any
    pub fn hovered_region(&self) -> Option<TerminalRegion> {
        if self.is_outlet_hovering {
            Some(TerminalRegion::Outlet)
        } else if self.is_hovering {
            Some(TerminalRegion::Main)
        } else if self.is_outlet_line_hovering {
            Some(TerminalRegion::OutletLine)
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn is_outlet_hovering(&self) -> bool {
        self.is_outlet_hovering
    }

    pub fn is_outlet_line_hovering(&self) -> bool {
        self.is_outlet_line_hovering
    }

    /// Select if `point` touches any part of the terminal. A miss keeps the
    /// current selection; only [`IoTerminal::deselect`] clears it.
    pub fn select(&mut self, point: Pos2) {
        let pointer = PointCollider::new(point);

        if self.is_colliding_main(&pointer)
            || self.is_colliding_outlet(&pointer)
            || self.is_colliding_outlet_line(&pointer)
        {
            self.is_selected = true;
        }
    }

    pub fn deselect(&mut self) {
        self.is_selected = false;
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }
}
