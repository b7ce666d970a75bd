//! Terminal geometry, hit-testing and notification tests

use super::*;
use crate::config::LayoutConfig;
use egui::{Color32, Pos2, Rect, Vec2};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

const EPSILON: f32 = 1e-2;

fn pin() -> Rc<RefCell<NamedPin>> {
    Rc::new(RefCell::new(NamedPin::new("A")))
}

fn assert_pos_eq(a: Pos2, b: Pos2) {
    assert!(
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
        "expected {:?} == {:?}",
        a,
        b
    );
}

fn encloses(outer: Rect, inner: Rect) -> bool {
    outer.expand(EPSILON).contains_rect(inner)
}

#[test]
fn test_outlet_position_for_each_direction() {
    let pin = pin();
    let layout = LayoutConfig::default();
    let k = layout.outlet_line_length + layout.body_size / 2.0 + layout.outlet_size / 2.0;
    let position = Pos2::new(120.0, -35.0);

    for direction in Direction::ALL {
        let terminal = IoTerminal::new(&pin, position, direction);
        assert_pos_eq(terminal.outlet_position(), position + direction.vector() * k);
    }
}

#[test]
fn test_right_terminal_at_origin() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);
    let layout = *terminal.layout();
    let offset = layout.body_size / 2.0 + layout.outlet_line_length + layout.outlet_size / 2.0;

    assert_eq!(terminal.outlet_position(), Pos2::new(offset, 0.0));
    assert!(terminal.outlet_position().x > 0.0);

    terminal.move_by(Vec2::new(10.0, 0.0));
    assert_eq!(terminal.position(), Pos2::new(10.0, 0.0));
    assert_eq!(terminal.outlet_position(), Pos2::new(10.0 + offset, 0.0));
}

#[test]
fn test_collider_placement() {
    let pin = pin();
    let terminal = IoTerminal::new(&pin, Pos2::new(50.0, 50.0), Direction::Bottom);
    let layout = *terminal.layout();

    assert_pos_eq(terminal.collider().center(), terminal.position());
    assert_eq!(terminal.collider().width, layout.body_size);
    assert_eq!(terminal.collider().height, layout.body_size);

    assert_pos_eq(terminal.outlet_collider().center(), terminal.outlet_position());
    assert_eq!(terminal.outlet_collider().width, layout.outlet_size);

    let line = terminal.outlet_line_collider();
    let half_width = layout.outlet_line_width / 2.0;
    assert_pos_eq(line.start_position, Pos2::new(50.0 - half_width, 50.0 - half_width));
    assert_eq!(line.end_position, terminal.outlet_position());
    assert_eq!(line.width, layout.outlet_line_width);
}

#[test]
fn test_bound_for_each_direction() {
    let pin = pin();

    // Body spans -15..15, outlet reaches 45 along the direction
    let expected = [
        (Direction::Right, Rect::from_min_max(Pos2::new(-15.0, -15.0), Pos2::new(45.0, 15.0))),
        (Direction::Left, Rect::from_min_max(Pos2::new(-45.0, -15.0), Pos2::new(15.0, 15.0))),
        (Direction::Top, Rect::from_min_max(Pos2::new(-15.0, -45.0), Pos2::new(15.0, 15.0))),
        (Direction::Bottom, Rect::from_min_max(Pos2::new(-15.0, -15.0), Pos2::new(15.0, 45.0))),
    ];

    for (direction, rect) in expected {
        let terminal = IoTerminal::new(&pin, Pos2::ZERO, direction);
        let bound = terminal.bound().rect();
        assert_pos_eq(bound.min, rect.min);
        assert_pos_eq(bound.max, rect.max);
    }
}

#[test]
fn test_bound_encloses_colliders_anywhere() {
    let pin = pin();
    let mut rng = rand::rng();

    for _ in 0..200 {
        let position = Pos2::new(
            rng.random_range(-5000.0f32..5000.0),
            rng.random_range(-5000.0f32..5000.0),
        );

        for direction in Direction::ALL {
            let terminal = IoTerminal::new(&pin, position, direction);
            let bound = terminal.bound().rect();
            assert!(encloses(bound, terminal.collider().rect()));
            assert!(encloses(bound, terminal.outlet_collider().rect()));
        }
    }
}

#[test]
fn test_bound_encloses_oversized_outlet() {
    let pin = pin();
    let layout = LayoutConfig {
        body_size: 10.0,
        outlet_size: 24.0,
        ..LayoutConfig::default()
    };

    for direction in Direction::ALL {
        let terminal = IoTerminal::new(&pin, Pos2::new(7.0, 3.0), direction).with_layout(layout);
        assert!(encloses(terminal.bound().rect(), terminal.outlet_collider().rect()));
        assert!(encloses(terminal.bound().rect(), terminal.collider().rect()));
    }
}

#[test]
fn test_move_matches_fresh_construction() {
    let pin = pin();
    let mut rng = rand::rng();

    for direction in Direction::ALL {
        let mut moved = IoTerminal::new(&pin, Pos2::new(3.0, 4.0), direction);
        for _ in 0..10 {
            moved.move_by(Vec2::new(
                rng.random_range(-100.0f32..100.0),
                rng.random_range(-100.0f32..100.0),
            ));
        }

        let fresh = IoTerminal::new(&pin, moved.position(), direction);
        assert_eq!(moved.outlet_position(), fresh.outlet_position());
        assert_eq!(moved.bound(), fresh.bound());
        assert_eq!(moved.collider(), fresh.collider());
        assert_eq!(moved.outlet_collider(), fresh.outlet_collider());
        assert_eq!(moved.outlet_line_collider(), fresh.outlet_line_collider());
    }
}

#[test]
fn test_move_events_fire_in_order_after_recompute() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Left);
    let received = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&received);
    terminal
        .dispatcher_mut()
        .subscribe(EventId::OnOutletMove, move |event| log.borrow_mut().push(*event));
    let log = Rc::clone(&received);
    terminal
        .dispatcher_mut()
        .subscribe(EventId::OnMove, move |event| log.borrow_mut().push(*event));

    let delta = Vec2::new(-4.0, 9.0);
    terminal.move_by(delta);

    assert_eq!(
        *received.borrow(),
        vec![
            TerminalEvent::Moved(delta),
            TerminalEvent::OutletMoved(terminal.outlet_position()),
        ]
    );
}

#[test]
fn test_check_hover_priority() {
    let pin = pin();
    // No gap between body and outlet, so they share the edge at x = 15
    let layout = LayoutConfig {
        body_size: 30.0,
        outlet_size: 20.0,
        outlet_line_length: 0.0,
        outlet_line_width: 4.0,
    };
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right).with_layout(layout);

    let shared_edge = Pos2::new(15.0, 0.0);
    assert!(terminal.is_colliding_main(&PointCollider::new(shared_edge)));
    assert!(terminal.is_colliding_outlet(&PointCollider::new(shared_edge)));

    assert!(terminal.check_hover(shared_edge));
    assert!(terminal.is_outlet_hovering());
    assert!(!terminal.is_hovering());
    assert!(!terminal.is_outlet_line_hovering());

    // Body and connector line overlap near the anchor; the body wins
    assert!(terminal.check_hover(Pos2::new(5.0, 0.0)));
    assert_eq!(terminal.hovered_region(), Some(TerminalRegion::Main));
    assert!(!terminal.is_outlet_hovering());
}

#[test]
fn test_check_hover_regions_with_default_layout() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);

    assert!(terminal.check_hover(Pos2::new(40.0, 0.0)));
    assert_eq!(terminal.hovered_region(), Some(TerminalRegion::Outlet));

    assert!(terminal.check_hover(Pos2::new(0.0, 10.0)));
    assert_eq!(terminal.hovered_region(), Some(TerminalRegion::Main));

    // Between body and outlet, on the connector
    assert!(terminal.check_hover(Pos2::new(25.0, 0.0)));
    assert_eq!(terminal.hovered_region(), Some(TerminalRegion::OutletLine));
    assert!(terminal.is_outlet_line_hovering());

    // Miss clears everything
    assert!(!terminal.check_hover(Pos2::new(25.0, 12.0)));
    assert_eq!(terminal.hovered_region(), None);
    assert!(!terminal.is_hovering());
    assert!(!terminal.is_outlet_hovering());
    assert!(!terminal.is_outlet_line_hovering());
}

#[test]
fn test_check_hover_is_idempotent_and_exclusive() {
    let pin = pin();
    let mut rng = rand::rng();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Top);

    for _ in 0..500 {
        let point = Pos2::new(rng.random_range(-30.0f32..30.0), rng.random_range(-60.0f32..30.0));

        let first = terminal.check_hover(point);
        let flags = (
            terminal.is_hovering(),
            terminal.is_outlet_hovering(),
            terminal.is_outlet_line_hovering(),
        );
        let set = [flags.0, flags.1, flags.2].iter().filter(|f| **f).count();
        assert!(set <= 1);
        assert_eq!(first, set == 1);

        let second = terminal.check_hover(point);
        assert_eq!(first, second);
        assert_eq!(
            flags,
            (
                terminal.is_hovering(),
                terminal.is_outlet_hovering(),
                terminal.is_outlet_line_hovering(),
            )
        );
        assert_eq!(terminal.hit_test(point), terminal.hovered_region());
    }
}

#[test]
fn test_select_and_deselect() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);
    assert!(!terminal.is_selected());

    // Miss on an unselected terminal
    terminal.select(Pos2::new(200.0, 200.0));
    assert!(!terminal.is_selected());

    // Any region selects
    terminal.select(Pos2::new(25.0, 0.0));
    assert!(terminal.is_selected());

    // Miss keeps the selection
    terminal.select(Pos2::new(200.0, 200.0));
    assert!(terminal.is_selected());

    terminal.deselect();
    assert!(!terminal.is_selected());

    terminal.select(Pos2::new(40.0, 0.0));
    assert!(terminal.is_selected());
}

#[test]
fn test_selection_independent_of_hover() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);

    terminal.select(Pos2::ZERO);
    terminal.check_hover(Pos2::new(500.0, 0.0));
    assert!(terminal.is_selected());

    terminal.check_hover(Pos2::ZERO);
    terminal.deselect();
    assert!(terminal.is_hovering());
}

#[test]
fn test_set_direction_recomputes_and_notifies() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::new(10.0, 10.0), Direction::Right);
    let received = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&received);
    terminal
        .dispatcher_mut()
        .subscribe(EventId::OnOutletMove, move |event| log.borrow_mut().push(*event));

    terminal.set_direction(Direction::Right);
    assert!(received.borrow().is_empty());

    terminal.set_direction(Direction::Bottom);
    let fresh = IoTerminal::new(&pin, Pos2::new(10.0, 10.0), Direction::Bottom);
    assert_eq!(terminal.outlet_position(), fresh.outlet_position());
    assert_eq!(terminal.bound(), fresh.bound());
    assert_eq!(
        *received.borrow(),
        vec![TerminalEvent::OutletMoved(fresh.outlet_position())]
    );
}

#[test]
fn test_wire_follows_outlet() {
    let pin = pin();
    let mut source = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);
    let mut sink = IoTerminal::new(&pin, Pos2::new(200.0, 0.0), Direction::Left);

    let wire = Wire::shared(Pos2::ZERO, Pos2::ZERO);
    Wire::attach(&wire, WireEnd::Start, &mut source);
    Wire::attach(&wire, WireEnd::End, &mut sink);

    assert_eq!(wire.borrow().start, source.outlet_position());
    assert_eq!(wire.borrow().end, sink.outlet_position());

    sink.move_by(Vec2::new(0.0, 50.0));
    assert_eq!(wire.borrow().end, sink.outlet_position());
    assert_eq!(wire.borrow().start, source.outlet_position());

    assert_eq!(source.wires().len(), 1);
    assert!(Rc::ptr_eq(&source.wires()[0], &wire));
}

#[test]
fn test_dropped_wires_are_not_kept_alive() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);

    let kept = Wire::shared(Pos2::ZERO, Pos2::ZERO);
    let dropped = Wire::shared(Pos2::ZERO, Pos2::ZERO);
    Wire::attach(&kept, WireEnd::Start, &mut terminal);
    Wire::attach(&dropped, WireEnd::Start, &mut terminal);
    drop(dropped);

    // Until pruned, the dropped wire's listener fires with nothing to update
    terminal.move_by(Vec2::new(5.0, 5.0));
    assert_eq!(kept.borrow().start, terminal.outlet_position());
    assert_eq!(terminal.dispatcher().listener_count(EventId::OnOutletMove), 2);

    assert_eq!(terminal.wires().len(), 1);
    assert_eq!(terminal.prune_wires(), 1);
    assert_eq!(terminal.dispatcher().listener_count(EventId::OnOutletMove), 1);
    assert_eq!(terminal.prune_wires(), 0);

    terminal.move_by(Vec2::new(-5.0, 0.0));
    assert_eq!(kept.borrow().start, terminal.outlet_position());
}

#[test]
fn test_prune_unsubscribes_every_dropped_wire() {
    let pin = pin();
    let mut terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Left);

    // Unrelated subscribers on the same channel survive pruning
    let moves = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&moves);
    terminal
        .dispatcher_mut()
        .subscribe(EventId::OnOutletMove, move |_| *counter.borrow_mut() += 1);

    for _ in 0..1000 {
        let wire = Wire::shared(Pos2::ZERO, Pos2::ZERO);
        Wire::attach(&wire, WireEnd::End, &mut terminal);
    }
    assert_eq!(terminal.dispatcher().listener_count(EventId::OnOutletMove), 1001);

    assert_eq!(terminal.prune_wires(), 1000);
    assert!(terminal.wires().is_empty());
    assert_eq!(terminal.dispatcher().listener_count(EventId::OnOutletMove), 1);

    terminal.move_by(Vec2::new(1.0, 0.0));
    assert_eq!(*moves.borrow(), 1);
}

#[test]
fn test_named_pin_and_color() {
    let pin = Rc::new(RefCell::new(NamedPin::new("CLK").with_power_state(true)));
    let terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Top);
    assert_eq!(terminal.color(), Color32::from_rgb(0, 0, 0));

    let named = terminal.named_pin().unwrap();
    assert_eq!(named.borrow().name, "CLK");
    assert!(named.borrow().power_state);
    drop(named);

    let colored = IoTerminal::new(&pin, Pos2::ZERO, Direction::Top).with_color(Color32::RED);
    assert_eq!(colored.color(), Color32::RED);

    drop(pin);
    assert!(terminal.named_pin().is_none());
}

#[test]
fn test_construction_registers_channels() {
    let pin = pin();
    let terminal = IoTerminal::new(&pin, Pos2::ZERO, Direction::Right);
    assert!(terminal.dispatcher().has_channel(EventId::OnMove));
    assert!(terminal.dispatcher().has_channel(EventId::OnOutletMove));
}
