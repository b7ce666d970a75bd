//! CPU rendering of terminals and wires onto an egui painter

use crate::circuit::{IoTerminal, TerminalRegion, Wire};
use crate::theme;
use egui::{Painter, Shape, Stroke, StrokeKind};

/// Builds and paints the shapes for canvas entities
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Shapes for a terminal, back to front: connector line, outlet, body,
    /// then hover and selection outlines
    pub fn shapes(terminal: &IoTerminal) -> Vec<Shape> {
        let layout = terminal.layout();
        let color = terminal.color();

        let mut shapes = vec![
            Shape::line_segment(
                [terminal.position(), terminal.outlet_position()],
                Stroke::new(layout.outlet_line_width, color),
            ),
            Shape::rect_filled(terminal.outlet_collider().rect(), 0.0, color),
            Shape::rect_filled(terminal.collider().rect(), 0.0, color),
        ];

        let colors = theme::colors();
        let dimensions = theme::dimensions();
        let highlight = Stroke::new(dimensions.highlight_stroke_width, colors.hover_highlight);

        match terminal.hovered_region() {
            Some(TerminalRegion::Outlet) => shapes.push(Shape::rect_stroke(
                terminal.outlet_collider().rect(),
                0.0,
                highlight,
                StrokeKind::Outside,
            )),
            Some(TerminalRegion::Main) => shapes.push(Shape::rect_stroke(
                terminal.collider().rect(),
                0.0,
                highlight,
                StrokeKind::Outside,
            )),
            Some(TerminalRegion::OutletLine) => shapes.push(Shape::line_segment(
                [terminal.position(), terminal.outlet_position()],
                Stroke::new(
                    layout.outlet_line_width + dimensions.highlight_stroke_width,
                    colors.hover_highlight,
                ),
            )),
            None => {}
        }

        if terminal.is_selected() {
            shapes.push(Shape::rect_stroke(
                terminal.bound().rect().expand(dimensions.highlight_padding),
                0.0,
                Stroke::new(dimensions.highlight_stroke_width, colors.selection_blue),
                StrokeKind::Outside,
            ));
        }

        shapes
    }

    /// Paint a terminal. Time arguments are accepted for animated styles;
    /// the current style is static.
    pub fn render(painter: &Painter, terminal: &IoTerminal, _curr_time: f64, _delta_time: f32) {
        painter.extend(Self::shapes(terminal));
    }

    pub fn wire_shape(wire: &Wire) -> Shape {
        Shape::line_segment(
            [wire.start, wire.end],
            Stroke::new(theme::dimensions().wire_stroke_width, theme::colors().wire_default),
        )
    }

    pub fn render_wire(painter: &Painter, wire: &Wire) {
        painter.add(Self::wire_shape(wire));
    }
}
