//! Hit-test regions for pointer interaction
//!
//! Colliders are plain shapes with mutable position fields so owners can
//! reposition them in place. Any two colliders can be tested against each
//! other through [`Collider::is_colliding`].

use super::math_utils::{distance_to_line_segment, segment_to_rect_distance, segment_to_segment_distance};
use egui::{Pos2, Rect, Vec2};

/// Snapshot of a collider's geometry used by the collision predicates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Point(Pos2),
    Box(Rect),
    /// Thick segment; `width` is the full stroke width
    Line { start: Pos2, end: Pos2, width: f32 },
}

/// A region that can be tested for overlap with any other region
pub trait Collider {
    fn shape(&self) -> ColliderShape;

    fn is_colliding(&self, other: &dyn Collider) -> bool {
        shapes_collide(self.shape(), other.shape())
    }
}

/// Collision predicate over every pair of shapes. Edges count as inside.
pub fn shapes_collide(a: ColliderShape, b: ColliderShape) -> bool {
    use ColliderShape::*;

    match (a, b) {
        (Point(p), Point(q)) => p == q,
        (Point(p), Box(rect)) | (Box(rect), Point(p)) => rect.contains(p),
        (Point(p), Line { start, end, width }) | (Line { start, end, width }, Point(p)) => {
            distance_to_line_segment(p, start, end) <= width / 2.0
        }
        (Box(r1), Box(r2)) => r1.intersects(r2),
        (Box(rect), Line { start, end, width }) | (Line { start, end, width }, Box(rect)) => {
            segment_to_rect_distance(start, end, rect) <= width / 2.0
        }
        (
            Line { start: a1, end: a2, width: w1 },
            Line { start: b1, end: b2, width: w2 },
        ) => segment_to_segment_distance(a1, a2, b1, b2) <= (w1 + w2) / 2.0,
    }
}

/// A single pointer location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCollider {
    pub position: Pos2,
}

impl PointCollider {
    pub fn new(position: Pos2) -> Self {
        Self { position }
    }
}

impl Collider for PointCollider {
    fn shape(&self) -> ColliderShape {
        ColliderShape::Point(self.position)
    }
}

/// Axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub position: Pos2,
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    pub fn new(position: Pos2, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Square box of side `size` centered on `center`
    pub fn centered(center: Pos2, size: f32) -> Self {
        Self::new(center - Vec2::splat(size / 2.0), size, size)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Pos2 {
        self.rect().center()
    }

    /// Overwrite position and size without replacing the collider
    pub fn set_rect(&mut self, rect: Rect) {
        self.position = rect.min;
        self.width = rect.width();
        self.height = rect.height();
    }

    /// Whether `other` lies entirely inside this box
    pub fn contains_box(&self, other: &BoxCollider) -> bool {
        self.rect().contains_rect(other.rect())
    }
}

impl Collider for BoxCollider {
    fn shape(&self) -> ColliderShape {
        ColliderShape::Box(self.rect())
    }
}

/// Thick line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCollider {
    pub start_position: Pos2,
    pub end_position: Pos2,
    pub width: f32,
}

impl LineCollider {
    pub fn new(start_position: Pos2, end_position: Pos2, width: f32) -> Self {
        Self {
            start_position,
            end_position,
            width,
        }
    }
}

impl Collider for LineCollider {
    fn shape(&self) -> ColliderShape {
        ColliderShape::Line {
            start: self.start_position,
            end: self.end_position,
            width: self.width,
        }
    }
}
