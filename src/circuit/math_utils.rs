//! Mathematical utilities for hit-testing on the canvas

use egui::{Pos2, Rect};

/// Calculates the minimum distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let ap = point - a;
    let ab_len_sq = ab.x * ab.x + ab.y * ab.y;

    if ab_len_sq == 0.0 {
        return (point - a).length();
    }

    let t = ((ap.x * ab.x + ap.y * ab.y) / ab_len_sq).clamp(0.0, 1.0);
    let projection = a + ab * t;
    (point - projection).length()
}

/// Z component of the cross product (b - a) x (c - a)
fn orientation(a: Pos2, b: Pos2, c: Pos2) -> f32 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Whether `p` lies inside the bounding box of segment `a`-`b`
fn within_segment_box(p: Pos2, a: Pos2, b: Pos2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Checks whether segments `a`-`b` and `c`-`d` touch or cross
pub fn segments_intersect(a: Pos2, b: Pos2, c: Pos2, d: Pos2) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
        && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
    {
        return true;
    }

    // Collinear and touching cases
    (o1 == 0.0 && within_segment_box(c, a, b))
        || (o2 == 0.0 && within_segment_box(d, a, b))
        || (o3 == 0.0 && within_segment_box(a, c, d))
        || (o4 == 0.0 && within_segment_box(b, c, d))
}

/// Minimum distance between segments `a`-`b` and `c`-`d`
pub fn segment_to_segment_distance(a: Pos2, b: Pos2, c: Pos2, d: Pos2) -> f32 {
    if segments_intersect(a, b, c, d) {
        return 0.0;
    }

    distance_to_line_segment(a, c, d)
        .min(distance_to_line_segment(b, c, d))
        .min(distance_to_line_segment(c, a, b))
        .min(distance_to_line_segment(d, a, b))
}

/// Minimum distance between segment `a`-`b` and a filled rectangle
pub fn segment_to_rect_distance(a: Pos2, b: Pos2, rect: Rect) -> f32 {
    if rect.contains(a) || rect.contains(b) {
        return 0.0;
    }

    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];

    (0..4)
        .map(|i| segment_to_segment_distance(a, b, corners[i], corners[(i + 1) % 4]))
        .fold(f32::INFINITY, f32::min)
}
