/*
 * Strip Mesh Module
 *
 * This module builds the procedural coastline meshes as ribbons of
 * quadrilateral cells. Each row of cells is a "strip"; a block is a stack of
 * strips whose horizontal span is adjusted row by row with a nudge pair,
 * which is what gives the island its organic outline.
 */

use nannou::prelude::*;

/// Horizontal offset pair applied to a strip's span when advancing to the
/// next row. A positive `right` narrows the strip from the right; a negative
/// `left` narrows it from the left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nudge {
    pub left: f32,
    pub right: f32,
}

impl Nudge {
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }
}

/// Generate one row of quadrilateral cells as a flat triangle list.
///
/// The row spans `[x_start, x_stop]` at `y_start` with cell width `dx` and
/// row height `dy`. Each cell contributes two triangles in the order
/// {(a,top), (a,bot), (b,top), (b,top), (a,bot), (b,bot)} so the output can
/// be drawn as a triangle list (or strip) without reordering.
///
/// A non-positive span or cell width yields an empty row, not an error.
pub fn generate_strip(x_start: f32, y_start: f32, x_stop: f32, dx: f32, dy: f32) -> Vec<Point2> {
    if dx <= 0.0 {
        return Vec::new();
    }

    let n = ((x_stop - x_start) / dx).floor();
    if n <= 0.0 {
        return Vec::new();
    }
    let n = n as usize;

    let top = y_start;
    let bot = y_start - dy;

    let mut vertices = Vec::with_capacity(n * 6);
    let mut a = x_start;
    for _ in 0..n {
        let b = a + dx;
        vertices.push(pt2(a, top));
        vertices.push(pt2(a, bot));
        vertices.push(pt2(b, top));
        vertices.push(pt2(b, top));
        vertices.push(pt2(a, bot));
        vertices.push(pt2(b, bot));
        a = b;
    }
    vertices
}

/// Generate a block of strips, one per nudge, concatenated in nudge order.
///
/// After each row the cursor moves down by `dy` and the span tightens:
/// `x_start += left`, `x_stop -= right`. A row whose span has collapsed emits
/// nothing, but iteration continues -- later nudges may reopen the span.
pub fn generate_block(
    y_start: f32,
    x_start: f32,
    x_stop: f32,
    dx: f32,
    dy: f32,
    nudges: &[Nudge],
) -> Vec<Point2> {
    let mut vertices = Vec::new();
    let mut y = y_start;
    let (mut left, mut right) = (x_start, x_stop);

    for nudge in nudges {
        vertices.extend(generate_strip(left, y, right, dx, dy));
        y -= dy;
        left += nudge.left;
        right -= nudge.right;
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pt(actual: Point2, expected: (f32, f32)) {
        assert!(
            (actual.x - expected.0).abs() < 1e-6 && (actual.y - expected.1).abs() < 1e-6,
            "expected ({}, {}), got ({}, {})",
            expected.0,
            expected.1,
            actual.x,
            actual.y
        );
    }

    #[test]
    fn strip_emits_six_vertices_per_cell() {
        let vertices = generate_strip(0.0, 1.0, 2.0, 0.5, 0.25);
        assert_eq!(vertices.len(), 4 * 6);
    }

    #[test]
    fn strip_cells_cover_expected_quads() {
        let vertices = generate_strip(0.0, 1.0, 1.0, 0.5, 0.25);
        assert_eq!(vertices.len(), 12);

        // First cell: a = 0.0, b = 0.5, top = 1.0, bot = 0.75
        assert_pt(vertices[0], (0.0, 1.0));
        assert_pt(vertices[1], (0.0, 0.75));
        assert_pt(vertices[2], (0.5, 1.0));
        assert_pt(vertices[3], (0.5, 1.0));
        assert_pt(vertices[4], (0.0, 0.75));
        assert_pt(vertices[5], (0.5, 0.75));

        // Second cell: a = 0.5, b = 1.0
        assert_pt(vertices[6], (0.5, 1.0));
        assert_pt(vertices[7], (0.5, 0.75));
        assert_pt(vertices[8], (1.0, 1.0));
        assert_pt(vertices[11], (1.0, 0.75));
    }

    #[test]
    fn strip_partial_cell_is_dropped() {
        // Span of 1.1 with dx 0.5 fits two whole cells
        let vertices = generate_strip(0.0, 0.0, 1.1, 0.5, 0.5);
        assert_eq!(vertices.len(), 2 * 6);
    }

    #[test]
    fn strip_empty_for_non_positive_span() {
        assert!(generate_strip(1.0, 0.0, 1.0, 0.5, 0.5).is_empty());
        assert!(generate_strip(2.0, 0.0, 1.0, 0.5, 0.5).is_empty());
    }

    #[test]
    fn strip_empty_for_non_positive_cell_width() {
        assert!(generate_strip(0.0, 0.0, 1.0, 0.0, 0.5).is_empty());
        assert!(generate_strip(0.0, 0.0, 1.0, -0.5, 0.5).is_empty());
    }

    #[test]
    fn block_concatenates_one_strip_per_nudge() {
        let nudges = vec![Nudge::new(0.0, 0.0); 3];
        let vertices = generate_block(1.0, 0.0, 1.0, 0.25, 0.25, &nudges);
        // Three identical-width rows of four cells each
        assert_eq!(vertices.len(), 3 * 4 * 6);

        // Row i starts at y_start - i * dy
        for row in 0..3 {
            let top = vertices[row * 24].y;
            assert_pt(vertices[row * 24], (0.0, 1.0 - row as f32 * 0.25));
            assert_eq!(top, 1.0 - row as f32 * 0.25);
        }
    }

    #[test]
    fn block_nudges_tighten_the_span() {
        // One full row, then the left edge moves in by one cell and the right
        // edge by one cell, leaving two cells on the second row.
        let nudges = [Nudge::new(0.25, 0.25), Nudge::new(0.0, 0.0)];
        let vertices = generate_block(1.0, 0.0, 1.0, 0.25, 0.25, &nudges);
        assert_eq!(vertices.len(), (4 + 2) * 6);
        // Second row's first vertex sits at the nudged left edge
        assert_pt(vertices[24], (0.25, 0.75));
    }

    #[test]
    fn block_continues_after_span_collapse() {
        // Row 0 full, row 1 collapsed by a large right nudge, row 2 reopened
        // by a negative nudge pair.
        let nudges = [
            Nudge::new(0.0, 2.0),
            Nudge::new(0.0, -2.0),
            Nudge::new(0.0, 0.0),
        ];
        let vertices = generate_block(1.0, 0.0, 1.0, 0.25, 0.25, &nudges);
        // Rows 0 and 2 emit four cells each, row 1 emits nothing
        assert_eq!(vertices.len(), 2 * 4 * 6);
        assert_pt(vertices[24], (0.0, 0.5));
    }

    #[test]
    fn block_with_no_nudges_is_empty() {
        assert!(generate_block(1.0, -1.0, 1.0, 0.01, 0.01, &[]).is_empty());
    }
}
