/*
 * Radial Opacity Module
 *
 * This module computes per-vertex alpha weights from distance to a source
 * point. The island's sand layer is blended over the green layer with these
 * weights so the shore fades in toward the coastline.
 */

use nannou::prelude::*;

/// Exponent applied to raw distances. Sharpens the falloff so only vertices
/// near the far end of the range approach full opacity.
const FALLOFF_EXPONENT: i32 = 10;

/// Weight used when every vertex is equidistant from the source and min-max
/// scaling would divide by zero.
const FLAT_FALLBACK: f32 = 0.5;

/// Compute one opacity weight per vertex from its distance to `source`.
///
/// Raw weights are Euclidean distances raised to the 10th power, then min-max
/// scaled to `[0, 1]` across the whole call. Multiple sources can be combined
/// by weighted sums of independent calls; combined values may exceed 1 and
/// must be clamped before use as alpha.
pub fn gradient_opacity(vertices: &[Point2], source: Point2) -> Vec<f32> {
    if vertices.is_empty() {
        return Vec::new();
    }

    let weights: Vec<f32> = vertices
        .iter()
        .map(|v| source.distance(*v).powi(FALLOFF_EXPONENT))
        .collect();

    let min = weights.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = weights.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        log::warn!(
            "all {} vertices equidistant from ({}, {}); using flat opacity {}",
            vertices.len(),
            source.x,
            source.y,
            FLAT_FALLBACK
        );
        return vec![FLAT_FALLBACK; vertices.len()];
    }

    weights.iter().map(|w| (w - min) / range).collect()
}
