/*
 * Palette Module
 *
 * This module holds the fixed color tables for the map layers and the random
 * pick used to give the meshes their mottled, hand-colored look. Picks are
 * uniform and unseeded; two renders will color the cells differently.
 */

use nannou::prelude::*;
use rand::Rng;

/// Greens for the island's base layer.
pub const GREENS: [(u8, u8, u8); 7] = [
    (138, 168, 146),
    (171, 191, 157),
    (122, 145, 128),
    (171, 194, 177),
    (90, 105, 94),
    (175, 199, 181),
    (141, 179, 151),
];

/// Sands for the island's shore overlay.
pub const SANDS: [(u8, u8, u8); 7] = [
    (212, 209, 178),
    (214, 208, 186),
    (237, 235, 225),
    (232, 227, 204),
    (222, 214, 204),
    (201, 196, 181),
    (201, 192, 167),
];

/// Waters for the surrounding bay.
pub const WATERS: [(u8, u8, u8); 7] = [
    (163, 201, 196),
    (99, 120, 117),
    (176, 191, 207),
    (142, 153, 163),
    (161, 183, 204),
    (100, 130, 128),
    (173, 192, 204),
];

/// Fill for building footprints and trajectory curves.
pub const BUILDING_FILL: (u8, u8, u8) = (221, 232, 240);

/// Draw a uniformly random entry from a palette.
pub fn random_pick<R: Rng>(rng: &mut R, palette: &[(u8, u8, u8)]) -> (u8, u8, u8) {
    palette[rng.gen_range(0..palette.len())]
}

/// Convert an 8-bit color to a float RGBA with the given alpha.
pub fn with_alpha(color: (u8, u8, u8), alpha: f32) -> Rgba {
    rgba(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_come_from_the_palette() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let pick = random_pick(&mut rng, &GREENS);
            assert!(GREENS.contains(&pick));
        }
    }

    #[test]
    fn with_alpha_scales_components() {
        let color = with_alpha((255, 0, 102), 0.6);
        assert_eq!(color.color.red, 1.0);
        assert_eq!(color.color.green, 0.0);
        assert!((color.color.blue - 0.4).abs() < 1e-3);
        assert_eq!(color.alpha, 0.6);
    }
}
