/*
 * Scene Assembly Module
 *
 * This module assembles the full illustration: the water block, the island
 * with its sand overlay, the building footprints, and the wind trajectory
 * curves. The output is a list of Shapes -- ordered vertex buffers with
 * parallel color buffers and a primitive mode -- that the renderer draws
 * and exports without further processing.
 */

use std::f32::consts::FRAC_PI_2;

use nannou::prelude::*;
use rayon::prelude::*;

use crate::agent::Agent;
use crate::buildings::BUILDINGS;
use crate::mesh::{self, Nudge};
use crate::opacity::gradient_opacity;
use crate::palette::{self, BUILDING_FILL, GREENS, SANDS, WATERS};
use crate::params::SceneParams;
use crate::wind::WindField;
use crate::{CELL_SIZE, WORLD_BOTTOM, WORLD_LEFT, WORLD_RIGHT, WORLD_TOP};

/// Number of uniform water rows filling the frame top to bottom.
pub const WATER_ROWS: usize = 250;

/// Top edge of the island block.
pub const ISLAND_TOP: f32 = 0.84;

/// How a shape's vertex buffer is interpreted by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawMode {
    /// Consecutive vertex triples form triangles.
    TriangleList,
    /// Consecutive vertex pairs form independent segments.
    LineList,
}

/// An ordered vertex buffer with a parallel color buffer, ready to draw.
pub struct Shape {
    pub vertices: Vec<Point2>,
    pub colors: Vec<Rgba>,
    pub mode: DrawMode,
}

/// The assembled illustration: filled shapes first, trajectory curves on top.
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub curves: Vec<Shape>,
}

impl Scene {
    /// Build the whole scene. Deterministic except for the palette picks.
    pub fn build(params: &SceneParams) -> Self {
        let mut rng = rand::thread_rng();
        let mut shapes = Vec::new();

        // Water fills the frame with uniform rows
        let water_nudges = vec![Nudge::new(0.0, 0.0); WATER_ROWS];
        let water_vertices = mesh::generate_block(
            WORLD_TOP,
            WORLD_LEFT,
            WORLD_RIGHT,
            CELL_SIZE,
            CELL_SIZE,
            &water_nudges,
        );
        let water_colors = water_vertices
            .iter()
            .map(|_| palette::with_alpha(palette::random_pick(&mut rng, &WATERS), 0.6))
            .collect();
        shapes.push(Shape {
            vertices: water_vertices,
            colors: water_colors,
            mode: DrawMode::TriangleList,
        });

        // Island base layer in greens
        let island_vertices = mesh::generate_block(
            ISLAND_TOP,
            WORLD_LEFT,
            WORLD_RIGHT,
            CELL_SIZE,
            CELL_SIZE,
            &ISLAND_NUDGES,
        );
        let green_colors = island_vertices
            .iter()
            .map(|_| palette::with_alpha(palette::random_pick(&mut rng, &GREENS), 1.0))
            .collect();

        // Sand overlay: same mesh, alpha graded by distance to three shore
        // reference points, clamped after the weighted sum
        let shore_a = gradient_opacity(&island_vertices, pt2(0.0, 1.0));
        let shore_b = gradient_opacity(&island_vertices, pt2(1.0, 1.0));
        let shore_c = gradient_opacity(&island_vertices, pt2(-1.0, -0.5));
        let sand_colors = shore_a
            .iter()
            .zip(&shore_b)
            .zip(&shore_c)
            .map(|((a, b), c)| {
                let alpha = (a + 0.2 * b + c).clamp(0.0, 1.0);
                palette::with_alpha(palette::random_pick(&mut rng, &SANDS), alpha)
            })
            .collect();

        shapes.push(Shape {
            vertices: island_vertices.clone(),
            colors: green_colors,
            mode: DrawMode::TriangleList,
        });
        shapes.push(Shape {
            vertices: island_vertices,
            colors: sand_colors,
            mode: DrawMode::TriangleList,
        });

        // Buildings, each with its model transform applied
        for building in &BUILDINGS {
            let vertices = building.transformed_footprint();
            let colors = vec![palette::with_alpha(BUILDING_FILL, 0.9); vertices.len()];
            shapes.push(Shape {
                vertices,
                colors,
                mode: DrawMode::TriangleList,
            });
        }

        // Wind trajectories
        let field = build_wind_field(params);
        let mut agents = spawn_agents(params.num_agents);
        let advect = |agent: &mut Agent| {
            agent.record_trajectory(params.agent_time_step, params.agent_duration, Some(&field))
        };
        let trajectories: Vec<Vec<Point2>> = if params.enable_parallel {
            agents.par_iter_mut().map(advect).collect()
        } else {
            agents.iter_mut().map(advect).collect()
        };
        let curves = trajectories
            .into_iter()
            .map(|vertices| {
                let colors = vec![palette::with_alpha(BUILDING_FILL, 0.4); vertices.len()];
                Shape {
                    vertices,
                    colors,
                    mode: DrawMode::LineList,
                }
            })
            .collect();

        Self { shapes, curves }
    }
}

/// Build the upsampled wind field over the world rectangle.
pub fn build_wind_field(params: &SceneParams) -> WindField {
    let magnitude: Vec<Vec<f32>> = WIND_MAGNITUDE.iter().map(|row| row.to_vec()).collect();
    let direction: Vec<Vec<f32>> = WIND_DIRECTION.iter().map(|row| row.to_vec()).collect();
    let bounds = Rect::from_corners(pt2(WORLD_LEFT, WORLD_BOTTOM), pt2(WORLD_RIGHT, WORLD_TOP));
    WindField::from_polar(
        &magnitude,
        &direction,
        params.wind_rows,
        params.wind_cols,
        bounds,
    )
}

/// Seed the trajectory agents along the left edge of the world. Headings
/// fan out over a half circle and speeds oscillate along the column so the
/// curves bunch and spread.
pub fn spawn_agents(count: usize) -> Vec<Agent> {
    let headings = linspace(-FRAC_PI_2, FRAC_PI_2, count);
    let speeds = linspace(0.0, 100.0, count);
    let starts = linspace(WORLD_BOTTOM, WORLD_TOP, count);

    headings
        .iter()
        .zip(&speeds)
        .zip(&starts)
        .map(|((&heading, &phase), &y)| {
            let speed = phase.cos();
            Agent::new(y, WORLD_LEFT, speed * heading.sin(), speed * heading.cos())
        })
        .collect()
}

/// Evenly spaced values over `[start, stop]`, endpoints inclusive.
fn linspace(start: f32, stop: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f32;
            (0..count).map(|i| start + step * i as f32).collect()
        }
    }
}

/// Coarse wind magnitudes over the bay, south to north.
pub const WIND_MAGNITUDE: [[f32; 5]; 5] = [
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [0.5, 0.5, 1.5, 1.5, 1.5],
    [0.4, 1.5, 2.5, 1.5, 2.0],
    [0.4, 0.4, 0.0, 2.0, 2.0],
];

/// Coarse wind directions in radians, matching `WIND_MAGNITUDE` cell for
/// cell.
pub const WIND_DIRECTION: [[f32; 5]; 5] = [
    [-1.6, -1.6, -1.6, -1.3, 1.3],
    [-0.35, -1.6, 1.6, 0.8, 1.3],
    [-0.35, -0.8, -0.3, 0.8, 1.5],
    [0.0, -0.2, 0.5, 0.7, 2.7],
    [0.2, 0.5, 0.6, 1.7, 2.7],
];

/// Per-row nudges carving the island's coastline out of the full-width
/// block, top to bottom.
pub const ISLAND_NUDGES: [Nudge; 138] = [
    Nudge::new(0.0, 0.0),
    Nudge::new(0.0, 0.0),
    Nudge::new(0.001, 0.0),
    Nudge::new(0.005, 0.0),
    Nudge::new(0.005, 0.0),
    Nudge::new(0.007, 0.0),
    Nudge::new(0.005, 0.0),
    Nudge::new(0.007, 0.0),
    Nudge::new(0.005, 0.0),
    Nudge::new(0.012, 0.0),
    Nudge::new(0.014, 0.0),
    Nudge::new(0.004, 0.0),
    Nudge::new(0.008, 0.0001),
    Nudge::new(0.0072, 0.0001),
    Nudge::new(0.0075, 0.0002),
    Nudge::new(0.008, 0.0003),
    Nudge::new(0.006, 0.001),
    Nudge::new(0.011, 0.001),
    Nudge::new(0.0021, 0.001),
    Nudge::new(0.0051, 0.001),
    Nudge::new(0.0054, 0.001),
    Nudge::new(0.012, 0.001),
    Nudge::new(0.0101, 0.001),
    Nudge::new(0.0011, 0.001),
    Nudge::new(0.027, 0.001),
    Nudge::new(0.007, 0.004),
    Nudge::new(0.0201, 0.014),
    Nudge::new(0.0102, 0.014),
    Nudge::new(0.0072, 0.014),
    Nudge::new(0.016, 0.014),
    Nudge::new(0.0172, 0.014),
    Nudge::new(0.0015, 0.014),
    Nudge::new(0.0063, -0.00004),
    Nudge::new(0.0065, -0.00004),
    Nudge::new(0.06, -0.014),
    Nudge::new(0.0063, -0.00004),
    Nudge::new(-0.0047, -0.00004),
    Nudge::new(0.0046, 0.0015),
    Nudge::new(-0.0001, 0.015),
    Nudge::new(0.0025, 0.016),
    Nudge::new(-0.011, 0.0145),
    Nudge::new(-0.0034, 0.013),
    Nudge::new(0.002, -0.003),
    Nudge::new(0.0013, 0.0145),
    Nudge::new(-0.0116, 0.016),
    Nudge::new(0.0025, 0.0167),
    Nudge::new(0.0144, 0.014),
    Nudge::new(0.0053, 0.012),
    Nudge::new(0.0035, 0.008),
    Nudge::new(0.0028, 0.008),
    Nudge::new(0.0027, 0.0086),
    Nudge::new(0.0035, 0.0085),
    Nudge::new(0.0035, 0.008),
    Nudge::new(0.0047, 0.008),
    Nudge::new(0.0037, 0.008),
    Nudge::new(0.0035, 0.008),
    Nudge::new(0.0035, 0.008),
    Nudge::new(0.0035, 0.008),
    Nudge::new(0.0035, 0.008),
    Nudge::new(0.0033, 0.008),
    Nudge::new(0.0033, 0.004),
    Nudge::new(0.0033, 0.00145),
    Nudge::new(0.0035, 0.0019),
    Nudge::new(0.0041, 0.0013),
    Nudge::new(-0.0001, 0.00135),
    Nudge::new(-0.0005, 0.0043),
    Nudge::new(0.0031, 0.0013),
    Nudge::new(0.0035, 0.0045),
    Nudge::new(0.0021, 0.003),
    Nudge::new(0.0022, 0.0037),
    Nudge::new(0.0021, -0.000001),
    Nudge::new(-0.0005, 0.0002),
    Nudge::new(0.0022, -0.0001),
    Nudge::new(0.0035, -0.0003),
    Nudge::new(0.0025, -0.001),
    Nudge::new(0.0025, 0.001),
    Nudge::new(0.0025, 0.01),
    Nudge::new(0.0025, 0.0014),
    Nudge::new(0.0025, 0.004),
    Nudge::new(0.0025, 0.004),
    Nudge::new(0.0025, 0.008),
    Nudge::new(0.0025, 0.007),
    Nudge::new(0.0025, 0.007),
    Nudge::new(0.0065, 0.007),
    Nudge::new(0.0175, 0.007),
    Nudge::new(0.0185, 0.0075),
    Nudge::new(0.0085, 0.007),
    Nudge::new(0.0195, 0.007),
    Nudge::new(0.0035, 0.0075),
    Nudge::new(0.0125, 0.0047),
    Nudge::new(0.0075, 0.007),
    Nudge::new(0.0195, 0.0075),
    Nudge::new(0.0205, 0.006),
    Nudge::new(0.0125, 0.0067),
    Nudge::new(0.0055, 0.005),
    Nudge::new(0.0095, 0.005),
    Nudge::new(0.07, 0.005),
    Nudge::new(0.065, 0.005),
    Nudge::new(0.07, 0.006),
    Nudge::new(0.013, 0.0075),
    Nudge::new(0.011, -0.002),
    Nudge::new(-0.004, 0.054),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.04, 0.008),
    Nudge::new(0.04, -0.003),
    Nudge::new(0.04, -0.001),
    Nudge::new(0.04, -0.003),
    Nudge::new(0.01, 0.002),
    Nudge::new(0.01, 0.0045),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.01, 0.0045),
    Nudge::new(0.001, 0.047),
    Nudge::new(0.001, 0.007),
    Nudge::new(0.001, 0.004),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.011, 0.0047),
    Nudge::new(0.02, 0.004),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.02, 0.005),
    Nudge::new(0.01, 0.004),
    Nudge::new(0.03, 0.006),
    Nudge::new(0.005, 0.0095),
    Nudge::new(-0.015, 0.015),
    Nudge::new(-0.025, 0.022),
    Nudge::new(-0.045, 0.013),
    Nudge::new(0.025, 0.0194),
    Nudge::new(0.0315, 0.0234),
    Nudge::new(0.03015, 0.024),
    Nudge::new(0.020127, 0.018),
    Nudge::new(0.0004, 0.003),
    Nudge::new(0.004, 0.001),
    Nudge::new(0.0004, 0.003),
    Nudge::new(0.001, 0.006),
    Nudge::new(0.011, 0.017),
    Nudge::new(0.0101, 0.017),
    Nudge::new(0.011, 0.0175),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> SceneParams {
        SceneParams {
            num_agents: 8,
            agent_duration: 0.05,
            ..SceneParams::default()
        }
    }

    #[test]
    fn water_block_fills_the_frame() {
        let nudges = vec![Nudge::new(0.0, 0.0); WATER_ROWS];
        let vertices = mesh::generate_block(
            WORLD_TOP,
            WORLD_LEFT,
            WORLD_RIGHT,
            CELL_SIZE,
            CELL_SIZE,
            &nudges,
        );
        assert_eq!(vertices.len(), WATER_ROWS * 200 * 6);
    }

    #[test]
    fn scene_holds_three_layers_plus_buildings() {
        let scene = Scene::build(&small_params());
        assert_eq!(scene.shapes.len(), 3 + BUILDINGS.len());
        assert!(scene
            .shapes
            .iter()
            .all(|s| s.mode == DrawMode::TriangleList));
    }

    #[test]
    fn every_shape_has_one_color_per_vertex() {
        let scene = Scene::build(&small_params());
        for shape in scene.shapes.iter().chain(&scene.curves) {
            assert_eq!(shape.vertices.len(), shape.colors.len());
        }
    }

    #[test]
    fn one_curve_per_agent_with_one_point_per_step() {
        let params = small_params();
        let scene = Scene::build(&params);
        assert_eq!(scene.curves.len(), params.num_agents);

        let steps = (params.agent_duration / params.agent_time_step).ceil() as usize;
        for curve in &scene.curves {
            assert_eq!(curve.mode, DrawMode::LineList);
            assert_eq!(curve.vertices.len(), steps);
        }
    }

    #[test]
    fn parallel_and_sequential_advection_agree() {
        let sequential = SceneParams {
            enable_parallel: false,
            ..small_params()
        };
        let parallel = small_params();

        let field_a = build_wind_field(&sequential);
        let field_b = build_wind_field(&parallel);
        let mut agents_a = spawn_agents(4);
        let mut agents_b = spawn_agents(4);

        for (a, b) in agents_a.iter_mut().zip(agents_b.iter_mut()) {
            let ta = a.record_trajectory(0.01, 0.1, Some(&field_a));
            let tb = b.record_trajectory(0.01, 0.1, Some(&field_b));
            assert_eq!(ta, tb);
        }
    }

    #[test]
    fn agents_start_on_the_left_edge() {
        let agents = spawn_agents(5);
        assert_eq!(agents.len(), 5);
        assert!(agents.iter().all(|a| a.x == WORLD_LEFT));
        assert_eq!(agents[0].y, WORLD_BOTTOM);
        assert_eq!(agents[4].y, WORLD_TOP);
    }

    #[test]
    fn linspace_is_inclusive_of_both_endpoints() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }
}
