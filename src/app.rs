/*
 * Application Module
 *
 * This module wires the assembled scene into a nannou window. The scene is
 * built once at startup and drawn as-is every frame; the first two frames
 * are captured to PNG files, meshes alone first and then the full scene
 * with the trajectory curves on top.
 */

use nannou::prelude::*;

use crate::params::SceneParams;
use crate::scene::{DrawMode, Scene, Shape};

pub struct Model {
    scene: Scene,
    params: SceneParams,
}

pub fn model(app: &App) -> Model {
    app.new_window()
        .title("Ward Island")
        .size(900, 900)
        .view(view)
        .build()
        .unwrap();

    let params = SceneParams::default();
    let scene = Scene::build(&params);
    Model { scene, params }
}

// The scene is static; nothing advances between frames
pub fn update(_app: &App, _model: &mut Model, _update: Update) {}

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    // World coordinates span [-1, 1] on both axes; map them onto the
    // window's shorter dimension
    let window = app.main_window().rect();
    let scale = window.w().min(window.h()) / 2.0;

    for shape in &model.scene.shapes {
        draw_shape(&draw, shape, scale);
    }

    // First pass draws the meshes alone so the bare map can be captured;
    // every later pass layers the curves on top
    let pass = app.elapsed_frames();
    if pass >= 1 {
        for curve in &model.scene.curves {
            draw_shape(&draw, curve, scale);
        }
    }

    draw.to_frame(app, &frame).unwrap();

    match pass {
        0 => capture(app, &model.params.export_prefix, "a"),
        1 => capture(app, &model.params.export_prefix, "b"),
        _ => {}
    }
}

fn capture(app: &App, prefix: &str, suffix: &str) {
    let path = format!("{}_{}.png", prefix, suffix);
    app.main_window().capture_frame(path);
}

fn draw_shape(draw: &Draw, shape: &Shape, scale: f32) {
    match shape.mode {
        DrawMode::TriangleList => {
            draw.mesh().points_colored(
                shape
                    .vertices
                    .iter()
                    .map(|p| (*p * scale).extend(0.0))
                    .zip(shape.colors.iter().cloned()),
            );
        }
        DrawMode::LineList => {
            // Independent segments, so gaps between pairs stay gaps
            for (pair, color) in shape
                .vertices
                .chunks_exact(2)
                .zip(shape.colors.chunks_exact(2))
            {
                draw.line()
                    .start(pair[0] * scale)
                    .end(pair[1] * scale)
                    .color(color[0])
                    .weight(1.0);
            }
        }
    }
}
