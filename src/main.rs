/*
 * Ward Island Map
 *
 * Renders a stylized map of Ward Island: layered strip meshes for water,
 * land, and shore, hand-placed building footprints, and wind trajectory
 * curves traced through a bilinear wind field. The first two frames are
 * exported as PNGs.
 */

use islandmap::app;

fn main() {
    env_logger::init();
    nannou::app(app::model).update(app::update).run();
}
