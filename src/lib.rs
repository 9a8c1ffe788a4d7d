/*
 * Island Map Illustration - Module Definitions
 *
 * This file defines the module structure for the island map application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use agent::Agent;
pub use mesh::Nudge;
pub use params::SceneParams;
pub use scene::Scene;
pub use wind::WindField;

// Define modules
pub mod agent;
pub mod app;
pub mod buildings;
pub mod mesh;
pub mod opacity;
pub mod palette;
pub mod params;
pub mod scene;
pub mod wind;

// Constants
pub const WORLD_LEFT: f32 = -1.0;
pub const WORLD_RIGHT: f32 = 1.0;
pub const WORLD_BOTTOM: f32 = -1.0;
pub const WORLD_TOP: f32 = 1.0;
pub const CELL_SIZE: f32 = 0.01;
