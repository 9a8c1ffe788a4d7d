/*
 * Scene Parameters Module
 *
 * This module defines the SceneParams struct with the knobs for scene
 * assembly: how many agents to trace, how finely to advect them, the wind
 * grid resolution, and where to write the exported frames.
 */

// Parameters for scene assembly
pub struct SceneParams {
    pub num_agents: usize,
    pub agent_time_step: f32,
    pub agent_duration: f32,
    pub wind_rows: usize,
    pub wind_cols: usize,
    pub export_prefix: String,
    // Performance settings
    pub enable_parallel: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            num_agents: 5500,
            agent_time_step: 0.005,
            agent_duration: 10.0,
            wind_rows: 100,
            wind_cols: 100,
            export_prefix: "wardisland".to_string(),
            // Advection is independent per agent, so parallel by default
            enable_parallel: true,
        }
    }
}
