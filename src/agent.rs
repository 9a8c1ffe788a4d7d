/*
 * Agent Module
 *
 * This module defines the point agents that trace the wind trajectories.
 * Each agent carries a position and an intrinsic velocity; every step adds
 * the wind field's velocity at the current position and advances both axes
 * independently. Recording an agent yields the display-space polyline that
 * the renderer draws as a curve.
 */

use nannou::prelude::*;

use crate::wind::WindField;

/// A simulated particle. Position is `(y, x)` and intrinsic velocity `(v, u)`
/// in simulation coordinates; `v` drives `y` and `u` drives `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Agent {
    pub y: f32,
    pub x: f32,
    pub v: f32,
    pub u: f32,
}

impl Agent {
    pub fn new(y: f32, x: f32, v: f32, u: f32) -> Self {
        Self { y, x, v, u }
    }

    /// Advance the agent by one time step. The effective velocity is the
    /// agent's own velocity plus the field velocity at its current position
    /// (calm air when no field is supplied).
    pub fn step(&mut self, time_step: f32, field: Option<&WindField>) {
        let (field_v, field_u) = match field {
            Some(field) => field.sample(self.y, self.x),
            None => (0.0, 0.0),
        };
        self.y += (self.v + field_v) * time_step;
        self.x += (self.u + field_u) * time_step;
    }

    /// Current position in display coordinates: `(x, -y)`.
    fn display_position(&self) -> Point2 {
        pt2(self.x, -self.y)
    }

    /// Advect the agent for `duration` and record its trajectory.
    ///
    /// Runs `ceil(duration / time_step)` steps, sampling the display position
    /// before each one. The buffer holds exactly that many points, and the
    /// post-loop position overwrites the last pre-step sample, so the final
    /// recorded point is the position *after* the last step. This matches the
    /// output of earlier renders of this scene; the corrected boundary would
    /// record `iterations + 1` points instead.
    pub fn record_trajectory(
        &mut self,
        time_step: f32,
        duration: f32,
        field: Option<&WindField>,
    ) -> Vec<Point2> {
        if time_step <= 0.0 || duration <= 0.0 {
            return Vec::new();
        }

        let iterations = (duration / time_step).ceil() as usize;
        if iterations == 0 {
            return Vec::new();
        }

        let mut trajectory = vec![Point2::ZERO; iterations];
        for sample in trajectory.iter_mut() {
            *sample = self.display_position();
            self.step(time_step, field);
        }
        trajectory[iterations - 1] = self.display_position();
        trajectory
    }
}
