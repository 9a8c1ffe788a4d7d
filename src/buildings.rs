/*
 * Buildings Module
 *
 * This module holds the hand-authored campus building footprints drawn on
 * top of the island. Each footprint is a triangle list in its own local
 * space with a model transform (rotate about z, then scale, then translate)
 * placing it on the map. The tables are static configuration, not state.
 */

use nannou::prelude::*;

/// A building footprint and the model transform placing it on the island.
pub struct Building {
    pub name: &'static str,
    pub footprint: &'static [(f32, f32)],
    pub rotate_deg: f32,
    pub scale: (f32, f32),
    pub translate: (f32, f32),
}

impl Building {
    /// Footprint vertices with the model transform applied, ready for the
    /// rendering sink.
    pub fn transformed_footprint(&self) -> Vec<Point2> {
        let (sin, cos) = self.rotate_deg.to_radians().sin_cos();
        self.footprint
            .iter()
            .map(|&(x, y)| {
                let rx = x * cos - y * sin;
                let ry = x * sin + y * cos;
                pt2(
                    rx * self.scale.0 + self.translate.0,
                    ry * self.scale.1 + self.translate.1,
                )
            })
            .collect()
    }
}

const HALL_FOOTPRINT: [(f32, f32); 9] = [
    (-0.7, 0.2),
    (0.1, 0.2),
    (0.1, 1.0),
    (0.1, -1.0),
    (-0.4, 0.2),
    (0.1, 0.2),
    (-0.4, -1.0),
    (0.1, -1.0),
    (0.1, 0.2),
];

const ARTS_CENTER_FOOTPRINT: [(f32, f32); 30] = [
    (0.0, 0.0),
    (0.7, 0.0),
    (0.0, 0.5),
    (0.7, 0.5),
    (0.7, 0.0),
    (0.0, 0.5),
    (0.7, 0.0),
    (0.7, 0.5),
    (1.0, 0.0),
    (1.0, 0.0),
    (1.0, 0.5),
    (0.7, 0.5),
    (0.5, 0.0),
    (1.0, 0.0),
    (0.7, 0.7),
    (1.0, 0.0),
    (1.0, 0.7),
    (0.7, 0.7),
    (1.0, 0.0),
    (1.5, 0.0),
    (1.0, 0.6),
    (1.5, 0.0),
    (1.5, 0.6),
    (1.0, 0.6),
    (0.2, 0.0),
    (0.2, -0.15),
    (1.6, 0.0),
    (0.2, -0.15),
    (1.6, 0.0),
    (1.6, -0.15),
];

const OCONNOR_FOOTPRINT: [(f32, f32); 18] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (0.0, 0.6),
    (-0.2, 0.6),
    (0.0, 0.4),
    (-0.2, 0.6),
    (0.0, 0.4),
    (-0.2, 0.4),
    (0.6, 1.0),
    (0.9, 1.0),
    (0.6, 1.2),
    (0.9, 1.0),
    (0.6, 1.2),
    (0.9, 1.2),
];

const LIBRARY_FOOTPRINT: [(f32, f32); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

const BAY_HALL_FOOTPRINT: [(f32, f32); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

const FACULTY_CENTER_FOOTPRINT: [(f32, f32); 12] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (0.2, 0.0),
    (0.2, -0.25),
    (0.9, 0.0),
    (0.9, 0.0),
    (0.2, -0.25),
    (0.9, -0.25),
];

const INSTRUCTION_CENTER_FOOTPRINT: [(f32, f32); 27] = [
    (0.0, 0.0),
    (2.0, 0.0),
    (2.0, 7.0),
    (0.0, 0.0),
    (2.0, 7.0),
    (0.0, 7.0),
    (-3.0, 0.0),
    (3.0, 0.0),
    (0.0, -4.0),
    (-3.0, 0.0),
    (0.0, 0.0),
    (0.0, 8.5),
    (-3.0, 8.5),
    (0.0, 8.5),
    (-3.0, 0.0),
    (-3.0, 0.0),
    (-11.0, 0.0),
    (-11.0, 3.0),
    (-3.0, 3.0),
    (-3.0, 0.0),
    (-11.0, 3.0),
    (-11.0, 3.0),
    (-11.0, 4.5),
    (-4.0, 3.0),
    (-4.0, 4.5),
    (-11.0, 3.0),
    (-4.0, 3.0),
];

const SERVICES_CENTER_FOOTPRINT: [(f32, f32); 18] = [
    (0.0, 0.0),
    (7.0, 0.0),
    (0.0, 4.0),
    (7.0, 0.0),
    (0.0, 4.0),
    (7.0, 4.0),
    (-4.0, 4.0),
    (0.0, 0.0),
    (0.0, 4.0),
    (3.5, 0.0),
    (7.0, 0.0),
    (9.0, -5.0),
    (7.0, 0.0),
    (7.0, 4.0),
    (12.0, -1.0),
    (12.0, -1.0),
    (9.0, -5.0),
    (7.0, 0.0),
];

const WELLNESS_CENTER_FOOTPRINT: [(f32, f32); 12] = [
    (0.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 0.0),
    (1.0, 0.0),
    (-0.02, -0.25),
    (0.0, 1.0),
    (-0.255, 0.94),
    (-0.02, -0.25),
];

const SUCCESS_CENTER_FOOTPRINT: [(f32, f32); 18] = [
    (0.0, 0.0),
    (7.0, 0.0),
    (0.0, -1.5),
    (7.0, -1.5),
    (7.0, 0.0),
    (0.0, -1.5),
    (4.0, 0.0),
    (4.0, 2.0),
    (0.0, 2.0),
    (0.0, 0.0),
    (0.0, 2.0),
    (4.0, 0.0),
    (0.0, 2.0),
    (0.0, 3.5),
    (7.0, 3.5),
    (7.0, 2.0),
    (7.0, 3.5),
    (0.0, 2.0),
];

const ENGINEERING_FOOTPRINT: [(f32, f32); 21] = [
    (0.0, 0.0),
    (0.0, 1.0),
    (6.0, 1.0),
    (6.0, 0.0),
    (6.0, 1.0),
    (0.0, 0.0),
    (1.5, 0.0),
    (1.5, -0.7),
    (0.0, 0.0),
    (0.0, -0.7),
    (1.5, -0.7),
    (0.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (0.0, -0.7),
    (0.0, 1.5),
    (5.5, 1.5),
    (0.0, 1.0),
    (5.5, 1.5),
    (5.5, 1.0),
    (0.0, 1.0),
];

/// All buildings on the map, in draw order.
pub const BUILDINGS: [Building; 11] = [
    Building {
        name: "Corpus Christi Hall",
        footprint: &HALL_FOOTPRINT,
        rotate_deg: 0.3,
        scale: (0.1, 0.1),
        translate: (-0.08, 0.65),
    },
    Building {
        name: "Center for the Arts",
        footprint: &ARTS_CENTER_FOOTPRINT,
        rotate_deg: 0.3,
        scale: (0.13, 0.1),
        translate: (-0.04, 0.55),
    },
    Building {
        name: "O'Connor",
        footprint: &OCONNOR_FOOTPRINT,
        rotate_deg: 0.2,
        scale: (0.14, 0.12),
        translate: (-0.2, 0.35),
    },
    Building {
        name: "Mary & Jeff Bell Library",
        footprint: &LIBRARY_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.05, 0.15),
        translate: (-0.11, 0.164),
    },
    Building {
        name: "Bay Hall",
        footprint: &BAY_HALL_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.06, 0.13),
        translate: (0.05, 0.38),
    },
    Building {
        name: "Faculty Center",
        footprint: &FACULTY_CENTER_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.15, 0.04),
        translate: (-0.045, 0.32),
    },
    Building {
        name: "Center for Instruction",
        footprint: &INSTRUCTION_CENTER_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.011, 0.011),
        translate: (0.1, 0.175),
    },
    Building {
        name: "University Services Center",
        footprint: &SERVICES_CENTER_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.0075, 0.0075),
        translate: (-0.045, 0.7),
    },
    Building {
        name: "Dugan Wellness Center",
        footprint: &WELLNESS_CENTER_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.075, 0.075),
        translate: (0.062, 0.02),
    },
    Building {
        name: "Glasscock Student Success Center",
        footprint: &SUCCESS_CENTER_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.012, 0.014),
        translate: (-0.225, 0.25),
    },
    Building {
        name: "Engineering",
        footprint: &ENGINEERING_FOOTPRINT,
        rotate_deg: 0.0,
        scale: (0.02, 0.04),
        translate: (-0.25, 0.16),
    },
];
