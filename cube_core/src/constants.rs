// Constants used by the cube engine and shared with the host application.

/// Cube geometry
pub mod cube_constants {
    // Number of cubies (and slots) in a 3x3x3 cube.
    pub const CUBIE_COUNT: usize = 27;

    // Side of a face arrangement and number of cubies on one face.
    pub const FACE_SIDE: usize = 3;
    pub const FACELET_COUNT: usize = FACE_SIDE * FACE_SIDE;

    // Distance between the centers of two neighbouring cubies.
    pub const CUBIE_PITCH: f32 = 1.0;

    pub const QUARTER_TURN_DEGREES: f32 = 90.0;
}

/// Move animation
pub mod animation_constants {
    pub const TICK_RATE_HZ: f64 = 60.0; // Hz

    // Duration of one animated move, whatever its turn count.
    pub const MOVE_DURATION_SECS: f32 = 0.5;
}

/// Scramble generation
pub mod scramble_constants {
    // Seed for the random number generator.
    pub const SEED: u64 = 69;

    pub const SCRAMBLE_LENGTH: usize = 20;
}

/// External two-phase solver
pub mod solver_constants {
    // Length of a facelet string (6 faces * 9 stickers) in URFDLB order.
    pub const FACELET_STRING_LENGTH: usize = 54;

    // Maximum solution length handed to the solver.
    pub const MAX_SOLUTION_DEPTH: usize = 21;

    // Indices of the center sticker of each face inside the facelet string.
    pub const CENTER_INDICES: [usize; 6] = [4, 13, 22, 31, 40, 49];

    pub const FACE_ORDER: [char; 6] = ['U', 'R', 'F', 'D', 'L', 'B'];

    // Sample scrambled cube and the plan the two-phase solver returns for it.
    pub const SAMPLE_FACELETS: &str = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL";
    pub const SAMPLE_SOLUTION: &str =
        "R2 U2 B2 L2 F2 U' L2 R2 B2 R2 D  B2 F  L' F  U2 F' R' D' L2 R' (21f)";
}

/// Timing helpers between seconds and fixed ticks.
pub mod timing {
    use super::animation_constants::TICK_RATE_HZ;

    /// Convert seconds to ticks
    pub const fn seconds_to_ticks(seconds: f32) -> u64 {
        (seconds * TICK_RATE_HZ as f32) as u64
    }
}
