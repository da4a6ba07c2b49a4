// Constants used by the host application, structured into modules.

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 5.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 4.5;
    pub const CAMERA_3D_INITIAL_Z: f32 = 7.0;
}

/// Cubie meshes
pub mod cubie_constants {
    // Edge of a cubie mesh, slightly below the pitch to leave a visible gap.
    pub const CUBIE_SIZE: f32 = 0.92;

    pub const CUBIE_SATURATION: f32 = 0.65;
    pub const CUBIE_LIGHTNESS: f32 = 0.5;
}

/// Status overlay
pub mod ui_constants {
    pub const STATUS_FONT_SIZE: f32 = 20.0;
    pub const STATUS_MARGIN_PX: f32 = 10.0;
}
