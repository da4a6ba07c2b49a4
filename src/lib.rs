//! Declaration of the modules of the cube_solver host application.

/// Systems, constants, and objects
pub mod utils {
    pub mod bevy_renderer;
    pub mod constants;
    pub mod cube_functions;
    pub mod objects;
    pub mod setup;
    pub mod systems_logic;
}
