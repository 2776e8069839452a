pub mod error;
pub mod render;
pub mod resources;
pub mod system;
pub mod texture;

pub use error::{sdl_error, SdlError};
pub use render::DrawOpts;
pub use system::{Input, LoopState, System};
