pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod render_loop;
pub mod scene;
pub mod selection;

pub use camera::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use input::*;
pub use render_loop::*;
pub use scene::*;
pub use selection::*;
