//! Engine module containing graphics, input, and window management.

pub mod graphics;
pub mod input;
pub mod window;

pub use graphics::{GpuContext, Renderer, Vertex};
