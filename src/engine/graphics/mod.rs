pub mod gpu;
#[cfg(test)]
pub(crate) mod headless;
pub mod release;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use gpu::{classify_surface_error, GpuContext, SurfaceErrorAction};
pub use release::ReleaseReport;
pub use renderer::Renderer;
pub use vertex::Vertex;
