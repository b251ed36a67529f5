//! Window creation, event translation and the viewport pass-through.

pub mod manager;
pub mod viewport;

pub use manager::{WindowAction, WindowManager};
pub use viewport::Viewport;
