//! Keyboard state and the per-frame input check.

pub mod handler;

pub use handler::{InputAction, InputHandler};
