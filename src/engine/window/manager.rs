//! Window management implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::config::AppConfig;

/// Window events the app reacts to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WindowAction {
    Close,
    Resize(PhysicalSize<u32>),
    Redraw,
    Key { code: KeyCode, pressed: bool },
}

#[derive(Default)]
pub struct WindowManager {
    window: Option<Arc<Window>>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: &AppConfig,
    ) -> Result<Arc<Window>> {
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let window = event_loop
            .create_window(attributes)
            .map_err(|e| {
                error!("Failed to create window: {:?}", e);
                e
            })
            .context("cannot create window")?;
        info!("Created window {:?} ({}x{})", config.title, config.width, config.height);

        let window = Arc::new(window);
        self.window = Some(window.clone());
        Ok(window)
    }

    pub fn translate_event(event: &WindowEvent) -> Option<WindowAction> {
        match event {
            WindowEvent::CloseRequested => Some(WindowAction::Close),
            WindowEvent::Resized(size) => Some(WindowAction::Resize(*size)),
            WindowEvent::RedrawRequested => Some(WindowAction::Redraw),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(WindowAction::Key {
                    code,
                    pressed: event.state == ElementState::Pressed,
                }),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn get_window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    /// Drops the window. The surface must already be gone.
    pub fn destroy(&mut self) {
        if self.window.take().is_some() {
            info!("Window destroyed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_maps_to_close() {
        assert_eq!(
            WindowManager::translate_event(&WindowEvent::CloseRequested),
            Some(WindowAction::Close)
        );
    }

    #[test]
    fn resize_forwards_exact_size() {
        let size = PhysicalSize::new(1280, 720);
        assert_eq!(
            WindowManager::translate_event(&WindowEvent::Resized(size)),
            Some(WindowAction::Resize(size))
        );
    }

    #[test]
    fn redraw_maps_to_redraw() {
        assert_eq!(
            WindowManager::translate_event(&WindowEvent::RedrawRequested),
            Some(WindowAction::Redraw)
        );
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(WindowManager::translate_event(&WindowEvent::Focused(true)), None);
        assert_eq!(WindowManager::translate_event(&WindowEvent::Destroyed), None);
    }

    #[test]
    fn new_manager_has_no_window() {
        let mut manager = WindowManager::new();
        assert!(manager.get_window().is_none());
        manager.request_redraw();
        manager.destroy();
    }
}
