use std::collections::HashSet;

use log::debug;
use winit::keyboard::KeyCode;

/// Result of polling input once per frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputAction {
    None,
    CloseWindow,
}

#[derive(Default)]
pub struct InputHandler {
    pressed_keys: HashSet<KeyCode>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_keyboard_input_event(&mut self, keycode: KeyCode, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(keycode);
        } else {
            self.pressed_keys.remove(&keycode);
        }
    }

    pub fn is_pressed(&self, keycode: KeyCode) -> bool {
        self.pressed_keys.contains(&keycode)
    }

    /// Escape held down closes the window; every other key is ignored.
    pub fn process_input(&self) -> InputAction {
        if self.is_pressed(KeyCode::Escape) {
            debug!("Escape pressed, closing window");
            InputAction::CloseWindow
        } else {
            InputAction::None
        }
    }
}
