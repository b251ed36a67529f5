//! Fixed program settings.

/// Window and frame settings for the triangle demo.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Inner window width in physical pixels.
    pub width: u32,
    /// Inner window height in physical pixels.
    pub height: u32,
    pub title: String,
    /// Color the frame is cleared to before the triangle is drawn.
    pub clear_color: wgpu::Color,
    pub present_mode: wgpu::PresentMode,
}

pub const SCR_WIDTH: u32 = 800;
pub const SCR_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "First proper OpenGL window";

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: SCR_WIDTH,
            height: SCR_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            clear_color: CLEAR_COLOR,
            // Fifo waits for vsync on present and is supported everywhere.
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_fixed_size_and_title() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "First proper OpenGL window");
    }

    #[test]
    fn default_clear_color_is_opaque_teal() {
        let color = AppConfig::default().clear_color;
        assert_eq!((color.r, color.g, color.b, color.a), (0.2, 0.3, 0.3, 1.0));
    }

    #[test]
    fn default_present_mode_is_vsync() {
        assert_eq!(AppConfig::default().present_mode, wgpu::PresentMode::Fifo);
    }
}
