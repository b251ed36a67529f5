use winit::dpi::PhysicalSize;

/// Rectangle of the framebuffer the triangle is drawn into, in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Resize pass-through: the viewport always takes the exact size received.
    pub fn from_size(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Limits the viewport to a render target of the given size.
    pub fn clamped_to(self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_is_exact() {
        for (w, h) in [(800, 600), (1, 1), (1920, 1080), (3, 4097), (0, 0), (0, 600)] {
            let viewport = Viewport::from_size(PhysicalSize::new(w, h));
            assert_eq!(viewport, Viewport { x: 0, y: 0, width: w, height: h });
        }
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(Viewport::new(0, 600).is_empty());
        assert!(Viewport::new(800, 0).is_empty());
        assert!(!Viewport::new(800, 600).is_empty());
    }

    #[test]
    fn clamp_is_identity_when_it_fits() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.clamped_to(800, 600), viewport);
    }

    #[test]
    fn clamp_shrinks_to_target() {
        assert_eq!(Viewport::new(1024, 768).clamped_to(800, 600), Viewport::new(800, 600));
    }
}
