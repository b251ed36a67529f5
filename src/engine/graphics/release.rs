//! Explicit release of GPU handles at shutdown.

use log::debug;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandleKind {
    VertexBuffer,
    Pipeline,
}

/// A GPU-side object that is released exactly once, by value.
pub trait GpuHandle {
    fn kind(&self) -> HandleKind;
    fn release(self);
}

impl GpuHandle for wgpu::Buffer {
    fn kind(&self) -> HandleKind {
        HandleKind::VertexBuffer
    }

    fn release(self) {
        self.destroy();
    }
}

impl GpuHandle for wgpu::RenderPipeline {
    fn kind(&self) -> HandleKind {
        HandleKind::Pipeline
    }

    fn release(self) {
        drop(self);
    }
}

/// Counts the handles released during shutdown.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ReleaseReport {
    pub vertex_buffers: u32,
    pub pipelines: u32,
}

impl ReleaseReport {
    pub fn release<H: GpuHandle>(&mut self, handle: H) {
        let kind = handle.kind();
        handle.release();
        match kind {
            HandleKind::VertexBuffer => self.vertex_buffers += 1,
            HandleKind::Pipeline => self.pipelines += 1,
        }
        debug!("Released {:?}", kind);
    }

    /// One vertex buffer and one pipeline, nothing more.
    pub fn is_complete(&self) -> bool {
        self.vertex_buffers == 1 && self.pipelines == 1
    }
}
