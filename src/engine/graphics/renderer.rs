use anyhow::Result;
use log::{debug, info};
use wgpu::util::DeviceExt;

use crate::engine::graphics::gpu::GpuContext;
use crate::engine::graphics::release::ReleaseReport;
use crate::engine::graphics::shader::{
    compile_shader, validated, FRAGMENT_ENTRY_POINT, FRAGMENT_SHADER_SOURCE, VERTEX_ENTRY_POINT,
    VERTEX_SHADER_SOURCE,
};
use crate::engine::graphics::vertex::{Vertex, TRIANGLE_VERTICES};
use crate::engine::window::Viewport;

/// Owns the pipeline and vertex buffer for the triangle.
pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    clear_color: wgpu::Color,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        viewport: Viewport,
        clear_color: wgpu::Color,
    ) -> Result<Self> {
        let vertex_shader = compile_shader(device, "Triangle Vertex Shader", VERTEX_SHADER_SOURCE)?;
        let fragment_shader =
            compile_shader(device, "Triangle Fragment Shader", FRAGMENT_SHADER_SOURCE)?;

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Triangle Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let render_pipeline = validated(device, "linking triangle pipeline", |device| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Triangle Pipeline"),
                layout: Some(&render_pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vertex_shader,
                    entry_point: VERTEX_ENTRY_POINT,
                    buffers: &[Vertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment_shader,
                    entry_point: FRAGMENT_ENTRY_POINT,
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
        })?;

        // The pipeline keeps what it needs; the stage modules go now.
        drop(vertex_shader);
        drop(fragment_shader);
        debug!("Released shader modules after linking");

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Triangle Vertex Buffer"),
            contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        info!("Uploaded {} vertices", TRIANGLE_VERTICES.len());

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            vertex_count: TRIANGLE_VERTICES.len() as u32,
            clear_color,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn render(&self, gpu: &GpuContext) -> Result<(), wgpu::SurfaceError> {
        // Nothing to present into while minimized.
        if self.viewport.is_empty() {
            return Ok(());
        }

        let frame = gpu.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let viewport = self.viewport.clamped_to(gpu.config.width, gpu.config.height);
            render_pass.set_viewport(
                viewport.x as f32,
                viewport.y as f32,
                viewport.width as f32,
                viewport.height as f32,
                0.0,
                1.0,
            );
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Releases the vertex buffer and the pipeline, one each.
    pub fn release(self) -> ReleaseReport {
        let mut report = ReleaseReport::default();
        report.release(self.vertex_buffer);
        report.release(self.render_pipeline);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::graphics::headless::headless_device;

    fn build(device: &wgpu::Device) -> Renderer {
        Renderer::new(
            device,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            Viewport::new(800, 600),
            wgpu::Color::BLACK,
        )
        .unwrap()
    }

    #[test]
    fn links_pipeline_on_headless_device() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        let renderer = build(&device);
        assert_eq!(renderer.vertex_count, 3);
        assert_eq!(renderer.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn release_frees_one_buffer_and_one_pipeline() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        let report = build(&device).release();
        assert_eq!(report, ReleaseReport { vertex_buffers: 1, pipelines: 1 });
        assert!(report.is_complete());
    }

    #[test]
    fn set_viewport_takes_exact_size() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        let mut renderer = build(&device);
        renderer.set_viewport(Viewport::new(1, 4097));
        assert_eq!(renderer.viewport(), Viewport::new(1, 4097));
    }
}
