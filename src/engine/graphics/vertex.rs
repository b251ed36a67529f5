#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    /// Layout of the vertex buffer: one tightly packed `vec3<f32>` at location 0.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0] }, // left
    Vertex { position: [ 0.5, -0.5, 0.0] }, // right
    Vertex { position: [ 0.0,  0.5, 0.0] }, // top
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_nine_floats() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(TRIANGLE_VERTICES.len(), 3);
        assert_eq!(floats.len(), 9);
        assert_eq!(
            floats,
            &[-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]
        );
    }

    #[test]
    fn layout_is_one_float3_attribute() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 3 * std::mem::size_of::<f32>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);

        let attribute = layout.attributes[0];
        assert_eq!(attribute.shader_location, 0);
        assert_eq!(attribute.offset, 0);
        assert_eq!(attribute.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn buffer_size_matches_vertex_data() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 36);
    }
}
