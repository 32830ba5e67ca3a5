//! Colored vertex format shared with the GPU side

use bytemuck::{Pod, Zeroable};

/// Screen-space position plus straight RGBA
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex with its alpha scaled, for fading popups and overlays
    pub fn faded(self, alpha: f32) -> Self {
        let [r, g, b, a] = self.color;
        Self {
            color: [r, g, b, a * alpha.clamp(0.0, 1.0)],
            ..self
        }
    }

    /// Buffer layout for a vertex-stepped triangle list
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const PARALLAX: [[f32; 4]; 3] = [
        [0.45, 0.55, 0.7, 1.0],
        [0.35, 0.5, 0.45, 1.0],
        [0.25, 0.45, 0.3, 1.0],
    ];
    pub const PLATFORM: [f32; 4] = [0.2, 0.7, 0.3, 1.0];
    pub const BODY: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
    pub const ARMS: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    pub const LEGS: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
    pub const POPUP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride, 24);
        assert_eq!(desc.attributes[1].offset, 8);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&[Vertex::new(1.0, 2.0, colors::BODY)]).len(), 24);
    }

    #[test]
    fn test_faded_scales_alpha_only() {
        let v = Vertex::new(0.0, 0.0, [1.0, 0.5, 0.25, 0.8]).faded(0.5);
        assert_eq!(v.color, [1.0, 0.5, 0.25, 0.4]);
        assert_eq!(Vertex::new(0.0, 0.0, colors::SKY).faded(2.0).color, colors::SKY);
    }
}
