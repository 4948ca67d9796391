/// Vertex layout shared by every mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }
}

/// Indexed triangle list
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Triangles as vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                &self.vertices[tri[0] as usize],
                &self.vertices[tri[1] as usize],
                &self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Append a grid of `(columns + 1) x (rows + 1)` vertices as quads.
    /// `vertex(column, row)` produces each vertex.
    pub(crate) fn push_grid(
        &mut self,
        columns: u32,
        rows: u32,
        mut vertex: impl FnMut(u32, u32) -> Vertex,
    ) {
        let base = self.vertices.len() as u32;
        let stride = columns + 1;

        for row in 0..=rows {
            for column in 0..=columns {
                self.vertices.push(vertex(column, row));
            }
        }

        for row in 0..rows {
            for column in 0..columns {
                let a = base + row * stride + column;
                let b = a + stride;
                self.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
    }
}
