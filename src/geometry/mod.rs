mod mesh;
mod solids;

pub use mesh::{Mesh, Vertex};
pub use solids::{ground_quad, sphere, torus, unit_box, unit_quad};
