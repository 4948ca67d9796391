use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::mesh::{Mesh, Vertex};

/// Face normal plus the two in-plane axes, with `u x v == normal`
const BOX_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Axis-aligned cube spanning [-0.5, 0.5] on every axis.
/// Each face maps the whole texture once.
pub fn unit_box() -> Mesh {
    let mut mesh = Mesh::default();

    for (normal, u, v) in BOX_FACES {
        let (n, u, v) = (Vec3::from(normal), Vec3::from(u), Vec3::from(v));
        let center = n * 0.5;
        let base = mesh.vertices.len() as u32;

        for (corner, uv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .into_iter()
            .zip(FACE_UVS)
        {
            let position = center + u * (0.5 * corner.0) + v * (0.5 * corner.1);
            mesh.vertices.push(Vertex::new(position.to_array(), normal, uv));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

/// Upward-facing square at y = 0 spanning `[-half_extent, half_extent]`,
/// with the texture repeated `uv_repeat` times along each side.
pub fn ground_quad(half_extent: f32, uv_repeat: f32) -> Mesh {
    let h = half_extent;
    let r = uv_repeat;
    let up = [0.0, 1.0, 0.0];

    Mesh {
        vertices: vec![
            Vertex::new([-h, 0.0, -h], up, [0.0, 0.0]),
            Vertex::new([h, 0.0, -h], up, [r, 0.0]),
            Vertex::new([h, 0.0, h], up, [r, r]),
            Vertex::new([-h, 0.0, h], up, [0.0, r]),
        ],
        indices: vec![0, 2, 1, 0, 3, 2],
    }
}

/// 1x1 horizontal quad centred on the origin
pub fn unit_quad() -> Mesh {
    ground_quad(0.5, 1.0)
}

/// Torus around the Z axis: the ring lies in the XY plane.
///
/// `tube_radius` is the radius of the cross-section, `ring_radius` the distance
/// from the centre to the middle of the tube.
pub fn torus(tube_radius: f32, ring_radius: f32, sides: u32, rings: u32) -> Mesh {
    let mut mesh = Mesh::default();

    mesh.push_grid(sides, rings, |side, ring| {
        let theta = TAU * ring as f32 / rings as f32;
        let phi = TAU * side as f32 / sides as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        let spoke = ring_radius + tube_radius * cos_phi;
        Vertex::new(
            [spoke * cos_theta, spoke * sin_theta, tube_radius * sin_phi],
            [cos_phi * cos_theta, cos_phi * sin_theta, sin_phi],
            [ring as f32 / rings as f32, side as f32 / sides as f32],
        )
    });

    mesh
}

/// UV sphere centred on the origin with poles on the Y axis
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> Mesh {
    let mut mesh = Mesh::default();

    mesh.push_grid(slices, stacks, |slice, stack| {
        let polar = PI * stack as f32 / stacks as f32;
        let azimuth = TAU * slice as f32 / slices as f32;
        let (sin_polar, cos_polar) = polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();

        let normal = [sin_polar * cos_azimuth, cos_polar, sin_polar * sin_azimuth];
        Vertex::new(
            [normal[0] * radius, normal[1] * radius, normal[2] * radius],
            normal,
            [slice as f32 / slices as f32, 1.0 - stack as f32 / stacks as f32],
        )
    });

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(mesh: &Mesh, triangle: usize) -> Vec3 {
        let [a, b, c] = mesh.triangles().nth(triangle).unwrap();
        let (a, b, c) = (Vec3::from(a.position), Vec3::from(b.position), Vec3::from(c.position));
        (b - a).cross(c - a).normalize()
    }

    #[test]
    fn box_faces_wind_outwards() {
        let mesh = unit_box();
        for tri in 0..mesh.triangle_count() {
            let [a, _, _] = mesh.triangles().nth(tri).unwrap();
            let expected = Vec3::from(a.normal);
            assert!(face_normal(&mesh, tri).dot(expected) > 0.99, "triangle {tri}");
        }
    }

    #[test]
    fn ground_faces_up() {
        let mesh = ground_quad(120.0, 25.0);
        assert!(face_normal(&mesh, 0).dot(Vec3::Y) > 0.99);
        assert!(face_normal(&mesh, 1).dot(Vec3::Y) > 0.99);
    }
}
