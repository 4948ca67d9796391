use glam::Vec3;
use pyramid_walk::geometry::{ground_quad, sphere, torus, unit_box, unit_quad, Mesh};

fn assert_unit_normals(mesh: &Mesh) {
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        let length = Vec3::from(vertex.normal).length();
        assert!((length - 1.0).abs() < 1e-5, "vertex {i} normal length {length}");
    }
}

fn assert_indices_in_range(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0);
    let count = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < count));
}

#[cfg(test)]
mod torus_tests {
    use super::*;

    #[test]
    fn test_hoop_vertex_and_index_counts() {
        let mesh = torus(0.1, 0.6, 20, 30);
        assert_eq!(mesh.vertices.len(), 21 * 31);
        assert_eq!(mesh.indices.len(), 6 * 20 * 30);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn test_vertices_lie_on_surface() {
        let (tube, ring) = (0.1, 0.6);
        let mesh = torus(tube, ring, 20, 30);
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            let radial = (x * x + y * y).sqrt() - ring;
            let residual = radial * radial + z * z - tube * tube;
            assert!(residual.abs() < 1e-5, "{:?} off the surface", vertex.position);
        }
    }

    #[test]
    fn test_normals_point_away_from_tube_centre() {
        let mesh = torus(0.1, 0.6, 20, 30);
        assert_unit_normals(&mesh);
        for vertex in &mesh.vertices {
            let p = Vec3::from(vertex.position);
            let centre = Vec3::new(p.x, p.y, 0.0).normalize() * 0.6;
            let outward = (p - centre).normalize();
            assert!(outward.dot(Vec3::from(vertex.normal)) > 0.999);
        }
    }

    #[test]
    fn test_ring_lies_in_xy_plane() {
        let mesh = torus(0.1, 0.6, 20, 30);
        let max_z = mesh
            .vertices
            .iter()
            .map(|v| v.position[2].abs())
            .fold(0.0f32, f32::max);
        assert!((max_z - 0.1).abs() < 1e-5);
    }
}

#[cfg(test)]
mod solid_tests {
    use super::*;

    #[test]
    fn test_sphere_vertices_at_radius() {
        let mesh = sphere(4.0, 32, 32);
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert_indices_in_range(&mesh);
        assert_unit_normals(&mesh);
        for vertex in &mesh.vertices {
            let length = Vec3::from(vertex.position).length();
            assert!((length - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_poles_on_y_axis() {
        let mesh = sphere(1.0, 8, 8);
        let top = mesh.vertices.first().unwrap();
        let bottom = mesh.vertices.last().unwrap();
        assert!((Vec3::from(top.position) - Vec3::Y).length() < 1e-6);
        assert!((Vec3::from(bottom.position) + Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_box_counts_and_extent() {
        let mesh = unit_box();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_indices_in_range(&mesh);
        assert_unit_normals(&mesh);
        for vertex in &mesh.vertices {
            assert!(vertex.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn test_ground_tiles_texture() {
        let mesh = ground_quad(120.0, 25.0);
        let max_u = mesh.vertices.iter().map(|v| v.uv[0]).fold(0.0f32, f32::max);
        let max_x = mesh.vertices.iter().map(|v| v.position[0]).fold(0.0f32, f32::max);
        assert_eq!(max_u, 25.0);
        assert_eq!(max_x, 120.0);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn test_unit_quad_spans_one_unit() {
        let mesh = unit_quad();
        for vertex in &mesh.vertices {
            assert_eq!(vertex.position[0].abs(), 0.5);
            assert_eq!(vertex.position[2].abs(), 0.5);
        }
    }
}
