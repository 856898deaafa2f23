// Host-side tests for sphere geometry generation.

use globe_core::mesh::SphereGeometry;

#[test]
fn globe_sphere_has_expected_counts() {
    let g = SphereGeometry::new(5.0, 64, 64);
    assert_eq!(g.vertices.len(), 65 * 65);
    // pole rows contribute one triangle per quad
    assert_eq!(g.index_count(), 64 * 64 * 6 - 64 * 6);
    assert_eq!(g.index_count(), 24192);
}

#[test]
fn vertices_lie_on_the_sphere_with_outward_normals() {
    let g = SphereGeometry::new(5.0, 32, 16);
    for v in &g.vertices {
        let p = glam::Vec3::from(v.position);
        assert!((p.length() - 5.0).abs() < 1e-4);
        let n = glam::Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.dot(p) > 0.0);
    }
}

#[test]
fn indices_are_in_range() {
    let g = SphereGeometry::new(1.0, 16, 16);
    let n = g.vertices.len() as u32;
    assert!(g.indices.iter().all(|&i| i < n));
    assert_eq!(g.indices.len() % 3, 0);
}

#[test]
fn uvs_cover_the_unit_square() {
    let g = SphereGeometry::new(1.0, 8, 8);
    for v in &g.vertices {
        let [u, w] = v.uv;
        assert!((-0.1..=1.1).contains(&u));
        assert!((0.0..=1.0).contains(&w));
    }
    // first row is the north pole
    assert!((g.vertices[0].position[1] - 1.0).abs() < 1e-6);
}

#[test]
fn tiny_segment_counts_are_raised() {
    let g = SphereGeometry::new(1.0, 1, 1);
    assert_eq!(g.vertices.len(), 4 * 3);
}
