//! # Platonic Seeds
//!
//! The five fixed seeds, with vertices near the unit sphere.

use crate::mesh::Polyhedron;
use glam::DVec3;

fn from_tables(name: &str, faces: &[&[usize]], coords: &[[f64; 3]]) -> Polyhedron {
    Polyhedron::new(
        name,
        faces.iter().map(|face| face.to_vec()).collect(),
        coords.iter().map(|&c| DVec3::from_array(c)).collect(),
    )
}

/// Tetrahedron `T`: 4 triangles.
pub fn tetrahedron() -> Polyhedron {
    from_tables(
        "T",
        &[&[0, 1, 2], &[0, 2, 3], &[0, 3, 1], &[1, 3, 2]],
        &[
            [1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
        ],
    )
}

/// Octahedron `O`: 8 triangles.
pub fn octahedron() -> Polyhedron {
    from_tables(
        "O",
        &[
            &[0, 1, 2],
            &[0, 2, 3],
            &[0, 3, 4],
            &[0, 4, 1],
            &[1, 4, 5],
            &[1, 5, 2],
            &[2, 5, 3],
            &[3, 5, 4],
        ],
        &[
            [0.0, 0.0, 1.414],
            [1.414, 0.0, 0.0],
            [0.0, 1.414, 0.0],
            [-1.414, 0.0, 0.0],
            [0.0, -1.414, 0.0],
            [0.0, 0.0, -1.414],
        ],
    )
}

/// Cube `C`: 6 squares.
pub fn cube() -> Polyhedron {
    from_tables(
        "C",
        &[
            &[3, 0, 1, 2],
            &[3, 4, 5, 0],
            &[0, 5, 6, 1],
            &[1, 6, 7, 2],
            &[2, 7, 4, 3],
            &[5, 4, 7, 6],
        ],
        &[
            [0.707, 0.707, 0.707],
            [-0.707, 0.707, 0.707],
            [-0.707, -0.707, 0.707],
            [0.707, -0.707, 0.707],
            [0.707, -0.707, -0.707],
            [0.707, 0.707, -0.707],
            [-0.707, 0.707, -0.707],
            [-0.707, -0.707, -0.707],
        ],
    )
}

/// Icosahedron `I`: 20 triangles.
pub fn icosahedron() -> Polyhedron {
    from_tables(
        "I",
        &[
            &[0, 1, 2],
            &[0, 2, 3],
            &[0, 3, 4],
            &[0, 4, 5],
            &[0, 5, 1],
            &[1, 5, 7],
            &[1, 7, 6],
            &[1, 6, 2],
            &[2, 6, 8],
            &[2, 8, 3],
            &[3, 8, 9],
            &[3, 9, 4],
            &[4, 9, 10],
            &[4, 10, 5],
            &[5, 10, 7],
            &[6, 7, 11],
            &[6, 11, 8],
            &[7, 10, 11],
            &[8, 11, 9],
            &[9, 11, 10],
        ],
        &[
            [0.0, 0.0, 1.176],
            [1.051, 0.0, 0.526],
            [0.324, 1.0, 0.525],
            [-0.851, 0.618, 0.526],
            [-0.851, -0.618, 0.526],
            [0.325, -1.0, 0.526],
            [0.851, 0.618, -0.526],
            [0.851, -0.618, -0.526],
            [-0.325, 1.0, -0.526],
            [-1.051, 0.0, -0.526],
            [-0.325, -1.0, -0.526],
            [0.0, 0.0, -1.176],
        ],
    )
}

/// Dodecahedron `D`: 12 pentagons.
pub fn dodecahedron() -> Polyhedron {
    from_tables(
        "D",
        &[
            &[0, 1, 4, 7, 2],
            &[0, 2, 6, 9, 3],
            &[0, 3, 8, 5, 1],
            &[1, 5, 11, 10, 4],
            &[2, 7, 13, 12, 6],
            &[3, 9, 15, 14, 8],
            &[4, 10, 16, 13, 7],
            &[5, 8, 14, 17, 11],
            &[6, 12, 18, 15, 9],
            &[10, 11, 17, 19, 16],
            &[12, 13, 16, 19, 18],
            &[14, 15, 18, 19, 17],
        ],
        &[
            [0.0, 0.0, 1.07047],
            [0.713644, 0.0, 0.797878],
            [-0.356822, 0.618, 0.797878],
            [-0.356822, -0.618, 0.797878],
            [0.797878, 0.618034, 0.356822],
            [0.797878, -0.618, 0.356822],
            [-0.934172, 0.381966, 0.356822],
            [0.136294, 1.0, 0.356822],
            [0.136294, -1.0, 0.356822],
            [-0.934172, -0.381966, 0.356822],
            [0.934172, 0.381966, -0.356822],
            [0.934172, -0.381966, -0.356822],
            [-0.797878, 0.618, -0.356822],
            [-0.136294, 1.0, -0.356822],
            [-0.136294, -1.0, -0.356822],
            [-0.797878, -0.618034, -0.356822],
            [0.356822, 0.618, -0.797878],
            [0.356822, -0.618, -0.797878],
            [-0.713644, 0.0, -0.797878],
            [0.0, 0.0, -1.07047],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let cases = [
            (tetrahedron(), 4, 4, 6),
            (octahedron(), 8, 6, 12),
            (cube(), 6, 8, 12),
            (icosahedron(), 20, 12, 30),
            (dodecahedron(), 12, 20, 30),
        ];
        for (p, faces, vertices, edges) in cases {
            assert_eq!(p.face_count(), faces, "{}", p.name);
            assert_eq!(p.vertex_count(), vertices, "{}", p.name);
            assert_eq!(p.edges().len(), edges, "{}", p.name);
            assert_eq!(p.edge_count(), edges, "{}", p.name);
        }
    }

    #[test]
    fn test_closed() {
        for p in [tetrahedron(), octahedron(), cube(), icosahedron(), dodecahedron()] {
            assert!(p.validate().is_ok(), "{}", p.name);
        }
    }

    #[test]
    fn test_near_unit_sphere() {
        for p in [octahedron(), cube(), icosahedron(), dodecahedron()] {
            for v in &p.vertices {
                let r = v.length();
                assert!((0.9..1.5).contains(&r), "{} radius {r}", p.name);
            }
        }
    }
}
