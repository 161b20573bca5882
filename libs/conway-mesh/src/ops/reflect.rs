//! # Reflect
//!
//! Mirror image through the origin.

use crate::mesh::Polyhedron;

/// Reflects `poly` in place and prefixes `r` to its name.
pub fn reflect(mut poly: Polyhedron) -> Polyhedron {
    log::debug!("Taking reflection of {}", poly.name);
    poly.reflect();
    poly.name = format!("r{}", poly.name);
    poly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds;

    #[test]
    fn test_reflect_renames_and_flips() {
        let t = seeds::tetrahedron();
        let r = reflect(t.clone());
        assert_eq!(r.name, "rT");
        assert_eq!(r.vertices[0], -t.vertices[0]);
        assert_eq!(r.faces[0], vec![2, 1, 0]);
        assert!(r.validate().is_ok());
    }
}
