use approx::assert_relative_eq;
use conway_mesh::{generate, make_dual, MeshError, Session};

fn counts(notation: &str) -> (usize, usize, usize) {
    let p = generate(notation).unwrap().polyhedron;
    (p.face_count(), p.vertex_count(), p.edges().len())
}

#[test]
fn cube() {
    assert_eq!(counts("C"), (6, 8, 12));
}

#[test]
fn dual_cube_has_octahedron_counts() {
    let result = generate("dC").unwrap();
    assert_eq!(result.trace, "dC executed as O");
    assert_eq!(result.polyhedron.face_count(), 8);
    assert_eq!(result.polyhedron.vertex_count(), 6);
}

#[test]
fn ambo_cube() {
    assert_eq!(counts("aC"), (14, 12, 24));
}

#[test]
fn kis_tetrahedron() {
    assert_eq!(counts("kT"), (12, 8, 18));
}

#[test]
fn gyro_and_propellor_cube() {
    assert_eq!(counts("gC"), (24, 38, 60));
    assert_eq!(counts("pC"), (30, 32, 60));
}

#[test]
fn snub_cube() {
    // s expands to dgd, then gd collapses to g
    let result = generate("sC").unwrap();
    assert_eq!(result.trace, "sC executed as dgC");
    assert_eq!(result.summary(), "(38 faces, 60 edges, 24 vertices)");
}

#[test]
fn parametric_seeds() {
    assert_eq!(counts("P6"), (8, 12, 18));
    assert_eq!(counts("A7"), (16, 14, 28));
    assert_eq!(counts("Y5"), (6, 6, 10));
}

#[test]
fn degenerate_parametric_seeds_are_platonic() {
    assert_eq!(generate("P4").unwrap().trace, "P4 executed as C");
    assert_eq!(generate("A3").unwrap().trace, "A3 executed as O");
    assert_eq!(generate("Y3").unwrap().trace, "Y3 executed as T");
}

#[test]
fn double_dual_restores_counts_and_name() {
    for notation in ["kT", "aD", "gP5", "pA4", "k5Y5"] {
        let p = generate(notation).unwrap().polyhedron;
        let back = make_dual(&make_dual(&p).unwrap()).unwrap();
        assert_eq!(back.name, p.name);
        assert_eq!(back.face_count(), p.face_count());
        assert_eq!(back.vertex_count(), p.vertex_count());
    }
}

#[test]
fn ambo_then_dual_reuses_cache() {
    let mut session = Session::new();
    session.generate("aC").unwrap();
    let seeds_before = session.stats().seeds_built;
    session.generate("daC").unwrap();
    assert_eq!(session.stats().seeds_built, seeds_before);
}

#[test]
fn reflect_twice_restores_positions() {
    let once = generate("rgC").unwrap().polyhedron;
    let mut twice = once.clone();
    twice.reflect();
    twice.reflect();
    assert_eq!(twice.faces, once.faces);
    for (a, b) in twice.vertices.iter().zip(&once.vertices) {
        assert_relative_eq!((*a - *b).length(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn canonical_cube_is_tangent_to_unit_sphere() {
    let p = generate("cC").unwrap().polyhedron;
    assert_eq!(p.name, "cC");
    for (a, b) in p.edges() {
        let (va, vb) = (p.vertices[a], p.vertices[b]);
        let d = vb - va;
        let foot = va - d * (d.dot(va) / d.length_squared());
        assert_relative_eq!(foot.length(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn rejected_input_is_not_internal() {
    for bad in ["", "C3", "kx", "4C", "Y2", "aCT"] {
        let err = generate(bad).unwrap_err();
        assert!(matches!(err, MeshError::Notation(_)), "{bad}: {err}");
        assert!(!err.is_internal());
    }
}
