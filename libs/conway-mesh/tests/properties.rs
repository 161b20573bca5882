use conway_mesh::{generate, make_dual, Session};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "k", "k0", "k3", "k4", "k5", "t", "t0", "a", "j", "s", "g", "e", "b", "o", "m", "d", "c",
        "r", "p",
    ])
}

fn seed() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["T", "O", "C", "I", "D"]).prop_map(String::from),
        (3u32..8).prop_map(|n| format!("P{n}")),
        (3u32..8).prop_map(|n| format!("A{n}")),
        (3u32..8).prop_map(|n| format!("Y{n}")),
    ]
}

fn notation() -> impl Strategy<Value = String> {
    (prop::collection::vec(operator(), 0..3), seed())
        .prop_map(|(ops, seed)| format!("{}{}", ops.concat(), seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_result_is_closed_and_satisfies_euler(input in notation()) {
        let result = generate(&input).unwrap();
        let p = &result.polyhedron;
        prop_assert!(p.validate().is_ok(), "{}: {:?}", input, p.validate());
        prop_assert_eq!(p.edges().len(), p.edge_count(), "{}", input);
    }

    #[test]
    fn result_name_is_the_canonical_notation(input in notation()) {
        let result = generate(&input).unwrap();
        let canonical = result.trace.rsplit(' ').next().unwrap_or_default().to_string();
        prop_assert_eq!(&result.polyhedron.name, &canonical);
    }

    #[test]
    fn double_dual_preserves_counts(input in notation()) {
        let p = generate(&input).unwrap().polyhedron;
        let back = make_dual(&make_dual(&p).unwrap()).unwrap();
        prop_assert_eq!(back.face_count(), p.face_count());
        prop_assert_eq!(back.vertex_count(), p.vertex_count());
        prop_assert_eq!(&back.name, &p.name);
    }

    #[test]
    fn cached_session_matches_fresh_build(first in notation(), second in notation()) {
        let mut session = Session::new();
        session.generate(&first).unwrap();
        let cached = session.generate(&second).unwrap().polyhedron;
        let fresh = generate(&second).unwrap().polyhedron;
        prop_assert_eq!(&cached.name, &fresh.name);
        prop_assert_eq!(cached.face_count(), fresh.face_count());
        prop_assert_eq!(cached.vertex_count(), fresh.vertex_count());
    }
}
