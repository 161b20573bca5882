use conway_notation::{compile, rewrite, Operation};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "k", "k0", "k3", "k4", "k5", "t", "t0", "t3", "t6", "a", "j", "s", "g", "e", "b", "o",
        "m", "d", "c", "r", "p",
    ])
}

fn seed() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["T", "O", "C", "I", "D"]).prop_map(String::from),
        (3u32..9).prop_map(|n| format!("P{n}")),
        (3u32..9).prop_map(|n| format!("A{n}")),
        (3u32..9).prop_map(|n| format!("Y{n}")),
    ]
}

fn notation() -> impl Strategy<Value = String> {
    (prop::collection::vec(operator(), 0..6), seed())
        .prop_map(|(ops, seed)| format!("{}{}", ops.concat(), seed))
}

#[test]
fn truncate_is_dual_kis_dual() {
    assert_eq!(rewrite("t3").output, rewrite("dk3d").output);
}

#[test]
fn join_is_dual_ambo_dual() {
    assert_eq!(rewrite("j").output, rewrite("dad").output);
}

#[test]
fn snub_is_dual_gyro_dual() {
    assert_eq!(rewrite("sI").output, rewrite("dgdI").output);
}

proptest! {
    #[test]
    fn valid_notation_always_compiles(input in notation()) {
        let compiled = compile(&input);
        prop_assert!(compiled.is_ok(), "{input}: {compiled:?}");
    }

    #[test]
    fn compiled_notation_uses_primitives_only(input in notation()) {
        let compiled = compile(&input).unwrap();
        let aliased = compiled.notation().contains(|c: char| "tjsebom".contains(c));
        prop_assert!(!aliased, "{} kept an alias", compiled.notation());
        for token in &compiled.program.operations {
            let primitive = matches!(
                token.operation,
                Operation::Kis { .. }
                    | Operation::Ambo
                    | Operation::Gyro
                    | Operation::Propellor
                    | Operation::Dual
                    | Operation::Canonicalize
                    | Operation::Reflect
            );
            prop_assert!(primitive, "{} in {}", token.operation, compiled.notation());
        }
    }

    #[test]
    fn double_dual_cancels(input in notation()) {
        let doubled = format!("dd{input}");
        prop_assert_eq!(compile(&doubled).unwrap().program, compile(&input).unwrap().program);
    }

    #[test]
    fn ambo_absorbs_dual(input in notation()) {
        let with_dual = format!("ad{input}");
        let without = format!("a{input}");
        prop_assert_eq!(rewrite(&with_dual).output, rewrite(&without).output);
    }

    #[test]
    fn rewriting_is_idempotent(input in notation()) {
        let once = rewrite(&input).output;
        prop_assert_eq!(rewrite(&once).output, once.clone());
    }
}
