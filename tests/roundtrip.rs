//! The source printer must produce programs that parse back to the same tree.

use igra::parser::{parse, print_program, render_tree, tokenize, with_program};
use proptest::prelude::*;
use rstest::rstest;

/// Parse, print, re-parse: returns (outline, printed, outline again, printed again).
fn round_trip(source: &str) -> (String, String, String, String) {
    let (tree, printed) = with_program(source, |_, program| {
        (render_tree(program), print_program(program))
    })
    .expect("original program should parse");

    let tokens = tokenize(&printed).expect("printed program should lex");
    let reparsed = parse(&tokens).expect("printed program should parse");

    (tree, printed, render_tree(&reparsed), print_program(&reparsed))
}

#[rstest]
#[case::minimal("zapocni_igru zavrsi_igru;")]
#[case::declaration_and_print("moj broj x = 5; zapocni_igru napisi(x); zavrsi_igru;")]
#[case::functions(
    "broj max(broj a, broj b) { ako (a > b) { vrati a; } inace { vrati b; } }\n\
     realan pola(realan r) { vrati r / 2.0; }\n\
     zapocni_igru napisi(max(1, pola(3.0))); zavrsi_igru;"
)]
#[case::arrays("moj niz t[2][]; zapocni_igru t[0][1] = -(t[1][0] + 1) * 2; zavrsi_igru;")]
#[case::loops(
    "zapocni_igru moj broj k = 0; radi (k < 10 ili !tacno) { k = k + 1; } \
     radi (k > 0) k = k - 1; zavrsi_igru;"
)]
#[case::builtins(
    "moje slovo c = 'x'; moj tekst t = \"\"; \
     zapocni_igru upisi(t); enkriptuj(t); dekriptuj(t); napisi(c); ; { } zavrsi_igru;"
)]
#[case::nested_groups("zapocni_igru x = ((1)) - (2 - (3 - 4)) % !(a i b); zavrsi_igru;")]
fn test_printed_program_reparses(#[case] source: &str) {
    let (tree, printed, reparsed_tree, reprinted) = round_trip(source);
    assert_eq!(tree, reparsed_tree, "printed source:\n{}", printed);
    assert_eq!(printed, reprinted);
}

/// Random, syntactically valid expression text.
fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "v[a-z0-9_]{0,3}",
        (0..10_000i32).prop_map(|n| n.to_string()),
        "[0-9]{1,3}\\.[0-9]{1,2}",
        "\"[a-z ]{0,5}\"",
        "'[a-z]'",
        prop::sample::select(vec!["tacno", "netacno"]).prop_map(str::to_string),
    ];

    leaf.prop_recursive(4, 32, 3, |inner| {
        let operator = prop::sample::select(vec![
            "ili", "i", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "%",
        ]);
        prop_oneof![
            (inner.clone(), operator, inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            (prop::sample::select(vec!["-", "!"]), inner.clone())
                .prop_map(|(op, right)| format!("{}{}", op, right)),
            inner.clone().prop_map(|e| format!("({})", e)),
            ("f[a-z]{0,3}", prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(name, args)| format!("{}({})", name, args.join(", "))),
            ("n[0-9]{0,3}", prop::collection::vec(inner, 1..3)).prop_map(|(name, indices)| {
                let indices: String = indices.iter().map(|i| format!("[{}]", i)).collect();
                format!("{}{}", name, indices)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_round_trip(expr in expression_strategy()) {
        let source = format!("zapocni_igru x = {}; zavrsi_igru;", expr);
        let (tree, _, reparsed_tree, _) = round_trip(&source);
        prop_assert_eq!(tree, reparsed_tree);
    }
}
