use super::*;
use crate::HppError;
use crate::ast::Value;
use crate::resolver::Aliases;

#[test]
fn test_parse_medical_treatment_scenario() {
    let input = r#"
        class Bandaging {
            class BasicBandage { effectiveness = 0.5; };
            class Tourniquet : BasicBandage { reopeningChance[] = {0.1,0.2}; };
        };
    "#;

    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    println!("--- Parsed Tree ---");
    println!("{:#?}", root);

    assert_eq!(root.name, "");
    assert_eq!(root.class_names(), vec!["Bandaging"]);

    let bandaging = root.class("Bandaging").expect("Bandaging should exist");
    assert_eq!(bandaging.class_names(), vec!["BasicBandage", "Tourniquet"]);

    let tourniquet = bandaging.class("Tourniquet").expect("Tourniquet should exist");
    assert_eq!(
        tourniquet.variable("effectiveness").expect("inherited variable"),
        &Value::Number(0.5)
    );
    assert_eq!(
        tourniquet.variable("reopeningChance").expect("own variable"),
        &Value::Array(vec![Value::Number(0.1), Value::Number(0.2)])
    );
}

#[test]
fn test_inherited_variables_are_independent_copies() {
    let input = "class A { x = 1; }; class B : A { y = 2; };";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    let a = root.class("A").unwrap();
    let b = root.class("B").unwrap();

    assert_eq!(a.variable_names(), vec!["x"]);
    assert_eq!(b.variable("x").unwrap(), &Value::Number(1.0));
    assert_eq!(b.variable("y").unwrap(), &Value::Number(2.0));

    // mutating one copy must not reach the other
    let mut b_owned = b.clone();
    b_owned.set_variable("x".to_string(), Value::Number(9.0));
    assert_eq!(a.variable("x").unwrap(), &Value::Number(1.0));
}

#[test]
fn test_later_assignment_overwrites_case_insensitively() {
    let input = "x = 1; X = 2;";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    assert_eq!(root.variable_names(), vec!["x"]);
    assert_eq!(root.variable("x").unwrap(), &Value::Number(2.0));
}

#[test]
fn test_own_assignment_overwrites_inherited_value() {
    let input = "class A { x = 1; y = 2; }; class B : A { x = 5; };";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    let b = root.class("B").unwrap();
    assert_eq!(b.variable("x").unwrap(), &Value::Number(5.0));
    assert_eq!(b.variable("y").unwrap(), &Value::Number(2.0));
    assert_eq!(b.variable_names(), vec!["x", "y"]);
}

#[test]
fn test_inherit_resolves_by_walking_enclosing_scopes() {
    let input = r#"
        class Base { v = 7; };
        class Outer {
            class Mid {
                class Leaf : Base { own = 1; };
            };
        };
    "#;
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    let leaf = root
        .class("Outer")
        .and_then(|outer| outer.class("Mid"))
        .and_then(|mid| mid.class("Leaf"))
        .expect("Leaf should exist");

    assert_eq!(leaf.variable("v").unwrap(), &Value::Number(7.0));
    assert_eq!(leaf.variable("own").unwrap(), &Value::Number(1.0));
}

#[test]
fn test_inherit_from_immediate_parent_by_name() {
    let input = "class Painkillers { count = 10; class Painkillers : Painkillers { }; };";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    let inner = root
        .class("Painkillers")
        .and_then(|outer| outer.class("Painkillers"))
        .expect("inner Painkillers should exist");
    assert_eq!(inner.variable("count").unwrap(), &Value::Number(10.0));
}

#[test]
fn test_inherit_target_matches_case_insensitively() {
    let input = "class Bandage { b = 1; }; class Z : bandage { };";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    assert!(root.has_class("BANDAGE"));
    let z = root.class("Z").unwrap();
    assert_eq!(z.variable("b").unwrap(), &Value::Number(1.0));
}

#[test]
fn test_duplicate_siblings_accumulate_and_latest_wins() {
    let input = "class Twin { x = 1; }; class Twin { x = 2; }; class C : Twin { };";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    assert_eq!(root.classes.len(), 3);
    assert_eq!(root.class("Twin").unwrap().variable("x").unwrap(), &Value::Number(2.0));
    assert_eq!(root.class("C").unwrap().variable("x").unwrap(), &Value::Number(2.0));
}

#[test]
fn test_alias_table_supplies_implicit_inherit() {
    let aliases = Aliases::from_pairs([("FieldDressing", "BasicBandage")]);
    let input = "class BasicBandage { e = 0.5; }; class FieldDressing { };";
    let root = Parser::with_aliases(aliases)
        .parse_document(input)
        .expect("Failed to parse document");

    let dressing = root.class("FieldDressing").unwrap();
    assert_eq!(dressing.variable("e").unwrap(), &Value::Number(0.5));
}

#[test]
fn test_alias_to_missing_target_is_unresolved() {
    let aliases = Aliases::from_pairs([("Ghosty", "Missing")]);
    let err = Parser::with_aliases(aliases)
        .parse_document("class Ghosty { };")
        .unwrap_err();

    match err {
        HppError::UnresolvedInherit { target, .. } => assert_eq!(target, "Missing"),
        other => panic!("Expected UnresolvedInherit, got {:?}", other),
    }
}

#[test]
fn test_explicit_inherit_to_missing_target_is_unresolved() {
    let err = Parser::new().parse_document("class B : Nope { };").unwrap_err();
    match err {
        HppError::UnresolvedInherit { target, class, .. } => {
            assert_eq!(target, "Nope");
            assert_eq!(class, "B");
        }
        other => panic!("Expected UnresolvedInherit, got {:?}", other),
    }
}

#[test]
fn test_value_coercion_rules() {
    let input = r#"
        s = "abc";
        quoted_number = "1.5";
        n = 1.5;
        t = token;
        arr[] = {1, 2, "x"};
        empty[] = {};
        glued[] = {"a,b", 3};
    "#;
    let root = Parser::new().parse_document(input).expect("Failed to parse document");

    assert_eq!(root.variable("s").unwrap(), &Value::String("abc".into()));
    assert_eq!(root.variable("quoted_number").unwrap(), &Value::String("1.5".into()));
    assert_eq!(root.variable("n").unwrap(), &Value::Number(1.5));
    assert_eq!(root.variable("t").unwrap(), &Value::String("token".into()));
    assert_eq!(
        root.variable("arr").unwrap(),
        &Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::String("x".into()),
        ])
    );
    assert_eq!(root.variable("empty").unwrap(), &Value::Array(Vec::new()));
    assert_eq!(
        root.variable("glued").unwrap(),
        &Value::Array(vec![Value::String("a,b".into()), Value::Number(3.0)])
    );
}

#[test]
fn test_parsing_is_deterministic() {
    let input = "class A { x = 1; class B { y = 2; }; };";
    let first = Parser::new().parse_document(input).expect("Failed to parse document");
    let second = Parser::new().parse_document(input).expect("Failed to parse document");
    assert_eq!(first, second);
}

#[test]
fn test_forward_declaration_produces_no_node() {
    let input = "class Forward; class A { };";
    let root = Parser::new().parse_document(input).expect("Failed to parse document");
    assert_eq!(root.class_names(), vec!["A"]);
}

#[test]
fn test_malformed_variable_aborts_the_parse() {
    let err = Parser::new().parse_document("class A { x = ; };").unwrap_err();
    assert!(matches!(err, HppError::MalformedVariable { .. }));
}

#[test]
fn test_lookup_failures_on_finished_tree() {
    let root = Parser::new()
        .parse_document("class A { x = 1; };")
        .expect("Failed to parse document");

    assert!(matches!(root.class("Nope"), Err(HppError::UnknownClass { .. })));
    assert!(matches!(
        root.class("A").unwrap().variable("nope"),
        Err(HppError::UnknownVariable { .. })
    ));
}
