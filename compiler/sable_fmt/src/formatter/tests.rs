//! Formatter Core Tests
//!
//! One group per node kind, checking the resugaring rules and the
//! parenthesization each form applies to itself.

use pretty_assertions::assert_eq;
use sable_ir::reserved::{CONS, NIL};
use sable_ir::{
    Annotated, Canonical, CanonicalExpr, Def, ExprKind, Listing, Literal, ParsedDef, ParsedExpr,
    Pattern, PortImpl, Raw, Span, Type, Value,
};

use super::*;

// =============================================================================
// Builders
// =============================================================================

type Kind = ExprKind<Span, ParsedDef, Raw, Type<Raw>>;

fn expr(kind: Kind) -> ParsedExpr {
    Annotated::new(Span::new(0, 0), kind)
}

fn var(name: &str) -> ParsedExpr {
    expr(ExprKind::raw_var(name))
}

fn int(n: i64) -> ParsedExpr {
    expr(ExprKind::Literal(Literal::Int(n)))
}

fn lit(literal: Literal) -> ParsedExpr {
    expr(ExprKind::Literal(literal))
}

fn binop(op: &str, left: ParsedExpr, right: ParsedExpr) -> ParsedExpr {
    expr(ExprKind::Binop {
        op: Raw::new(op),
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn app(func: ParsedExpr, arg: ParsedExpr) -> ParsedExpr {
    expr(ExprKind::App {
        func: Box::new(func),
        arg: Box::new(arg),
    })
}

fn lambda(param: Pattern<Raw>, body: ParsedExpr) -> ParsedExpr {
    expr(ExprKind::Lambda {
        param,
        body: Box::new(body),
    })
}

fn data(ctor: &str, args: Vec<ParsedExpr>) -> ParsedExpr {
    expr(ExprKind::Data {
        ctor: ctor.to_string(),
        args,
    })
}

fn pvar(name: &str) -> Pattern<Raw> {
    Pattern::Var(name.to_string())
}

fn pdata(ctor: &str, args: Vec<Pattern<Raw>>) -> Pattern<Raw> {
    Pattern::Data(Raw::new(ctor), args)
}

fn con(name: &str) -> Type<Raw> {
    Type::Con(Raw::new(name))
}

fn arrow(arg: Type<Raw>, result: Type<Raw>) -> Type<Raw> {
    Type::Lambda(Box::new(arg), Box::new(result))
}

fn case(scrutinee: ParsedExpr, branches: Vec<(Pattern<Raw>, ParsedExpr)>) -> ParsedExpr {
    expr(ExprKind::Case {
        scrutinee: Box::new(scrutinee),
        branches,
    })
}

fn let_in(defs: Vec<ParsedDef>, body: ParsedExpr) -> ParsedExpr {
    expr(ExprKind::Let {
        defs,
        body: Box::new(body),
    })
}

fn fmt(e: &ParsedExpr) -> String {
    format_expr(e)
}

fn canonical(
    kind: ExprKind<Span, sable_ir::CanonicalDef, Canonical, Type<Canonical>>,
) -> CanonicalExpr {
    Annotated::new(Span::new(0, 0), kind)
}

// =============================================================================
// Literals and variables
// =============================================================================

#[test]
fn literals() {
    assert_eq!(fmt(&int(42)), "42");
    assert_eq!(fmt(&int(-3)), "-3");
    assert_eq!(fmt(&lit(Literal::Float(1.5))), "1.5");
    assert_eq!(fmt(&lit(Literal::Float(2.0))), "2.0");
    assert_eq!(fmt(&lit(Literal::Bool(true))), "True");
    assert_eq!(fmt(&lit(Literal::Bool(false))), "False");
}

#[test]
fn non_finite_floats_print_as_divisions() {
    assert_eq!(fmt(&lit(Literal::Float(f64::NAN))), "0 / 0");
    assert_eq!(fmt(&lit(Literal::Float(f64::INFINITY))), "1 / 0");
    assert_eq!(fmt(&lit(Literal::Float(f64::NEG_INFINITY))), "-1 / 0");
    assert_eq!(fmt(&app(var("f"), lit(Literal::Float(f64::INFINITY)))), "f (1 / 0)");
}

#[test]
fn negative_literal_arguments_are_parenthesized() {
    assert_eq!(fmt(&app(var("f"), int(-1))), "f (-1)");
    assert_eq!(fmt(&app(var("f"), lit(Literal::Float(-0.5)))), "f (-0.5)");
    assert_eq!(fmt(&app(var("f"), int(1))), "f 1");
}

#[test]
fn char_and_string_escapes() {
    assert_eq!(fmt(&lit(Literal::Char('a'))), "'a'");
    assert_eq!(fmt(&lit(Literal::Char('\''))), "'\\''");
    assert_eq!(fmt(&lit(Literal::Char('"'))), "'\"'");
    assert_eq!(
        fmt(&lit(Literal::Str("say \"hi\"\n\\".to_string()))),
        "\"say \\\"hi\\\"\\n\\\\\""
    );
    assert_eq!(fmt(&lit(Literal::Str("it's".to_string()))), "\"it's\"");
}

#[test]
fn operator_variables_are_parenthesized() {
    assert_eq!(fmt(&var("+")), "(+)");
    assert_eq!(fmt(&app(app(var("::"), var("x")), var("xs"))), "(::) x xs");
    assert_eq!(fmt(&var("map")), "map");
}

#[test]
fn canonical_variables_print_qualified() {
    let map = canonical(ExprKind::Var(Canonical::module(["List"], "map")));
    assert_eq!(format_expr(&map), "List.map");

    let local = canonical(ExprKind::local_var("x"));
    assert_eq!(format_expr(&local), "x");

    let plus = canonical(ExprKind::Var(Canonical::module(["Basics"], "+")));
    assert_eq!(format_expr(&plus), "(Basics.+)");
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn zero_minus_prints_as_negation() {
    assert_eq!(fmt(&binop("-", int(0), var("x"))), "-x");
    assert_eq!(
        fmt(&binop("-", int(0), app(var("f"), var("y")))),
        "-(f y)"
    );
}

#[test]
fn negation_needs_the_exact_shape() {
    assert_eq!(fmt(&binop("-", int(1), var("x"))), "1 - x");
    assert_eq!(fmt(&binop("+", int(0), var("x"))), "0 + x");
    assert_eq!(fmt(&binop("-", var("x"), int(0))), "x - 0");
}

#[test]
fn negation_as_argument_is_parenthesized() {
    assert_eq!(fmt(&app(var("abs"), binop("-", int(0), var("x")))), "abs (-x)");
}

#[test]
fn canonical_subtraction_from_zero_is_negation() {
    let neg = canonical(ExprKind::Binop {
        op: Canonical::module(["Basics"], "-"),
        left: Box::new(canonical(ExprKind::Literal(Literal::Int(0)))),
        right: Box::new(canonical(ExprKind::local_var("n"))),
    });
    assert_eq!(format_expr(&neg), "-n");
}

#[test]
fn nested_operators_keep_parentheses() {
    let e = binop("+", var("a"), binop("*", var("b"), var("c")));
    assert_eq!(fmt(&e), "a + (b * c)");
    let e = binop("*", binop("+", var("a"), var("b")), var("c"));
    assert_eq!(fmt(&e), "(a + b) * c");
}

#[test]
fn alphanumeric_operators_are_backquoted() {
    assert_eq!(fmt(&binop("div", var("a"), int(2))), "a `div` 2");

    let max = canonical(ExprKind::Binop {
        op: Canonical::module(["Basics"], "max"),
        left: Box::new(canonical(ExprKind::local_var("a"))),
        right: Box::new(canonical(ExprKind::local_var("b"))),
    });
    assert_eq!(format_expr(&max), "a `Basics.max` b");
}

#[test]
fn symbolic_canonical_operators_print_bare() {
    let plus = canonical(ExprKind::Binop {
        op: Canonical::module(["Basics"], "+"),
        left: Box::new(canonical(ExprKind::local_var("a"))),
        right: Box::new(canonical(ExprKind::local_var("b"))),
    });
    assert_eq!(format_expr(&plus), "a + b");
}

// =============================================================================
// Application and lambdas
// =============================================================================

#[test]
fn application_chains_flatten() {
    let e = app(app(app(var("f"), var("a")), var("b")), var("c"));
    assert_eq!(fmt(&e), "f a b c");
}

#[test]
fn nested_application_arguments_are_parenthesized() {
    let e = app(app(var("f"), var("a")), app(var("g"), var("b")));
    assert_eq!(fmt(&e), "f a (g b)");
    let e = app(var("f"), app(app(var("g"), var("a")), var("b")));
    assert_eq!(fmt(&e), "f (g a b)");
}

#[test]
fn applied_lambda_is_parenthesized() {
    let e = app(lambda(pvar("x"), var("x")), int(1));
    assert_eq!(fmt(&e), "(\\x -> x) 1");
}

#[test]
fn lambda_chains_flatten() {
    let e = lambda(pvar("a"), lambda(pvar("b"), lambda(pvar("c"), var("a"))));
    assert_eq!(fmt(&e), "\\a b c -> a");
}

#[test]
fn lambda_flattening_stops_at_other_nodes() {
    let inner = lambda(pvar("b"), var("b"));
    let e = lambda(pvar("a"), app(var("f"), inner));
    assert_eq!(fmt(&e), "\\a -> f (\\b -> b)");
}

#[test]
fn lambda_parameters_are_atomic() {
    let e = lambda(pdata("Just", vec![pvar("x")]), var("x"));
    assert_eq!(fmt(&e), "\\(Just x) -> x");

    let pair = lambda(pdata("_Tuple2", vec![pvar("a"), Pattern::Anything]), var("a"));
    assert_eq!(fmt(&pair), "\\(a, _) -> a");
}

#[test]
fn lambda_argument_is_parenthesized() {
    let e = app(app(var("map"), lambda(pvar("x"), var("x"))), var("xs"));
    assert_eq!(fmt(&e), "map (\\x -> x) xs");
}

// =============================================================================
// Constructors
// =============================================================================

#[test]
fn cons_prints_infix_and_right_associative() {
    let list = data(
        CONS,
        vec![int(1), data(CONS, vec![int(2), data(NIL, vec![])])],
    );
    assert_eq!(fmt(&list), "1 :: 2 :: []");
}

#[test]
fn cons_operands_are_atomic() {
    let e = data(CONS, vec![app(var("f"), var("x")), var("xs")]);
    assert_eq!(fmt(&e), "(f x) :: xs");
    let e = app(var("length"), data(CONS, vec![var("x"), var("xs")]));
    assert_eq!(fmt(&e), "length (x :: xs)");
}

#[test]
fn cons_with_wrong_arity_uses_generic_form() {
    let e = data(CONS, vec![var("x")]);
    assert_eq!(fmt(&e), ":: x");
}

#[test]
fn nil_prints_as_empty_list() {
    assert_eq!(fmt(&data(NIL, vec![])), "[]");
    assert_eq!(fmt(&app(var("f"), data(NIL, vec![]))), "f []");
}

#[test]
fn tuples_drop_the_constructor_name() {
    let e = expr(ExprKind::tuple(vec![
        app(var("f"), var("x")),
        binop("+", var("a"), var("b")),
    ]));
    assert_eq!(fmt(&e), "(f x, a + b)");
    let arg = expr(ExprKind::tuple(vec![int(1), var("x")]));
    assert_eq!(fmt(&app(var("f"), arg)), "f (1, x)");
}

#[test]
fn generic_constructors() {
    assert_eq!(fmt(&data("Just", vec![var("x")])), "Just x");
    assert_eq!(
        fmt(&app(var("f"), data("Just", vec![var("x")]))),
        "f (Just x)"
    );
    assert_eq!(fmt(&app(var("f"), data("Nothing", vec![]))), "f Nothing");
    assert_eq!(
        fmt(&data("Node", vec![data("Leaf", vec![]), int(1), data("Just", vec![var("x")])])),
        "Node Leaf 1 (Just x)"
    );
}

// =============================================================================
// Lists and records
// =============================================================================

#[test]
fn ranges_and_lists() {
    let range = expr(ExprKind::Range {
        low: Box::new(int(1)),
        high: Box::new(app(var("f"), var("n"))),
    });
    assert_eq!(fmt(&range), "[1..(f n)]");

    let list = expr(ExprKind::ExplicitList(vec![int(1), var("x"), app(var("f"), var("y"))]));
    assert_eq!(fmt(&list), "[1, x, f y]");
    assert_eq!(fmt(&expr(ExprKind::ExplicitList(vec![]))), "[]");
}

#[test]
fn record_literal_keeps_field_order() {
    let e = expr(ExprKind::Record(vec![
        ("y".to_string(), var("y")),
        ("x".to_string(), int(1)),
    ]));
    assert_eq!(fmt(&e), "{y = y, x = 1}");
    assert_eq!(fmt(&expr(ExprKind::Record(vec![]))), "{}");
}

#[test]
fn field_access() {
    let e = expr(ExprKind::Access {
        record: Box::new(var("point")),
        field: "x".to_string(),
    });
    assert_eq!(fmt(&e), "point.x");
    let e = expr(ExprKind::Access {
        record: Box::new(app(var("f"), var("a"))),
        field: "x".to_string(),
    });
    assert_eq!(fmt(&e), "(f a).x");
}

#[test]
fn field_removal_and_insertion() {
    let remove = expr(ExprKind::Remove {
        record: Box::new(var("r")),
        field: "x".to_string(),
    });
    assert_eq!(fmt(&remove), "{r - x}");

    let insert = expr(ExprKind::Insert {
        record: Box::new(var("r")),
        field: "x".to_string(),
        value: Box::new(int(1)),
    });
    assert_eq!(fmt(&insert), "{r | x = 1}");
}

#[test]
fn insertion_into_removal_is_a_rename() {
    let e = expr(ExprKind::Insert {
        record: Box::new(expr(ExprKind::Remove {
            record: Box::new(var("r")),
            field: "old".to_string(),
        })),
        field: "new".to_string(),
        value: Box::new(app(var("f"), var("v"))),
    });
    assert_eq!(fmt(&e), "{r - old | new = f v}");
}

#[test]
fn modification_keeps_field_order() {
    let e = expr(ExprKind::Modify {
        record: Box::new(var("model")),
        fields: vec![
            ("count".to_string(), binop("+", var("n"), int(1))),
            ("name".to_string(), var("s")),
        ],
    });
    assert_eq!(fmt(&e), "{model | count <- n + 1, name <- s}");
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn multi_if_layout() {
    let e = expr(ExprKind::MultiIf(vec![
        (binop("<", var("x"), int(0)), int(-1)),
        (var("otherwise"), int(1)),
    ]));
    assert_eq!(fmt(&e), "if\n   | x < 0 -> -1\n   | otherwise -> 1");
}

#[test]
fn let_layout() {
    let e = let_in(
        vec![Def::new(pvar("x"), int(1)), Def::new(pvar("y"), int(2))],
        binop("+", var("x"), var("y")),
    );
    assert_eq!(fmt(&e), "let\n    x = 1\n    y = 2\nin x + y");
}

#[test]
fn let_with_annotated_definition() {
    let def = Def::new(pvar("x"), int(1)).with_annotation(con("Int"));
    let e = let_in(vec![def], var("x"));
    assert_eq!(fmt(&e), "let\n    x : Int\n    x = 1\nin x");
}

#[test]
fn case_layout() {
    let e = case(
        var("m"),
        vec![
            (pdata("Just", vec![pvar("v")]), var("v")),
            (pdata("Nothing", vec![]), int(0)),
        ],
    );
    assert_eq!(fmt(&e), "case m of\n  Just v -> v\n  Nothing -> 0");
}

#[test]
fn nested_layout_is_relative_to_the_enclosing_form() {
    let inner = case(var("m"), vec![(Pattern::Anything, int(1))]);
    let e = let_in(vec![Def::new(pvar("x"), inner)], var("x"));
    assert_eq!(fmt(&e), "let\n    x = case m of\n          _ -> 1\nin x");
}

#[test]
fn parenthesized_layout_indents_past_the_paren() {
    let inner = case(var("m"), vec![(Pattern::Anything, int(1))]);
    let e = app(var("f"), inner);
    assert_eq!(fmt(&e), "f (case m of\n     _ -> 1)");
}

#[test]
fn custom_offsets() {
    let config = FormatConfig {
        let_indent: 2,
        if_indent: 2,
        case_indent: 4,
    };
    let e = let_in(
        vec![Def::new(
            pvar("x"),
            case(var("m"), vec![(Pattern::Anything, int(1))]),
        )],
        var("x"),
    );
    assert_eq!(
        Formatter::with_config(config).format(&e),
        "let\n  x = case m of\n          _ -> 1\nin x"
    );
}

// =============================================================================
// Placeholders
// =============================================================================

#[test]
fn ports_and_shaders_are_placeholders() {
    let port_in = expr(ExprKind::Port(PortImpl::In {
        name: "clicks".to_string(),
        ty: con("Int"),
    }));
    assert_eq!(fmt(&port_in), "<port:clicks>");

    let port_out = expr(ExprKind::Port(PortImpl::Task {
        name: "save".to_string(),
        expr: Box::new(var("task")),
        ty: con("Task"),
    }));
    assert_eq!(fmt(&app(var("run"), port_out)), "run <port:save>");

    let shader = expr(ExprKind::Shader {
        uid: "s1".to_string(),
        source: "void main() {}".to_string(),
    });
    assert_eq!(fmt(&shader), "[glsl| ... |]");
}

// =============================================================================
// Patterns
// =============================================================================

fn fmt_pattern(pattern: Pattern<Raw>) -> String {
    format_expr(&case(var("v"), vec![(pattern, int(0))]))
        .trim_start_matches("case v of\n  ")
        .trim_end_matches(" -> 0")
        .to_string()
}

#[test]
fn cons_and_nil_patterns() {
    let p = pdata(CONS, vec![pvar("a"), pdata(CONS, vec![pvar("b"), pvar("rest")])]);
    assert_eq!(fmt_pattern(p), "a :: b :: rest");
    let p = pdata(CONS, vec![pdata("Just", vec![pvar("x")]), pdata(NIL, vec![])]);
    assert_eq!(fmt_pattern(p), "(Just x) :: []");
}

#[test]
fn tuple_record_and_wildcard_patterns() {
    let p = pdata("_Tuple3", vec![pvar("a"), Pattern::Anything, pdata("Just", vec![pvar("b")])]);
    assert_eq!(fmt_pattern(p), "(a, _, Just b)");
    assert_eq!(
        fmt_pattern(Pattern::Record(vec!["x".to_string(), "y".to_string()])),
        "{x, y}"
    );
}

#[test]
fn alias_and_literal_patterns() {
    let p = Pattern::Alias(
        "list".to_string(),
        Box::new(pdata(CONS, vec![pvar("x"), pvar("xs")])),
    );
    assert_eq!(fmt_pattern(p), "(x :: xs) as list");
    assert_eq!(fmt_pattern(Pattern::Literal(Literal::Int(-1))), "-1");
    assert_eq!(fmt_pattern(Pattern::Literal(Literal::Str("a".to_string()))), "\"a\"");
}

#[test]
fn nested_constructor_patterns() {
    let p = pdata("Just", vec![pdata("Just", vec![pvar("x")]), pdata("Nothing", vec![])]);
    assert_eq!(fmt_pattern(p), "Just (Just x) Nothing");
}

// =============================================================================
// Definitions and types
// =============================================================================

#[test]
fn definition_without_annotation() {
    let def: ParsedDef = Def::new(pvar("answer"), int(42));
    assert_eq!(format_def(&def), "answer = 42");

    let def: ParsedDef = Def::new(pdata("_Tuple2", vec![pvar("a"), pvar("b")]), var("pair"));
    assert_eq!(format_def(&def), "(a, b) = pair");
}

#[test]
fn definition_with_annotation() {
    let body = lambda(
        pvar("a"),
        lambda(pvar("b"), binop("+", var("a"), var("b"))),
    );
    let def = Def::new(pvar("add"), body)
        .with_annotation(arrow(con("Int"), arrow(con("Int"), con("Int"))));
    assert_eq!(
        format_def(&def),
        "add : Int -> Int -> Int\nadd = \\a b -> a + b"
    );
}

fn fmt_type(ty: Type<Raw>) -> String {
    let def: ParsedDef = Def::new(pvar("x"), var("x")).with_annotation(ty);
    let text = format_def(&def);
    text.lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("x : ")
        .to_string()
}

#[test]
fn function_types() {
    let map = arrow(
        arrow(Type::Var("a".to_string()), Type::Var("b".to_string())),
        arrow(
            Type::App(Box::new(con("List")), vec![Type::Var("a".to_string())]),
            Type::App(Box::new(con("List")), vec![Type::Var("b".to_string())]),
        ),
    );
    assert_eq!(fmt_type(map), "(a -> b) -> List a -> List b");
}

#[test]
fn applied_types() {
    let nested = Type::App(
        Box::new(con("Maybe")),
        vec![Type::App(Box::new(con("List")), vec![Type::Var("a".to_string())])],
    );
    assert_eq!(fmt_type(nested), "Maybe (List a)");

    let signal = Type::App(
        Box::new(con("Signal")),
        vec![arrow(con("Int"), con("Int"))],
    );
    assert_eq!(fmt_type(signal), "Signal (Int -> Int)");

    let pair = Type::App(
        Box::new(con("_Tuple2")),
        vec![con("Int"), Type::Var("a".to_string())],
    );
    assert_eq!(fmt_type(pair), "(Int, a)");
}

#[test]
fn record_types() {
    let closed = Type::Record(
        vec![("x".to_string(), con("Float")), ("y".to_string(), con("Float"))],
        None,
    );
    assert_eq!(fmt_type(closed), "{ x : Float, y : Float }");

    let extensible = Type::Record(
        vec![("name".to_string(), con("String"))],
        Some(Box::new(Type::Var("r".to_string()))),
    );
    assert_eq!(fmt_type(extensible), "{ r | name : String }");
    assert_eq!(fmt_type(Type::Record(vec![], None)), "{}");
}

#[test]
fn canonical_types_print_qualified() {
    let ty = Type::App(
        Box::new(Type::Con(Canonical::module(["Maybe"], "Maybe"))),
        vec![Type::Con(Canonical::builtin("Int"))],
    );
    let def: sable_ir::CanonicalDef =
        Def::new(Pattern::Var("m".to_string()), canonical(ExprKind::local_var("n")))
            .with_annotation(ty);
    assert_eq!(format_def(&def), "m : Maybe.Maybe Int\nm = n");
}

// =============================================================================
// Listings and values
// =============================================================================

#[test]
fn listings() {
    assert_eq!(format_listing(&Listing::<String>::open()), "(..)");
    assert_eq!(format_listing(&Listing::<String>::closed()), "()");
    assert_eq!(
        format_listing(&Listing::explicit(["map".to_string(), "+".to_string()])),
        "(map, (+))"
    );
    assert_eq!(
        format_listing(&Listing::new(vec!["a".to_string()], true)),
        "(a, ..)"
    );
}

#[test]
fn values() {
    let color = Value::Union(
        "Color".to_string(),
        Listing::explicit(["Red".to_string(), "Green".to_string()]),
    );
    assert_eq!(format_value(&color), "Color(Red, Green)");
    assert_eq!(
        format_value(&Value::Union("Maybe".to_string(), Listing::open())),
        "Maybe(..)"
    );
    assert_eq!(format_value(&Value::Alias("Model".to_string())), "Model");
    assert_eq!(format_value(&Value::Value("<|".to_string())), "(<|)");
}

#[test]
fn listing_of_values() {
    let exports = Listing::explicit([
        Value::Alias("Model".to_string()),
        Value::Union("Maybe".to_string(), Listing::open()),
        Value::Value("view".to_string()),
    ]);
    assert_eq!(format_listing(&exports), "(Model, Maybe(..), view)");
}

// =============================================================================
// Deep trees
// =============================================================================

#[test]
fn deep_cons_list_prints_and_drops() {
    let depth = 100_000;
    let mut list = data(NIL, vec![]);
    for _ in 0..depth {
        list = data(CONS, vec![int(1), list]);
    }
    let text = fmt(&list);
    assert!(text.starts_with("1 :: 1 :: "));
    assert!(text.ends_with(":: []"));
    assert_eq!(text.matches("::").count(), depth);
    drop(list);
}
