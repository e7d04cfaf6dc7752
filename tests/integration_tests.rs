//! Integration tests for the tokenize/parse pipeline.
//!
//! These tests drive source text through the lexer and the parser together
//! and check the canonical rendering of the resulting tree, error recovery
//! across both stages and diagnostic formatting.

use woc::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::ElseBranch,
    },
    errors::errors::{Error, ErrorImpl},
    format_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::parse,
};

fn run(source: &str) -> (Program, Vec<Error>, Vec<Error>) {
    let (tokens, lex_errors) = tokenize(source, Some("test.woc".to_string()));
    let (parser, program) = parse(tokens.into_iter());

    (program, lex_errors, parser.errors().to_vec())
}

fn render(source: &str) -> String {
    let (program, lex_errors, parse_errors) = run(source);
    assert!(lex_errors.is_empty(), "lexical errors: {:?}", lex_errors);
    assert!(parse_errors.is_empty(), "syntax errors: {:?}", parse_errors);

    program.to_string()
}

#[test]
fn test_precedence_rendering() {
    let cases = [
        ("1 + (2 + 3) + 4;", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2 * (5 + 5);", "(((5 + 5) * 2) * (5 + 5));"),
        ("-(5 + 5);", "(-(5 + 5));"),
        ("!(true == true);", "(!(true == true));"),
        ("a + add(b * c) + d;", "((a + add((b * c))) + d);"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8));",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));",
        ),
        (
            "add(a + b + c * d / f + g);",
            "add((((a + b) + ((c * d) / f)) + g));",
        ),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5;", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
        ("5 > 4 == 3 < 4;", "((5 > 4) == (3 < 4));"),
    ];

    for (source, expected) in cases {
        assert_eq!(render(source), expected, "source: {}", source);
    }
}

#[test]
fn test_declaration_and_assignment() {
    let (program, _, errors) = run("var total = 0; total = total + 1;");

    assert!(errors.is_empty());
    assert!(matches!(program.statements[0], Stmt::VarDecl(_)));
    assert!(matches!(program.statements[1], Stmt::Assign(_)));
    assert_eq!(program.to_string(), "var total = 0; total = (total + 1);");
}

#[test]
fn test_declaration_and_assignment_reject_each_other() {
    // `var` needs `=` and a value, a bare assignment cannot take `var`
    let (_, _, errors) = run("var x == 1;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].get_kind(),
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            received: TokenKind::Equals,
            ..
        }
    ));

    let (_, _, errors) = run("1 = x;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].get_kind(),
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            received: TokenKind::Assignment,
            ..
        }
    ));
}

#[test]
fn test_keyword_identifier_boundary() {
    let (program, lex_errors, parse_errors) = run("var foobar = test + fa;");

    assert!(lex_errors.is_empty());
    assert!(parse_errors.is_empty());
    assert_eq!(program.to_string(), "var foobar = (test + fa);");
}

#[test]
fn test_keyword_prefix_followed_by_digit() {
    // `int3` is the identifier `int` followed by the number `3`
    let (_, lex_errors, parse_errors) = run("var n = int3;");
    assert!(lex_errors.is_empty());
    assert_eq!(
        parse_errors[0].get_kind(),
        &ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            received: TokenKind::Integer,
            token: String::from("3"),
        }
    );

    // `int32x` is the keyword followed by an identifier
    let (_, lex_errors, parse_errors) = run("var n = int32x;");
    assert!(lex_errors.is_empty());
    assert!(matches!(
        parse_errors[0].get_kind(),
        ErrorImpl::NoPrefixRule {
            kind: TokenKind::Int32,
            ..
        }
    ));

    assert_eq!(render("var n = int + 3;"), "var n = (int + 3);");
}

#[test]
fn test_block_statement_followed_by_expression() {
    assert_eq!(
        render("if (a) { b; } (c + d);"),
        "if (a) { b; } (c + d);"
    );
    assert_eq!(render("if (a) { b; } -x;"), "if (a) { b; } (-x);");
    assert_eq!(render("func f() { } (1);"), "func f() { } 1;");
}

#[test]
fn test_else_if_chain() {
    let (program, _, errors) = run("if (x<y) {x;} else if (y<x) {y;} else {z;}");
    assert!(errors.is_empty());

    let first = match &program.statements[0] {
        Stmt::Expression(stmt) => match &stmt.expression {
            Expr::If(expr) => expr,
            other => panic!("expected an if expression, got {:?}", other),
        },
        other => panic!("expected an expression statement, got {:?}", other),
    };

    let second = match &first.alternative {
        Some(ElseBranch::ElseIf(next)) => next,
        other => panic!("expected an else-if link, got {:?}", other),
    };

    match &second.alternative {
        Some(ElseBranch::Else(block)) => {
            assert_eq!(block.body.len(), 1);
            assert_eq!(block.to_string(), "{ z; }");
        }
        other => panic!("expected a final block, got {:?}", other),
    }

    assert_eq!(
        program.to_string(),
        "if (x < y) { x; } else if (y < x) { y; } else { z; }"
    );
}

#[test]
fn test_function_literal_and_call() {
    let source = "func add(a, b) { return a + b; } var three = add(1, 2);";

    assert_eq!(
        render(source),
        "func add(a, b) { return (a + b); } var three = add(1, 2);"
    );
}

#[test]
fn test_nested_blocks_and_conditionals() {
    let source = "func max(a, b) {\n\tif (a > b) {\n\t\treturn a;\n\t} else {\n\t\treturn b;\n\t}\n}\n";

    assert_eq!(
        render(source),
        "func max(a, b) { if (a > b) { return a; } else { return b; } }"
    );
}

#[test]
fn test_errors_are_not_fatal() {
    let source = "var a = 1;\nvar b = @;\nvar 9c = 2;\nvar d = 4;\n";
    let (program, lex_errors, parse_errors) = run(source);

    assert_eq!(lex_errors.len(), 2);
    assert!(matches!(
        lex_errors[0].get_kind(),
        ErrorImpl::UnrecognisedToken { .. }
    ));
    assert!(matches!(
        lex_errors[1].get_kind(),
        ErrorImpl::IllegalIdentifier { .. }
    ));

    // Illegal tokens still reach the parser, which reports and skips them
    assert_eq!(parse_errors.len(), 2);
    assert_eq!(program.to_string(), "var a = 1; var d = 4;");
}

#[test]
fn test_rescan_is_identical() {
    let source = "func f(x) { return x * -2; } f(21) >= 42 && !false;";

    let first = tokenize(source, None);
    let second = tokenize(source, None);
    assert_eq!(first, second);

    let (_, first_program) = parse(Lexer::new(source, None));
    let (_, second_program) = parse(Lexer::new(source, None));
    assert_eq!(first_program, second_program);
}

#[test]
fn test_rendering_reparses_to_itself() {
    let sources = [
        "var x = 1 + 2 * 3 - -4;",
        "x = !(a == b) || c <= d;",
        "if (ready) { go(1, 2); } else if (a < b) { wait(); } else { return; }",
        "func apply(f, x) { return f(x); }",
        "{ var inner = if (a) { 1; } else { 2; }; }",
        "if (a) { b; }; -x;",
        "if (a) { b; } (c + d);",
        "func f() { } (1); f();",
        "var m = if (a) { 1; } else { 2; } - x;",
    ];

    for source in sources {
        let rendered = render(source);
        assert_eq!(render(&rendered), rendered, "source: {}", source);
    }
}

#[test]
fn test_format_syntax_error() {
    let source = "var x = 5";
    let (_, _, errors) = run(source);

    assert_eq!(
        format_error(&errors[0], source),
        "Error: ExpectedToken (expected Semicolon, found EOF ``)\n-> test.woc\n  |\n1 | var x = 5\n  | ---------^\n"
    );
}
