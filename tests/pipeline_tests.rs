// End-to-end tests for the pi-calculus to mCRL2 pipeline

use pi2mcrl2::converter::convert_module;
use pi2mcrl2::errors::{ErrorKind, Errors};
use pi2mcrl2::parser::ast::SourceLocation;
use pi2mcrl2::parser::{parse_module, tokenize};
use pi2mcrl2::{parse_source, translate};

/// Drop all whitespace so terms can be compared independently of layout
fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn assert_contains_term(output: &str, term: &str) {
    assert!(
        compact(output).contains(&compact(term)),
        "Expected `{}` in:\n{}",
        term,
        output
    );
}

fn first_error(errors: &Errors) -> &pi2mcrl2::errors::Error {
    errors.iter().next().expect("error list is never empty")
}

#[test]
fn test_tau_prefix() {
    let output = translate("agent Main = tau . 0;").expect("Translation failed");
    assert!(output.contains("tau_prefix(zero)"));
}

#[test]
fn test_unbound_receive_subject() {
    let errors = translate("agent Main = a(x).0;").unwrap_err();

    let error = first_error(&errors);
    assert_eq!(error.kind, ErrorKind::Identifier);
    assert_eq!(error.message, "Unbound name `a`");
    assert_eq!(error.to_string(), "(1, 14): Unbound name `a`");
}

#[test]
fn test_parameter_used_as_subject_and_object() {
    let output = translate("agent Main(a) = a'a.0;").expect("Translation failed");
    assert_contains_term(&output, "output_prefix(0, 0, zero)");
    assert!(output.ends_with("identifier(0, [0])"));
}

#[test]
fn test_number_with_letters() {
    let errors = translate("agent Main = 12abc;").unwrap_err();
    let error = first_error(&errors);
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(
        error.message,
        "unexpected word characters in the middle of a number"
    );
}

#[test]
fn test_lexer_errors_stop_the_pipeline() {
    // The parse error and the missing Main would be reported if later stages ran.
    let errors = translate("agent P = $ ;").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(first_error(&errors).message, "unknown character");
}

#[test]
fn test_parse_errors_stop_the_pipeline() {
    let errors = translate("agent P = a'b;").unwrap_err();
    assert!(errors.iter().all(|e| e.kind == ErrorKind::Syntax));
    assert!(!errors.contains_message("No starting process found; it should be called `Main`"));
}

#[test]
fn test_well_formed_declaration_followed_by_malformed() {
    let source = "agent Main = tau . 0;\nagent Broken = tau . 0";
    let tokens = tokenize(source).expect("Lexing failed");

    let errors = parse_module(tokens).unwrap_err();
    assert_eq!(errors.len(), 1);
    let error = first_error(&errors);
    assert_eq!(error.kind, ErrorKind::Syntax);
    assert_eq!(error.location.line, 1);

    // The first declaration on its own is fine.
    let module = parse_source("agent Main = tau . 0;").expect("Parsing failed");
    assert_eq!(module.declarations.len(), 1);
}

#[test]
fn test_duplicate_names_in_any_order() {
    let sources = [
        "agent Main = 0; agent P = 0; agent P = 0;",
        "agent P = 0; agent Main = 0; agent P = 0;",
        "agent P = 0; agent P = 0; agent Main = 0; agent Q = tau . 0;",
        "agent Main = 0; agent Main = 0;",
    ];

    for source in sources {
        let errors = translate(source).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.kind == ErrorKind::Identifier
                    && e.message == "Duplicate process variable name"),
            "No duplicate error for {}",
            source
        );
    }
}

#[test]
fn test_every_duplicate_is_reported() {
    let errors = translate("agent Main = 0; agent P = 0; agent P = 0; agent P = 0;").unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_missing_main() {
    for source in ["", "agent P = 0;", "agent main = 0; agent MAIN = 0;"] {
        let errors = translate(source).unwrap_err();
        assert_eq!(errors.len(), 1, "for {:?}", source);
        let error = first_error(&errors);
        assert_eq!(error.kind, ErrorKind::Identifier);
        assert_eq!(
            error.message,
            "No starting process found; it should be called `Main`"
        );
        assert_eq!(error.location, SourceLocation::new(0, 0));
    }
}

#[test]
fn test_shadowed_name_resolves_to_inner_then_outer() {
    // `x` is parameter 0; the receive rebinds it to 1 inside the prefix only.
    let output = translate("agent Main(x) = (x(x) . x'x . 0) | x'x . 0;").unwrap();
    assert_contains_term(
        &output,
        "parallel_composition(input_prefix(0, 1, output_prefix(1, 1, zero)), output_prefix(0, 0, zero))",
    );
}

#[test]
fn test_ids_are_reused_after_scope_closes() {
    let output = translate("agent Main = (^a) 0 + (^b) (^c) [b = c] 0;").unwrap();
    assert_contains_term(
        &output,
        "summation(restriction(0, zero), restriction(0, restriction(1, match_proc(0, 1, zero))))",
    );
}

#[test]
fn test_restricted_name_not_visible_outside() {
    let errors = translate("agent Main = (^a) 0 | a'a . 0;").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.message == "Unbound name `a`"));
}

#[test]
fn test_call_argument_errors_accumulate() {
    let errors = translate("agent Main(a) = P(x, a, y); agent P(p, q, r) = 0;").unwrap_err();
    let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Unbound name `x`", "Unbound name `y`"]);
}

#[test]
fn test_independent_subtrees_all_report() {
    let errors = translate("agent Main = a'b . 0 + Q | [c = c] 0;").unwrap_err();
    let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Unbound name `a`",
            "Unbound name `b`",
            "Unknown recursion variable `Q`",
            "Unbound name `c`",
            "Unbound name `c`",
        ]
    );
}

#[test]
fn test_recursive_process() {
    let source = r#"
        % a server that echoes on its channel forever
        agent Main = (^c) (Server(c) | Client(c));
        agent Server(c) = c(x) . c'x . Server(c);
        agent Client(c) = (^m) c'm . c(r) . [r = m] tau . 0;
    "#;

    let module = parse_source(source).expect("Parsing failed");
    assert_eq!(module.declarations.len(), 3);

    let output = convert_module(&module).expect("Conversion failed");
    assert!(output.starts_with("(lambda id': PiIdentifier . pi_definition(0, zero))[0 -> "));
    assert!(output.contains("[1 -> pi_definition(1,"));
    assert!(output.contains("[2 -> pi_definition(1,"));
    assert_contains_term(
        &output,
        "input_prefix(0, 1, output_prefix(0, 1, identifier(1, [0])))",
    );
    assert_contains_term(
        &output,
        "restriction(1, output_prefix(0, 1, input_prefix(0, 2, match_proc(2, 1, tau_prefix(zero)))))",
    );
    assert!(output.ends_with(",\nidentifier(0, [])"));
}

#[test]
fn test_module_round_trips_through_display() {
    let source = "agent Main(a) = (^b) (a'b . 0 + b(x) . [x = a] tau . P(a, x));\nagent P(u, v) = 0;\n";
    let module = parse_source(source).unwrap();
    let rendered = module.to_string();

    assert_eq!(
        rendered,
        "agent Main(a) = (^b) (a'b . 0 + b(x) . [x = a] tau . P(a, x));\nagent P(u, v) = 0;\n"
    );
    // Rendering is the source itself, so even the locations agree.
    assert_eq!(parse_source(&rendered).unwrap(), module);
}
