use std::fs;

use climb::{Lexer, ParseError, Parser, RuntimeError, evaluate, get_result, parse};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, input, expected) in extract_cases(&content) {
            count += 1;
            check_case(input, expected).unwrap_or_else(|message| {
                                           panic!("Case on line {line_no} of {path:?} failed:\n{input}\n{message}")
                                       });
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits a case file into `(line number, input, expected)` triples.
///
/// Blank lines and lines starting with `#` are skipped.
fn extract_cases(content: &str) -> Vec<(usize, &str, &str)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (input, expected) =
                   line.split_once(" => ")
                       .unwrap_or_else(|| panic!("Line {} has no ' => ': {line}", i + 1));
               (i + 1, input, expected.trim())
           })
           .collect()
}

fn check_case(input: &str, expected: &str) -> Result<(), String> {
    if expected == "empty" {
        return match parse(input) {
            Ok(None) => Ok(()),
            other => Err(format!("expected an empty parse, got {other:?}")),
        };
    }

    if let Some(rendering) = expected.strip_prefix("ast: ") {
        return match parse(input) {
            Ok(Some(expr)) if expr.to_string() == rendering => Ok(()),
            other => Err(format!("expected tree {rendering}, got {other:?}")),
        };
    }

    if let Some(variant) = expected.strip_prefix("error: ") {
        return match get_result(input) {
            Err(e) if variant_name(&format!("{e:?}")) == variant => Ok(()),
            other => Err(format!("expected error {variant}, got {other:?}")),
        };
    }

    let value: f64 = expected.parse()
                             .map_err(|e| format!("bad expected value {expected}: {e}"))?;
    match get_result(input) {
        Ok(Some(v)) if (v - value).abs() < 1e-9 => Ok(()),
        other => Err(format!("expected {value}, got {other:?}")),
    }
}

fn variant_name(debug: &str) -> &str {
    debug.split([' ', '{', '(']).next().unwrap_or(debug)
}

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(Some(v)) => assert!((v - expected).abs() < 1e-9, "{src} evaluated to {v}, expected {expected}"),
        Ok(None) => panic!("{src} parsed to nothing"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("1 * 2 + 3", 5.0);
    assert_value("1 + 2 + 3", 6.0);
    assert_value("1 * ( 2 + 3 )", 5.0);
}

#[test]
fn equal_precedence_associates_left() {
    assert_value("10 - 3 - 2", 5.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("2 - 3 + 4", 3.0);
}

#[test]
fn prefix_sign_binds_tighter_than_binary() {
    assert_value("- 3 * ( 2 + 3 )", -15.0);
    assert_value("- 3 + 1", -2.0);
    assert_value("+ 3 * - 2", -6.0);
}

#[test]
fn empty_and_whitespace_inputs_evaluate_to_nothing() {
    for src in ["", " ", "\t", "  \n \t  "] {
        assert_eq!(parse(src).unwrap(), None, "input {src:?}");
        assert_eq!(get_result(src).unwrap(), None, "input {src:?}");
    }
}

#[test]
fn reparsing_is_deterministic() {
    for src in ["1 + 2 * 3", "- a ++ * ( b - -- c )", "( ( x ) )", "a / b / c"] {
        assert_eq!(parse(src).unwrap(), parse(src).unwrap(), "input {src}");
    }
}

#[test]
fn rendering_parses_back_to_the_same_tree() {
    for src in ["- 3 * ( 2 + 3 )", "a ++ + ++ b", "1 - ( 2 - 3 ) - 4", "- - x / y --"] {
        let expr = parse(src).unwrap().unwrap();
        let again = parse(&expr.to_string()).unwrap().unwrap();
        assert_eq!(again.to_string(), expr.to_string(), "input {src}");
        assert_eq!(evaluate(&again).ok(), evaluate(&expr).ok(), "input {src}");
    }
}

#[test]
fn runtime_errors_name_the_node() {
    let err = evaluate(&parse("1 + a ++").unwrap().unwrap()).unwrap_err();
    assert_eq!(err,
               RuntimeError::UnsupportedNode { node:     "( a ++ )".to_string(),
                                               position: 2, });

    let err = evaluate(&parse("4 / ( 1 - 1 )").unwrap().unwrap()).unwrap_err();
    assert_eq!(err,
               RuntimeError::DivisionByZero { node:     "( 4 / ( 1 - 1 ) )".to_string(),
                                              position: 1, });
    assert_eq!(err.to_string(),
               "Error at token 1: Division by zero in '( 4 / ( 1 - 1 ) )'.");
}

#[test]
fn increment_and_decrement_are_not_evaluated() {
    assert_failure("++ 1");
    assert_failure("-- 1");
    assert_failure("1 ++");
    assert_failure("1 --");
    assert_failure("2 * ( 3 -- )");
}

#[test]
fn overflow_is_infinite() {
    let big = format!("{} * 10", f64::MAX);
    assert_eq!(get_result(&big).unwrap(), Some(f64::INFINITY));
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    let src = format!("{} 1 {}", "( ".repeat(1000), ") ".repeat(1000));
    match parse(&src) {
        Err(ParseError::NestingTooDeep { limit, .. }) => assert_eq!(limit, climb::DEFAULT_MAX_DEPTH),
        other => panic!("expected NestingTooDeep, got {other:?}"),
    }

    let src = format!("{}1", "- ".repeat(1000));
    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn moderate_nesting_is_accepted() {
    let src = format!("{} 1 {}", "( ".repeat(100), ") ".repeat(100));
    assert_value(&src, 1.0);
}

#[test]
fn nesting_limit_is_configurable() {
    let ok = Parser::with_max_depth(Lexer::new("( ( 1 ) )"), 3).parse();
    assert!(ok.unwrap().is_some());

    let err = Parser::with_max_depth(Lexer::new("( ( 1 ) )"), 2).parse()
                                                                  .unwrap_err();
    assert_eq!(err, ParseError::NestingTooDeep { limit: 2, position: 2 });
}

#[test]
fn long_operator_chains_are_rejected_not_overflowed() {
    let src = format!("{}1", "1 + ".repeat(200_000));
    match parse(&src) {
        Err(ParseError::NestingTooDeep { limit, .. }) => assert_eq!(limit, climb::DEFAULT_MAX_DEPTH),
        other => panic!("expected NestingTooDeep, got {other:?}"),
    }
    assert!(get_result(&src).is_err());

    let src = format!("{}2", "2 * 1 - ".repeat(100_000));
    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn chains_within_the_limit_evaluate() {
    let src = format!("{}1", "1 + ".repeat(200));
    assert_value(&src, 201.0);

    let src = format!("{}2", "2 / ".repeat(200));
    assert_value(&src, 2.0_f64.powi(-199));
}

#[test]
fn each_folded_operator_counts_as_a_level() {
    let ok = Parser::with_max_depth(Lexer::new("1 + 2"), 3).parse();
    assert!(ok.unwrap().is_some());

    let err = Parser::with_max_depth(Lexer::new("1 + 2 + 3"), 3).parse()
                                                                  .unwrap_err();
    assert_eq!(err, ParseError::NestingTooDeep { limit: 3, position: 4 });

    let src = format!("{}1", "1 + ".repeat(255));
    assert_eq!(parse(&src).unwrap_err(),
               ParseError::NestingTooDeep { limit:    climb::DEFAULT_MAX_DEPTH,
                                            position: 510, });
}
