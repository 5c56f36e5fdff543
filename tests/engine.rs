use rpncalc::{
    DivisionMode, Engine, Error, evaluate,
    error::{EvalError, ParseError},
    interpreter::lexer::format_tokens,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "'{src}' gave {value} instead of {expected}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

#[test]
fn unary_minus_is_normalized() {
    assert_value("-3+4", 1.0);
    assert_value("(-3+4)", 1.0);
    assert_value("5-(-2)", 7.0);
}

#[test]
fn precedence_and_brackets() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
}

#[test]
fn decimals() {
    assert_value("1.5+2.25", 3.75);
}

#[test]
fn run_before_parse_is_not_parsed() {
    let engine = Engine::new();
    assert!(!engine.is_parsed());
    assert_eq!(engine.run(), Err(EvalError::NotParsed));
}

#[test]
fn parse_is_idempotent() {
    let mut engine = Engine::new();
    engine.parse("1+1").unwrap();
    let infix = engine.infix().to_vec();
    let postfix = engine.postfix().to_vec();

    engine.parse("2*3").unwrap();

    assert_eq!(engine.infix(), infix.as_slice());
    assert_eq!(engine.postfix(), postfix.as_slice());
    assert_eq!(engine.run(), Ok(2.0));
}

#[test]
fn run_is_repeatable() {
    let mut engine = Engine::new();
    engine.parse("7/2-1").unwrap();

    let first = engine.run();
    let second = engine.run();
    assert_eq!(first, Ok(2.5));
    assert_eq!(first, second);
}

#[test]
fn reset_returns_to_empty_state() {
    let mut engine = Engine::new();
    engine.reset();
    assert_eq!(engine, Engine::new());

    engine.parse("(2+3)*4").unwrap();
    assert!(engine.is_parsed());
    assert_eq!(format_tokens(engine.postfix()), "2 3 + 4 *");

    engine.reset();
    assert!(!engine.is_parsed());
    assert!(engine.infix().is_empty());
    assert!(engine.postfix().is_empty());
    assert_eq!(engine.run(), Err(EvalError::NotParsed));

    engine.parse("2*3").unwrap();
    assert_eq!(engine.run(), Ok(6.0));
}

#[test]
fn failed_conversion_keeps_infix_but_not_parsed() {
    let mut engine = Engine::new();
    assert!(matches!(engine.parse("(1+2"),
                     Err(ParseError::UnbalancedBrackets { bracket: '(', .. })));

    assert!(!engine.is_parsed());
    assert_eq!(engine.infix().len(), 4);
    assert!(engine.postfix().is_empty());
    assert_eq!(engine.run(), Err(EvalError::NotParsed));
}

#[test]
fn failed_parse_can_be_retried() {
    let mut engine = Engine::new();
    assert_eq!(engine.parse("42"), Err(ParseError::EmptyOrNoOperator));
    assert!(engine.infix().is_empty());

    engine.parse("4*2").unwrap();
    assert_eq!(engine.run(), Ok(8.0));
}

#[test]
fn bracket_errors_surface_through_evaluate() {
    assert!(matches!(evaluate("(1+2"),
                     Err(Error::Parse(ParseError::UnbalancedBrackets { .. }))));
    assert!(matches!(evaluate("1+2)"),
                     Err(Error::Parse(ParseError::UnbalancedBrackets { .. }))));
    assert_eq!(evaluate("42"), Err(Error::Parse(ParseError::EmptyOrNoOperator)));
}

#[test]
fn evaluation_errors_surface_through_evaluate() {
    assert!(matches!(evaluate("1+"),
                     Err(Error::Eval(EvalError::InsufficientOperands { .. }))));
    assert!(matches!(evaluate("(1)(2)"),
                     Err(Error::Eval(EvalError::ResultCardinality { count: 2 }))));
}

#[test]
fn strict_division_reports_division_by_zero() {
    let mut engine = Engine::with_division_mode(DivisionMode::Strict);
    assert_eq!(engine.division_mode(), DivisionMode::Strict);

    engine.parse("1/(3-3)").unwrap();
    assert!(matches!(engine.run(), Err(EvalError::DivisionByZero { .. })));

    engine.reset();
    assert_eq!(engine.division_mode(), DivisionMode::Strict);
    engine.parse("1/4").unwrap();
    assert_eq!(engine.run(), Ok(0.25));
}

#[test]
fn default_division_follows_ieee_754() {
    let mut engine = Engine::new();
    assert_eq!(engine.division_mode(), DivisionMode::Ieee754);

    engine.parse("1/0").unwrap();
    assert_eq!(engine.run(), Ok(f64::INFINITY));
}

#[test]
fn independent_engines_do_not_share_state() {
    let mut first = Engine::new();
    let mut second = Engine::new();

    first.parse("1+2").unwrap();
    second.parse("3*4").unwrap();

    assert_eq!(first.run(), Ok(3.0));
    assert_eq!(second.run(), Ok(12.0));
}

#[test]
fn errors_render_readable_messages() {
    let e = evaluate("1+1.2.3").unwrap_err();
    assert_eq!(e.to_string(), "Error at offset 2: Malformed number '1.2.3'.");

    let e = evaluate("3+").unwrap_err();
    assert_eq!(e.to_string(), "Error at token 1: Operator '+' needs two operands.");
}
