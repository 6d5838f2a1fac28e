use complexa::{
    Fallback, Number, Outcome, ParseError, Session, SessionOptions,
    interpreter::environment::Definition,
};

fn session() -> Session {
    Session::new(SessionOptions::default())
}

fn run(session: &mut Session, line: &str) -> String {
    session.run(line)
           .unwrap_or_else(|e| panic!("{line}: {e}"))
           .to_string()
}

fn value_of(session: &Session, name: &str) -> Option<Number> {
    session.environment().number(name)
}

#[test]
fn expressions_echo_their_value() {
    let mut session = session();
    assert_eq!(run(&mut session, "1+2*3"), "1 + 2 * 3 = 7");
    assert_eq!(run(&mut session, "(1+2)*3"), "(1 + 2) * 3 = 9");
    assert_eq!(run(&mut session, "i^2"), "i ^ 2 = -1");
    assert_eq!(run(&mut session, "2 < 1"), "2 < 1 = NaN");
    assert_eq!(run(&mut session, "sqrt(0-4) + 3"), "sqrt(0 - 4) + 3 = 3 + 2i");
}

#[test]
fn define_binds_and_nan_undefines() {
    let mut session = session();
    assert_eq!(run(&mut session, "a := 3"), "define a := 3");
    assert_eq!(value_of(&session, "a"), Some(Number::from(3.0)));
    assert_eq!(run(&mut session, "a"), "a = 3");

    assert_eq!(run(&mut session, "a := a * 2"), "define a := a * 2");
    assert_eq!(value_of(&session, "a"), Some(Number::from(6.0)));

    assert_eq!(run(&mut session, "a := nan"), "undefine a := nan");
    assert!(session.environment().lookup("a").is_none());
    assert_eq!(run(&mut session, "a"), "a = NaN");
}

#[test]
fn a_single_nan_component_undefines() {
    let mut session = session();
    session.environment_mut()
           .define_native_function("skew", |x| Number::new(f64::NAN, x.real));
    assert_eq!(run(&mut session, "a := 3"), "define a := 3");

    assert!(matches!(session.run("a := skew(171!)"), Ok(Outcome::Undefined { .. })));
    assert!(session.environment().lookup("a").is_none());
    assert!(matches!(session.run("b := skew 2"), Ok(Outcome::Undefined { .. })));
    assert!(session.environment().lookup("b").is_none());
}

#[test]
fn undefining_an_unbound_symbol_is_harmless() {
    let mut session = session();
    let before = session.environment().len();
    assert!(matches!(session.run("b := 0/0"), Ok(Outcome::Undefined { .. })));
    assert_eq!(session.environment().len(), before);
}

#[test]
fn defined_outcome_carries_the_value() {
    let mut session = session();
    let Ok(Outcome::Defined { value, .. }) = session.run("r := 2 * 3") else {
        panic!("expected a definition");
    };
    assert_eq!(value, Number::from(6.0));
}

#[test]
fn prelude_names_can_be_redefined() {
    let mut session = session();
    assert_eq!(run(&mut session, "pi := 3"), "define pi := 3");
    assert_eq!(run(&mut session, "pi * 2"), "pi * 2 = 6");
}

#[test]
fn custom_functions_see_outer_constants() {
    let mut session = session();
    run(&mut session, "a := 10");
    assert_eq!(run(&mut session, "f(x) := x + a"), "define f(x) = x + a");
    assert_eq!(run(&mut session, "f(5)"), "f(5) = 15");
    assert!(session.environment().lookup("x").is_none());
}

#[test]
fn parameters_do_not_leak_into_the_outer_scope() {
    let mut session = session();
    run(&mut session, "x := 1");
    run(&mut session, "f(x) := x * 2");
    assert_eq!(run(&mut session, "f(5)"), "f(5) = 10");
    assert_eq!(value_of(&session, "x"), Some(Number::from(1.0)));
}

#[test]
fn calls_resolve_functions_and_constants_when_evaluated() {
    let mut session = session();
    run(&mut session, "a := 1");
    run(&mut session, "g(x) := x + a");
    run(&mut session, "h(x) := g(x) * 2");
    assert_eq!(run(&mut session, "h(1)"), "h(1) = 4");

    run(&mut session, "g(x) := x + 2");
    assert_eq!(run(&mut session, "h(1)"), "h(1) = 6");

    run(&mut session, "a := 5");
    run(&mut session, "g(x) := x + a");
    assert_eq!(run(&mut session, "h(1)"), "h(1) = 12");
}

#[test]
fn functions_of_several_parameters() {
    let mut session = session();
    run(&mut session, "hyp(a, b) := sqrt(a^2 + b^2)");
    assert_eq!(run(&mut session, "hyp(3, 4)"), "hyp(3, 4) = 5");
    assert_eq!(run(&mut session, "hyp 3, 4"), "hyp(3, 4) = 5");
    assert_eq!(run(&mut session, "hyp(3)"), "hyp(3) = NaN");
}

#[test]
fn vars_lists_bindings_by_name() {
    let mut session = session();
    run(&mut session, "a := 10");
    run(&mut session, "f(x) := x + a");

    let Ok(Outcome::Symbols(symbols)) = session.run("vars") else {
        panic!("expected a symbol listing");
    };
    let names = symbols.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let rendering = |wanted: &str| {
        symbols.iter()
               .find(|(name, _)| name == wanted)
               .map(|(_, rendering)| rendering.clone())
    };
    assert_eq!(rendering("a").as_deref(), Some("10"));
    assert_eq!(rendering("i").as_deref(), Some("i"));
    assert_eq!(rendering("f").as_deref(), Some("f(x) = x + a"));
    assert_eq!(rendering("sin").as_deref(), Some("sin(x) = native"));
    assert_eq!(rendering("polar").as_deref(), Some("polar(x, y) = native"));

    let listing = session.run("vars").unwrap().to_string();
    assert!(listing.contains("a = 10\n"));
    assert!(listing.contains("sin = sin(x) = native"));
}

#[test]
fn commands_are_recognized_before_parsing() {
    let mut session = session();
    assert_eq!(session.run("?"), Ok(Outcome::Help));
    assert_eq!(session.run("  quit "), Ok(Outcome::Quit));
    assert_eq!(session.run("   "), Ok(Outcome::Empty));
    assert_eq!(Outcome::Quit.to_string(), "Bye.");
    assert!(Outcome::Help.to_string().contains("vars"));
}

#[test]
fn parse_errors_leave_the_environment_unchanged() {
    let mut session = session();
    let before = session.environment().len();
    assert_eq!(session.run("a := (1"), Err(ParseError::UnexpectedEof { position: 7 }));
    assert_eq!(session.environment().len(), before);
    assert!(session.environment().lookup("a").is_none());
}

#[test]
fn strict_sessions_reject_unbound_symbols() {
    let mut session = Session::new(SessionOptions { strict: true,
                                                    ..SessionOptions::default() });
    assert_eq!(session.run("y + 1"),
               Err(ParseError::UnknownSymbol { name:     "y".to_string(),
                                               position: 0, }));
    assert_eq!(run(&mut session, "y := 2"), "define y := 2");
    assert_eq!(run(&mut session, "y + 1"), "y + 1 = 3");
}

#[test]
fn zero_fallback_sessions() {
    let mut session = Session::new(SessionOptions { fallback: Fallback::Zero,
                                                    strict:   false, });
    assert_eq!(run(&mut session, "y + 1"), "y + 1 = 1");
    run(&mut session, "f(x) := x + z");
    assert_eq!(run(&mut session, "f(2)"), "f(2) = 2");
}

#[test]
fn native_functions_can_be_added() {
    let mut session = session();
    session.environment_mut()
           .define_native_function("double", |x| x * Number::from(2.0));
    assert_eq!(run(&mut session, "double 4"), "double(4) = 8");
    assert!(matches!(session.environment().lookup("double"), Some(Definition::Native(_))));
}
