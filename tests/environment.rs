use complexa::{
    BinaryOperator, Environment, Expr, Fallback, Number,
    interpreter::environment::{Definition, prelude},
};

#[test]
fn lookup_walks_outward_and_inner_bindings_shadow() {
    let mut root = Environment::new();
    root.define_constant("a", Number::from(1.0));
    root.define_constant("b", Number::from(2.0));

    let mut scope = root.scope();
    scope.define_constant("a", Number::from(10.0));

    assert_eq!(scope.number("a"), Some(Number::from(10.0)));
    assert_eq!(scope.number("b"), Some(Number::from(2.0)));
    assert_eq!(root.number("a"), Some(Number::from(1.0)));
    assert_eq!(scope.number("c"), None);
}

#[test]
fn undefine_only_touches_the_local_scope() {
    let mut root = Environment::new();
    root.define_constant("a", Number::from(1.0));

    let mut scope = root.scope();
    assert!(scope.undefine("a").is_none());
    assert_eq!(scope.number("a"), Some(Number::from(1.0)));

    assert!(matches!(root.undefine("a"), Some(Definition::Constant(_))));
    assert!(root.lookup("a").is_none());
}

#[test]
fn scopes_track_depth_and_inherit_the_fallback() {
    let root = Environment::with_fallback(Fallback::Zero);
    let scope = root.scope();
    let inner = scope.scope();

    assert_eq!(root.depth(), 0);
    assert_eq!(inner.depth(), 2);
    assert_eq!(inner.fallback(), Fallback::Zero);
    assert_eq!(Environment::new().fallback(), Fallback::Nan);
    assert!(Fallback::Nan.value().is_nan());
    assert_eq!(Fallback::Zero.value(), Number::from(0.0));
}

#[test]
fn bindings_iterate_in_name_order() {
    let mut environment = Environment::new();
    environment.define_constant("b", Number::from(2.0));
    environment.define_constant("a", Number::from(1.0));
    environment.define_constant("c", Number::from(3.0));

    let names = environment.iter().map(|(name, _)| name).collect::<Vec<_>>();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(environment.len(), 3);
    assert!(!environment.is_empty());
}

#[test]
fn prelude_seeds_every_standard_name() {
    let environment = Environment::with_prelude(Fallback::Nan);
    for name in prelude::STANDARD_CONSTANTS {
        assert!(environment.number(name).is_some(), "{name}");
    }
    for name in prelude::STANDARD_FUNCTIONS.iter().chain(prelude::STANDARD_FUNCTIONS2) {
        assert!(environment.is_function(name), "{name}");
    }
    assert_eq!(environment.len(),
               prelude::STANDARD_CONSTANTS.len()
               + prelude::STANDARD_FUNCTIONS.len()
               + prelude::STANDARD_FUNCTIONS2.len());
    assert_eq!(environment.lookup("log").and_then(Definition::arity), Some(1));
    assert_eq!(environment.lookup("polar").and_then(Definition::arity), Some(2));
}

#[test]
fn custom_function_calls_bind_parameters_in_a_child_scope() {
    let mut environment = Environment::new();
    environment.define_constant("a", Number::from(10.0));
    environment.define_constant("x", Number::from(1.0));
    environment.define_custom_function("f",
                                       vec!["x".to_string()],
                                       Expr::binary(Expr::symbol("x"),
                                                    BinaryOperator::Add,
                                                    Expr::symbol("a")));

    let f = environment.lookup("f").cloned().unwrap();
    assert_eq!(f.call(&environment, &[Number::from(5.0)]), Number::from(15.0));
    assert_eq!(environment.number("x"), Some(Number::from(1.0)));
    assert!(f.call(&environment, &[Number::from(1.0), Number::from(2.0)]).is_nan());
}

#[test]
fn constants_are_not_callable() {
    let environment = Environment::new();
    let constant = Definition::Constant(Number::from(2.0));
    assert!(constant.call(&environment, &[Number::from(1.0)]).is_nan());
    assert_eq!(constant.arity(), None);
    assert!(!constant.is_function());
}
