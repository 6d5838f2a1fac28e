use complexa::{
    BinaryOperator, Environment, Expr, Fallback, ParseError, Statement,
    ast::FunctionDef,
    interpreter::lexer::{Token, Tokenizer},
    parse, parse_statement, parse_statement_strict, parse_strict,
};

fn prelude() -> Environment<'static> {
    Environment::with_prelude(Fallback::Nan)
}

fn tokens(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    while tokenizer.next().unwrap() {
        tokens.push(tokenizer.current().clone());
    }
    tokens
}

fn symbol(name: &str) -> Token {
    Token::Symbol(name.to_string())
}

fn num(value: f64) -> Expr {
    Expr::number(value)
}

fn sym(name: &str) -> Expr {
    Expr::symbol(name)
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::binary(left, op, right)
}

fn assert_renders(source: &str, rendered: &str) {
    let environment = prelude();
    let expr = parse(source, &environment).unwrap_or_else(|e| panic!("{source}: {e}"));
    assert_eq!(expr.to_string(), rendered, "rendering of {source}");
}

#[test]
fn operators_use_longest_match() {
    assert_eq!(tokens("< <> <= <=> > >= : := - -> = ,"),
               vec![Token::Less,
                    Token::NotEqu,
                    Token::LessEqu,
                    Token::Equivalence,
                    Token::Greater,
                    Token::GreaterEqu,
                    Token::Colon,
                    Token::Define,
                    Token::Minus,
                    Token::RightArrow,
                    Token::Equ,
                    Token::Comma]);
    assert_eq!(tokens("<=>="), vec![Token::Equivalence, Token::Equ]);
    assert_eq!(tokens("a:=-1"),
               vec![symbol("a"), Token::Define, Token::Minus, Token::Number(1.0)]);
}

#[test]
fn greek_letters_are_single_character_symbols() {
    assert_eq!(tokens("2πr"), vec![Token::Number(2.0), symbol("π"), symbol("r")]);
    assert_eq!(tokens("αβ"), vec![symbol("α"), symbol("β")]);
    assert_eq!(tokens("sin x12"), vec![symbol("sin"), symbol("x"), Token::Number(12.0)]);
}

#[test]
fn only_greek_letters_lex_as_greek_symbols() {
    assert_eq!(tokens("ά ϑ Ω"), vec![symbol("ά"), symbol("ϑ"), symbol("Ω")]);
    for character in ['ϣ', 'Ϯ', '᾽', '῾'] {
        let source = format!("{character}");
        let mut tokenizer = Tokenizer::new(&source);
        assert_eq!(tokenizer.next(),
                   Err(ParseError::UnexpectedCharacter { character,
                                                         position: 0 }));
    }
}

#[test]
fn long_literals_are_correctly_rounded() {
    assert_eq!(tokens("7000987654312098760"), vec![Token::Number(7.000_987_654_312_099e18)]);
    assert_eq!(tokens("9007199254740993"), vec![Token::Number(9_007_199_254_740_992.0)]);

    let environment = prelude();
    let nines = "9".repeat(300);
    for input in ["7000987654312098760", "12345678901234567890123", nines.as_str()] {
        let expr = parse(input, &environment).unwrap();
        let rendered = expr.to_string();
        assert_eq!(parse(&rendered, &environment), Ok(expr), "{input} rendered as {rendered}");
    }
}

#[test]
fn literals_beyond_the_number_range_are_rejected() {
    let environment = prelude();
    let huge = "9".repeat(400);
    assert_eq!(parse(&huge, &environment), Err(ParseError::NumberTooLarge { position: 0 }));
    let error = parse(&format!("1 + {huge}"), &environment).unwrap_err();
    assert_eq!(error, ParseError::NumberTooLarge { position: 4 });
    assert_eq!(error.to_string(), "Error at 4: Number literal is too large.");
}

#[test]
fn number_literals_are_decimal_integers() {
    assert_eq!(tokens("0 42 007"),
               vec![Token::Number(0.0), Token::Number(42.0), Token::Number(7.0)]);
}

#[test]
fn positions_count_codepoints() {
    let mut tokenizer = Tokenizer::new("π + ε");
    assert!(tokenizer.next().unwrap());
    assert_eq!(tokenizer.position(), 0);
    assert!(tokenizer.next().unwrap());
    assert_eq!(tokenizer.position(), 2);
    assert!(tokenizer.next().unwrap());
    assert_eq!(tokenizer.position(), 4);
    assert!(!tokenizer.next().unwrap());
    assert_eq!(tokenizer.position(), 5);
}

#[test]
fn unexpected_character_is_reported_with_its_position() {
    let environment = prelude();
    assert_eq!(parse("π + $", &environment),
               Err(ParseError::UnexpectedCharacter { character: '$',
                                                     position:  4, }));
    assert_eq!(parse("2.5", &environment),
               Err(ParseError::UnexpectedCharacter { character: '.',
                                                     position:  1, }));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let environment = prelude();
    let expr = parse("1+2*3", &environment).unwrap();
    assert_eq!(expr,
               bin(num(1.0),
                   BinaryOperator::Add,
                   bin(num(2.0), BinaryOperator::Mul, num(3.0))));
    assert_renders("1+2*3", "1 + 2 * 3");
    assert_renders("(1+2)*3", "(1 + 2) * 3");
}

#[test]
fn exponentiation_is_right_associative() {
    let environment = prelude();
    let expr = parse("2^3^2", &environment).unwrap();
    assert_eq!(expr,
               bin(num(2.0),
                   BinaryOperator::Pow,
                   bin(num(3.0), BinaryOperator::Pow, num(2.0))));
    assert_renders("2^3^2", "2 ^ 3 ^ 2");
    assert_renders("(2^3)^2", "(2 ^ 3) ^ 2");
}

#[test]
fn subtraction_and_division_are_left_associative() {
    assert_renders("1-2-3", "1 - 2 - 3");
    assert_renders("1-(2-3)", "1 - (2 - 3)");
    assert_renders("8/4/2", "8 / 4 / 2");
    assert_renders("8/(4/2)", "8 / (4 / 2)");
    assert_renders("(1*2)*3", "1 * 2 * 3");
}

#[test]
fn negation_applies_to_the_next_primary() {
    let environment = prelude();
    let expr = parse("-2^2", &environment).unwrap();
    assert_eq!(expr,
               bin(Expr::negate(num(2.0)), BinaryOperator::Pow, num(2.0)));
    assert_renders("-(1+2)", "-(1 + 2)");
    assert_renders("--x", "--x");
}

#[test]
fn factorial_is_postfix_and_repeatable() {
    let environment = prelude();
    assert_eq!(parse("3!!", &environment).unwrap(),
               Expr::factorial(Expr::factorial(num(3.0))));
    assert_eq!(parse("2*3!", &environment).unwrap(),
               bin(num(2.0), BinaryOperator::Mul, Expr::factorial(num(3.0))));
    assert_eq!(parse("2^3!", &environment).unwrap(),
               Expr::factorial(bin(num(2.0), BinaryOperator::Pow, num(3.0))));
    assert_renders("(3!)^2", "(3!) ^ 2");
    assert_renders("(1+2)!", "(1 + 2)!");
}

#[test]
fn relations_form_a_left_associative_chain() {
    let environment = prelude();
    assert_eq!(parse("1 < 2 = x", &environment).unwrap(),
               bin(bin(num(1.0), BinaryOperator::Less, num(2.0)),
                   BinaryOperator::Equal,
                   sym("x")));
    assert_renders("1 < 2 = x", "1 < 2 = x");
    assert_renders("1 < (2 = x)", "1 < (2 = x)");
}

#[test]
fn definitions_require_a_symbol_target() {
    let environment = prelude();
    assert_eq!(parse("a := 1 + 2", &environment).unwrap(),
               Expr::define(sym("a"), bin(num(1.0), BinaryOperator::Add, num(2.0))).unwrap());
    assert_eq!(parse("2 * a := 3", &environment),
               Err(ParseError::InvalidDefinitionTarget { target:   "2 * a".to_string(),
                                                         position: 6, }));
    assert!(matches!(parse("a := b := 3", &environment),
                     Err(ParseError::InvalidDefinitionTarget { .. })));
}

#[test]
fn function_names_before_define_are_symbols() {
    let environment = prelude();
    assert_eq!(parse("sin := 2", &environment).unwrap(),
               Expr::define(sym("sin"), num(2.0)).unwrap());
}

#[test]
fn calls_accept_parenthesized_arguments() {
    let environment = prelude();
    assert_eq!(parse("polar(1, pi)", &environment).unwrap(),
               Expr::call("polar", vec![num(1.0), sym("pi")]));
    assert_eq!(parse("sin(x) + 1", &environment).unwrap(),
               bin(Expr::call("sin", vec![sym("x")]), BinaryOperator::Add, num(1.0)));
}

#[test]
fn calls_without_parentheses_are_greedy() {
    let environment = prelude();
    assert_eq!(parse("sin x + 1", &environment).unwrap(),
               Expr::call("sin", vec![bin(sym("x"), BinaryOperator::Add, num(1.0))]));
    assert_eq!(parse("polar 1, pi", &environment).unwrap(),
               Expr::call("polar", vec![num(1.0), sym("pi")]));
    assert_renders("sin x + 1", "sin(x + 1)");
    assert_renders("(sin x) * 2", "sin(x) * 2");
}

#[test]
fn call_power_suffix_applies_to_the_result() {
    let environment = prelude();
    assert_eq!(parse("sin^2(x)", &environment).unwrap(),
               bin(Expr::call("sin", vec![sym("x")]), BinaryOperator::Pow, num(2.0)));
    assert_renders("sin^2 x + cos^2 x", "sin(x + cos(x) ^ 2) ^ 2");
}

#[test]
fn rendering_round_trips() {
    let environment = prelude();
    let inputs = ["1+2*3",
                  "(1+2)*3",
                  "2^3^2",
                  "(2^3)^2",
                  "1-(2-3)",
                  "-(a+b)*c",
                  "-2^2",
                  "(3!)^2",
                  "2^3!",
                  "a := 1 < 2",
                  "a := (1 < 2)",
                  "1 < (2 < 3)",
                  "sin^2(x) + cos(x)^2",
                  "polar(1, pi / 2) * e^(i*π)",
                  "x / (y * z) - (u - v)"];
    for input in inputs {
        let expr = parse(input, &environment).unwrap_or_else(|e| panic!("{input}: {e}"));
        let rendered = expr.to_string();
        let reparsed = parse(&rendered, &environment).unwrap_or_else(|e| panic!("{rendered}: {e}"));
        assert_eq!(reparsed, expr, "{input} rendered as {rendered}");
    }
}

#[test]
fn unbalanced_parenthesis_is_unexpected_end() {
    let environment = prelude();
    assert_eq!(parse("(1 + 2", &environment), Err(ParseError::UnexpectedEof { position: 6 }));
    assert_eq!(parse("", &environment), Err(ParseError::UnexpectedEof { position: 0 }));
    assert_eq!(parse("sin", &environment), Err(ParseError::UnexpectedEof { position: 3 }));
}

#[test]
fn trailing_input_is_an_unexpected_token() {
    let environment = prelude();
    assert_eq!(parse("1 + 2 3", &environment),
               Err(ParseError::UnexpectedToken { token:    "3".to_string(),
                                                 position: 6, }));
    assert_eq!(parse("1 + * 2", &environment),
               Err(ParseError::UnexpectedToken { token:    "'*'".to_string(),
                                                 position: 4, }));
    assert_eq!(parse("sin()", &environment),
               Err(ParseError::UnexpectedToken { token:    "')'".to_string(),
                                                 position: 4, }));
    assert_eq!(parse("f(2)", &environment),
               Err(ParseError::UnexpectedToken { token:    "'('".to_string(),
                                                 position: 1, }));
}

#[test]
fn deep_nesting_is_an_error() {
    let environment = prelude();
    assert_eq!(parse(&"(".repeat(100_000), &environment),
               Err(ParseError::NestingTooDeep { position: 128 }));
    assert_eq!(parse(&format!("{}1", "-".repeat(100_000)), &environment),
               Err(ParseError::NestingTooDeep { position: 129 }));

    let deep = [format!("{}2", "2^".repeat(100_000)),
                format!("{}1", "sin(".repeat(100_000)),
                format!("1{}", "+1".repeat(100_000)),
                format!("3{}", "!".repeat(100_000)),
                format!("{}1{}", "(1+".repeat(200), ")".repeat(200))];
    for input in &deep {
        assert!(matches!(parse(input, &environment), Err(ParseError::NestingTooDeep { .. })),
                "{}...",
                &input[..16]);
    }
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let environment = prelude();
    let grouped = format!("{}1{}", "(".repeat(128), ")".repeat(128));
    assert_eq!(parse(&grouped, &environment), Ok(num(1.0)));
    assert_eq!(parse(&format!("{}1{}", "(".repeat(129), ")".repeat(129)), &environment),
               Err(ParseError::NestingTooDeep { position: 128 }));

    let sum = format!("1{}", "+1".repeat(127));
    assert_eq!(parse(&sum, &environment).unwrap().depth(), 128);
    assert!(parse(&format!("1{}", "+1".repeat(128)), &environment).is_err());

    let negated = format!("{}x", "-".repeat(100));
    assert_eq!(parse(&negated, &environment).unwrap().depth(), 101);
}

#[test]
fn error_messages_carry_the_position() {
    let environment = prelude();
    let error = parse("1 +", &environment).unwrap_err();
    assert_eq!(error.position(), 3);
    assert_eq!(error.to_string(), "Error at 3: Unexpected end of expression.");
}

#[test]
fn strict_parsing_rejects_unbound_symbols() {
    let environment = prelude();
    assert_eq!(parse_strict("x + 1", &environment),
               Err(ParseError::UnknownSymbol { name:     "x".to_string(),
                                               position: 0, }));
    assert!(parse_strict("x := 1", &environment).is_ok());
    assert!(parse_strict("e^(i*pi)", &environment).is_ok());
    assert!(parse("x + 1", &environment).is_ok());
}

#[test]
fn function_definitions_parse_at_statement_level() {
    let environment = prelude();
    let statement = parse_statement("f(x, y) := x * y", &environment).unwrap();
    assert_eq!(statement,
               Statement::Function(FunctionDef { name:   "f".to_string(),
                                                 params: vec!["x".to_string(), "y".to_string()],
                                                 body:   bin(sym("x"),
                                                             BinaryOperator::Mul,
                                                             sym("y")), }));
    assert_eq!(parse_statement("1 + 2", &environment).unwrap(),
               Statement::Expression(bin(num(1.0), BinaryOperator::Add, num(2.0))));
    assert_eq!(parse_statement("a := (1)", &environment).unwrap(),
               Statement::Expression(Expr::define(sym("a"), num(1.0)).unwrap()));
}

#[test]
fn parameters_shadow_functions_in_the_body() {
    let environment = prelude();
    let Statement::Function(function) = parse_statement("f(sin) := sin + 1", &environment).unwrap()
    else {
        panic!("expected a function definition");
    };
    assert_eq!(function.body, bin(sym("sin"), BinaryOperator::Add, num(1.0)));
}

#[test]
fn function_bodies_may_call_the_function_itself() {
    let environment = prelude();
    let Statement::Function(function) = parse_statement("f(x) := f(x - 1)", &environment).unwrap()
    else {
        panic!("expected a function definition");
    };
    assert_eq!(function.body,
               Expr::call("f", vec![bin(sym("x"), BinaryOperator::Sub, num(1.0))]));
}

#[test]
fn malformed_function_heads_are_rejected() {
    let environment = prelude();
    assert_eq!(parse_statement("f(x, x) := x", &environment),
               Err(ParseError::InvalidFunctionDefinition { position: 5 }));
    assert_eq!(parse_statement("f(2) := 1", &environment),
               Err(ParseError::InvalidFunctionDefinition { position: 2 }));
}

#[test]
fn strict_function_bodies_know_their_parameters() {
    let environment = prelude();
    assert!(parse_statement_strict("f(x) := x * 2", &environment).is_ok());
    assert_eq!(parse_statement_strict("f(x) := x + y", &environment),
               Err(ParseError::UnknownSymbol { name:     "y".to_string(),
                                               position: 12, }));
}
