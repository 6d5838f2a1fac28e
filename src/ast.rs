use std::fmt;

use crate::{error::InvalidDefinitionTarget, interpreter::value::complex::Number};

/// Binding strength of an expression node, from loosest to tightest.
///
/// Precedence only decides where parentheses are needed when an expression
/// is rendered back to text. Evaluation order is fixed by the tree shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `:=`, `=`, `<`
    Relation,
    /// `+`, `-`
    Addition,
    /// `*`, `/`
    Multiplication,
    /// postfix `!`
    Factorial,
    /// `^`
    Power,
    /// Literals, symbols, calls and prefix negation.
    Primary,
}

/// An abstract syntax tree node representing an expression.
///
/// Every node owns its operands exclusively; the tree has no sharing and no
/// cycles. Structural comparison is `PartialEq`, which compares literals
/// with exact floating point equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value: Number,
    },
    /// Reference to a constant or a free variable by name.
    Symbol {
        /// Name of the symbol.
        name: String,
    },
    /// Prefix negation `-expr`.
    Negate {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// Postfix factorial `expr!`.
    Factorial {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An arithmetic or relational operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A definition `name := value`.
    ///
    /// Build it with [`Expr::define`], which rejects targets that are not
    /// bare symbols.
    Define {
        /// The symbol being defined.
        name:  String,
        /// The defining expression.
        value: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)` or `polar(1, pi)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Creates a numeric literal.
    #[must_use]
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number { value: value.into() }
    }

    /// Creates a symbol reference.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol { name: name.into() }
    }

    /// Creates a prefix negation.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::Negate { expr: Box::new(expr) }
    }

    /// Creates a postfix factorial.
    #[must_use]
    pub fn factorial(expr: Self) -> Self {
        Self::Factorial { expr: Box::new(expr) }
    }

    /// Creates a binary operation.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Creates a function call.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     arguments }
    }

    /// Creates a definition, checking that `target` is a bare symbol.
    ///
    /// # Example
    /// ```
    /// use complexa::ast::Expr;
    ///
    /// let ok = Expr::define(Expr::symbol("a"), Expr::number(3.0));
    /// assert!(ok.is_ok());
    ///
    /// let err = Expr::define(Expr::number(1.0), Expr::number(3.0));
    /// assert_eq!(err.unwrap_err().target, "1");
    /// ```
    pub fn define(target: Self, value: Self) -> Result<Self, InvalidDefinitionTarget> {
        match target {
            Self::Symbol { name } => Ok(Self::Define { name,
                                                       value: Box::new(value) }),
            other => Err(InvalidDefinitionTarget { target: other.to_string() }),
        }
    }

    /// Returns the binding strength used when rendering this node.
    ///
    /// Literals that do not print as a plain non-negative number (negative or
    /// complex values) rank as additions so that they get parenthesized.
    #[must_use]
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Number { value } => {
                if value.is_real() && !value.real.is_sign_negative() {
                    Precedence::Primary
                } else {
                    Precedence::Addition
                }
            },
            Self::Symbol { .. } | Self::Negate { .. } | Self::Call { .. } => Precedence::Primary,
            Self::Factorial { .. } => Precedence::Factorial,
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::Define { .. } => Precedence::Relation,
        }
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf. A literal or symbol has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Symbol { .. } => 1,
            Self::Negate { expr } | Self::Factorial { expr } => 1 + expr.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Define { value, .. } => 1 + value.depth(),
            Self::Call { arguments, .. } => 1 + arguments.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

/// Writes `expr`, wrapping it in parentheses when `parenthesize` holds.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize { write!(f, "({expr})") } else { write!(f, "{expr}") }
}

impl fmt::Display for Expr {
    /// Renders the expression with the minimal parentheses needed to parse
    /// back into the same tree.
    ///
    /// An operand is parenthesized when it binds more loosely than its parent,
    /// or equally loosely on the side the operator does not associate to.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Symbol { name } => f.write_str(name),
            Self::Negate { expr } => {
                f.write_str("-")?;
                write_operand(f, expr, expr.precedence() < Precedence::Primary)
            },
            Self::Factorial { expr } => {
                write_operand(f, expr, expr.precedence() < Precedence::Factorial)?;
                f.write_str("!")
            },
            Self::BinaryOp { left, op, right } => {
                let own = op.precedence();
                let (left_parens, right_parens) = if op.is_right_associative() {
                    (left.precedence() <= own, right.precedence() < own)
                } else {
                    (left.precedence() < own, right.precedence() <= own)
                };
                write_operand(f, left, left_parens)?;
                write!(f, " {op} ")?;
                write_operand(f, right, right_parens)
            },
            Self::Define { name, value } => {
                write!(f, "{name} := ")?;
                write_operand(f, value, value.precedence() <= Precedence::Relation)
            },
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Equality test (`=`)
    Equal,
    /// Less than (`<`)
    Less,
}

impl BinaryOperator {
    /// Returns the precedence of nodes built from this operator.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Addition,
            Self::Mul | Self::Div => Precedence::Multiplication,
            Self::Pow => Precedence::Power,
            Self::Equal | Self::Less => Precedence::Relation,
        }
    }

    /// Only `^` groups to the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Equal => "=",
            Self::Less => "<",
        };
        f.write_str(operator)
    }
}

/// Represents a user-defined function definition, e.g. `f(x, y) := x * y`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in call order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) = {}", self.name, self.params.join(", "), self.body)
    }
}

/// Represents one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A standalone expression, including `name := value` definitions.
    Expression(Expr),
}
