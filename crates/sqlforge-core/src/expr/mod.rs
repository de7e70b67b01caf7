//! The recursive expression tree.
//!
//! Expressions are built by composition: every constructor consumes its
//! operands and returns a new immutable node. Compilation renders children
//! recursively and joins the operator token and rendered children with single
//! spaces, omitting absent sub-parts. It is pure text production and never
//! touches live data.

mod field;
mod literal;
mod ops;

pub use field::{Field, FieldCache};
pub use literal::{quote_string, Literal};
pub use ops::{AggregateFunction, BinaryOp, LikeOp, UnaryOp};

use crate::error::Result;
use crate::statement::Select;
use crate::style::Style;

/// Creates an unqualified column reference expression.
#[must_use]
pub fn field(name: &str) -> Expr {
    Expr::from(Field::new(name))
}

/// The payload of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A column reference.
    Field(Field),
    /// A literal value.
    Literal(Literal),
    /// An aggregate function call; an empty argument list renders as `*`.
    Aggregate {
        /// The function.
        func: AggregateFunction,
        /// The arguments.
        args: Vec<Expr>,
    },
    /// A binary expression.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// A pattern-match expression with an optional ESCAPE clause.
    Like {
        /// Operator.
        op: LikeOp,
        /// The matched expression.
        left: Box<Expr>,
        /// The pattern.
        pattern: Box<Expr>,
        /// Optional escape string; omitted entirely when absent.
        escape: Option<String>,
    },
    /// A BETWEEN expression.
    Between {
        /// The tested expression.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
    },
    /// An IN expression.
    In {
        /// The tested expression.
        expr: Box<Expr>,
        /// Candidate values.
        list: Vec<Expr>,
    },
}

/// An expression node: a variant payload plus a negation flag.
///
/// Negation is the only mutation allowed on a built node and is idempotent:
/// negating twice still renders a single leading `NOT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    negated: bool,
    kind: ExprKind,
}

impl Expr {
    /// Wraps a kind into a non-negated node.
    #[must_use]
    pub const fn new(kind: ExprKind) -> Self {
        Self {
            negated: false,
            kind,
        }
    }

    /// Returns the node's payload.
    #[must_use]
    pub const fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Returns whether the node is negated.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::new(ExprKind::Literal(Literal::Int(value)))
    }

    /// Creates a float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::new(ExprKind::Literal(Literal::Float(value)))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ExprKind::Literal(Literal::Str(value.into())))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(ExprKind::Literal(Literal::Null))
    }

    /// Creates a subquery expression.
    #[must_use]
    pub fn subquery(query: Select) -> Self {
        Self::new(ExprKind::Literal(Literal::Subquery(Box::new(query))))
    }

    /// Creates an aggregate function call.
    #[must_use]
    pub fn aggregate(func: AggregateFunction, args: Vec<Self>) -> Self {
        Self::new(ExprKind::Aggregate { func, args })
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: impl Into<Self>) -> Self {
        Self::new(ExprKind::Binary {
            op,
            left: Box::new(self),
            right: Box::new(right.into()),
        })
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates an XOR expression.
    #[must_use]
    pub fn xor(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Xor, right)
    }

    /// Creates an IS expression.
    #[must_use]
    pub fn is(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Is, right)
    }

    /// Creates an IS NOT expression.
    #[must_use]
    pub fn is_not(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::IsNot, right)
    }

    /// Creates an AS alias expression.
    #[must_use]
    pub fn as_alias(self, alias: &str) -> Self {
        self.binary(BinaryOp::As, field(alias))
    }

    /// Creates a CAST expression, rendered `CAST(expr AS type)`.
    #[must_use]
    pub fn cast(self, type_name: &str) -> Self {
        self.binary(BinaryOp::Cast, field(type_name))
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Self {
        self.like_op(LikeOp::Like, pattern, None)
    }

    /// Creates a LIKE expression with an ESCAPE clause.
    #[must_use]
    pub fn like_escape(self, pattern: impl Into<Self>, escape: impl Into<String>) -> Self {
        self.like_op(LikeOp::Like, pattern, Some(escape.into()))
    }

    /// Creates a GLOB expression.
    #[must_use]
    pub fn glob(self, pattern: impl Into<Self>) -> Self {
        self.like_op(LikeOp::Glob, pattern, None)
    }

    /// Creates a REGEXP expression.
    #[must_use]
    pub fn regexp(self, pattern: impl Into<Self>) -> Self {
        self.like_op(LikeOp::Regexp, pattern, None)
    }

    /// Creates a MATCH expression.
    #[must_use]
    pub fn match_against(self, pattern: impl Into<Self>) -> Self {
        self.like_op(LikeOp::Match, pattern, None)
    }

    fn like_op(self, op: LikeOp, pattern: impl Into<Self>, escape: Option<String>) -> Self {
        Self::new(ExprKind::Like {
            op,
            left: Box::new(self),
            pattern: Box::new(pattern.into()),
            escape,
        })
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: impl Into<Self>, high: impl Into<Self>) -> Self {
        Self::new(ExprKind::Between {
            expr: Box::new(self),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
        })
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::new(ExprKind::In {
            expr: Box::new(self),
            list,
        })
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list(self, list: Vec<Self>) -> Self {
        self.in_list(list).negate()
    }

    /// Creates an EXISTS expression.
    #[must_use]
    pub fn exists(query: Select) -> Self {
        Self::new(ExprKind::Unary {
            op: UnaryOp::Exists,
            operand: Box::new(Self::subquery(query)),
        })
    }

    /// Negates the expression. Idempotent: negating twice still renders a
    /// single leading `NOT`.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Compiles the expression into a SQL fragment.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        let body = match &self.kind {
            ExprKind::Field(f) => f.to_sql(),
            ExprKind::Literal(lit) => lit.to_sql(style)?,
            ExprKind::Aggregate { func, args } => {
                let rendered = if args.is_empty() {
                    String::from("*")
                } else {
                    let parts: Vec<String> = args
                        .iter()
                        .map(|arg| arg.compile(style))
                        .collect::<Result<_>>()?;
                    parts.join(", ")
                };
                format!("{}({rendered})", style.keyword(func.name()))
            }
            ExprKind::Binary { op, left, right } => {
                let left = left.compile(style)?;
                let right = right.compile(style)?;
                if *op == BinaryOp::Cast {
                    format!(
                        "{}({left} {} {right})",
                        style.keyword("CAST"),
                        style.keyword("AS")
                    )
                } else {
                    let token = if op.is_word() {
                        style.phrase(op.token())
                    } else {
                        String::from(op.token())
                    };
                    format!("{left} {token} {right}")
                }
            }
            ExprKind::Unary { op, operand } => {
                format!("{} {}", style.keyword(op.token()), operand.compile(style)?)
            }
            ExprKind::Like {
                op,
                left,
                pattern,
                escape,
            } => {
                let mut out = format!(
                    "{} {} {}",
                    left.compile(style)?,
                    style.keyword(op.token()),
                    pattern.compile(style)?
                );
                if let Some(escape) = escape {
                    out.push_str(&format!(
                        " {} {}",
                        style.keyword("ESCAPE"),
                        quote_string(escape)
                    ));
                }
                out
            }
            ExprKind::Between { expr, low, high } => format!(
                "{} {} {} {} {}",
                expr.compile(style)?,
                style.keyword("BETWEEN"),
                low.compile(style)?,
                style.keyword("AND"),
                high.compile(style)?
            ),
            ExprKind::In { expr, list } => {
                let parts: Vec<String> = list
                    .iter()
                    .map(|item| item.compile(style))
                    .collect::<Result<_>>()?;
                format!(
                    "{} {} ({})",
                    expr.compile(style)?,
                    style.keyword("IN"),
                    parts.join(", ")
                )
            }
        };

        if self.negated {
            Ok(format!("{} {body}", style.keyword("NOT")))
        } else {
            Ok(body)
        }
    }
}

impl From<Field> for Expr {
    fn from(f: Field) -> Self {
        Self::new(ExprKind::Field(f))
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Self::new(ExprKind::Literal(lit))
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::int(i64::from(n))
    }
}

impl From<f64> for Expr {
    fn from(f: f64) -> Self {
        Self::float(f)
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<Select> for Expr {
    fn from(query: Select) -> Self {
        Self::subquery(query)
    }
}
