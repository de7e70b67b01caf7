//! Operator enumerations and their rendering rules.
//!
//! Operators are a fixed dispatch table: each variant maps to one SQL token.
//! New operators are added by extending these enums, never by generating
//! methods at runtime.

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Logical
    And,
    Or,
    Xor,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Identity
    Is,
    IsNot,

    // Aliasing / conversion
    As,
    Cast,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the SQL token for the operator.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::As => "AS",
            Self::Cast => "CAST",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns whether the token is a SQL keyword (subject to keyword
    /// rendering) rather than a punctuation symbol.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Xor | Self::Is | Self::IsNot | Self::As | Self::Cast
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical NOT.
    Not,
    /// EXISTS (subquery probe).
    Exists,
}

impl UnaryOp {
    /// Returns the SQL token for the operator.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Exists => "EXISTS",
        }
    }
}

/// Pattern-match operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOp {
    /// Standard LIKE.
    Like,
    /// GLOB (SQLite).
    Glob,
    /// REGEXP.
    Regexp,
    /// MATCH.
    Match,
}

impl LikeOp {
    /// Returns the SQL token for the operator.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Regexp => "REGEXP",
            Self::Match => "MATCH",
        }
    }
}

/// Aggregate functions available through every dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// COUNT.
    Count,
    /// MIN.
    Min,
    /// MAX.
    Max,
    /// SUM.
    Sum,
    /// AVG.
    Avg,
}

impl AggregateFunction {
    /// Returns the SQL name of the function.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_operators() {
        assert!(BinaryOp::And.is_word());
        assert!(BinaryOp::IsNot.is_word());
        assert!(!BinaryOp::Eq.is_word());
        assert!(!BinaryOp::Lt.is_word());
    }

    #[test]
    fn test_tokens() {
        assert_eq!(BinaryOp::NotEq.token(), "!=");
        assert_eq!(BinaryOp::IsNot.token(), "IS NOT");
        assert_eq!(UnaryOp::Exists.token(), "EXISTS");
        assert_eq!(LikeOp::Glob.token(), "GLOB");
        assert_eq!(AggregateFunction::Avg.name(), "AVG");
    }
}
