//! SELECT statement builder.

use crate::error::Result;
use crate::expr::Expr;
use crate::style::Style;

/// SELECT quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// ALL.
    All,
    /// DISTINCT.
    Distinct,
}

impl Quantifier {
    const fn token(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Distinct => "DISTINCT",
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// OUTER JOIN.
    Outer,
}

impl JoinKind {
    const fn phrase(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Outer => "OUTER JOIN",
        }
    }
}

/// A recorded JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The join type.
    pub kind: JoinKind,
    /// The joined table.
    pub table: String,
    /// The ON condition.
    pub on: Option<Expr>,
}

/// A SELECT statement.
///
/// Built incrementally through chained configuration calls; `compile` is
/// side-effect-free and repeatable. The clause order is fixed:
/// `SELECT [ALL|DISTINCT] fields FROM tables [JOIN ...] [WHERE ...]
/// [ORDER BY ...] [GROUP BY ... [HAVING ...]] [UNION|UNION ALL subquery]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    quantifier: Option<Quantifier>,
    fields: Vec<Expr>,
    tables: Vec<String>,
    joins: Vec<Join>,
    where_clause: Option<Expr>,
    order_by: Vec<Expr>,
    group_by: Vec<Expr>,
    having: Option<Expr>,
    union: Option<Box<Select>>,
    union_all: Option<Box<Select>>,
}

impl Select {
    /// Creates an empty SELECT.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one output field.
    #[must_use]
    pub fn field(mut self, field: impl Into<Expr>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Sets the output field list.
    #[must_use]
    pub fn fields(mut self, fields: Vec<Expr>) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the ALL quantifier.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.quantifier = Some(Quantifier::All);
        self
    }

    /// Sets the DISTINCT quantifier.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.quantifier = Some(Quantifier::Distinct);
        self
    }

    /// Adds a source table.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.tables.push(String::from(table));
        self
    }

    /// Adds an INNER JOIN.
    #[must_use]
    pub fn join(self, table: &str, on: Expr) -> Self {
        self.push_join(JoinKind::Inner, table, Some(on))
    }

    /// Adds an INNER JOIN (alias for [`Select::join`]).
    #[must_use]
    pub fn inner_join(self, table: &str, on: Expr) -> Self {
        self.push_join(JoinKind::Inner, table, Some(on))
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(self, table: &str, on: Expr) -> Self {
        self.push_join(JoinKind::Left, table, Some(on))
    }

    /// Adds a RIGHT JOIN.
    #[must_use]
    pub fn right_join(self, table: &str, on: Expr) -> Self {
        self.push_join(JoinKind::Right, table, Some(on))
    }

    /// Adds an OUTER JOIN.
    #[must_use]
    pub fn outer_join(self, table: &str, on: Expr) -> Self {
        self.push_join(JoinKind::Outer, table, Some(on))
    }

    fn push_join(mut self, kind: JoinKind, table: &str, on: Option<Expr>) -> Self {
        self.joins.push(Join {
            kind,
            table: String::from(table),
            on,
        });
        self
    }

    /// Sets the WHERE condition.
    #[must_use]
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Sets the ORDER BY field list.
    #[must_use]
    pub fn order_by(mut self, fields: Vec<Expr>) -> Self {
        self.order_by = fields;
        self
    }

    /// Sets the GROUP BY field list.
    #[must_use]
    pub fn group_by(mut self, fields: Vec<Expr>) -> Self {
        self.group_by = fields;
        self
    }

    /// Sets the HAVING condition.
    #[must_use]
    pub fn having(mut self, condition: Expr) -> Self {
        self.having = Some(condition);
        self
    }

    /// Sets a UNION subquery.
    #[must_use]
    pub fn union(mut self, query: Self) -> Self {
        self.union = Some(Box::new(query));
        self
    }

    /// Sets a UNION ALL subquery.
    #[must_use]
    pub fn union_all(mut self, query: Self) -> Self {
        self.union_all = Some(Box::new(query));
        self
    }

    /// Compiles the statement into SQL text.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        let mut parts = vec![style.keyword("SELECT")];

        if let Some(quantifier) = self.quantifier {
            parts.push(style.keyword(quantifier.token()));
        }

        if self.fields.is_empty() {
            parts.push(String::from("*"));
        } else {
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|f| f.compile(style))
                .collect::<Result<_>>()?;
            parts.push(fields.join(", "));
        }

        if !self.tables.is_empty() {
            parts.push(style.keyword("FROM"));
            parts.push(self.tables.join(", "));
        }

        for join in &self.joins {
            parts.push(style.phrase(join.kind.phrase()));
            parts.push(join.table.clone());
            if let Some(on) = &join.on {
                parts.push(style.keyword("ON"));
                parts.push(on.compile(style)?);
            }
        }

        if let Some(condition) = &self.where_clause {
            parts.push(style.keyword("WHERE"));
            parts.push(condition.compile(style)?);
        }

        if !self.order_by.is_empty() {
            let fields: Vec<String> = self
                .order_by
                .iter()
                .map(|f| f.compile(style))
                .collect::<Result<_>>()?;
            parts.push(style.phrase("ORDER BY"));
            parts.push(fields.join(", "));
        }

        if !self.group_by.is_empty() {
            let fields: Vec<String> = self
                .group_by
                .iter()
                .map(|f| f.compile(style))
                .collect::<Result<_>>()?;
            parts.push(style.phrase("GROUP BY"));
            parts.push(fields.join(", "));

            if let Some(condition) = &self.having {
                parts.push(style.keyword("HAVING"));
                parts.push(condition.compile(style)?);
            }
        }

        if let Some(query) = &self.union {
            parts.push(style.keyword("UNION"));
            parts.push(query.compile(style)?);
        }

        if let Some(query) = &self.union_all {
            parts.push(style.phrase("UNION ALL"));
            parts.push(query.compile(style)?);
        }

        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::field;
    use crate::style::CommonStyle;

    fn compile(select: &Select) -> String {
        select.compile(&CommonStyle::new()).unwrap()
    }

    #[test]
    fn test_fields_default_to_star() {
        let select = Select::new().from("users");
        assert_eq!(compile(&select), "SELECT * FROM users");
    }

    #[test]
    fn test_where_is_omitted_until_set() {
        let select = Select::new().from("users");
        assert!(!compile(&select).contains("WHERE"));

        let select = select.where_clause(field("id").eq(1));
        let sql = compile(&select);
        assert_eq!(sql.matches("WHERE").count(), 1);
        assert_eq!(sql, "SELECT * FROM users WHERE id = 1");
    }

    #[test]
    fn test_distinct() {
        let select = Select::new().distinct().field(field("status")).from("orders");
        assert_eq!(compile(&select), "SELECT DISTINCT status FROM orders");
    }

    #[test]
    fn test_order_by_precedes_group_by() {
        // The clause order is fixed: ORDER BY renders before GROUP BY.
        let select = Select::new()
            .from("orders")
            .order_by(vec![field("total")])
            .group_by(vec![field("status")]);
        assert_eq!(
            compile(&select),
            "SELECT * FROM orders ORDER BY total GROUP BY status"
        );
    }

    #[test]
    fn test_having_requires_group_by() {
        let select = Select::new().from("orders").having(field("total").gt(10));
        assert!(!compile(&select).contains("HAVING"));

        let select = select.group_by(vec![field("status")]);
        assert_eq!(
            compile(&select),
            "SELECT * FROM orders GROUP BY status HAVING total > 10"
        );
    }

    #[test]
    fn test_join_clauses_are_rendered_after_from() {
        let select = Select::new()
            .from("users")
            .left_join("orders", field("users.id").eq(field("orders.user_id")));
        assert_eq!(
            compile(&select),
            "SELECT * FROM users LEFT JOIN orders ON users.id = orders.user_id"
        );
    }

    #[test]
    fn test_union() {
        let select = Select::new()
            .from("users")
            .union(Select::new().from("admins"));
        assert_eq!(compile(&select), "SELECT * FROM users UNION SELECT * FROM admins");
    }

    #[test]
    fn test_compile_is_repeatable() {
        let select = Select::new()
            .field(field("id"))
            .from("users")
            .where_clause(field("active").eq(1));
        assert_eq!(compile(&select), compile(&select));
    }
}
