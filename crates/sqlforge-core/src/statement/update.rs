//! UPDATE statement builder.

use crate::error::{Result, SqlError};
use crate::expr::Expr;
use crate::style::Style;

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    table: String,
    assignments: Vec<(String, Expr)>,
    where_clause: Option<Expr>,
}

impl Update {
    /// Creates an UPDATE of the given table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            where_clause: None,
        }
    }

    /// Adds a SET assignment; assignments keep their insertion order.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl Into<Expr>) -> Self {
        self.assignments.push((String::from(column), value.into()));
        self
    }

    /// Sets the WHERE condition.
    #[must_use]
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Compiles the statement into SQL text.
    ///
    /// Compiling with no assignments fails with
    /// [`SqlError::MalformedStatement`].
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        if self.assignments.is_empty() {
            return Err(SqlError::MalformedStatement(
                "UPDATE requires at least one SET assignment",
            ));
        }

        let assignments: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, value)| Ok(format!("{column} = {}", value.compile(style)?)))
            .collect::<Result<_>>()?;

        let mut sql = format!(
            "{} {} {} {}",
            style.keyword("UPDATE"),
            self.table,
            style.keyword("SET"),
            assignments.join(", ")
        );

        if let Some(condition) = &self.where_clause {
            sql.push_str(&format!(
                " {} {}",
                style.keyword("WHERE"),
                condition.compile(style)?
            ));
        }

        Ok(sql)
    }
}
