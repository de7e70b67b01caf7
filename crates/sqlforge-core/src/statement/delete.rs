//! DELETE statement builder.

use crate::error::Result;
use crate::expr::Expr;
use crate::style::Style;

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: String,
    where_clause: Option<Expr>,
}

impl Delete {
    /// Creates a DELETE from the given table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_clause: None,
        }
    }

    /// Sets the WHERE condition.
    #[must_use]
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Compiles the statement into SQL text.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        let mut sql = format!(
            "{} {} {}",
            style.keyword("DELETE"),
            style.keyword("FROM"),
            self.table
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::field;
    use crate::style::CommonStyle;

    #[test]
    fn test_delete_all_rows() {
        let delete = Delete::new("sessions");
        assert_eq!(
            delete.compile(&CommonStyle::new()).unwrap(),
            "DELETE FROM sessions"
        );
    }

    #[test]
    fn test_delete_with_where() {
        let delete = Delete::new("users").where_clause(field("id").eq(1));
        assert_eq!(
            delete.compile(&CommonStyle::new()).unwrap(),
            "DELETE FROM users WHERE id = 1"
        );
    }
}
