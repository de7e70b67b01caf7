//! INSERT statement builder.

use crate::error::{Result, SqlError};
use crate::expr::Expr;
use crate::style::Style;

use super::Select;

/// An INSERT statement.
///
/// The compiled form is chosen from what was set, in this priority:
///
/// 1. a column→value map: `INSERT INTO t (cols) VALUES (vals)`;
/// 2. a `from` subquery: `INSERT INTO t (fields) SELECT ...`;
/// 3. a field list plus a value list: `INSERT INTO t (fields) VALUES (vals)`;
/// 4. values alone: `INSERT INTO t VALUES (vals)`.
///
/// Compiling with neither values nor a subquery fails with
/// [`SqlError::MalformedStatement`].
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: String,
    fields: Vec<String>,
    values: Vec<Expr>,
    values_map: Vec<(String, Expr)>,
    from: Option<Select>,
}

impl Insert {
    /// Creates an INSERT into the given table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
            values: Vec::new(),
            values_map: Vec::new(),
            from: None,
        }
    }

    /// Sets the explicit field list.
    #[must_use]
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| String::from(*f)).collect();
        self
    }

    /// Sets the value list.
    #[must_use]
    pub fn values(mut self, values: Vec<Expr>) -> Self {
        self.values = values;
        self
    }

    /// Adds one column→value pair; pairs keep their insertion order.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl Into<Expr>) -> Self {
        self.values_map.push((String::from(column), value.into()));
        self
    }

    /// Sets a SELECT subquery as the row source.
    #[must_use]
    pub fn from(mut self, query: Select) -> Self {
        self.from = Some(query);
        self
    }

    /// Compiles the statement into SQL text.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        let head = format!(
            "{} {} {}",
            style.keyword("INSERT"),
            style.keyword("INTO"),
            self.table
        );

        if !self.values_map.is_empty() {
            let columns: Vec<&str> = self.values_map.iter().map(|(c, _)| c.as_str()).collect();
            let values: Vec<String> = self
                .values_map
                .iter()
                .map(|(_, v)| v.compile(style))
                .collect::<Result<_>>()?;
            return Ok(format!(
                "{head} ({}) {} ({})",
                columns.join(", "),
                style.keyword("VALUES"),
                values.join(", ")
            ));
        }

        if let Some(query) = &self.from {
            let compiled = query.compile(style)?;
            if self.fields.is_empty() {
                return Ok(format!("{head} {compiled}"));
            }
            return Ok(format!("{head} ({}) {compiled}", self.fields.join(", ")));
        }

        if !self.values.is_empty() {
            let values: Vec<String> = self
                .values
                .iter()
                .map(|v| v.compile(style))
                .collect::<Result<_>>()?;
            let values = format!("{} ({})", style.keyword("VALUES"), values.join(", "));
            if self.fields.is_empty() {
                return Ok(format!("{head} {values}"));
            }
            return Ok(format!("{head} ({}) {values}", self.fields.join(", ")));
        }

        Err(SqlError::MalformedStatement(
            "INSERT requires values or a subquery",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CommonStyle;

    fn compile(insert: &Insert) -> Result<String> {
        insert.compile(&CommonStyle::new())
    }

    #[test]
    fn test_map_form() {
        let insert = Insert::new("t").set("a", 1).set("b", 2);
        assert_eq!(
            compile(&insert).unwrap(),
            "INSERT INTO t (a, b) VALUES (1, 2)"
        );
    }

    #[test]
    fn test_fields_and_values_form() {
        let insert = Insert::new("t").fields(&["a"]).values(vec![Expr::int(1)]);
        assert_eq!(compile(&insert).unwrap(), "INSERT INTO t (a) VALUES (1)");
    }

    #[test]
    fn test_values_only_form() {
        let insert = Insert::new("users").values(vec![Expr::int(1), Expr::from("Alice")]);
        assert_eq!(
            compile(&insert).unwrap(),
            "INSERT INTO users VALUES (1, 'Alice')"
        );
    }

    #[test]
    fn test_subquery_form() {
        let insert = Insert::new("archive")
            .fields(&["id", "name"])
            .from(Select::new().from("users"));
        assert_eq!(
            compile(&insert).unwrap(),
            "INSERT INTO archive (id, name) SELECT * FROM users"
        );
    }

    #[test]
    fn test_map_takes_priority_over_subquery() {
        let insert = Insert::new("t")
            .set("a", 1)
            .from(Select::new().from("users"));
        assert_eq!(compile(&insert).unwrap(), "INSERT INTO t (a) VALUES (1)");
    }

    #[test]
    fn test_missing_values_is_malformed() {
        let insert = Insert::new("t").fields(&["a"]);
        assert!(matches!(
            compile(&insert),
            Err(SqlError::MalformedStatement(_))
        ));
    }
}
