//! CREATE and DROP statement builders.

use crate::error::{Result, SqlError};
use crate::style::Style;

use super::Select;

/// A column definition in a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// SQL type name.
    pub type_name: String,
    /// Whether NOT NULL is appended.
    pub not_null: bool,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    table: String,
    columns: Vec<ColumnDef>,
}

impl CreateTable {
    /// Creates a CREATE TABLE for the given table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Adds a nullable column; columns keep their insertion order.
    #[must_use]
    pub fn column(self, name: &str, type_name: &str) -> Self {
        self.push_column(name, type_name, false)
    }

    /// Adds a NOT NULL column.
    #[must_use]
    pub fn column_not_null(self, name: &str, type_name: &str) -> Self {
        self.push_column(name, type_name, true)
    }

    fn push_column(mut self, name: &str, type_name: &str, not_null: bool) -> Self {
        self.columns.push(ColumnDef {
            name: String::from(name),
            type_name: String::from(type_name),
            not_null,
        });
        self
    }

    /// Compiles the statement into SQL text.
    ///
    /// Compiling with no columns fails with [`SqlError::MalformedStatement`].
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        if self.columns.is_empty() {
            return Err(SqlError::MalformedStatement(
                "CREATE TABLE requires at least one column",
            ));
        }

        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|col| {
                let mut def = format!("{} {}", col.name, col.type_name);
                if col.not_null {
                    def.push_str(&format!(" {}", style.phrase("NOT NULL")));
                }
                def
            })
            .collect();

        Ok(format!(
            "{} {} ({})",
            style.phrase("CREATE TABLE"),
            self.table,
            columns.join(", ")
        ))
    }
}

/// A CREATE INDEX statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    index: String,
    table: Option<String>,
    columns: Vec<String>,
}

impl CreateIndex {
    /// Creates a CREATE INDEX with the given index name.
    #[must_use]
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            table: None,
            columns: Vec::new(),
        }
    }

    /// Sets the indexed table.
    #[must_use]
    pub fn on(mut self, table: &str) -> Self {
        self.table = Some(String::from(table));
        self
    }

    /// Sets the indexed column list.
    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| String::from(*c)).collect();
        self
    }

    /// Compiles the statement into SQL text.
    ///
    /// Compiling without a table or columns fails with
    /// [`SqlError::MalformedStatement`].
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        let table = self.table.as_ref().ok_or(SqlError::MalformedStatement(
            "CREATE INDEX requires a table",
        ))?;
        if self.columns.is_empty() {
            return Err(SqlError::MalformedStatement(
                "CREATE INDEX requires at least one column",
            ));
        }

        Ok(format!(
            "{} {} {} {table} ({})",
            style.phrase("CREATE INDEX"),
            self.index,
            style.keyword("ON"),
            self.columns.join(", ")
        ))
    }
}

/// A CREATE VIEW statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateView {
    view: String,
    query: Select,
}

impl CreateView {
    /// Creates a CREATE VIEW for the given view name and query.
    #[must_use]
    pub fn new(view: impl Into<String>, query: Select) -> Self {
        Self {
            view: view.into(),
            query,
        }
    }

    /// Compiles the statement into SQL text.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        Ok(format!(
            "{} {} {} {}",
            style.phrase("CREATE VIEW"),
            self.view,
            style.keyword("AS"),
            self.query.compile(style)?
        ))
    }
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    table: String,
}

impl DropTable {
    /// Creates a DROP TABLE for the given table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Compiles the statement into SQL text.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        Ok(format!("{} {}", style.phrase("DROP TABLE"), self.table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CommonStyle;

    fn style() -> CommonStyle {
        CommonStyle::new()
    }

    #[test]
    fn test_create_table() {
        let create = CreateTable::new("users")
            .column_not_null("id", "INTEGER")
            .column("name", "TEXT");
        assert_eq!(
            create.compile(&style()).unwrap(),
            "CREATE TABLE users (id INTEGER NOT NULL, name TEXT)"
        );
    }

    #[test]
    fn test_create_table_without_columns_is_malformed() {
        let create = CreateTable::new("users");
        assert!(matches!(
            create.compile(&style()),
            Err(SqlError::MalformedStatement(_))
        ));
    }

    #[test]
    fn test_create_index() {
        let create = CreateIndex::new("idx_users_email")
            .on("users")
            .columns(&["email"]);
        assert_eq!(
            create.compile(&style()).unwrap(),
            "CREATE INDEX idx_users_email ON users (email)"
        );
    }

    #[test]
    fn test_create_view() {
        let create = CreateView::new("active_users", Select::new().from("users"));
        assert_eq!(
            create.compile(&style()).unwrap(),
            "CREATE VIEW active_users AS SELECT * FROM users"
        );
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(
            DropTable::new("users").compile(&style()).unwrap(),
            "DROP TABLE users"
        );
    }
}
