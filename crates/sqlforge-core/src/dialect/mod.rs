//! SQL dialects and the process-wide dialect registry.
//!
//! A dialect is a named family of statement factories and aggregate
//! constructors. Dialects are resolved by name through a registry created at
//! process start and pre-populated with the built-in `common` dialect.
//! Registration of additional dialects should happen before concurrent use;
//! lookups are read-only and safe to run concurrently.

mod common;

pub use common::CommonDialect;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::debug;

use crate::error::{Result, SqlError};
use crate::expr::{AggregateFunction, Expr};
use crate::statement::{
    CreateIndex, CreateTable, CreateView, Delete, DropTable, Insert, Select, Update,
};

/// The kind of statement a dialect can manufacture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// CREATE TABLE.
    CreateTable,
    /// CREATE INDEX.
    CreateIndex,
    /// CREATE VIEW.
    CreateView,
    /// INSERT.
    Insert,
    /// SELECT.
    Select,
    /// UPDATE.
    Update,
    /// DELETE.
    Delete,
    /// DROP TABLE.
    DropTable,
}

/// A construct a dialect can produce by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// A statement factory.
    Statement(StatementKind),
    /// An aggregate function constructor.
    Aggregate(AggregateFunction),
}

/// A named family of statement factories and keyword sets.
pub trait Dialect: Send + Sync {
    /// Returns the unique dialect name.
    fn name(&self) -> &'static str;

    /// Looks up a construct by name.
    ///
    /// This is the dispatch table consulted by [`crate::style::Style::express`];
    /// returns `None` for names the dialect does not implement.
    fn construct(&self, name: &str) -> Option<Construct> {
        Some(match name {
            "create_table" => Construct::Statement(StatementKind::CreateTable),
            "create_index" => Construct::Statement(StatementKind::CreateIndex),
            "create_view" => Construct::Statement(StatementKind::CreateView),
            "insert" => Construct::Statement(StatementKind::Insert),
            "select" => Construct::Statement(StatementKind::Select),
            "update" => Construct::Statement(StatementKind::Update),
            "delete" => Construct::Statement(StatementKind::Delete),
            "drop_table" => Construct::Statement(StatementKind::DropTable),
            "count" => Construct::Aggregate(AggregateFunction::Count),
            "min" => Construct::Aggregate(AggregateFunction::Min),
            "max" => Construct::Aggregate(AggregateFunction::Max),
            "sum" => Construct::Aggregate(AggregateFunction::Sum),
            "avg" => Construct::Aggregate(AggregateFunction::Avg),
            _ => return None,
        })
    }

    /// Creates an empty SELECT statement.
    fn select(&self) -> Select {
        Select::new()
    }

    /// Creates an INSERT statement for the given table.
    fn insert(&self, table: &str) -> Insert {
        Insert::new(table)
    }

    /// Creates an UPDATE statement for the given table.
    fn update(&self, table: &str) -> Update {
        Update::new(table)
    }

    /// Creates a DELETE statement for the given table.
    fn delete(&self, table: &str) -> Delete {
        Delete::new(table)
    }

    /// Creates a CREATE TABLE statement for the given table.
    fn create_table(&self, table: &str) -> CreateTable {
        CreateTable::new(table)
    }

    /// Creates a CREATE INDEX statement for the given index name.
    fn create_index(&self, index: &str) -> CreateIndex {
        CreateIndex::new(index)
    }

    /// Creates a CREATE VIEW statement.
    fn create_view(&self, view: &str, query: Select) -> CreateView {
        CreateView::new(view, query)
    }

    /// Creates a DROP TABLE statement for the given table.
    fn drop_table(&self, table: &str) -> DropTable {
        DropTable::new(table)
    }

    /// Creates a COUNT aggregate.
    fn count(&self, args: Vec<Expr>) -> Expr {
        Expr::aggregate(AggregateFunction::Count, args)
    }

    /// Creates a MIN aggregate.
    fn min(&self, args: Vec<Expr>) -> Expr {
        Expr::aggregate(AggregateFunction::Min, args)
    }

    /// Creates a MAX aggregate.
    fn max(&self, args: Vec<Expr>) -> Expr {
        Expr::aggregate(AggregateFunction::Max, args)
    }

    /// Creates a SUM aggregate.
    fn sum(&self, args: Vec<Expr>) -> Expr {
        Expr::aggregate(AggregateFunction::Sum, args)
    }

    /// Creates an AVG aggregate.
    fn avg(&self, args: Vec<Expr>) -> Expr {
        Expr::aggregate(AggregateFunction::Avg, args)
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<dyn Dialect>>>> = LazyLock::new(|| {
    let mut dialects: HashMap<String, Arc<dyn Dialect>> = HashMap::new();
    dialects.insert(String::from("common"), Arc::new(CommonDialect));
    RwLock::new(dialects)
});

/// Registers a dialect under its own name.
///
/// Fails with [`SqlError::DuplicateDialect`] when the name is already taken;
/// a registered dialect is never silently replaced.
pub fn register(dialect: Arc<dyn Dialect>) -> Result<()> {
    let name = dialect.name();
    let mut dialects = REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if dialects.contains_key(name) {
        return Err(SqlError::DuplicateDialect(String::from(name)));
    }
    debug!(dialect = name, "registering SQL dialect");
    dialects.insert(String::from(name), dialect);
    Ok(())
}

/// Resolves a registered dialect by name.
///
/// Fails with [`SqlError::UnknownDialect`] on a miss; a default is never
/// substituted.
pub fn resolve(name: &str) -> Result<Arc<dyn Dialect>> {
    let dialects = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    dialects
        .get(name)
        .cloned()
        .ok_or_else(|| SqlError::UnknownDialect(String::from(name)))
}

/// Returns the built-in common dialect.
#[must_use]
pub fn common() -> Arc<dyn Dialect> {
    // The registry is seeded with "common" at creation, so this cannot miss.
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get("common")
        .cloned()
        .unwrap_or_else(|| Arc::new(CommonDialect))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SqliteDialect;

    impl Dialect for SqliteDialect {
        fn name(&self) -> &'static str {
            "sqlite-test"
        }
    }

    #[test]
    fn test_common_is_pre_registered() {
        let dialect = resolve("common").unwrap();
        assert_eq!(dialect.name(), "common");
    }

    #[test]
    fn test_unknown_dialect_fails() {
        let err = resolve("oracle").err().unwrap();
        assert_eq!(err, SqlError::UnknownDialect(String::from("oracle")));
    }

    #[test]
    fn test_register_and_resolve() {
        register(Arc::new(SqliteDialect)).unwrap();
        assert_eq!(resolve("sqlite-test").unwrap().name(), "sqlite-test");

        // Duplicate registration is rejected.
        let err = register(Arc::new(SqliteDialect)).unwrap_err();
        assert_eq!(err, SqlError::DuplicateDialect(String::from("sqlite-test")));
    }

    #[test]
    fn test_every_construct_maps_to_a_live_factory() {
        use crate::expr::field;
        use crate::statement::Stmt;
        use crate::style::CommonStyle;

        let dialect = CommonDialect;
        let style = CommonStyle::new();
        let query = || dialect.select().from("t");
        for name in [
            "create_table",
            "create_index",
            "create_view",
            "insert",
            "select",
            "update",
            "delete",
            "drop_table",
            "count",
            "min",
            "max",
            "sum",
            "avg",
        ] {
            let rendered = match dialect.construct(name).unwrap() {
                Construct::Statement(kind) => {
                    let statement = match kind {
                        StatementKind::CreateTable => {
                            Stmt::from(dialect.create_table("t").column("id", "INTEGER"))
                        }
                        StatementKind::CreateIndex => {
                            Stmt::from(dialect.create_index("i").on("t").columns(&["id"]))
                        }
                        StatementKind::CreateView => Stmt::from(dialect.create_view("v", query())),
                        StatementKind::Insert => Stmt::from(dialect.insert("t").set("id", 1)),
                        StatementKind::Select => Stmt::from(query()),
                        StatementKind::Update => Stmt::from(dialect.update("t").set("id", 1)),
                        StatementKind::Delete => Stmt::from(dialect.delete("t")),
                        StatementKind::DropTable => Stmt::from(dialect.drop_table("t")),
                    };
                    statement.compile(&style)
                }
                Construct::Aggregate(func) => {
                    let aggregate = match func {
                        AggregateFunction::Count => dialect.count(vec![]),
                        AggregateFunction::Min => dialect.min(vec![field("id")]),
                        AggregateFunction::Max => dialect.max(vec![field("id")]),
                        AggregateFunction::Sum => dialect.sum(vec![field("id")]),
                        AggregateFunction::Avg => dialect.avg(vec![field("id")]),
                    };
                    aggregate.compile(&style)
                }
            };
            assert!(rendered.is_ok(), "construct {name} has no working factory");
        }
    }

    #[test]
    fn test_construct_table() {
        let dialect = CommonDialect;
        assert_eq!(
            dialect.construct("select"),
            Some(Construct::Statement(StatementKind::Select))
        );
        assert_eq!(
            dialect.construct("count"),
            Some(Construct::Aggregate(AggregateFunction::Count))
        );
        assert_eq!(dialect.construct("vacuum"), None);
    }
}
