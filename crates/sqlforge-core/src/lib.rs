//! # sqlforge-core
//!
//! A composable SQL statement compiler.
//!
//! SQL commands are built as expression trees and compiled to text in one
//! pass; no string concatenation of user-supplied fragments, no database
//! connection, no parsing of existing SQL. A [`style::Style`] carries the
//! bound [`dialect::Dialect`] plus layout and casing policy through a
//! compilation pass.
//!
//! ```rust
//! use sqlforge_core::expr::field;
//! use sqlforge_core::statement::Select;
//! use sqlforge_core::style::CommonStyle;
//!
//! let query = Select::new()
//!     .field(field("id"))
//!     .from("users")
//!     .where_clause(field("active").eq(1));
//!
//! let sql = query.compile(&CommonStyle::new()).unwrap();
//! assert_eq!(sql, "SELECT id FROM users WHERE active = 1");
//! ```

pub mod dialect;
pub mod error;
pub mod expr;
pub mod statement;
pub mod style;

pub use dialect::{CommonDialect, Construct, Dialect, StatementKind};
pub use error::{Result, SqlError};
pub use expr::{field, AggregateFunction, BinaryOp, Expr, Field, FieldCache, LikeOp, Literal, UnaryOp};
pub use statement::{
    CreateIndex, CreateTable, CreateView, Delete, DropTable, Insert, Program, Select, Stmt, Update,
};
pub use style::{CommonStyle, Style};
