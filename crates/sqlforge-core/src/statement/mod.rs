//! Complete, independently compilable SQL commands.
//!
//! Each statement owns its child expressions and nested statements
//! exclusively. Statements are configured through chained calls and finalized
//! by a single `compile`, which is side-effect-free and repeatable: calling
//! it twice on the same state yields identical text.

mod create;
mod delete;
mod insert;
mod program;
mod select;
mod update;

pub use create::{ColumnDef, CreateIndex, CreateTable, CreateView, DropTable};
pub use delete::Delete;
pub use insert::Insert;
pub use program::Program;
pub use select::{Join, JoinKind, Quantifier, Select};
pub use update::Update;

use crate::error::Result;
use crate::style::Style;

/// Any complete SQL command; used wherever statements are sequenced
/// heterogeneously (programs, stacked injections).
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A CREATE TABLE statement.
    CreateTable(CreateTable),
    /// A CREATE INDEX statement.
    CreateIndex(CreateIndex),
    /// A CREATE VIEW statement.
    CreateView(CreateView),
    /// An INSERT statement.
    Insert(Insert),
    /// A SELECT statement.
    Select(Select),
    /// An UPDATE statement.
    Update(Update),
    /// A DELETE statement.
    Delete(Delete),
    /// A DROP TABLE statement.
    DropTable(DropTable),
}

impl Stmt {
    /// Compiles the wrapped statement into SQL text.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        match self {
            Self::CreateTable(s) => s.compile(style),
            Self::CreateIndex(s) => s.compile(style),
            Self::CreateView(s) => s.compile(style),
            Self::Insert(s) => s.compile(style),
            Self::Select(s) => s.compile(style),
            Self::Update(s) => s.compile(style),
            Self::Delete(s) => s.compile(style),
            Self::DropTable(s) => s.compile(style),
        }
    }
}

impl From<CreateTable> for Stmt {
    fn from(s: CreateTable) -> Self {
        Self::CreateTable(s)
    }
}

impl From<CreateIndex> for Stmt {
    fn from(s: CreateIndex) -> Self {
        Self::CreateIndex(s)
    }
}

impl From<CreateView> for Stmt {
    fn from(s: CreateView) -> Self {
        Self::CreateView(s)
    }
}

impl From<Insert> for Stmt {
    fn from(s: Insert) -> Self {
        Self::Insert(s)
    }
}

impl From<Select> for Stmt {
    fn from(s: Select) -> Self {
        Self::Select(s)
    }
}

impl From<Update> for Stmt {
    fn from(s: Update) -> Self {
        Self::Update(s)
    }
}

impl From<Delete> for Stmt {
    fn from(s: Delete) -> Self {
        Self::Delete(s)
    }
}

impl From<DropTable> for Stmt {
    fn from(s: DropTable) -> Self {
        Self::DropTable(s)
    }
}
