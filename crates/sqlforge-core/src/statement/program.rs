//! Multi-statement programs.

use crate::error::Result;
use crate::style::Style;

use super::Stmt;

/// An ordered sequence of statements compiled as one script.
///
/// Children are joined with a newline under a multiline style and with `"; "`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    statements: Vec<Stmt>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement.
    #[must_use]
    pub fn add(mut self, statement: impl Into<Stmt>) -> Self {
        self.statements.push(statement.into());
        self
    }

    /// Returns the number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns whether the program is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Compiles the program into one script.
    pub fn compile(&self, style: &dyn Style) -> Result<String> {
        let compiled: Vec<String> = self
            .statements
            .iter()
            .map(|statement| statement.compile(style))
            .collect::<Result<_>>()?;
        let separator = if style.multiline() { "\n" } else { "; " };
        Ok(compiled.join(separator))
    }
}
