//! Compilation styles.
//!
//! A style carries the dialect and the line-layout/casing policy for one
//! compilation pass. Keyword rendering is the single hook a style variant can
//! override; the injection crate uses it for keyword evasion.

use std::sync::Arc;

use crate::dialect::{self, Construct, Dialect};
use crate::error::{Result, SqlError};

/// Formatting policy for a compilation pass.
pub trait Style {
    /// Returns the bound dialect.
    fn dialect(&self) -> &dyn Dialect;

    /// Returns whether multi-statement programs are joined with newlines.
    fn multiline(&self) -> bool {
        false
    }

    /// Returns whether keywords are rendered lowercase.
    fn lowercase(&self) -> bool {
        false
    }

    /// Renders a single keyword token.
    fn keyword(&self, word: &str) -> String {
        if self.lowercase() {
            word.to_lowercase()
        } else {
            String::from(word)
        }
    }

    /// Renders a multi-word keyword phrase (e.g. `ORDER BY`), applying
    /// [`Style::keyword`] to each word.
    fn phrase(&self, words: &str) -> String {
        words
            .split_whitespace()
            .map(|word| self.keyword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Asks the bound dialect to produce a construct by name.
    ///
    /// Fails with [`SqlError::UnsupportedCapability`] when the dialect does
    /// not recognize the name.
    fn express(&self, name: &str) -> Result<Construct> {
        self.dialect()
            .construct(name)
            .ok_or_else(|| SqlError::UnsupportedCapability {
                dialect: String::from(self.dialect().name()),
                construct: String::from(name),
            })
    }
}

/// The default style: a bound dialect plus layout and casing flags.
#[derive(Clone)]
pub struct CommonStyle {
    dialect: Arc<dyn Dialect>,
    multiline: bool,
    lowercase: bool,
}

impl CommonStyle {
    /// Creates a style bound to the pre-registered common dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dialect: dialect::common(),
            multiline: false,
            lowercase: false,
        }
    }

    /// Creates a style bound to the given dialect instance.
    #[must_use]
    pub fn with_dialect(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            multiline: false,
            lowercase: false,
        }
    }

    /// Swaps the bound dialect for a registered one, resolved by name.
    ///
    /// Fails with [`SqlError::UnknownDialect`] when the name was never
    /// registered.
    pub fn set_dialect(&mut self, name: &str) -> Result<()> {
        self.dialect = dialect::resolve(name)?;
        Ok(())
    }

    /// Swaps the bound dialect for the given instance.
    pub fn set_dialect_instance(&mut self, dialect: Arc<dyn Dialect>) {
        self.dialect = dialect;
    }

    /// Sets the multiline flag.
    #[must_use]
    pub const fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Sets the lowercase flag.
    #[must_use]
    pub const fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Default for CommonStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommonStyle")
            .field("dialect", &self.dialect.name())
            .field("multiline", &self.multiline)
            .field("lowercase", &self.lowercase)
            .finish()
    }
}

impl Style for CommonStyle {
    fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    fn multiline(&self) -> bool {
        self.multiline
    }

    fn lowercase(&self) -> bool {
        self.lowercase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_casing() {
        let style = CommonStyle::new();
        assert_eq!(style.keyword("SELECT"), "SELECT");

        let style = CommonStyle::new().with_lowercase(true);
        assert_eq!(style.keyword("SELECT"), "select");
        assert_eq!(style.phrase("ORDER BY"), "order by");
    }

    #[test]
    fn test_set_dialect_by_name() {
        let mut style = CommonStyle::new();
        style.set_dialect("common").unwrap();
        assert_eq!(style.dialect().name(), "common");
    }

    #[test]
    fn test_set_dialect_unknown_name_fails() {
        let mut style = CommonStyle::new();
        let err = style.set_dialect("no-such-dialect").unwrap_err();
        assert_eq!(err, SqlError::UnknownDialect(String::from("no-such-dialect")));
    }

    #[test]
    fn test_express_unknown_construct_fails() {
        let style = CommonStyle::new();
        let err = style.express("vacuum").unwrap_err();
        assert!(matches!(err, SqlError::UnsupportedCapability { .. }));
    }
}
