//! The built-in common dialect.

use super::Dialect;

/// The default dialect, always pre-registered as `common`.
///
/// It carries the full construct table from the [`Dialect`] trait and the
/// standard keyword set; specialized dialects override what they need.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonDialect;

impl CommonDialect {
    /// Creates a new common dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for CommonDialect {
    fn name(&self) -> &'static str {
        "common"
    }
}
