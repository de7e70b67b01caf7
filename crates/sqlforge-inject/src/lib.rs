//! # sqlforge-inject
//!
//! Adversarial SQL-injection payload synthesis on top of `sqlforge-core`.
//!
//! The same expression/statement machinery that builds legitimate SQL is
//! reused here to assemble boolean-probe payloads, stacked queries, and
//! keyword-obfuscated output for testing signature-based input filters. This
//! crate only produces text; it never talks to a database.
//!
//! ```rust
//! use sqlforge_inject::Injection;
//!
//! let mut injection = Injection::new();
//! injection.all_rows().unwrap();
//! assert_eq!(injection.inject(), "' OR 1 = 1 --");
//! ```

mod builder;
mod evasion;
mod injection;

pub use builder::InjectionBuilder;
pub use evasion::InjectionStyle;
pub use injection::Injection;

pub use sqlforge_core::error::{Result, SqlError};
