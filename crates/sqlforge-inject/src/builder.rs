//! Connective-aware injection building with custom escape prefixes.

use sqlforge_core::error::Result;
use sqlforge_core::expr::Expr;
use sqlforge_core::statement::Stmt;
use sqlforge_core::style::Style;

use crate::evasion::InjectionStyle;

/// The keyword interposed before a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or,
}

impl Connective {
    const fn token(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// An injection accumulator where each fragment carries its own `AND`/`OR`
/// connective and the escape prefix is configurable.
///
/// Where [`crate::Injection`] always joins fragments with `OR` behind a
/// string-closing quote, the builder interposes the connective each fragment
/// was injected with and renders `<escape-prefix> <fragments>[ --]`, chomping
/// a trailing quote instead of terminating with `--` when the assembled text
/// would otherwise leave a quote unbalanced.
#[derive(Debug, Default)]
pub struct InjectionBuilder {
    style: InjectionStyle,
    fragments: Vec<(Connective, String)>,
    stacked: Vec<String>,
    escape: Option<String>,
}

impl InjectionBuilder {
    /// Creates an empty builder using the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder using the given style.
    #[must_use]
    pub fn with_style(style: InjectionStyle) -> Self {
        Self {
            style,
            fragments: Vec::new(),
            stacked: Vec::new(),
            escape: None,
        }
    }

    /// Sets the escape prefix verbatim, e.g. `1` to break out of a numeric
    /// context.
    pub fn escape(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.escape = Some(prefix.into());
        self
    }

    /// Sets the escape prefix for a string context: the prefix followed by
    /// the closing quote, e.g. `escape_string("x")` escapes as `x'`.
    pub fn escape_string(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.escape = Some(format!("{}'", prefix.into()));
        self
    }

    /// Injects a fragment with the default `OR` connective.
    pub fn inject(&mut self, expr: Expr) -> Result<&mut Self> {
        self.inject_or(expr)
    }

    /// Injects a fragment preceded by `AND`.
    pub fn inject_and(&mut self, expr: Expr) -> Result<&mut Self> {
        self.push(Connective::And, expr)
    }

    /// Injects a fragment preceded by `OR`.
    pub fn inject_or(&mut self, expr: Expr) -> Result<&mut Self> {
        self.push(Connective::Or, expr)
    }

    /// Injects a free-form, pre-rendered fragment with the default `OR`
    /// connective.
    pub fn expression(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragments.push((Connective::Or, fragment.into()));
        self
    }

    /// Attaches a stacked secondary statement, compiled immediately.
    pub fn sql(&mut self, statement: impl Into<Stmt>) -> Result<&mut Self> {
        let rendered = statement.into().compile(&self.style)?;
        self.stacked.push(rendered);
        Ok(self)
    }

    fn push(&mut self, connective: Connective, expr: Expr) -> Result<&mut Self> {
        let rendered = expr.compile(&self.style)?;
        self.fragments.push((connective, rendered));
        Ok(self)
    }

    /// Assembles the payload.
    #[must_use]
    pub fn build(&self) -> String {
        let mut out = self.escape.clone().unwrap_or_else(|| String::from("'"));

        for (connective, fragment) in &self.fragments {
            out.push_str(&format!(
                " {} {fragment}",
                self.style.keyword(connective.token())
            ));
        }

        if !self.stacked.is_empty() {
            out.push_str(&format!("; {}", self.stacked.join("; ")));
        }

        if self.fragments.is_empty() && self.stacked.is_empty() {
            return out;
        }

        if out.ends_with('\'') {
            out.pop();
            out
        } else {
            out.push_str(" --");
            out
        }
    }
}
