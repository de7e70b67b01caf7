//! Literal value formatting.

use crate::error::Result;
use crate::statement::Select;
use crate::style::Style;

/// A literal value usable wherever an expression is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal, rendered unquoted.
    Int(i64),
    /// Float literal, rendered unquoted.
    Float(f64),
    /// String literal, single-quoted with embedded quotes doubled.
    Str(String),
    /// NULL.
    Null,
    /// A list of values, flattened recursively.
    List(Vec<Literal>),
    /// A nested SELECT used as a value, wrapped in parentheses.
    Subquery(Box<Select>),
}

impl Literal {
    /// Renders the literal as SQL text.
    pub fn to_sql(&self, style: &dyn Style) -> Result<String> {
        match self {
            Self::Int(n) => Ok(format!("{n}")),
            Self::Float(f) => Ok(format!("{f}")),
            Self::Str(s) => Ok(quote_string(s)),
            Self::Null => Ok(style.keyword("NULL")),
            Self::List(items) => {
                let mut parts = Vec::new();
                flatten_into(items, style, &mut parts)?;
                if parts.len() == 1 {
                    Ok(parts.remove(0))
                } else {
                    Ok(format!("({})", parts.join(", ")))
                }
            }
            Self::Subquery(query) => Ok(format!("({})", query.compile(style)?)),
        }
    }
}

/// Wraps a string in single quotes, doubling embedded single quotes.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let escaped = s.replace('\'', "''");
    format!("'{escaped}'")
}

fn flatten_into(items: &[Literal], style: &dyn Style, out: &mut Vec<String>) -> Result<()> {
    for item in items {
        match item {
            Literal::List(nested) => flatten_into(nested, style, out)?,
            other => out.push(other.to_sql(style)?),
        }
    }
    Ok(())
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}

impl From<Select> for Literal {
    fn from(query: Select) -> Self {
        Self::Subquery(Box::new(query))
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CommonStyle;

    #[test]
    fn test_string_quoting() {
        let style = CommonStyle::new();
        assert_eq!(
            Literal::Str(String::from("O'Brien")).to_sql(&style).unwrap(),
            "'O''Brien'"
        );
    }

    #[test]
    fn test_quoting_round_trip() {
        let quoted = quote_string("O'Brien");
        let inner = &quoted[1..quoted.len() - 1];
        assert_eq!(inner.replace("''", "'"), "O'Brien");
    }

    #[test]
    fn test_numbers_unquoted() {
        let style = CommonStyle::new();
        assert_eq!(Literal::Int(42).to_sql(&style).unwrap(), "42");
        assert_eq!(Literal::Float(2.5).to_sql(&style).unwrap(), "2.5");
    }

    #[test]
    fn test_single_element_list_has_no_parens() {
        let style = CommonStyle::new();
        let one = Literal::from(vec![1]);
        assert_eq!(one.to_sql(&style).unwrap(), "1");

        let two = Literal::from(vec![1, 2]);
        assert_eq!(two.to_sql(&style).unwrap(), "(1, 2)");
    }

    #[test]
    fn test_nested_lists_flatten() {
        let style = CommonStyle::new();
        let nested = Literal::List(vec![
            Literal::Int(1),
            Literal::List(vec![Literal::Int(2), Literal::Int(3)]),
        ]);
        assert_eq!(nested.to_sql(&style).unwrap(), "(1, 2, 3)");
    }

    #[test]
    fn test_null_keyword() {
        let style = CommonStyle::new();
        assert_eq!(Literal::Null.to_sql(&style).unwrap(), "NULL");
    }
}
