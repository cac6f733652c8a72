use crate::scanner::scan;
use regex::Regex;

// Regex compiled once as a lazy static for performance
static LEADING_KEYWORD_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"^\s*([A-Za-z]+)").unwrap());

// Words and parentheses, enough to find the top level of a statement
static TOKEN_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_$]*|[()]").unwrap());

/// Coarse statement category, decided by the leading keyword
///
/// Only used to decide which counter a statement's row counts go to; whether
/// a statement returns rows is up to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT, VALUES, PRAGMA, EXPLAIN, and WITH ahead of a query
    Query,
    Insert,
    Update,
    Delete,
    /// CREATE, ALTER, DROP, TRUNCATE, RENAME
    SchemaChange,
    Other,
}

impl StatementKind {
    /// Classify a single statement by its leading keyword.
    ///
    /// Leading whitespace and comments, hints included, are skipped. A
    /// statement whose first code token is not a word (or that has no code at
    /// all) is [`StatementKind::Other`]. A `WITH` statement takes the kind of
    /// the statement following its common table expressions.
    pub fn classify(sql: &str) -> Self {
        let first_code = scan(sql)
            .filter(|span| !span.kind.is_comment())
            .map(|span| (span.kind, span.text(sql)))
            .find(|(_, text)| !text.trim().is_empty());

        match first_code {
            Some((kind, text)) if kind.is_code() => match leading_keyword(text) {
                Some(keyword) if keyword.eq_ignore_ascii_case("WITH") => {
                    Self::after_common_table_expressions(sql)
                }
                keyword => Self::from_keyword(keyword),
            },
            _ => StatementKind::Other,
        }
    }

    /// First data-manipulation keyword outside any parentheses, skipping the
    /// `WITH name AS (...)` list in front of it
    fn after_common_table_expressions(sql: &str) -> Self {
        let mut depth = 0usize;
        for span in scan(sql).filter(|span| span.kind.is_code()) {
            for token in TOKEN_REGEX.find_iter(span.text(sql)) {
                match token.as_str() {
                    "(" => depth += 1,
                    ")" => depth = depth.saturating_sub(1),
                    word if depth == 0 => match word.to_uppercase().as_str() {
                        "SELECT" | "VALUES" => return StatementKind::Query,
                        "INSERT" | "REPLACE" => return StatementKind::Insert,
                        "UPDATE" => return StatementKind::Update,
                        "DELETE" => return StatementKind::Delete,
                        _ => {}
                    },
                    _ => {}
                }
            }
        }
        StatementKind::Query
    }

    fn from_keyword(keyword: Option<&str>) -> Self {
        let Some(keyword) = keyword else {
            return StatementKind::Other;
        };
        match keyword.to_uppercase().as_str() {
            "SELECT" | "WITH" | "VALUES" | "PRAGMA" | "EXPLAIN" => StatementKind::Query,
            "INSERT" | "REPLACE" => StatementKind::Insert,
            "UPDATE" => StatementKind::Update,
            "DELETE" => StatementKind::Delete,
            "CREATE" | "ALTER" | "DROP" | "TRUNCATE" | "RENAME" => StatementKind::SchemaChange,
            _ => StatementKind::Other,
        }
    }
}

fn leading_keyword(code: &str) -> Option<&str> {
    LEADING_KEYWORD_REGEX
        .captures(code)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
