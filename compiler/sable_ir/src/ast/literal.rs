//! Literal values shared by expressions and patterns.

/// Literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
    Bool(bool),
}
