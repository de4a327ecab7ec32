//! Reserved identifiers.
//!
//! Names the compiler invents while desugaring. Each one contains a character
//! sequence the lexer rejects in user identifiers (a leading `_` followed by
//! an upper-case letter, bare brackets, or `!`), so no user-written name can
//! collide with them.
//!
//! These are constants for the whole process and are never modified.

/// Prefix of tuple constructor names. A tuple of arity `n` is the
/// constructor `_Tuple{n}`.
pub const TUPLE_PREFIX: &str = "_Tuple";

/// Two-argument list constructor (`x :: xs`).
pub const CONS: &str = "::";

/// Zero-argument empty list constructor.
pub const NIL: &str = "[]";

/// Body of bindings that must survive dead-binding elimination.
///
/// See [`dummy_let`](crate::ast::dummy_let).
pub const SAVE_ENV: &str = "_save_the_environment!!!";

/// Characters that may appear in an infix operator.
const OPERATOR_CHARS: &str = "+-/*=.$<>:&|^?%#@~!";

/// Constructor name for a tuple of the given arity.
pub fn tuple_name(arity: usize) -> String {
    format!("{TUPLE_PREFIX}{arity}")
}

/// Whether `name` follows the tuple naming convention.
pub fn is_tuple_name(name: &str) -> bool {
    name.strip_prefix(TUPLE_PREFIX)
        .is_some_and(|arity| !arity.is_empty() && arity.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether `name` is a symbolic operator rather than an alphanumeric name.
pub fn is_operator(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| OPERATOR_CHARS.contains(c))
}
