//! Import and export listings.
//!
//! `import List exposing (map, (..))` and `module Main exposing (..)` are
//! reduced by the resolver to a [`Listing`] of [`Value`]s.

/// An explicit-or-open enumeration.
///
/// | explicits | open  | meaning                                 |
/// |-----------|-------|-----------------------------------------|
/// | empty     | true  | everything                              |
/// | empty     | false | nothing                                 |
/// | non-empty | any   | the listed items, plus the rest if open |
///
/// The order of `explicits` is kept as written so listings round-trip
/// through the interface cache unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Listing<T> {
    pub explicits: Vec<T>,
    pub open: bool,
}

impl<T> Listing<T> {
    pub fn new(explicits: Vec<T>, open: bool) -> Self {
        Listing { explicits, open }
    }

    /// `(..)`: everything.
    pub fn open() -> Self {
        Self::new(Vec::new(), true)
    }

    /// `()`: nothing.
    pub fn closed() -> Self {
        Self::new(Vec::new(), false)
    }

    /// Exactly the given items.
    pub fn explicit(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(items.into_iter().collect(), false)
    }

    pub fn is_everything(&self) -> bool {
        self.open && self.explicits.is_empty()
    }

    pub fn is_nothing(&self) -> bool {
        !self.open && self.explicits.is_empty()
    }

    /// Whether `item` is covered by this listing.
    pub fn exposes(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.open || self.explicits.contains(item)
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            explicits: self.explicits.into_iter().map(f).collect(),
            open: self.open,
        }
    }
}

/// One exported or imported symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// A plain value or function.
    Value(String),
    /// A type alias.
    Alias(String),
    /// A union type and the constructors exposed with it. An open
    /// constructor listing exposes all constructors, known or not.
    Union(String, Listing<String>),
}

impl Value {
    pub fn name(&self) -> &str {
        match self {
            Value::Value(name) | Value::Alias(name) | Value::Union(name, _) => name,
        }
    }
}

/// Names of the plain values, in order.
pub fn values(items: &[Value]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Value(name) => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

/// Names of the type aliases, in order.
pub fn aliases(items: &[Value]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Alias(name) => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

/// Union types with their constructor listings, in order.
pub fn unions(items: &[Value]) -> Vec<(&str, &Listing<String>)> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Union(name, ctors) => Some((name.as_str(), ctors)),
            _ => None,
        })
        .collect()
}
