//! Raw and canonical identifiers.
//!
//! The parser produces [`Raw`] names. Name resolution replaces every one of
//! them with a [`Canonical`] name that records where the identifier comes
//! from. Canonical names are never rewritten afterwards.

use std::fmt;

use crate::reserved::is_tuple_name;
use crate::Named;

/// An unresolved identifier, exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Raw(pub String);

impl Raw {
    pub fn new(name: impl Into<String>) -> Self {
        Raw(name.into())
    }
}

impl Named for Raw {
    fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dotted module path, e.g. `Json.Encode`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ModuleName(pub Vec<String>);

impl ModuleName {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        ModuleName(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this path is exactly `segments`.
    pub fn is(&self, segments: &[&str]) -> bool {
        self.0.len() == segments.len() && self.0.iter().zip(segments).all(|(a, b)| a == b)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Where a canonical identifier is defined.
///
/// Homes with different constructors never compare equal, even when the
/// names they qualify are the same.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Home {
    /// Provided by the compiler itself (`Int`, `List`, tuples).
    BuiltIn,
    /// Exported by a module.
    Module(ModuleName),
    /// Bound in the enclosing scope (parameter, `let`, case branch).
    Local,
}

/// A resolved identifier: provenance plus name.
///
/// Equality and ordering compare the home first, then the name. Both are
/// total, so canonical names work as set and map keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Canonical {
    pub home: Home,
    pub name: String,
}

impl Canonical {
    pub fn new(home: Home, name: impl Into<String>) -> Self {
        Canonical {
            home,
            name: name.into(),
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::new(Home::BuiltIn, name)
    }

    pub fn module<S: Into<String>>(
        path: impl IntoIterator<Item = S>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(Home::Module(ModuleName::new(path)), name)
    }

    pub fn local(name: impl Into<String>) -> Self {
        Self::new(Home::Local, name)
    }

    /// Exactly `name` exported by the module at `path`.
    fn is_from(&self, path: &[&str], name: &str) -> bool {
        matches!(&self.home, Home::Module(module) if module.is(path)) && self.name == name
    }

    pub fn is_maybe(&self) -> bool {
        self.is_from(&["Maybe"], "Maybe")
    }

    pub fn is_array(&self) -> bool {
        self.is_from(&["Array"], "Array")
    }

    pub fn is_task(&self) -> bool {
        self.is_from(&["Task"], "Task")
    }

    pub fn is_signal(&self) -> bool {
        self.is_from(&["Signal"], "Signal")
    }

    pub fn is_json(&self) -> bool {
        self.is_from(&["Json", "Encode"], "Value")
    }

    pub fn is_list(&self) -> bool {
        self.is_from(&["List"], "List")
    }

    /// Built-in scalar types.
    pub fn is_primitive(&self) -> bool {
        self.home == Home::BuiltIn
            && matches!(self.name.as_str(), "Int" | "Float" | "String" | "Bool" | "Char")
    }

    /// Built-in tuple constructor of any arity.
    pub fn is_tuple(&self) -> bool {
        self.home == Home::BuiltIn && is_tuple_name(&self.name)
    }
}

impl Named for Canonical {
    fn name(&self) -> &str {
        &self.name
    }
}

/// `Module.path.name` for module names, the bare name otherwise.
impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.home {
            Home::Module(module) => write!(f, "{module}.{}", self.name),
            Home::BuiltIn | Home::Local => f.write_str(&self.name),
        }
    }
}
