use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a systematic parameter.
///
/// Identifiers are free-form strings. Uniqueness within a collection is a
/// validation concern, not something the type enforces.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(String);

impl ParamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The identifier wrapped in double quotes with quotes, backslashes and
    /// control characters escaped, so that embedded whitespace is visible.
    ///
    /// ```
    /// use syst_types::ParamId;
    ///
    /// assert_eq!(ParamId::new("flux_1").quoted(), "\"flux_1\"");
    /// assert_eq!(ParamId::new("a\tb").quoted(), "\"a\\tb\"");
    /// ```
    pub fn quoted(&self) -> String {
        format!("{:?}", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParamId({:?})", self.0)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParamId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ParamId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParamId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
