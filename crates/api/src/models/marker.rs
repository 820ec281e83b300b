use super::location::SourceLocation;
use serde::{Deserialize, Serialize};

/// Value of a single marker argument, as written at the use site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MarkerValue {
    Str(String),
    /// Reference to a type, qualified as far as the host could resolve it.
    TypeRef(String),
    Null,
    /// Any other expression, kept as raw source text.
    Other(String),
}

impl MarkerValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MarkerValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_type_ref(&self) -> Option<&str> {
        match self {
            MarkerValue::TypeRef(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MarkerArg {
    /// `None` for positional arguments.
    pub key: Option<String>,
    pub value: MarkerValue,
}

/// A declarative annotation attached to a type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub name: String,
    pub args: Vec<MarkerArg>,
    pub origin: Option<SourceLocation>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            origin: None,
        }
    }

    pub fn with_arg(mut self, value: MarkerValue) -> Self {
        self.args.push(MarkerArg { key: None, value });
        self
    }

    pub fn with_named_arg(mut self, key: impl Into<String>, value: MarkerValue) -> Self {
        self.args.push(MarkerArg {
            key: Some(key.into()),
            value,
        });
        self
    }

    pub fn with_origin(mut self, origin: SourceLocation) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Last segment of a possibly qualified marker name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The `index`-th positional argument.
    pub fn positional(&self, index: usize) -> Option<&MarkerValue> {
        self.args
            .iter()
            .filter(|a| a.key.is_none())
            .nth(index)
            .map(|a| &a.value)
    }

    /// First keyed argument whose key is one of `keys`.
    pub fn named(&self, keys: &[&str]) -> Option<&MarkerValue> {
        self.args
            .iter()
            .find(|a| a.key.as_deref().is_some_and(|k| keys.contains(&k)))
            .map(|a| &a.value)
    }
}
