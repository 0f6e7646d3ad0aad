//! Foreign values - what crosses the boundary in both directions

use std::fmt;
use std::rc::Rc;

use super::adapter::{Adapter, AdapterRef, Exposed};

/// A value owned by the host runtime
#[derive(Clone, Default)]
pub enum HostValue {
    #[default]
    Undefined,
    Boolean(bool),
    Number(f64),
    String(String),
    /// Plain host object (property bag), copied across the boundary
    Object(PlainObject),
    /// Reference to a boundary adapter
    Adapter(AdapterRef),
}

impl HostValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, HostValue::Undefined)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            HostValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&PlainObject> {
        match self {
            HostValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_adapter_ref(&self) -> Option<&AdapterRef> {
        match self {
            HostValue::Adapter(adapter) => Some(adapter),
            _ => None,
        }
    }

    /// Typed view of an adapter argument.
    ///
    /// Checks the adapter kind tag first; `None` for anything that is not an
    /// adapter wrapping `T`.
    pub fn as_adapter<T: Exposed>(&self) -> Option<&Adapter<T>> {
        match self {
            HostValue::Adapter(adapter) if adapter.kind() == T::KIND => {
                adapter.as_any().downcast_ref::<Adapter<T>>()
            }
            _ => None,
        }
    }

    /// Short type description used in error messages
    pub fn describe(&self) -> String {
        match self {
            HostValue::Undefined => "undefined".to_string(),
            HostValue::Boolean(_) => "boolean".to_string(),
            HostValue::Number(_) => "number".to_string(),
            HostValue::String(_) => "string".to_string(),
            HostValue::Object(_) => "object".to_string(),
            HostValue::Adapter(adapter) => format!("{} host object", adapter.kind()),
        }
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HostValue::Undefined, HostValue::Undefined) => true,
            (HostValue::Boolean(a), HostValue::Boolean(b)) => a == b,
            (HostValue::Number(a), HostValue::Number(b)) => a == b,
            (HostValue::String(a), HostValue::String(b)) => a == b,
            (HostValue::Object(a), HostValue::Object(b)) => a == b,
            // Adapters compare by identity, like host object references.
            (HostValue::Adapter(a), HostValue::Adapter(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => f.write_str("undefined"),
            HostValue::Boolean(b) => write!(f, "{b}"),
            HostValue::Number(n) => write!(f, "{n}"),
            HostValue::String(s) => write!(f, "{s:?}"),
            HostValue::Object(obj) => obj.fmt(f),
            HostValue::Adapter(adapter) => write!(f, "[{} host object]", adapter.kind()),
        }
    }
}

impl From<PlainObject> for HostValue {
    fn from(obj: PlainObject) -> Self {
        HostValue::Object(obj)
    }
}

impl From<AdapterRef> for HostValue {
    fn from(adapter: AdapterRef) -> Self {
        HostValue::Adapter(adapter)
    }
}

/// Ordered property bag.
///
/// Keeps insertion order for enumeration; equality ignores order.
#[derive(Clone, Default)]
pub struct PlainObject {
    fields: Vec<(String, HostValue)>,
}

impl PlainObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: HostValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: HostValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&HostValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HostValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for PlainObject {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl fmt::Debug for PlainObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter().map(|(k, v)| (k, v))).finish()
    }
}
