//! Operation and property tables
//!
//! Each entry splits a call into two phases: `prepare` converts every
//! argument and returns a closure, and only that closure touches the wrapped
//! value. A conversion failure therefore never leaves partial mutation
//! behind.

use super::adapter::{Adapter, Exposed};
use super::convert::FromHost;
use super::error::{BridgeError, BridgeResult};
use super::value::HostValue;

/// Fully converted call, ready to run against the wrapped value
pub type Invocation<T> = Box<dyn FnOnce(&mut T) -> BridgeResult<HostValue>>;

/// Fully converted property write
pub type Assignment<T> = Box<dyn FnOnce(&mut T)>;

pub type PrepareFn<T> = fn(&Args<'_>) -> BridgeResult<Invocation<T>>;

pub struct Operation<T: 'static> {
    pub name: &'static str,
    prepare: PrepareFn<T>,
}

impl<T: 'static> Operation<T> {
    pub const fn new(name: &'static str, prepare: PrepareFn<T>) -> Self {
        Self { name, prepare }
    }

    pub fn prepare(&self, args: &Args<'_>) -> BridgeResult<Invocation<T>> {
        (self.prepare)(args)
    }
}

pub struct Property<T: 'static> {
    pub name: &'static str,
    get: fn(&T) -> HostValue,
    set: fn(&Args<'_>) -> BridgeResult<Assignment<T>>,
}

impl<T: 'static> Property<T> {
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> HostValue,
        set: fn(&Args<'_>) -> BridgeResult<Assignment<T>>,
    ) -> Self {
        Self { name, get, set }
    }

    pub fn read(&self, target: &T) -> HostValue {
        (self.get)(target)
    }

    pub fn prepare_write(&self, args: &Args<'_>) -> BridgeResult<Assignment<T>> {
        (self.set)(args)
    }
}

/// Find an entry by name; tables are small, so a scan keeps declaration order.
pub(crate) fn lookup<'t, E>(table: &'t [E], name: &str, key: impl Fn(&E) -> &'static str) -> Option<&'t E> {
    table.iter().find(|entry| key(entry) == name)
}

/// Positional foreign arguments for one call.
///
/// Missing trailing arguments read as `undefined`; extra ones are ignored.
pub struct Args<'a> {
    target: &'static str,
    name: &'static str,
    values: &'a [HostValue],
}

impl<'a> Args<'a> {
    pub fn new(target: &'static str, name: &'static str, values: &'a [HostValue]) -> Self {
        Self { target, name, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when argument `index` is missing or `undefined`.
    pub fn is_undefined(&self, index: usize) -> bool {
        self.values.get(index).map_or(true, HostValue::is_undefined)
    }

    fn context(&self) -> String {
        format!("{}.{}", self.target, self.name)
    }

    fn found(&self, index: usize) -> String {
        self.values
            .get(index)
            .map(HostValue::describe)
            .unwrap_or_else(|| "undefined".to_string())
    }

    /// Convert argument `index`, failing with `TypeMismatch`.
    pub fn get<V: FromHost>(&self, index: usize) -> BridgeResult<V> {
        self.values
            .get(index)
            .and_then(V::from_host)
            .ok_or_else(|| BridgeError::TypeMismatch {
                context: self.context(),
                index,
                expected: V::EXPECTED,
                found: self.found(index),
            })
    }

    /// Like `get`, but a missing or `undefined` argument yields `default`.
    pub fn get_or<V: FromHost>(&self, index: usize, default: V) -> BridgeResult<V> {
        if self.is_undefined(index) {
            Ok(default)
        } else {
            self.get(index)
        }
    }

    /// Typed adapter argument, failing with `UnsupportedType`.
    pub fn adapter<T: Exposed>(&self, index: usize) -> BridgeResult<&'a Adapter<T>> {
        self.values
            .get(index)
            .and_then(|value| value.as_adapter::<T>())
            .ok_or_else(|| BridgeError::UnsupportedType {
                context: self.context(),
                index,
                expected: T::KIND.name(),
                found: self.found(index),
            })
    }

    /// Reject an out-of-range argument that converted fine.
    pub fn out_of_range(&self, index: usize, expected: &'static str) -> BridgeError {
        BridgeError::TypeMismatch {
            context: self.context(),
            index,
            expected,
            found: self.found(index),
        }
    }
}
