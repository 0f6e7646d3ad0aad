//! Boundary Object Adapter
//!
//! `Adapter<T>` wraps one native value and dispatches host calls through
//! the static tables `T` declares via [`Exposed`]. Host code only ever sees
//! it as an [`AdapterRef`] (`Rc<dyn HostAdapter>`).

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::error::{BridgeError, BridgeResult};
use super::handle::Handle;
use super::table::{lookup, Args, Operation, Property};
use super::value::HostValue;

/// Type tag carried by every adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    Vec2,
    World,
    BodyDef,
    Body,
    PolygonShape,
    FixtureDef,
}

impl AdapterKind {
    /// Class name shown to host code
    pub fn name(self) -> &'static str {
        match self {
            AdapterKind::Vec2 => "b2Vec2",
            AdapterKind::World => "b2World",
            AdapterKind::BodyDef => "b2BodyDef",
            AdapterKind::Body => "b2Body",
            AdapterKind::PolygonShape => "b2PolygonShape",
            AdapterKind::FixtureDef => "b2FixtureDef",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Object-safe face of an adapter, as the host runtime sees it
pub trait HostAdapter: 'static {
    fn kind(&self) -> AdapterKind;

    /// Call operation `name` with foreign arguments.
    fn invoke(&self, name: &str, args: &[HostValue]) -> BridgeResult<HostValue>;

    /// Read property `name`.
    fn get(&self, name: &str) -> BridgeResult<HostValue>;

    /// Write property `name`.
    fn set(&self, name: &str, value: HostValue) -> BridgeResult<()>;

    /// Operation names in declaration order
    fn operation_names(&self) -> Vec<&'static str>;

    /// Property names in declaration order
    fn property_names(&self) -> Vec<&'static str>;

    /// Whether the adapter co-owns its value
    fn is_shared(&self) -> bool;

    fn as_any(&self) -> &dyn Any;
}

pub type AdapterRef = Rc<dyn HostAdapter>;

/// Native types that can cross the boundary.
///
/// Table entries are plain Rust fns, so an entry naming a method the native
/// type lacks does not compile.
pub trait Exposed: Sized + 'static {
    const KIND: AdapterKind;

    fn operations() -> &'static [Operation<Self>];

    fn properties() -> &'static [Property<Self>] {
        &[]
    }
}

pub struct Adapter<T: Exposed> {
    handle: Handle<T>,
}

impl<T: Exposed> Adapter<T> {
    /// Exclusive-reference mode: the caller guarantees `target` is owned elsewhere.
    pub fn borrowed(target: Weak<RefCell<T>>) -> Self {
        Self { handle: Handle::Borrowed(target) }
    }

    /// Shared-ownership mode: moves `value` into a fresh handle.
    pub fn shared(value: T) -> Self {
        Self { handle: Handle::Shared(Rc::new(RefCell::new(value))) }
    }

    pub fn handle(&self) -> &Handle<T> {
        &self.handle
    }

    pub fn into_ref(self) -> AdapterRef {
        Rc::new(self)
    }

    pub fn into_host(self) -> HostValue {
        HostValue::Adapter(self.into_ref())
    }

    fn resolve(&self) -> BridgeResult<Rc<RefCell<T>>> {
        self.handle
            .resolve()
            .ok_or(BridgeError::Expired { target: T::KIND.name() })
    }

    /// Run `f` against the wrapped value.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> BridgeResult<R> {
        let cell = self.resolve()?;
        let value = cell.borrow();
        Ok(f(&*value))
    }

    fn dispatch(&self, name: &str, args: &[HostValue]) -> BridgeResult<HostValue> {
        let op = lookup(T::operations(), name, |op| op.name).ok_or_else(|| {
            BridgeError::UnknownOperation { target: T::KIND.name(), name: name.to_string() }
        })?;

        let invocation = op.prepare(&Args::new(T::KIND.name(), op.name, args))?;

        let cell = self.resolve()?;
        let mut target = cell.borrow_mut();
        invocation(&mut *target)
    }

    fn property(&self, name: &str) -> BridgeResult<&'static Property<T>> {
        lookup(T::properties(), name, |p| p.name).ok_or_else(|| BridgeError::UnknownProperty {
            target: T::KIND.name(),
            name: name.to_string(),
        })
    }
}

impl<T: Exposed> HostAdapter for Adapter<T> {
    fn kind(&self) -> AdapterKind {
        T::KIND
    }

    fn invoke(&self, name: &str, args: &[HostValue]) -> BridgeResult<HostValue> {
        tracing::trace!(adapter = %T::KIND, op = name, argc = args.len(), "invoke");
        let result = self.dispatch(name, args);
        if let Err(err) = &result {
            tracing::debug!(adapter = %T::KIND, op = name, error = %err, "invoke rejected");
        }
        result
    }

    fn get(&self, name: &str) -> BridgeResult<HostValue> {
        let prop = self.property(name)?;
        self.read(|target| prop.read(target))
    }

    fn set(&self, name: &str, value: HostValue) -> BridgeResult<()> {
        let prop = self.property(name)?;
        let values = [value];
        let assignment = prop.prepare_write(&Args::new(T::KIND.name(), prop.name, &values))?;

        let cell = self.resolve()?;
        let mut target = cell.borrow_mut();
        assignment(&mut *target);
        Ok(())
    }

    fn operation_names(&self) -> Vec<&'static str> {
        T::operations().iter().map(|op| op.name).collect()
    }

    fn property_names(&self) -> Vec<&'static str> {
        T::properties().iter().map(|p| p.name).collect()
    }

    fn is_shared(&self) -> bool {
        self.handle.is_shared()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
