use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// How an adapter holds its native value.
///
/// Every adapter constructor picks one mode explicitly.
pub enum Handle<T> {
    /// Non-owning reference; the value is owned elsewhere (bodies by their
    /// world). Resolves to `None` once the owner dropped it.
    Borrowed(Weak<RefCell<T>>),
    /// Reference-counted share of the value; lives until the last holder
    /// releases it.
    Shared(Rc<RefCell<T>>),
}

impl<T> Handle<T> {
    pub fn resolve(&self) -> Option<Rc<RefCell<T>>> {
        match self {
            Handle::Borrowed(weak) => weak.upgrade(),
            Handle::Shared(rc) => Some(Rc::clone(rc)),
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Handle::Shared(_))
    }

    /// Non-owning view, whatever the mode
    pub fn downgrade(&self) -> Weak<RefCell<T>> {
        match self {
            Handle::Borrowed(weak) => Weak::clone(weak),
            Handle::Shared(rc) => Rc::downgrade(rc),
        }
    }

    /// True when both handles point at the same native value.
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        Weak::ptr_eq(&self.downgrade(), &other.downgrade())
    }
}
