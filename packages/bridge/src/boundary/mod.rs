//! Host boundary
//!
//! Marshals engine objects to and from a scripting host:
//! - `value`: what crosses the boundary (`HostValue`, `PlainObject`)
//! - `convert`: `FromHost` / `ToHost` for scalars and engine structs
//! - `adapter` + `table`: per-type operation/property dispatch
//! - `namespace`: the `Box2d` factory module

pub mod adapter;
mod adapters;
pub mod convert;
pub mod error;
pub mod handle;
pub mod namespace;
pub mod table;
pub mod value;

pub use adapter::{Adapter, AdapterKind, AdapterRef, Exposed, HostAdapter};
pub use convert::{FromHost, ToHost};
pub use error::{BridgeError, BridgeResult};
pub use handle::Handle;
pub use namespace::Namespace;
pub use value::{HostValue, PlainObject};

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
