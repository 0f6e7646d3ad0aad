//! Per-type operation and property tables
//!
//! Each submodule implements [`Exposed`](super::adapter::Exposed) for one
//! engine type. Nothing here is called directly; the tables are reached
//! through `Adapter<T>`.

mod body;
mod body_def;
mod fixture_def;
mod polygon_shape;
mod vec2;
mod world;
