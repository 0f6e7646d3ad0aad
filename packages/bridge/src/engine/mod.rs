//! Native 2D rigid-body engine
//!
//! The object model mirrors Box2D (worlds own bodies, bodies own fixtures,
//! fixtures copy their polygon shape) so host code written against Box2D
//! reads the same. Only motion integration is implemented.

mod body;
mod error;
mod fixture;
mod shape;
mod vec2;
mod world;

pub use body::{Body, BodyDef, BodyType};
pub use error::EngineError;
pub use fixture::{Fixture, FixtureDef};
pub use shape::{MassData, PolygonShape, POLYGON_RADIUS};
pub use vec2::{Rot, Transform, Vec2};
pub use world::{BodyCell, BodyRef, StepInfo, World};
