//! `b2FixtureDef` - shared-ownership adapter with plain properties

use crate::boundary::adapter::{Adapter, AdapterKind, Exposed};
use crate::boundary::convert::ToHost;
use crate::boundary::error::BridgeResult;
use crate::boundary::table::{Args, Assignment, Operation, Property};
use crate::boundary::value::HostValue;
use crate::engine::{FixtureDef, PolygonShape};

static PROPERTIES: &[Property<FixtureDef>] = &[
    Property::new("shape", get_shape, set_shape),
    Property::new("density", |def: &FixtureDef| def.density.to_host(), set_density),
    Property::new("friction", |def: &FixtureDef| def.friction.to_host(), set_friction),
    Property::new("restitution", |def: &FixtureDef| def.restitution.to_host(), set_restitution),
    Property::new("isSensor", |def: &FixtureDef| def.is_sensor.to_host(), set_is_sensor),
];

impl Exposed for FixtureDef {
    const KIND: AdapterKind = AdapterKind::FixtureDef;

    fn operations() -> &'static [Operation<Self>] {
        &[]
    }

    fn properties() -> &'static [Property<Self>] {
        PROPERTIES
    }
}

/// The def holds its own copy; reading hands out a fresh shape adapter.
fn get_shape(def: &FixtureDef) -> HostValue {
    match &def.shape {
        Some(shape) => Adapter::shared(shape.clone()).into_host(),
        None => HostValue::Undefined,
    }
}

/// Copies the shape at assignment time, like `CreateFixture` does in the engine.
/// Assigning `undefined` clears it.
fn set_shape(args: &Args<'_>) -> BridgeResult<Assignment<FixtureDef>> {
    let shape = if args.is_undefined(0) {
        None
    } else {
        Some(args.adapter::<PolygonShape>(0)?.read(PolygonShape::clone)?)
    };
    Ok(Box::new(move |def: &mut FixtureDef| def.shape = shape))
}

fn set_density(args: &Args<'_>) -> BridgeResult<Assignment<FixtureDef>> {
    let density: f32 = args.get(0)?;
    Ok(Box::new(move |def: &mut FixtureDef| def.density = density))
}

fn set_friction(args: &Args<'_>) -> BridgeResult<Assignment<FixtureDef>> {
    let friction: f32 = args.get(0)?;
    Ok(Box::new(move |def: &mut FixtureDef| def.friction = friction))
}

fn set_restitution(args: &Args<'_>) -> BridgeResult<Assignment<FixtureDef>> {
    let restitution: f32 = args.get(0)?;
    Ok(Box::new(move |def: &mut FixtureDef| def.restitution = restitution))
}

fn set_is_sensor(args: &Args<'_>) -> BridgeResult<Assignment<FixtureDef>> {
    let is_sensor: bool = args.get(0)?;
    Ok(Box::new(move |def: &mut FixtureDef| def.is_sensor = is_sensor))
}
