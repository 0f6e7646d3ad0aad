//! `b2BodyDef` - shared-ownership adapter

use crate::boundary::adapter::{AdapterKind, Exposed};
use crate::boundary::convert::{FromHost, ToHost};
use crate::boundary::error::BridgeResult;
use crate::boundary::table::{Args, Assignment, Operation, Property};
use crate::engine::{BodyDef, BodyType, Vec2};

static PROPERTIES: &[Property<BodyDef>] = &[
    Property::new("type", |def: &BodyDef| def.body_type.to_host(), set_type),
    Property::new("position", |def: &BodyDef| def.position.to_host(), set_position),
    Property::new("angle", |def: &BodyDef| def.angle.to_host(), set_angle),
    Property::new("linearVelocity", |def: &BodyDef| def.linear_velocity.to_host(), set_linear_velocity),
    Property::new("angularVelocity", |def: &BodyDef| def.angular_velocity.to_host(), set_angular_velocity),
    Property::new("linearDamping", |def: &BodyDef| def.linear_damping.to_host(), set_linear_damping),
    Property::new("angularDamping", |def: &BodyDef| def.angular_damping.to_host(), set_angular_damping),
    Property::new("gravityScale", |def: &BodyDef| def.gravity_scale.to_host(), set_gravity_scale),
    Property::new("fixedRotation", |def: &BodyDef| def.fixed_rotation.to_host(), set_fixed_rotation),
];

impl Exposed for BodyDef {
    const KIND: AdapterKind = AdapterKind::BodyDef;

    fn operations() -> &'static [Operation<Self>] {
        &[]
    }

    fn properties() -> &'static [Property<Self>] {
        PROPERTIES
    }
}

/// Converts the single assigned value, then writes it through `apply`.
fn assign<V: FromHost + 'static>(
    args: &Args<'_>,
    apply: fn(&mut BodyDef, V),
) -> BridgeResult<Assignment<BodyDef>> {
    let value: V = args.get(0)?;
    Ok(Box::new(move |def: &mut BodyDef| apply(def, value)))
}

fn set_type(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: BodyType| def.body_type = v)
}

fn set_position(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: Vec2| def.position = v)
}

fn set_angle(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: f32| def.angle = v)
}

fn set_linear_velocity(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: Vec2| def.linear_velocity = v)
}

fn set_angular_velocity(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: f32| def.angular_velocity = v)
}

fn set_linear_damping(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: f32| def.linear_damping = v)
}

fn set_angular_damping(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: f32| def.angular_damping = v)
}

fn set_gravity_scale(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: f32| def.gravity_scale = v)
}

fn set_fixed_rotation(args: &Args<'_>) -> BridgeResult<Assignment<BodyDef>> {
    assign(args, |def, v: bool| def.fixed_rotation = v)
}
