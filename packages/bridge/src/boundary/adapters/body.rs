//! `b2Body` - exclusive-reference adapter over a body owned by its world

use crate::boundary::adapter::{AdapterKind, Exposed};
use crate::boundary::convert::ToHost;
use crate::boundary::error::BridgeResult;
use crate::boundary::table::{Args, Invocation, Operation};
use crate::boundary::value::HostValue;
use crate::engine::{Body, BodyType, FixtureDef, PolygonShape, Vec2};

static OPERATIONS: &[Operation<Body>] = &[
    Operation::new("GetAngle", get_angle),
    Operation::new("GetPosition", get_position),
    Operation::new("CreateFixture", create_fixture),
    Operation::new("CreateFixture2", create_fixture2),
    Operation::new("GetWorldCenter", get_world_center),
    Operation::new("GetLocalCenter", get_local_center),
    Operation::new("GetLinearVelocity", get_linear_velocity),
    Operation::new("SetLinearVelocity", set_linear_velocity),
    Operation::new("GetAngularVelocity", get_angular_velocity),
    Operation::new("SetAngularVelocity", set_angular_velocity),
    Operation::new("ApplyForce", apply_force),
    Operation::new("ApplyForceToCenter", apply_force_to_center),
    Operation::new("ApplyTorque", apply_torque),
    Operation::new("ApplyLinearImpulse", apply_linear_impulse),
    Operation::new("ApplyLinearImpulseToCenter", apply_linear_impulse_to_center),
    Operation::new("ApplyAngularImpulse", apply_angular_impulse),
    Operation::new("GetMass", get_mass),
    Operation::new("GetInertia", get_inertia),
    Operation::new("GetType", get_type),
    Operation::new("SetType", set_type),
    Operation::new("SetTransform", set_transform),
    Operation::new("GetGravityScale", get_gravity_scale),
    Operation::new("SetGravityScale", set_gravity_scale),
    Operation::new("GetFixtureCount", get_fixture_count),
];

impl Exposed for Body {
    const KIND: AdapterKind = AdapterKind::Body;

    fn operations() -> &'static [Operation<Self>] {
        OPERATIONS
    }
}

// === Fixtures ===

fn create_fixture(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let def: FixtureDef = args.adapter::<FixtureDef>(0)?.read(FixtureDef::clone)?;
    Ok(Box::new(move |body: &mut Body| -> BridgeResult<HostValue> {
        body.create_fixture(&def)?;
        Ok(().to_host())
    }))
}

fn create_fixture2(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let shape: PolygonShape = args.adapter::<PolygonShape>(0)?.read(PolygonShape::clone)?;
    let density: f32 = args.get(1)?;
    Ok(Box::new(move |body: &mut Body| -> BridgeResult<HostValue> {
        body.create_fixture_from_shape(&shape, density)?;
        Ok(().to_host())
    }))
}

fn get_fixture_count(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.fixture_count().to_host())))
}

// === Transform ===

fn get_position(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.position().to_host())))
}

fn get_angle(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.angle().to_host())))
}

fn get_world_center(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.world_center().to_host())))
}

fn get_local_center(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.local_center().to_host())))
}

fn set_transform(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let position: Vec2 = args.get(0)?;
    let angle: f32 = args.get(1)?;
    Ok(Box::new(move |body: &mut Body| {
        body.set_transform(position, angle);
        Ok(().to_host())
    }))
}

// === Velocity ===

fn get_linear_velocity(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.linear_velocity().to_host())))
}

fn set_linear_velocity(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let v: Vec2 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.set_linear_velocity(v);
        Ok(().to_host())
    }))
}

fn get_angular_velocity(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.angular_velocity().to_host())))
}

fn set_angular_velocity(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let w: f32 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.set_angular_velocity(w);
        Ok(().to_host())
    }))
}

// === Loads ===

fn apply_force(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let force: Vec2 = args.get(0)?;
    let point: Vec2 = args.get(1)?;
    Ok(Box::new(move |body: &mut Body| {
        body.apply_force(force, point);
        Ok(().to_host())
    }))
}

fn apply_force_to_center(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let force: Vec2 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.apply_force_to_center(force);
        Ok(().to_host())
    }))
}

fn apply_torque(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let torque: f32 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.apply_torque(torque);
        Ok(().to_host())
    }))
}

fn apply_linear_impulse(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let impulse: Vec2 = args.get(0)?;
    let point: Vec2 = args.get(1)?;
    Ok(Box::new(move |body: &mut Body| {
        body.apply_linear_impulse(impulse, point);
        Ok(().to_host())
    }))
}

fn apply_linear_impulse_to_center(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let impulse: Vec2 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.apply_linear_impulse_to_center(impulse);
        Ok(().to_host())
    }))
}

fn apply_angular_impulse(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let impulse: f32 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.apply_angular_impulse(impulse);
        Ok(().to_host())
    }))
}

// === Mass / type ===

fn get_mass(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.mass().to_host())))
}

fn get_inertia(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.inertia().to_host())))
}

fn get_type(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.body_type().to_host())))
}

fn set_type(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let body_type: BodyType = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.set_body_type(body_type);
        Ok(().to_host())
    }))
}

fn get_gravity_scale(_args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    Ok(Box::new(|body: &mut Body| Ok(body.gravity_scale().to_host())))
}

fn set_gravity_scale(args: &Args<'_>) -> BridgeResult<Invocation<Body>> {
    let scale: f32 = args.get(0)?;
    Ok(Box::new(move |body: &mut Body| {
        body.set_gravity_scale(scale);
        Ok(().to_host())
    }))
}
