//! `b2World` - shared-ownership adapter; the world owns its bodies

use crate::boundary::adapter::{Adapter, AdapterKind, Exposed};
use crate::boundary::convert::ToHost;
use crate::boundary::error::{BridgeError, BridgeResult};
use crate::boundary::table::{Args, Invocation, Operation};
use crate::boundary::value::HostValue;
use crate::engine::{Body, BodyDef, Vec2, World};

static OPERATIONS: &[Operation<World>] = &[
    Operation::new("Step", step),
    Operation::new("CreateBody", create_body),
    Operation::new("DestroyBody", destroy_body),
    Operation::new("GetBodyCount", get_body_count),
    Operation::new("GetGravity", get_gravity),
    Operation::new("SetGravity", set_gravity),
];

impl Exposed for World {
    const KIND: AdapterKind = AdapterKind::World;

    fn operations() -> &'static [Operation<Self>] {
        OPERATIONS
    }
}

fn step(args: &Args<'_>) -> BridgeResult<Invocation<World>> {
    let dt: f32 = args.get(0)?;
    let velocity_iterations: i32 = args.get(1)?;
    let position_iterations: i32 = args.get(2)?;
    Ok(Box::new(move |world: &mut World| -> BridgeResult<HostValue> {
        world.step(dt, velocity_iterations, position_iterations)?;
        Ok(().to_host())
    }))
}

/// The returned `b2Body` is exclusive: it never keeps the body alive.
fn create_body(args: &Args<'_>) -> BridgeResult<Invocation<World>> {
    let def: BodyDef = args.adapter::<BodyDef>(0)?.read(BodyDef::clone)?;
    Ok(Box::new(move |world: &mut World| {
        let body = world.create_body(&def);
        Ok(Adapter::<Body>::borrowed(body).into_host())
    }))
}

fn destroy_body(args: &Args<'_>) -> BridgeResult<Invocation<World>> {
    let body = args.adapter::<Body>(0)?.handle().downgrade();
    if body.upgrade().is_none() {
        return Err(BridgeError::Expired { target: Body::KIND.name() });
    }
    Ok(Box::new(move |world: &mut World| -> BridgeResult<HostValue> {
        world.destroy_body(&body)?;
        Ok(().to_host())
    }))
}

fn get_body_count(_args: &Args<'_>) -> BridgeResult<Invocation<World>> {
    Ok(Box::new(|world: &mut World| Ok(world.body_count().to_host())))
}

fn get_gravity(_args: &Args<'_>) -> BridgeResult<Invocation<World>> {
    Ok(Box::new(|world: &mut World| Ok(world.gravity().to_host())))
}

fn set_gravity(args: &Args<'_>) -> BridgeResult<Invocation<World>> {
    let gravity: Vec2 = args.get(0)?;
    Ok(Box::new(move |world: &mut World| {
        world.set_gravity(gravity);
        Ok(().to_host())
    }))
}
