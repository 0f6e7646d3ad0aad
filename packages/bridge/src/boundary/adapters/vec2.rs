//! `b2Vec2` - shared-ownership adapter
//!
//! Anywhere a vector parameter is expected, a `b2Vec2` adapter and a plain
//! `{x, y}` object are interchangeable.

use crate::boundary::adapter::{AdapterKind, Exposed};
use crate::boundary::convert::ToHost;
use crate::boundary::error::BridgeResult;
use crate::boundary::table::{Args, Assignment, Invocation, Operation, Property};
use crate::engine::Vec2;

static OPERATIONS: &[Operation<Vec2>] = &[
    Operation::new("Set", set),
    Operation::new("SetZero", set_zero),
    Operation::new("Length", length),
    Operation::new("LengthSquared", length_squared),
    Operation::new("Normalize", normalize),
    Operation::new("IsValid", is_valid),
];

static PROPERTIES: &[Property<Vec2>] = &[
    Property::new("x", |v: &Vec2| v.x.to_host(), set_x),
    Property::new("y", |v: &Vec2| v.y.to_host(), set_y),
];

impl Exposed for Vec2 {
    const KIND: AdapterKind = AdapterKind::Vec2;

    fn operations() -> &'static [Operation<Self>] {
        OPERATIONS
    }

    fn properties() -> &'static [Property<Self>] {
        PROPERTIES
    }
}

fn set_x(args: &Args<'_>) -> BridgeResult<Assignment<Vec2>> {
    let x: f32 = args.get(0)?;
    Ok(Box::new(move |v: &mut Vec2| v.x = x))
}

fn set_y(args: &Args<'_>) -> BridgeResult<Assignment<Vec2>> {
    let y: f32 = args.get(0)?;
    Ok(Box::new(move |v: &mut Vec2| v.y = y))
}

fn set(args: &Args<'_>) -> BridgeResult<Invocation<Vec2>> {
    let x: f32 = args.get(0)?;
    let y: f32 = args.get(1)?;
    Ok(Box::new(move |v: &mut Vec2| {
        v.set(x, y);
        Ok(().to_host())
    }))
}

fn set_zero(_args: &Args<'_>) -> BridgeResult<Invocation<Vec2>> {
    Ok(Box::new(|v: &mut Vec2| {
        v.set_zero();
        Ok(().to_host())
    }))
}

fn length(_args: &Args<'_>) -> BridgeResult<Invocation<Vec2>> {
    Ok(Box::new(|v: &mut Vec2| Ok(v.length().to_host())))
}

fn length_squared(_args: &Args<'_>) -> BridgeResult<Invocation<Vec2>> {
    Ok(Box::new(|v: &mut Vec2| Ok(v.length_squared().to_host())))
}

fn normalize(_args: &Args<'_>) -> BridgeResult<Invocation<Vec2>> {
    Ok(Box::new(|v: &mut Vec2| Ok(v.normalize().to_host())))
}

fn is_valid(_args: &Args<'_>) -> BridgeResult<Invocation<Vec2>> {
    Ok(Box::new(|v: &mut Vec2| Ok(v.is_valid().to_host())))
}
