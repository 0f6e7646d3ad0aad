//! `b2PolygonShape` - shared-ownership adapter
//!
//! Shapes are created by host code through the zero-argument factory and
//! copied into fixtures, so each adapter owns (a share of) its own shape.

use crate::boundary::adapter::{AdapterKind, Exposed};
use crate::boundary::convert::ToHost;
use crate::boundary::error::BridgeResult;
use crate::boundary::table::{Args, Invocation, Operation};
use crate::boundary::value::HostValue;
use crate::engine::{PolygonShape, Vec2};

static OPERATIONS: &[Operation<PolygonShape>] = &[
    Operation::new("SetAsBox", set_as_box),
    Operation::new("SetAsOrientedBox", set_as_oriented_box),
    Operation::new("GetVertexCount", get_vertex_count),
    Operation::new("GetVertex", get_vertex),
    Operation::new("GetCentroid", get_centroid),
    Operation::new("ComputeMass", compute_mass),
];

impl Exposed for PolygonShape {
    const KIND: AdapterKind = AdapterKind::PolygonShape;

    fn operations() -> &'static [Operation<Self>] {
        OPERATIONS
    }
}

fn set_as_box(args: &Args<'_>) -> BridgeResult<Invocation<PolygonShape>> {
    let hx: f32 = args.get(0)?;
    let hy: f32 = args.get(1)?;
    Ok(Box::new(move |shape: &mut PolygonShape| {
        shape.set_as_box(hx, hy);
        Ok(().to_host())
    }))
}

fn set_as_oriented_box(args: &Args<'_>) -> BridgeResult<Invocation<PolygonShape>> {
    let hx: f32 = args.get(0)?;
    let hy: f32 = args.get(1)?;
    let center: Vec2 = args.get(2)?;
    let angle: f32 = args.get(3)?;
    Ok(Box::new(move |shape: &mut PolygonShape| {
        shape.set_as_oriented_box(hx, hy, center, angle);
        Ok(().to_host())
    }))
}

fn get_vertex_count(_args: &Args<'_>) -> BridgeResult<Invocation<PolygonShape>> {
    Ok(Box::new(|shape: &mut PolygonShape| Ok(shape.vertex_count().to_host())))
}

fn get_vertex(args: &Args<'_>) -> BridgeResult<Invocation<PolygonShape>> {
    let index: usize = args.get(0)?;
    let out_of_range = args.out_of_range(0, "a vertex index below GetVertexCount()");
    Ok(Box::new(move |shape: &mut PolygonShape| -> BridgeResult<HostValue> {
        shape.vertex(index).map(Vec2::to_host).ok_or(out_of_range)
    }))
}

fn get_centroid(_args: &Args<'_>) -> BridgeResult<Invocation<PolygonShape>> {
    Ok(Box::new(|shape: &mut PolygonShape| Ok(shape.centroid.to_host())))
}

fn compute_mass(args: &Args<'_>) -> BridgeResult<Invocation<PolygonShape>> {
    let density: f32 = args.get(0)?;
    Ok(Box::new(move |shape: &mut PolygonShape| Ok(shape.compute_mass(density).to_host())))
}
