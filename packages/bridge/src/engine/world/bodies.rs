use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::body::{Body, BodyDef};
use crate::engine::error::EngineError;

use super::{BodyRef, World};

pub(super) fn create_body(world: &mut World, def: &BodyDef) -> BodyRef {
    let id = world.next_body_id;
    world.next_body_id = world.next_body_id.saturating_add(1);

    let body = Rc::new(RefCell::new(Body::new(def, id)));
    let handle = Rc::downgrade(&body);
    world.bodies.push(body);

    tracing::debug!(body_id = id, body_type = ?def.body_type, "body created");
    handle
}

pub(super) fn destroy_body(world: &mut World, body: &BodyRef) -> Result<(), EngineError> {
    let target = body.upgrade().ok_or(EngineError::BodyNotInWorld)?;
    let idx = world
        .bodies
        .iter()
        .position(|b| Rc::ptr_eq(b, &target))
        .ok_or(EngineError::BodyNotInWorld)?;

    // Keep creation order stable for `World::bodies`.
    let removed = world.bodies.remove(idx);
    tracing::debug!(body_id = removed.borrow().id(), "body destroyed");
    Ok(())
}
