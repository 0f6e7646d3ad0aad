//! World - owns every body and advances them in time
//!
//! Bodies live in `Rc<RefCell<Body>>` slots owned by the world. Callers only
//! ever receive `Weak` references, so a destroyed body stops resolving instead
//! of dangling.
//!
//! Only motion is integrated here: gravity, applied loads, damping and the
//! per-step translation/rotation clamps. There is no contact solver.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::config::EngineSettings;

use super::body::{Body, BodyDef};
use super::error::EngineError;
use super::vec2::Vec2;

mod bodies;
mod step;

/// Owned body slot
pub type BodyCell = Rc<RefCell<Body>>;
/// Non-owning body reference handed out to callers
pub type BodyRef = Weak<RefCell<Body>>;

/// Last step parameters, kept for diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepInfo {
    pub dt: f32,
    pub velocity_iterations: i32,
    pub position_iterations: i32,
}

pub struct World {
    gravity: Vec2,
    bodies: Vec<BodyCell>,
    next_body_id: u32,
    settings: EngineSettings,

    // State
    step_count: u64,
    last_step: StepInfo,
}

impl World {
    pub fn new(gravity: Vec2) -> Self {
        Self::with_settings(gravity, EngineSettings::default())
    }

    pub fn with_settings(gravity: Vec2, settings: EngineSettings) -> Self {
        Self {
            gravity,
            bodies: Vec::new(),
            next_body_id: 1,
            settings,
            step_count: 0,
            last_step: StepInfo::default(),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Create a body owned by this world.
    pub fn create_body(&mut self, def: &BodyDef) -> BodyRef {
        bodies::create_body(self, def)
    }

    /// Destroy a body created by this world.
    pub fn destroy_body(&mut self, body: &BodyRef) -> Result<(), EngineError> {
        bodies::destroy_body(self, body)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Non-owning references to all bodies, in creation order
    pub fn bodies(&self) -> Vec<BodyRef> {
        self.bodies.iter().map(Rc::downgrade).collect()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn last_step(&self) -> StepInfo {
        self.last_step
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Iteration counts must be non-negative; they are recorded but have no
    /// effect without a constraint solver.
    pub fn step(
        &mut self,
        dt: f32,
        velocity_iterations: i32,
        position_iterations: i32,
    ) -> Result<(), EngineError> {
        step::step(self, dt, velocity_iterations, position_iterations)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
