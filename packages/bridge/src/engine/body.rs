use super::error::EngineError;
use super::fixture::{Fixture, FixtureDef};
use super::shape::PolygonShape;
use super::vec2::{Transform, Vec2};

/// Simulation role of a body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyType {
    /// Zero mass, never moves on its own
    #[default]
    Static,
    /// Zero mass, moves with its set velocity
    Kinematic,
    /// Positive mass, moved by forces and gravity
    Dynamic,
}

impl BodyType {
    /// Decode the numeric tag used by host code (`0`, `1`, `2`).
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(BodyType::Static),
            1 => Some(BodyType::Kinematic),
            2 => Some(BodyType::Dynamic),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            BodyType::Static => 0,
            BodyType::Kinematic => 1,
            BodyType::Dynamic => 2,
        }
    }
}

/// Body template consumed by `World::create_body`
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDef {
    pub body_type: BodyType,
    pub position: Vec2,
    pub angle: f32,
    pub linear_velocity: Vec2,
    pub angular_velocity: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub gravity_scale: f32,
    pub fixed_rotation: bool,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            body_type: BodyType::Static,
            position: Vec2::zero(),
            angle: 0.0,
            linear_velocity: Vec2::zero(),
            angular_velocity: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            gravity_scale: 1.0,
            fixed_rotation: false,
        }
    }
}

/// Rigid body - moves as a single unit
#[derive(Debug)]
pub struct Body {
    // === Identity ===
    pub(crate) id: u32,
    pub(crate) body_type: BodyType,

    // === Position State ===
    /// Body origin transform
    pub(crate) xf: Transform,
    /// Rotation angle (radians)
    pub(crate) angle: f32,
    /// Center of mass in body coordinates
    pub(crate) local_center: Vec2,
    /// Center of mass in world coordinates
    pub(crate) world_center: Vec2,

    // === Velocity State ===
    pub(crate) linear_velocity: Vec2,
    pub(crate) angular_velocity: f32,

    // === Accumulated Loads (cleared every step) ===
    pub(crate) force: Vec2,
    pub(crate) torque: f32,

    // === Mass Properties ===
    pub(crate) mass: f32,
    pub(crate) inv_mass: f32,
    /// Rotational inertia about the center of mass
    pub(crate) inertia: f32,
    pub(crate) inv_inertia: f32,

    // === Material / Tuning ===
    pub(crate) linear_damping: f32,
    pub(crate) angular_damping: f32,
    pub(crate) gravity_scale: f32,
    pub(crate) fixed_rotation: bool,

    pub(crate) fixtures: Vec<Fixture>,
}

impl Body {
    pub(crate) fn new(def: &BodyDef, id: u32) -> Self {
        let xf = Transform::new(def.position, def.angle);
        let mut body = Self {
            id,
            body_type: def.body_type,
            xf,
            angle: def.angle,
            local_center: Vec2::zero(),
            world_center: def.position,
            linear_velocity: def.linear_velocity,
            angular_velocity: def.angular_velocity,
            force: Vec2::zero(),
            torque: 0.0,
            mass: 0.0,
            inv_mass: 0.0,
            inertia: 0.0,
            inv_inertia: 0.0,
            linear_damping: def.linear_damping,
            angular_damping: def.angular_damping,
            gravity_scale: def.gravity_scale,
            fixed_rotation: def.fixed_rotation,
            fixtures: Vec::new(),
        };
        body.reset_mass_data();
        body
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// World position of the body origin
    pub fn position(&self) -> Vec2 {
        self.xf.p
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn transform(&self) -> Transform {
        self.xf
    }

    pub fn world_center(&self) -> Vec2 {
        self.world_center
    }

    pub fn local_center(&self) -> Vec2 {
        self.local_center
    }

    pub fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    /// Static bodies ignore velocity changes.
    pub fn set_linear_velocity(&mut self, v: Vec2) {
        if self.body_type == BodyType::Static {
            return;
        }
        self.linear_velocity = v;
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, w: f32) {
        if self.body_type == BodyType::Static {
            return;
        }
        self.angular_velocity = w;
    }

    /// Apply a force at a world point; only dynamic bodies react.
    pub fn apply_force(&mut self, force: Vec2, point: Vec2) {
        if self.body_type != BodyType::Dynamic {
            return;
        }
        self.force += force;
        self.torque += (point - self.world_center).cross(force);
    }

    pub fn apply_force_to_center(&mut self, force: Vec2) {
        if self.body_type != BodyType::Dynamic {
            return;
        }
        self.force += force;
    }

    pub fn apply_torque(&mut self, torque: f32) {
        if self.body_type != BodyType::Dynamic {
            return;
        }
        self.torque += torque;
    }

    /// Apply an impulse at a world point, changing velocity immediately.
    pub fn apply_linear_impulse(&mut self, impulse: Vec2, point: Vec2) {
        if self.body_type != BodyType::Dynamic {
            return;
        }
        self.linear_velocity += impulse * self.inv_mass;
        self.angular_velocity += self.inv_inertia * (point - self.world_center).cross(impulse);
    }

    pub fn apply_linear_impulse_to_center(&mut self, impulse: Vec2) {
        if self.body_type != BodyType::Dynamic {
            return;
        }
        self.linear_velocity += impulse * self.inv_mass;
    }

    pub fn apply_angular_impulse(&mut self, impulse: f32) {
        if self.body_type != BodyType::Dynamic {
            return;
        }
        self.angular_velocity += self.inv_inertia * impulse;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Rotational inertia about the body origin
    pub fn inertia(&self) -> f32 {
        self.inertia + self.mass * self.local_center.dot(self.local_center)
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Change the body type, recomputing mass and dropping pending loads.
    pub fn set_body_type(&mut self, body_type: BodyType) {
        if self.body_type == body_type {
            return;
        }
        self.body_type = body_type;
        self.reset_mass_data();

        if body_type == BodyType::Static {
            self.linear_velocity = Vec2::zero();
            self.angular_velocity = 0.0;
        }
        self.force = Vec2::zero();
        self.torque = 0.0;
    }

    /// Teleport the body origin; velocities are kept.
    pub fn set_transform(&mut self, position: Vec2, angle: f32) {
        self.xf = Transform::new(position, angle);
        self.angle = angle;
        self.world_center = self.xf.apply(self.local_center);
    }

    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    pub fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    /// Attach a fixture built from `def`. Returns the fixture index.
    pub fn create_fixture(&mut self, def: &FixtureDef) -> Result<usize, EngineError> {
        let fixture = Fixture::from_def(def)?;
        let density = fixture.density;
        self.fixtures.push(fixture);

        if density > 0.0 {
            self.reset_mass_data();
        }
        Ok(self.fixtures.len() - 1)
    }

    /// Shortcut for a fixture with default friction/restitution.
    pub fn create_fixture_from_shape(
        &mut self,
        shape: &PolygonShape,
        density: f32,
    ) -> Result<usize, EngineError> {
        let def = FixtureDef {
            shape: Some(shape.clone()),
            density,
            ..Default::default()
        };
        self.create_fixture(&def)
    }

    /// Recompute mass, center of mass and inertia from the attached fixtures.
    pub fn reset_mass_data(&mut self) {
        self.mass = 0.0;
        self.inv_mass = 0.0;
        self.inertia = 0.0;
        self.inv_inertia = 0.0;
        self.local_center = Vec2::zero();

        if self.body_type != BodyType::Dynamic {
            self.world_center = self.xf.p;
            return;
        }

        let mut local_center = Vec2::zero();
        let mut rotational = 0.0f32;
        for fixture in &self.fixtures {
            if fixture.density == 0.0 {
                continue;
            }
            let md = fixture.mass_data();
            self.mass += md.mass;
            local_center += md.center * md.mass;
            rotational += md.inertia;
        }

        if self.mass > 0.0 {
            self.inv_mass = 1.0 / self.mass;
            local_center = local_center * self.inv_mass;
        } else {
            // Dynamic bodies always behave as if they had unit mass.
            self.mass = 1.0;
            self.inv_mass = 1.0;
        }

        if rotational > 0.0 && !self.fixed_rotation {
            // Move inertia to the center of mass.
            self.inertia = rotational - self.mass * local_center.dot(local_center);
            self.inv_inertia = if self.inertia > 0.0 { 1.0 / self.inertia } else { 0.0 };
        }

        self.local_center = local_center;
        self.world_center = self.xf.apply(local_center);
    }

    pub(crate) fn clear_forces(&mut self) {
        self.force = Vec2::zero();
        self.torque = 0.0;
    }

    /// Derive the origin transform from the center of mass and angle.
    pub(crate) fn synchronize_transform(&mut self) {
        self.xf = Transform::new(Vec2::zero(), self.angle);
        self.xf.p = self.world_center - self.xf.q.apply(self.local_center);
    }
}
