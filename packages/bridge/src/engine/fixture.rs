use super::error::EngineError;
use super::shape::{MassData, PolygonShape};

/// Fixture template; the shape is copied into the fixture on creation.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureDef {
    pub shape: Option<PolygonShape>,
    /// Density in kg/m^2
    pub density: f32,
    /// Coulomb friction coefficient
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub is_sensor: bool,
}

impl Default for FixtureDef {
    fn default() -> Self {
        Self {
            shape: None,
            density: 0.0,
            friction: 0.2,
            restitution: 0.0,
            is_sensor: false,
        }
    }
}

/// A shape attached to a body
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub shape: PolygonShape,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub is_sensor: bool,
}

impl Fixture {
    /// Build a fixture from a definition, rejecting missing or degenerate shapes.
    pub fn from_def(def: &FixtureDef) -> Result<Self, EngineError> {
        let shape = def.shape.as_ref().ok_or(EngineError::MissingShape)?;
        shape.validate()?;
        Ok(Self {
            shape: shape.clone(),
            density: def.density,
            friction: def.friction,
            restitution: def.restitution.clamp(0.0, 1.0),
            is_sensor: def.is_sensor,
        })
    }

    pub fn mass_data(&self) -> MassData {
        self.shape.compute_mass(self.density)
    }
}
