use crate::core::config::EngineSettings;
use crate::engine::body::{Body, BodyType};
use crate::engine::error::EngineError;
use crate::engine::vec2::Vec2;

use super::{StepInfo, World};

pub(super) fn step(
    world: &mut World,
    dt: f32,
    velocity_iterations: i32,
    position_iterations: i32,
) -> Result<(), EngineError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(EngineError::InvalidTimeStep(dt));
    }
    if velocity_iterations < 0 {
        return Err(EngineError::InvalidIterations(velocity_iterations));
    }
    if position_iterations < 0 {
        return Err(EngineError::InvalidIterations(position_iterations));
    }

    world.last_step = StepInfo { dt, velocity_iterations, position_iterations };
    world.step_count += 1;

    let gravity = world.gravity;
    for cell in world.bodies.iter() {
        let mut body = cell.borrow_mut();
        if dt > 0.0 {
            integrate_velocities(&mut body, gravity, dt);
            integrate_positions(&mut body, &world.settings, dt);
        }
        body.clear_forces();
    }

    tracing::trace!(step = world.step_count, dt, bodies = world.bodies.len(), "world stepped");
    Ok(())
}

/// Apply gravity, accumulated loads and damping (dynamic bodies only).
fn integrate_velocities(body: &mut Body, gravity: Vec2, h: f32) {
    if body.body_type != BodyType::Dynamic {
        return;
    }

    let accel = gravity * (body.gravity_scale * body.mass) + body.force;
    body.linear_velocity += accel * (h * body.inv_mass);
    body.angular_velocity += h * body.inv_inertia * body.torque;

    // Pade approximation of exp(-damping * h)
    body.linear_velocity = body.linear_velocity * (1.0 / (1.0 + h * body.linear_damping));
    body.angular_velocity *= 1.0 / (1.0 + h * body.angular_damping);
}

/// Move the center of mass, clamping per-step translation and rotation.
fn integrate_positions(body: &mut Body, settings: &EngineSettings, h: f32) {
    if body.body_type == BodyType::Static {
        return;
    }

    let translation = body.linear_velocity * h;
    let max_translation = settings.max_translation;
    if translation.length_squared() > max_translation * max_translation {
        let ratio = max_translation / translation.length();
        body.linear_velocity = body.linear_velocity * ratio;
    }

    let rotation = h * body.angular_velocity;
    let max_rotation = settings.max_rotation;
    if rotation * rotation > max_rotation * max_rotation {
        let ratio = max_rotation / rotation.abs();
        body.angular_velocity *= ratio;
    }

    body.world_center += body.linear_velocity * h;
    body.angle += h * body.angular_velocity;
    body.synchronize_transform();
}
