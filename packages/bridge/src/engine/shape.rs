//! PolygonShape - convex polygon in body-local coordinates
//!
//! A default-constructed shape has no vertices; it only becomes usable for
//! fixtures after one of the `set_as_*` builders ran.

use super::error::EngineError;
use super::vec2::{Transform, Vec2};

/// Skin radius around polygons (two linear slops, as in Box2D)
pub const POLYGON_RADIUS: f32 = 0.01;

/// Mass properties of a shape (or a whole body)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MassData {
    /// Mass in kilograms
    pub mass: f32,
    /// Center of mass relative to the shape origin
    pub center: Vec2,
    /// Rotational inertia about the shape origin
    pub inertia: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonShape {
    pub vertices: Vec<Vec2>,
    pub normals: Vec<Vec2>,
    pub centroid: Vec2,
    pub radius: f32,
}

impl Default for PolygonShape {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            centroid: Vec2::zero(),
            radius: POLYGON_RADIUS,
        }
    }
}

impl PolygonShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis-aligned box centered on the origin with half extents `hx`, `hy`.
    pub fn set_as_box(&mut self, hx: f32, hy: f32) {
        self.vertices = vec![
            Vec2::new(-hx, -hy),
            Vec2::new(hx, -hy),
            Vec2::new(hx, hy),
            Vec2::new(-hx, hy),
        ];
        self.normals = vec![
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
        ];
        self.centroid = Vec2::zero();
    }

    /// Box with half extents `hx`, `hy` centered on `center` and rotated by `angle`.
    pub fn set_as_oriented_box(&mut self, hx: f32, hy: f32, center: Vec2, angle: f32) {
        self.set_as_box(hx, hy);
        let xf = Transform::new(center, angle);
        for v in self.vertices.iter_mut() {
            *v = xf.apply(*v);
        }
        for n in self.normals.iter_mut() {
            *n = xf.q.apply(*n);
        }
        self.centroid = center;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> Option<Vec2> {
        self.vertices.get(index).copied()
    }

    /// Signed area of the polygon (positive for counter-clockwise winding)
    pub fn area(&self) -> f32 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0f32;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            twice += a.cross(b);
        }
        0.5 * twice
    }

    /// Check that the polygon can carry mass: finite vertices, positive area.
    pub fn validate(&self) -> Result<(), EngineError> {
        let area = self.area();
        let finite = area.is_finite() && self.vertices.iter().all(Vec2::is_valid);
        if self.vertices.len() < 3 || !finite || area <= f32::EPSILON {
            return Err(EngineError::DegenerateShape {
                vertex_count: self.vertices.len(),
                area,
            });
        }
        Ok(())
    }

    /// Mass properties for the given density.
    ///
    /// Triangles are fanned out from the first vertex to keep precision for
    /// polygons far from the origin. Degenerate polygons report zero mass.
    pub fn compute_mass(&self, density: f32) -> MassData {
        if self.validate().is_err() {
            return MassData { mass: 0.0, center: self.centroid, inertia: 0.0 };
        }

        const INV3: f32 = 1.0 / 3.0;
        let s = self.vertices[0];
        let n = self.vertices.len();

        let mut center = Vec2::zero();
        let mut area = 0.0f32;
        let mut inertia = 0.0f32;

        for i in 0..n {
            let e1 = self.vertices[i] - s;
            let e2 = self.vertices[(i + 1) % n] - s;
            let d = e1.cross(e2);

            let triangle_area = 0.5 * d;
            area += triangle_area;
            center += (e1 + e2) * (triangle_area * INV3);

            let int_x2 = e1.x * e1.x + e2.x * e1.x + e2.x * e2.x;
            let int_y2 = e1.y * e1.y + e2.y * e1.y + e2.y * e2.y;
            inertia += (0.25 * INV3 * d) * (int_x2 + int_y2);
        }

        let mass = density * area;
        center = center * (1.0 / area);
        let world_center = center + s;

        // Shift inertia from the fan origin to the shape origin.
        let inertia = density * inertia
            + mass * (world_center.dot(world_center) - center.dot(center));

        MassData { mass, center: world_center, inertia }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_empty_and_degenerate() {
        let shape = PolygonShape::new();
        assert_eq!(shape.vertex_count(), 0);
        assert!(matches!(
            shape.validate(),
            Err(EngineError::DegenerateShape { vertex_count: 0, .. })
        ));
    }

    #[test]
    fn non_finite_box_is_degenerate() {
        let mut shape = PolygonShape::new();
        shape.set_as_box(f32::NAN, 0.5);
        assert!(matches!(
            shape.validate(),
            Err(EngineError::DegenerateShape { vertex_count: 4, .. })
        ));
        assert_eq!(shape.compute_mass(1.0).mass, 0.0);

        shape.set_as_box(f32::INFINITY, 0.5);
        assert!(shape.validate().is_err());
    }

    #[test]
    fn box_mass_matches_closed_form() {
        let mut shape = PolygonShape::new();
        shape.set_as_box(1.0, 0.5);
        let md = shape.compute_mass(2.0);

        // area = 2 * 1 = 2, mass = 4, I = m (w^2 + h^2) / 12
        assert!((md.mass - 4.0).abs() < 1e-5);
        assert!(md.center.length() < 1e-5);
        let expected_i = 4.0 * (2.0f32 * 2.0 + 1.0 * 1.0) / 12.0;
        assert!((md.inertia - expected_i).abs() < 1e-4);
    }

    #[test]
    fn oriented_box_moves_centroid_and_shifts_inertia() {
        let mut shape = PolygonShape::new();
        shape.set_as_oriented_box(0.5, 0.5, Vec2::new(2.0, 0.0), 0.3);
        assert_eq!(shape.centroid, Vec2::new(2.0, 0.0));

        let md = shape.compute_mass(1.0);
        assert!((md.mass - 1.0).abs() < 1e-5);
        assert!((md.center.x - 2.0).abs() < 1e-4);
        // Parallel axis: I = I_c + m d^2
        let expected_i = 1.0 * (1.0 + 1.0) / 12.0 + 1.0 * 4.0;
        assert!((md.inertia - expected_i).abs() < 1e-3);
    }
}
