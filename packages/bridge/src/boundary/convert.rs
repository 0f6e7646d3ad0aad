//! Conversions between native values and `HostValue`
//!
//! `FromHost` is strict: it never coerces between host types (a string is
//! not a number). `ToHost` always succeeds; structured values become fresh
//! plain objects so the host never aliases engine state.

use crate::engine::{BodyType, MassData, Vec2};

use super::value::{HostValue, PlainObject};

pub trait FromHost: Sized {
    /// Human-readable description of accepted values
    const EXPECTED: &'static str;

    fn from_host(value: &HostValue) -> Option<Self>;
}

pub trait ToHost {
    fn to_host(self) -> HostValue;
}

// === Scalars ===

impl FromHost for f64 {
    const EXPECTED: &'static str = "a number";

    fn from_host(value: &HostValue) -> Option<Self> {
        value.as_number()
    }
}

impl FromHost for f32 {
    const EXPECTED: &'static str = "a number";

    fn from_host(value: &HostValue) -> Option<Self> {
        value.as_number().map(|n| n as f32)
    }
}

impl FromHost for i32 {
    const EXPECTED: &'static str = "an integer";

    fn from_host(value: &HostValue) -> Option<Self> {
        let n = value.as_number()?;
        if !n.is_finite() || n < i32::MIN as f64 || n > i32::MAX as f64 {
            return None;
        }
        Some(n.trunc() as i32)
    }
}

impl FromHost for usize {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_host(value: &HostValue) -> Option<Self> {
        let n = value.as_number()?;
        if !n.is_finite() || n < 0.0 || n > u32::MAX as f64 {
            return None;
        }
        Some(n.trunc() as usize)
    }
}

impl FromHost for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_host(value: &HostValue) -> Option<Self> {
        match value {
            HostValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromHost for String {
    const EXPECTED: &'static str = "a string";

    fn from_host(value: &HostValue) -> Option<Self> {
        match value {
            HostValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ToHost for () {
    fn to_host(self) -> HostValue {
        HostValue::Undefined
    }
}

impl ToHost for f64 {
    fn to_host(self) -> HostValue {
        HostValue::Number(self)
    }
}

impl ToHost for f32 {
    fn to_host(self) -> HostValue {
        HostValue::Number(self as f64)
    }
}

impl ToHost for i32 {
    fn to_host(self) -> HostValue {
        HostValue::Number(self as f64)
    }
}

impl ToHost for u32 {
    fn to_host(self) -> HostValue {
        HostValue::Number(self as f64)
    }
}

impl ToHost for usize {
    fn to_host(self) -> HostValue {
        HostValue::Number(self as f64)
    }
}

impl ToHost for bool {
    fn to_host(self) -> HostValue {
        HostValue::Boolean(self)
    }
}

impl ToHost for String {
    fn to_host(self) -> HostValue {
        HostValue::String(self)
    }
}

impl ToHost for &str {
    fn to_host(self) -> HostValue {
        HostValue::String(self.to_string())
    }
}

impl ToHost for HostValue {
    fn to_host(self) -> HostValue {
        self
    }
}

// === Structured values ===

/// Accepts `{x, y}` plain objects and `b2Vec2` host objects.
impl FromHost for Vec2 {
    const EXPECTED: &'static str = "an object with numeric x and y";

    fn from_host(value: &HostValue) -> Option<Self> {
        match value {
            HostValue::Object(obj) => {
                let x = obj.get("x").and_then(f32::from_host)?;
                let y = obj.get("y").and_then(f32::from_host)?;
                Some(Vec2::new(x, y))
            }
            HostValue::Adapter(_) => value.as_adapter::<Vec2>()?.read(|v| *v).ok(),
            _ => None,
        }
    }
}

impl ToHost for Vec2 {
    fn to_host(self) -> HostValue {
        PlainObject::new()
            .with("x", self.x.to_host())
            .with("y", self.y.to_host())
            .into()
    }
}

impl FromHost for BodyType {
    const EXPECTED: &'static str = "a body type (0 static, 1 kinematic, 2 dynamic)";

    fn from_host(value: &HostValue) -> Option<Self> {
        let n = value.as_number()?;
        if n.fract() != 0.0 {
            return None;
        }
        BodyType::from_raw(i32::from_host(value)?)
    }
}

impl ToHost for BodyType {
    fn to_host(self) -> HostValue {
        self.as_raw().to_host()
    }
}

impl ToHost for MassData {
    fn to_host(self) -> HostValue {
        PlainObject::new()
            .with("mass", self.mass.to_host())
            .with("center", self.center.to_host())
            .with("inertia", self.inertia.to_host())
            .into()
    }
}
