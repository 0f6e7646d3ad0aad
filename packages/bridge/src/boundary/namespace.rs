//! `Box2d` namespace - the factories host code constructs objects with
//!
//! ```text
//! const gravity = Box2d.b2Vec2(0, 10);
//! const world = Box2d.b2World(gravity);
//! const shape = Box2d.b2PolygonShape();
//! ```

use crate::core::config::{BridgeConfig, EngineSettings};
use crate::engine::{BodyDef, FixtureDef, PolygonShape, Vec2, World};

use super::adapter::Adapter;
use super::error::{BridgeError, BridgeResult};
use super::table::{lookup, Args};
use super::value::HostValue;

type FactoryFn = fn(&Namespace, &Args<'_>) -> BridgeResult<HostValue>;

struct Factory {
    name: &'static str,
    create: FactoryFn,
}

static FACTORIES: &[Factory] = &[
    Factory { name: "b2Vec2", create: create_vec2 },
    Factory { name: "b2World", create: create_world },
    Factory { name: "b2BodyDef", create: create_body_def },
    Factory { name: "b2PolygonShape", create: create_polygon_shape },
    Factory { name: "b2FixtureDef", create: create_fixture_def },
];

/// Every object a factory returns is a shared-ownership adapter.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    settings: EngineSettings,
}

impl Namespace {
    /// Name the namespace is installed under in the host runtime
    pub const NAME: &'static str = "Box2d";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BridgeConfig) -> Self {
        Self::with_settings(config.engine.clone())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Run factory `name` with foreign arguments.
    pub fn create(&self, name: &str, args: &[HostValue]) -> BridgeResult<HostValue> {
        let factory = lookup(FACTORIES, name, |f| f.name).ok_or_else(|| {
            BridgeError::UnknownOperation { target: Self::NAME, name: name.to_string() }
        })?;
        tracing::trace!(factory = factory.name, argc = args.len(), "create");
        (factory.create)(self, &Args::new(Self::NAME, factory.name, args))
    }

    pub fn factory_names(&self) -> Vec<&'static str> {
        FACTORIES.iter().map(|f| f.name).collect()
    }
}

fn create_vec2(_ns: &Namespace, args: &Args<'_>) -> BridgeResult<HostValue> {
    let x: f32 = args.get_or(0, 0.0)?;
    let y: f32 = args.get_or(1, 0.0)?;
    Ok(Adapter::shared(Vec2::new(x, y)).into_host())
}

fn create_world(ns: &Namespace, args: &Args<'_>) -> BridgeResult<HostValue> {
    let gravity: Vec2 = args.get_or(0, ns.settings.default_gravity)?;
    tracing::debug!(gx = gravity.x, gy = gravity.y, "world created");
    Ok(Adapter::shared(World::with_settings(gravity, ns.settings.clone())).into_host())
}

fn create_body_def(_ns: &Namespace, _args: &Args<'_>) -> BridgeResult<HostValue> {
    Ok(Adapter::shared(BodyDef::default()).into_host())
}

fn create_polygon_shape(_ns: &Namespace, _args: &Args<'_>) -> BridgeResult<HostValue> {
    Ok(Adapter::shared(PolygonShape::default()).into_host())
}

fn create_fixture_def(_ns: &Namespace, _args: &Args<'_>) -> BridgeResult<HostValue> {
    Ok(Adapter::shared(FixtureDef::default()).into_host())
}
