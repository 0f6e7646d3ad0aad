//! WASM bindings - the `Box2d` namespace as seen from JavaScript
//!
//! ```js
//! import * as Box2d from "box2d-bridge";
//! const world = Box2d.b2World(Box2d.b2Vec2(0, 10));
//! const def = Box2d.b2BodyDef();
//! def.set("type", 2);
//! const body = world.invoke("CreateBody", [def]);
//! world.invoke("Step", [1 / 60, 6, 2]);
//! body.invoke("GetPosition", []); // { x, y }
//! ```
//!
//! Every adapter crosses into JS as a `HostObject` carrying a non-enumerable
//! tag keyed by a module-private `Symbol`. Plain JS objects are copied field
//! by field; a tagged object passed back in is resolved through a
//! thread-local registry.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::Display;
use std::rc::{Rc, Weak};

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::boundary::{AdapterRef, HostAdapter, HostValue, Namespace, PlainObject};
use crate::core::config::BridgeConfig;
use crate::core::logging::init_logging;

/// Nesting limit for plain objects; guards against self-referencing objects.
const MAX_DEPTH: usize = 32;

thread_local! {
    static NAMESPACE: RefCell<Namespace> = RefCell::new(Namespace::new());
    static LIVE: RefCell<HashMap<u32, Weak<dyn HostAdapter>>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
    /// Unregistered symbol: JS code cannot name it, so it cannot forge a tag.
    static ADAPTER_TAG: JsValue = JsValue::symbol(Some("box2d.adapter"));
}

fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// A boundary adapter handed to JavaScript
#[wasm_bindgen]
pub struct HostObject {
    id: u32,
    inner: AdapterRef,
}

impl HostObject {
    fn wrap(inner: AdapterRef) -> Self {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1).max(1));
            id
        });
        LIVE.with(|live| live.borrow_mut().insert(id, Rc::downgrade(&inner)));
        Self { id, inner }
    }
}

/// Hand an adapter to JS as a tagged `HostObject`.
fn export(adapter: AdapterRef) -> Result<JsValue, JsValue> {
    let obj = HostObject::wrap(adapter);
    let id = obj.id;
    let js = JsValue::from(obj);

    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("value"), &JsValue::from(id))?;
    ADAPTER_TAG.with(|tag| Object::define_property(js.unchecked_ref::<Object>(), tag, &descriptor));
    Ok(js)
}

fn invoke_adapter(adapter: &AdapterRef, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let args = to_host_args(args)?;
    let result = adapter.invoke(name, &args).map_err(js_error)?;
    to_js(result)
}

impl Drop for HostObject {
    fn drop(&mut self) {
        // The registry may already be gone during thread teardown.
        let _ = LIVE.try_with(|live| live.borrow_mut().remove(&self.id));
    }
}

#[wasm_bindgen]
impl HostObject {
    /// Call operation `name`; `args` are converted positionally.
    pub fn invoke(&self, name: &str, args: Vec<JsValue>) -> Result<JsValue, JsValue> {
        invoke_adapter(&self.inner, name, &args)
    }

    pub fn get(&self, name: &str) -> Result<JsValue, JsValue> {
        let value = self.inner.get(name).map_err(js_error)?;
        to_js(value)
    }

    pub fn set(&self, name: &str, value: JsValue) -> Result<(), JsValue> {
        let value = to_host(&value, 0)?;
        self.inner.set(name, value).map_err(js_error)
    }

    /// Operation names in declaration order
    pub fn operations(&self) -> Array {
        self.inner.operation_names().into_iter().map(JsValue::from_str).collect()
    }

    /// Property names in declaration order
    pub fn properties(&self) -> Array {
        self.inner.property_names().into_iter().map(JsValue::from_str).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.inner.kind().name().to_string()
    }

    #[wasm_bindgen(getter = isShared)]
    pub fn is_shared(&self) -> bool {
        self.inner.is_shared()
    }
}

// === Conversions ===

fn to_host_args(args: &[JsValue]) -> Result<Vec<HostValue>, JsValue> {
    args.iter().map(|arg| to_host(arg, 0)).collect()
}

fn to_host(value: &JsValue, depth: usize) -> Result<HostValue, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(HostValue::Undefined);
    }
    if let Some(b) = value.as_bool() {
        return Ok(HostValue::Boolean(b));
    }
    if let Some(n) = value.as_f64() {
        return Ok(HostValue::Number(n));
    }
    if let Some(s) = value.as_string() {
        return Ok(HostValue::String(s));
    }
    if !value.is_object() {
        return Err(js_error("unsupported JavaScript value"));
    }
    if depth >= MAX_DEPTH {
        return Err(js_error("object nesting too deep"));
    }

    let tag = ADAPTER_TAG.with(|tag| Reflect::get(value, tag))?;
    if !tag.is_undefined() {
        let id = tag
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= f64::from(u32::MAX))
            .ok_or_else(|| js_error("malformed host object tag"))?;
        return lookup(id as u32)
            .map(HostValue::Adapter)
            .ok_or_else(|| js_error("host object was already freed"));
    }

    let mut obj = PlainObject::new();
    for entry in Object::entries(value.unchecked_ref::<Object>()).iter() {
        let pair: Array = entry.unchecked_into();
        let key = pair.get(0).as_string().unwrap_or_default();
        obj.insert(key, to_host(&pair.get(1), depth + 1)?);
    }
    Ok(obj.into())
}

fn lookup(id: u32) -> Option<AdapterRef> {
    LIVE.with(|live| live.borrow().get(&id).and_then(Weak::upgrade))
}

fn to_js(value: HostValue) -> Result<JsValue, JsValue> {
    Ok(match value {
        HostValue::Undefined => JsValue::UNDEFINED,
        HostValue::Boolean(b) => JsValue::from_bool(b),
        HostValue::Number(n) => JsValue::from_f64(n),
        HostValue::String(s) => JsValue::from_str(&s),
        HostValue::Object(obj) => {
            let out = Object::new();
            for (key, field) in obj.iter() {
                Reflect::set(&out, &JsValue::from_str(key), &to_js(field.clone())?)?;
            }
            out.into()
        }
        HostValue::Adapter(adapter) => export(adapter)?,
    })
}

// === Namespace ===

fn create(name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let args = to_host_args(args)?;
    let value = NAMESPACE.with(|ns| ns.borrow().create(name, &args)).map_err(js_error)?;
    match value {
        HostValue::Adapter(adapter) => export(adapter),
        other => Err(js_error(format!("factory '{name}' returned {}", other.describe()))),
    }
}

/// Run a namespace factory by name.
#[wasm_bindgen(js_name = createHostObject)]
pub fn create_host_object(name: &str, args: Vec<JsValue>) -> Result<JsValue, JsValue> {
    create(name, &args)
}

#[wasm_bindgen(js_name = b2Vec2)]
pub fn b2_vec2(x: JsValue, y: JsValue) -> Result<JsValue, JsValue> {
    create("b2Vec2", &[x, y])
}

/// `gravity` may be omitted to use the configured default.
#[wasm_bindgen(js_name = b2World)]
pub fn b2_world(gravity: JsValue) -> Result<JsValue, JsValue> {
    create("b2World", &[gravity])
}

#[wasm_bindgen(js_name = b2BodyDef)]
pub fn b2_body_def() -> Result<JsValue, JsValue> {
    create("b2BodyDef", &[])
}

#[wasm_bindgen(js_name = b2PolygonShape)]
pub fn b2_polygon_shape() -> Result<JsValue, JsValue> {
    create("b2PolygonShape", &[])
}

#[wasm_bindgen(js_name = b2FixtureDef)]
pub fn b2_fixture_def() -> Result<JsValue, JsValue> {
    create("b2FixtureDef", &[])
}

/// Replace the namespace configuration from a JSON document.
///
/// Only worlds created afterwards pick up new engine settings.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = BridgeConfig::from_json(json).map_err(js_error)?;
    init_logging(&config.logging);
    NAMESPACE.with(|ns| *ns.borrow_mut() = Namespace::with_config(&config));
    Ok(())
}
