use super::*;
use crate::engine::{Body, BodyDef, FixtureDef, PolygonShape, Vec2, World};

fn num(n: f64) -> HostValue {
    HostValue::Number(n)
}

fn xy(x: f64, y: f64) -> HostValue {
    PlainObject::new().with("x", num(x)).with("y", num(y)).into()
}

fn adapter(value: &HostValue) -> &AdapterRef {
    value.as_adapter_ref().expect("host object")
}

fn field(value: &HostValue, key: &str) -> f64 {
    value
        .as_object()
        .and_then(|obj| obj.get(key))
        .and_then(HostValue::as_number)
        .expect("numeric field")
}

fn assert_near(value: HostValue, expected: f64) {
    let n = value.as_number().expect("number");
    assert!((n - expected).abs() < 1e-5, "{n} != {expected}");
}

/// World with gravity (0, 10) plus a dynamic body at `position`.
fn world_with_body(ns: &Namespace, position: HostValue) -> (HostValue, HostValue) {
    let world = ns.create("b2World", &[xy(0.0, 10.0)]).expect("world");
    let def = ns.create("b2BodyDef", &[]).expect("body def");
    adapter(&def).set("type", num(2.0)).expect("type");
    adapter(&def).set("position", position).expect("position");
    let body = adapter(&world).invoke("CreateBody", &[def]).expect("body");
    (world, body)
}

fn box_fixture_def(ns: &Namespace, hx: f64, hy: f64, density: f64) -> HostValue {
    let shape = ns.create("b2PolygonShape", &[]).expect("shape");
    adapter(&shape).invoke("SetAsBox", &[num(hx), num(hy)]).expect("SetAsBox");
    let def = ns.create("b2FixtureDef", &[]).expect("fixture def");
    adapter(&def).set("shape", shape).expect("shape");
    adapter(&def).set("density", num(density)).expect("density");
    def
}

// === Dispatch errors ===

#[test]
fn unknown_operation_is_reported_and_receiver_untouched() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(1.0, 2.0));
    let body = adapter(&body);

    let err = body.invoke("Explode", &[num(1.0)]).unwrap_err();
    assert_eq!(err, BridgeError::UnknownOperation { target: "b2Body", name: "Explode".into() });
    assert_eq!(body.invoke("GetPosition", &[]).unwrap(), xy(1.0, 2.0));
}

#[test]
fn operation_names_are_case_sensitive() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let err = adapter(&body).invoke("getPosition", &[]).unwrap_err();
    assert!(matches!(err, BridgeError::UnknownOperation { .. }));
}

#[test]
fn non_numeric_argument_fails_before_invocation() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let body = adapter(&body);

    // First argument converts, second does not: nothing may change.
    let err = body
        .invoke("SetTransform", &[xy(5.0, 5.0), HostValue::String("fast".into())])
        .unwrap_err();
    match err {
        BridgeError::TypeMismatch { context, index, .. } => {
            assert_eq!(context, "b2Body.SetTransform");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(body.invoke("GetPosition", &[]).unwrap(), xy(0.0, 0.0));
}

#[test]
fn missing_argument_reads_as_undefined() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let err = adapter(&body).invoke("SetAngularVelocity", &[]).unwrap_err();
    assert!(matches!(err, BridgeError::TypeMismatch { index: 0, ref found, .. } if found == "undefined"));
}

#[test]
fn extra_arguments_are_ignored() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let body = adapter(&body);
    body.invoke("SetAngularVelocity", &[num(3.0), num(99.0), HostValue::Undefined])
        .expect("extra args");
    assert_eq!(body.invoke("GetAngularVelocity", &[]).unwrap(), num(3.0));
}

#[test]
fn wrong_adapter_kind_is_unsupported_and_nothing_changes() {
    let ns = Namespace::new();
    let (world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let body = adapter(&body);

    let err = body.invoke("CreateFixture", &[world.clone()]).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::UnsupportedType { index: 0, expected: "b2FixtureDef", ref found, .. }
            if found == "b2World host object"
    ));
    assert_eq!(body.invoke("GetFixtureCount", &[]).unwrap(), num(0.0));
    assert_eq!(adapter(&world).invoke("GetBodyCount", &[]).unwrap(), num(1.0));
}

// === Behaviour through the boundary ===

#[test]
fn new_body_reports_origin_position() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let position = adapter(&body).invoke("GetPosition", &[]).unwrap();
    assert_eq!(position, xy(0.0, 0.0));
    assert_eq!(adapter(&body).invoke("GetAngle", &[]).unwrap(), num(0.0));
}

#[test]
fn create_fixture_from_def_returns_undefined_and_sets_mass() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let def = box_fixture_def(&ns, 0.5, 0.5, 2.0);

    let result = adapter(&body).invoke("CreateFixture", &[def]).unwrap();
    assert_eq!(result, HostValue::Undefined);
    assert_eq!(adapter(&body).invoke("GetFixtureCount", &[]).unwrap(), num(1.0));
    // 1x1 box at density 2.
    assert_near(adapter(&body).invoke("GetMass", &[]).unwrap(), 2.0);
}

#[test]
fn create_fixture_with_plain_object_is_unsupported() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let plain: HostValue = PlainObject::new().with("density", num(1.0)).into();
    let err = adapter(&body).invoke("CreateFixture", &[plain]).unwrap_err();
    assert!(matches!(err, BridgeError::UnsupportedType { .. }));
}

#[test]
fn create_fixture_without_shape_surfaces_engine_error() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let def = ns.create("b2FixtureDef", &[]).unwrap();
    let err = adapter(&body).invoke("CreateFixture", &[def]).unwrap_err();
    assert_eq!(err, BridgeError::Engine(crate::engine::EngineError::MissingShape));
    assert_eq!(adapter(&body).invoke("GetFixtureCount", &[]).unwrap(), num(0.0));
}

#[test]
fn create_fixture2_takes_shape_and_density() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let shape = ns.create("b2PolygonShape", &[]).unwrap();
    adapter(&shape).invoke("SetAsBox", &[num(1.0), num(0.5)]).unwrap();

    adapter(&body).invoke("CreateFixture2", &[shape, num(1.0)]).unwrap();
    assert_near(adapter(&body).invoke("GetMass", &[]).unwrap(), 2.0);
}

#[test]
fn polygon_shapes_from_factory_never_alias() {
    let ns = Namespace::new();
    let a = ns.create("b2PolygonShape", &[]).unwrap();
    let b = ns.create("b2PolygonShape", &[]).unwrap();
    assert_ne!(a, b);

    adapter(&a).invoke("SetAsBox", &[num(1.0), num(1.0)]).unwrap();
    assert_eq!(adapter(&a).invoke("GetVertexCount", &[]).unwrap(), num(4.0));
    assert_eq!(adapter(&b).invoke("GetVertexCount", &[]).unwrap(), num(0.0));
}

#[test]
fn vertex_index_out_of_range_is_type_mismatch() {
    let ns = Namespace::new();
    let shape = ns.create("b2PolygonShape", &[]).unwrap();
    let shape = adapter(&shape);
    shape.invoke("SetAsBox", &[num(1.0), num(2.0)]).unwrap();

    assert_eq!(shape.invoke("GetVertex", &[num(2.0)]).unwrap(), xy(1.0, 2.0));
    let err = shape.invoke("GetVertex", &[num(4.0)]).unwrap_err();
    assert!(matches!(err, BridgeError::TypeMismatch { index: 0, .. }));
}

#[test]
fn compute_mass_returns_nested_object() {
    let ns = Namespace::new();
    let shape = ns.create("b2PolygonShape", &[]).unwrap();
    let shape = adapter(&shape);
    shape.invoke("SetAsBox", &[num(1.0), num(1.0)]).unwrap();

    let md = shape.invoke("ComputeMass", &[num(1.0)]).unwrap();
    assert!((field(&md, "mass") - 4.0).abs() < 1e-5);
    let center = md.as_object().and_then(|o| o.get("center")).cloned().unwrap();
    assert!(field(&center, "x").abs() < 1e-6);
}

#[test]
fn destroyed_body_expires() {
    let ns = Namespace::new();
    let (world, body) = world_with_body(&ns, xy(0.0, 0.0));

    adapter(&world).invoke("DestroyBody", &[body.clone()]).unwrap();
    assert_eq!(adapter(&world).invoke("GetBodyCount", &[]).unwrap(), num(0.0));

    let err = adapter(&body).invoke("GetPosition", &[]).unwrap_err();
    assert_eq!(err, BridgeError::Expired { target: "b2Body" });
    let again = adapter(&world).invoke("DestroyBody", &[body]).unwrap_err();
    assert_eq!(again, BridgeError::Expired { target: "b2Body" });
}

#[test]
fn dropping_the_world_expires_its_bodies() {
    let ns = Namespace::new();
    let (world, body) = world_with_body(&ns, xy(0.0, 0.0));
    drop(world);
    assert!(matches!(adapter(&body).invoke("GetAngle", &[]), Err(BridgeError::Expired { .. })));
}

#[test]
fn body_from_another_world_is_rejected() {
    let ns = Namespace::new();
    let (world_a, _) = world_with_body(&ns, xy(0.0, 0.0));
    let (_world_b, body_b) = world_with_body(&ns, xy(0.0, 0.0));

    let err = adapter(&world_a).invoke("DestroyBody", &[body_b.clone()]).unwrap_err();
    assert_eq!(err, BridgeError::Engine(crate::engine::EngineError::BodyNotInWorld));
    assert!(adapter(&body_b).invoke("GetPosition", &[]).is_ok());
}

#[test]
fn world_step_moves_dynamic_bodies() {
    let ns = Namespace::new();
    let (world, body) = world_with_body(&ns, xy(0.0, 0.0));
    adapter(&world).invoke("Step", &[num(1.0 / 60.0), num(6.0), num(2.0)]).unwrap();

    let velocity = adapter(&body).invoke("GetLinearVelocity", &[]).unwrap();
    assert!((field(&velocity, "y") - 10.0 / 60.0).abs() < 1e-5);
}

#[test]
fn invalid_step_is_engine_error() {
    let ns = Namespace::new();
    let (world, _) = world_with_body(&ns, xy(0.0, 0.0));
    let err = adapter(&world).invoke("Step", &[num(0.1), num(-1.0), num(2.0)]).unwrap_err();
    assert_eq!(err, BridgeError::Engine(crate::engine::EngineError::InvalidIterations(-1)));
}

// === Properties ===

#[test]
fn properties_read_back_what_was_written() {
    let ns = Namespace::new();
    let def = ns.create("b2BodyDef", &[]).unwrap();
    let def = adapter(&def);

    def.set("angle", num(0.5)).unwrap();
    def.set("fixedRotation", HostValue::Boolean(true)).unwrap();
    def.set("position", xy(3.0, -4.0)).unwrap();
    assert_eq!(def.get("angle").unwrap(), num(0.5));
    assert_eq!(def.get("fixedRotation").unwrap(), HostValue::Boolean(true));
    assert_eq!(def.get("position").unwrap(), xy(3.0, -4.0));
    assert_eq!(def.get("type").unwrap(), num(0.0));
}

#[test]
fn unknown_property_is_reported_on_get_and_set() {
    let ns = Namespace::new();
    let def = ns.create("b2FixtureDef", &[]).unwrap();
    let def = adapter(&def);

    let expected = BridgeError::UnknownProperty { target: "b2FixtureDef", name: "mass".into() };
    assert_eq!(def.get("mass").unwrap_err(), expected);
    assert_eq!(def.set("mass", num(1.0)).unwrap_err(), expected);
}

#[test]
fn bad_property_value_leaves_property_unchanged() {
    let ns = Namespace::new();
    let def = ns.create("b2BodyDef", &[]).unwrap();
    let def = adapter(&def);

    assert!(matches!(def.set("type", num(7.0)), Err(BridgeError::TypeMismatch { .. })));
    assert!(matches!(
        def.set("position", HostValue::String("here".into())),
        Err(BridgeError::TypeMismatch { .. })
    ));
    assert_eq!(def.get("type").unwrap(), num(0.0));
    assert_eq!(def.get("position").unwrap(), xy(0.0, 0.0));
}

#[test]
fn fixture_def_shape_is_copied_on_assignment() {
    let ns = Namespace::new();
    let shape = ns.create("b2PolygonShape", &[]).unwrap();
    adapter(&shape).invoke("SetAsBox", &[num(1.0), num(1.0)]).unwrap();
    let def = ns.create("b2FixtureDef", &[]).unwrap();
    let def = adapter(&def);

    assert_eq!(def.get("shape").unwrap(), HostValue::Undefined);
    def.set("shape", shape.clone()).unwrap();
    adapter(&shape).invoke("SetAsBox", &[num(2.0), num(2.0)]).unwrap();

    let stored = def.get("shape").unwrap();
    assert_ne!(stored, shape);
    assert_eq!(adapter(&stored).invoke("GetVertex", &[num(2.0)]).unwrap(), xy(1.0, 1.0));

    assert!(matches!(def.set("shape", xy(1.0, 1.0)), Err(BridgeError::UnsupportedType { .. })));
    def.set("shape", HostValue::Undefined).unwrap();
    assert_eq!(def.get("shape").unwrap(), HostValue::Undefined);
}

#[test]
fn vec2_adapter_and_plain_object_are_interchangeable() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let v = ns.create("b2Vec2", &[num(3.0), num(4.0)]).unwrap();

    assert_eq!(adapter(&v).invoke("Length", &[]).unwrap(), num(5.0));
    adapter(&body).invoke("SetLinearVelocity", &[v.clone()]).unwrap();
    assert_eq!(adapter(&body).invoke("GetLinearVelocity", &[]).unwrap(), xy(3.0, 4.0));

    assert_eq!(adapter(&v).invoke("Normalize", &[]).unwrap(), num(5.0));
    assert_near(adapter(&v).get("x").unwrap(), 0.6);
    adapter(&v).set("y", num(-1.0)).unwrap();
    assert_eq!(adapter(&v).get("y").unwrap(), num(-1.0));
}

// === Namespace ===

#[test]
fn unknown_factory_is_unknown_operation() {
    let ns = Namespace::new();
    let err = ns.create("b2Joint", &[]).unwrap_err();
    assert_eq!(err, BridgeError::UnknownOperation { target: "Box2d", name: "b2Joint".into() });
}

#[test]
fn factories_produce_shared_adapters_of_the_right_kind() {
    let ns = Namespace::new();
    for (name, kind) in [
        ("b2Vec2", AdapterKind::Vec2),
        ("b2World", AdapterKind::World),
        ("b2BodyDef", AdapterKind::BodyDef),
        ("b2PolygonShape", AdapterKind::PolygonShape),
        ("b2FixtureDef", AdapterKind::FixtureDef),
    ] {
        let value = ns.create(name, &[]).unwrap();
        let obj = adapter(&value);
        assert_eq!(obj.kind(), kind);
        assert!(obj.is_shared(), "{name} should be shared");
    }
    assert_eq!(ns.factory_names().len(), 5);
}

#[test]
fn world_without_gravity_uses_configured_default() {
    let settings = crate::core::config::EngineSettings {
        default_gravity: Vec2::new(0.0, -9.8),
        ..Default::default()
    };
    let ns = Namespace::with_settings(settings);

    let world = ns.create("b2World", &[]).unwrap();
    let gravity = adapter(&world).invoke("GetGravity", &[]).unwrap();
    assert_eq!(gravity, Vec2::new(0.0, -9.8).to_host());
}

#[test]
fn created_body_is_exclusive() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    assert_eq!(adapter(&body).kind(), AdapterKind::Body);
    assert!(!adapter(&body).is_shared());
}

#[test]
fn typed_access_checks_kind_tag() {
    let shape = Adapter::shared(PolygonShape::default()).into_host();
    assert!(shape.as_adapter::<PolygonShape>().is_some());
    assert!(shape.as_adapter::<FixtureDef>().is_none());
    assert!(shape.as_adapter::<BodyDef>().is_none());

    let mut world = World::new(Vec2::zero());
    let body = world.create_body(&BodyDef::default());
    let body = Adapter::<Body>::borrowed(body).into_host();
    assert!(body.as_adapter::<Body>().is_some());
}

#[test]
fn non_finite_shape_is_rejected_before_the_body_changes() {
    let ns = Namespace::new();
    let (world, body) = world_with_body(&ns, xy(0.0, 0.0));
    let shape = ns.create("b2PolygonShape", &[]).unwrap();
    adapter(&shape).invoke("SetAsBox", &[num(f64::NAN), num(0.5)]).unwrap();

    let err = adapter(&body).invoke("CreateFixture2", &[shape, num(1.0)]).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Engine(crate::engine::EngineError::DegenerateShape { .. })
    ));
    assert_eq!(adapter(&body).invoke("GetFixtureCount", &[]).unwrap(), num(0.0));

    adapter(&world).invoke("Step", &[num(1.0 / 60.0), num(6.0), num(2.0)]).unwrap();
    let position = adapter(&body).invoke("GetPosition", &[]).unwrap();
    assert!(field(&position, "y").is_finite());
}

// === Enumeration order ===

#[test]
fn body_operations_enumerate_in_declaration_order() {
    let ns = Namespace::new();
    let (_world, body) = world_with_body(&ns, xy(0.0, 0.0));
    assert_eq!(
        adapter(&body).operation_names(),
        vec![
            "GetAngle",
            "GetPosition",
            "CreateFixture",
            "CreateFixture2",
            "GetWorldCenter",
            "GetLocalCenter",
            "GetLinearVelocity",
            "SetLinearVelocity",
            "GetAngularVelocity",
            "SetAngularVelocity",
            "ApplyForce",
            "ApplyForceToCenter",
            "ApplyTorque",
            "ApplyLinearImpulse",
            "ApplyLinearImpulseToCenter",
            "ApplyAngularImpulse",
            "GetMass",
            "GetInertia",
            "GetType",
            "SetType",
            "SetTransform",
            "GetGravityScale",
            "SetGravityScale",
            "GetFixtureCount",
        ]
    );
    assert!(adapter(&body).property_names().is_empty());
}

#[test]
fn body_def_properties_enumerate_in_declaration_order() {
    let ns = Namespace::new();
    let def = ns.create("b2BodyDef", &[]).unwrap();
    assert_eq!(
        adapter(&def).property_names(),
        vec![
            "type",
            "position",
            "angle",
            "linearVelocity",
            "angularVelocity",
            "linearDamping",
            "angularDamping",
            "gravityScale",
            "fixedRotation",
        ]
    );
    assert!(adapter(&def).operation_names().is_empty());
}
