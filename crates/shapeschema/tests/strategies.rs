mod common;

use std::{sync::Arc, thread};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use shapeschema::{
    Annotation, Describe, Descriptor, Element, Schema, SchemaError, SchemaGenerator, resolver,
    strategy,
};

use common::*;

fn generate<T: Describe>(generator: &SchemaGenerator) -> Value {
    Value::Object(generator.schema_for::<T>().unwrap())
}

fn with_default_bounds() -> SchemaGenerator {
    SchemaGenerator::default().with_encode_primitive(strategy::encode_primitive_with_default_bounds)
}

#[test]
fn default_bounds_for_int_map_values() {
    let generator = with_default_bounds();

    assert_eq!(
        generate::<std::collections::HashMap<String, i32>>(&generator),
        json!({
            "type": "object",
            "additionalProperties": {
                "type": "integer",
                "minimum": -2147483648_i64,
                "maximum": 2147483647
            }
        })
    );
}

#[test]
fn default_bounds_for_char() {
    assert_eq!(
        generate::<char>(&with_default_bounds()),
        json!({ "type": "string", "minLength": 1, "maxLength": 1 })
    );
}

#[test]
fn default_bounds_yield_to_annotations() {
    let descriptor = Descriptor::inline(
        "Percent",
        Element::of::<u8>("value").annotate(Annotation::Maximum(100)),
    );
    let schema = with_default_bounds().schema_of(&descriptor, &[]).unwrap();

    assert_eq!(
        Value::Object(schema),
        json!({ "type": "integer", "minimum": 0, "maximum": 100 })
    );
}

#[test]
fn default_bounds_leave_strings_alone() {
    assert_eq!(generate::<String>(&with_default_bounds()), json!({ "type": "string" }));
}

#[test]
fn custom_discriminator() {
    let generator = SchemaGenerator::default().with_encode_polymorphic(|ctx| {
        let mut schema = Schema::new();
        resolver::put_documentation(&mut schema, ctx.annotations());
        ctx.put_sealed_schemas_with(&mut schema, "kind")?;
        Ok(schema)
    });
    let schema = generate::<SealedInterface>(&generator);

    assert_eq!(
        schema["anyOf"][0]["allOf"][1],
        json!({
            "properties": { "kind": { "enum": ["SealedClass0"] } },
            "required": ["kind"]
        })
    );
    assert_eq!(schema["anyOf"].as_array().unwrap().len(), 2);
}

#[test]
fn nullable_hierarchy_gets_null_branch() {
    let schema = generate::<Option<SealedInterface>>(&SchemaGenerator::default());
    let branches = schema["anyOf"].as_array().unwrap();

    assert_eq!(branches.len(), 3);
    assert_eq!(branches[0], json!({ "type": "null" }));
}

#[test]
fn contextual_override() {
    let generator = SchemaGenerator::default().with_encode_contextual(|ctx| {
        let mut schema = Schema::new();
        schema.insert(
            "description".into(),
            Value::from(format!("resolved at runtime: {}", ctx.descriptor().serial_name)),
        );
        Ok(schema)
    });
    let descriptor = Descriptor::class("Envelope")
        .element("payload", Descriptor::contextual("Payload"))
        .build();

    assert_eq!(
        Value::Object(generator.schema_of(&descriptor, &[]).unwrap()),
        json!({
            "type": "object",
            "properties": {
                "payload": { "description": "resolved at runtime: Payload" }
            },
            "required": ["payload"]
        })
    );
}

#[test]
fn strategy_can_delegate_to_default() {
    let generator = SchemaGenerator::default().with_encode_class(|ctx| {
        let mut schema = strategy::encode_class(ctx)?;
        schema.insert("additionalProperties".into(), Value::Bool(false));
        Ok(schema)
    });
    let schema = generate::<NestedDataClass>(&generator);

    assert_eq!(schema["additionalProperties"], json!(false));
    assert_eq!(schema["required"], json!(["nestedOwner"]));
}

#[test]
fn strategy_errors_propagate() {
    let generator = SchemaGenerator::default().with_encode_enum(|ctx| {
        Err(SchemaError::UnsupportedKind {
            serial_name: ctx.descriptor().serial_name.clone(),
            kind: ctx.descriptor().kind.to_string(),
        })
    });
    let descriptor = Descriptor::list("Cases", TestEnum::descriptor());

    assert!(matches!(
        generator.schema_of(&descriptor, &[]),
        Err(SchemaError::UnsupportedKind { serial_name, .. }) if serial_name == "TestEnum"
    ));
}

#[test]
fn non_finite_bound_is_rejected() {
    let descriptor = Descriptor::inline(
        "Ratio",
        Element::of::<f64>("value").annotate(Annotation::MaximumDouble(f64::INFINITY)),
    );

    assert!(matches!(
        SchemaGenerator::default().schema_of(&descriptor, &[]),
        Err(SchemaError::NonFiniteBound { keyword: "maximum", .. })
    ));
}

#[test]
fn shared_generator_across_threads() {
    let generator = Arc::new(SchemaGenerator::default());
    let expected = generate::<Tree>(&generator);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || generate::<Tree>(&generator))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
