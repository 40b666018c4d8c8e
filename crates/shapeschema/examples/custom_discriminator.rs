//! # Custom encodings
//!
//! Every structural category is encoded by a replaceable strategy. This
//! example swaps two of them:
//!
//! * polymorphic hierarchies are tagged with `kind` instead of `type`;
//! * primitives carry their implicit bounds (`u8` gets `0..=255`).
//!
//! ```bash
//! cargo run -p shapeschema --example custom_discriminator
//! ```

use shapeschema::{
    Describe, Descriptor, Element, Schema, SchemaGenerator, resolver, strategy,
};

#[allow(dead_code)]
struct Circle {
    radius: f64,
}

impl Describe for Circle {
    fn descriptor() -> Descriptor {
        Descriptor::class("Circle")
            .with(Element::of::<f64>("radius"))
            .build()
    }
}

#[allow(dead_code)]
struct Square {
    side: u8,
}

impl Describe for Square {
    fn descriptor() -> Descriptor {
        Descriptor::class("Square")
            .with(Element::of::<u8>("side"))
            .build()
    }
}

#[allow(dead_code)]
enum Shape {
    Circle(Circle),
    Square(Square),
}

impl Describe for Shape {
    fn descriptor() -> Descriptor {
        Descriptor::sealed("Shape")
            .variant(Circle::descriptor())
            .variant(Square::descriptor())
            .build()
    }
}

fn main() -> anyhow::Result<()> {
    let generator = SchemaGenerator::default()
        .with_encode_primitive(strategy::encode_primitive_with_default_bounds)
        .with_encode_polymorphic(|ctx| {
            let mut schema = Schema::new();
            resolver::put_documentation(&mut schema, ctx.annotations());
            ctx.put_sealed_schemas_with(&mut schema, "kind")?;
            Ok(schema)
        });

    let schema = generator.schema_for::<Shape>()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
