//! # Print a schema – the smallest end-to-end example
//!
//! Describes a small inventory model by hand and prints the generated JSON
//! Schema. The model exercises the common cases in one go:
//!
//! 1. **Records** with required and defaulted properties.
//! 2. **Annotations** on properties (`description`, `minLength`) and on
//!    types (`title`).
//! 3. **Recursive types** through `RefWithSerialName`, emitted once under
//!    `$defs`.
//!
//! ## Running the example
//!
//! ```bash
//! cargo run -p shapeschema --example print_schema
//! # with the generator's debug events on stderr
//! cargo run -p shapeschema --features tracing --example print_schema
//! ```

use std::collections::BTreeMap;

use shapeschema::{Annotation, Describe, Descriptor, Element, schema_of};

#[allow(dead_code)]
enum Unit {
    Piece,
    Kilogram,
    Litre,
}

impl Describe for Unit {
    fn descriptor() -> Descriptor {
        Descriptor::enumeration("Unit", ["Piece", "Kilogram", "Litre"])
    }
}

#[allow(dead_code)]
struct Item {
    sku: String,
    quantity: u32,
    unit: Unit,
    labels: BTreeMap<String, String>,
}

impl Describe for Item {
    fn descriptor() -> Descriptor {
        Descriptor::class("Item")
            .annotate(Annotation::Title("Inventory item".into()))
            .with(
                Element::of::<String>("sku")
                    .annotate(Annotation::Description("Stock keeping unit".into()))
                    .annotate(Annotation::MinLength(3)),
            )
            .with(Element::of::<u32>("quantity").annotate(Annotation::Minimum(0)))
            .with(Element::of::<Unit>("unit"))
            .with(Element::of::<BTreeMap<String, String>>("labels").optional())
            .build()
    }
}

/// Storage location; bins can be nested.
#[allow(dead_code)]
struct Bin {
    name: String,
    items: Vec<Item>,
    children: Vec<Bin>,
}

impl Describe for Bin {
    fn descriptor() -> Descriptor {
        Descriptor::class("Bin")
            .annotate(Annotation::RefWithSerialName)
            .with(Element::of::<String>("name"))
            .with(Element::of::<Vec<Item>>("items").optional())
            .with(Element::of::<Vec<Bin>>("children").optional())
            .build()
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let schema = schema_of::<Bin>()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
