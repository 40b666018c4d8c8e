//! # Schema as YAML
//!
//! The generator produces plain `serde_json` values, so any serde format can
//! render them. This example prints the schema of a configuration file as
//! YAML, which is handy for embedding in docs.
//!
//! ```bash
//! cargo run -p shapeschema --example yaml_schema
//! ```

use shapeschema::{Annotation, Describe, Descriptor, Element, SchemaGenerator};

#[allow(dead_code)]
struct Port(u16);

impl Describe for Port {
    fn descriptor() -> Descriptor {
        Descriptor::inline(
            "Port",
            Element::of::<u16>("value")
                .annotate(Annotation::Minimum(1))
                .annotate(Annotation::Description("TCP port".into())),
        )
    }
}

#[allow(dead_code)]
struct ServerConfig {
    host: String,
    port: Port,
    tls: Option<bool>,
    allowed_origins: Vec<String>,
}

impl Describe for ServerConfig {
    fn descriptor() -> Descriptor {
        Descriptor::class("ServerConfig")
            .annotate(Annotation::Comment("generated, do not edit".into()))
            .with(Element::of::<String>("host").annotate(Annotation::Format("hostname".into())))
            .with(Element::of::<Port>("port"))
            .with(Element::of::<Option<bool>>("tls").optional())
            .with(Element::of::<Vec<String>>("allowedOrigins").optional())
            .build()
    }
}

fn main() -> anyhow::Result<()> {
    let schema = SchemaGenerator::default().schema_for::<ServerConfig>()?;
    print!("{}", serde_yaml::to_string(&schema)?);

    Ok(())
}
