//! Default encoding strategies, one per structural category.
//!
//! These are plain functions so a custom [`crate::SchemaGenerator`] can
//! reuse them when it only wants to change part of a category's output.

use shapeschema_core::{JsonType, Result, SchemaError};

use crate::{Schema, context::SchemaBuildingContext, resolver};

/// `type` plus the string or numeric keywords of the JSON type category.
pub fn encode_primitive(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let mut schema = Schema::new();
    resolver::put_comment(&mut schema, ctx.annotations());
    resolver::put_title(&mut schema, ctx.annotations());
    ctx.put_type(&mut schema)?;
    resolver::put_description(&mut schema, ctx.annotations());

    let json_type = ctx.json_type()?;
    if json_type == JsonType::String {
        resolver::put_string_constraints(&mut schema, ctx.annotations());
    } else if json_type.is_numeric() {
        resolver::put_number_constraints(&mut schema, ctx.annotations())?;
    }
    Ok(schema)
}

/// [`encode_primitive`] that falls back to the kind's implicit bounds: the
/// representable range of fixed-width numbers and a length of one for chars.
///
/// Not part of the default generator; opt in with
/// `SchemaGenerator::default().with_encode_primitive(encode_primitive_with_default_bounds)`.
pub fn encode_primitive_with_default_bounds(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let mut schema = encode_primitive(ctx)?;
    let annotations = ctx.annotations();

    if annotations.minimum().is_none() && annotations.minimum_double().is_none() {
        ctx.put_default_minimum(&mut schema);
    }
    if annotations.maximum().is_none() && annotations.maximum_double().is_none() {
        ctx.put_default_maximum(&mut schema);
    }
    if annotations.min_length().is_none() {
        ctx.put_default_min_length(&mut schema);
    }
    if annotations.max_length().is_none() {
        ctx.put_default_max_length(&mut schema);
    }
    Ok(schema)
}

/// `enum` of the case names; nullable enums carry a `null` literal.
pub fn encode_enum(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let mut schema = Schema::new();
    resolver::put_comment(&mut schema, ctx.annotations());
    resolver::put_title(&mut schema, ctx.annotations());
    ctx.put_enum(&mut schema);
    resolver::put_description(&mut schema, ctx.annotations());
    Ok(schema)
}

pub fn encode_class(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let mut schema = Schema::new();
    resolver::put_comment(&mut schema, ctx.annotations());
    resolver::put_title(&mut schema, ctx.annotations());
    ctx.put_type(&mut schema)?;
    resolver::put_description(&mut schema, ctx.annotations());
    ctx.put_properties(&mut schema)?;
    ctx.put_required(&mut schema);
    Ok(schema)
}

pub fn encode_array(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let mut schema = Schema::new();
    resolver::put_comment(&mut schema, ctx.annotations());
    resolver::put_title(&mut schema, ctx.annotations());
    ctx.put_type(&mut schema)?;
    resolver::put_description(&mut schema, ctx.annotations());
    ctx.put_items(&mut schema)?;
    Ok(schema)
}

/// Fails before writing anything if the key is not a string.
pub fn encode_map(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let value = ctx.string_keyed_map_value()?;

    let mut schema = Schema::new();
    resolver::put_comment(&mut schema, ctx.annotations());
    resolver::put_title(&mut schema, ctx.annotations());
    ctx.put_type(&mut schema)?;
    resolver::put_description(&mut schema, ctx.annotations());
    ctx.put_additional_properties(&mut schema, value)?;
    Ok(schema)
}

/// `anyOf` of discriminator-tagged variants.
pub fn encode_polymorphic(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    let mut schema = Schema::new();
    resolver::put_documentation(&mut schema, ctx.annotations());
    ctx.put_sealed_schemas(&mut schema)?;
    Ok(schema)
}

/// Contextual types have no fixed shape until a serializer is attached.
pub fn encode_contextual(ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    Err(SchemaError::ContextualUnsupported {
        serial_name: ctx.descriptor().serial_name.clone(),
    })
}

/// Singletons carry no data: empty fragment.
pub fn encode_object(_ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
    Ok(Schema::new())
}
