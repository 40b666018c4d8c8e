//! Everything an encoding strategy needs to build one fragment.
//!
//! A [`SchemaBuildingContext`] bundles the descriptor being encoded, the
//! effective annotations (property-site first, then type-site), the
//! generator configuration and the reference registry of the current call.
//! Strategies receive it explicitly and compose their output from the
//! structural writers below and the annotation writers in
//! [`crate::resolver`].

use serde_json::Value;
use shapeschema_core::{
    Annotation, Annotations, Descriptor, Element, JsonType, NULLABLE_SUFFIX, PrimitiveKind, Result,
    SchemaError, SerialKind,
};

use crate::{
    Schema,
    generator::{SchemaGenerator, build},
    registry::RefRegistry,
    resolver::{self, MAX_LENGTH, MAXIMUM, MIN_LENGTH, MINIMUM},
};

/// Default discriminator property of polymorphic variants.
pub const DEFAULT_DISCRIMINATOR: &str = "type";

pub struct SchemaBuildingContext<'a> {
    descriptor: &'a Descriptor,
    annotations: Annotations,
    generator: &'a SchemaGenerator,
    refs: &'a mut RefRegistry,
}

impl<'a> SchemaBuildingContext<'a> {
    pub fn new(
        descriptor: &'a Descriptor,
        annotations: Annotations,
        generator: &'a SchemaGenerator,
        refs: &'a mut RefRegistry,
    ) -> Self {
        Self {
            descriptor,
            annotations,
            generator,
            refs,
        }
    }

    pub fn descriptor(&self) -> &'a Descriptor {
        self.descriptor
    }

    /// Effective annotations, property-site entries first.
    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn generator(&self) -> &'a SchemaGenerator {
        self.generator
    }

    /// Registry of the current call, for strategies that emit their own
    /// `$ref`s.
    pub fn refs(&mut self) -> &mut RefRegistry {
        self.refs
    }

    pub fn json_type(&self) -> Result<JsonType> {
        JsonType::of(self.descriptor.kind).map_err(|_| SchemaError::UnsupportedKind {
            serial_name: self.descriptor.serial_name.clone(),
            kind: self.descriptor.kind.to_string(),
        })
    }

    /// Build the fragment of a child descriptor with its own annotations.
    pub fn schema_of(&mut self, descriptor: &Descriptor, annotations: &[Annotation]) -> Result<Schema> {
        build(self.generator, self.refs, descriptor, annotations)
    }

    /// Build the fragment of a child element, honouring its property-site
    /// annotations.
    pub fn element_schema(&mut self, element: &Element) -> Result<Schema> {
        let descriptor = element.descriptor();
        self.schema_of(&descriptor, &element.annotations)
    }

    /// `type` inferred from the descriptor's kind and nullability.
    pub fn put_type(&self, schema: &mut Schema) -> Result<()> {
        resolver::put_type(schema, self.json_type()?, self.descriptor.nullable);
        Ok(())
    }

    /// `enum` with every case name, plus a `null` literal when nullable.
    pub fn put_enum(&self, schema: &mut Schema) {
        let mut cases: Vec<Value> = self.descriptor.element_names().map(Value::from).collect();
        if self.descriptor.nullable {
            cases.push(Value::Null);
        }
        schema.insert("enum".to_string(), Value::Array(cases));
    }

    /// `properties`, one fragment per element in declaration order.
    pub fn put_properties(&mut self, schema: &mut Schema) -> Result<()> {
        let descriptor = self.descriptor;
        let mut properties = Schema::new();
        for element in &descriptor.elements {
            let property = self.element_schema(element)?;
            properties.insert(element.name.clone(), Value::Object(property));
        }
        schema.insert("properties".to_string(), Value::Object(properties));
        Ok(())
    }

    /// `required` listing every non-optional element; omitted when all
    /// elements are optional.
    pub fn put_required(&self, schema: &mut Schema) {
        let required: Vec<Value> = self
            .descriptor
            .elements
            .iter()
            .filter(|element| !element.optional)
            .map(|element| Value::from(element.name.as_str()))
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
    }

    /// `items` built from the list's single element.
    pub fn put_items(&mut self, schema: &mut Schema) -> Result<()> {
        let descriptor = self.descriptor;
        let item = descriptor.list_item()?;
        let items = self.element_schema(item)?;
        schema.insert("items".to_string(), Value::Object(items));
        Ok(())
    }

    /// Value element of a map whose key serializes as a JSON string.
    ///
    /// Inline wrappers around the key are looked through.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnsupportedMapKey`] for any other key kind.
    pub fn string_keyed_map_value(&self) -> Result<&'a Element> {
        let descriptor = self.descriptor;
        let (key, value) = descriptor.map_entries()?;
        let mut key = key.descriptor();
        while key.is_inline() {
            key = key.inline_element()?.descriptor();
        }
        if key.kind != SerialKind::Primitive(PrimitiveKind::String) {
            return Err(SchemaError::UnsupportedMapKey {
                map: descriptor.serial_name.clone(),
                key: key.serial_name.clone(),
            });
        }
        Ok(value)
    }

    /// `additionalProperties` holding the fragment of the map's value type.
    pub fn put_additional_properties(&mut self, schema: &mut Schema, value: &Element) -> Result<()> {
        let value = self.element_schema(value)?;
        schema.insert("additionalProperties".to_string(), Value::Object(value));
        Ok(())
    }

    /// One variant: `allOf` of its own fragment and a required
    /// [`DEFAULT_DISCRIMINATOR`] literal equal to its serial name, without
    /// the nullable suffix.
    pub fn sealed_schema_of(&mut self, variant: &Descriptor) -> Result<Schema> {
        self.sealed_schema_of_with(variant, DEFAULT_DISCRIMINATOR)
    }

    /// Like [`Self::sealed_schema_of`] with a custom discriminator property.
    pub fn sealed_schema_of_with(&mut self, variant: &Descriptor, discriminator: &str) -> Result<Schema> {
        let body = self.schema_of(variant, &[])?;
        let name = match variant.serial_name.strip_suffix(NULLABLE_SUFFIX) {
            Some(name) if variant.nullable => name,
            _ => variant.serial_name.as_str(),
        };

        let mut literal = Schema::new();
        literal.insert("enum".to_string(), Value::Array(vec![Value::from(name)]));
        let mut properties = Schema::new();
        properties.insert(discriminator.to_string(), Value::Object(literal));
        let mut tag = Schema::new();
        tag.insert("properties".to_string(), Value::Object(properties));
        tag.insert(
            "required".to_string(),
            Value::Array(vec![Value::from(discriminator)]),
        );

        let mut schema = Schema::new();
        schema.insert(
            "allOf".to_string(),
            Value::Array(vec![Value::Object(body), Value::Object(tag)]),
        );
        Ok(schema)
    }

    /// `anyOf` with one [`Self::sealed_schema_of`] per variant.
    pub fn put_sealed_schemas(&mut self, schema: &mut Schema) -> Result<()> {
        self.put_sealed_schemas_with(schema, DEFAULT_DISCRIMINATOR)
    }

    /// `anyOf` over all variants, tagged with `discriminator`. A nullable
    /// hierarchy gets a leading `{"type": "null"}` branch.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NoVariants`] when the descriptor has no variants.
    pub fn put_sealed_schemas_with(&mut self, schema: &mut Schema, discriminator: &str) -> Result<()> {
        let descriptor = self.descriptor;
        if descriptor.elements.is_empty() {
            return Err(SchemaError::NoVariants {
                serial_name: descriptor.serial_name.clone(),
            });
        }

        let mut branches = Vec::with_capacity(descriptor.elements.len() + 1);
        if descriptor.nullable {
            let mut null = Schema::new();
            resolver::put_type(&mut null, JsonType::Null, false);
            branches.push(Value::Object(null));
        }
        for element in &descriptor.elements {
            let variant = element.descriptor();
            branches.push(Value::Object(self.sealed_schema_of_with(&variant, discriminator)?));
        }
        schema.insert("anyOf".to_string(), Value::Array(branches));
        Ok(())
    }

    fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.descriptor.kind {
            SerialKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    /// `minimum` from the kind's representable range, if it has one.
    pub fn put_default_minimum(&self, schema: &mut Schema) -> bool {
        match self.primitive_kind().and_then(PrimitiveKind::default_range) {
            Some((minimum, _)) => {
                schema.insert(MINIMUM.to_string(), Value::Number(minimum));
                true
            }
            None => false,
        }
    }

    /// `maximum` from the kind's representable range, if it has one.
    pub fn put_default_maximum(&self, schema: &mut Schema) -> bool {
        match self.primitive_kind().and_then(PrimitiveKind::default_range) {
            Some((_, maximum)) => {
                schema.insert(MAXIMUM.to_string(), Value::Number(maximum));
                true
            }
            None => false,
        }
    }

    /// `minLength` implied by the kind (`1` for chars).
    pub fn put_default_min_length(&self, schema: &mut Schema) -> bool {
        match self.primitive_kind().and_then(PrimitiveKind::default_length_bounds) {
            Some((min, _)) => {
                schema.insert(MIN_LENGTH.to_string(), Value::from(min));
                true
            }
            None => false,
        }
    }

    /// `maxLength` implied by the kind (`1` for chars).
    pub fn put_default_max_length(&self, schema: &mut Schema) -> bool {
        match self.primitive_kind().and_then(PrimitiveKind::default_length_bounds) {
            Some((_, max)) => {
                schema.insert(MAX_LENGTH.to_string(), Value::from(max));
                true
            }
            None => false,
        }
    }
}
