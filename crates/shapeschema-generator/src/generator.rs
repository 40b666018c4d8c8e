//! Generator configuration and the recursive schema builder.
//!
//! [`SchemaGenerator`] is an immutable bundle of one [`EncodingStrategy`]
//! per structural category. The recursion itself ([`build`]) is fixed:
//! it unwraps inline wrappers, accumulates annotations, intercepts
//! reference-annotated descriptors and then hands the descriptor to the
//! strategy of its kind. Customizing the output therefore never requires
//! touching the recursion, only swapping a strategy:
//!
//! ```rust
//! use shapeschema_core::Descriptor;
//! use shapeschema_generator::{Schema, SchemaGenerator};
//!
//! // Describe contextual types as "anything".
//! let generator = SchemaGenerator::default().with_encode_contextual(|_ctx| Ok(Schema::new()));
//!
//! let schema = generator.schema_of(&Descriptor::contextual("Any"), &[]).unwrap();
//! assert!(schema.is_empty());
//! ```
//!
//! # Termination
//!
//! Every cycle in the descriptor graph must pass through a node annotated
//! with `Ref` or `RefWithSerialName`. An unreferenced cycle recurses until
//! the stack is exhausted.
use std::{fmt, sync::Arc};

use shapeschema_core::{
    Annotation, Annotations, Describe, Descriptor, JsonType, Result, SchemaError, SerialKind,
};

use crate::{
    Schema, context::SchemaBuildingContext, registry::RefRegistry, resolver, strategy,
};

/// Function that encodes the descriptor of a building context.
pub type EncodingStrategy =
    Arc<dyn Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync>;

/// A generator producing JSON Schema for descriptors.
///
/// Immutable and `Send + Sync`: one instance may serve any number of
/// concurrent callers, each call owns its own [`RefRegistry`].
#[derive(Clone)]
pub struct SchemaGenerator {
    pub encode_primitive: EncodingStrategy,
    pub encode_enum: EncodingStrategy,
    pub encode_class: EncodingStrategy,
    pub encode_array: EncodingStrategy,
    pub encode_map: EncodingStrategy,
    pub encode_polymorphic: EncodingStrategy,
    pub encode_contextual: EncodingStrategy,
    pub encode_object: EncodingStrategy,
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self {
            encode_primitive: Arc::new(strategy::encode_primitive),
            encode_enum: Arc::new(strategy::encode_enum),
            encode_class: Arc::new(strategy::encode_class),
            encode_array: Arc::new(strategy::encode_array),
            encode_map: Arc::new(strategy::encode_map),
            encode_polymorphic: Arc::new(strategy::encode_polymorphic),
            encode_contextual: Arc::new(strategy::encode_contextual),
            encode_object: Arc::new(strategy::encode_object),
        }
    }
}

impl fmt::Debug for SchemaGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaGenerator").finish_non_exhaustive()
    }
}

impl SchemaGenerator {
    pub fn with_encode_primitive(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_primitive = Arc::new(strategy);
        self
    }

    pub fn with_encode_enum(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_enum = Arc::new(strategy);
        self
    }

    pub fn with_encode_class(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_class = Arc::new(strategy);
        self
    }

    pub fn with_encode_array(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_array = Arc::new(strategy);
        self
    }

    pub fn with_encode_map(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_map = Arc::new(strategy);
        self
    }

    pub fn with_encode_polymorphic(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_polymorphic = Arc::new(strategy);
        self
    }

    pub fn with_encode_contextual(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_contextual = Arc::new(strategy);
        self
    }

    pub fn with_encode_object(
        mut self,
        strategy: impl Fn(&mut SchemaBuildingContext<'_>) -> Result<Schema> + Send + Sync + 'static,
    ) -> Self {
        self.encode_object = Arc::new(strategy);
        self
    }

    /// Generate the schema of `descriptor`, seeding the recursion with
    /// `annotations` as if they were declared on an enclosing property.
    ///
    /// When any reference was registered the result also carries the
    /// `$defs` side-table.
    pub fn schema_of(&self, descriptor: &Descriptor, annotations: &[Annotation]) -> Result<Schema> {
        let mut refs = RefRegistry::new();
        let mut schema = build(self, &mut refs, descriptor, annotations)?;
        refs.attach_to(&mut schema);
        Ok(schema)
    }

    /// Generate the schema of `T`.
    pub fn schema_for<T: Describe + ?Sized>(&self) -> Result<Schema> {
        self.schema_of(&T::descriptor(), &[])
    }

    /// Hand the context to the strategy of its descriptor's kind.
    pub fn dispatch(&self, ctx: &mut SchemaBuildingContext<'_>) -> Result<Schema> {
        let descriptor = ctx.descriptor();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            serial_name = %descriptor.serial_name,
            kind = %descriptor.kind,
            "encoding descriptor"
        );
        let strategy = match descriptor.kind {
            SerialKind::Primitive(_) => &self.encode_primitive,
            SerialKind::Enum => &self.encode_enum,
            SerialKind::Object => &self.encode_object,
            SerialKind::Class => &self.encode_class,
            SerialKind::List => &self.encode_array,
            SerialKind::Map => &self.encode_map,
            SerialKind::Polymorphic(_) => &self.encode_polymorphic,
            SerialKind::Contextual => &self.encode_contextual,
            SerialKind::Inline => {
                return Err(SchemaError::UnsupportedKind {
                    serial_name: descriptor.serial_name.clone(),
                    kind: descriptor.kind.to_string(),
                });
            }
        };
        strategy(ctx)
    }
}

/// Build the fragment of `descriptor` reached through a property carrying
/// `inherited` annotations.
pub(crate) fn build(
    generator: &SchemaGenerator,
    refs: &mut RefRegistry,
    descriptor: &Descriptor,
    inherited: &[Annotation],
) -> Result<Schema> {
    if descriptor.is_inline() {
        let value = descriptor.inline_element()?;
        let child = value.descriptor();

        // A referenced wrapper is registered under its own name, not the
        // name of the value it wraps.
        if descriptor.annotations.iter().any(Annotation::is_ref) {
            let requested = Annotations::from(inherited).followed_by(&descriptor.annotations);
            if let Some(key) = requested.ref_name(&descriptor.serial_name, descriptor.nullable) {
                let mut schema = refs.register_or_get(
                    &key,
                    descriptor.nullable,
                    Some(|refs: &mut RefRegistry| {
                        let own: Annotations = descriptor
                            .annotations
                            .iter()
                            .chain(&value.annotations)
                            .filter(|annotation| !annotation.is_ref())
                            .cloned()
                            .collect();
                        build(generator, refs, &child, &own)
                    }),
                )?;
                put_use_site(&mut schema, inherited, &*innermost(&child)?)?;
                return Ok(schema);
            }
        }

        let mut annotations = Annotations::from(inherited).followed_by(&descriptor.annotations);
        annotations.extend(value.annotations.iter().cloned());

        if descriptor.nullable && !child.nullable {
            let nullable = child.as_ref().clone().into_nullable();
            return build(generator, refs, &nullable, &annotations);
        }
        return build(generator, refs, &child, &annotations);
    }

    let annotations = Annotations::from(inherited).followed_by(&descriptor.annotations);

    match annotations.ref_name(&descriptor.serial_name, descriptor.nullable) {
        Some(key) => {
            let mut schema = refs.register_or_get(
                &key,
                descriptor.nullable,
                Some(|refs: &mut RefRegistry| {
                    let target = descriptor.non_nullable();
                    let own = Annotations::from(target.annotations.as_slice());
                    let mut ctx = SchemaBuildingContext::new(&target, own, generator, refs);
                    generator.dispatch(&mut ctx)
                }),
            )?;
            put_use_site(&mut schema, inherited, descriptor)?;
            Ok(schema)
        }
        None => {
            let mut ctx = SchemaBuildingContext::new(descriptor, annotations, generator, refs);
            generator.dispatch(&mut ctx)
        }
    }
}

/// Write the annotations of one particular use next to a `$ref` pointer.
///
/// The shared definition only carries type-site annotations. Documentation
/// and the constraints matching `target`'s JSON type are kept per use.
fn put_use_site(schema: &mut Schema, inherited: &[Annotation], target: &Descriptor) -> Result<()> {
    let annotations = Annotations::from(inherited);
    resolver::put_documentation(schema, &annotations);
    if let SerialKind::Primitive(kind) = target.kind {
        let json_type = kind.json_type();
        if json_type == JsonType::String {
            resolver::put_string_constraints(schema, &annotations);
        } else if json_type.is_numeric() {
            resolver::put_number_constraints(schema, &annotations)?;
        }
    }
    Ok(())
}

/// Descriptor left after looking through every inline wrapper.
fn innermost(descriptor: &Arc<Descriptor>) -> Result<Arc<Descriptor>> {
    let mut current = Arc::clone(descriptor);
    while current.is_inline() {
        current = current.inline_element()?.descriptor();
    }
    Ok(current)
}
