//! Structural description of a type, independent of any value.
//!
//! A [`Descriptor`] captures what the schema generator needs to know about a
//! type: its [`SerialKind`], nullability, type-site annotations and, for
//! composite kinds, an ordered list of named [`Element`]s.
//!
//! Descriptor graphs may be cyclic (a tree node holding optional subtrees).
//! Elements therefore point at their child through a [`DescriptorRef`], which
//! can defer producing the child until the generator actually walks the
//! edge. Cycles stay finite as Rust values and only unfold on demand.
//!
//! # Element conventions per kind
//!
//! | Kind          | Elements                                           |
//! |---------------|----------------------------------------------------|
//! | `Class`       | one per property, in declaration order             |
//! | `Enum`        | one per case, named after the case                 |
//! | `List`        | exactly one, the item type                         |
//! | `Map`         | exactly two, key then value                        |
//! | `Inline`      | exactly one, the wrapped value                     |
//! | `Polymorphic` | one per concrete variant                           |
//! | others        | none                                               |
use std::{fmt, sync::Arc};

use crate::{
    annotation::Annotation,
    builder::DescriptorBuilder,
    describe::Describe,
    error::{Result, SchemaError},
    kind::{PolymorphicKind, PrimitiveKind, SerialKind},
};

/// Suffix appended to the serial name of nullable descriptors.
pub const NULLABLE_SUFFIX: char = '?';

#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Serial / type name, also the default reference key.
    pub serial_name: String,
    pub kind: SerialKind,
    pub nullable: bool,
    /// Annotations declared on the type itself.
    pub annotations: Vec<Annotation>,
    pub elements: Vec<Element>,
}

/// A named child of a composite descriptor.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub descriptor: DescriptorRef,
    /// Optional elements are left out of `required`.
    pub optional: bool,
    /// Annotations declared on the property.
    pub annotations: Vec<Annotation>,
}

/// Edge from an [`Element`] to its child descriptor.
#[derive(Clone)]
pub struct DescriptorRef(Source);

#[derive(Clone)]
enum Source {
    Eager(Arc<Descriptor>),
    Lazy(Arc<dyn Fn() -> Descriptor + Send + Sync>),
}

impl Descriptor {
    pub fn new(serial_name: impl Into<String>, kind: SerialKind) -> Self {
        Self {
            serial_name: serial_name.into(),
            kind,
            nullable: false,
            annotations: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn primitive(serial_name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(serial_name, SerialKind::Primitive(kind))
    }

    /// Enum whose cases serialize as their names.
    pub fn enumeration<I, S>(serial_name: impl Into<String>, cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let serial_name = serial_name.into();
        let elements = cases
            .into_iter()
            .map(|case| {
                let case = case.into();
                let object = Descriptor::object(format!("{serial_name}.{case}"));
                Element::new(case, object)
            })
            .collect();
        Self {
            elements,
            ..Self::new(serial_name, SerialKind::Enum)
        }
    }

    /// Singleton marker type without data.
    pub fn object(serial_name: impl Into<String>) -> Self {
        Self::new(serial_name, SerialKind::Object)
    }

    pub fn list(serial_name: impl Into<String>, item: impl Into<DescriptorRef>) -> Self {
        Self {
            elements: vec![Element::new("0", item)],
            ..Self::new(serial_name, SerialKind::List)
        }
    }

    pub fn map(
        serial_name: impl Into<String>,
        key: impl Into<DescriptorRef>,
        value: impl Into<DescriptorRef>,
    ) -> Self {
        Self {
            elements: vec![Element::new("0", key), Element::new("1", value)],
            ..Self::new(serial_name, SerialKind::Map)
        }
    }

    /// Transparent single-field wrapper around `value`.
    pub fn inline(serial_name: impl Into<String>, value: Element) -> Self {
        Self {
            elements: vec![value],
            ..Self::new(serial_name, SerialKind::Inline)
        }
    }

    pub fn contextual(serial_name: impl Into<String>) -> Self {
        Self::new(serial_name, SerialKind::Contextual)
    }

    /// Start a record / class descriptor.
    pub fn class(serial_name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(serial_name, SerialKind::Class)
    }

    /// Start a closed polymorphic hierarchy.
    pub fn sealed(serial_name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(serial_name, SerialKind::Polymorphic(PolymorphicKind::Sealed))
    }

    /// Start an open polymorphic hierarchy.
    pub fn open(serial_name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(serial_name, SerialKind::Polymorphic(PolymorphicKind::Open))
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Mark as nullable and append [`NULLABLE_SUFFIX`] to the serial name.
    pub fn into_nullable(mut self) -> Self {
        if !self.nullable {
            self.nullable = true;
            self.serial_name.push(NULLABLE_SUFFIX);
        }
        self
    }

    /// Non-nullable copy with the nullable suffix removed.
    pub fn non_nullable(&self) -> Self {
        let mut copy = self.clone();
        if copy.nullable {
            copy.nullable = false;
            if copy.serial_name.ends_with(NULLABLE_SUFFIX) {
                copy.serial_name.pop();
            }
        }
        copy
    }

    pub fn is_inline(&self) -> bool {
        self.kind == SerialKind::Inline
    }

    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|element| element.name.as_str())
    }

    /// Item element of a list.
    pub fn list_item(&self) -> Result<&Element> {
        match self.elements.as_slice() {
            [item] => Ok(item),
            other => Err(SchemaError::malformed(
                &self.serial_name,
                format!("list must have exactly one element, found {}", other.len()),
            )),
        }
    }

    /// `(key, value)` elements of a map.
    pub fn map_entries(&self) -> Result<(&Element, &Element)> {
        match self.elements.as_slice() {
            [key, value] => Ok((key, value)),
            other => Err(SchemaError::malformed(
                &self.serial_name,
                format!("map must have exactly two elements, found {}", other.len()),
            )),
        }
    }

    /// Wrapped element of an inline descriptor.
    pub fn inline_element(&self) -> Result<&Element> {
        match self.elements.as_slice() {
            [value] => Ok(value),
            other => Err(SchemaError::malformed(
                &self.serial_name,
                format!("inline wrapper must have exactly one element, found {}", other.len()),
            )),
        }
    }
}

impl Element {
    pub fn new(name: impl Into<String>, descriptor: impl Into<DescriptorRef>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            optional: false,
            annotations: Vec::new(),
        }
    }

    /// Element whose child descriptor comes from `T`'s [`Describe`] impl.
    pub fn of<T: Describe + ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DescriptorRef::of::<T>())
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Resolve the child descriptor.
    pub fn descriptor(&self) -> Arc<Descriptor> {
        self.descriptor.resolve()
    }
}

impl DescriptorRef {
    /// Deferred edge to `T::descriptor()`; required for self-referential types.
    pub fn of<T: Describe + ?Sized + 'static>() -> Self {
        Self(Source::Lazy(Arc::new(T::descriptor)))
    }

    /// Deferred edge produced by an arbitrary function.
    pub fn lazy(produce: impl Fn() -> Descriptor + Send + Sync + 'static) -> Self {
        Self(Source::Lazy(Arc::new(produce)))
    }

    pub fn resolve(&self) -> Arc<Descriptor> {
        match &self.0 {
            Source::Eager(descriptor) => Arc::clone(descriptor),
            Source::Lazy(produce) => Arc::new(produce()),
        }
    }
}

impl From<Descriptor> for DescriptorRef {
    fn from(value: Descriptor) -> Self {
        Self(Source::Eager(Arc::new(value)))
    }
}

impl From<Arc<Descriptor>> for DescriptorRef {
    fn from(value: Arc<Descriptor>) -> Self {
        Self(Source::Eager(value))
    }
}

impl fmt::Debug for DescriptorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Source::Eager(descriptor) => f
                .debug_tuple("DescriptorRef")
                .field(&descriptor.serial_name)
                .finish(),
            Source::Lazy(_) => f.write_str("DescriptorRef(<lazy>)"),
        }
    }
}
