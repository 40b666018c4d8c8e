//! Builder-style helper for constructing composite **descriptors**.
//!
//! Spelling out a [`Descriptor`] literal with its element vector is tedious
//! once a type has more than two properties. `DescriptorBuilder` offers a
//! fluent API instead; every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use shapeschema_core::{Annotation, Descriptor, Describe};
//!
//! let descriptor = Descriptor::class("TestDataClass")
//!     .annotate(Annotation::Description("A test record".into()))
//!     .element("name", String::descriptor())
//!     .optional_element("owner", String::descriptor())
//!     .build();
//!
//! assert_eq!(descriptor.elements.len(), 2);
//! assert!(descriptor.elements[1].optional);
//! ```
//!
//! The builder performs **no validation**; element conventions are checked
//! by the generator when it walks the descriptor.

use crate::{
    annotation::Annotation,
    descriptor::{Descriptor, DescriptorRef, Element},
    kind::SerialKind,
};

/// Fluent helper to produce class and polymorphic descriptors.
pub struct DescriptorBuilder {
    descriptor: Descriptor,
}

impl DescriptorBuilder {
    /// Create a builder for an element-less descriptor of `kind`.
    pub fn new(serial_name: impl Into<String>, kind: SerialKind) -> Self {
        Self {
            descriptor: Descriptor::new(serial_name, kind),
        }
    }

    /// Add a type-site annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.descriptor.annotations.push(annotation);
        self
    }

    /// Add a required element.
    pub fn element(self, name: impl Into<String>, descriptor: impl Into<DescriptorRef>) -> Self {
        self.with(Element::new(name, descriptor))
    }

    /// Add an element that may be absent (it has a default value).
    pub fn optional_element(
        self,
        name: impl Into<String>,
        descriptor: impl Into<DescriptorRef>,
    ) -> Self {
        self.with(Element::new(name, descriptor).optional())
    }

    /// Add a fully configured element, e.g. one carrying property annotations.
    pub fn with(mut self, element: Element) -> Self {
        self.descriptor.elements.push(element);
        self
    }

    /// Add a polymorphic variant named after its own serial name.
    pub fn variant(self, variant: Descriptor) -> Self {
        let name = variant.serial_name.clone();
        self.with(Element::new(name, variant))
    }

    /// Add a polymorphic variant whose descriptor is produced later.
    pub fn variant_ref(self, name: impl Into<String>, variant: DescriptorRef) -> Self {
        self.with(Element::new(name, variant))
    }

    /// Mark the resulting descriptor nullable.
    pub fn nullable(mut self) -> Self {
        self.descriptor = self.descriptor.into_nullable();
        self
    }

    /// Retrieve the assembled descriptor and consume the builder.
    pub fn build(self) -> Descriptor {
        self.descriptor
    }
}

impl From<DescriptorBuilder> for DescriptorRef {
    fn from(value: DescriptorBuilder) -> Self {
        value.build().into()
    }
}
