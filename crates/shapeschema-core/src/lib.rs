//! Descriptor model shared by the **shapeschema** workspace.
//!
//! | Module          | What it provides                                              |
//! |-----------------|---------------------------------------------------------------|
//! | [`descriptor`]  | [`Descriptor`], [`Element`], lazy [`DescriptorRef`] edges     |
//! | [`kind`]        | Structural kinds and the kind → JSON type classifier          |
//! | [`annotation`]  | Title / description / constraint / reference tags             |
//! | [`describe`]    | The [`Describe`] trait and std implementations                |
//! | [`builder`]     | Fluent [`DescriptorBuilder`] for records and hierarchies      |
//! | [`error`]       | [`SchemaError`] and the workspace `Result` alias              |

pub mod annotation;
pub mod builder;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod kind;

pub use annotation::{Annotation, Annotations};
pub use builder::DescriptorBuilder;
pub use describe::Describe;
pub use descriptor::{Descriptor, DescriptorRef, Element, NULLABLE_SUFFIX};
pub use error::{Result, SchemaError};
pub use kind::{JsonType, PolymorphicKind, PrimitiveKind, SerialKind};
