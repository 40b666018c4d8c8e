//! The input boundary: types that can describe their own shape.
//!
//! [`Describe`] plays the role of a reflection provider. The generator never
//! builds descriptors itself, it only walks what `descriptor()` hands out.
//! Implementations are provided for the standard library's scalars,
//! collections and smart pointers; user types implement it with the
//! [`DescriptorBuilder`](crate::builder::DescriptorBuilder):
//!
//! ```rust
//! use shapeschema_core::{Annotation, Describe, Descriptor, Element};
//!
//! struct Node {
//!     value: String,
//!     next: Option<Box<Node>>,
//! }
//!
//! impl Describe for Node {
//!     fn descriptor() -> Descriptor {
//!         Descriptor::class("Node")
//!             .annotate(Annotation::RefWithSerialName)
//!             .with(Element::of::<String>("value"))
//!             // Deferred so the self-reference does not recurse here.
//!             .with(Element::of::<Option<Box<Node>>>("next").optional())
//!             .build()
//!     }
//! }
//!
//! assert_eq!(Node::descriptor().elements.len(), 2);
//! ```
use std::{
    any::type_name,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use crate::{
    descriptor::{Descriptor, DescriptorRef},
    kind::PrimitiveKind,
};

/// Produces the structural [`Descriptor`] of `Self`.
///
/// Child edges of composite types should use [`DescriptorRef::of`] so that
/// recursive types can be described without unbounded recursion.
pub trait Describe {
    fn descriptor() -> Descriptor;
}

macro_rules! describe_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn descriptor() -> Descriptor {
                    Descriptor::primitive(stringify!($ty), PrimitiveKind::$kind)
                }
            }
        )*
    };
}

describe_primitive! {
    String => String,
    str => String,
    char => Char,
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    isize => Long,
    u8 => UByte,
    u16 => UShort,
    u32 => UInt,
    u64 => ULong,
    usize => ULong,
    f32 => Float,
    f64 => Double,
}

impl Describe for () {
    fn descriptor() -> Descriptor {
        Descriptor::object("()")
    }
}

impl<T: Describe> Describe for Option<T> {
    fn descriptor() -> Descriptor {
        T::descriptor().into_nullable()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn descriptor() -> Descriptor {
        T::descriptor()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn descriptor() -> Descriptor {
        T::descriptor()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn descriptor() -> Descriptor {
        T::descriptor()
    }
}

macro_rules! describe_list {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Describe + 'static> Describe for $ty {
                fn descriptor() -> Descriptor {
                    Descriptor::list(type_name::<Self>(), DescriptorRef::of::<T>())
                }
            }
        )*
    };
}

describe_list!(Vec<T>, VecDeque<T>, [T], BTreeSet<T>);

impl<T: Describe + 'static, S> Describe for HashSet<T, S> {
    fn descriptor() -> Descriptor {
        Descriptor::list(type_name::<Self>(), DescriptorRef::of::<T>())
    }
}

impl<T: Describe + 'static, const N: usize> Describe for [T; N] {
    fn descriptor() -> Descriptor {
        Descriptor::list(type_name::<Self>(), DescriptorRef::of::<T>())
    }
}

impl<K, V> Describe for BTreeMap<K, V>
where
    K: Describe + 'static,
    V: Describe + 'static,
{
    fn descriptor() -> Descriptor {
        Descriptor::map(
            type_name::<Self>(),
            DescriptorRef::of::<K>(),
            DescriptorRef::of::<V>(),
        )
    }
}

impl<K, V, S> Describe for HashMap<K, V, S>
where
    K: Describe + 'static,
    V: Describe + 'static,
{
    fn descriptor() -> Descriptor {
        Descriptor::map(
            type_name::<Self>(),
            DescriptorRef::of::<K>(),
            DescriptorRef::of::<V>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SerialKind;

    #[test]
    fn scalars_describe_as_primitives() {
        assert_eq!(String::descriptor().kind, SerialKind::Primitive(PrimitiveKind::String));
        assert_eq!(i32::descriptor().kind, SerialKind::Primitive(PrimitiveKind::Int));
        assert_eq!(u8::descriptor().kind, SerialKind::Primitive(PrimitiveKind::UByte));
        assert_eq!(f64::descriptor().kind, SerialKind::Primitive(PrimitiveKind::Double));
        assert_eq!(char::descriptor().kind, SerialKind::Primitive(PrimitiveKind::Char));
    }

    #[test]
    fn option_is_nullable_inner() {
        let descriptor = Option::<i64>::descriptor();

        assert!(descriptor.nullable);
        assert_eq!(descriptor.serial_name, "i64?");
        assert_eq!(descriptor.kind, SerialKind::Primitive(PrimitiveKind::Long));
    }

    #[test]
    fn smart_pointers_are_transparent() {
        assert_eq!(Box::<str>::descriptor().serial_name, "str");
        assert_eq!(Arc::<bool>::descriptor().serial_name, "bool");
    }

    #[test]
    fn collections_describe_their_items() {
        let list = Vec::<String>::descriptor();
        assert_eq!(list.kind, SerialKind::List);
        assert_eq!(list.list_item().unwrap().descriptor().serial_name, "String");

        let map = HashMap::<String, u32>::descriptor();
        let (key, value) = map.map_entries().unwrap();
        assert_eq!(map.kind, SerialKind::Map);
        assert_eq!(key.descriptor().serial_name, "String");
        assert_eq!(value.descriptor().serial_name, "u32");
    }

    #[test]
    fn unit_is_an_object_singleton() {
        assert_eq!(<()>::descriptor().kind, SerialKind::Object);
    }
}
