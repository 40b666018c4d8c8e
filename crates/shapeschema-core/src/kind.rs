//! Structural kinds and their mapping onto JSON Schema type names.
//!
//! The classifier is a pure function of the kind: every kind that can appear
//! in a schema maps to exactly one [`JsonType`]. Fixed-width numeric kinds
//! additionally know their representable range, which strategies may use as
//! a fallback when no explicit bound was annotated.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{Result, SchemaError};

/// Closed set of structural kinds a [`crate::Descriptor`] can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialKind {
    Primitive(PrimitiveKind),
    Enum,
    /// Singleton marker type without data.
    Object,
    Class,
    List,
    Map,
    Polymorphic(PolymorphicKind),
    /// Shape only known once a serializer is attached at runtime.
    Contextual,
    /// Single-field transparent wrapper.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    String,
    Char,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    UByte,
    UShort,
    UInt,
    ULong,
    Float,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolymorphicKind {
    /// Variants are registered externally and may grow.
    Open,
    /// Variants are known and closed.
    Sealed,
}

/// JSON Schema `type` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl JsonType {
    /// Classify a structural kind.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnsupportedKind`] for [`SerialKind::Inline`], which has
    /// no shape of its own and must be unwrapped by the caller first.
    pub fn of(kind: SerialKind) -> Result<Self> {
        Ok(match kind {
            SerialKind::Primitive(primitive) => primitive.json_type(),
            SerialKind::Enum => JsonType::String,
            SerialKind::List => JsonType::Array,
            SerialKind::Object
            | SerialKind::Class
            | SerialKind::Map
            | SerialKind::Polymorphic(_)
            | SerialKind::Contextual => JsonType::Object,
            SerialKind::Inline => {
                return Err(SchemaError::UnsupportedKind {
                    serial_name: String::new(),
                    kind: kind.to_string(),
                });
            }
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Array => "array",
            JsonType::Object => "object",
            JsonType::Null => "null",
        }
    }

    /// `true` for `integer` and `number`.
    pub fn is_numeric(self) -> bool {
        matches!(self, JsonType::Integer | JsonType::Number)
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PrimitiveKind {
    /// `char` is a one-character string in JSON.
    pub fn json_type(self) -> JsonType {
        match self {
            PrimitiveKind::String | PrimitiveKind::Char => JsonType::String,
            PrimitiveKind::Boolean => JsonType::Boolean,
            PrimitiveKind::Byte
            | PrimitiveKind::Short
            | PrimitiveKind::Int
            | PrimitiveKind::Long
            | PrimitiveKind::UByte
            | PrimitiveKind::UShort
            | PrimitiveKind::UInt
            | PrimitiveKind::ULong => JsonType::Integer,
            PrimitiveKind::Float | PrimitiveKind::Double => JsonType::Number,
        }
    }

    /// Representable `(minimum, maximum)` of a fixed-width numeric kind.
    pub fn default_range(self) -> Option<(Number, Number)> {
        let range = match self {
            PrimitiveKind::Byte => (Number::from(i8::MIN), Number::from(i8::MAX)),
            PrimitiveKind::Short => (Number::from(i16::MIN), Number::from(i16::MAX)),
            PrimitiveKind::Int => (Number::from(i32::MIN), Number::from(i32::MAX)),
            PrimitiveKind::Long => (Number::from(i64::MIN), Number::from(i64::MAX)),
            PrimitiveKind::UByte => (Number::from(u8::MIN), Number::from(u8::MAX)),
            PrimitiveKind::UShort => (Number::from(u16::MIN), Number::from(u16::MAX)),
            PrimitiveKind::UInt => (Number::from(u32::MIN), Number::from(u32::MAX)),
            PrimitiveKind::ULong => (Number::from(u64::MIN), Number::from(u64::MAX)),
            PrimitiveKind::Float => (
                Number::from_f64(f64::from(f32::MIN))?,
                Number::from_f64(f64::from(f32::MAX))?,
            ),
            PrimitiveKind::Double => (Number::from_f64(f64::MIN)?, Number::from_f64(f64::MAX)?),
            PrimitiveKind::String | PrimitiveKind::Char | PrimitiveKind::Boolean => return None,
        };
        Some(range)
    }

    /// Implicit `(minLength, maxLength)`; only `Char` has one.
    pub fn default_length_bounds(self) -> Option<(u64, u64)> {
        match self {
            PrimitiveKind::Char => Some((1, 1)),
            _ => None,
        }
    }
}

impl Display for SerialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialKind::Primitive(primitive) => write!(f, "primitive {primitive:?}"),
            SerialKind::Enum => f.write_str("enum"),
            SerialKind::Object => f.write_str("object"),
            SerialKind::Class => f.write_str("class"),
            SerialKind::List => f.write_str("list"),
            SerialKind::Map => f.write_str("map"),
            SerialKind::Polymorphic(PolymorphicKind::Open) => f.write_str("open polymorphic"),
            SerialKind::Polymorphic(PolymorphicKind::Sealed) => f.write_str("sealed polymorphic"),
            SerialKind::Contextual => f.write_str("contextual"),
            SerialKind::Inline => f.write_str("inline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_map_to_json_types() {
        assert_eq!(JsonType::of(SerialKind::Primitive(PrimitiveKind::String)), Ok(JsonType::String));
        assert_eq!(JsonType::of(SerialKind::Primitive(PrimitiveKind::Char)), Ok(JsonType::String));
        assert_eq!(JsonType::of(SerialKind::Primitive(PrimitiveKind::Long)), Ok(JsonType::Integer));
        assert_eq!(JsonType::of(SerialKind::Primitive(PrimitiveKind::UByte)), Ok(JsonType::Integer));
        assert_eq!(JsonType::of(SerialKind::Primitive(PrimitiveKind::Float)), Ok(JsonType::Number));
        assert_eq!(JsonType::of(SerialKind::Primitive(PrimitiveKind::Boolean)), Ok(JsonType::Boolean));
    }

    #[test]
    fn structures_map_to_json_types() {
        assert_eq!(JsonType::of(SerialKind::List), Ok(JsonType::Array));
        assert_eq!(JsonType::of(SerialKind::Map), Ok(JsonType::Object));
        assert_eq!(JsonType::of(SerialKind::Class), Ok(JsonType::Object));
        assert_eq!(JsonType::of(SerialKind::Enum), Ok(JsonType::String));
        assert_eq!(
            JsonType::of(SerialKind::Polymorphic(PolymorphicKind::Sealed)),
            Ok(JsonType::Object)
        );
    }

    #[test]
    fn inline_has_no_json_type() {
        assert!(matches!(
            JsonType::of(SerialKind::Inline),
            Err(SchemaError::UnsupportedKind { .. })
        ));
    }

    #[test]
    fn int_range_matches_i32() {
        let (min, max) = PrimitiveKind::Int.default_range().unwrap();
        assert_eq!(min.as_i64(), Some(-2_147_483_648));
        assert_eq!(max.as_i64(), Some(2_147_483_647));
    }

    #[test]
    fn unsigned_long_range_reaches_u64_max() {
        let (min, max) = PrimitiveKind::ULong.default_range().unwrap();
        assert_eq!(min.as_u64(), Some(0));
        assert_eq!(max.as_u64(), Some(u64::MAX));
    }

    #[test]
    fn non_numeric_kinds_have_no_range() {
        assert!(PrimitiveKind::String.default_range().is_none());
        assert!(PrimitiveKind::Boolean.default_range().is_none());
    }

    #[test]
    fn only_char_has_length_bounds() {
        assert_eq!(PrimitiveKind::Char.default_length_bounds(), Some((1, 1)));
        assert_eq!(PrimitiveKind::String.default_length_bounds(), None);
    }

    #[test]
    fn json_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(JsonType::Integer).unwrap(), "integer");
        assert_eq!(JsonType::Array.to_string(), "array");
    }
}
