//! Field writers that turn annotations into schema keywords.
//!
//! Each `put_*` looks up the first annotation of its tag and, when present,
//! writes exactly one keyword into the fragment. When the tag is absent
//! nothing is written (no `null` placeholders). The return value tells
//! whether something was written, which is how integer-valued numeric
//! constraints take precedence over their `*Double` counterparts:
//!
//! ```rust
//! use shapeschema_core::{Annotation, Annotations};
//! use shapeschema_generator::{Schema, resolver};
//!
//! let annotations = Annotations::from(vec![
//!     Annotation::MinimumDouble(0.5),
//!     Annotation::Minimum(1),
//! ]);
//! let mut schema = Schema::new();
//!
//! if !resolver::put_minimum(&mut schema, &annotations) {
//!     resolver::put_minimum_double(&mut schema, &annotations).unwrap();
//! }
//! assert_eq!(schema["minimum"], 1);
//! ```

use serde_json::{Number, Value};
use shapeschema_core::{Annotations, JsonType, Result, SchemaError};

use crate::Schema;

pub const TYPE: &str = "type";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const COMMENT: &str = "$comment";
pub const FORMAT: &str = "format";
pub const PATTERN: &str = "pattern";
pub const MIN_LENGTH: &str = "minLength";
pub const MAX_LENGTH: &str = "maxLength";
pub const MULTIPLE_OF: &str = "multipleOf";
pub const MINIMUM: &str = "minimum";
pub const MAXIMUM: &str = "maximum";
pub const EXCLUSIVE_MINIMUM: &str = "exclusiveMinimum";
pub const EXCLUSIVE_MAXIMUM: &str = "exclusiveMaximum";

fn put_if_present(schema: &mut Schema, keyword: &str, value: Option<impl Into<Value>>) -> bool {
    match value {
        Some(value) => {
            schema.insert(keyword.to_string(), value.into());
            true
        }
        None => false,
    }
}

fn put_finite(schema: &mut Schema, keyword: &'static str, value: Option<f64>) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };
    let number = Number::from_f64(value).ok_or(SchemaError::NonFiniteBound { keyword, value })?;
    schema.insert(keyword.to_string(), Value::Number(number));
    Ok(true)
}

/// `"type": name`, or `"type": [name, "null"]` when nullable.
pub fn put_type(schema: &mut Schema, json_type: JsonType, nullable: bool) {
    let value = if nullable {
        Value::Array(vec![
            Value::from(json_type.as_str()),
            Value::from(JsonType::Null.as_str()),
        ])
    } else {
        Value::from(json_type.as_str())
    };
    schema.insert(TYPE.to_string(), value);
}

/// `$comment`, `title` and `description`, each if annotated.
pub fn put_documentation(schema: &mut Schema, annotations: &Annotations) {
    put_comment(schema, annotations);
    put_title(schema, annotations);
    put_description(schema, annotations);
}

pub fn put_title(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, TITLE, annotations.title())
}

pub fn put_description(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, DESCRIPTION, annotations.description())
}

pub fn put_comment(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, COMMENT, annotations.comment())
}

pub fn put_format(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, FORMAT, annotations.format())
}

pub fn put_pattern(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, PATTERN, annotations.pattern())
}

pub fn put_min_length(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, MIN_LENGTH, annotations.min_length())
}

pub fn put_max_length(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, MAX_LENGTH, annotations.max_length())
}

pub fn put_multiple_of(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, MULTIPLE_OF, annotations.multiple_of())
}

pub fn put_minimum(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, MINIMUM, annotations.minimum())
}

pub fn put_maximum(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, MAXIMUM, annotations.maximum())
}

pub fn put_exclusive_minimum(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, EXCLUSIVE_MINIMUM, annotations.exclusive_minimum())
}

pub fn put_exclusive_maximum(schema: &mut Schema, annotations: &Annotations) -> bool {
    put_if_present(schema, EXCLUSIVE_MAXIMUM, annotations.exclusive_maximum())
}

pub fn put_multiple_of_double(schema: &mut Schema, annotations: &Annotations) -> Result<bool> {
    put_finite(schema, MULTIPLE_OF, annotations.multiple_of_double())
}

pub fn put_minimum_double(schema: &mut Schema, annotations: &Annotations) -> Result<bool> {
    put_finite(schema, MINIMUM, annotations.minimum_double())
}

pub fn put_maximum_double(schema: &mut Schema, annotations: &Annotations) -> Result<bool> {
    put_finite(schema, MAXIMUM, annotations.maximum_double())
}

pub fn put_exclusive_minimum_double(schema: &mut Schema, annotations: &Annotations) -> Result<bool> {
    put_finite(schema, EXCLUSIVE_MINIMUM, annotations.exclusive_minimum_double())
}

pub fn put_exclusive_maximum_double(schema: &mut Schema, annotations: &Annotations) -> Result<bool> {
    put_finite(schema, EXCLUSIVE_MAXIMUM, annotations.exclusive_maximum_double())
}

/// String keywords: `format`, `pattern`, `minLength`, `maxLength`.
pub fn put_string_constraints(schema: &mut Schema, annotations: &Annotations) {
    put_format(schema, annotations);
    put_pattern(schema, annotations);
    put_min_length(schema, annotations);
    put_max_length(schema, annotations);
}

/// Numeric keywords, integer-valued annotation first, `*Double` as fallback.
pub fn put_number_constraints(schema: &mut Schema, annotations: &Annotations) -> Result<()> {
    if !put_minimum(schema, annotations) {
        put_minimum_double(schema, annotations)?;
    }
    if !put_maximum(schema, annotations) {
        put_maximum_double(schema, annotations)?;
    }
    if !put_exclusive_minimum(schema, annotations) {
        put_exclusive_minimum_double(schema, annotations)?;
    }
    if !put_exclusive_maximum(schema, annotations) {
        put_exclusive_maximum_double(schema, annotations)?;
    }
    if !put_multiple_of(schema, annotations) {
        put_multiple_of_double(schema, annotations)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shapeschema_core::Annotation;

    use super::*;

    fn annotations(list: Vec<Annotation>) -> Annotations {
        Annotations::from(list)
    }

    #[test]
    fn absent_tags_write_nothing() {
        let mut schema = Schema::new();
        put_documentation(&mut schema, &Annotations::new());
        put_string_constraints(&mut schema, &Annotations::new());
        put_number_constraints(&mut schema, &Annotations::new()).unwrap();

        assert!(schema.is_empty());
    }

    #[test]
    fn nullable_type_becomes_pair() {
        let mut schema = Schema::new();
        put_type(&mut schema, JsonType::Integer, true);

        assert_eq!(Value::Object(schema), json!({ "type": ["integer", "null"] }));
    }

    #[test]
    fn comment_uses_dollar_keyword() {
        let mut schema = Schema::new();
        put_documentation(
            &mut schema,
            &annotations(vec![
                Annotation::Comment("TestComment".into()),
                Annotation::Title("TestTitle".into()),
            ]),
        );

        assert_eq!(
            Value::Object(schema),
            json!({ "$comment": "TestComment", "title": "TestTitle" })
        );
    }

    #[test]
    fn integer_constraint_beats_double() {
        let mut schema = Schema::new();
        put_number_constraints(
            &mut schema,
            &annotations(vec![
                Annotation::MaximumDouble(10.5),
                Annotation::Maximum(10),
                Annotation::MultipleOfDouble(2.0),
            ]),
        )
        .unwrap();

        assert_eq!(Value::Object(schema), json!({ "maximum": 10, "multipleOf": 2.0 }));
    }

    #[test]
    fn non_finite_double_is_rejected() {
        let mut schema = Schema::new();
        let error = put_number_constraints(
            &mut schema,
            &annotations(vec![Annotation::MinimumDouble(f64::NAN)]),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            SchemaError::NonFiniteBound { keyword: "minimum", .. }
        ));
    }

    #[test]
    fn string_constraints_are_written() {
        let mut schema = Schema::new();
        put_string_constraints(
            &mut schema,
            &annotations(vec![
                Annotation::MinLength(5),
                Annotation::MaxLength(10),
                Annotation::Format("email".into()),
                Annotation::Pattern("^[a-zA-Z0-9]+$".into()),
            ]),
        );

        assert_eq!(
            Value::Object(schema),
            json!({
                "format": "email",
                "pattern": "^[a-zA-Z0-9]+$",
                "minLength": 5,
                "maxLength": 10
            })
        );
    }
}
