//! Out-of-band metadata attached to properties and type declarations.
//!
//! Annotations come from two sites: the **property** that holds a value and
//! the **type** of that value. The generator concatenates them property-site
//! first, so for every tag the property wins. Duplicates are allowed, the
//! first occurrence of a tag is the one honoured.
//!
//! ```rust
//! use shapeschema_core::annotation::{Annotation, Annotations};
//!
//! let property = Annotations::from(vec![Annotation::Description("on the field".into())]);
//! let on_type = [Annotation::Description("on the type".into())];
//!
//! let effective = property.followed_by(&on_type);
//! assert_eq!(effective.description(), Some("on the field"));
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One recognized constraint or documentation tag.
///
/// Integer and `*Double` numeric variants express the same JSON Schema
/// keyword; when both are present the integer variant is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "value", rename_all = "snake_case")]
pub enum Annotation {
    Title(String),
    Description(String),
    /// Rendered as `$comment`.
    Comment(String),
    MinLength(u64),
    MaxLength(u64),
    Pattern(String),
    Format(String),
    MultipleOf(i64),
    Minimum(i64),
    Maximum(i64),
    ExclusiveMinimum(i64),
    ExclusiveMaximum(i64),
    MultipleOfDouble(f64),
    MinimumDouble(f64),
    MaximumDouble(f64),
    ExclusiveMinimumDouble(f64),
    ExclusiveMaximumDouble(f64),
    /// Encode the annotated type as `$ref` under an explicit name.
    Ref(String),
    /// Encode the annotated type as `$ref` under its own serial name.
    RefWithSerialName,
}

impl Annotation {
    /// `Ref` or `RefWithSerialName`.
    pub fn is_ref(&self) -> bool {
        matches!(self, Annotation::Ref(_) | Annotation::RefWithSerialName)
    }
}

/// Ordered annotation set with typed first-match lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// `self` followed by `rest`, keeping `self`'s entries in front.
    pub fn followed_by(&self, rest: &[Annotation]) -> Self {
        let mut all = Vec::with_capacity(self.0.len() + rest.len());
        all.extend_from_slice(&self.0);
        all.extend_from_slice(rest);
        Self(all)
    }

    /// First annotation `pick` maps to `Some`.
    pub fn find_first<'a, T>(&'a self, pick: impl FnMut(&'a Annotation) -> Option<T>) -> Option<T> {
        self.0.iter().find_map(pick)
    }

    pub fn title(&self) -> Option<&str> {
        self.find_first(|a| match a {
            Annotation::Title(value) => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.find_first(|a| match a {
            Annotation::Description(value) => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn comment(&self) -> Option<&str> {
        self.find_first(|a| match a {
            Annotation::Comment(value) => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn pattern(&self) -> Option<&str> {
        self.find_first(|a| match a {
            Annotation::Pattern(value) => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn format(&self) -> Option<&str> {
        self.find_first(|a| match a {
            Annotation::Format(value) => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn min_length(&self) -> Option<u64> {
        self.find_first(|a| match a {
            Annotation::MinLength(value) => Some(*value),
            _ => None,
        })
    }

    pub fn max_length(&self) -> Option<u64> {
        self.find_first(|a| match a {
            Annotation::MaxLength(value) => Some(*value),
            _ => None,
        })
    }

    pub fn multiple_of(&self) -> Option<i64> {
        self.find_first(|a| match a {
            Annotation::MultipleOf(value) => Some(*value),
            _ => None,
        })
    }

    pub fn minimum(&self) -> Option<i64> {
        self.find_first(|a| match a {
            Annotation::Minimum(value) => Some(*value),
            _ => None,
        })
    }

    pub fn maximum(&self) -> Option<i64> {
        self.find_first(|a| match a {
            Annotation::Maximum(value) => Some(*value),
            _ => None,
        })
    }

    pub fn exclusive_minimum(&self) -> Option<i64> {
        self.find_first(|a| match a {
            Annotation::ExclusiveMinimum(value) => Some(*value),
            _ => None,
        })
    }

    pub fn exclusive_maximum(&self) -> Option<i64> {
        self.find_first(|a| match a {
            Annotation::ExclusiveMaximum(value) => Some(*value),
            _ => None,
        })
    }

    pub fn multiple_of_double(&self) -> Option<f64> {
        self.find_first(|a| match a {
            Annotation::MultipleOfDouble(value) => Some(*value),
            _ => None,
        })
    }

    pub fn minimum_double(&self) -> Option<f64> {
        self.find_first(|a| match a {
            Annotation::MinimumDouble(value) => Some(*value),
            _ => None,
        })
    }

    pub fn maximum_double(&self) -> Option<f64> {
        self.find_first(|a| match a {
            Annotation::MaximumDouble(value) => Some(*value),
            _ => None,
        })
    }

    pub fn exclusive_minimum_double(&self) -> Option<f64> {
        self.find_first(|a| match a {
            Annotation::ExclusiveMinimumDouble(value) => Some(*value),
            _ => None,
        })
    }

    pub fn exclusive_maximum_double(&self) -> Option<f64> {
        self.find_first(|a| match a {
            Annotation::ExclusiveMaximumDouble(value) => Some(*value),
            _ => None,
        })
    }

    /// Reference key requested by the first `Ref` / `RefWithSerialName`.
    ///
    /// `RefWithSerialName` resolves to `serial_name`; a nullable type's
    /// trailing `?` is stripped so nullable and non-nullable uses share one
    /// entry.
    pub fn ref_name(&self, serial_name: &str, nullable: bool) -> Option<String> {
        self.find_first(|a| match a {
            Annotation::Ref(name) => Some(name.clone()),
            Annotation::RefWithSerialName if nullable => Some(
                serial_name
                    .strip_suffix('?')
                    .unwrap_or(serial_name)
                    .to_string(),
            ),
            Annotation::RefWithSerialName => Some(serial_name.to_string()),
            _ => None,
        })
    }
}

impl Deref for Annotations {
    type Target = [Annotation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Annotation>> for Annotations {
    fn from(value: Vec<Annotation>) -> Self {
        Self(value)
    }
}

impl From<&[Annotation]> for Annotations {
    fn from(value: &[Annotation]) -> Self {
        Self(value.to_vec())
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Annotation> for Annotations {
    fn extend<I: IntoIterator<Item = Annotation>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
