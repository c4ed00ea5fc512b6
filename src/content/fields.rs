//! Typed access to front-matter fields
//!
//! Each record kind reads its schema through [`Fields`], so every failure
//! carries the offending file and field.

use serde_yaml::Value;
use std::path::Path;

use super::FrontMatter;
use crate::error::{ContentError, Result};

/// A closed set of string literals accepted by a front-matter field
pub trait ClosedSet: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    /// The literal as written in front-matter
    fn as_str(&self) -> &'static str;

    fn from_literal(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }

    fn expected() -> String {
        Self::VARIANTS
            .iter()
            .map(|variant| format!("\"{}\"", variant.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Front-matter fields of one source file
pub struct Fields<'a> {
    path: &'a Path,
    front_matter: &'a FrontMatter,
}

impl<'a> Fields<'a> {
    pub fn new(path: &'a Path, front_matter: &'a FrontMatter) -> Self {
        Self { path, front_matter }
    }

    /// A string field that must be present
    pub fn required_str(&self, field: &str) -> Result<String> {
        self.optional_str(field)?
            .ok_or_else(|| self.invalid(field, "required field is missing"))
    }

    /// A string field that may be absent or null
    pub fn optional_str(&self, field: &str) -> Result<Option<String>> {
        match self.front_matter.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.wrong_type(field, "a string", other)),
        }
    }

    /// A list of strings that may be absent or null
    pub fn optional_str_list(&self, field: &str) -> Result<Option<Vec<String>>> {
        match self.front_matter.get(field) {
            None => Ok(None),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(self.wrong_type(field, "a list of strings", other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(other) => Err(self.wrong_type(field, "a list of strings", other)),
        }
    }

    /// A required field restricted to a closed set of literals
    pub fn required_enum<T: ClosedSet>(&self, field: &str) -> Result<T> {
        let value = self.required_str(field)?;
        T::from_literal(&value).ok_or_else(|| {
            self.invalid(
                field,
                format!("unknown value \"{}\", expected one of {}", value, T::expected()),
            )
        })
    }

    pub fn invalid(&self, field: &str, reason: impl Into<String>) -> ContentError {
        ContentError::Validation {
            path: self.path.to_path_buf(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    fn wrong_type(&self, field: &str, expected: &str, found: &Value) -> ContentError {
        self.invalid(
            field,
            format!("expected {}, found {}", expected, describe(found)),
        )
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Blue,
    }

    impl ClosedSet for Color {
        const VARIANTS: &'static [Self] = &[Color::Red, Color::Blue];

        fn as_str(&self) -> &'static str {
            match self {
                Color::Red => "Red",
                Color::Blue => "Blue",
            }
        }
    }

    fn front_matter(yaml: &str) -> FrontMatter {
        let text = format!("---\n{}\n---\n", yaml);
        FrontMatter::parse(&text).unwrap().0
    }

    fn field_of(err: ContentError) -> String {
        match err {
            ContentError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_required_str() {
        let fm = front_matter("name: Grace");
        let fields = Fields::new(Path::new("a.md"), &fm);
        assert_eq!(fields.required_str("name").unwrap(), "Grace");
        assert_eq!(field_of(fields.required_str("role").unwrap_err()), "role");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let fm = front_matter("name: 1515");
        let fields = Fields::new(Path::new("a.md"), &fm);
        let err = fields.required_str("name").unwrap_err();
        assert!(err.to_string().contains("found a number"));
        assert!(err.to_string().contains("a.md"));
    }

    #[test]
    fn test_string_list() {
        let fm = front_matter("tags: [a, b]\nsingle: one\nbad: [1]");
        let fields = Fields::new(Path::new("a.md"), &fm);
        assert_eq!(
            fields.optional_str_list("tags").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        match fields.optional_str_list("single").unwrap_err() {
            ContentError::Validation { field, reason, .. } => {
                assert_eq!(field, "single");
                assert_eq!(reason, "expected a list of strings, found a string");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(fields.optional_str_list("missing").unwrap(), None);
        assert!(fields.optional_str_list("bad").is_err());
    }

    #[test]
    fn test_required_enum() {
        let fm = front_matter("color: Blue\nother: Green");
        let fields = Fields::new(Path::new("a.md"), &fm);
        assert_eq!(fields.required_enum::<Color>("color").unwrap(), Color::Blue);

        let err = fields.required_enum::<Color>("other").unwrap_err();
        assert!(err.to_string().contains("\"Red\", \"Blue\""));
        assert_eq!(field_of(err), "other");
    }
}
