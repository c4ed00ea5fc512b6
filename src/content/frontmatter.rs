//! Front-matter splitting

use serde_yaml::{Mapping, Value};

/// Raw front-matter block of a content file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Split a file into its front-matter and the remaining body.
    ///
    /// The block must open on the first line with `---` and close with a
    /// line holding only `---`. Without an opening or closing delimiter the
    /// whole text is treated as body and the field set is empty.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(first_line_end) = content.find('\n') else {
            return Ok((FrontMatter::default(), content));
        };
        if content[..first_line_end].trim_end() != "---" {
            return Ok((FrontMatter::default(), content));
        }

        let rest = &content[first_line_end + 1..];
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml = &rest[..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
                return Ok((Self::from_yaml(yaml)?, body));
            }
            offset += line.len();
        }

        // No closing delimiter, treat as no front-matter
        Ok((FrontMatter::default(), content))
    }

    fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        // A block made only of comments deserializes to null
        let fields = match serde_yaml::from_str::<Value>(yaml)? {
            Value::Null => Mapping::new(),
            value => serde_yaml::from_value::<Mapping>(value)?,
        };
        Ok(Self { fields })
    }

    /// Look up a field, treating an explicit null as absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
name: Ada Lovelace
role: Captain
tags:
  - rust
  - robots
---

Body text.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("role").and_then(Value::as_str), Some("Captain"));
        assert!(fm.get("tags").is_some_and(Value::is_sequence));
        assert_eq!(fm.get("name").and_then(Value::as_str), Some("Ada Lovelace"));
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\nNo metadata here.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Dangling\n\nNever closed.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("title").and_then(Value::as_str), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_null_field_is_absent() {
        let content = "---\ntitle: Hello\nlinkedin:\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.get("linkedin").is_none());
        assert!(fm.get("title").is_some());
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_sequence_block_is_error() {
        let content = "---\n- one\n- two\n---\nBody";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_horizontal_rule_in_body_kept() {
        let content = "---\ntitle: Rules\n---\nAbove\n\n---\n\nBelow\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("title").and_then(Value::as_str), Some("Rules"));
        assert!(body.contains("Above"));
        assert!(body.contains("Below"));
    }
}
