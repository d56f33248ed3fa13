//! Front-matter parsing
//!
//! Only the YAML header of a post is read. The body after the closing fence
//! is handed back untouched.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Visitor for a YAML scalar read as text
///
/// Plain scalars such as `2024` or `yes` resolve to numbers and booleans;
/// front-matter treats them as the text that was written.
struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }
}

/// A list element read through [`ScalarText`]
struct Tag(String);

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarText).map(Tag)
    }
}

/// Accepts `tags: rust`, `tags: [rust, 2024]` and an empty `tags:`
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a scalar or a list of scalars")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            ScalarText.visit_str(value).map(|tag| vec![tag])
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(vec![value])
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            ScalarText.visit_bool(value).map(|tag| vec![tag])
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            ScalarText.visit_i64(value).map(|tag| vec![tag])
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            ScalarText.visit_u64(value).map(|tag| vec![tag])
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            ScalarText.visit_f64(value).map(|tag| vec![tag])
        }

        fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
            let mut tags = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Tag(tag)) = seq.next_element()? {
                tags.push(tag);
            }
            Ok(tags)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Optional text field that also takes numeric and boolean scalars
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalText;

    impl<'de> Visitor<'de> for OptionalText {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional scalar")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(ScalarText).map(Some)
        }
    }

    deserializer.deserialize_option(OptionalText)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split `content` into front-matter and body
    ///
    /// Content without a `---` fenced header yields the default front-matter
    /// and the whole input as body.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start();
        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((Self::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end) = rest.find("\n---") else {
            return Ok((Self::default(), content));
        };

        let yaml = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((Self::default(), body));
        }

        let fm = serde_yaml::from_str(yaml)?;
        Ok((fm, body))
    }

    /// Parse the `date` field into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in the formats front-matter commonly uses
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    const DATETIME_FORMATS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }

    // RFC 3339 keeps the calendar date as written, not shifted to local time
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
summary: First post
tags:
  - rust
  - web
series: intro
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.summary.as_deref(), Some("First post"));
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert!(!fm.draft);
        assert!(fm.extra.contains_key("series"));
        assert!(body.starts_with("This is the content."));
    }

    #[test]
    fn test_single_string_and_empty_tags() {
        let (fm, _) = FrontMatter::parse("---\ntitle: One\ntags: Notes\n---\n").unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);

        let (fm, _) = FrontMatter::parse("---\ntitle: None\ntags:\n---\n").unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_numeric_and_boolean_scalars_are_text() {
        let content = "---\ntitle: 1984\nsummary: true\ntags: [rust, 2024, 1.5, yes]\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("1984"));
        assert_eq!(fm.summary.as_deref(), Some("true"));
        assert_eq!(fm.tags, vec!["rust", "2024", "1.5", "yes"]);

        let (fm, _) = FrontMatter::parse("---\ntags: 3\n---\n").unwrap();
        assert_eq!(fm.tags, vec!["3"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\ntitle: Dangling\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(FrontMatter::parse("---\ntitle: [unclosed\n---\n").is_err());
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for raw in [
            "2024-01-15",
            "2024/01/15",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30:00",
            "2024-01-15T23:30:00+09:00",
        ] {
            let fm = FrontMatter {
                date: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(fm.parse_date(), Some(expected), "{raw}");
        }

        let fm = FrontMatter {
            date: Some("last tuesday".to_string()),
            ..Default::default()
        };
        assert!(fm.parse_date().is_none());
    }
}
