//! Front-matter extraction and validation.
//!
//! Local `.mdx` pages start with a YAML front-matter block fenced by
//! `---` lines. This module splits the header from the body, parses it
//! as YAML, and validates the fields every consumer needs. Validation
//! failures carry the offending metadata serialized as JSON.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use docfed_core::{Error, Result};

/// Page metadata extracted from front-matter (or, for federated pages,
/// taken from the static mapping table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title. Required.
    pub title: String,
    /// Optional one-line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed front-matter: validated metadata plus the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Validated page metadata.
    pub meta: PageMeta,
    /// Markdown body following the header block.
    pub body: String,
}

#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n?(.*)\z").unwrap())
}

/// Split a raw document into its YAML header and body, without parsing.
///
/// Returns `None` when the document does not start with a `---` fence.
pub fn split(raw: &str) -> Option<(&str, &str)> {
    let captures = fence_regex().captures(raw)?;
    // Capture groups 1 and 2 always exist when the pattern matches.
    let header = captures.get(1)?.as_str();
    let body = captures.get(2)?.as_str();
    Some((header, body))
}

/// Parse and validate a raw document's front-matter.
///
/// # Errors
///
/// Returns [`Error::InvalidFrontmatter`] when the header block is
/// missing, is not valid YAML, or lacks a `title` field. The error
/// message names the offending metadata object.
pub fn parse(raw: &str) -> Result<Frontmatter> {
    let Some((header, body)) = split(raw) else {
        return Err(Error::invalid_frontmatter(
            "document has no front-matter header block",
        ));
    };

    let value: serde_yaml::Value = serde_yaml::from_str(header)
        .map_err(|e| Error::invalid_frontmatter(format!("not valid YAML: {e}")))?;

    let meta: PageMeta = serde_yaml::from_value(value.clone()).map_err(|_| {
        let offending =
            serde_json::to_string(&value).unwrap_or_else(|_| "<unserializable>".to_string());
        Error::invalid_frontmatter(offending)
    })?;

    Ok(Frontmatter {
        meta,
        body: body.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let raw = "---\ntitle: Amazon S3\ndescription: Query S3 objects\n---\n# Body\n";
        let fm = parse(raw).unwrap();
        assert_eq!(fm.meta.title, "Amazon S3");
        assert_eq!(fm.meta.description.as_deref(), Some("Query S3 objects"));
        assert_eq!(fm.body, "# Body\n");
    }

    #[test]
    fn test_parse_title_only() {
        let raw = "---\ntitle: Index\n---\nbody";
        let fm = parse(raw).unwrap();
        assert_eq!(fm.meta.title, "Index");
        assert!(fm.meta.description.is_none());
    }

    #[test]
    fn test_missing_header_block() {
        let err = parse("# Just markdown\n").unwrap_err();
        assert!(matches!(err, Error::InvalidFrontmatter(_)));
        assert!(err.to_string().contains("no front-matter"));
    }

    #[test]
    fn test_missing_title_names_offending_object() {
        let raw = "---\ndescription: no title here\n---\nbody";
        let err = parse(raw).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, Error::InvalidFrontmatter(_)));
        // The serialized offending metadata is embedded in the error.
        assert!(msg.contains("no title here"), "got: {msg}");
    }

    #[test]
    fn test_invalid_yaml_header() {
        let raw = "---\ntitle: [unclosed\n---\nbody";
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidFrontmatter(_)));
    }

    #[test]
    fn test_split_preserves_body_verbatim() {
        let raw = "---\ntitle: T\n---\nline one\n\nline two\n";
        let (header, body) = split(raw).unwrap();
        assert_eq!(header, "title: T");
        assert_eq!(body, "line one\n\nline two\n");
    }

    #[test]
    fn test_split_crlf_fences() {
        let raw = "---\r\ntitle: T\r\n---\r\nbody";
        let (header, body) = split(raw).unwrap();
        assert_eq!(header.trim(), "title: T");
        assert_eq!(body, "body");
    }

    #[test]
    fn test_split_requires_leading_fence() {
        assert!(split("\n---\ntitle: T\n---\n").is_none());
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let raw = "---\ntitle: T\nid: s3\ntags: [wrapper]\n---\nbody";
        let fm = parse(raw).unwrap();
        assert_eq!(fm.meta.title, "T");
    }
}
