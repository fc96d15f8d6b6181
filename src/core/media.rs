//! Media types negotiated through the `Accept` header

use crate::core::error::{AppError, AppResult, RequestError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Subtype marker that asks for hypermedia links (`application/vnd.acme.hateoas+json`)
pub const DEFAULT_HYPERMEDIA_MARKER: &str = "hateoas";

fn essence_pattern() -> AppResult<&'static Regex> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([A-Za-z0-9!#$&^_.*-]+)/([A-Za-z0-9!#$&^_.+*-]+)$"))
        .as_ref()
        .map_err(|e| AppError::Internal(format!("invalid media type pattern: {}", e)))
}

/// A parsed media type: `type/subtype[+suffix][; key=value]*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    kind: String,
    subtype: String,
    suffix: Option<String>,
    params: Vec<(String, String)>,
}

impl MediaType {
    /// Parse a media type, or the first entry of an `Accept` list
    pub fn parse(raw: &str) -> AppResult<Self> {
        let invalid = || {
            AppError::Request(RequestError::InvalidMediaType {
                value: raw.to_string(),
            })
        };

        let first = raw.split(',').next().unwrap_or_default();
        let mut pieces = first.split(';');
        let essence = pieces.next().unwrap_or_default().trim();

        let captures = essence_pattern()?.captures(essence).ok_or_else(invalid)?;
        let kind = captures[1].to_ascii_lowercase();
        let full_subtype = captures[2].to_ascii_lowercase();

        let (subtype, suffix) = match full_subtype.rsplit_once('+') {
            Some((base, suffix)) if !base.is_empty() && !suffix.is_empty() => {
                (base.to_string(), Some(suffix.to_string()))
            }
            Some(_) => return Err(invalid()),
            None => (full_subtype, None),
        };

        let mut params = Vec::new();
        for piece in pieces.map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = piece.split_once('=').ok_or_else(invalid)?;
            params.push((
                key.trim().to_ascii_lowercase(),
                value.trim().trim_matches('"').to_string(),
            ));
        }

        Ok(Self {
            kind,
            subtype,
            suffix,
            params,
        })
    }

    /// `application/json`
    pub fn json() -> Self {
        Self {
            kind: "application".to_string(),
            subtype: "json".to_string(),
            suffix: None,
            params: Vec::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Subtype without its structured-syntax suffix
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the subtype (suffix stripped) ends with `marker`, ignoring case
    pub fn is_hypermedia(&self, marker: &str) -> bool {
        !marker.is_empty() && self.subtype.ends_with(&marker.to_ascii_lowercase())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "+{}", suffix)?;
        }
        for (key, value) in &self.params {
            write!(f, "; {}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vendor_type_with_suffix() {
        let media = MediaType::parse("application/vnd.codemaze.hateoas+json").expect("parse");
        assert_eq!(media.kind(), "application");
        assert_eq!(media.subtype(), "vnd.codemaze.hateoas");
        assert_eq!(media.suffix(), Some("json"));
        assert!(media.is_hypermedia(DEFAULT_HYPERMEDIA_MARKER));
    }

    #[test]
    fn test_hypermedia_detection_ignores_case() {
        let media = MediaType::parse("Application/VND.Acme.HATEOAS+JSON").expect("parse");
        assert!(media.is_hypermedia("hateoas"));
        assert!(media.is_hypermedia("HateOAS"));
    }

    #[test]
    fn test_plain_json_is_not_hypermedia() {
        for raw in ["application/json", "*/*", "application/vnd.acme.apiroot+json"] {
            let media = MediaType::parse(raw).expect("parse");
            assert!(!media.is_hypermedia(DEFAULT_HYPERMEDIA_MARKER), "{}", raw);
        }
    }

    #[test]
    fn test_suffix_alone_does_not_count() {
        let media = MediaType::parse("application/vnd.acme+hateoas").expect("parse");
        assert!(!media.is_hypermedia(DEFAULT_HYPERMEDIA_MARKER));
    }

    #[test]
    fn test_first_entry_and_parameters() {
        let media =
            MediaType::parse("application/json; charset=utf-8; q=0.9, text/html").expect("parse");
        assert_eq!(media.param("charset"), Some("utf-8"));
        assert_eq!(media.to_string(), "application/json; charset=utf-8; q=0.9");
    }

    #[test]
    fn test_garbage_is_rejected() {
        for raw in ["", "json", "application/", "/json", "text/html; broken", "a/+json"] {
            let err = MediaType::parse(raw).expect_err(raw);
            assert!(matches!(
                err,
                AppError::Request(RequestError::InvalidMediaType { .. })
            ));
        }
    }
}
