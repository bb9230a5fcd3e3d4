use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::RegistrationError;

/// One component of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Static(String),
    Param(String),
}

impl Segment {
    fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }
}

/// Parsed route pattern such as `/stock/:symbol`.
///
/// `/` is the pattern with no segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(input: &str) -> Result<Self, RegistrationError> {
        let Some(rest) = input.strip_prefix('/') else {
            return Err(RegistrationError::invalid_pattern(
                input,
                "pattern must start with '/'",
            ));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(RegistrationError::invalid_pattern(
                        input,
                        "pattern contains an empty segment",
                    ));
                }

                match part.strip_prefix(':') {
                    Some("") => {
                        return Err(RegistrationError::invalid_pattern(
                            input,
                            "parameter segment needs a name",
                        ));
                    }
                    Some(name) => {
                        let duplicate = segments
                            .iter()
                            .any(|segment| matches!(segment, Segment::Param(existing) if existing == name));
                        if duplicate {
                            return Err(RegistrationError::invalid_pattern(
                                input,
                                format!("parameter '{name}' is declared twice"),
                            ));
                        }
                        segments.push(Segment::Param(name.to_owned()));
                    }
                    None => segments.push(Segment::Static(part.to_owned())),
                }
            }
        }

        Ok(Self {
            raw: input.to_owned(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(Segment::is_param)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Whether some path could be matched by both patterns.
    ///
    /// Besides equal-length patterns, a pattern ending in a parameter
    /// overlaps the pattern one segment shorter: `/stock/` matches both
    /// `/stock` (trailing slash) and `/stock/:symbol` (absent symbol).
    pub fn overlaps(&self, other: &Self) -> bool {
        let (shorter, longer) = if self.segments.len() <= other.segments.len() {
            (&self.segments, &other.segments)
        } else {
            (&other.segments, &self.segments)
        };

        match longer.len() - shorter.len() {
            0 => segments_overlap(shorter, longer),
            1 => {
                matches!(longer.last(), Some(Segment::Param(_)))
                    && segments_overlap(shorter, &longer[..shorter.len()])
            }
            _ => false,
        }
    }

    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        extract_params(self, path)
    }
}

fn segments_overlap(left: &[Segment], right: &[Segment]) -> bool {
    left.iter().zip(right).all(|pair| match pair {
        (Segment::Static(left), Segment::Static(right)) => left == right,
        _ => true,
    })
}

impl Display for RoutePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Dynamic segment values bound by a successful match.
///
/// A parameter whose path segment was empty is absent rather than bound to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Strip the query string and fragment from a request target.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Match `path` against `pattern`, binding its dynamic segments.
///
/// One trailing slash after a non-empty segment is tolerated when the
/// pattern has no segment for it, so `/screener/` matches `/screener` while
/// `/stock/` still reaches `/stock/:symbol` with `symbol` absent. `/stock//`
/// matches neither.
pub fn extract_params(pattern: &RoutePattern, path: &str) -> Option<RouteParams> {
    let rest = normalize_path(path).strip_prefix('/')?;
    let mut parts = rest.split('/').collect::<Vec<_>>();

    let expected = pattern.segments.len();
    let trailing_slash = match parts.as_slice() {
        [.., before, ""] => !before.is_empty(),
        [""] => true,
        _ => false,
    };
    if parts.len() == expected + 1 && trailing_slash {
        parts.pop();
    }
    if parts.len() != expected {
        return None;
    }

    let mut params = RouteParams::new();
    for (segment, part) in pattern.segments.iter().zip(parts) {
        match segment {
            Segment::Static(text) => {
                if text != part {
                    return None;
                }
            }
            Segment::Param(name) => {
                if part.is_empty() {
                    continue;
                }
                let value = urlencoding::decode(part)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| part.to_owned());
                params.0.insert(name.clone(), value);
            }
        }
    }

    Some(params)
}
