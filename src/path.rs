//! Variable paths and their resolution against context data.
//!
//! A path is the text after `$`: segments separated by `.`, each an optional
//! key with an optional bracketed index.
//!
//! ```text
//! $                 // the whole data root
//! $foo.bar          // [foo, bar]
//! $foo["k-1"]       // [foo["k-1"]]
//! $["k-1"]          // [["k-1"]]  index the current object directly
//! $items[2].name    // [items[2], name]
//! ```
//!
//! Segments are parsed once, when the expression is parsed. Resolution then
//! walks the data left to right with a cursor that starts at the root.

use std::fmt;

use crate::{data::Data, error::Error};

/// Bracketed index on a path segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    /// `["field"]` - object field
    Key(String),
    /// `[N]` - array element
    Position(usize),
}

/// One `.`-separated piece of a variable path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    /// Key part, possibly empty when the segment is only an index
    pub key: String,
    pub index: Option<Index>,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        match &self.index {
            Some(Index::Key(field)) => write!(f, "[\"{field}\"]"),
            Some(Index::Position(n)) => write!(f, "[{n}]"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid variable path ${path}: {reason}")]
pub struct PathError {
    pub path: String,
    pub reason: String,
}

/// Splits a path into segments.
///
/// Empty segments are dropped, so `$` and `$.foo` address the root and
/// `$foo` respectively.
pub fn parse_path(path: &str) -> Result<Vec<PathSegment>, PathError> {
    let fail = |reason: String| PathError {
        path: path.to_string(),
        reason,
    };

    let mut segments = Vec::new();
    for raw in split_segments(path) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        segments.push(parse_segment(raw).map_err(fail)?);
    }
    Ok(segments)
}

/// Splits on `.` outside of brackets.
fn split_segments(path: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in path.char_indices() {
        match ch {
            '"' if depth > 0 => in_quotes = !in_quotes,
            '[' if !in_quotes => depth += 1,
            ']' if !in_quotes => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                parts.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&path[start..]);
    parts
}

fn parse_segment(raw: &str) -> Result<PathSegment, String> {
    let Some(open) = raw.find('[') else {
        validate_key(raw)?;
        return Ok(PathSegment {
            key: raw.to_string(),
            index: None,
        });
    };

    let key = &raw[..open];
    validate_key(key)?;

    let rest = &raw[open + 1..];
    let Some(inner) = rest.strip_suffix(']') else {
        return Err(format!("segment {raw:?} must end with ']'"));
    };
    let inner = inner.trim();

    let index = if let Some(quoted) = inner.strip_prefix('"') {
        let field = quoted
            .strip_suffix('"')
            .ok_or_else(|| format!("unterminated quoted key in {raw:?}"))?;
        if field.is_empty() || !field.chars().all(is_key_char) {
            return Err(format!("invalid quoted key {field:?}"));
        }
        Index::Key(field.to_string())
    } else if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_digit()) {
        let n = inner
            .parse::<usize>()
            .map_err(|e| format!("invalid array index {inner:?}: {e}"))?;
        Index::Position(n)
    } else {
        return Err(format!(
            "index {inner:?} must be a quoted key or a non-negative integer"
        ));
    };

    Ok(PathSegment {
        key: key.to_string(),
        index: Some(index),
    })
}

fn validate_key(key: &str) -> Result<(), String> {
    match key.chars().find(|c| !is_key_char(*c)) {
        Some(c) => Err(format!("unexpected character '{c}' in key {key:?}")),
        None => Ok(()),
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Walks `segments` through `root` and returns the data they address.
///
/// Every segment except the last must land on an object.
pub fn resolve<'a>(segments: &[PathSegment], root: &'a Data) -> Result<&'a Data, Error> {
    let mut cursor = root;
    let mut remaining = segments.iter().peekable();

    while let Some(segment) = remaining.next() {
        cursor = resolve_segment(cursor, segment)?;

        if let Some(next) = remaining.peek()
            && !matches!(cursor, Data::Object(_))
        {
            return Err(Error::TypeMismatch(format!(
                "segment {segment} resolved to {} but {next} expects an object",
                cursor.type_name()
            )));
        }
    }

    Ok(cursor)
}

fn resolve_segment<'a>(cursor: &'a Data, segment: &PathSegment) -> Result<&'a Data, Error> {
    match cursor {
        Data::Array(items) => match &segment.index {
            Some(Index::Position(n)) => element(items, *n, segment),
            None => Ok(cursor),
            Some(Index::Key(_)) => Err(Error::TypeMismatch(format!(
                "cannot use quoted key {segment} on an array"
            ))),
        },
        Data::Object(map) => match &segment.index {
            None => map
                .get(&segment.key)
                .ok_or_else(|| Error::MissingKey(segment.to_string())),
            Some(Index::Key(field)) => {
                let target = if segment.key.is_empty() {
                    map
                } else {
                    match map.get(&segment.key) {
                        Some(Data::Object(inner)) => inner,
                        Some(other) => {
                            return Err(Error::TypeMismatch(format!(
                                "cannot use quoted key {segment} on {}",
                                other.type_name()
                            )));
                        }
                        None => return Err(Error::MissingKey(segment.key.clone())),
                    }
                };
                target
                    .get(field)
                    .ok_or_else(|| Error::MissingKey(segment.to_string()))
            }
            Some(Index::Position(n)) => {
                if segment.key.is_empty() {
                    return Err(Error::TypeMismatch(format!(
                        "cannot use array index {segment} on an object"
                    )));
                }
                match map.get(&segment.key) {
                    Some(Data::Array(items)) => element(items, *n, segment),
                    Some(other) => Err(Error::TypeMismatch(format!(
                        "cannot use array index {segment} on {}",
                        other.type_name()
                    ))),
                    None => Err(Error::MissingKey(segment.key.clone())),
                }
            }
        },
        // scalars are terminal
        _ => Ok(cursor),
    }
}

fn element<'a>(items: &'a [Data], n: usize, segment: &PathSegment) -> Result<&'a Data, Error> {
    items.get(n).ok_or_else(|| Error::IndexOutOfRange {
        segment: segment.to_string(),
        index: n,
        len: items.len(),
    })
}
