// model = "claude-opus-4-5"
// created = "2026-08-04"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Field paths: dot and bracket notation for reaching nested values.
//!
//! `user.address[0].street` parses to the segments `user`, `address`, `0`,
//! `street`. Resolution is total: any miss along the way answers `None`
//! rather than failing.

use smallvec::SmallVec;

use crate::value::Value;

/// A parsed field path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    segments: SmallVec<[String; 4]>,
}

impl FieldPath {
    /// Parse a raw path. Bracket groups of word characters become dot
    /// segments (`a[0].b` reads as `a.0.b`), one leading dot is stripped,
    /// and the rest splits on `.`. Bracket groups holding anything else are
    /// kept verbatim, so they fail resolution instead of changing shape.
    pub fn parse(raw: &str) -> FieldPath {
        let normalized = normalize(raw);
        let trimmed = normalized.strip_prefix('.').unwrap_or(&normalized);
        let segments = trimmed.split('.').map(String::from).collect();
        return FieldPath { segments };
    }

    pub fn segments(&self) -> &[String] {
        return &self.segments;
    }

    /// Walk the path through a value. Missing keys, out-of-range indices,
    /// and scalar hosts all end the walk with `None`.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        return resolve_segments(&self.segments, value);
    }
}

/// Resolve a slice of segments against a value. An empty slice names the
/// value itself.
pub fn resolve_segments<'a>(segments: &[String], value: &'a Value) -> Option<&'a Value> {
    let mut current = value;
    for segment in segments {
        current = current.get(segment)?;
    }
    return Some(current);
}

/// Write a value at the location the segments name. The walk dereferences
/// every segment but the last; if any of them is missing, nothing happens.
pub fn set_value(target: &mut Value, segments: &[String], value: Value) {
    let (last, prefix) = match segments.split_last() {
        Some(pair) => pair,
        None => return,
    };
    let mut current = target;
    for segment in prefix {
        current = match current.get_mut(segment) {
            Some(next) => next,
            None => return,
        };
    }
    current.set(last, value);
}

/// Rewrite `[word]` groups to `.word`. Mirrors a `\[(\w+)\]` substitution:
/// only ASCII word characters qualify, and unmatched or non-word brackets
/// pass through untouched.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        match tail.find(']') {
            Some(close) if close > 0 && tail[..close].chars().all(is_word) => {
                out.push('.');
                out.push_str(&tail[..close]);
                rest = &tail[close + 1..];
            }
            _ => {
                out.push('[');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    return out;
}

fn is_word(c: char) -> bool {
    return c.is_ascii_alphanumeric() || c == '_';
}
