//! # Context Paths
//!
//! A context path locates a value inside a (possibly deeply nested) input
//! document, e.g. `server.ssl.certificate`. Nested validators extend the
//! path they were handed so that a failure deep inside a document reports
//! its full location without every enclosing caller re-annotating it.
//!
//! ## Notation
//!
//! - Plain segments (non-empty, free of `.`, `[`, `]` and `"`) are joined
//!   with a dot: `a.b`.
//! - Any other segment is written in bracket notation with the segment
//!   JSON-quoted: `a["b.c"]`, `[""]`. This keeps empty keys and keys
//!   containing separators unambiguous.
//! - The root context is `None`; `Some("")` is treated the same way.

/// Derive the path of `segment` inside `parent`.
///
/// Pure: `parent` is borrowed and never modified.
pub fn extend(parent: Option<&str>, segment: &str) -> String {
    let parent = parent.unwrap_or_default();
    if is_plain(segment) {
        if parent.is_empty() {
            segment.to_owned()
        } else {
            format!("{parent}.{segment}")
        }
    } else {
        let quoted = serde_json::Value::String(segment.to_owned());
        format!("{parent}[{quoted}]")
    }
}

/// Split a path produced by [`extend`] back into its raw segments.
pub(crate) fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('[') {
            let mut stream = serde_json::Deserializer::from_str(after).into_iter::<String>();
            match stream.next() {
                Some(Ok(segment)) => {
                    let tail = &after[stream.byte_offset()..];
                    segments.push(segment);
                    rest = tail.strip_prefix(']').unwrap_or(tail);
                }
                // Not produced by `extend`; keep the remainder verbatim.
                _ => {
                    segments.push(rest.to_owned());
                    break;
                }
            }
        } else {
            let end = rest.find(['.', '[']).unwrap_or(rest.len());
            segments.push(rest[..end].to_owned());
            rest = &rest[end..];
        }
        rest = rest.strip_prefix('.').unwrap_or(rest);
    }

    segments
}

fn is_plain(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(['.', '[', ']', '"'])
}
