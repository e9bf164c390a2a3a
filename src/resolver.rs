// Author: Dustin Pilgrim
// License: MIT

//! Dot-path resolution against a section tree.
//!
//! A path like `window.size.width` walks nested sections. A key that itself
//! contains a dot is addressed by escaping the dot with `/` or `\`, so the path
//! `a/.b.c` names key `c` inside the section stored under `a.b`.
//!
//! Every segment is looked up in turn. An intermediate segment spelled like the
//! leaf does not end the walk early, so `x.y.x` reaches the innermost `x`.

use std::borrow::Cow;

use crate::ast::Value;
use crate::section::Section;

/// One key of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'p> {
    /// The text exactly as written in the path, escapes included.
    pub raw: &'p str,
    /// The key with escape characters before dots removed.
    pub key: Cow<'p, str>,
}

/// A path split into its section keys and final leaf key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'p> {
    segments: Vec<Segment<'p>>,
}

/// True when the byte at `i` is a dot preceded by an escape character.
fn is_escaped_dot(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'.' && i > 0 && matches!(bytes[i - 1], b'/' | b'\\')
}

fn decode_segment(raw: &str) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    let has_escape = (0..bytes.len()).any(|i| is_escaped_dot(bytes, i));
    if !has_escape {
        return Cow::Borrowed(raw);
    }

    let mut key = String::with_capacity(raw.len());
    for (i, ch) in raw.char_indices() {
        let next_is_dot = bytes.get(i + 1) == Some(&b'.');
        if matches!(ch, '/' | '\\') && next_is_dot {
            continue;
        }
        key.push(ch);
    }
    Cow::Owned(key)
}

impl<'p> KeyPath<'p> {
    /// Splits `path` at every unescaped dot.
    pub fn parse(path: &'p str) -> Self {
        let bytes = path.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;

        for i in 0..bytes.len() {
            if bytes[i] == b'.' && !is_escaped_dot(bytes, i) {
                let raw = &path[start..i];
                segments.push(Segment { raw, key: decode_segment(raw) });
                start = i + 1;
            }
        }
        let raw = &path[start..];
        segments.push(Segment { raw, key: decode_segment(raw) });

        KeyPath { segments }
    }

    pub fn segments(&self) -> &[Segment<'p>] {
        &self.segments
    }

    /// Single-key paths are looked up directly and hide `Null` values.
    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn leaf(&self) -> &str {
        // parse always yields at least one segment
        self.segments.last().map_or("", |s| s.key.as_ref())
    }

    fn split_leaf(&self) -> Option<(&Segment<'p>, &[Segment<'p>])> {
        self.segments.split_last()
    }
}

fn lookup<'a>(section: &'a Section, segment: &Segment<'_>) -> Option<&'a Value> {
    section
        .get(&segment.key)
        .or_else(|| section.get(segment.raw))
}

fn lookup_mut<'a>(section: &'a mut Section, segment: &Segment<'_>) -> Option<&'a mut Value> {
    let key = if section.contains_key(&segment.key) {
        &*segment.key
    } else {
        segment.raw
    };
    section.get_mut(key)
}

fn walk<'a>(root: &'a Section, path: &KeyPath<'_>) -> Option<&'a Value> {
    let (leaf, parents) = path.split_leaf()?;
    let mut current = root;
    for segment in parents {
        current = lookup(current, segment)?.as_section()?;
    }
    lookup(current, leaf)
}

fn walk_mut<'a>(root: &'a mut Section, path: &KeyPath<'_>) -> Option<&'a mut Value> {
    let (leaf, parents) = path.split_leaf()?;
    let mut current = root;
    for segment in parents {
        current = match lookup_mut(current, segment) {
            Some(Value::Section(child)) => child,
            _ => return None,
        };
    }
    lookup_mut(current, leaf)
}

/// Finds the value at `path`, whatever its variant.
pub fn locate<'a>(root: &'a Section, path: &str) -> Option<&'a Value> {
    walk(root, &KeyPath::parse(path))
}

/// Finds the value at `path`. A single-key path whose value is `Null` counts
/// as absent; on a multi-key path the leaf is returned whatever its variant.
pub fn resolve<'a>(root: &'a Section, path: &str) -> Option<&'a Value> {
    let key_path = KeyPath::parse(path);
    let value = walk(root, &key_path)?;
    if key_path.is_single() && value.is_null() {
        None
    } else {
        Some(value)
    }
}

pub fn resolve_mut<'a>(root: &'a mut Section, path: &str) -> Option<&'a mut Value> {
    let key_path = KeyPath::parse(path);
    let single = key_path.is_single();
    match walk_mut(root, &key_path) {
        Some(value) if single && value.is_null() => None,
        found => found,
    }
}
