// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use serde_json::json;

use crate::ast::Value;
use crate::error::CfgError;
use crate::options::WriteMode;
use crate::section::Section;

/// Render a section as config text that parses back into an equal tree.
///
/// Entries come out in insertion order, one per line, with nested sections
/// indented by one tab per level.
///
/// # Examples
/// ```
/// use harbol_cfg::{export, parse_str};
///
/// let doc = parse_str(r#""size": v[1, 2, 3, 4] "name": "demo""#).document;
/// assert_eq!(
///     export::to_text(&doc),
///     "\"size\": v[ 1.0, 2.0, 3.0, 4.0 ]\n\"name\": \"demo\"\n"
/// );
/// ```
pub fn to_text(section: &Section) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_section(&mut out, section, 0);
    out
}

/// Stream a section as config text into `writer`.
pub fn write_text<W: io::Write>(section: &Section, writer: W) -> io::Result<()> {
    let mut adapter = IoAdapter { inner: writer, error: None };
    match write_section(&mut adapter, section, 0) {
        Ok(()) => adapter.inner_flush(),
        Err(fmt::Error) => Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

/// Write a section to `path`, creating the file if needed.
///
/// # Errors
/// Returns `CfgError::FileError` when the file cannot be opened or written.
pub fn write_file(section: &Section, path: impl AsRef<Path>, mode: WriteMode) -> Result<(), CfgError> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };

    let file_error = |e: io::Error| {
        tracing::error!(path = %path.display(), error = %e, "failed to write config file");
        CfgError::FileError {
            message: format!("Failed to write config file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(501),
        }
    };

    let file = options.open(path).map_err(file_error)?;
    write_text(section, io::BufWriter::new(file)).map_err(file_error)?;
    tracing::debug!(path = %path.display(), ?mode, entries = section.len(), "wrote config file");
    Ok(())
}

/// Export a section to pretty-printed JSON.
///
/// Keys keep their order. Values map as follows:
/// - Strings, integers, floats, booleans → direct mapping
/// - Sections → nested JSON objects
/// - Color → `{"color": [r, g, b, a]}`
/// - Vector4 → `{"vector": [x, y, z, w]}`
/// - Null, and floats that are not finite → JSON null
pub fn export_to_json(section: &Section) -> String {
    format!("{:#}", section_to_json(section))
}

fn section_to_json(section: &Section) -> serde_json::Value {
    let map = section
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Section(section) => section_to_json(section),
        Value::String(s) => json!(s),
        Value::Int(n) => json!(n),
        Value::Float(n) => json!(n),
        Value::Bool(b) => json!(b),
        Value::Color(c) => json!({ "color": c }),
        Value::Vector4(v) => json!({ "vector": v }),
    }
}

fn write_section<W: fmt::Write>(out: &mut W, section: &Section, depth: usize) -> fmt::Result {
    for (key, value) in section {
        write_indent(out, depth)?;
        write_quoted(out, key)?;
        out.write_str(": ")?;
        write_value(out, value, depth)?;
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_value<W: fmt::Write>(out: &mut W, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Section(section) => {
            out.write_str("{\n")?;
            write_section(out, section, depth + 1)?;
            write_indent(out, depth)?;
            out.write_char('}')
        }
        Value::String(s) => write_quoted(out, s),
        Value::Int(n) => write!(out, "{}", n),
        Value::Float(n) => out.write_str(&format_float(*n)),
        Value::Bool(b) => write!(out, "{}", b),
        Value::Color(c) => write!(out, "c[ {}, {}, {}, {} ]", c.r, c.g, c.b, c.a),
        Value::Vector4(v) => write!(
            out,
            "v[ {}, {}, {}, {} ]",
            format_float(v.x),
            format_float(v.y),
            format_float(v.z),
            format_float(v.w)
        ),
    }
}

fn write_indent<W: fmt::Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_char('\t')?;
    }
    Ok(())
}

fn write_quoted<W: fmt::Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '"' => out.write_str("\\\"")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            '\r' => out.write_str("\\r")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

/// Shortest decimal that reads back to the same float, always with a `.` so
/// the parser classifies it as a float again.
fn format_float<F: Into<f64> + fmt::Display + Copy>(n: F) -> String {
    let mut text = n.to_string();
    if n.into().is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Bridges `fmt::Write` onto an `io::Write`, keeping the first I/O error.
struct IoAdapter<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoAdapter<W> {
    fn inner_flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: io::Write> fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Color, Vector4};
    use crate::parse_str;

    fn sample() -> Section {
        let mut inner = Section::new();
        inner.insert("width", Value::Int(800)).unwrap();
        inner.insert("scale", Value::Float(2.0)).unwrap();
        inner.insert("tint", Value::Color(Color::new(255, 0, 16, 128))).unwrap();

        let mut root = Section::new();
        root.insert("title", Value::from("say \"hi\"\n")).unwrap();
        root.insert("window", Value::Section(inner)).unwrap();
        root.insert("origin", Value::Vector4(Vector4::new(0.5, -1.0, 0.0, 3.25))).unwrap();
        root.insert("visible", Value::Bool(false)).unwrap();
        root.insert("nothing", Value::Null).unwrap();
        root
    }

    #[test]
    fn test_to_text_layout() {
        let expected = concat!(
            "\"title\": \"say \\\"hi\\\"\\n\"\n",
            "\"window\": {\n",
            "\t\"width\": 800\n",
            "\t\"scale\": 2.0\n",
            "\t\"tint\": c[ 255, 0, 16, 128 ]\n",
            "}\n",
            "\"origin\": v[ 0.5, -1.0, 0.0, 3.25 ]\n",
            "\"visible\": false\n",
            "\"nothing\": null\n",
        );
        assert_eq!(to_text(&sample()), expected);
    }

    #[test]
    fn test_to_text_reparses() {
        let doc = sample();
        let outcome = parse_str(&to_text(&doc));
        assert!(outcome.is_clean(), "{:?}", outcome);
        assert_eq!(outcome.document, doc);
    }

    #[test]
    fn test_write_text_matches_to_text() {
        let doc = sample();
        let mut buf = Vec::new();
        write_text(&doc, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_text(&doc));
    }

    #[test]
    fn test_format_float_keeps_point() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(1e30f32), "1000000000000000000000000000000.0");
    }

    #[test]
    fn test_escaped_key_round_trip() {
        let mut doc = Section::new();
        doc.insert("back\\slash\tkey", Value::Int(1)).unwrap();
        let outcome = parse_str(&to_text(&doc));
        assert_eq!(outcome.document, doc);
    }

    #[test]
    fn test_export_to_json() {
        let json_output = export_to_json(&sample());
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["title"], "say \"hi\"\n");
        assert_eq!(v["window"]["width"], 800);
        assert_eq!(v["window"]["scale"], 2.0);
        assert_eq!(v["window"]["tint"]["color"], json!([255, 0, 16, 128]));
        assert_eq!(v["origin"]["vector"], json!([0.5, -1.0, 0.0, 3.25]));
        assert_eq!(v["visible"], false);
        assert!(v["nothing"].is_null());

        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["title", "window", "origin", "visible", "nothing"]);
    }

    #[test]
    fn test_color_and_vector_serialize_as_arrays() {
        let color = Color::new(1, 2, 3, 4);
        assert_eq!(serde_json::to_value(color).unwrap(), json!([1, 2, 3, 4]));
        assert_eq!(serde_json::from_value::<Color>(json!([1, 2, 3, 4])).unwrap(), color);

        let vector = Vector4::new(0.5, -1.0, 0.0, 2.0);
        assert_eq!(serde_json::to_value(vector).unwrap(), json!([0.5, -1.0, 0.0, 2.0]));
        assert_eq!(serde_json::from_value::<Vector4>(json!([0.5, -1.0, 0.0, 2.0])).unwrap(), vector);
        assert!(serde_json::from_value::<Color>(json!([1, 2, 3])).is_err());
    }
}
