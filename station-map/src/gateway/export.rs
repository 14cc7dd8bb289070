//! GeoJSON export artefact.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter};

use super::error::GatewayError;

/// File name offered to the user for the export download.
pub const EXPORT_FILE_NAME: &str = "charging-stations.geojson";

/// Serialise an export document for download.
///
/// The output matches `JSON.stringify(doc, null, 2)` byte for byte: two-space
/// indentation, the document's key order, and numbers written the way
/// JavaScript prints them (`22.0` as `22`, `1e21` as `1e+21`).
pub fn export_document(doc: &Value) -> Result<String, GatewayError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, StringifyFormatter::new());
    doc.serialize(&mut serializer).map_err(|e| GatewayError::Json {
        message: e.to_string(),
    })?;

    String::from_utf8(out).map_err(|e| GatewayError::Json {
        message: e.to_string(),
    })
}

/// Pretty printer with JavaScript number formatting.
struct StringifyFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl StringifyFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
        }
    }
}

/// `Number.prototype.toString` for a finite double.
///
/// Rust's `Display` and `{:e}` both print the shortest round-tripping digits,
/// as JavaScript does. JavaScript switches to exponent form outside
/// `[1e-6, 1e21)` and always signs the exponent.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

impl Formatter for StringifyFormatter<'_> {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(js_number(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}
