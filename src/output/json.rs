use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

/// Pretty formatter that escapes every non-ASCII character as `\uXXXX`,
/// using surrogate pairs above the BMP.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Pretty-prints `value` with a single-space indent, keeping key order and
/// escaping non-ASCII text.
pub fn to_string_indent1<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = AsciiPrettyFormatter::with_indent(b" ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // output is pure ASCII at this point
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_space_indent() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"test": "jest", "postinstall": "node setup.js"}"#).unwrap();
        assert_eq!(
            to_string_indent1(&value).unwrap(),
            "{\n \"test\": \"jest\",\n \"postinstall\": \"node setup.js\"\n}"
        );
    }

    #[test]
    fn test_non_object_value() {
        assert_eq!(to_string_indent1(&json!("echo hi")).unwrap(), "\"echo hi\"");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let value = json!({"build": "echo caf\u{e9} \u{1f680}"});
        assert_eq!(
            to_string_indent1(&value).unwrap(),
            "{\n \"build\": \"echo caf\\u00e9 \\ud83d\\ude80\"\n}"
        );
    }

    #[test]
    fn test_non_ascii_keys_and_nested_arrays() {
        let value = json!({"d\u{e9}ploy": ["a", "\u{fc}"]});
        assert_eq!(
            to_string_indent1(&value).unwrap(),
            "{\n \"d\\u00e9ploy\": [\n  \"a\",\n  \"\\u00fc\"\n ]\n}"
        );
    }

    #[test]
    fn test_control_characters_still_escaped() {
        assert_eq!(
            to_string_indent1(&json!("a\n\"b\"")).unwrap(),
            "\"a\\n\\\"b\\\"\""
        );
    }
}
