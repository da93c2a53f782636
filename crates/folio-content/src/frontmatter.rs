//! Front matter extraction and parsing.

use serde_yaml::{Mapping, Value};

/// Metadata block of a content document, in source key order.
pub type Metadata = Mapping;

/// Line that opens and closes a front matter block.
const DELIMITER: &str = "---";

/// A content file split into its metadata block and markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDocument {
    /// Parsed front matter (empty when absent or malformed)
    pub metadata: Metadata,

    /// Markdown body after the front matter block
    pub body: String,
}

impl ContentDocument {
    /// Parse a document. See [`parse_document`].
    pub fn parse(source: &str) -> Self {
        parse_document(source)
    }

    /// Look up a scalar metadata field rendered as text.
    pub fn text_field(&self, key: &str) -> Option<String> {
        text_field(&self.metadata, key)
    }

    /// Look up an integer metadata field.
    pub fn int_field(&self, key: &str) -> Option<i64> {
        int_field(&self.metadata, key)
    }

    /// Look up a numeric metadata field, keeping any fraction.
    pub fn number_field(&self, key: &str) -> Option<f64> {
        number_field(&self.metadata, key)
    }

    /// Serialize the document back into front matter + body form.
    ///
    /// Parsing the result yields the same metadata values and body.
    pub fn to_source(&self) -> Result<String, serde_yaml::Error> {
        let yaml = if self.metadata.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.metadata)?
        };

        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", self.body))
    }
}

/// Split a document into front matter and body.
///
/// The text must open with a `---` line; the block ends at the next line
/// that is exactly `---`, and one newline after it is consumed. Parsing never
/// fails: a missing or unclosed block leaves the whole text as the body, and
/// YAML that does not parse into a mapping yields empty metadata.
pub fn parse_document(source: &str) -> ContentDocument {
    let Some(after_open) = strip_opening_delimiter(source) else {
        return ContentDocument {
            metadata: Metadata::new(),
            body: source.to_string(),
        };
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];

            return ContentDocument {
                metadata: parse_metadata(yaml),
                body: body.to_string(),
            };
        }
        offset += line.len();
    }

    tracing::debug!("Unclosed front matter block, treating document as plain body");

    ContentDocument {
        metadata: Metadata::new(),
        body: source.to_string(),
    }
}

/// Return the text after the opening `---` line, if there is one.
fn strip_opening_delimiter(source: &str) -> Option<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first, rest) = match source.find('\n') {
        Some(pos) => (&source[..pos], &source[pos + 1..]),
        None => (source, ""),
    };

    (first.trim_end() == DELIMITER).then_some(rest)
}

fn parse_metadata(yaml: &str) -> Metadata {
    if yaml.trim().is_empty() {
        return Metadata::new();
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Metadata::new(),
        Ok(_) => {
            tracing::warn!("Front matter is not a key/value mapping, ignoring it");
            Metadata::new()
        }
        Err(e) => {
            tracing::warn!("Invalid YAML in front matter, ignoring it: {}", e);
            Metadata::new()
        }
    }
}

/// Render a scalar metadata value as text.
///
/// Strings are returned as-is; numbers and booleans are formatted. Sequences,
/// mappings and nulls have no text form.
pub fn text_field(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read an integer metadata value, accepting numeric strings.
pub fn int_field(metadata: &Metadata, key: &str) -> Option<i64> {
    match metadata.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a numeric metadata value, accepting numeric strings.
pub fn number_field(metadata: &Metadata, key: &str) -> Option<f64> {
    match metadata.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
