//! KEY=VALUE text codec for .env files.

use std::collections::BTreeMap;

use crate::error::{FormatError, Result};

/// Parse dotenv-style text into a name/value map.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. Every other line must contain `=`; name and value are trimmed,
/// and a value fully wrapped in matching single or double quotes is
/// unquoted (quoting is how interior whitespace survives the trim).
///
/// # Errors
///
/// Returns `FormatError::InvalidLine` (1-based) for a line with no `=` or
/// an empty name.
pub fn parse(text: &str) -> Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, value) = line
            .split_once('=')
            .ok_or(FormatError::InvalidLine { line: idx + 1 })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(FormatError::InvalidLine { line: idx + 1 }.into());
        }

        vars.insert(name.to_string(), unquote(value.trim()).to_string());
    }

    Ok(vars)
}

/// Format a name/value map as dotenv text, one `NAME=VALUE` line per entry,
/// sorted by name so output is deterministic. Values containing whitespace
/// or starting with `#` are double-quoted.
pub fn format(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (name, value) in vars {
        if value.chars().any(char::is_whitespace) || value.starts_with('#') {
            out.push_str(&format!("{}=\"{}\"\n", name, value));
        } else {
            out.push_str(&format!("{}={}\n", name, value));
        }
    }

    out
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
