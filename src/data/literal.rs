//! Safe decoding of serialized literal fields.
//!
//! Two source fields (`aliases` on courses, `requirements` on
//! specializations) hold a list literal serialized as a string. The
//! upstream export writes these in Python repr form (single-quoted strings,
//! `True`/`False`/`None`), which the original consumer fed to `eval`. Here
//! the literal is translated into JSON text and handed to `serde_json` —
//! there is no code-evaluation path of any kind.

use serde_json::Value;

/// Decode a serialized list/dict literal into a JSON value.
///
/// Strict JSON is accepted as-is; otherwise the Python-repr quoting is
/// normalized and the result parsed as JSON. Errors carry a short reason
/// (callers wrap them with file/record context).
pub fn decode(text: &str) -> Result<Value, String> {
    if let Ok(v) = serde_json::from_str(text) {
        return Ok(v);
    }
    let normalized = normalize_python_repr(text)?;
    serde_json::from_str(&normalized).map_err(|e| format!("invalid literal: {e}"))
}

/// Decode a serialized list of strings, e.g. `"['CS-6475', 'CP']"`.
pub fn decode_string_list(text: &str) -> Result<Vec<String>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let value = decode(trimmed)?;
    let items = value.as_array().ok_or("expected a list literal")?;
    items
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("expected a string, got {v}"))
        })
        .collect()
}

/// Rewrite Python-repr quoting into JSON: single-quoted strings become
/// double-quoted, and bare `True`/`False`/`None` become their JSON
/// counterparts. Content inside strings is preserved (inner `"` escaped,
/// escaped `\'` unescaped).
fn normalize_python_repr(text: &str) -> Result<String, String> {
    #[derive(PartialEq)]
    enum State {
        Outside,
        Single,
        Double,
    }

    let mut out = String::with_capacity(text.len());
    let mut state = State::Outside;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Outside => match c {
                '\'' => {
                    out.push('"');
                    state = State::Single;
                }
                '"' => {
                    out.push('"');
                    state = State::Double;
                }
                c if c.is_ascii_alphabetic() => {
                    // Collect the bare word and map Python constants.
                    let mut word = String::from(c);
                    while let Some(&n) = chars.peek() {
                        if n.is_ascii_alphanumeric() || n == '_' {
                            word.push(n);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    match word.as_str() {
                        "True" => out.push_str("true"),
                        "False" => out.push_str("false"),
                        "None" => out.push_str("null"),
                        other => return Err(format!("unexpected bare word '{other}'")),
                    }
                }
                c => out.push(c),
            },
            State::Single => match c {
                '\\' => match chars.next() {
                    Some('\'') => out.push('\''),
                    Some(e) => {
                        out.push('\\');
                        out.push(e);
                    }
                    None => return Err("dangling escape in literal".to_string()),
                },
                '"' => out.push_str("\\\""),
                '\'' => {
                    out.push('"');
                    state = State::Outside;
                }
                c => out.push(c),
            },
            State::Double => match c {
                '\\' => {
                    out.push('\\');
                    if let Some(e) = chars.next() {
                        out.push(e);
                    }
                }
                '"' => {
                    out.push('"');
                    state = State::Outside;
                }
                c => out.push(c),
            },
        }
    }

    if state != State::Outside {
        return Err("unterminated string in literal".to_string());
    }
    Ok(out)
}
