//! Canonical JSON bytes for hashing.
//!
//! Every digest that covers JSON (graph snapshots, trace steps, whole traces,
//! policies) routes through [`canonical_json_bytes`]. The form is:
//!
//! - object keys in byte order, at every depth;
//! - compact, with no whitespace between tokens;
//! - strings escaped the way `serde_json` escapes them;
//! - integers in decimal, floats in `serde_json`'s shortest round-trip form,
//!   with `-0.0` folded into `0.0`.
//!
//! `serde_json::Value` cannot hold NaN or infinities, so the function is
//! total.

use serde_json::{Map, Number, Value};

/// Produce canonical JSON bytes from a `serde_json::Value`.
#[must_use]
pub fn canonical_json_bytes(value: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(128);
    emit(&mut out, value);
    out
}

fn emit(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => emit_number(out, n),
        Value::String(s) => emit_str(out, s),
        Value::Array(items) => {
            out.push(b'[');
            let mut first = true;
            for item in items {
                if !first {
                    out.push(b',');
                }
                first = false;
                emit(out, item);
            }
            out.push(b']');
        }
        Value::Object(map) => emit_object(out, map),
    }
}

fn emit_object(out: &mut Vec<u8>, map: &Map<String, Value>) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

    out.push(b'{');
    let mut first = true;
    for (key, value) in entries {
        if !first {
            out.push(b',');
        }
        first = false;
        emit_str(out, key);
        out.push(b':');
        emit(out, value);
    }
    out.push(b'}');
}

fn emit_number(out: &mut Vec<u8>, n: &Number) {
    if n.is_f64() && n.as_f64() == Some(0.0) {
        out.extend_from_slice(b"0.0");
    } else {
        out.extend_from_slice(n.to_string().as_bytes());
    }
}

/// Escapes match `serde_json`'s: short forms where JSON has them, `\u00xx`
/// for other control bytes, everything else verbatim.
fn emit_str(out: &mut Vec<u8>, s: &str) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push(b'"');
    for &byte in s.as_bytes() {
        match byte {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0c => out.extend_from_slice(b"\\f"),
            0x00..=0x1f => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX[usize::from(byte >> 4)]);
                out.push(HEX[usize::from(byte & 0x0f)]);
            }
            _ => out.push(byte),
        }
    }
    out.push(b'"');
}
