//! Purpose: Render decoded tokens for human terminal output.
//! Exports: `render_token`, `render_value`, `colorize_label`, `AnsiColor`.
//! Role: Presentation layer over the pure decode core; CLI emission only.
//! Invariants: When color is disabled, JSON output equals serde_json::to_string_pretty.
//! Invariants: ANSI escapes appear only when explicitly enabled.
//! Invariants: Timestamp echoes are display-only; no claim is ever validated.
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use tokenlens::api::DecodedToken;

const INDENT: &str = "  ";

// Conservative 8/16-color palette for broad terminal compatibility.
// Avoid bright variants that can lose contrast on themes like Solarized.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";
const COLOR_SECTION: &str = "36";
const COLOR_TIME: &str = "33";

// Registered claims that hold seconds-since-epoch values.
const TIME_CLAIMS: [&str; 3] = ["iat", "nbf", "exp"];

#[derive(Clone, Copy, Debug)]
pub(crate) enum AnsiColor {
    Red,
    Yellow,
}

pub(crate) fn colorize_label(label: &str, use_color: bool, color: AnsiColor) -> String {
    if !use_color {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

/// Render the three parts of a decoded token as labeled blocks, in the
/// order they appear in the token.
pub(crate) fn render_token(token: &DecodedToken, use_color: bool) -> String {
    let mut out = String::new();

    push_section("header", use_color, &mut out);
    out.push_str(&render_value(&token.header, use_color));
    out.push('\n');

    out.push('\n');
    push_section("payload", use_color, &mut out);
    out.push_str(&render_value(&token.payload, use_color));
    out.push('\n');
    for line in time_claim_lines(&token.payload, use_color) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    push_section("signature", use_color, &mut out);
    if token.signature.is_empty() {
        out.push_str("(empty)");
    } else {
        out.push_str(&token.signature);
    }
    out.push('\n');

    out
}

/// Pretty-print a JSON value with optional ANSI colorization.
pub(crate) fn render_value(value: &Value, use_color: bool) -> String {
    let mut out = String::new();
    write_value(value, 0, use_color, &mut out);
    out
}

// Top-level integer time claims get one echo line each, e.g.
// `  exp  1516239022  2018-01-18T01:30:22Z`. Out-of-range values are
// skipped rather than guessed at.
fn time_claim_lines(payload: &Value, use_color: bool) -> Vec<String> {
    let Some(map) = payload.as_object() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for claim in TIME_CLAIMS {
        let Some(seconds) = map.get(claim).and_then(Value::as_i64) else {
            continue;
        };
        let Some(rendered) = rfc3339_from_unix(seconds) else {
            continue;
        };
        let line = format!("{INDENT}{claim:<4} {seconds}  {rendered}");
        lines.push(if use_color {
            format!("\u{1b}[{COLOR_TIME}m{line}\u{1b}[0m")
        } else {
            line
        });
    }
    lines
}

fn rfc3339_from_unix(seconds: i64) -> Option<String> {
    let ts = OffsetDateTime::from_unix_timestamp(seconds).ok()?;
    ts.format(&Rfc3339).ok()
}

fn push_section(name: &str, use_color: bool, out: &mut String) {
    push_colored(name, COLOR_SECTION, use_color, out);
    out.push('\n');
}

fn write_value(value: &Value, indent: usize, use_color: bool, out: &mut String) {
    match value {
        Value::Null => push_colored("null", COLOR_NULL, use_color, out),
        Value::Bool(val) => {
            let text = if *val { "true" } else { "false" };
            push_colored(text, COLOR_BOOL, use_color, out);
        }
        Value::Number(num) => push_colored(&num.to_string(), COLOR_NUMBER, use_color, out),
        Value::String(text) => {
            let encoded = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
            push_colored(&encoded, COLOR_STRING, use_color, out);
        }
        Value::Array(items) => write_array(items, indent, use_color, out),
        Value::Object(map) => write_object(map, indent, use_color, out),
    }
}

fn write_array(items: &[Value], indent: usize, use_color: bool, out: &mut String) {
    if items.is_empty() {
        push_colored("[]", COLOR_PUNCT, use_color, out);
        return;
    }
    push_colored("[", COLOR_PUNCT, use_color, out);
    out.push('\n');
    for (idx, item) in items.iter().enumerate() {
        push_indent(indent + 1, out);
        write_value(item, indent + 1, use_color, out);
        if idx + 1 < items.len() {
            push_colored(",", COLOR_PUNCT, use_color, out);
        }
        out.push('\n');
    }
    push_indent(indent, out);
    push_colored("]", COLOR_PUNCT, use_color, out);
}

fn write_object(
    map: &serde_json::Map<String, Value>,
    indent: usize,
    use_color: bool,
    out: &mut String,
) {
    if map.is_empty() {
        push_colored("{}", COLOR_PUNCT, use_color, out);
        return;
    }
    push_colored("{", COLOR_PUNCT, use_color, out);
    out.push('\n');
    let len = map.len();
    for (idx, (key, value)) in map.iter().enumerate() {
        push_indent(indent + 1, out);
        let encoded = serde_json::to_string(key).unwrap_or_else(|_| "\"\"".to_string());
        push_colored(&encoded, COLOR_KEY, use_color, out);
        push_colored(":", COLOR_PUNCT, use_color, out);
        out.push(' ');
        write_value(value, indent + 1, use_color, out);
        if idx + 1 < len {
            push_colored(",", COLOR_PUNCT, use_color, out);
        }
        out.push('\n');
    }
    push_indent(indent, out);
    push_colored("}", COLOR_PUNCT, use_color, out);
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn push_colored(text: &str, color: &str, use_color: bool, out: &mut String) {
    if !use_color {
        out.push_str(text);
        return;
    }
    out.push_str("\u{1b}[");
    out.push_str(color);
    out.push('m');
    out.push_str(text);
    out.push_str("\u{1b}[0m");
}

#[cfg(test)]
mod tests {
    use super::{render_token, render_value, time_claim_lines};
    use serde_json::json;
    use tokenlens::api::DecodedToken;

    #[test]
    fn render_value_matches_pretty_when_color_disabled() {
        let value = json!({
            "arr": [1, true, null],
            "nested": { "x": "y" }
        });
        let plain = render_value(&value, false);
        let pretty = serde_json::to_string_pretty(&value).expect("pretty");
        assert_eq!(plain, pretty);
    }

    #[test]
    fn render_value_emits_ansi_when_enabled() {
        let value = json!({"k":"v","n":1,"b":true,"z":null});
        let colored = render_value(&value, true);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("\u{1b}[36m\"k\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[32m\"v\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[33m1\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[35mtrue\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[39mnull\u{1b}[0m"));
    }

    #[test]
    fn token_blocks_appear_in_token_order() {
        let token = DecodedToken {
            header: json!({"alg": "HS256"}),
            payload: json!({"sub": "1234567890"}),
            signature: "sig".to_string(),
        };
        let rendered = render_token(&token, false);
        let header_at = rendered.find("header\n").expect("header block");
        let payload_at = rendered.find("payload\n").expect("payload block");
        let signature_at = rendered.find("signature\nsig").expect("signature block");
        assert!(header_at < payload_at);
        assert!(payload_at < signature_at);
    }

    #[test]
    fn empty_signature_renders_placeholder() {
        let token = DecodedToken {
            header: json!({}),
            payload: json!({}),
            signature: String::new(),
        };
        let rendered = render_token(&token, false);
        assert!(rendered.contains("signature\n(empty)\n"));
    }

    #[test]
    fn time_claims_are_echoed_with_rfc3339() {
        let payload = json!({"sub": "x", "iat": 1516239022, "exp": 1516242622});
        let lines = time_claim_lines(&payload, false);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("iat"));
        assert!(lines[0].contains("2018-01-18T01:30:22Z"));
        assert!(lines[1].contains("exp"));
    }

    #[test]
    fn non_integer_and_out_of_range_claims_are_skipped() {
        let payload = json!({"iat": "soon", "exp": 999999999999999999i64});
        assert!(time_claim_lines(&payload, false).is_empty());
    }

    #[test]
    fn non_object_payload_has_no_time_claims() {
        assert!(time_claim_lines(&json!([1, 2, 3]), false).is_empty());
    }
}
