// src/normalizer.rs
// JSON RECOVERY
// Hosted model output is untrusted: prose wrappers, markdown fences,
// truncated objects. Whatever comes in, something usable comes out.

use serde_json::{json, Value};

pub const FALLBACK_TOPIC: &str = "Research Topic";
pub const FALLBACK_SUMMARY: &str = "No summary available";
pub const FALLBACK_SOURCE: &str = "Information from search results";
pub const FALLBACK_TOOLS: [&str; 2] = ["Wikipedia", "Web Search"];

const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Turns raw model output into a JSON value, salvaging what it can.
///
/// 1. Parse the whole response as-is.
/// 2. Cut the span from the first `{` to the last `}`, strip markdown
///    fence markers, trim, and parse that.
/// 3. Build a stand-in object carrying a preview of the raw text.
///
/// The span match is greedy on purpose: lenient capture over strictness.
/// Never fails, holds no state.
pub fn normalize(raw: &str) -> Value {
    if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
        return parsed;
    }

    if let Some(candidate) = extract_json_span(raw) {
        let cleaned = candidate
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string();
        if let Ok(parsed) = serde_json::from_str::<Value>(&cleaned) {
            return parsed;
        }
    }

    fallback_object(raw)
}

fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

fn fallback_object(raw: &str) -> Value {
    let summary = if raw.chars().count() > SUMMARY_PREVIEW_CHARS {
        let head: String = raw.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        raw.to_string()
    };

    json!({
        "topic": FALLBACK_TOPIC,
        "summary": summary,
        "sources": [FALLBACK_SOURCE],
        "tools_used": FALLBACK_TOOLS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_passes_through_untouched() {
        let raw = r#"{"topic":"Rust","summary":"A language","sources":["a"],"tools_used":["Wikipedia"]}"#;
        let value = normalize(raw);
        assert_eq!(value, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn fenced_json_matches_unfenced_parse() {
        let inner = r#"{"topic":"Rust","summary":"s","sources":["x"],"tools_used":["y"]}"#;
        let fenced = format!("```json\n{}\n```", inner);
        assert_eq!(normalize(&fenced), normalize(inner));
    }

    #[test]
    fn json_wrapped_in_prose_is_recovered() {
        let raw = "Sure! Here is the summary you asked for:\n\
                   {\"topic\":\"Tea\",\"summary\":\"Leaves\",\"sources\":[\"s\"],\"tools_used\":[\"t\"]}\n\
                   Let me know if you need anything else.";
        let value = normalize(raw);
        assert_eq!(value["topic"], "Tea");
        assert_eq!(value["summary"], "Leaves");
    }

    #[test]
    fn braceless_input_becomes_fallback() {
        let raw = "The model had nothing structured to say.";
        let value = normalize(raw);
        assert_eq!(value["topic"], FALLBACK_TOPIC);
        assert_eq!(value["summary"], raw);
        assert_eq!(value["sources"][0], FALLBACK_SOURCE);
        assert_eq!(value["tools_used"][0], "Wikipedia");
        assert_eq!(value["tools_used"][1], "Web Search");
    }

    #[test]
    fn long_braceless_input_is_truncated_with_ellipsis() {
        let raw = "x".repeat(300);
        let value = normalize(&raw);
        let summary = value["summary"].as_str().unwrap();
        assert_eq!(summary.chars().count(), 203);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn short_input_is_kept_verbatim() {
        assert_eq!(normalize("short")["summary"], "short");
    }

    #[test]
    fn two_objects_overcapture_and_fall_back() {
        // The span runs from the first '{' to the LAST '}', so two separate
        // objects produce one unparseable candidate.
        let raw = r#"{"topic":"A"} and also {"topic":"B"}"#;
        let value = normalize(raw);
        assert_eq!(value["topic"], FALLBACK_TOPIC);
        assert_eq!(value["summary"], raw);
    }

    #[test]
    fn close_brace_before_open_brace_falls_back() {
        let raw = "} dangling {";
        assert_eq!(normalize(raw)["topic"], FALLBACK_TOPIC);
    }

    #[test]
    fn normalize_is_idempotent_per_input() {
        let raw = "noise {\"topic\": \"T\"} noise";
        assert_eq!(normalize(raw), normalize(raw));
    }
}
