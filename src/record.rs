// src/record.rs
// The one entity in the system. Built fresh per query, shown once,
// appended once, then dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalizer::{FALLBACK_SOURCE, FALLBACK_SUMMARY, FALLBACK_TOOLS, FALLBACK_TOPIC};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRecord {
    pub topic: String,
    pub summary: String,
    pub sources: Vec<String>,
    pub tools_used: Vec<String>,
}

impl ResearchRecord {
    /// Builds a fully-populated record from whatever `normalize` produced,
    /// defaulting each missing or unusable field on its own. The lists are
    /// never left empty.
    pub fn from_normalized(value: &Value) -> Self {
        let topic = value
            .get("topic")
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_TOPIC)
            .to_string();

        let summary = value
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_SUMMARY)
            .to_string();

        let sources = string_list(value.get("sources"))
            .unwrap_or_else(|| vec![FALLBACK_SOURCE.to_string()]);

        let tools_used = string_list(value.get("tools_used"))
            .unwrap_or_else(|| FALLBACK_TOOLS.iter().map(|t| t.to_string()).collect());

        Self {
            topic,
            summary,
            sources,
            tools_used,
        }
    }
}

/// Collects the string entries of a JSON array. `None` when the value is
/// absent, not an array, or holds no strings at all, so the caller can
/// substitute its fallback.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items: Vec<String> = value?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

// One rendering for both the console and the output file.
impl fmt::Display for ResearchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Topic: {}", self.topic)?;
        writeln!(f)?;
        writeln!(f, "Summary: {}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Sources:")?;
        for source in &self.sources {
            writeln!(f, "- {}", source)?;
        }
        writeln!(f)?;
        writeln!(f, "Tools Used:")?;
        for tool in &self.tools_used {
            writeln!(f, "- {}", tool)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn present_fields_are_preserved_verbatim() {
        let value = json!({
            "topic": "Python programming language",
            "summary": "A general-purpose language.",
            "sources": ["https://en.wikipedia.org/wiki/Python_(programming_language)"],
            "tools_used": ["Wikipedia"],
        });
        let record = ResearchRecord::from_normalized(&value);
        assert_eq!(record.topic, "Python programming language");
        assert_eq!(record.summary, "A general-purpose language.");
        assert_eq!(record.sources.len(), 1);
        // The model named its own tool list; it must not be replaced.
        assert_eq!(record.tools_used, vec!["Wikipedia".to_string()]);
    }

    #[test]
    fn missing_keys_get_documented_defaults() {
        let value = json!({"topic": "X", "summary": "Y"});
        let record = ResearchRecord::from_normalized(&value);
        assert_eq!(record.topic, "X");
        assert_eq!(record.summary, "Y");
        assert_eq!(record.sources, vec![FALLBACK_SOURCE.to_string()]);
        assert_eq!(
            record.tools_used,
            vec!["Wikipedia".to_string(), "Web Search".to_string()]
        );
    }

    #[test]
    fn empty_or_stringless_lists_get_defaults() {
        let value = json!({"sources": [], "tools_used": [1, 2, 3]});
        let record = ResearchRecord::from_normalized(&value);
        assert_eq!(record.sources, vec![FALLBACK_SOURCE.to_string()]);
        assert_eq!(record.tools_used.len(), 2);
    }

    #[test]
    fn non_object_value_defaults_every_field() {
        let record = ResearchRecord::from_normalized(&json!(42));
        assert_eq!(record.topic, FALLBACK_TOPIC);
        assert_eq!(record.summary, FALLBACK_SUMMARY);
        assert!(!record.sources.is_empty());
        assert!(!record.tools_used.is_empty());
    }

    #[test]
    fn rendering_lists_one_entry_per_line() {
        let record = ResearchRecord {
            topic: "T".to_string(),
            summary: "S".to_string(),
            sources: vec!["one".to_string(), "two".to_string()],
            tools_used: vec!["Wikipedia".to_string()],
        };
        let text = record.to_string();
        assert!(text.starts_with("Topic: T\n"));
        assert!(text.contains("Summary: S\n"));
        assert!(text.contains("Sources:\n- one\n- two\n"));
        assert!(text.contains("Tools Used:\n- Wikipedia\n"));
    }
}
