// src/wiki.rs
// SAGE CORE - WIKI SCOUT
// Factual grounding from the Wikipedia REST API. Titles the summary
// endpoint cannot resolve go through the MediaWiki search API instead.

use serde_json::Value;

use crate::error::ResearchError;

const SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const SEARCH_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
const USER_AGENT: &str = "sage_core/0.1 (research assistant)";

pub struct WikiScout;

impl WikiScout {
    /// Fetches a short factual summary for the query.
    pub fn fetch_summary(query: &str) -> Result<String, ResearchError> {
        let url = format!("{}/{}", SUMMARY_ENDPOINT, urlencoding::encode(query));

        let response = match ureq::get(&url).set("User-Agent", USER_AGENT).call() {
            Ok(response) => response,
            // The summary endpoint 404s on unresolved titles; the search API
            // usually still finds something.
            Err(ureq::Error::Status(_, _)) => return Self::search_fallback(query),
            Err(other) => return Err(other.into()),
        };

        let body: Value = response.into_json()?;
        match body.get("extract").and_then(Value::as_str) {
            Some(extract) if !extract.is_empty() => Ok(extract.to_string()),
            _ => Self::search_fallback(query),
        }
    }

    fn search_fallback(query: &str) -> Result<String, ResearchError> {
        let url = format!(
            "{}?action=query&list=search&srsearch={}&format=json&srprop=snippet",
            SEARCH_ENDPOINT,
            urlencoding::encode(query)
        );

        let body: Value = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .call()?
            .into_json()?;

        let snippet = body["query"]["search"]
            .as_array()
            .and_then(|results| results.first())
            .and_then(|first| first.get("snippet"))
            .and_then(Value::as_str)
            .map(strip_search_markup);

        match snippet {
            Some(snippet) if !snippet.is_empty() => Ok(snippet),
            _ => Ok(format!("No Wikipedia article found for '{}'.", query)),
        }
    }
}

/// The search API highlights matches with `<span class="searchmatch">` tags.
fn strip_search_markup(snippet: &str) -> String {
    snippet
        .replace("<span class=\"searchmatch\">", "")
        .replace("</span>", "")
}
