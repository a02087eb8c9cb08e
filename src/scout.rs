// src/scout.rs
// SAGE CORE - WEB SCOUT
// Live context from DuckDuckGo's HTML search page. No API key, no JS: the
// result list is plain markup read with a couple of selectors.

use scraper::{Html, Selector};

use crate::error::ResearchError;

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const MAX_RESULTS: usize = 5;

pub struct WebScout;

impl WebScout {
    /// Runs one search and returns the top results as a labelled text block.
    pub fn search(query: &str) -> Result<String, ResearchError> {
        let body = ureq::post(SEARCH_ENDPOINT)
            .set("User-Agent", USER_AGENT)
            .set("Accept", "text/html")
            .send_form(&[("q", query)])?
            .into_string()?;

        let results = parse_results(&body, MAX_RESULTS);
        if results.is_empty() {
            return Ok(format!("No web results found for '{}'.", query));
        }
        Ok(results.join("\n\n"))
    }
}

/// Pulls `title / url / snippet` triples out of the result page.
fn parse_results(html: &str, max_results: usize) -> Vec<String> {
    let doc = Html::parse_document(html);

    let result_sel = Selector::parse(".result").unwrap();
    let link_sel = Selector::parse("a.result__a").unwrap();
    let snippet_sel = Selector::parse("a.result__snippet, .result__snippet").unwrap();

    let mut results = Vec::new();
    for result in doc.select(&result_sel).take(max_results) {
        let title = result
            .select(&link_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();
        let title = title.trim();

        let href = result
            .select(&link_sel)
            .next()
            .and_then(|el| el.value().attr("href"))
            .unwrap_or("");
        let url = resolve_redirect(href);

        let snippet = result
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();
        let snippet = snippet.trim();

        if !title.is_empty() {
            results.push(format!("{}\n  {}\n  {}", title, url, snippet));
        }
    }
    results
}

/// DuckDuckGo wraps destinations in redirect links like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
fn resolve_redirect(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let start = pos + 5;
        let end = href[start..]
            .find('&')
            .map(|i| start + i)
            .unwrap_or(href.len());
        let encoded = &href[start..end];
        if !encoded.is_empty() {
            if let Ok(decoded) = urlencoding::decode(encoded) {
                return decoded.into_owned();
            }
        }
    }
    href.to_string()
}
