// src/main.rs
// SAGE CORE - RESEARCH ASSISTANT
// Console loop: one query in, one structured research record out.
// Gather (Wikipedia + Web) -> Prompt -> Generate -> Normalize -> Save.

use std::io::{self, Write};

// Modules
mod brain;
mod config;
mod error;
mod normalizer;
mod record;
mod reporter;
mod scout;
mod wiki;

use brain::ResearchBrain;
use config::ResearchConfig;
use error::ResearchError;
use record::ResearchRecord;
use reporter::Reporter;
use scout::WebScout;
use wiki::WikiScout;

const OUTPUT_FILE: &str = "research_output.txt";

fn main() -> Result<(), ResearchError> {
    // Read once at startup; immutable for the process lifetime.
    let config = ResearchConfig::from_env()?;
    let brain = ResearchBrain::new(config);

    println!("Welcome to the Research Assistant!");
    println!("This tool will help you research topics using Wikipedia and web search.");

    let stdin = io::stdin();
    loop {
        print!("\nWhat would you like to research? (or type 'quit' to exit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // end of input behaves like 'quit'
        }
        let query = line.trim();
        if query.eq_ignore_ascii_case("quit") {
            break;
        }
        if query.is_empty() {
            continue;
        }

        println!("\nResearching... This may take a few moments.");
        match research_topic(&brain, query) {
            Ok(result) => {
                println!("\nResearch Results:");
                print!("{}", result);

                // A failed append is the one error nothing recovers from.
                Reporter::append_record(OUTPUT_FILE, &result)?;
                println!("\nResults have been saved to {}", OUTPUT_FILE);
            }
            Err(e) => {
                eprintln!("❌ Error during research: {}", e);
                println!("\nSorry, I couldn't complete the research. Please try again with a different query.");
            }
        }
    }

    Ok(())
}

/// One full research pass. Lookup failures degrade to placeholder text and
/// the query continues; a generation failure aborts it with the reason.
fn research_topic(brain: &ResearchBrain, query: &str) -> Result<ResearchRecord, ResearchError> {
    // 1. Factual grounding
    let wiki_result = match WikiScout::fetch_summary(query) {
        Ok(text) => text,
        Err(e) => {
            println!("⚠️ Wikipedia search failed: {}", e);
            "No Wikipedia information available.".to_string()
        }
    };

    // 2. Live web context
    let web_result = match WebScout::search(query) {
        Ok(text) => text,
        Err(e) => {
            println!("⚠️ Web search failed: {}", e);
            "No web search information available.".to_string()
        }
    };

    // 3. Prompt -> model -> record
    let combined_info = combine_context(&wiki_result, &web_result);
    let prompt = build_prompt(query, &combined_info);
    let response = brain.invoke(&prompt)?;

    let normalized = normalizer::normalize(&response);
    Ok(ResearchRecord::from_normalized(&normalized))
}

fn combine_context(wiki: &str, web: &str) -> String {
    format!("Wikipedia: {}\nWeb Search: {}", wiki, web)
}

fn build_prompt(query: &str, combined_info: &str) -> String {
    format!(
        "Task: Create a research summary based on the following information.\n\
         \n\
         Research Query: {}\n\
         \n\
         Information Sources:\n\
         {}\n\
         \n\
         Instructions:\n\
         1. Analyze the provided information\n\
         2. Create a structured research summary\n\
         3. Format the response as a valid JSON object\n\
         \n\
         Required JSON Structure:\n\
         {{\n\
             \"topic\": \"Main research topic\",\n\
             \"summary\": \"Comprehensive summary of findings\",\n\
             \"sources\": [\"List of sources used\"],\n\
             \"tools_used\": [\"Wikipedia\", \"Web Search\"]\n\
         }}\n\
         \n\
         Important:\n\
         - Ensure the response is valid JSON\n\
         - Keep the summary concise but informative\n\
         - Include all relevant sources\n\
         - List all tools used\n\
         - Do not include any text outside the JSON object",
        query, combined_info
    )
}
