//! Interactive terminal pagination over the loaded dataset.
//!
//! Alternate entry point for manual inspection; never runs alongside the
//! HTTP server. Selecting a headline runs the explainer on it, resolving
//! the API key from the environment or an interactive prompt.

use std::io::{self, Write};

use hx_core::{Error, Explainer, HeadlineRecord, Result};
use hx_dataset::DatasetStore;
use hx_inference::models::groq::{GroqExplainer, API_KEY_ENV};

const PAGE_SIZE: usize = 10;
const SEARCH_DISPLAY_LIMIT: usize = 10;

pub async fn run(store: &DatasetStore) -> Result<()> {
    if store.is_empty() {
        println!("No headlines loaded.");
        return Ok(());
    }

    let record = match select_record(store)? {
        Some(record) => record,
        None => return Ok(()),
    };

    println!("\nHeadline: {}", record.title);
    println!("Description: {}", record.description);
    println!("Link: {}\n", record.link);

    let explainer = GroqExplainer::new(Some(resolve_api_key()?))?;
    println!("Asking {} for an explanation...\n", explainer.name());
    let result = explainer.explain(record).await?;
    println!("{}", result);

    Ok(())
}

fn select_record(store: &DatasetStore) -> Result<Option<&HeadlineRecord>> {
    let total = store.len();
    let max_page = (total - 1) / PAGE_SIZE;
    let mut page = 0;

    loop {
        let (start, end) = page_bounds(page, total);

        println!("\n📄 Headlines {}-{} of {}\n", start + 1, end, total);
        for (i, record) in store.records()[start..end].iter().enumerate() {
            println!("{}. {}", start + i + 1, record.title);
        }

        println!("\nCommands:");
        println!("[number] -> select headline");
        println!("n -> next page | p -> previous page");
        println!("s -> search keyword");
        println!("q -> quit");

        let cmd = read_line("\nEnter command: ")?.to_lowercase();
        match cmd.as_str() {
            "n" if page < max_page => page += 1,
            "p" if page > 0 => page -= 1,
            "s" => {
                let keyword = read_line("Enter keyword to search: ")?;
                let matches = store.search(&keyword);
                if matches.is_empty() {
                    println!("No matches found.");
                } else {
                    println!(
                        "\n🔎 Found {} matches (showing first {}):\n",
                        matches.len(),
                        SEARCH_DISPLAY_LIMIT
                    );
                    for (i, record) in matches.iter().take(SEARCH_DISPLAY_LIMIT) {
                        println!("{}. {}", i + 1, record.title);
                    }
                }
            }
            "q" => return Ok(None),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=total).contains(&n) => return Ok(Some(&store.records()[n - 1])),
                _ => println!("Invalid command."),
            },
        }
    }
}

fn page_bounds(page: usize, total: usize) -> (usize, usize) {
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total);
    (start, end)
}

fn resolve_api_key() -> Result<String> {
    if let Some(key) = GroqExplainer::api_key_from_env() {
        return Ok(key);
    }
    println!("⚠️  {} not found in environment.", API_KEY_ENV);
    let key = read_line("🔑 Paste your Groq API key here (will NOT be saved): ")?;
    if key.is_empty() {
        return Err(Error::Config("No API key provided".to_string()));
    }
    Ok(key)
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
