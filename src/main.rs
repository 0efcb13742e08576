//! Search-Selector command line entry point

use anyhow::{bail, Result};
use search_selector::{config, FileStore, SelectionStore, Settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("-h" | "--help")) {
        print_usage();
        return Ok(());
    }
    if matches!(args.first().map(String::as_str), Some("-V" | "--version")) {
        println!("search-selector {}", search_selector::VERSION);
        return Ok(());
    }

    // Settings load under a temporary subscriber; RUST_LOG overrides general.debug
    let settings = {
        let _guard = tracing::subscriber::set_default(subscriber(false));
        config::load()?
    };
    tracing::subscriber::set_global_default(subscriber(settings.general.debug))?;

    run(&settings, &args)
}

fn subscriber(debug: bool) -> impl tracing::Subscriber + Send + Sync {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

fn run(settings: &Settings, args: &[String]) -> Result<()> {
    let storage = FileStore::open(&settings.storage.path);
    debug!("Using preference file {}", storage.path().display());

    let mut store = SelectionStore::open(Default::default(), storage, settings.storage.key.as_str())?;

    match args.first().map(String::as_str) {
        None | Some("current") => {
            let engine = store.current_engine();
            println!("{} {} ({})", store.current_index(), engine.name, engine.id);
        }
        Some("list") => {
            for (i, engine) in store.engines().iter().enumerate() {
                let marker = if i == store.current_index() { '*' } else { ' ' };
                println!("{} {} {} ({}) {}", marker, i, engine.name, engine.id, engine.url_template);
            }
        }
        Some("use") => {
            let Some(target) = args.get(1) else {
                bail!("usage: search-selector use <index|id>");
            };
            match target.parse::<usize>() {
                Ok(index) => store.select(index)?,
                Err(_) => store.select_by_id(target)?,
            }
            let engine = store.current_engine();
            println!("{} {} ({})", store.current_index(), engine.name, engine.id);
        }
        Some("url") => {
            if args.len() < 2 {
                bail!("usage: search-selector url <query...>");
            }
            println!("{}", store.search_url(&args[1..].join(" ")));
        }
        Some(other) => {
            print_usage();
            bail!("unknown command: {}", other);
        }
    }

    Ok(())
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Search-Selector v{}
Persisted choice of the active search engine

USAGE:
    search-selector [COMMAND]

COMMANDS:
    current              Show the current engine (default)
    list                 List all engines, marking the current one
    use <index|id>       Select an engine and remember it
    url <query...>       Print the search URL for a query

ENVIRONMENT VARIABLES:
    SEARCH_SELECTOR_SETTINGS_PATH  Path to settings.yml
    SEARCH_SELECTOR_DEBUG          Enable debug logging (true/false)
    SEARCH_SELECTOR_STORAGE_PATH   Preference file location
    SEARCH_SELECTOR_STORAGE_KEY    Key the selection is stored under
"#,
        search_selector::VERSION
    );
}
