//! Line-oriented terminal host for the podcast browser.
//!
//! Thin integration layer: it loads configuration, starts the catalog fetch
//! on the worker thread, translates stdin commands into library [`Event`]s and
//! prints the derived page whenever [`handle_event`] reports a change.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read `config.toml` from the data directory (if present), apply
//!    the command-line catalog path, initialize tracing, create `AppState`
//! 2. **Fetch**: Spawn the catalog worker and wait for its single response
//! 3. **Loop**: Read commands, dispatch events, render on change
//!
//! # Usage
//!
//! ```text
//! podcast-browser [CATALOG_JSON]
//! ```
//!
//! # Commands
//!
//! - `search <text>`: Replace the search text (`search` alone clears it)
//! - `genre <id|all>`: Filter by genre
//! - `sort <title-asc|date-desc|popularity-desc>`: Change the ordering
//! - `page <n>`: Jump to page `n` (1-based)
//! - `next` / `prev`: Step through pages
//! - `genres` / `sorts`: List the available choices
//! - `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use chrono::Utc;
use podcast_browser::catalog::{CatalogSource, InMemoryCatalogSource, JsonCatalogSource, LoadStatus};
use podcast_browser::domain::{genre, GENRES};
use podcast_browser::view::SORT_OPTIONS;
use podcast_browser::worker::wait_for_response;
use podcast_browser::{
    handle_event, initialize, request_catalog, AppState, BrowserError, Config, Event, GenreFilter,
    SortKey,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Name of the optional configuration file inside the data directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// A parsed stdin line.
enum Input {
    Event(Event),
    ListGenres,
    ListSorts,
    Quit,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("podcast-browser: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), BrowserError> {
    let config = load_config()?;
    podcast_browser::observability::init_tracing(&config);

    let span = tracing::debug_span!("browser_session");
    let _guard = span.entered();

    let mut state = initialize(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    render(&mut out, &state)?;

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonCatalogSource::new(path.clone())),
        None => Box::new(InMemoryCatalogSource::failing(
            "no catalog configured; pass a JSON file path",
        )),
    };
    let receiver = request_catalog(&mut state, source)?;
    let response = wait_for_response(&receiver)?;
    if handle_event(&mut state, &Event::WorkerResponse(response)) {
        render(&mut out, &state)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_input(&line) {
            Ok(Some(Input::Event(event))) => {
                if handle_event(&mut state, &event) {
                    render(&mut out, &state)?;
                }
            }
            Ok(Some(Input::ListGenres)) => {
                for genre in GENRES {
                    writeln!(out, "  {:>2}  {}", genre.id.0, genre.title)?;
                }
            }
            Ok(Some(Input::ListSorts)) => {
                for option in SORT_OPTIONS {
                    writeln!(out, "  {:<16} {}", option.key.as_str(), option.label)?;
                }
            }
            Ok(Some(Input::Quit)) => break,
            Ok(None) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    tracing::debug!("session ended");
    Ok(())
}

/// Builds the configuration from the data-directory file and command line.
fn load_config() -> Result<Config, BrowserError> {
    let config_path = podcast_browser::infrastructure::get_data_dir().join(CONFIG_FILE_NAME);
    let mut config = if config_path.is_file() {
        Config::from_toml_file(&config_path)?
    } else {
        Config::default()
    };

    if let Some(catalog) = std::env::args().nth(1) {
        config.catalog_path = Some(podcast_browser::infrastructure::expand_tilde(&catalog));
    }
    Ok(config)
}

/// Parses one stdin line. Blank lines yield `None`.
fn parse_input(line: &str) -> Result<Option<Input>, BrowserError> {
    let line = line.trim_start();
    let (command, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line.trim_end(), ""), |(command, rest)| (command, rest.trim_start()));

    let input = match command {
        "" => return Ok(None),
        "search" | "/" => Input::Event(Event::Search(argument.to_string())),
        "genre" => Input::Event(Event::Genre(argument.parse::<GenreFilter>()?)),
        "sort" => Input::Event(Event::Sort(argument.parse::<SortKey>()?)),
        "page" => {
            let page = argument
                .trim()
                .parse::<usize>()
                .map_err(|_| BrowserError::InvalidInput(format!("not a page number: {argument:?}")))?;
            Input::Event(Event::Page(page.saturating_sub(1)))
        }
        "next" | "n" => Input::Event(Event::NextPage),
        "prev" | "p" => Input::Event(Event::PreviousPage),
        "genres" => Input::ListGenres,
        "sorts" => Input::ListSorts,
        "quit" | "q" => Input::Quit,
        other => {
            return Err(BrowserError::InvalidInput(format!("unknown command: {other:?}")));
        }
    };
    Ok(Some(input))
}

/// Prints the load status, or the current page of podcasts.
fn render(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    match state.status() {
        LoadStatus::Pending => return writeln!(out, "Loading podcasts..."),
        LoadStatus::Failed(failure) => return writeln!(out, "Could not load podcasts: {failure}"),
        LoadStatus::Loaded => {}
    }

    let view = state.view();
    if view.is_empty() {
        return writeln!(out, "No podcasts match your search.");
    }

    let now = Utc::now();
    for podcast in &view.items {
        writeln!(
            out,
            "{} | {} | {}",
            podcast.title,
            genre::titles_for(podcast).join(", "),
            podcast.updated_ago(now)
        )?;
    }

    let view_state = state.view_state();
    writeln!(
        out,
        "Page {}/{} ({} matches, genre {}, sorted by {})",
        view.page + 1,
        view.total_pages,
        view.total_matches,
        view_state.genre,
        view_state.sort_key.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(line: &str) -> Event {
        match parse_input(line) {
            Ok(Some(Input::Event(event))) => event,
            _ => panic!("{line:?} did not parse to an event"),
        }
    }

    #[test]
    fn extra_spaces_after_command_are_ignored() {
        assert_eq!(event("search  tech"), Event::Search("tech".to_string()));
        assert_eq!(event("  search\t tech talk"), Event::Search("tech talk".to_string()));
        assert_eq!(event("genre   3"), Event::Genre("3".parse().unwrap()));
        assert_eq!(event("sort    title-asc"), Event::Sort(SortKey::TitleAsc));
    }

    #[test]
    fn bare_search_clears_and_pages_are_one_based() {
        assert_eq!(event("search"), Event::Search(String::new()));
        assert_eq!(event("page 1"), Event::Page(0));
        assert_eq!(event("page 0"), Event::Page(0));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert!(matches!(parse_input("   "), Ok(None)));
        assert!(matches!(parse_input("play 3"), Err(BrowserError::InvalidInput(_))));
        assert!(matches!(parse_input("genre rock"), Err(BrowserError::InvalidInput(_))));
    }
}
