//! End-to-end browsing scenarios: catalog load through the worker, then
//! commands against the application state.

use chrono::{TimeZone, Utc};
use podcast_browser::catalog::{InMemoryCatalogSource, JsonCatalogSource};
use podcast_browser::domain::{GenreId, PodcastId};
use podcast_browser::view::derive;
use podcast_browser::worker::wait_for_response;
use podcast_browser::{
    handle_event, initialize, request_catalog, AppState, Config, Event, GenreFilter, Podcast,
    SortKey,
};
use pretty_assertions::assert_eq;
use std::num::NonZeroUsize;

fn podcast(id: u64, title: &str, genre: u32, year: i32, popularity: f64) -> Podcast {
    Podcast::new(
        PodcastId(id),
        title,
        [GenreId(genre)],
        Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
        popularity,
    )
}

fn three_shows() -> Vec<Podcast> {
    vec![
        podcast(1, "Tech Today", 1, 2023, 10.0),
        podcast(2, "Tech Weekly", 1, 2024, 5.0),
        podcast(3, "Comedy Hour", 2, 2022, 20.0),
    ]
}

fn config(page_size: usize) -> Config {
    Config {
        page_size: NonZeroUsize::new(page_size).unwrap(),
        ..Config::default()
    }
}

fn load(state: &mut AppState, podcasts: Vec<Podcast>) {
    let receiver = request_catalog(state, Box::new(InMemoryCatalogSource::new(podcasts))).unwrap();
    let response = wait_for_response(&receiver).unwrap();
    assert!(handle_event(state, &Event::WorkerResponse(response)));
}

fn ids(state: &AppState) -> Vec<u64> {
    state.view().items.iter().map(|p| p.id.0).collect()
}

#[test]
fn genre_filter_pages_then_sort_change_resets() {
    let mut state = initialize(&config(1));
    load(&mut state, three_shows());

    let view = state.set_genre(GenreFilter::Genre(GenreId(1)));
    assert_eq!((view.total_matches, view.total_pages, view.page), (2, 2, 0));
    assert_eq!(ids(&state), vec![2]);

    state.set_page(1);
    assert_eq!(ids(&state), vec![1]);

    let view = state.set_sort_key(SortKey::PopularityDesc);
    assert_eq!(view.page, 0);
    assert_eq!(ids(&state), vec![1]);
}

#[test]
fn search_without_matches_gives_single_empty_page() {
    let mut state = initialize(&config(12));
    load(&mut state, three_shows());

    let view = state.set_search("zzz");
    assert_eq!(view.total_matches, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page, 0);
    assert!(view.items.is_empty());
    assert!(state.status().is_loaded());
}

#[test]
fn every_input_change_except_page_returns_to_first_page() {
    let mut state = initialize(&config(1));
    load(&mut state, three_shows());

    let events = [
        Event::Search("e".to_string()),
        Event::Genre(GenreFilter::All),
        Event::Sort(SortKey::TitleAsc),
    ];
    for event in events {
        state.set_page(2);
        assert_eq!(state.view().page, 2);
        handle_event(&mut state, &event);
        assert_eq!(state.view().page, 0, "after {event:?}");
    }
}

#[test]
fn events_keep_view_equal_to_fresh_derivation() {
    let mut state = initialize(&config(2));
    load(&mut state, three_shows());

    let events = [
        Event::Sort(SortKey::TitleAsc),
        Event::NextPage,
        Event::Search("TECH".to_string()),
        Event::Page(9),
        Event::PreviousPage,
        Event::Genre(GenreFilter::Genre(GenreId(2))),
    ];
    for event in &events {
        handle_event(&mut state, event);
        let fresh = derive(state.catalog().as_slice(), state.view_state());
        assert_eq!(state.view(), &fresh, "after {event:?}");
    }
}

#[test]
fn json_catalog_flows_through_worker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"podcasts": [
            {"id": "10", "title": "Night Shift", "genres": [7], "updated": "2021-03-04T05:06:07Z", "popularity": 3},
            {"id": "11", "title": "Morning Brief", "genres": [8], "updated": "2024-02-01T00:00:00Z", "popularity": 8}
        ]}"#,
    )
    .unwrap();

    let mut state = initialize(&config(12));
    let receiver = request_catalog(&mut state, Box::new(JsonCatalogSource::new(&path))).unwrap();
    assert!(state.status().is_pending());

    let response = wait_for_response(&receiver).unwrap();
    handle_event(&mut state, &Event::WorkerResponse(response));

    assert_eq!(ids(&state), vec![11, 10]);
    assert_eq!(state.set_search("night").items[0].title, "Night Shift");
}

#[test]
fn broken_catalog_file_reports_failure_with_empty_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "[{").unwrap();

    let mut state = initialize(&config(12));
    let receiver = request_catalog(&mut state, Box::new(JsonCatalogSource::new(&path))).unwrap();
    let response = wait_for_response(&receiver).unwrap();

    assert!(handle_event(&mut state, &Event::WorkerResponse(response)));
    assert!(state.status().failure().is_some());
    assert!(state.view().items.is_empty());
    assert!(state.catalog().is_empty());
}
