//! Static genre reference list.
//!
//! Genres are a fixed enumeration shipped with the application. Presentation
//! uses [`GENRES`] to populate the genre picker; the filter stage only ever
//! compares ids, so a podcast may carry ids that are not listed here.

use super::podcast::{GenreId, Podcast};

/// A genre the user can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub title: &'static str,
}

/// Every selectable genre, in picker order.
pub const GENRES: &[Genre] = &[
    Genre { id: GenreId(1), title: "Personal Growth" },
    Genre { id: GenreId(2), title: "Investigative Journalism" },
    Genre { id: GenreId(3), title: "History" },
    Genre { id: GenreId(4), title: "Comedy" },
    Genre { id: GenreId(5), title: "Entertainment" },
    Genre { id: GenreId(6), title: "Business" },
    Genre { id: GenreId(7), title: "Fiction" },
    Genre { id: GenreId(8), title: "News" },
    Genre { id: GenreId(9), title: "Kids and Family" },
];

/// Looks up a genre by id.
///
/// # Examples
///
/// ```
/// use podcast_browser::domain::{genre, GenreId};
///
/// assert_eq!(genre::find(GenreId(3)).map(|g| g.title), Some("History"));
/// assert!(genre::find(GenreId(42)).is_none());
/// ```
#[must_use]
pub fn find(id: GenreId) -> Option<&'static Genre> {
    GENRES.iter().find(|genre| genre.id == id)
}

/// Returns the display titles of a podcast's genres, skipping unknown ids.
#[must_use]
pub fn titles_for(podcast: &Podcast) -> Vec<&'static str> {
    podcast
        .genres
        .iter()
        .filter_map(|id| find(*id))
        .map(|genre| genre.title)
        .collect()
}
