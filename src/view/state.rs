//! User-controlled view inputs and the pure reducer that updates them.
//!
//! [`ViewState`] holds the four inputs a user can change: search text, genre
//! filter, sort key and page. It is a plain value; [`ViewState::apply`] takes a
//! [`Command`] and returns the next state, enforcing the page-reset rule.
//!
//! # Example
//!
//! ```rust
//! use podcast_browser::view::{Command, SortKey, ViewState};
//! use std::num::NonZeroUsize;
//!
//! let state = ViewState::new(NonZeroUsize::new(12).unwrap(), SortKey::DateDesc)
//!     .apply(Command::SetPage(3))
//!     .apply(Command::SetSortKey(SortKey::TitleAsc));
//! assert_eq!(state.page, 0);
//! ```

use crate::domain::{BrowserError, GenreId};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Token used for the "every genre" selection.
pub const ALL_GENRES: &str = "all";

/// Genre selection: every genre, or a single genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(GenreId),
}

impl FromStr for GenreFilter {
    type Err = BrowserError;

    /// Parses `"all"` (case-insensitive) or a numeric genre id.
    ///
    /// Unknown numeric ids are accepted; they simply match nothing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case(ALL_GENRES) {
            return Ok(Self::All);
        }
        token
            .parse()
            .map(|id| Self::Genre(GenreId(id)))
            .map_err(|_| BrowserError::InvalidInput(format!("unknown genre selection: {s:?}")))
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_GENRES),
            Self::Genre(id) => write!(f, "{id}"),
        }
    }
}

/// Selectable orderings.
///
/// Each key maps to exactly one comparator in [`crate::view::sort`] and one
/// entry in [`SORT_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Title A–Z, case-insensitive.
    TitleAsc,
    /// Most recently updated first.
    #[default]
    DateDesc,
    /// Highest popularity first.
    PopularityDesc,
}

impl SortKey {
    /// Returns the stable token for this key (`title-asc`, `date-desc`, `popularity-desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::DateDesc => "date-desc",
            Self::PopularityDesc => "popularity-desc",
        }
    }

    /// Returns the label shown in the sort picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TitleAsc => "A–Z",
            Self::DateDesc => "Newest",
            Self::PopularityDesc => "Most popular",
        }
    }
}

impl FromStr for SortKey {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SORT_OPTIONS
            .iter()
            .map(|option| option.key)
            .find(|key| key.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| BrowserError::InvalidInput(format!("unknown sort key: {s:?}")))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort choice as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub key: SortKey,
    pub label: &'static str,
}

/// Every selectable ordering, in picker order.
pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption { key: SortKey::TitleAsc, label: SortKey::TitleAsc.label() },
    SortOption { key: SortKey::DateDesc, label: SortKey::DateDesc.label() },
    SortOption { key: SortKey::PopularityDesc, label: SortKey::PopularityDesc.label() },
];

/// A single user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetSearch(String),
    SetGenre(GenreFilter),
    SetSortKey(SortKey),
    SetPage(usize),
}

/// The user-controlled inputs of the view.
///
/// `page` holds the last requested page as-is; clamping happens during
/// derivation, so the derived page may be lower than this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub genre: GenreFilter,
    pub sort_key: SortKey,
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl ViewState {
    /// Creates the session-start state: empty search, all genres, page 0.
    #[must_use]
    pub fn new(page_size: NonZeroUsize, sort_key: SortKey) -> Self {
        Self {
            search: String::new(),
            genre: GenreFilter::All,
            sort_key,
            page: 0,
            page_size,
        }
    }

    /// Returns the state after applying `command`.
    ///
    /// Any change to search, genre or sort key resets the page to 0 in the
    /// same step. A page command only replaces the page.
    #[must_use]
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::SetSearch(search) => Self { search, page: 0, ..self },
            Command::SetGenre(genre) => Self { genre, page: 0, ..self },
            Command::SetSortKey(sort_key) => Self { sort_key, page: 0, ..self },
            Command::SetPage(page) => Self { page, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state_on_page(page: usize) -> ViewState {
        ViewState::new(NonZeroUsize::new(5).unwrap(), SortKey::default()).apply(Command::SetPage(page))
    }

    #[test]
    fn defaults() {
        let state = ViewState::new(NonZeroUsize::new(12).unwrap(), SortKey::default());
        assert_eq!(state.search, "");
        assert_eq!(state.genre, GenreFilter::All);
        assert_eq!(state.sort_key, SortKey::DateDesc);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn input_changes_reset_page() {
        let commands = [
            Command::SetSearch("tech".to_string()),
            Command::SetGenre(GenreFilter::Genre(GenreId(3))),
            Command::SetSortKey(SortKey::PopularityDesc),
            Command::SetSearch(String::new()),
        ];

        for command in commands {
            assert_eq!(state_on_page(4).apply(command).page, 0);
        }
    }

    #[test]
    fn set_page_keeps_other_inputs() {
        let state = state_on_page(0)
            .apply(Command::SetSearch("news".to_string()))
            .apply(Command::SetPage(9));

        assert_eq!(state.page, 9);
        assert_eq!(state.search, "news");
    }

    #[test]
    fn parses_genre_tokens() {
        assert_eq!("all".parse::<GenreFilter>().unwrap(), GenreFilter::All);
        assert_eq!(" ALL ".parse::<GenreFilter>().unwrap(), GenreFilter::All);
        assert_eq!("7".parse::<GenreFilter>().unwrap(), GenreFilter::Genre(GenreId(7)));
        assert!("comedy".parse::<GenreFilter>().is_err());
    }

    #[test]
    fn sort_tokens_round_trip_through_options() {
        for option in SORT_OPTIONS {
            assert_eq!(option.key.as_str().parse::<SortKey>().unwrap(), option.key);
            assert_eq!(option.label, option.key.label());
        }
        assert!("date-asc".parse::<SortKey>().is_err());
    }
}
