//! Podcast domain model.
//!
//! This module defines [`Podcast`], an immutable catalog entry, together with
//! its identifier types. Podcasts are deserialized from the catalog's JSON
//! shape and never mutated once loaded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Unique, stable podcast identifier.
///
/// Catalog feeds publish ids either as JSON numbers or as numeric strings
/// (`"10716"`); both deserialize to the same value. Ordering is numeric, which
/// makes it usable as the final tie-break of every sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "u64")]
pub struct PodcastId(pub u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl TryFrom<RawId> for PodcastId {
    type Error = String;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        match raw {
            RawId::Number(n) => Ok(Self(n)),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| format!("podcast id is not numeric: {s:?}")),
        }
    }
}

impl From<PodcastId> for u64 {
    fn from(id: PodcastId) -> Self {
        id.0
    }
}

impl fmt::Display for PodcastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Genre identifier as published in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub u32);

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: unique identifier, final tie-break for every ordering
/// - `title`: display title, searched case-insensitively
/// - `genres`: zero or more genre ids
/// - `updated`: last-updated timestamp, drives the `date-desc` ordering
/// - `popularity`: score driving the `popularity-desc` ordering
/// - `episodes`, `seasons`, `description`, `image`: display-only metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: PodcastId,
    pub title: String,
    #[serde(default)]
    pub genres: BTreeSet<GenreId>,
    pub updated: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub popularity: f64,
    #[serde(default)]
    pub episodes: u32,
    #[serde(default)]
    pub seasons: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Feeds publish `"popularity": null` for unranked shows.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Podcast {
    /// Creates a podcast with the fields the view engine cares about.
    ///
    /// Display-only metadata starts empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use podcast_browser::domain::{GenreId, Podcast, PodcastId};
    ///
    /// let podcast = Podcast::new(
    ///     PodcastId(1),
    ///     "Tech Today",
    ///     [GenreId(1)],
    ///     Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    ///     10.0,
    /// );
    /// assert!(podcast.has_genre(GenreId(1)));
    /// assert_eq!(podcast.episodes, 0);
    /// ```
    pub fn new(
        id: PodcastId,
        title: impl Into<String>,
        genres: impl IntoIterator<Item = GenreId>,
        updated: DateTime<Utc>,
        popularity: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genres: genres.into_iter().collect(),
            updated,
            popularity,
            episodes: 0,
            seasons: 0,
            description: String::new(),
            image: None,
        }
    }

    /// Returns true if the podcast is tagged with `genre`.
    #[must_use]
    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genres.contains(&genre)
    }

    /// Returns a short relative description of when the podcast was last updated.
    ///
    /// - Less than 1 minute (or in the future): "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn updated_ago(&self, now: DateTime<Utc>) -> String {
        let diff = (now - self.updated).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
