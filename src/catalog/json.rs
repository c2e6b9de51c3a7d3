//! JSON file catalog source.
//!
//! Reads the catalog from a JSON document on disk. Two layouts are accepted:
//! a bare array of podcasts (the shape served by the public podcast preview
//! API) or an object wrapping that array under `podcasts`.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": "10716",
//!     "title": "Something Was Wrong",
//!     "description": "...",
//!     "seasons": 14,
//!     "image": "https://example.com/cover.jpg",
//!     "genres": [1, 2],
//!     "updated": "2022-11-03T07:00:00.000Z",
//!     "popularity": 87.5,
//!     "episodes": 120
//!   }
//! ]
//! ```

use super::source::CatalogSource;
use crate::domain::error::{BrowserError, Result};
use crate::domain::Podcast;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Object layout: `{"podcasts": [...]}`.
#[derive(Deserialize)]
struct WrappedCatalog {
    podcasts: Vec<Podcast>,
}

/// Catalog source reading a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    file_path: PathBuf,
}

impl JsonCatalogSource {
    /// Creates a source for the file at `file_path`. The file is read on fetch.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Parses a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Catalog`] if the JSON is malformed or two
    /// podcasts share an id.
    pub fn parse(contents: &str) -> Result<Vec<Podcast>> {
        let parsed = if contents.trim_start().starts_with('{') {
            serde_json::from_str::<WrappedCatalog>(contents).map(|doc| doc.podcasts)
        } else {
            serde_json::from_str::<Vec<Podcast>>(contents)
        };
        let podcasts =
            parsed.map_err(|e| BrowserError::Catalog(format!("failed to parse JSON: {e}")))?;

        let mut seen = HashSet::with_capacity(podcasts.len());
        if let Some(duplicate) = podcasts.iter().find(|p| !seen.insert(p.id)) {
            return Err(BrowserError::Catalog(format!(
                "duplicate podcast id {}",
                duplicate.id
            )));
        }

        Ok(podcasts)
    }
}

impl CatalogSource for JsonCatalogSource {
    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }

    fn fetch(&mut self) -> Result<Vec<Podcast>> {
        let _span = tracing::debug_span!("json_fetch_catalog", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let podcasts = Self::parse(&contents)?;

        tracing::debug!(count = podcasts.len(), "catalog read from file");
        Ok(podcasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PodcastId;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {"id": "2", "title": "Tech Weekly", "genres": [1], "updated": "2024-01-01T00:00:00Z", "popularity": 5},
        {"id": 1, "title": "Tech Today", "genres": [1], "updated": "2023-01-01T00:00:00Z", "popularity": 10}
    ]"#;

    #[test]
    fn parses_bare_array_in_file_order() {
        let podcasts = JsonCatalogSource::parse(CATALOG).unwrap();
        let ids: Vec<_> = podcasts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PodcastId(2), PodcastId(1)]);
    }

    #[test]
    fn parses_wrapped_document() {
        let wrapped = format!(r#"{{"podcasts": {CATALOG}}}"#);
        assert_eq!(JsonCatalogSource::parse(&wrapped).unwrap().len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "title": "a", "updated": "2023-01-01T00:00:00Z"},
            {"id": "1", "title": "b", "updated": "2023-01-01T00:00:00Z"}
        ]"#;
        let err = JsonCatalogSource::parse(json).unwrap_err();
        assert!(err.to_string().contains("duplicate podcast id 1"));
    }

    #[test]
    fn fetch_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let mut source = JsonCatalogSource::new(file.path());
        assert_eq!(source.fetch().unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = JsonCatalogSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.fetch(), Err(BrowserError::Io(_))));
    }

    #[test]
    fn parse_errors_name_the_offending_field() {
        let missing_title = r#"[{"id": 1, "updated": "2020-01-01T00:00:00Z"}]"#;
        let failure = JsonCatalogSource::parse(missing_title)
            .unwrap_err()
            .into_load_failure();
        assert!(failure.reason().contains("missing field `title`"), "{failure}");
        assert!(failure.reason().contains("line 1"), "{failure}");

        let bad_date = r#"{"podcasts": [
            {"id": 1, "title": "a", "updated": "2020-01-01"}
        ]}"#;
        let failure = JsonCatalogSource::parse(bad_date)
            .unwrap_err()
            .into_load_failure();
        assert!(failure.reason().contains("line 2"), "{failure}");
        assert!(!failure.reason().contains("untagged"), "{failure}");
    }

    #[test]
    fn null_popularity_loads_as_zero() {
        let json = r#"[{"id": 1, "title": "a", "updated": "2020-01-01T00:00:00Z", "popularity": null}]"#;
        let podcasts = JsonCatalogSource::parse(json).unwrap();
        assert_eq!(podcasts[0].popularity, 0.0);
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(
            JsonCatalogSource::parse("{not json"),
            Err(BrowserError::Catalog(_))
        ));
    }
}
