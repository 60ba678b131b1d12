use super::normalize;
use crate::catalog::{Catalog, Song};

/// What the search result indicator should display for a non-blank query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    /// The normalized query, uppercased for display.
    pub query: String,
    pub matches: usize,
}

/// An order-preserving view over the catalog: indices of the matching songs.
#[derive(Debug)]
pub struct FilterOutcome {
    pub view: Vec<usize>,
    /// `None` for a blank query, which also hides the indicator.
    pub summary: Option<SearchSummary>,
}

/// Matches the query against number, title, artist and genre of every song.
///
/// A blank query (after trimming) yields the full catalog and no summary.
pub fn filter_catalog(catalog: &Catalog, query: &str) -> FilterOutcome {
    let term = normalize(query);
    if term.is_empty() {
        return FilterOutcome {
            view: (0..catalog.len()).collect(),
            summary: None,
        };
    }

    let view: Vec<usize> = catalog
        .songs()
        .iter()
        .enumerate()
        .filter(|(_, song)| song_matches(song, &term))
        .map(|(index, _)| index)
        .collect();

    let summary = SearchSummary {
        query: term.to_uppercase(),
        matches: view.len(),
    };

    FilterOutcome {
        view,
        summary: Some(summary),
    }
}

fn song_matches(song: &Song, term: &str) -> bool {
    normalize(&song.number.to_string()).contains(term)
        || normalize(&song.title).contains(term)
        || normalize(&song.artist).contains(term)
        || normalize(&song.genre).contains(term)
}
