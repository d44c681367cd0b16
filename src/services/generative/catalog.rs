use crate::models::Recommendation;

/// Content type served when the requested one is unknown
pub const DEFAULT_CONTENT_TYPE: &str = "movies";

/// Genre value meaning "no genre filter"
pub const MIXED_GENRE: &str = "mixed";

struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    kind: &'static str,
    description: &'static str,
    year: &'static str,
    rating: &'static str,
}

impl CatalogEntry {
    const fn new(
        id: &'static str,
        title: &'static str,
        kind: &'static str,
        description: &'static str,
        year: &'static str,
        rating: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            kind,
            description,
            year,
            rating,
        }
    }

    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            title: self.title.to_string(),
            kind: self.kind.to_string(),
            description: self.description.to_string(),
            year: self.year.to_string(),
            rating: self.rating.to_string(),
        }
    }
}

static BOOKS: [CatalogEntry; 5] = [
    CatalogEntry::new("1", "Dune", "Sci-Fi", "Epic science fiction novel", "1965", "4.5"),
    CatalogEntry::new("2", "The Hobbit", "Fantasy", "Classic fantasy adventure", "1937", "4.7"),
    CatalogEntry::new("3", "Gone Girl", "Thriller", "Psychological thriller", "2012", "4.2"),
    CatalogEntry::new("4", "The Shining", "Horror", "Masterpiece of horror", "1977", "4.4"),
    CatalogEntry::new("5", "1984", "Drama", "Dystopian classic", "1949", "4.6"),
];

static MOVIES: [CatalogEntry; 5] = [
    CatalogEntry::new("6", "Inception", "Sci-Fi", "Mind-bending sci-fi thriller", "2010", "4.8"),
    CatalogEntry::new("7", "The Godfather", "Drama", "Classic crime drama", "1972", "4.9"),
    CatalogEntry::new("8", "Interstellar", "Sci-Fi", "Space exploration epic", "2014", "4.7"),
    CatalogEntry::new("9", "The Conjuring", "Horror", "Supernatural horror", "2013", "4.3"),
    CatalogEntry::new("10", "The Dark Knight", "Action", "Superhero masterpiece", "2008", "4.9"),
];

static TV: [CatalogEntry; 5] = [
    CatalogEntry::new("11", "Stranger Things", "Fantasy", "Supernatural mystery series", "2016", "4.6"),
    CatalogEntry::new("12", "Breaking Bad", "Drama", "Crime drama masterpiece", "2008", "4.9"),
    CatalogEntry::new("13", "The Boys", "Action", "Dark superhero series", "2019", "4.5"),
    CatalogEntry::new("14", "Black Mirror", "Sci-Fi", "Technology anthology", "2011", "4.7"),
    CatalogEntry::new("15", "The Crown", "Drama", "Royal family drama", "2016", "4.4"),
];

static PODCASTS: [CatalogEntry; 5] = [
    CatalogEntry::new("16", "Lore", "Horror", "Dark historical tales", "2015", "4.5"),
    CatalogEntry::new("17", "Serial", "Thriller", "True crime investigation", "2014", "4.8"),
    CatalogEntry::new("18", "Science Vs", "Sci-Fi", "Science fact vs fiction", "2015", "4.6"),
    CatalogEntry::new("19", "This American Life", "Drama", "Human interest stories", "1995", "4.7"),
    CatalogEntry::new("20", "Radiolab", "Sci-Fi", "Science and philosophy", "2002", "4.8"),
];

fn entries_for(content_type: &str) -> &'static [CatalogEntry] {
    match content_type {
        "books" => &BOOKS,
        "movies" => &MOVIES,
        "tv" => &TV,
        "podcast" => &PODCASTS,
        other => {
            tracing::debug!(
                content_type = %other,
                default = DEFAULT_CONTENT_TYPE,
                "Unknown content type, serving default catalog"
            );
            &MOVIES
        }
    }
}

/// Whether `content_type` has its own catalog bucket
pub fn is_known_content_type(content_type: &str) -> bool {
    matches!(content_type, "books" | "movies" | "tv" | "podcast")
}

/// Curated recommendations for a content type, optionally narrowed by genre
///
/// Genre matching is exact and case-sensitive. A genre that matches nothing
/// is ignored rather than producing an empty list.
pub fn lookup(content_type: &str, genre: Option<&str>) -> Vec<Recommendation> {
    let entries = entries_for(content_type);

    let genre = genre.filter(|g| !g.is_empty() && *g != MIXED_GENRE);
    if let Some(genre) = genre {
        let filtered: Vec<Recommendation> = entries
            .iter()
            .filter(|entry| entry.kind == genre)
            .map(CatalogEntry::to_recommendation)
            .collect();
        if !filtered.is_empty() {
            return filtered;
        }
    }

    entries.iter().map(CatalogEntry::to_recommendation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_known_types_return_five_entries() {
        for content_type in ["books", "movies", "tv", "podcast"] {
            assert!(is_known_content_type(content_type));
            let recs = lookup(content_type, None);
            assert_eq!(recs.len(), 5, "{}", content_type);
            assert!(recs.iter().all(|r| !r.title.is_empty()
                && !r.kind.is_empty()
                && !r.description.is_empty()
                && !r.year.is_empty()
                && !r.rating.is_empty()));
        }
    }

    #[test]
    fn test_unknown_type_defaults_to_movies() {
        assert!(!is_known_content_type("Movies"));
        assert_eq!(lookup("games", None), lookup("movies", None));
        assert_eq!(lookup("Movies", None), lookup("movies", None));
    }

    #[test]
    fn test_genre_filter_is_exact() {
        let recs = lookup("movies", Some("Sci-Fi"));
        assert_eq!(titles(&recs), vec!["Inception", "Interstellar"]);

        let recs = lookup("books", Some("Horror"));
        assert_eq!(titles(&recs), vec!["The Shining"]);
    }

    #[test]
    fn test_unmatched_genre_returns_full_list() {
        assert_eq!(lookup("movies", Some("sci-fi")).len(), 5);
        assert_eq!(lookup("podcast", Some("Comedy")).len(), 5);
    }

    #[test]
    fn test_mixed_and_empty_genre_are_unfiltered() {
        assert_eq!(lookup("tv", Some(MIXED_GENRE)), lookup("tv", None));
        assert_eq!(lookup("tv", Some("")), lookup("tv", None));
    }

    #[test]
    fn test_never_empty_for_any_catalog_genre() {
        for content_type in ["books", "movies", "tv", "podcast"] {
            for genre in ["Sci-Fi", "Fantasy", "Thriller", "Horror", "Drama", "Action", "Romance"] {
                assert!(!lookup(content_type, Some(genre)).is_empty());
            }
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        assert_eq!(lookup("podcast", Some("Sci-Fi")), lookup("podcast", Some("Sci-Fi")));
        assert_eq!(
            titles(&lookup("movies", None)),
            vec!["Inception", "The Godfather", "Interstellar", "The Conjuring", "The Dark Knight"]
        );
    }
}
