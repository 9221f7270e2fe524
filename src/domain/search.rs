use super::models::{SearchEntry, SectionId};

/// Indices of the entries whose title or description contains `query`,
/// ignoring case. An empty query matches everything.
#[must_use]
pub fn filter_entries(entries: &[SearchEntry], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..entries.len()).collect();
    }

    let query_lower = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            e.title.to_lowercase().contains(&query_lower)
                || e.description.to_lowercase().contains(&query_lower)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Position in the full entry list of the first entry for `section`, or 0.
#[must_use]
pub fn initial_selection(entries: &[SearchEntry], section: &SectionId) -> usize {
    entries
        .iter()
        .position(|e| &e.section_id == section)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::default_content;

    fn titles(entries: &[SearchEntry], matches: &[usize]) -> Vec<String> {
        matches.iter().map(|&i| entries[i].title.clone()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let content = default_content();
        let matches = filter_entries(&content.entries, "");
        assert_eq!(matches, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_case_insensitive_on_title_and_description() {
        let content = default_content();
        let entries = &content.entries;

        assert_eq!(
            titles(entries, &filter_entries(entries, "serve")),
            vec!["Development Server"]
        );
        assert_eq!(
            titles(entries, &filter_entries(entries, "THEM")),
            vec!["Theming"]
        );
        // "pip" only appears in a description
        assert_eq!(
            titles(entries, &filter_entries(entries, "PIP")),
            vec!["Installation"]
        );
        assert!(filter_entries(entries, "zzz").is_empty());
    }

    #[test]
    fn test_filter_matches_brute_force() {
        let content = default_content();
        let entries = &content.entries;
        for query in ["mk", "doc", "Build", "new", "site", "a", "x", "layout"] {
            let q = query.to_lowercase();
            let expected: Vec<usize> = (0..entries.len())
                .filter(|&i| {
                    entries[i].title.to_lowercase().contains(&q)
                        || entries[i].description.to_lowercase().contains(&q)
                })
                .collect();
            assert_eq!(filter_entries(entries, query), expected, "query {query}");
        }
    }

    #[test]
    fn test_initial_selection() {
        let content = default_content();
        let entries = &content.entries;
        assert_eq!(initial_selection(entries, &"configuration".into()), 5);
        assert_eq!(initial_selection(entries, &"creating-project".into()), 2);
        assert_eq!(initial_selection(entries, &"getting-started".into()), 0);
        assert_eq!(initial_selection(entries, &"missing".into()), 0);
        assert_eq!(initial_selection(&[], &"configuration".into()), 0);
    }
}
