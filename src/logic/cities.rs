//! City search result normalization: de-duplication, Global aggregate, ordering.

use std::collections::HashMap;

use crate::state::types::{City, GlobalRowPolicy};

/// What: Turn raw city rows from the API into the list shown in the search dropdown.
///
/// Inputs:
/// - `rows`: Rows exactly as decoded from the response body.
/// - `policy`: How the Global aggregate row is treated.
///
/// Output:
/// - Rows unique by `(state_code, name)`, with at most one Global row, sorted by
///   `news_count` descending.
///
/// Details:
/// - Duplicates: the last occurrence wins, placed where the key first appeared.
/// - `Synthesize`: when no `GL` row is present, a Global row whose count is the sum of
///   every other row is inserted at the front before sorting.
/// - `AlwaysSynthesize`: server `GL` rows are discarded and the aggregate is always computed.
/// - `Server`: rows are only de-duplicated and sorted.
/// - The sort is stable, so equal counts keep their pre-sort order.
#[must_use]
pub fn normalize_cities(rows: Vec<City>, policy: GlobalRowPolicy) -> Vec<City> {
    let mut out: Vec<City> = Vec::with_capacity(rows.len() + 1);
    let mut positions: HashMap<(String, String), usize> = HashMap::with_capacity(rows.len());
    for row in rows {
        if policy == GlobalRowPolicy::AlwaysSynthesize && row.is_global() {
            continue;
        }
        let key = (row.state_code.clone(), row.name.clone());
        if let Some(&idx) = positions.get(&key) {
            out[idx] = row;
        } else {
            positions.insert(key, out.len());
            out.push(row);
        }
    }

    if policy != GlobalRowPolicy::Server && !out.iter().any(City::is_global) {
        let total = out
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.news_count));
        out.insert(0, City::global(total));
    }

    out.sort_by(|a, b| b.news_count.cmp(&a.news_count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, state: &str, count: u64) -> City {
        City {
            id: None,
            name: name.to_string(),
            state_code: state.to_string(),
            news_count: count,
        }
    }

    #[test]
    /// What: A single city without a `GL` row gains a Global row carrying the same count.
    ///
    /// Inputs:
    /// - `[Paris, FR, 3]` with the default policy.
    ///
    /// Output:
    /// - Two rows; Global first (inserted at the front, stable tie) with count 3.
    fn synthesizes_global_for_single_city() {
        let out = normalize_cities(vec![city("Paris", "FR", 3)], GlobalRowPolicy::Synthesize);
        assert_eq!(out, vec![City::global(3), city("Paris", "FR", 3)]);
    }

    #[test]
    /// What: Synthesized Global count is the sum over every other (deduplicated) row.
    fn global_count_is_sum_of_other_rows() {
        let out = normalize_cities(
            vec![
                city("Austin", "TX", 2),
                city("Boston", "MA", 5),
                city("Austin", "TX", 4),
            ],
            GlobalRowPolicy::Synthesize,
        );
        let globals: Vec<&City> = out.iter().filter(|c| c.is_global()).collect();
        assert_eq!(globals.len(), 1);
        let others: u64 = out
            .iter()
            .filter(|c| !c.is_global())
            .map(|c| c.news_count)
            .sum();
        assert_eq!(globals[0].news_count, others);
        assert_eq!(others, 9);
    }

    #[test]
    /// What: Duplicate `(state_code, name)` keys collapse to one row, last value wins.
    ///
    /// Inputs:
    /// - Springfield/IL twice (counts 1 then 7) and Springfield/MO once.
    ///
    /// Output:
    /// - Each pair exactly once; IL keeps the later count.
    fn deduplicates_by_state_and_name_last_wins() {
        let out = normalize_cities(
            vec![
                city("Springfield", "IL", 1),
                city("Springfield", "MO", 2),
                city("Springfield", "IL", 7),
            ],
            GlobalRowPolicy::Server,
        );
        assert_eq!(
            out,
            vec![city("Springfield", "IL", 7), city("Springfield", "MO", 2)]
        );
    }

    #[test]
    /// What: Output is sorted by count descending with ties kept in arrival order.
    fn sorts_descending_and_keeps_tie_order() {
        let out = normalize_cities(
            vec![
                city("A", "X", 1),
                city("B", "X", 3),
                city("C", "X", 3),
                city("D", "X", 0),
            ],
            GlobalRowPolicy::Server,
        );
        let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A", "D"]);
        assert!(out.windows(2).all(|w| w[0].news_count >= w[1].news_count));
    }

    #[test]
    /// What: A server-provided `GL` row is kept as-is under the default policy.
    fn keeps_server_global_row() {
        let mut server_global = City::global(40);
        server_global.id = Some("99".into());
        let out = normalize_cities(
            vec![city("Paris", "FR", 3), server_global.clone()],
            GlobalRowPolicy::Synthesize,
        );
        assert_eq!(out, vec![server_global, city("Paris", "FR", 3)]);
    }

    #[test]
    /// What: `AlwaysSynthesize` replaces the server aggregate with the client sum.
    fn always_synthesize_overrides_server_global() {
        let out = normalize_cities(
            vec![city("Paris", "FR", 3), City::global(40), city("Nice", "FR", 1)],
            GlobalRowPolicy::AlwaysSynthesize,
        );
        assert_eq!(out[0], City::global(4));
        assert_eq!(out.iter().filter(|c| c.is_global()).count(), 1);
    }

    #[test]
    /// What: `Server` policy never invents a Global row.
    fn server_policy_does_not_synthesize() {
        let out = normalize_cities(vec![city("Paris", "FR", 3)], GlobalRowPolicy::Server);
        assert!(out.iter().all(|c| !c.is_global()));
    }

    #[test]
    /// What: An empty response still yields a zero-count Global row when synthesizing.
    fn empty_rows_yield_zero_global() {
        let out = normalize_cities(Vec::new(), GlobalRowPolicy::Synthesize);
        assert_eq!(out, vec![City::global(0)]);
    }
}
