//! crates/dfi_checker_core/src/search.rs
//!
//! Turns the catalog candidates fetched for an autocomplete query into the
//! list of matches sent to the client.

use crate::domain::{AutocompleteMatch, CatalogEntry, MatchField};

/// Maximum number of catalog rows fetched for one autocomplete query.
pub const AUTOCOMPLETE_CANDIDATE_LIMIT: usize = 15;

/// Re-checks each candidate in-process and emits one match per field that
/// contains `query` case-insensitively.
///
/// A row matching on both names is emitted twice, trade name first. A row that
/// the store returned but that fails the check on both fields is dropped.
/// Store order is preserved.
pub fn expand_matches(query: &str, candidates: Vec<CatalogEntry>) -> Vec<AutocompleteMatch> {
    let needle = query.to_lowercase();
    let mut matches = Vec::with_capacity(candidates.len());

    for entry in candidates {
        let in_trade = entry.trade_name.to_lowercase().contains(&needle);
        let in_scientific = entry.scientific_name.to_lowercase().contains(&needle);

        if in_trade {
            matches.push(AutocompleteMatch {
                field: MatchField::TradeName,
                entry: entry.clone(),
            });
        }
        if in_scientific {
            matches.push(AutocompleteMatch {
                field: MatchField::ScientificName,
                entry,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, trade: &str, scientific: &str) -> CatalogEntry {
        CatalogEntry {
            sfda_drug_id: id.to_string(),
            trade_name: trade.to_string(),
            scientific_name: scientific.to_string(),
        }
    }

    fn fields(matches: &[AutocompleteMatch]) -> Vec<(&str, MatchField)> {
        matches
            .iter()
            .map(|m| (m.entry.sfda_drug_id.as_str(), m.field))
            .collect()
    }

    #[test]
    fn tags_each_matching_field() {
        let candidates = vec![
            entry("1", "Panadol", "Paracetamol"),
            entry("2", "Adol", "Paracetamol"),
            entry("3", "Brufen", "Ibuprofen"),
        ];

        let matches = expand_matches("para", candidates);

        assert_eq!(
            fields(&matches),
            vec![("1", MatchField::ScientificName), ("2", MatchField::ScientificName)]
        );
    }

    #[test]
    fn row_matching_both_fields_appears_twice() {
        let matches = expand_matches("PAN", vec![entry("7", "Panadol", "Pantoprazole")]);

        assert_eq!(
            fields(&matches),
            vec![("7", MatchField::TradeName), ("7", MatchField::ScientificName)]
        );
        assert_eq!(matches[0].entry, matches[1].entry);
    }

    #[test]
    fn candidate_failing_local_check_is_dropped() {
        let matches = expand_matches("xyz", vec![entry("1", "Panadol", "Paracetamol")]);
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_query_matches_every_field() {
        let matches = expand_matches("", vec![entry("1", "Panadol", "Paracetamol")]);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn preserves_store_order() {
        let candidates = vec![
            entry("b", "Zinnat", "Cefuroxime"),
            entry("a", "Zithromax", "Azithromycin"),
        ];
        let matches = expand_matches("zi", candidates);
        assert_eq!(
            fields(&matches),
            vec![
                ("b", MatchField::TradeName),
                ("a", MatchField::TradeName),
                ("a", MatchField::ScientificName),
            ]
        );
    }
}
