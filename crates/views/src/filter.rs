//! Shared filtering primitives.

/// Case-insensitive substring search over a page's searchable fields.
///
/// A record passes when the term occurs in at least one field (OR). An
/// empty or whitespace-only term matches everything.
pub fn text_matches(term: &str, fields: &[&str]) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Categorical facet filter. `None` is the "all" value and disables the
/// facet; facets combine with logical AND at the call sites.
pub fn facet_matches<T: PartialEq + Copy>(facet: Option<T>, value: T) -> bool {
    facet.map_or(true, |wanted| wanted == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_everything() {
        assert!(text_matches("", &["Fresas", "FRU-001"]));
        assert!(text_matches("   ", &[]));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(text_matches("fres", &["Fresas", "FRU-001"]));
        assert!(text_matches("FRU-0", &["Fresas", "FRU-001"]));
        assert!(text_matches("GLOBAL", &["Export Global"]));
        assert!(!text_matches("cereza", &["Fresas", "FRU-001"]));
    }

    #[test]
    fn none_facet_disables_the_filter() {
        assert!(facet_matches(None::<u8>, 7));
        assert!(facet_matches(Some(7u8), 7));
        assert!(!facet_matches(Some(3u8), 7));
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            /// A field that contains the term verbatim always matches,
            /// whatever the surrounding fields hold.
            #[test]
            fn verbatim_containment_always_matches(
                term in "[a-z]{1,8}",
                prefix in "[a-z]{0,8}",
                suffix in "[a-z]{0,8}",
                other in "[0-9]{0,8}",
            ) {
                let field = format!("{prefix}{term}{suffix}");
                prop_assert!(text_matches(&term, &[&other, &field]));
            }

            /// Conjunction of facets is commutative: evaluating them in
            /// either order accepts exactly the same records.
            #[test]
            fn facet_conjunction_commutes(a in prop::option::of(0u8..4), b in prop::option::of(0u8..4), va in 0u8..4, vb in 0u8..4) {
                let ab = facet_matches(a, va) && facet_matches(b, vb);
                let ba = facet_matches(b, vb) && facet_matches(a, va);
                prop_assert_eq!(ab, ba);
            }
        }
    }
}
