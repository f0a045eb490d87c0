//! Fixed vocabularies for submissions and the predicates over them.
//!
//! Categories, events, and transaction types are closed enumerations; the
//! intake path maps a failed predicate to a named validation error.

/// Categories a project may be tagged with.
pub const ALLOWED_CATEGORIES: &[&str] = &[
    "DeFi",
    "Gaming",
    "AI",
    "Infrastructure",
    "Consumer",
    "NFT",
    "Stablecoins",
];

/// Named hackathon and mission events a submission may target.
pub const ALLOWED_EVENTS: &[&str] = &[
    "Mission: 1 Crazy Contract",
    "Mission: 2 Smart Wallet",
    "Mission: 3 DeFi Integration",
    "Mission: 4 NFT Marketplace",
    "Hackathon 2023",
    "Hackathon 2024",
];

/// Valid blockchain transaction types (analytics vocabulary).
pub const ALLOWED_TRANSACTION_TYPES: &[&str] = &["transfer", "swap", "mint", "burn", "stake"];

/// Check that every category is in the allowed vocabulary.
pub fn is_valid_categories(categories: &[String]) -> bool {
    categories
        .iter()
        .all(|c| ALLOWED_CATEGORIES.contains(&c.as_str()))
}

/// Check that the event is one of the known events.
pub fn is_valid_event(event: &str) -> bool {
    ALLOWED_EVENTS.contains(&event)
}

/// Check that a transaction type is known.
pub fn is_valid_transaction_type(tx_type: &str) -> bool {
    ALLOWED_TRANSACTION_TYPES.contains(&tx_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_known_categories_pass() {
        let cats = strings(ALLOWED_CATEGORIES);
        assert!(is_valid_categories(&cats));
    }

    #[test]
    fn unknown_category_fails() {
        let cats = strings(&["DeFi", "Metaverse"]);
        assert!(!is_valid_categories(&cats));
    }

    #[test]
    fn empty_category_set_passes() {
        // Subset check: the empty set is a subset of the vocabulary.
        // Required-ness is enforced at the request boundary, not here.
        assert!(is_valid_categories(&[]));
    }

    #[test]
    fn category_check_is_case_sensitive() {
        assert!(!is_valid_categories(&strings(&["defi"])));
    }

    #[test]
    fn known_event_passes() {
        assert!(is_valid_event("Hackathon 2024"));
        assert!(is_valid_event("Mission: 1 Crazy Contract"));
    }

    #[test]
    fn unknown_event_fails() {
        assert!(!is_valid_event("Hackathon 2025"));
        assert!(!is_valid_event(""));
    }

    #[test]
    fn transaction_types() {
        assert!(is_valid_transaction_type("swap"));
        assert!(!is_valid_transaction_type("airdrop"));
    }
}
