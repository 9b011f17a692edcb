//! Dynamic option lists for autocomplete-style fields.
//!
//! The category list lives in an external store; instead of subscribing to
//! the whole store, callers pass the slice and its loading flag in
//! explicitly. The helpers here are pure so they stay testable without any
//! store wiring.

use serde::{Deserialize, Serialize};

/// One selectable expense category as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    #[serde(rename = "category_name")]
    pub name: String,
}

/// Display names offered by the autocomplete.
///
/// While the store is still loading the list is empty rather than stale.
pub fn category_options(loading: bool, categories: &[Category]) -> Vec<String> {
    if loading {
        return Vec::new();
    }
    categories.iter().map(|c| c.name.clone()).collect()
}

/// Map a selected display name back to a category id.
///
/// The autocomplete is free-solo: a name with no matching category is a
/// brand-new one the user just typed, and is passed through as-is for the
/// server to create.
pub fn resolve_category(categories: &[Category], selected_name: &str) -> String {
    categories
        .iter()
        .find(|c| c.name == selected_name)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| selected_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: "cat-1".to_string(),
                name: "Hardware".to_string(),
            },
            Category {
                id: "cat-2".to_string(),
                name: "Gardening".to_string(),
            },
        ]
    }

    #[test]
    fn options_empty_while_loading() {
        assert!(category_options(true, &categories()).is_empty());
    }

    #[test]
    fn options_list_names_in_order() {
        assert_eq!(
            category_options(false, &categories()),
            vec!["Hardware", "Gardening"]
        );
    }

    #[test]
    fn known_name_resolves_to_id() {
        assert_eq!(resolve_category(&categories(), "Gardening"), "cat-2");
    }

    #[test]
    fn unknown_name_passes_through() {
        assert_eq!(resolve_category(&categories(), "Plumbing"), "Plumbing");
    }
}
