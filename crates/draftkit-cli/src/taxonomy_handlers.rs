//! Handler functions for `draftkit taxonomy` and `draftkit themes`.

use draftkit_core::{ThemeId, ThemeMeta, all_themes};
use draftkit_taxonomy::{CategoryListing, CategoryTaxonomy};
use serde::Serialize;

/// A category pair after resolution against a theme's taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedCategory {
    pub theme: ThemeId,
    pub category: String,
    pub subcategory: String,
}

pub fn list(theme: ThemeId) -> Vec<CategoryListing> {
    CategoryTaxonomy::for_theme(theme).to_listing()
}

pub fn resolve(theme: ThemeId, category: &str, subcategory: &str) -> ResolvedCategory {
    let (category, subcategory) =
        CategoryTaxonomy::for_theme(theme).resolve_pair(category, subcategory);
    ResolvedCategory {
        theme,
        category,
        subcategory,
    }
}

pub fn themes() -> &'static [ThemeMeta] {
    all_themes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_policy() {
        let listing = list(ThemeId::Policy);
        assert!(listing.iter().any(|entry| entry.category == "부동산"));
        assert!(list(ThemeId::Ai).is_empty());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let resolved = resolve(ThemeId::Policy, "없는 카테고리", "x");
        assert_eq!(resolved.category, "부동산");
        assert_eq!(resolved.subcategory, "");
    }

    #[test]
    fn test_themes_in_order() {
        let ids: Vec<ThemeId> = themes().iter().map(|meta| meta.id).collect();
        assert_eq!(ids, ThemeId::ALL.to_vec());
    }
}
