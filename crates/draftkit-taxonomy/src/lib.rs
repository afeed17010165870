//! Draftkit Taxonomy: per-theme category resolution.
//!
//! # Modules
//!
//! - [`tables`]: frozen category → subcategory tables
//!
//! The free functions take a raw theme id as found in untrusted input.
//! Unknown ids are resolved to the default theme before lookup, so every
//! function here is total.

#![doc = include_str!("../README.md")]

pub mod tables;

use draftkit_core::ThemeId;
use serde::Serialize;

pub use tables::{ALL_CATEGORIES_LABEL, CategoryEntry, table_for};

// ============================================================================
// Typed view
// ============================================================================

/// Read-only view over a single theme's taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    theme: ThemeId,
    entries: &'static [CategoryEntry],
}

impl CategoryTaxonomy {
    /// Taxonomy for a known theme.
    pub fn for_theme(theme: ThemeId) -> Self {
        Self {
            theme,
            entries: table_for(theme),
        }
    }

    /// Taxonomy for a raw theme id, falling back to the default theme.
    pub fn resolve(theme_id: &str) -> Self {
        Self::for_theme(ThemeId::resolve(theme_id))
    }

    /// The theme this view describes.
    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Whether this theme has no categories at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category labels in display order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(category, _)| *category).collect()
    }

    /// Subcategories of `category`, empty if the category is unknown.
    pub fn subcategories(&self, category: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(label, _)| *label == category)
            .map(|(_, subs)| *subs)
            .unwrap_or(&[])
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.entries.iter().any(|(label, _)| *label == category)
    }

    pub fn contains_subcategory(&self, category: &str, subcategory: &str) -> bool {
        !subcategory.is_empty() && self.subcategories(category).contains(&subcategory)
    }

    /// First category, or `""` when the theme has none.
    pub fn default_category(&self) -> &'static str {
        self.entries.first().map(|(label, _)| *label).unwrap_or("")
    }

    /// Repair a category pair against this taxonomy.
    ///
    /// A category outside the table becomes the default category. A
    /// subcategory not listed under the (repaired) category becomes `""`.
    pub fn resolve_pair(&self, category: &str, subcategory: &str) -> (String, String) {
        let category = category.trim();
        let subcategory = subcategory.trim();
        let category = if self.contains_category(category) {
            category
        } else {
            if !category.is_empty() {
                log::debug!(
                    "category {category:?} is not listed for theme {}, using default",
                    self.theme
                );
            }
            self.default_category()
        };
        let subcategory = if self.contains_subcategory(category, subcategory) {
            subcategory
        } else {
            ""
        };
        (category.to_string(), subcategory.to_string())
    }

    /// Serializable snapshot of the whole tree, in order.
    pub fn to_listing(&self) -> Vec<CategoryListing> {
        self.entries
            .iter()
            .map(|(category, subs)| CategoryListing {
                category: category.to_string(),
                subcategories: subs.iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    }
}

/// One category with its subcategories, for serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub category: String,
    pub subcategories: Vec<String>,
}

// ============================================================================
// Free functions
// ============================================================================

/// Category labels for a theme.
pub fn get_category_options(theme_id: &str) -> Vec<&'static str> {
    CategoryTaxonomy::resolve(theme_id).categories()
}

/// Category labels prefixed with the all-categories filter label.
pub fn get_category_filter_options(theme_id: &str) -> Vec<&'static str> {
    let mut options = vec![ALL_CATEGORIES_LABEL];
    options.extend(get_category_options(theme_id));
    options
}

/// Subcategory labels for a category, empty if unknown.
pub fn get_subcategory_options(theme_id: &str, category: &str) -> Vec<&'static str> {
    CategoryTaxonomy::resolve(theme_id)
        .subcategories(category)
        .to_vec()
}

pub fn is_valid_category(theme_id: &str, category: &str) -> bool {
    CategoryTaxonomy::resolve(theme_id).contains_category(category)
}

/// Whether `subcategory` is listed under `category`. Always false when empty.
pub fn is_valid_subcategory(theme_id: &str, category: &str, subcategory: &str) -> bool {
    CategoryTaxonomy::resolve(theme_id).contains_subcategory(category, subcategory)
}

/// First category of the theme, or `""` for themes without a taxonomy.
pub fn get_default_category(theme_id: &str) -> &'static str {
    CategoryTaxonomy::resolve(theme_id).default_category()
}

/// See [`CategoryTaxonomy::resolve_pair`].
pub fn resolve_category(theme_id: &str, category: &str, subcategory: &str) -> (String, String) {
    CategoryTaxonomy::resolve(theme_id).resolve_pair(category, subcategory)
}
