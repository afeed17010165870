//! Draftkit Core: shared types, errors, and coercion helpers.
//!
//! This crate provides the foundational types used across all Draftkit crates.
//! It has no internal Draftkit dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`theme`]: Theme registry with default-theme fallback
//! - [`coerce`]: Total conversions from untrusted JSON into strings and lists

#![doc = include_str!("../README.md")]

pub mod coerce;
pub mod error;
pub mod theme;

// Re-export key types at crate root for convenience
pub use coerce::{
    coerce_string, coerce_string_opt, list_field, string_field, to_string_array, to_string_array_opt,
};
pub use error::{Error, Result};
pub use theme::{DEFAULT_THEME_ID, ThemeId, ThemeMeta, all_themes, is_valid_theme_id};
