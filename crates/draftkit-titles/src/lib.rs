//! Draftkit Titles: section headings with dot-path overrides.
//!
//! # Modules
//!
//! - [`defaults`]: the built-in title tree
//! - [`path`]: dot-path reads and writes on JSON trees
//! - [`resolver`]: override merging and leaf resolution
//! - [`groups`]: editable fields grouped for editing screens
//!
//! The resolved tree is an ordinary [`serde_json::Value`]. It is built once
//! with [`SectionTitleResolver::merge`] and handed to whatever renders it.

#![doc = include_str!("../README.md")]

pub mod defaults;
pub mod groups;
pub mod path;
pub mod resolver;

pub use defaults::default_section_titles;
pub use groups::{TitleField, TitleFieldGroup, title_field_groups};
pub use path::{get_value_from_path, leaf_paths, set_value_at_path};
pub use resolver::{
    SectionTitleResolver, get_default_section_title_value, get_section_title_value,
    merge_section_titles,
};
