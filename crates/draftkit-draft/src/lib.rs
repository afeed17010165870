//! Draftkit Draft: ingestion and serialization of editorial drafts.
//!
//! # Modules
//!
//! - [`scan`]: quote-aware newline sanitizing and object splitting
//! - [`model`]: drafts, theme content, perspectives and sources
//! - [`load`]: lenient and strict loading, default dates
//! - [`sources`]: pipe-delimited source lines
//! - [`payload`]: the submission document
//!
//! Pasted text flows `sanitize → split → strict parse → normalize`. The
//! normalizers never fail; only the scan and strict parse report errors.

#![doc = include_str!("../README.md")]

pub mod load;
pub mod model;
pub mod payload;
pub mod scan;
pub mod sources;

pub use load::{
    DATE_TIME_FORMAT, DEFAULT_TIMEZONE, DraftLoader, current_date_time, format_date_time,
    load_draft_from_json, parse_draft_strict, parse_drafts, with_default_date,
};
pub use model::{
    CONSERVATIVE_NOTE, Draft, IMPACT_NOTE, ImpactToLife, PROGRESSIVE_NOTE, Perspective,
    PerspectiveSide, Source, SourceType, ThemeContent, normalize_core_keywords,
};
pub use payload::{SubmissionPayload, build_submission_payload, stringify_draft_for_clipboard};
pub use scan::{sanitize_json_newlines, split_json_objects};
pub use sources::{format_sources, parse_sources};
