//! Loading drafts from pasted JSON.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::{Map, Value};

use draftkit_core::{Error, Result, ThemeId};
use draftkit_guide::GuideOptions;

use crate::model::Draft;
use crate::payload::SubmissionPayload;
use crate::scan::{sanitize_json_newlines, split_json_objects};

/// Timezone used for default dates unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Seoul;

/// Format of draft dates.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Loads drafts and fills default dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DraftLoader {
    timezone: Tz,
    guide_options: GuideOptions,
}

impl Default for DraftLoader {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            guide_options: GuideOptions::default(),
        }
    }
}

impl DraftLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the timezone by IANA name, e.g. `"Asia/Seoul"`.
    pub fn with_timezone_name(self, name: &str) -> Result<Self> {
        let timezone = name
            .trim()
            .parse::<Tz>()
            .map_err(|err| Error::config(format!("unknown timezone {name:?}: {err}")))?;
        Ok(self.with_timezone(timezone))
    }

    /// Whether guides missing from the input are preset-filled.
    pub fn with_presets(mut self, with_presets: bool) -> Self {
        self.guide_options = self.guide_options.with_presets(with_presets);
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn guide_options(&self) -> GuideOptions {
        self.guide_options
    }

    /// An empty draft for `theme`.
    pub fn new_draft(&self, theme: ThemeId) -> Draft {
        Draft::with_options(theme, self.guide_options)
    }

    /// Load a draft leniently. Unparseable or non-object text gives an
    /// empty default-theme draft.
    pub fn load(&self, text: &str) -> Draft {
        let raw = match serde_json::from_str::<Value>(text) {
            Ok(value) if value.is_object() => value,
            Ok(_) => {
                log::debug!("draft JSON is not an object, loading an empty draft");
                Value::Object(Map::new())
            }
            Err(err) => {
                log::debug!("draft JSON did not parse, loading an empty draft: {err}");
                Value::Object(Map::new())
            }
        };
        Draft::normalize(&raw, self.guide_options)
    }

    /// Load one draft, rejecting blank or unparseable text. A blank date is
    /// set to the current time.
    pub fn parse_strict(&self, text: &str) -> Result<Draft> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput);
        }
        serde_json::from_str::<Value>(trimmed).map_err(|err| Error::malformed(err.to_string()))?;
        Ok(self.with_default_date(self.load(trimmed)))
    }

    /// Load every object in pasted text.
    ///
    /// Raw line breaks inside strings are removed first. The first object
    /// that fails to parse fails the whole paste.
    pub fn parse_all(&self, text: &str) -> Result<Vec<Draft>> {
        let sanitized = sanitize_json_newlines(text);
        split_json_objects(&sanitized)?
            .iter()
            .enumerate()
            .map(|(index, object)| {
                self.parse_strict(object).map_err(|err| match err {
                    Error::MalformedInput(msg) => {
                        Error::malformed(format!("object {}: {msg}", index + 1))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// The draft with a blank date set to the current time.
    pub fn with_default_date(&self, draft: Draft) -> Draft {
        apply_default_date(draft, || self.current_date_time())
    }

    /// The current time as `YYYY-MM-DD HH:MM` in the loader's timezone.
    pub fn current_date_time(&self) -> String {
        format_date_time(Utc::now(), self.timezone)
    }

    pub fn submission_payload(&self, draft: &Draft) -> SubmissionPayload {
        SubmissionPayload::from_draft(draft, &self.current_date_time())
    }
}

/// Format an instant as `YYYY-MM-DD HH:MM` in `timezone`.
pub fn format_date_time(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant
        .with_timezone(&timezone)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

pub(crate) fn apply_default_date(mut draft: Draft, now: impl FnOnce() -> String) -> Draft {
    let trimmed = draft.date.trim();
    if trimmed.is_empty() {
        draft.date = now();
    } else if trimmed.len() != draft.date.len() {
        draft.date = trimmed.to_string();
    }
    draft
}

// ============================================================================
// Convenience functions with the default loader
// ============================================================================

/// Lenient load with the default loader.
pub fn load_draft_from_json(text: &str) -> Draft {
    DraftLoader::default().load(text)
}

/// Strict load with the default loader.
pub fn parse_draft_strict(text: &str) -> Result<Draft> {
    DraftLoader::default().parse_strict(text)
}

/// Sanitize, split and strictly load pasted text with the default loader.
pub fn parse_drafts(text: &str) -> Result<Vec<Draft>> {
    DraftLoader::default().parse_all(text)
}

/// Fill a blank date with the current Asia/Seoul time.
pub fn with_default_date(draft: Draft) -> Draft {
    DraftLoader::default().with_default_date(draft)
}

/// The current Asia/Seoul time as `YYYY-MM-DD HH:MM`.
pub fn current_date_time() -> String {
    DraftLoader::default().current_date_time()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeContent;
    use chrono::TimeZone;
    use draftkit_guide::ContentGuide;

    fn is_date_time(text: &str) -> bool {
        chrono::NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).is_ok()
    }

    // ------------------------------------------------------------------------
    // Lenient loading
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_degrades_to_empty_draft() {
        let loader = DraftLoader::default();
        assert_eq!(loader.load("not json"), Draft::new(ThemeId::Policy));
        assert_eq!(loader.load("[1]"), Draft::new(ThemeId::Policy));
        assert_eq!(load_draft_from_json(""), Draft::new(ThemeId::Policy));
    }

    #[test]
    fn test_load_unknown_theme_falls_back() {
        let draft = load_draft_from_json(r#"{"theme": "sports", "category": "부동산"}"#);
        assert_eq!(draft.theme(), ThemeId::Policy);
        assert_eq!(draft.category, "부동산");
    }

    #[test]
    fn test_load_attaches_preset_guide() {
        let draft = load_draft_from_json(r#"{"theme": "parenting"}"#);
        match draft.content {
            ThemeContent::Guide(ContentGuide::Parenting(guide)) => {
                assert!(!guide.age_groups.is_empty());
            }
            other => panic!("unexpected content {other:?}"),
        }

        let bare = DraftLoader::default()
            .with_presets(false)
            .load(r#"{"theme": "parenting"}"#);
        match bare.content {
            ThemeContent::Guide(ContentGuide::Parenting(guide)) => {
                assert!(guide.age_groups.is_empty());
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_load_does_not_fill_date() {
        let draft = load_draft_from_json(r#"{"title": "x"}"#);
        assert_eq!(draft.date, "");
    }

    // ------------------------------------------------------------------------
    // Strict loading
    // ------------------------------------------------------------------------

    #[test]
    fn test_strict_rejects_blank() {
        assert!(matches!(parse_draft_strict("  \n "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_strict_surfaces_parser_message() {
        let err = parse_draft_strict(r#"{"title": }"#).unwrap_err();
        match err {
            Error::MalformedInput(msg) => assert!(msg.contains("line 1")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_strict_fills_blank_date() {
        let draft = parse_draft_strict(r#"{"title": "x", "date": "  "}"#).unwrap();
        assert!(is_date_time(&draft.date), "{}", draft.date);

        let kept = parse_draft_strict(r#"{"date": "2024-05-06 07:08"}"#).unwrap();
        assert_eq!(kept.date, "2024-05-06 07:08");
    }

    #[test]
    fn test_strict_accepts_non_object_json() {
        let draft = parse_draft_strict("42").unwrap();
        assert_eq!(draft.theme(), ThemeId::Policy);
        assert!(!draft.date.is_empty());
    }

    // ------------------------------------------------------------------------
    // Multi-object paste
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_all_with_raw_newlines() {
        let text = "{\"title\": \"첫\n번째\", \"theme\": \"stocks\"}\n{\"title\": \"두 번째\"}";
        let drafts = parse_drafts(text).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "첫번째");
        assert_eq!(drafts[0].theme(), ThemeId::Stocks);
        assert_eq!(drafts[1].theme(), ThemeId::Policy);
    }

    #[test]
    fn test_parse_all_reports_failing_object() {
        let err = parse_drafts(r#"{"a": 1} {"b": ,}"#).unwrap_err();
        match err {
            Error::MalformedInput(msg) => assert!(msg.starts_with("object 2:"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_all_scan_errors() {
        assert!(parse_drafts("no objects here").is_err());
        assert!(parse_drafts("{\"a\": 1").is_err());
    }

    // ------------------------------------------------------------------------
    // Dates
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_date_time_in_timezone() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 16, 5, 0).unwrap();
        assert_eq!(format_date_time(instant, DEFAULT_TIMEZONE), "2025-01-01 01:05");
        assert_eq!(format_date_time(instant, chrono_tz::UTC), "2024-12-31 16:05");
    }

    #[test]
    fn test_apply_default_date() {
        let mut draft = Draft::new(ThemeId::Policy);
        draft.date = " 2024-01-01 ".to_string();
        let trimmed = apply_default_date(draft, || "unused".to_string());
        assert_eq!(trimmed.date, "2024-01-01");

        let filled = apply_default_date(Draft::new(ThemeId::Policy), || "now".to_string());
        assert_eq!(filled.date, "now");
        assert!(is_date_time(&current_date_time()));
        assert!(is_date_time(&with_default_date(Draft::new(ThemeId::Ai)).date));
    }

    #[test]
    fn test_with_timezone_name() {
        let loader = DraftLoader::new().with_timezone_name("UTC").unwrap();
        assert_eq!(loader.timezone(), chrono_tz::UTC);
        let err = DraftLoader::new().with_timezone_name("Mars/Olympus").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
