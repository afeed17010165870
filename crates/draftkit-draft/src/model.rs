//! Draft types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use draftkit_core::{ThemeId, coerce_string_opt, list_field, string_field};
use draftkit_guide::{ContentGuide, GuideOptions};
use draftkit_taxonomy::CategoryTaxonomy;

// ============================================================================
// Sources
// ============================================================================

/// Where a source came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Official,
    Youtube,
    Media,
    Etc,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [Self::Official, Self::Youtube, Self::Media, Self::Etc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Youtube => "youtube",
            Self::Media => "media",
            Self::Etc => "etc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Korean label shown in source pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Official => "공식 발표",
            Self::Youtube => "유튜브",
            Self::Media => "언론/매체",
            Self::Etc => "기타",
        }
    }

    /// Read a type from raw JSON. Missing types are `official`; unknown
    /// strings are `etc`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            None => Self::Official,
            Some(raw) => Self::parse(raw.trim()).unwrap_or(Self::Etc),
        }
    }
}

/// One cited source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: SourceType,
    pub channel_name: String,
    pub source_date: String,
    pub timestamp: String,
    pub note: String,
}

impl Source {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            kind: SourceType::from_value(raw.get("type")),
            channel_name: string_field(raw, "channelName"),
            source_date: string_field(raw, "sourceDate"),
            timestamp: string_field(raw, "timestamp"),
            note: string_field(raw, "note"),
        }
    }

    /// Object entries of `raw[key]`, normalized. Other entries are dropped.
    pub fn list(raw: &Value, key: &str) -> Vec<Self> {
        raw.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .map(Self::normalize)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn trimmed(&self) -> Self {
        Self {
            kind: self.kind,
            channel_name: self.channel_name.trim().to_string(),
            source_date: self.source_date.trim().to_string(),
            timestamp: self.timestamp.trim().to_string(),
            note: self.note.trim().to_string(),
        }
    }
}

// ============================================================================
// Perspectives and impact
// ============================================================================

pub const PROGRESSIVE_NOTE: &str =
    "아래 내용은 일부 진보적 시각 채널/논객의 주장과 전망이며, 확실하지 않은 사실일 수 있습니다.";
pub const CONSERVATIVE_NOTE: &str =
    "아래 내용은 일부 보수적 시각 채널/논객의 주장과 전망이며, 확실하지 않은 사실일 수 있습니다.";
pub const IMPACT_NOTE: &str = "이 섹션은 중립적 해석과 체감 영향을 요약한 설명입니다. (ChatGPT의 의견)";

/// Which side a perspective view speaks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PerspectiveSide {
    Progressive,
    Conservative,
}

impl PerspectiveSide {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Progressive => "progressiveView",
            Self::Conservative => "conservativeView",
        }
    }

    pub fn default_note(&self) -> &'static str {
        match self {
            Self::Progressive => PROGRESSIVE_NOTE,
            Self::Conservative => CONSERVATIVE_NOTE,
        }
    }
}

/// A partisan outlook on the story.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    pub headline: String,
    pub bullets: Vec<String>,
    /// `0..=100`, or `-1` when unset.
    pub intensity: i32,
    pub note: String,
}

impl Perspective {
    pub const UNSET_INTENSITY: i32 = -1;

    pub fn new(side: PerspectiveSide) -> Self {
        Self {
            headline: String::new(),
            bullets: Vec::new(),
            intensity: Self::UNSET_INTENSITY,
            note: side.default_note().to_string(),
        }
    }

    /// `None` for anything but an object.
    pub fn normalize(raw: Option<&Value>, side: PerspectiveSide) -> Option<Self> {
        let raw = raw.filter(|value| value.is_object())?;
        let note = string_field(raw, "note");
        Some(Self {
            headline: string_field(raw, "headline"),
            bullets: list_field(raw, "bullets"),
            intensity: raw
                .get("intensity")
                .and_then(Value::as_f64)
                .map_or(Self::UNSET_INTENSITY, |n| clamp_intensity(n, -1.0)),
            note: if note.is_empty() {
                side.default_note().to_string()
            } else {
                note
            },
        })
    }

    /// Set the intensity from editor input. `None` and non-finite values
    /// unset it; anything else is rounded into `0..=100`.
    pub fn set_intensity(&mut self, value: Option<f64>) {
        self.intensity = value.map_or(Self::UNSET_INTENSITY, |n| clamp_intensity(n, 0.0));
    }
}

fn clamp_intensity(value: f64, floor: f64) -> i32 {
    if value.is_finite() {
        value.round().clamp(floor, 100.0) as i32
    } else {
        Perspective::UNSET_INTENSITY
    }
}

/// The "what it means for you" block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactToLife {
    pub text: String,
    pub note: String,
}

impl ImpactToLife {
    pub fn normalize(raw: Option<&Value>) -> Option<Self> {
        let raw = raw.filter(|value| value.is_object())?;
        let note = string_field(raw, "note");
        Some(Self {
            text: string_field(raw, "text"),
            note: if note.is_empty() {
                IMPACT_NOTE.to_string()
            } else {
                note
            },
        })
    }
}

// ============================================================================
// Theme content
// ============================================================================

/// The part of a draft that depends on its theme.
///
/// Perspective views exist only on the perspective theme, a group-buy link
/// only on the group-buy theme, and every other theme carries exactly one
/// guide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeContent {
    Perspectives {
        progressive_view: Option<Perspective>,
        conservative_view: Option<Perspective>,
    },
    Guide(ContentGuide),
    Groupbuy {
        link: String,
    },
}

impl ThemeContent {
    /// Empty content for `theme`, with the guide created per `options`.
    pub fn create(theme: ThemeId, options: GuideOptions) -> Self {
        match ContentGuide::create(theme, options) {
            Some(guide) => Self::Guide(guide),
            None if theme == ThemeId::Groupbuy => Self::Groupbuy {
                link: String::new(),
            },
            None => Self::Perspectives {
                progressive_view: None,
                conservative_view: None,
            },
        }
    }

    /// Content for `theme` read from a raw draft object.
    ///
    /// A missing guide is created per `options`.
    pub fn normalize(theme: ThemeId, raw: &Value, options: GuideOptions) -> Self {
        let guide_raw = ContentGuide::field_name_for(theme)
            .and_then(|field| raw.get(field))
            .unwrap_or(&Value::Null);
        match ContentGuide::normalize(theme, guide_raw, options) {
            Some(guide) => Self::Guide(guide),
            None if theme == ThemeId::Groupbuy => Self::Groupbuy {
                link: string_field(raw, "groupbuyLink"),
            },
            None => Self::Perspectives {
                progressive_view: Perspective::normalize(
                    raw.get(PerspectiveSide::Progressive.field_name()),
                    PerspectiveSide::Progressive,
                ),
                conservative_view: Perspective::normalize(
                    raw.get(PerspectiveSide::Conservative.field_name()),
                    PerspectiveSide::Conservative,
                ),
            },
        }
    }

    pub fn theme(&self) -> ThemeId {
        match self {
            Self::Perspectives { .. } => ThemeId::Policy,
            Self::Guide(guide) => guide.theme(),
            Self::Groupbuy { .. } => ThemeId::Groupbuy,
        }
    }

    pub fn guide(&self) -> Option<&ContentGuide> {
        match self {
            Self::Guide(guide) => Some(guide),
            _ => None,
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// One editable content unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    /// `YYYY-MM-DD HH:MM`, or blank until a default is applied.
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub easy_summary: String,
    pub summary_card: String,
    pub background: String,
    pub key_points: Vec<String>,
    pub impact_to_life: Option<ImpactToLife>,
    pub sources: Vec<Source>,
    pub core_keywords: Vec<String>,
    pub content: ThemeContent,
}

impl Draft {
    /// An empty draft for `theme` with a preset-filled guide.
    pub fn new(theme: ThemeId) -> Self {
        Self::with_options(theme, GuideOptions::default())
    }

    pub fn with_options(theme: ThemeId, options: GuideOptions) -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            category: CategoryTaxonomy::for_theme(theme)
                .default_category()
                .to_string(),
            subcategory: String::new(),
            easy_summary: String::new(),
            summary_card: String::new(),
            background: String::new(),
            key_points: Vec::new(),
            impact_to_life: None,
            sources: Vec::new(),
            core_keywords: Vec::new(),
            content: ThemeContent::create(theme, options),
        }
    }

    /// Normalize a raw draft object. Non-objects give an empty default-theme
    /// draft.
    pub fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::with_options(ThemeId::default(), options);
        }
        let theme = ThemeId::resolve_value(raw.get("theme"));
        let (category, subcategory) = CategoryTaxonomy::for_theme(theme).resolve_pair(
            &coerce_string_opt(raw.get("category")),
            &coerce_string_opt(raw.get("subcategory")),
        );
        Self {
            title: string_field(raw, "title"),
            date: string_field(raw, "date"),
            category,
            subcategory,
            easy_summary: string_field(raw, "easySummary"),
            summary_card: string_field(raw, "summaryCard"),
            background: string_field(raw, "background"),
            key_points: list_field(raw, "keyPoints"),
            impact_to_life: ImpactToLife::normalize(raw.get("impactToLife")),
            sources: Source::list(raw, "sources"),
            core_keywords: normalize_core_keywords(raw.get("coreKeywords")),
            content: ThemeContent::normalize(theme, raw, options),
        }
    }

    pub fn theme(&self) -> ThemeId {
        self.content.theme()
    }

    pub fn guide(&self) -> Option<&ContentGuide> {
        self.content.guide()
    }

    /// Switch themes. The guide is replaced with a preset-filled one and the
    /// category pair resets to the new theme's default. Switching to the
    /// current theme changes nothing.
    pub fn set_theme(&mut self, theme: ThemeId) {
        if theme == self.theme() {
            return;
        }
        self.content = ThemeContent::create(theme, GuideOptions::default());
        self.category = CategoryTaxonomy::for_theme(theme)
            .default_category()
            .to_string();
        self.subcategory.clear();
    }

    pub(crate) fn trimmed_sources(&self) -> Vec<Source> {
        self.sources.iter().map(Source::trimmed).collect()
    }
}

/// Trimmed, non-blank keywords with duplicates removed, first kept.
///
/// Anything but an array yields no keywords.
pub fn normalize_core_keywords(raw: Option<&Value>) -> Vec<String> {
    let items = raw.and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();
    dedupe_keywords(items.iter().map(|item| coerce_string_opt(Some(item))))
}

pub(crate) fn dedupe_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for keyword in keywords {
        let text = keyword.as_ref().trim();
        if text.is_empty() || normalized.iter().any(|seen| seen == text) {
            continue;
        }
        normalized.push(text.to_string());
    }
    normalized
}
