//! AI guide: action steps, links to other theme guides, and a category
//! blueprint.
//!
//! Unlike the other guides this one has no top-level `overview`; the
//! blueprint's overview plays that role.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::{Guide, GuideOptions, content_records, list, text};

// ============================================================================
// Connections
// ============================================================================

/// Which guide a connection entry links to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "parentingGuide")]
    ParentingGuide,
    #[serde(rename = "lifestyleGuide")]
    LifestyleGuide,
    #[serde(rename = "supportGuide")]
    SupportGuide,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 4] = [
        ConnectionType::ParentingGuide,
        ConnectionType::LifestyleGuide,
        ConnectionType::SupportGuide,
        ConnectionType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::ParentingGuide => "parentingGuide",
            ConnectionType::LifestyleGuide => "lifestyleGuide",
            ConnectionType::SupportGuide => "supportGuide",
            ConnectionType::Other => "other",
        }
    }

    /// Editor label for the connection type.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionType::ParentingGuide => "Parenting Guide 연계",
            ConnectionType::LifestyleGuide => "Lifestyle Guide 연계",
            ConnectionType::SupportGuide => "Support Guide 연계",
            ConnectionType::Other => "기타(직접 입력)",
        }
    }

    /// Unknown or missing values fall back to [`ConnectionType::Other`].
    pub fn from_value(value: Option<&Value>) -> Self {
        let raw = value.and_then(Value::as_str).map(str::trim).unwrap_or("");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(rename = "type")]
    pub kind: ConnectionType,
    pub label: String,
    pub description: String,
}

impl Connection {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            kind: ConnectionType::from_value(raw.get("type")),
            label: text(raw, "label"),
            description: text(raw, "description"),
        }
    }

    /// The type alone is not content; it always has a value.
    pub fn has_content(&self) -> bool {
        !self.label.is_empty() || !self.description.is_empty()
    }
}

// ============================================================================
// Impact and blueprint
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Impact {
    pub target_audience: String,
    pub expected_effect: String,
    pub caution: String,
}

impl Impact {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            target_audience: text(raw, "targetAudience"),
            expected_effect: text(raw, "expectedEffect"),
            caution: text(raw, "caution"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target_audience.is_empty() && self.expected_effect.is_empty() && self.caution.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintSection {
    pub title: String,
    pub description: String,
    pub checklist: Vec<String>,
}

impl BlueprintSection {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            title: text(raw, "title"),
            description: text(raw, "description"),
            checklist: list(raw, "checklist"),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.description.is_empty() || !self.checklist.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubcategoryFocus {
    pub title: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

impl SubcategoryFocus {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            title: text(raw, "title"),
            summary: text(raw, "summary"),
            highlights: list(raw, "highlights"),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.summary.is_empty() || !self.highlights.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryBlueprint {
    pub overview: String,
    pub sections: Vec<BlueprintSection>,
    pub subcategory_focus: Vec<SubcategoryFocus>,
}

impl CategoryBlueprint {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            overview: text(raw, "overview"),
            sections: content_records(
                raw,
                "sections",
                BlueprintSection::normalize,
                BlueprintSection::has_content,
            ),
            subcategory_focus: content_records(
                raw,
                "subcategoryFocus",
                SubcategoryFocus::normalize,
                SubcategoryFocus::has_content,
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.overview.is_empty() && self.sections.is_empty() && self.subcategory_focus.is_empty()
    }
}

// ============================================================================
// Guide
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiGuide {
    pub summary_card_bullets: Vec<String>,
    pub background_insights: Vec<String>,
    pub key_action_steps: Vec<String>,
    pub impact: Impact,
    pub connection_guides: Vec<Connection>,
    pub category_blueprint: CategoryBlueprint,
}

impl AiGuide {
    /// The overview text, held by the blueprint.
    pub fn overview(&self) -> &str {
        &self.category_blueprint.overview
    }
}

impl Guide for AiGuide {
    fn create(_options: GuideOptions) -> Self {
        Self::default()
    }

    fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::create(options);
        }
        Self {
            summary_card_bullets: list(raw, "summaryCardBullets"),
            background_insights: list(raw, "backgroundInsights"),
            key_action_steps: list(raw, "keyActionSteps"),
            impact: raw.get("impact").map(Impact::normalize).unwrap_or_default(),
            connection_guides: content_records(
                raw,
                "connectionGuides",
                Connection::normalize,
                Connection::has_content,
            ),
            category_blueprint: raw
                .get("categoryBlueprint")
                .map(CategoryBlueprint::normalize)
                .unwrap_or_default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.summary_card_bullets.is_empty()
            && self.background_insights.is_empty()
            && self.key_action_steps.is_empty()
            && self.impact.is_empty()
            && self.connection_guides.is_empty()
            && self.category_blueprint.is_empty()
    }
}
