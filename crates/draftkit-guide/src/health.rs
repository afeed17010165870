//! Health guide: information organised by condition.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::{Guide, GuideOptions, list, preset_records, text};

/// Conditions offered to editors when a guide starts out empty.
pub const HEALTH_CONDITION_PRESETS: &[&str] = &[
    "치매",
    "자폐 스펙트럼",
    "ADHD",
    "우울/불안",
    "허리 통증",
    "심혈관 질환",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Condition {
    pub name: String,
    pub summary: String,
    pub warning_signs: Vec<String>,
    pub care_tips: Vec<String>,
    pub resources: Vec<String>,
}

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn normalize(raw: &Value) -> Self {
        Self {
            name: text(raw, "name"),
            summary: text(raw, "summary"),
            warning_signs: list(raw, "warningSigns"),
            care_tips: list(raw, "careTips"),
            resources: list(raw, "resources"),
        }
    }

    fn has_authored_content(&self) -> bool {
        !self.summary.is_empty()
            || !self.warning_signs.is_empty()
            || !self.care_tips.is_empty()
            || !self.resources.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthGuide {
    pub overview: String,
    pub conditions: Vec<Condition>,
    pub lifestyle_tips: Vec<String>,
    pub emergency_guide: Vec<String>,
}

fn preset_conditions(options: GuideOptions) -> Vec<Condition> {
    if !options.with_presets {
        return Vec::new();
    }
    HEALTH_CONDITION_PRESETS
        .iter()
        .map(|name| Condition::new(*name))
        .collect()
}

impl Guide for HealthGuide {
    fn create(options: GuideOptions) -> Self {
        Self {
            conditions: preset_conditions(options),
            ..Self::default()
        }
    }

    fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::create(options);
        }
        Self {
            overview: text(raw, "overview"),
            conditions: preset_records(raw, "conditions", Condition::normalize, || {
                preset_conditions(options)
            }),
            lifestyle_tips: list(raw, "lifestyleTips"),
            emergency_guide: list(raw, "emergencyGuide"),
        }
    }

    fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.lifestyle_tips.is_empty()
            && self.emergency_guide.is_empty()
            && !self.conditions.iter().any(Condition::has_authored_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_newline_text_becomes_list() {
        let raw = json!({"overview": "x", "lifestyleTips": "a\nb\n\nc"});
        let guide = HealthGuide::normalize(&raw, GuideOptions::default());
        assert_eq!(guide.lifestyle_tips, vec!["a", "b", "c"]);
        assert_eq!(guide.overview, "x");
    }

    #[test]
    fn test_missing_conditions_use_presets() {
        let guide = HealthGuide::normalize(&json!({}), GuideOptions::default());
        let names: Vec<_> = guide.conditions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, HEALTH_CONDITION_PRESETS);
        assert!(guide.is_empty());
    }

    #[test]
    fn test_given_conditions_replace_presets() {
        let raw = json!({
            "conditions": [{
                "name": " 당뇨 ",
                "warningSigns": ["갈증", " "],
                "resources": "https://example.org"
            }]
        });
        let guide = HealthGuide::normalize(&raw, GuideOptions::default());
        assert_eq!(guide.conditions.len(), 1);
        assert_eq!(guide.conditions[0].name, "당뇨");
        assert_eq!(guide.conditions[0].warning_signs, vec!["갈증"]);
        assert_eq!(guide.conditions[0].resources, vec!["https://example.org"]);
        assert!(!guide.is_empty());
    }

    #[test]
    fn test_scalar_fields_coerced() {
        let raw = json!({"overview": 42, "emergencyGuide": [true]});
        let guide = HealthGuide::normalize(&raw, GuideOptions::without_presets());
        assert_eq!(guide.overview, "42");
        assert_eq!(guide.emergency_guide, vec!["true"]);
        assert!(guide.conditions.is_empty());
    }

    #[test]
    fn test_renormalized_keeps_preset_conditions() {
        let guide = HealthGuide::create(GuideOptions::default());
        assert_eq!(guide.renormalized(), guide);
    }
}
