//! Parenting guide: advice organised by child age group.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::{Guide, GuideOptions, list, preset_records, text};

/// Age groups offered to editors when a guide starts out empty.
pub const PARENTING_AGE_GROUP_PRESETS: &[&str] = &[
    "임신/출산 준비",
    "0~6개월 영아",
    "7~12개월 영아",
    "13~24개월 걸음마기",
    "3~5세 유아",
    "6세 이상 학령기",
];

/// Advice for one age range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgeGroup {
    pub age_range: String,
    pub focus_summary: String,
    pub development_focus: Vec<String>,
    pub care_tips: Vec<String>,
    pub resources: Vec<String>,
}

impl AgeGroup {
    /// An empty group labelled with `age_range`.
    pub fn new(age_range: impl Into<String>) -> Self {
        Self {
            age_range: age_range.into(),
            ..Self::default()
        }
    }

    /// Rebuild a group from JSON. Non-objects yield an empty group.
    pub fn normalize(raw: &Value) -> Self {
        Self {
            age_range: text(raw, "ageRange"),
            focus_summary: text(raw, "focusSummary"),
            development_focus: list(raw, "developmentFocus"),
            care_tips: list(raw, "careTips"),
            resources: list(raw, "resources"),
        }
    }

    fn has_authored_content(&self) -> bool {
        !self.focus_summary.is_empty()
            || !self.development_focus.is_empty()
            || !self.care_tips.is_empty()
            || !self.resources.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentingGuide {
    pub overview: String,
    pub age_groups: Vec<AgeGroup>,
    pub general_tips: Vec<String>,
    pub emergency_contacts: Vec<String>,
}

fn preset_age_groups(options: GuideOptions) -> Vec<AgeGroup> {
    if options.with_presets {
        PARENTING_AGE_GROUP_PRESETS
            .iter()
            .map(|label| AgeGroup::new(*label))
            .collect()
    } else {
        Vec::new()
    }
}

impl Guide for ParentingGuide {
    fn create(options: GuideOptions) -> Self {
        Self {
            age_groups: preset_age_groups(options),
            ..Self::default()
        }
    }

    fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::create(options);
        }
        Self {
            overview: text(raw, "overview"),
            age_groups: preset_records(raw, "ageGroups", AgeGroup::normalize, || {
                preset_age_groups(options)
            }),
            general_tips: list(raw, "generalTips"),
            emergency_contacts: list(raw, "emergencyContacts"),
        }
    }

    fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.general_tips.is_empty()
            && self.emergency_contacts.is_empty()
            && !self.age_groups.iter().any(AgeGroup::has_authored_content)
    }
}
