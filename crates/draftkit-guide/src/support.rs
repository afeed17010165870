//! Support guide: government programs with eligibility and application steps.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use draftkit_core::ThemeId;
use draftkit_taxonomy::CategoryTaxonomy;

use crate::traits::{Guide, GuideOptions, list, preset_records, text};

/// Program names offered when a guide starts out empty.
///
/// These follow the support theme's category labels.
pub fn support_program_presets() -> Vec<&'static str> {
    CategoryTaxonomy::for_theme(ThemeId::Support).categories()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportProgram {
    pub name: String,
    pub summary: String,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
    pub required_docs: Vec<String>,
    pub application_process: Vec<String>,
}

impl SupportProgram {
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
            eligibility: list(raw, "eligibility"),
            benefits: list(raw, "benefits"),
            required_docs: list(raw, "requiredDocs"),
            application_process: list(raw, "applicationProcess"),
        }
    }

    fn has_authored_content(&self) -> bool {
        !self.summary.is_empty()
            || !self.eligibility.is_empty()
            || !self.benefits.is_empty()
            || !self.required_docs.is_empty()
            || !self.application_process.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportGuide {
    pub overview: String,
    pub programs: Vec<SupportProgram>,
    pub common_resources: Vec<String>,
}

fn preset_programs(options: GuideOptions) -> Vec<SupportProgram> {
    if !options.with_presets {
        return Vec::new();
    }
    support_program_presets()
        .into_iter()
        .map(SupportProgram::new)
        .collect()
}

impl Guide for SupportGuide {
    fn create(options: GuideOptions) -> Self {
        Self {
            programs: preset_programs(options),
            ..Self::default()
        }
    }

    fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::create(options);
        }
        Self {
            overview: text(raw, "overview"),
            programs: preset_records(raw, "programs", SupportProgram::normalize, || {
                preset_programs(options)
            }),
            common_resources: list(raw, "commonResources"),
        }
    }

    fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.common_resources.is_empty()
            && !self.programs.iter().any(SupportProgram::has_authored_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presets_follow_support_categories() {
        assert_eq!(
            support_program_presets(),
            vec!["생활지원", "육아/교육", "취업/창업", "주거/복지"]
        );
        let guide = SupportGuide::create(GuideOptions::default());
        assert_eq!(guide.programs.len(), 4);
        assert!(guide.is_empty());
    }

    #[test]
    fn test_normalize_programs() {
        let raw = json!({
            "overview": "2026년 지원 동향",
            "programs": [{
                "name": "청년 월세 지원",
                "eligibility": "만 19~34세\n무주택",
                "benefits": ["월 20만원"],
                "requiredDocs": [],
                "applicationProcess": ["복지로 신청", ""]
            }],
            "commonResources": ["복지로", "정부24"]
        });
        let guide = SupportGuide::normalize(&raw, GuideOptions::default());
        assert_eq!(guide.programs.len(), 1);
        let program = &guide.programs[0];
        assert_eq!(program.eligibility, vec!["만 19~34세", "무주택"]);
        assert_eq!(program.application_process, vec!["복지로 신청"]);
        assert!(program.required_docs.is_empty());
        assert_eq!(guide.common_resources.len(), 2);
    }

    #[test]
    fn test_serialized_field_names() {
        let guide = SupportGuide::create(GuideOptions::default());
        let value = serde_json::to_value(&guide).unwrap();
        assert!(value["programs"][0].get("requiredDocs").is_some());
        assert!(value["programs"][0].get("applicationProcess").is_some());
        assert!(value.get("commonResources").is_some());
    }
}
