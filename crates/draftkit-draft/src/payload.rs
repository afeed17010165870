//! The document written when a draft is submitted.

use serde::Serialize;

use draftkit_core::{Result, ThemeId};
use draftkit_guide::{AiGuide, ContentGuide, HealthGuide, LifestyleGuide, ParentingGuide, StockGuide, SupportGuide};
use draftkit_taxonomy::CategoryTaxonomy;

use crate::load::DraftLoader;
use crate::model::{Draft, ImpactToLife, Perspective, Source, ThemeContent, dedupe_keywords};

/// A draft flattened for persistence.
///
/// Every guide field is always present. The one matching the theme holds
/// the guide and the rest serialize as `null`, as do perspective views on
/// themes that do not show them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub theme: ThemeId,
    pub easy_summary: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub summary_card: String,
    pub background: String,
    pub key_points: Vec<String>,
    pub progressive_view: Option<Perspective>,
    pub conservative_view: Option<Perspective>,
    pub impact_to_life: Option<ImpactToLife>,
    pub sources: Vec<Source>,
    pub core_keywords: Vec<String>,
    pub groupbuy_link: String,
    pub parenting_guide: Option<ParentingGuide>,
    pub health_guide: Option<HealthGuide>,
    pub lifestyle_guide: Option<LifestyleGuide>,
    pub stock_guide: Option<StockGuide>,
    pub ai_guide: Option<AiGuide>,
    pub support_guide: Option<SupportGuide>,
}

impl SubmissionPayload {
    /// Build the payload, using `fallback_date` when the draft has none.
    pub fn from_draft(draft: &Draft, fallback_date: &str) -> Self {
        let theme = draft.theme();
        let (category, subcategory) =
            CategoryTaxonomy::for_theme(theme).resolve_pair(&draft.category, &draft.subcategory);
        let date = match draft.date.trim() {
            "" => fallback_date.to_string(),
            date => date.to_string(),
        };

        let mut payload = Self {
            theme,
            easy_summary: draft.easy_summary.clone(),
            title: draft.title.clone(),
            date,
            category,
            subcategory,
            summary_card: draft.summary_card.clone(),
            background: draft.background.clone(),
            key_points: draft
                .key_points
                .iter()
                .map(|point| point.trim())
                .filter(|point| !point.is_empty())
                .map(str::to_string)
                .collect(),
            progressive_view: None,
            conservative_view: None,
            impact_to_life: draft.impact_to_life.clone(),
            sources: draft.trimmed_sources(),
            core_keywords: dedupe_keywords(&draft.core_keywords),
            groupbuy_link: String::new(),
            parenting_guide: None,
            health_guide: None,
            lifestyle_guide: None,
            stock_guide: None,
            ai_guide: None,
            support_guide: None,
        };

        match &draft.content {
            ThemeContent::Perspectives {
                progressive_view,
                conservative_view,
            } if theme.shows_perspectives() => {
                payload.progressive_view = progressive_view.clone();
                payload.conservative_view = conservative_view.clone();
            }
            ThemeContent::Perspectives { .. } => {}
            ThemeContent::Groupbuy { link } => payload.groupbuy_link = link.trim().to_string(),
            ThemeContent::Guide(guide) => payload.attach_guide(guide.renormalized()),
        }
        payload
    }

    fn attach_guide(&mut self, guide: ContentGuide) {
        match guide {
            ContentGuide::Parenting(g) => self.parenting_guide = Some(g),
            ContentGuide::Health(g) => self.health_guide = Some(g),
            ContentGuide::Lifestyle(g) => self.lifestyle_guide = Some(g),
            ContentGuide::Stocks(g) => self.stock_guide = Some(g),
            ContentGuide::Ai(g) => self.ai_guide = Some(g),
            ContentGuide::Support(g) => self.support_guide = Some(g),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Build the submission payload, dating undated drafts with the current
/// Asia/Seoul time.
pub fn build_submission_payload(draft: &Draft) -> SubmissionPayload {
    DraftLoader::default().submission_payload(draft)
}

/// The submission payload as compact JSON.
pub fn stringify_draft_for_clipboard(draft: &Draft) -> Result<String> {
    Ok(serde_json::to_string(&build_submission_payload(draft))?)
}
