//! Stock guide: market summary, sector highlights and company analyses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::{Guide, GuideOptions, content_records, list, text};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectorHighlight {
    pub name: String,
    pub outlook: String,
    /// Leading tickers or company names, one per entry.
    pub leaders: Vec<String>,
}

impl SectorHighlight {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            name: text(raw, "name"),
            outlook: text(raw, "outlook"),
            leaders: list(raw, "leaders"),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.name.is_empty() || !self.outlook.is_empty() || !self.leaders.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyAnalysis {
    pub name: String,
    pub thesis: String,
    pub catalysts: Vec<String>,
    pub risks: Vec<String>,
    pub valuation: String,
}

impl CompanyAnalysis {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            name: text(raw, "name"),
            thesis: text(raw, "thesis"),
            catalysts: list(raw, "catalysts"),
            risks: list(raw, "risks"),
            valuation: text(raw, "valuation"),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.name.is_empty()
            || !self.thesis.is_empty()
            || !self.valuation.is_empty()
            || !self.catalysts.is_empty()
            || !self.risks.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockGuide {
    pub overview: String,
    pub market_summary: String,
    pub sector_highlights: Vec<SectorHighlight>,
    pub company_analyses: Vec<CompanyAnalysis>,
    pub watchlist: Vec<String>,
}

impl Guide for StockGuide {
    fn create(_options: GuideOptions) -> Self {
        Self::default()
    }

    fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::create(options);
        }
        Self {
            overview: text(raw, "overview"),
            market_summary: text(raw, "marketSummary"),
            sector_highlights: content_records(
                raw,
                "sectorHighlights",
                SectorHighlight::normalize,
                SectorHighlight::has_content,
            ),
            company_analyses: content_records(
                raw,
                "companyAnalyses",
                CompanyAnalysis::normalize,
                CompanyAnalysis::has_content,
            ),
            watchlist: list(raw, "watchlist"),
        }
    }

    fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.market_summary.is_empty()
            && self.sector_highlights.is_empty()
            && self.company_analyses.is_empty()
            && self.watchlist.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_stock_guide() {
        let raw = json!({
            "overview": " 반도체 반등 ",
            "marketSummary": "코스피 상승",
            "sectorHighlights": [
                {"name": "반도체", "leaders": "삼성전자\nSK하이닉스"},
                {"name": "", "outlook": "", "leaders": []}
            ],
            "companyAnalyses": [
                {"name": "", "risks": ["환율"]},
                {"thesis": "", "catalysts": " "}
            ],
            "watchlist": ["005930", "", "000660"]
        });
        let guide = StockGuide::normalize(&raw, GuideOptions::default());
        assert_eq!(guide.overview, "반도체 반등");
        assert_eq!(guide.sector_highlights.len(), 1);
        assert_eq!(guide.sector_highlights[0].leaders, vec!["삼성전자", "SK하이닉스"]);
        // A record with only a list populated still counts as content.
        assert_eq!(guide.company_analyses.len(), 1);
        assert_eq!(guide.company_analyses[0].risks, vec!["환율"]);
        assert_eq!(guide.watchlist, vec!["005930", "000660"]);
    }

    #[test]
    fn test_create_is_empty() {
        let guide = StockGuide::create(GuideOptions::default());
        assert!(guide.is_empty());
        assert_eq!(StockGuide::normalize(&json!([]), GuideOptions::default()), guide);
    }
}
