//! Lifestyle guide: quick tips, recommended items and deals.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::{Guide, GuideOptions, content_records, list, text};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotItem {
    pub name: String,
    pub highlight: String,
    pub link: String,
}

impl HotItem {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            name: text(raw, "name"),
            highlight: text(raw, "highlight"),
            link: text(raw, "link"),
        }
    }

    pub fn has_content(&self) -> bool {
        !(self.name.is_empty() && self.highlight.is_empty() && self.link.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotDeal {
    pub title: String,
    pub description: String,
    pub link: String,
    pub price_info: String,
}

impl HotDeal {
    pub fn normalize(raw: &Value) -> Self {
        Self {
            title: text(raw, "title"),
            description: text(raw, "description"),
            link: text(raw, "link"),
            price_info: text(raw, "priceInfo"),
        }
    }

    pub fn has_content(&self) -> bool {
        [&self.title, &self.description, &self.link, &self.price_info]
            .iter()
            .any(|field| !field.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleGuide {
    pub overview: String,
    pub quick_tips: Vec<String>,
    pub hot_items: Vec<HotItem>,
    pub hot_deals: Vec<HotDeal>,
    pub affiliate_notes: Vec<String>,
}

impl Guide for LifestyleGuide {
    /// Lifestyle guides have no presets; the options are ignored.
    fn create(_options: GuideOptions) -> Self {
        Self::default()
    }

    fn normalize(raw: &Value, options: GuideOptions) -> Self {
        if !raw.is_object() {
            return Self::create(options);
        }
        Self {
            overview: text(raw, "overview"),
            quick_tips: list(raw, "quickTips"),
            hot_items: content_records(raw, "hotItems", HotItem::normalize, HotItem::has_content),
            hot_deals: content_records(raw, "hotDeals", HotDeal::normalize, HotDeal::has_content),
            affiliate_notes: list(raw, "affiliateNotes"),
        }
    }

    fn is_empty(&self) -> bool {
        self.overview.is_empty()
            && self.quick_tips.is_empty()
            && self.hot_items.is_empty()
            && self.hot_deals.is_empty()
            && self.affiliate_notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_records_dropped() {
        let raw = json!({
            "hotItems": [
                {"name": "", "highlight": "  ", "link": ""},
                {"name": "제습기", "link": " https://example.com/a "},
                null
            ],
            "hotDeals": [
                {"title": "", "priceInfo": "정보 부족"},
                {}
            ]
        });
        let guide = LifestyleGuide::normalize(&raw, GuideOptions::default());
        assert_eq!(guide.hot_items.len(), 1);
        assert_eq!(guide.hot_items[0].link, "https://example.com/a");
        assert_eq!(guide.hot_deals.len(), 1);
        assert_eq!(guide.hot_deals[0].price_info, "정보 부족");
    }

    #[test]
    fn test_non_array_records_become_empty() {
        let raw = json!({"hotItems": "제습기", "quickTips": ["팁"]});
        let guide = LifestyleGuide::normalize(&raw, GuideOptions::default());
        assert!(guide.hot_items.is_empty());
        assert_eq!(guide.quick_tips, vec!["팁"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(LifestyleGuide::create(GuideOptions::default()).is_empty());
        let guide = LifestyleGuide::normalize(
            &json!({"affiliateNotes": "쿠팡 파트너스 활동의 일환"}),
            GuideOptions::default(),
        );
        assert!(!guide.is_empty());
    }

    #[test]
    fn test_renormalized_round_trip() {
        let raw = json!({
            "overview": "o",
            "hotDeals": [{"title": "t", "description": "d", "link": "l", "priceInfo": "p"}]
        });
        let guide = LifestyleGuide::normalize(&raw, GuideOptions::default());
        assert_eq!(guide.renormalized(), guide);
    }
}
