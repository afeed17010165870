//! The tagged union over every theme guide.

use serde::Serialize;
use serde_json::Value;

use draftkit_core::ThemeId;

use crate::ai::AiGuide;
use crate::health::HealthGuide;
use crate::lifestyle::LifestyleGuide;
use crate::parenting::ParentingGuide;
use crate::stocks::StockGuide;
use crate::support::SupportGuide;
use crate::traits::{Guide, GuideOptions};

/// Wire field names for every guide, in payload order.
pub const GUIDE_FIELD_NAMES: [&str; 6] = [
    "parentingGuide",
    "healthGuide",
    "lifestyleGuide",
    "stockGuide",
    "aiGuide",
    "supportGuide",
];

/// Exactly one theme guide.
///
/// Serializes as the bare guide object; the theme is carried alongside it
/// by whoever embeds the guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentGuide {
    Parenting(ParentingGuide),
    Health(HealthGuide),
    Lifestyle(LifestyleGuide),
    Stocks(StockGuide),
    Support(SupportGuide),
    Ai(AiGuide),
}

impl ContentGuide {
    /// Create the guide for `theme`. Themes without a guide yield `None`.
    pub fn create(theme: ThemeId, options: GuideOptions) -> Option<Self> {
        Some(match theme {
            ThemeId::Parenting => Self::Parenting(ParentingGuide::create(options)),
            ThemeId::Health => Self::Health(HealthGuide::create(options)),
            ThemeId::Lifestyle => Self::Lifestyle(LifestyleGuide::create(options)),
            ThemeId::Stocks => Self::Stocks(StockGuide::create(options)),
            ThemeId::Support => Self::Support(SupportGuide::create(options)),
            ThemeId::Ai => Self::Ai(AiGuide::create(options)),
            ThemeId::Policy | ThemeId::Groupbuy => return None,
        })
    }

    /// Normalize raw JSON into the guide for `theme`.
    pub fn normalize(theme: ThemeId, raw: &Value, options: GuideOptions) -> Option<Self> {
        Some(match theme {
            ThemeId::Parenting => Self::Parenting(ParentingGuide::normalize(raw, options)),
            ThemeId::Health => Self::Health(HealthGuide::normalize(raw, options)),
            ThemeId::Lifestyle => Self::Lifestyle(LifestyleGuide::normalize(raw, options)),
            ThemeId::Stocks => Self::Stocks(StockGuide::normalize(raw, options)),
            ThemeId::Support => Self::Support(SupportGuide::normalize(raw, options)),
            ThemeId::Ai => Self::Ai(AiGuide::normalize(raw, options)),
            ThemeId::Policy | ThemeId::Groupbuy => return None,
        })
    }

    /// Wire field name of the guide for `theme`, if the theme has one.
    pub fn field_name_for(theme: ThemeId) -> Option<&'static str> {
        match theme {
            ThemeId::Parenting => Some("parentingGuide"),
            ThemeId::Health => Some("healthGuide"),
            ThemeId::Lifestyle => Some("lifestyleGuide"),
            ThemeId::Stocks => Some("stockGuide"),
            ThemeId::Support => Some("supportGuide"),
            ThemeId::Ai => Some("aiGuide"),
            ThemeId::Policy | ThemeId::Groupbuy => None,
        }
    }

    pub fn theme(&self) -> ThemeId {
        match self {
            Self::Parenting(_) => ThemeId::Parenting,
            Self::Health(_) => ThemeId::Health,
            Self::Lifestyle(_) => ThemeId::Lifestyle,
            Self::Stocks(_) => ThemeId::Stocks,
            Self::Support(_) => ThemeId::Support,
            Self::Ai(_) => ThemeId::Ai,
        }
    }

    /// Wire field name of this guide, e.g. `parentingGuide`.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Parenting(_) => "parentingGuide",
            Self::Health(_) => "healthGuide",
            Self::Lifestyle(_) => "lifestyleGuide",
            Self::Stocks(_) => "stockGuide",
            Self::Support(_) => "supportGuide",
            Self::Ai(_) => "aiGuide",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Parenting(g) => g.is_empty(),
            Self::Health(g) => g.is_empty(),
            Self::Lifestyle(g) => g.is_empty(),
            Self::Stocks(g) => g.is_empty(),
            Self::Support(g) => g.is_empty(),
            Self::Ai(g) => g.is_empty(),
        }
    }

    /// Normalize this guide's own output again, without presets.
    pub fn renormalized(&self) -> Self {
        match self {
            Self::Parenting(g) => Self::Parenting(g.renormalized()),
            Self::Health(g) => Self::Health(g.renormalized()),
            Self::Lifestyle(g) => Self::Lifestyle(g.renormalized()),
            Self::Stocks(g) => Self::Stocks(g.renormalized()),
            Self::Support(g) => Self::Support(g.renormalized()),
            Self::Ai(g) => Self::Ai(g.renormalized()),
        }
    }

    /// The guide as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_per_theme() {
        for theme in ThemeId::ALL {
            let guide = ContentGuide::create(theme, GuideOptions::default());
            match theme {
                ThemeId::Policy | ThemeId::Groupbuy => assert!(guide.is_none()),
                _ => {
                    let guide = guide.unwrap();
                    assert_eq!(guide.theme(), theme);
                    assert_eq!(Some(guide.field_name()), ContentGuide::field_name_for(theme));
                    assert!(guide.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_field_names_cover_every_guide() {
        let mut names: Vec<_> = ThemeId::ALL
            .into_iter()
            .filter_map(ContentGuide::field_name_for)
            .collect();
        names.sort_unstable();
        let mut expected = GUIDE_FIELD_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_normalize_dispatches_by_theme() {
        let raw = json!({"overview": "o", "watchlist": ["A"]});
        let guide = ContentGuide::normalize(ThemeId::Stocks, &raw, GuideOptions::default()).unwrap();
        match &guide {
            ContentGuide::Stocks(stocks) => assert_eq!(stocks.watchlist, vec!["A"]),
            other => panic!("unexpected guide {other:?}"),
        }
        assert!(ContentGuide::normalize(ThemeId::Policy, &raw, GuideOptions::default()).is_none());
    }

    #[test]
    fn test_serializes_untagged() {
        let guide = ContentGuide::create(ThemeId::Lifestyle, GuideOptions::default()).unwrap();
        let value = guide.to_value();
        assert_eq!(value["overview"], json!(""));
        assert!(value.get("Lifestyle").is_none());
    }

    #[test]
    fn test_renormalized_keeps_variant() {
        let guide = ContentGuide::create(ThemeId::Parenting, GuideOptions::default()).unwrap();
        assert_eq!(guide.renormalized(), guide);
    }
}
