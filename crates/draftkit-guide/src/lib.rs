//! Draftkit Guide: theme-specific content guides.
//!
//! # Modules
//!
//! - [`traits`]: the [`Guide`] trait and [`GuideOptions`]
//! - [`parenting`], [`health`], [`lifestyle`], [`stocks`], [`support`], [`ai`]:
//!   one guide shape per theme
//! - [`content`]: [`ContentGuide`], the union selected by theme

#![doc = include_str!("../README.md")]

pub mod ai;
pub mod content;
pub mod health;
pub mod lifestyle;
pub mod parenting;
pub mod stocks;
pub mod support;
pub mod traits;

pub use ai::{
    AiGuide, BlueprintSection, CategoryBlueprint, Connection, ConnectionType, Impact,
    SubcategoryFocus,
};
pub use content::{ContentGuide, GUIDE_FIELD_NAMES};
pub use health::{Condition, HEALTH_CONDITION_PRESETS, HealthGuide};
pub use lifestyle::{HotDeal, HotItem, LifestyleGuide};
pub use parenting::{AgeGroup, PARENTING_AGE_GROUP_PRESETS, ParentingGuide};
pub use stocks::{CompanyAnalysis, SectorHighlight, StockGuide};
pub use support::{SupportGuide, SupportProgram, support_program_presets};
pub use traits::{Guide, GuideOptions};

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::ThemeId;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z \n]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map(
                    prop_oneof![
                        Just("overview".to_string()),
                        Just("ageGroups".to_string()),
                        Just("conditions".to_string()),
                        Just("programs".to_string()),
                        Just("hotItems".to_string()),
                        Just("careTips".to_string()),
                        Just("name".to_string()),
                        Just("categoryBlueprint".to_string()),
                        Just("sections".to_string()),
                    ],
                    inner,
                    0..5,
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_renormalization_is_idempotent(raw in arb_json(), index in 1usize..7, presets: bool) {
            let theme = ThemeId::ALL[index];
            let options = GuideOptions::default().with_presets(presets);
            if let Some(guide) = ContentGuide::normalize(theme, &raw, options) {
                let once = guide.renormalized();
                prop_assert_eq!(once.renormalized(), once);
            }
        }
    }
}
