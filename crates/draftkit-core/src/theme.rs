//! Theme registry.
//!
//! Every draft belongs to exactly one theme. The registry is a fixed table;
//! any unknown or missing theme id resolves to [`DEFAULT_THEME_ID`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire id of the theme used whenever a theme id cannot be resolved.
pub const DEFAULT_THEME_ID: &str = "policy";

/// Identifier of a content theme.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Incidents and policy, with progressive/conservative perspectives.
    #[default]
    Policy,
    /// Parenting information organised by age group.
    Parenting,
    /// Everyday practical information and deals.
    Lifestyle,
    /// Health information organised by condition.
    Health,
    /// Markets, sectors, and company analyses.
    Stocks,
    /// Government support programs.
    Support,
    /// AI usage guides.
    Ai,
    /// Group-buy announcements carrying a single outbound link.
    Groupbuy,
}

/// Static metadata describing a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMeta {
    /// The theme this entry describes.
    pub id: ThemeId,
    /// Display label.
    pub label: &'static str,
    /// One-paragraph editorial description.
    pub description: &'static str,
    /// Accent colour name used by presentation layers.
    pub accent: &'static str,
    /// Whether progressive/conservative perspective views are allowed.
    pub show_perspectives: bool,
}

const THEME_TABLE: &[ThemeMeta] = &[
    ThemeMeta {
        id: ThemeId::Policy,
        label: "사건/정책",
        description: "주요 정책 변화와 사회적 사건을 요약하고 진보/보수 시각을 비교합니다.",
        accent: "indigo",
        show_perspectives: true,
    },
    ThemeMeta {
        id: ThemeId::Parenting,
        label: "육아정보",
        description: "임신, 출산, 영유아 발달과 같은 육아 전반의 정보를 정리합니다. 실용적인 체크리스트와 신뢰할 수 있는 자료를 중심으로 큐레이션합니다.",
        accent: "rose",
        show_perspectives: false,
    },
    ThemeMeta {
        id: ThemeId::Lifestyle,
        label: "생활정보",
        description: "일상 생활에 바로 적용할 수 있는 행정, 금융, 소비자 생활 팁을 제공합니다. 복잡한 절차는 단계별 가이드로 설명합니다.",
        accent: "emerald",
        show_perspectives: false,
    },
    ThemeMeta {
        id: ThemeId::Health,
        label: "건강정보",
        description: "예방의학, 운동, 정신건강 등 건강 전반을 다룹니다. 공공기관 자료와 전문가 의견을 바탕으로 최신 정보를 전달합니다.",
        accent: "sky",
        show_perspectives: false,
    },
    ThemeMeta {
        id: ThemeId::Stocks,
        label: "주식정보",
        description: "시장 흐름과 업종 동향, 기업 실적을 정리하고 관심 종목을 점검합니다.",
        accent: "amber",
        show_perspectives: false,
    },
    ThemeMeta {
        id: ThemeId::Support,
        label: "정부지원정보",
        description: "지원 대상과 혜택, 신청 절차를 한눈에 볼 수 있도록 정부 지원 제도를 정리합니다.",
        accent: "violet",
        show_perspectives: false,
    },
    ThemeMeta {
        id: ThemeId::Ai,
        label: "AI 정보",
        description: "AI 도구 활용법과 실천 단계를 정리하고 관련 테마 가이드와 연결합니다.",
        accent: "cyan",
        show_perspectives: false,
    },
    ThemeMeta {
        id: ThemeId::Groupbuy,
        label: "공동구매정보",
        description: "진행 중인 공동구매 소식을 요약하고 참여 링크를 제공합니다.",
        accent: "orange",
        show_perspectives: false,
    },
];

impl ThemeId {
    /// All themes in registry order.
    pub const ALL: [ThemeId; 8] = [
        ThemeId::Policy,
        ThemeId::Parenting,
        ThemeId::Lifestyle,
        ThemeId::Health,
        ThemeId::Stocks,
        ThemeId::Support,
        ThemeId::Ai,
        ThemeId::Groupbuy,
    ];

    /// The wire id of this theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Policy => "policy",
            ThemeId::Parenting => "parenting",
            ThemeId::Lifestyle => "lifestyle",
            ThemeId::Health => "health",
            ThemeId::Stocks => "stocks",
            ThemeId::Support => "support",
            ThemeId::Ai => "ai",
            ThemeId::Groupbuy => "groupbuy",
        }
    }

    /// Parse an exact wire id. Returns `None` for anything unknown.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == id)
    }

    /// Resolve a possibly-unknown id, substituting the default theme.
    pub fn resolve(id: &str) -> Self {
        match Self::parse(id) {
            Some(theme) => theme,
            None => {
                log::debug!("unknown theme id {id:?}, using {DEFAULT_THEME_ID}");
                Self::default()
            }
        }
    }

    /// Resolve an optional JSON value holding a theme id.
    pub fn resolve_value(value: Option<&serde_json::Value>) -> Self {
        Self::resolve(value.and_then(|v| v.as_str()).unwrap_or_default())
    }

    /// Registry metadata for this theme.
    pub fn meta(&self) -> &'static ThemeMeta {
        // The table holds one entry per variant, in `ALL` order.
        &THEME_TABLE[*self as usize]
    }

    /// Whether perspective views are allowed for this theme.
    pub fn shows_perspectives(&self) -> bool {
        self.meta().show_perspectives
    }

    /// Display label of this theme.
    pub fn label(&self) -> &'static str {
        self.meta().label
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `id` names a registered theme.
pub fn is_valid_theme_id(id: &str) -> bool {
    ThemeId::parse(id).is_some()
}

/// The full registry, in display order.
pub fn all_themes() -> &'static [ThemeMeta] {
    THEME_TABLE
}
