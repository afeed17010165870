//! Editable title fields, grouped for editing screens.

use draftkit_core::ThemeId;
use serde::Serialize;

use crate::resolver::SectionTitleResolver;

/// One editable title leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleField {
    pub path: String,
    pub label: String,
    /// The default text at `path`.
    pub placeholder: String,
    pub multiline: bool,
}

/// A titled group of fields: `general` or one theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFieldGroup {
    pub id: String,
    pub label: String,
    pub description: String,
    pub fields: Vec<TitleField>,
}

type FieldRow = (&'static str, &'static str);

const GENERAL_FIELDS: &[FieldRow] = &[
    ("general.easySummary.title", "쉬운 요약 카드 제목"),
    ("general.background.title", "배경 설명 제목"),
    ("general.keyPoints.title", "핵심 쟁점 제목"),
    ("general.progressiveView.title", "진보 시각 섹션 제목"),
    ("general.progressiveView.badge", "진보 시각 배지 문구"),
    ("general.conservativeView.title", "보수 시각 섹션 제목"),
    ("general.conservativeView.badge", "보수 시각 배지 문구"),
    ("general.impactToLife.title", "생활 영향 섹션 제목"),
    ("general.impactToLife.badge", "생활 영향 배지 문구"),
    ("general.sources.title", "근거 자료 섹션 제목"),
    ("general.relatedLinks.title", "관련 링크 섹션 제목"),
];

const AI_FIELDS: &[FieldRow] = &[
    ("themes.ai.summaryCard.title", "요약 카드 제목"),
    ("themes.ai.summaryCard.badge", "요약 카드 배지"),
    ("themes.ai.background.title", "배경 설명 제목"),
    ("themes.ai.background.badge", "배경 설명 배지"),
    ("themes.ai.keyActionSteps.title", "핵심 실행 단계 제목"),
    ("themes.ai.keyActionSteps.badge", "핵심 실행 단계 배지"),
    ("themes.ai.impact.title", "생활/업무 영향 제목"),
    ("themes.ai.impact.badge", "생활/업무 영향 배지"),
    ("themes.ai.connectionGuides.title", "연결 가이드 제목"),
    ("themes.ai.connectionGuides.badge", "연결 가이드 배지"),
    ("themes.ai.categoryBlueprint.title", "카테고리별 추천 구조 제목"),
    ("themes.ai.categoryBlueprint.badge", "카테고리별 추천 구조 배지"),
    ("themes.ai.subcategoryFocus.title", "하위카테고리 포커스 제목"),
    ("themes.ai.subcategoryFocus.badge", "하위카테고리 포커스 배지"),
];

const PARENTING_FIELDS: &[FieldRow] = &[
    ("themes.parenting.overview.title", "개요 섹션 제목"),
    ("themes.parenting.generalTips.title", "전체 공통 팁 제목"),
    ("themes.parenting.generalTips.badge", "전체 공통 팁 배지"),
    ("themes.parenting.ageGroupFallback.title", "연령대 카드 기본 제목"),
    ("themes.parenting.ageGroups.badge", "연령대 카드 배지"),
    ("themes.parenting.emergencyContacts.title", "긴급/상담 연락처 제목"),
    ("themes.parenting.emergencyContacts.badge", "긴급/상담 연락처 배지"),
];

const HEALTH_FIELDS: &[FieldRow] = &[
    ("themes.health.overview.title", "개요 섹션 제목"),
    ("themes.health.lifestyleTips.title", "생활 습관 팁 제목"),
    ("themes.health.lifestyleTips.badge", "생활 습관 팁 배지"),
    ("themes.health.conditionFallback.title", "건강 주제 기본 제목"),
    ("themes.health.conditions.badge", "건강 주제 배지"),
    ("themes.health.emergencyGuide.title", "긴급 대응 가이드 제목"),
    ("themes.health.emergencyGuide.badge", "긴급 대응 가이드 배지"),
];

const LIFESTYLE_FIELDS: &[FieldRow] = &[
    ("themes.lifestyle.overview.title", "개요 섹션 제목"),
    ("themes.lifestyle.quickTips.title", "생활 꿀팁 제목"),
    ("themes.lifestyle.quickTips.badge", "생활 꿀팁 배지"),
    ("themes.lifestyle.hotItems.title", "추천 아이템 제목"),
    ("themes.lifestyle.hotItems.badge", "추천 아이템 배지"),
    ("themes.lifestyle.hotDeals.title", "핫딜 정보 제목"),
    ("themes.lifestyle.hotDeals.badge", "핫딜 정보 배지"),
    ("themes.lifestyle.affiliateNotes.title", "제휴/운영 노트 제목"),
    ("themes.lifestyle.affiliateNotes.badge", "제휴/운영 노트 배지"),
];

const STOCKS_FIELDS: &[FieldRow] = &[
    ("themes.stocks.overview.title", "개요 섹션 제목"),
    ("themes.stocks.marketSummary.title", "시장 요약 제목"),
    ("themes.stocks.sectorHighlights.title", "섹터 하이라이트 제목"),
    ("themes.stocks.sectorHighlights.badge", "섹터 하이라이트 배지"),
    ("themes.stocks.companyAnalyses.title", "기업 분석 제목"),
    ("themes.stocks.companyAnalyses.badge", "기업 분석 배지"),
    ("themes.stocks.watchlist.title", "워치리스트 제목"),
    ("themes.stocks.watchlist.badge", "워치리스트 배지"),
];

const SUPPORT_FIELDS: &[FieldRow] = &[
    ("themes.support.overview.title", "개요 섹션 제목"),
    ("themes.support.programs.fallbackTitle", "지원 프로그램 기본 제목"),
    ("themes.support.programs.badge", "지원 프로그램 배지"),
    ("themes.support.commonResources.title", "공통 참고자료 제목"),
    ("themes.support.commonResources.badge", "공통 참고자료 배지"),
];

const GROUPBUY_FIELDS: &[FieldRow] = &[
    ("themes.groupbuy.linkSection.title", "링크 섹션 제목"),
    ("themes.groupbuy.linkSection.note", "링크 하단 안내 문구"),
];

const THEME_GROUPS: &[(ThemeId, &str, &[FieldRow])] = &[
    (ThemeId::Ai, "AI 테마 전용 카드 제목과 배지 문구입니다.", AI_FIELDS),
    (ThemeId::Parenting, "육아 테마 전용 카드 제목과 배지 문구입니다.", PARENTING_FIELDS),
    (ThemeId::Health, "건강 테마 전용 카드 제목과 배지 문구입니다.", HEALTH_FIELDS),
    (ThemeId::Lifestyle, "생활정보 테마 전용 카드 제목과 배지 문구입니다.", LIFESTYLE_FIELDS),
    (ThemeId::Stocks, "주식정보 테마 전용 카드 제목과 배지 문구입니다.", STOCKS_FIELDS),
    (ThemeId::Support, "정부지원정보 테마 전용 카드 제목과 배지 문구입니다.", SUPPORT_FIELDS),
    (ThemeId::Groupbuy, "공동구매 전용 링크 섹션 문구입니다.", GROUPBUY_FIELDS),
];

fn fields(rows: &[FieldRow], resolver: &SectionTitleResolver) -> Vec<TitleField> {
    rows.iter()
        .map(|(path, label)| TitleField {
            path: path.to_string(),
            label: label.to_string(),
            placeholder: resolver.default_value(path),
            multiline: path.ends_with(".note"),
        })
        .collect()
}

/// Editable title fields, `general` first, then one group per theme.
pub fn title_field_groups() -> Vec<TitleFieldGroup> {
    let resolver = SectionTitleResolver::new();
    let mut groups = vec![TitleFieldGroup {
        id: "general".to_string(),
        label: "공통 섹션".to_string(),
        description: "모든 테마에서 공통으로 사용하는 카드 소제목입니다.".to_string(),
        fields: fields(GENERAL_FIELDS, &resolver),
    }];
    groups.extend(THEME_GROUPS.iter().map(|(theme, description, rows)| {
        TitleFieldGroup {
            id: theme.as_str().to_string(),
            label: format!("{} 테마", theme.label()),
            description: description.to_string(),
            fields: fields(rows, &resolver),
        }
    }));
    groups
}
