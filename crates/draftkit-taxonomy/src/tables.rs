//! Frozen category tables, one per theme.
//!
//! Each table maps a category label to its ordered subcategory labels.
//! Order is significant: the first category is the theme's default.

use draftkit_core::ThemeId;

/// One category and its subcategories.
pub type CategoryEntry = (&'static str, &'static [&'static str]);

/// Label used by listing screens for "no category filter".
pub const ALL_CATEGORIES_LABEL: &str = "전체";

pub(crate) const POLICY: &[CategoryEntry] = &[
    (
        "부동산",
        &[
            "주거·주택공급 정책",
            "전월세·임대차 제도",
            "재건축·재개발·도시정비",
            "부동산 세제·규제",
        ],
    ),
    (
        "노동/노조",
        &[
            "임금·근로조건 정책",
            "노사협상·파업 이슈",
            "고용·산재·안전 규제",
            "산업별 노동 현안",
        ],
    ),
    (
        "사법/검찰",
        &[
            "수사·기소·사건 처리",
            "법원 판결·양형 논쟁",
            "사법개혁·제도개편",
            "감찰·징계·인사",
        ],
    ),
    (
        "외교/안보",
        &[
            "정상외교·국제협력",
            "군사·방위 정책",
            "동맹 현안",
            "대북·통일 정책",
        ],
    ),
    (
        "기타",
        &[
            "국회·정당·정치개혁",
            "복지·보건·교육 정책",
            "과학·디지털·규제 혁신",
            "환경·에너지 전환",
        ],
    ),
];

pub(crate) const PARENTING: &[CategoryEntry] = &[
    (
        "임신/출산 준비",
        &[
            "임신 건강관리",
            "출산 준비물·체크리스트",
            "산후 회복·케어",
            "정부 지원·제도",
        ],
    ),
    (
        "0~2세 영아",
        &[
            "수면·일상 루틴",
            "모유수유·이유식",
            "발달 자극 놀이",
            "예방접종·건강관리",
        ],
    ),
    (
        "3~5세 유아",
        &[
            "언어·사회성 발달",
            "놀이·교육 활동",
            "생활습관·훈육",
            "어린이집·유치원 준비",
        ],
    ),
    (
        "6세 이상",
        &[
            "학습 습관·학교생활",
            "정서·행동 지원",
            "안전교육·생활기술",
            "돌봄·방과후 프로그램",
        ],
    ),
];

pub(crate) const LIFESTYLE: &[CategoryEntry] = &[
    (
        "행정/정부 서비스",
        &[
            "민원·증명서 발급",
            "복지·지원금 신청",
            "전입·주거 행정",
            "교통·운전 절차",
        ],
    ),
    (
        "금융/세무",
        &[
            "세금·연말정산",
            "대출·금융상품",
            "재테크·저축 전략",
            "보험·보장 점검",
        ],
    ),
    (
        "소비/쇼핑",
        &[
            "생활필수품 추천",
            "가전·디지털",
            "푸드·외식",
            "여행·문화 할인",
        ],
    ),
    (
        "생활관리",
        &[
            "청소·정리수납",
            "건강·운동 루틴",
            "에너지 절약·광열비",
            "반려동물 케어",
        ],
    ),
];

pub(crate) const HEALTH: &[CategoryEntry] = &[
    (
        "만성질환 관리",
        &[
            "심혈관 질환",
            "당뇨·대사증후군",
            "호흡기·알레르기",
            "근골격계·통증",
        ],
    ),
    (
        "정신건강",
        &[
            "우울·불안 관리",
            "ADHD·집중력",
            "치매·인지장애",
            "수면·스트레스",
        ],
    ),
    (
        "생애주기 건강",
        &[
            "소아·청소년 건강",
            "여성 건강",
            "남성 건강",
            "노년 건강",
        ],
    ),
    (
        "예방/응급",
        &[
            "예방접종·검진",
            "응급 상황 대응",
            "운동·재활",
            "영양·식단",
        ],
    ),
];

pub(crate) const STOCKS: &[CategoryEntry] = &[
    (
        "시장/지수",
        &[
            "코스피/코스닥 동향",
            "금리/환율",
            "수급/수요공급",
            "변동성/파생",
        ],
    ),
    (
        "산업/섹터",
        &[
            "반도체",
            "2차전지/전기차",
            "인터넷/게임",
            "바이오/헬스케어",
        ],
    ),
    (
        "기업/실적",
        &["실적발표", "가이던스/IR", "신사업/M&A", "규제/리스크"],
    ),
    (
        "거시/정책",
        &[
            "금리/통화정책",
            "재정/세제",
            "산업정책/보조금",
            "무역/지정학",
        ],
    ),
    (
        "투자전략",
        &[
            "밸류/퀄리티",
            "성장/모멘텀",
            "배당/리츠",
            "퀀트/리밸런싱",
        ],
    ),
];

pub(crate) const SUPPORT: &[CategoryEntry] = &[
    (
        "생활지원",
        &[
            "긴급복지·생계지원",
            "에너지·통신비 지원",
            "문화·여가 바우처",
            "기타 생활안정",
        ],
    ),
    (
        "육아/교육",
        &[
            "임신·출산 지원금",
            "영유아 보육·양육수당",
            "초중고 교육비 지원",
            "청년 교육·장학금",
        ],
    ),
    (
        "취업/창업",
        &[
            "구직활동·실업급여",
            "직업훈련·역량강화",
            "청년·중장년 일자리",
            "소상공인·창업자금",
        ],
    ),
    (
        "주거/복지",
        &[
            "주거안정·월세대출",
            "공공임대·주택공급",
            "의료비·건강보험 지원",
            "장애인·노인 복지",
        ],
    ),
];

/// The table for a theme. Themes without a taxonomy get an empty table.
pub fn table_for(theme: ThemeId) -> &'static [CategoryEntry] {
    match theme {
        ThemeId::Policy => POLICY,
        ThemeId::Parenting => PARENTING,
        ThemeId::Lifestyle => LIFESTYLE,
        ThemeId::Health => HEALTH,
        ThemeId::Stocks => STOCKS,
        ThemeId::Support => SUPPORT,
        ThemeId::Ai | ThemeId::Groupbuy => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_four_or_more_subcategories() {
        for theme in ThemeId::ALL {
            for (category, subs) in table_for(theme) {
                assert!(subs.len() >= 4, "{theme}/{category} is too short");
            }
        }
    }

    #[test]
    fn test_labels_are_unique_within_a_theme() {
        for theme in ThemeId::ALL {
            let table = table_for(theme);
            let categories: HashSet<_> = table.iter().map(|(c, _)| *c).collect();
            assert_eq!(categories.len(), table.len());
            for (_, subs) in table {
                let unique: HashSet<_> = subs.iter().collect();
                assert_eq!(unique.len(), subs.len());
            }
        }
    }

    #[test]
    fn test_themes_without_taxonomy() {
        assert!(table_for(ThemeId::Ai).is_empty());
        assert!(table_for(ThemeId::Groupbuy).is_empty());
        assert_eq!(table_for(ThemeId::Stocks).len(), 5);
    }
}
