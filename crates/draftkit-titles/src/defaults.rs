//! The built-in section title tree.

use serde_json::{Value, json};

/// Default headings and badges, keyed `general.*` and `themes.<themeId>.*`.
pub fn default_section_titles() -> Value {
    json!({
        "general": {
            "easySummary": {"title": "쉬운 요약"},
            "background": {"title": "무슨 일이 있었나요?"},
            "keyPoints": {"title": "핵심 쟁점 정리"},
            "progressiveView": {"title": "진보 성향에서 보는 전망", "badge": "진보 시각"},
            "conservativeView": {"title": "보수 성향에서 보는 전망", "badge": "보수 시각"},
            "impactToLife": {"title": "생활에 어떤 영향이 있나요?", "badge": "체감 영향"},
            "sources": {"title": "근거 자료"},
            "relatedLinks": {"title": "관련 링크"}
        },
        "themes": {
            "ai": {
                "summaryCard": {"title": "요약 카드", "badge": "요약"},
                "background": {"title": "배경 설명", "badge": "배경"},
                "keyActionSteps": {"title": "핵심 실행 단계", "badge": "실행"},
                "impact": {"title": "생활/업무 영향", "badge": "영향"},
                "connectionGuides": {"title": "연결 가이드", "badge": "연결"},
                "categoryBlueprint": {"title": "카테고리별 추천 구조", "badge": "구조"},
                "subcategoryFocus": {"title": "하위카테고리 포커스", "badge": "포커스"}
            },
            "parenting": {
                "overview": {"title": "육아 테마 개요"},
                "generalTips": {"title": "전체 공통 팁", "badge": "TIP"},
                "ageGroupFallback": {"title": "연령대"},
                "ageGroups": {"badge": "육아"},
                "emergencyContacts": {"title": "긴급/상담 연락처", "badge": "긴급"}
            },
            "health": {
                "overview": {"title": "건강 테마 개요"},
                "lifestyleTips": {"title": "생활 습관 팁", "badge": "생활"},
                "conditionFallback": {"title": "건강 주제"},
                "conditions": {"badge": "건강"},
                "emergencyGuide": {"title": "긴급 대응 가이드", "badge": "긴급"}
            },
            "lifestyle": {
                "overview": {"title": "생활정보 개요"},
                "quickTips": {"title": "생활 꿀팁", "badge": "TIP"},
                "hotItems": {"title": "추천 아이템", "badge": "아이템"},
                "hotDeals": {"title": "핫딜 정보", "badge": "딜"},
                "affiliateNotes": {"title": "제휴/운영 노트", "badge": "운영"}
            },
            "stocks": {
                "overview": {"title": "주식정보 개요"},
                "marketSummary": {"title": "시장 요약"},
                "sectorHighlights": {"title": "섹터 하이라이트", "badge": "섹터"},
                "companyAnalyses": {"title": "기업 분석", "badge": "기업"},
                "watchlist": {"title": "워치리스트", "badge": "관찰"}
            },
            "support": {
                "overview": {"title": "정부지원정보 개요"},
                "programs": {"badge": "지원", "fallbackTitle": "지원 프로그램"},
                "commonResources": {"title": "공통 참고자료", "badge": "참고"}
            },
            "groupbuy": {
                "linkSection": {
                    "title": "관련 링크",
                    "note": "위 링크에서 공동구매 참여 가능합니다!"
                }
            }
        }
    })
}
