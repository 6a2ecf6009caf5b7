//! Recommendation profiles derived from the quiz.

use serde::{Deserialize, Serialize};

/// The coaching recommendation produced by the quiz.
///
/// Derived, never stored: a pure function of the Q2 answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationProfile {
    pub label: String,
    pub coach_name: String,
    pub description: String,
    /// Display match score, e.g. "98%".
    pub match_score: String,
}

fn profile(label: &str, coach: &str, description: &str, score: &str) -> RecommendationProfile {
    RecommendationProfile {
        label: label.to_string(),
        coach_name: coach.to_string(),
        description: description.to_string(),
        match_score: score.to_string(),
    }
}

/// Total mapping from the Q2 answer to a profile.
///
/// `invest` and `space` select their dedicated profiles; every other value,
/// including the legitimate `spirit` answer, resolves to the healing
/// profile, which doubles as the defensive default.
pub fn resolve_profile(q2_value: &str) -> RecommendationProfile {
    match q2_value {
        "invest" => profile(
            "전략적 아트테크 솔루션",
            "David Kim",
            "글로벌 옥션 데이터와 시장 트렌드를 분석하여 자산 가치가 확실한 작품을 \
             추천하는 투자 전문 코칭입니다.",
            "98%",
        ),
        "space" => profile(
            "프라이빗 공간 큐레이팅",
            "Elena Park",
            "공간의 건축적 구조와 라이프스타일을 고려하여 최적의 미적 가치를 구현하는 \
             큐레이팅 중심 코칭입니다.",
            "95%",
        ),
        _ => profile(
            "영혼을 채우는 아트 다이어리",
            "Sarah Lee",
            "개인의 내면을 탐구하고 심리적 안정과 영감을 주는 작가들을 매칭해주는 \
             감성 중심 코칭입니다.",
            "99%",
        ),
    }
}
