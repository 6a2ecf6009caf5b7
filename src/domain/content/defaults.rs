//! Built-in defaults used when a persistence slot is missing or corrupt.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::{Article, ArticleCategory, SiteSettings, SocialLinks};
use crate::domain::foundation::ArticleId;

/// Fallback SEO tag pair applied when keyword generation fails outright.
pub const FALLBACK_SEO_TAGS: [&str; 2] = ["아트", "부자"];

static DEFAULT_SETTINGS: Lazy<SiteSettings> = Lazy::new(|| SiteSettings {
    site_name: "아트 온 톡 (Art On Tok)".to_string(),
    hero_title: "예술로 자산을 깨우다".to_string(),
    hero_subtitle: "아트코칭 & 아트딜러 전문 서비스, 스피드부자 독서클럽과 함께하는 부의 예술화"
        .to_string(),
    primary_color: "#000000".to_string(),
    accent_color: "#8b5cf6".to_string(),
    font_family: "Noto Sans KR".to_string(),
    social_links: SocialLinks {
        instagram: "https://instagram.com".to_string(),
        facebook: "https://facebook.com".to_string(),
        youtube: "https://youtube.com".to_string(),
    },
});

static DEFAULT_ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            id: ArticleId::new(),
            title: "현대 미술 투자의 기초".to_string(),
            content: "아트딜러가 알려주는 2024년 유망 작가 리스트와 투자 전략입니다. \
                      예술 작품은 단순한 감상의 대상을 넘어 가치 있는 자산이 됩니다."
                .to_string(),
            category: ArticleCategory::Art,
            image_url: "https://picsum.photos/seed/art1/800/600".to_string(),
            created_at: date(2024, 5, 1),
            seo_tags: tags(&["아트테크", "미술투자", "아트딜러"]),
        },
        Article {
            id: ArticleId::new(),
            title: "스피드부자 독서클럽 5월 정기 모임".to_string(),
            content: "경제적 자유를 향한 지름길, 스피드부자 독서클럽의 이번 달 주제는 \
                      '포트폴리오 다각화'입니다. 오프라인 세미나 현장을 확인하세요."
                .to_string(),
            category: ArticleCategory::Club,
            image_url: "https://picsum.photos/seed/club1/800/600".to_string(),
            created_at: date(2024, 5, 10),
            seo_tags: tags(&["재테크", "부자클럽", "경제적자유"]),
        },
        Article {
            id: ArticleId::new(),
            title: "추상화의 매력과 코칭".to_string(),
            content: "내면의 감정을 캔버스에 담아내는 법. 아트 온 톡의 시그니처 코칭 \
                      프로그램을 소개합니다."
                .to_string(),
            category: ArticleCategory::Art,
            image_url: "https://picsum.photos/seed/art2/800/600".to_string(),
            created_at: date(2024, 5, 15),
            seo_tags: tags(&["아트코칭", "추상화", "힐링아트"]),
        },
    ]
});

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The built-in site settings.
pub fn default_settings() -> SiteSettings {
    DEFAULT_SETTINGS.clone()
}

/// The built-in seed articles (oldest first in source order; the repository
/// keeps its collection newest-first).
pub fn default_articles() -> Vec<Article> {
    DEFAULT_ARTICLES.clone()
}
