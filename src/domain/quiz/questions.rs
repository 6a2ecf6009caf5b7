//! The fixed three-question catalog.
//!
//! Question order is fixed and answers are never revisited except by full
//! restart. Q1 options carry their display text as the stored value; Q2 and
//! Q3 options carry short value codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three question slots, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
        };
        write!(f, "{}", s)
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub text: &'static str,
    /// The value stored when this option is chosen.
    pub value: &'static str,
}

/// One quiz question with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub title: &'static str,
    pub options: &'static [QuizOption],
}

const Q1_OPTIONS: &[QuizOption] = &[
    QuizOption {
        text: "세련되고 정갈한 미니멀 오피스",
        value: "세련되고 정갈한 미니멀 오피스",
    },
    QuizOption {
        text: "따뜻하고 아늑한 클래식 거실",
        value: "따뜻하고 아늑한 클래식 거실",
    },
    QuizOption {
        text: "개성 넘치는 힙한 라운지",
        value: "개성 넘치는 힙한 라운지",
    },
];

const Q2_OPTIONS: &[QuizOption] = &[
    QuizOption {
        text: "자산 가치 상승 (Investment)",
        value: "invest",
    },
    QuizOption {
        text: "공간의 완성도와 품격 (Aesthetic)",
        value: "space",
    },
    QuizOption {
        text: "내면의 치유와 영감 (Healing)",
        value: "spirit",
    },
];

const Q3_OPTIONS: &[QuizOption] = &[
    QuizOption {
        text: "검증된 거장의 마스터피스",
        value: "master",
    },
    QuizOption {
        text: "신선한 에너지를 가진 라이징 루키",
        value: "rookie",
    },
    QuizOption {
        text: "실험적이고 독창적인 컨템포러리",
        value: "edge",
    },
];

/// Catalog lookup for a question.
pub fn question(id: QuestionId) -> QuizQuestion {
    match id {
        QuestionId::Q1 => QuizQuestion {
            id,
            title: "가장 끌리는 공간의 분위기는?",
            options: Q1_OPTIONS,
        },
        QuestionId::Q2 => QuizQuestion {
            id,
            title: "예술 작품 소장의 가장 큰 목적은?",
            options: Q2_OPTIONS,
        },
        QuestionId::Q3 => QuizQuestion {
            id,
            title: "선호하는 아티스트 스타일은?",
            options: Q3_OPTIONS,
        },
    }
}
