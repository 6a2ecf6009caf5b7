//! Quiz engine - a fixed-depth decision sequence.

use std::collections::BTreeMap;

use super::{question, resolve_profile, QuestionId, QuizQuestion, RecommendationProfile};
use crate::domain::foundation::{StateMachine, ValidationError};

/// Steps of the matching test wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Start,
    Q1,
    Q2,
    Q3,
    /// The derived recommendation is on display.
    Result,
    /// The consultation contact form.
    Form,
}

impl StateMachine for QuizStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizStep::*;
        // restart is allowed from anywhere but the initial state
        if *target == Start {
            return *self != Start;
        }
        matches!(
            (self, target),
            (Start, Q1) | (Q1, Q2) | (Q2, Q3) | (Q3, Result) | (Result, Form) | (Form, Result)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizStep::*;
        match self {
            Start => vec![Q1],
            Q1 => vec![Q2, Start],
            Q2 => vec![Q3, Start],
            Q3 => vec![Result, Start],
            Result => vec![Form, Start],
            Form => vec![Result, Start],
        }
    }
}

/// The incrementally built answer set, keyed by question id.
pub type QuizAnswers = BTreeMap<QuestionId, String>;

/// Drives the three-question sequence and derives the recommendation.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    step: QuizStep,
    answers: QuizAnswers,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            step: QuizStep::Start,
            answers: QuizAnswers::new(),
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// The question awaiting an answer, if the wizard is on one.
    pub fn current_question(&self) -> Option<QuizQuestion> {
        match self.step {
            QuizStep::Q1 => Some(question(QuestionId::Q1)),
            QuizStep::Q2 => Some(question(QuestionId::Q2)),
            QuizStep::Q3 => Some(question(QuestionId::Q3)),
            _ => None,
        }
    }

    /// Leave the intro screen for the first question.
    pub fn begin(&mut self) -> Result<(), ValidationError> {
        self.step = self.step.transition_to(QuizStep::Q1)?;
        Ok(())
    }

    /// Record an answer for the current question and advance.
    ///
    /// Only the question matching the current step is accepted; answering
    /// q3 moves to the result screen.
    pub fn answer(
        &mut self,
        question_id: QuestionId,
        value: impl Into<String>,
    ) -> Result<QuizStep, ValidationError> {
        let (expected, next) = match self.step {
            QuizStep::Q1 => (QuestionId::Q1, QuizStep::Q2),
            QuizStep::Q2 => (QuestionId::Q2, QuizStep::Q3),
            QuizStep::Q3 => (QuestionId::Q3, QuizStep::Result),
            _ => {
                return Err(ValidationError::invalid_format(
                    "quiz_answer",
                    format!("No question is active at step {:?}", self.step),
                ))
            }
        };
        if question_id != expected {
            return Err(ValidationError::invalid_format(
                "quiz_answer",
                format!("Expected an answer for {}, got {}", expected, question_id),
            ));
        }
        self.answers.insert(question_id, value.into());
        self.step = self.step.transition_to(next)?;
        Ok(self.step)
    }

    /// The derived recommendation, available from the result screen on.
    ///
    /// A missing q2 answer resolves to the designated default profile.
    pub fn result(&self) -> Option<RecommendationProfile> {
        match self.step {
            QuizStep::Result | QuizStep::Form => {
                let q2 = self
                    .answers
                    .get(&QuestionId::Q2)
                    .map(String::as_str)
                    .unwrap_or("");
                Some(resolve_profile(q2))
            }
            _ => None,
        }
    }

    /// Move from the result display to the consultation form.
    pub fn open_form(&mut self) -> Result<(), ValidationError> {
        self.step = self.step.transition_to(QuizStep::Form)?;
        Ok(())
    }

    /// Return from the form to the result display.
    pub fn back_to_result(&mut self) -> Result<(), ValidationError> {
        self.step = self.step.transition_to(QuizStep::Result)?;
        Ok(())
    }

    /// Clear the answer set and return to the intro screen.
    pub fn restart(&mut self) {
        self.step = QuizStep::Start;
        self.answers.clear();
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}
