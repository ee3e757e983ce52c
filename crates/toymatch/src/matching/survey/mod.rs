//! Six-question Likert survey and the parenting-style analyzer built on it.

pub mod questionnaire;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ParentingApproach, ParentingStyle};

pub use questionnaire::{
    ChoiceOption, ChoiceQuestion, QuestionBank, QuestionnaireAnswers, QuestionnaireOutcome,
};

pub const ANSWER_MIN: i32 = 1;
pub const ANSWER_MAX: i32 = 10;

/// Pivot the inverse archetypes are measured against.
const INVERSE_PIVOT: f64 = 10.0;

/// Number of archetypes reported as dominant.
pub const DOMINANT_STYLE_COUNT: usize = 3;

/// One bipolar trait axis of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurveyQuestion {
    /// Rule enforcement vs. preserving the relationship.
    Q1,
    /// Reactive vs. considered responses when tired.
    Q2,
    /// How often the child is consulted on decisions.
    Q3,
    /// Ignoring vs. guiding strong emotions.
    Q4,
    /// Focus on outcome vs. root cause of a mistake.
    Q5,
    /// How much responsibility is delegated to the child.
    Q6,
}

impl SurveyQuestion {
    pub const ALL: [SurveyQuestion; 6] = [
        SurveyQuestion::Q1,
        SurveyQuestion::Q2,
        SurveyQuestion::Q3,
        SurveyQuestion::Q4,
        SurveyQuestion::Q5,
        SurveyQuestion::Q6,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            SurveyQuestion::Q1 => "Q1",
            SurveyQuestion::Q2 => "Q2",
            SurveyQuestion::Q3 => "Q3",
            SurveyQuestion::Q4 => "Q4",
            SurveyQuestion::Q5 => "Q5",
            SurveyQuestion::Q6 => "Q6",
        }
    }
}

/// Survey answers keyed `Q1`..`Q6`. Keys outside that set are carried but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyAnswers(BTreeMap<String, i32>);

impl SurveyAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every question answered with the slider midpoint.
    pub fn neutral() -> Self {
        SurveyQuestion::ALL
            .into_iter()
            .map(|question| (question, 5))
            .collect()
    }

    pub fn with(mut self, question: SurveyQuestion, value: i32) -> Self {
        self.set(question, value);
        self
    }

    pub fn set(&mut self, question: SurveyQuestion, value: i32) {
        self.0.insert(question.key().to_string(), value);
    }

    pub fn get(&self, question: SurveyQuestion) -> Option<i32> {
        self.0.get(question.key()).copied()
    }

    /// Missing answers read as zero so the analyzer stays total.
    fn value(&self, question: SurveyQuestion) -> f64 {
        f64::from(self.get(question).unwrap_or(0))
    }

    fn inverse(&self, question: SurveyQuestion) -> f64 {
        INVERSE_PIVOT - self.value(question)
    }

    /// Checks every question is answered within `[ANSWER_MIN, ANSWER_MAX]`.
    pub fn validate(&self) -> Result<(), SurveyError> {
        for question in SurveyQuestion::ALL {
            match self.get(question) {
                None => {
                    return Err(SurveyError::Missing {
                        question: question.key(),
                    })
                }
                Some(value) if !(ANSWER_MIN..=ANSWER_MAX).contains(&value) => {
                    return Err(SurveyError::OutOfRange {
                        question: question.key(),
                        value,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl FromIterator<(SurveyQuestion, i32)> for SurveyAnswers {
    fn from_iter<I: IntoIterator<Item = (SurveyQuestion, i32)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (question, value) in iter {
            answers.set(question, value);
        }
        answers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    #[error("survey question {question} was not answered")]
    Missing { question: &'static str },
    #[error("survey question {question} must be between 1 and 10, got {value}")]
    OutOfRange { question: &'static str, value: i32 },
}

/// Per-archetype scores and the three dominant archetypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentingScoreResult {
    pub scores: BTreeMap<ParentingStyle, f64>,
    pub dominant_styles: Vec<ParentingStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl ParentingScoreResult {
    pub fn score(&self, style: ParentingStyle) -> f64 {
        self.scores.get(&style).copied().unwrap_or_default()
    }

    /// Approach handed to the match engine: the highest ranked dominant style that the
    /// engine's vocabulary also knows, falling back to authoritative.
    pub fn suggested_approach(&self) -> ParentingApproach {
        self.dominant_styles
            .iter()
            .find_map(|style| style.approach())
            .unwrap_or_default()
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn style_score(style: ParentingStyle, answers: &SurveyAnswers) -> f64 {
    use SurveyQuestion::*;

    let v = |question| answers.value(question);
    let inv = |question| answers.inverse(question);

    match style {
        ParentingStyle::Authoritative => mean(&[v(Q2), v(Q3), v(Q5), v(Q6)]),
        ParentingStyle::Mindful => mean(&[v(Q1), v(Q2), v(Q4), v(Q5)]),
        ParentingStyle::AttachmentBased => mean(&[v(Q1), v(Q4)]),
        ParentingStyle::Montessori => mean(&[v(Q3), v(Q6)]),
        ParentingStyle::Authoritarian => mean(&[inv(Q1), inv(Q2), inv(Q3), inv(Q5)]),
        ParentingStyle::Permissive => mean(&[inv(Q2), inv(Q4), inv(Q6)]),
    }
}

/// Scores every archetype and ranks the top three.
///
/// Never fails: unanswered questions read as zero and out-of-range answers are scored
/// as given. Callers wanting strict input call [`SurveyAnswers::validate`] first.
pub fn analyze_parenting_styles(answers: &SurveyAnswers) -> ParentingScoreResult {
    let mut ranked: Vec<(ParentingStyle, f64)> = ParentingStyle::ALL
        .into_iter()
        .map(|style| (style, style_score(style, answers)))
        .collect();

    // stable: ties keep declaration order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let dominant_styles = ranked
        .iter()
        .take(DOMINANT_STYLE_COUNT)
        .map(|(style, _)| *style)
        .collect();

    ParentingScoreResult {
        scores: ranked.into_iter().collect(),
        dominant_styles,
        report: None,
    }
}
