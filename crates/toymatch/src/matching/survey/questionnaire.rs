//! Multiple-choice questionnaire inferring a parenting approach and personality traits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::domain::{ChildPersonality, ParentingApproach};

use ChildPersonality::{
    Adventurous, Analytical, Creative, Dependent, Extrovert, Independent, Introvert, Leader,
    Sensitive, TeamPlayer,
};

const PERSONALITY_TRAIT_COUNT: usize = 3;

/// A question whose options award points to members of a vocabulary `K`.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceQuestion<K> {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<ChoiceOption<K>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption<K> {
    pub value: &'static str,
    pub text: &'static str,
    pub points: Vec<(K, u32)>,
}

impl<K> ChoiceQuestion<K> {
    fn option(&self, value: &str) -> Option<&ChoiceOption<K>> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Selected option value per question id, for each questionnaire section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    #[serde(default)]
    pub parenting: BTreeMap<String, String>,
    #[serde(default)]
    pub personality: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireOutcome {
    pub parenting_approach: ParentingApproach,
    pub personality_traits: Vec<ChildPersonality>,
}

/// The storefront's standard question set.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    pub parenting: Vec<ChoiceQuestion<ParentingApproach>>,
    pub personality: Vec<ChoiceQuestion<ChildPersonality>>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            parenting: parenting_questions(),
            personality: personality_questions(),
        }
    }

    /// Picks the approach with the strictly greatest total. Unanswered questions and
    /// unknown option values are skipped, and authoritative wins when nothing scores.
    pub fn infer_parenting_approach(
        &self,
        answers: &BTreeMap<String, String>,
    ) -> ParentingApproach {
        let totals = tally(&self.parenting, answers, &ParentingApproach::ALL);

        let mut best = (ParentingApproach::Authoritative, 0);
        for (approach, total) in totals {
            if total > best.1 {
                best = (approach, total);
            }
        }
        best.0
    }

    /// Top three traits by total, ties kept in declaration order.
    pub fn infer_personality_traits(
        &self,
        answers: &BTreeMap<String, String>,
    ) -> Vec<ChildPersonality> {
        let mut totals = tally(&self.personality, answers, &ChildPersonality::ALL);
        totals.sort_by(|a, b| b.1.cmp(&a.1));
        totals
            .into_iter()
            .take(PERSONALITY_TRAIT_COUNT)
            .map(|(trait_, _)| trait_)
            .collect()
    }

    pub fn evaluate(&self, answers: &QuestionnaireAnswers) -> QuestionnaireOutcome {
        QuestionnaireOutcome {
            parenting_approach: self.infer_parenting_approach(&answers.parenting),
            personality_traits: self.infer_personality_traits(&answers.personality),
        }
    }
}

fn tally<K: Copy + PartialEq>(
    questions: &[ChoiceQuestion<K>],
    answers: &BTreeMap<String, String>,
    vocabulary: &[K],
) -> Vec<(K, u32)> {
    let mut totals: Vec<(K, u32)> = vocabulary.iter().map(|member| (*member, 0)).collect();

    for question in questions {
        let Some(selected) = answers.get(question.id).filter(|value| !value.is_empty()) else {
            continue;
        };
        let Some(option) = question.option(selected) else {
            continue;
        };
        for (member, points) in &option.points {
            if let Some(entry) = totals.iter_mut().find(|(candidate, _)| candidate == member) {
                entry.1 += points;
            }
        }
    }

    totals
}

fn approach_points(points: [u32; 6]) -> Vec<(ParentingApproach, u32)> {
    ParentingApproach::ALL.into_iter().zip(points).collect()
}

// Columns: authoritative, authoritarian, permissive, neglectful, helicopter, free range.
fn parenting_questions() -> Vec<ChoiceQuestion<ParentingApproach>> {
    vec![
        ChoiceQuestion {
            id: "1",
            prompt: "وقتی فرزندتان کار اشتباهی انجام می‌دهد، معمولاً چه واکنشی نشان می‌دهید؟",
            options: vec![
                ChoiceOption {
                    value: "explain",
                    text: "توضیح می‌دهم چرا اشتباه است و عواقب آن را بیان می‌کنم",
                    points: approach_points([3, 1, 2, 0, 2, 1]),
                },
                ChoiceOption {
                    value: "punish",
                    text: "فوراً تنبیه می‌کنم تا یاد بگیرد",
                    points: approach_points([0, 3, 0, 1, 1, 0]),
                },
                ChoiceOption {
                    value: "ignore",
                    text: "نادیده می‌گیرم، خودش یاد می‌گیرد",
                    points: approach_points([0, 0, 2, 3, 0, 2]),
                },
            ],
        },
        ChoiceQuestion {
            id: "2",
            prompt: "در مورد قوانین خانه چه نظری دارید؟",
            options: vec![
                ChoiceOption {
                    value: "flexible",
                    text: "قوانین انعطاف‌پذیر با توضیح منطق آن‌ها",
                    points: approach_points([3, 1, 2, 0, 2, 2]),
                },
                ChoiceOption {
                    value: "strict",
                    text: "قوانین سختگیرانه که باید رعایت شوند",
                    points: approach_points([1, 3, 0, 0, 2, 0]),
                },
                ChoiceOption {
                    value: "few",
                    text: "قوانین کمی داریم، بیشتر آزاد است",
                    points: approach_points([0, 0, 3, 2, 0, 3]),
                },
            ],
        },
        ChoiceQuestion {
            id: "3",
            prompt: "چقدر در فعالیت‌های فرزندتان دخالت می‌کنید؟",
            options: vec![
                ChoiceOption {
                    value: "guide",
                    text: "راهنمایی می‌کنم اما اجازه تصمیم‌گیری می‌دهم",
                    points: approach_points([3, 2, 1, 0, 1, 2]),
                },
                ChoiceOption {
                    value: "control",
                    text: "تمام تصمیمات را من می‌گیرم",
                    points: approach_points([0, 3, 0, 0, 3, 0]),
                },
                ChoiceOption {
                    value: "hands_off",
                    text: "کمتر دخالت می‌کنم، خودش تجربه کند",
                    points: approach_points([1, 0, 2, 3, 0, 3]),
                },
            ],
        },
    ]
}

fn personality_questions() -> Vec<ChoiceQuestion<ChildPersonality>> {
    vec![
        ChoiceQuestion {
            id: "1",
            prompt: "فرزندتان در جمع چگونه رفتار می‌کند؟",
            options: vec![
                ChoiceOption {
                    value: "social",
                    text: "با اشتیاق با دیگران تعامل می‌کند",
                    points: vec![
                        (Extrovert, 3),
                        (Introvert, 0),
                        (Sensitive, 1),
                        (Adventurous, 2),
                        (Analytical, 1),
                        (Creative, 1),
                        (Leader, 2),
                        (TeamPlayer, 3),
                        (Independent, 1),
                        (Dependent, 0),
                    ],
                },
                ChoiceOption {
                    value: "quiet",
                    text: "ترجیح می‌دهد در گوشه‌ای آرام بازی کند",
                    points: vec![
                        (Extrovert, 0),
                        (Introvert, 3),
                        (Sensitive, 2),
                        (Adventurous, 0),
                        (Analytical, 2),
                        (Creative, 2),
                        (Leader, 0),
                        (TeamPlayer, 1),
                        (Independent, 2),
                        (Dependent, 1),
                    ],
                },
                ChoiceOption {
                    value: "selective",
                    text: "فقط با افراد خاصی راحت است",
                    points: vec![
                        (Extrovert, 1),
                        (Introvert, 2),
                        (Sensitive, 3),
                        (Adventurous, 0),
                        (Analytical, 2),
                        (Creative, 1),
                        (Leader, 1),
                        (TeamPlayer, 1),
                        (Independent, 1),
                        (Dependent, 2),
                    ],
                },
            ],
        },
        ChoiceQuestion {
            id: "2",
            prompt: "وقتی با مشکل جدیدی مواجه می‌شود چه می‌کند؟",
            options: vec![
                ChoiceOption {
                    value: "analyze",
                    text: "مشکل را بررسی و تحلیل می‌کند",
                    points: vec![
                        (Extrovert, 1),
                        (Introvert, 2),
                        (Sensitive, 1),
                        (Adventurous, 1),
                        (Analytical, 3),
                        (Creative, 2),
                        (Leader, 2),
                        (TeamPlayer, 1),
                        (Independent, 2),
                        (Dependent, 0),
                    ],
                },
                ChoiceOption {
                    value: "creative",
                    text: "راه‌حل‌های خلاقانه پیدا می‌کند",
                    points: vec![
                        (Extrovert, 2),
                        (Introvert, 2),
                        (Sensitive, 1),
                        (Adventurous, 2),
                        (Analytical, 1),
                        (Creative, 3),
                        (Leader, 2),
                        (TeamPlayer, 1),
                        (Independent, 2),
                        (Dependent, 1),
                    ],
                },
                ChoiceOption {
                    value: "ask_help",
                    text: "از دیگران کمک می‌خواهد",
                    points: vec![
                        (Extrovert, 2),
                        (Introvert, 1),
                        (Sensitive, 2),
                        (Adventurous, 0),
                        (Analytical, 1),
                        (Creative, 1),
                        (Leader, 0),
                        (TeamPlayer, 2),
                        (Independent, 0),
                        (Dependent, 3),
                    ],
                },
            ],
        },
    ]
}
