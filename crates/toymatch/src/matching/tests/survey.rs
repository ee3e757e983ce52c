use crate::matching::domain::{ParentingApproach, ParentingStyle};
use crate::matching::survey::{
    analyze_parenting_styles, ParentingScoreResult, SurveyAnswers, SurveyError, SurveyQuestion,
    DOMINANT_STYLE_COUNT,
};

use SurveyQuestion::*;

fn answers(values: [i32; 6]) -> SurveyAnswers {
    SurveyQuestion::ALL.into_iter().zip(values).collect()
}

#[test]
fn neutral_answers_tie_every_style_and_keep_declaration_order() {
    let result = analyze_parenting_styles(&SurveyAnswers::neutral());

    for style in ParentingStyle::ALL {
        assert_eq!(result.score(style), 5.0, "{style}");
    }
    assert_eq!(
        result.dominant_styles,
        vec![
            ParentingStyle::Authoritative,
            ParentingStyle::Mindful,
            ParentingStyle::AttachmentBased,
        ]
    );
    assert_eq!(result.suggested_approach(), ParentingApproach::Authoritative);
}

#[test]
fn relational_answers_rank_mindful_and_attachment_first() {
    let result = analyze_parenting_styles(&answers([10, 10, 1, 10, 10, 1]));

    assert_eq!(result.score(ParentingStyle::Authoritative), 5.5);
    assert_eq!(result.score(ParentingStyle::Mindful), 10.0);
    assert_eq!(result.score(ParentingStyle::AttachmentBased), 10.0);
    assert_eq!(result.score(ParentingStyle::Montessori), 1.0);
    assert_eq!(result.score(ParentingStyle::Authoritarian), 2.25);
    assert_eq!(result.score(ParentingStyle::Permissive), 3.0);
    assert_eq!(
        result.dominant_styles,
        vec![
            ParentingStyle::Mindful,
            ParentingStyle::AttachmentBased,
            ParentingStyle::Authoritative,
        ]
    );
}

#[test]
fn low_answers_make_the_inverse_styles_dominant() {
    let result = analyze_parenting_styles(&answers([1; 6]));

    assert_eq!(result.score(ParentingStyle::Authoritarian), 9.0);
    assert_eq!(result.score(ParentingStyle::Permissive), 9.0);
    assert_eq!(result.dominant_styles[0], ParentingStyle::Authoritarian);
    assert_eq!(result.dominant_styles[1], ParentingStyle::Permissive);
    assert_eq!(result.suggested_approach(), ParentingApproach::Authoritarian);
}

#[test]
fn scores_stay_within_answer_bounds_and_dominants_are_sorted() {
    const LEVELS: [i32; 5] = [1, 3, 5, 8, 10];

    let mut checked = 0;
    for a in LEVELS {
        for b in LEVELS {
            for c in LEVELS {
                for d in LEVELS {
                    for e in LEVELS {
                        for f in LEVELS {
                            let result = analyze_parenting_styles(&answers([a, b, c, d, e, f]));

                            assert_eq!(result.scores.len(), ParentingStyle::ALL.len());
                            for (style, score) in &result.scores {
                                let band = match style {
                                    ParentingStyle::Authoritarian | ParentingStyle::Permissive => {
                                        0.0..=9.0
                                    }
                                    _ => 1.0..=10.0,
                                };
                                assert!(band.contains(score), "{style} scored {score}");
                            }

                            assert_eq!(result.dominant_styles.len(), DOMINANT_STYLE_COUNT);
                            let dominant: Vec<f64> = result
                                .dominant_styles
                                .iter()
                                .map(|style| result.score(*style))
                                .collect();
                            assert!(dominant.windows(2).all(|pair| pair[0] >= pair[1]));

                            let weakest_dominant = dominant[DOMINANT_STYLE_COUNT - 1];
                            for style in ParentingStyle::ALL {
                                if !result.dominant_styles.contains(&style) {
                                    assert!(result.score(style) <= weakest_dominant);
                                }
                            }
                            checked += 1;
                        }
                    }
                }
            }
        }
    }
    assert_eq!(checked, LEVELS.len().pow(6));
}

#[test]
fn unanswered_questions_read_as_zero() {
    let result = analyze_parenting_styles(&SurveyAnswers::new());

    assert_eq!(result.score(ParentingStyle::Authoritative), 0.0);
    assert_eq!(result.score(ParentingStyle::Authoritarian), 10.0);
    assert_eq!(result.score(ParentingStyle::Permissive), 10.0);
    assert_eq!(
        result.dominant_styles,
        vec![
            ParentingStyle::Authoritarian,
            ParentingStyle::Permissive,
            ParentingStyle::Authoritative,
        ]
    );

    let partial = analyze_parenting_styles(&SurveyAnswers::new().with(Q1, 8).with(Q4, 6));
    assert_eq!(partial.score(ParentingStyle::AttachmentBased), 7.0);
    assert_eq!(partial.score(ParentingStyle::Mindful), 3.5);
}

#[test]
fn out_of_range_answers_are_scored_as_given() {
    let result = analyze_parenting_styles(&answers([15, 5, 5, 15, 5, 5]));

    assert_eq!(result.score(ParentingStyle::AttachmentBased), 15.0);
    assert_eq!(result.score(ParentingStyle::Authoritarian), 2.5);
    assert_eq!(result.dominant_styles[0], ParentingStyle::AttachmentBased);
}

#[test]
fn analysis_is_deterministic() {
    let survey = answers([7, 2, 9, 4, 6, 3]);

    assert_eq!(
        analyze_parenting_styles(&survey),
        analyze_parenting_styles(&survey)
    );
}

#[test]
fn validate_reports_the_first_missing_question() {
    let survey: SurveyAnswers = SurveyQuestion::ALL
        .into_iter()
        .filter(|question| *question != Q3)
        .map(|question| (question, 5))
        .collect();

    assert_eq!(
        survey.validate(),
        Err(SurveyError::Missing { question: "Q3" })
    );
}

#[test]
fn validate_rejects_answers_outside_the_slider() {
    let low = SurveyAnswers::neutral().with(Q5, 0);
    let high = SurveyAnswers::neutral().with(Q2, 11);

    assert_eq!(
        low.validate(),
        Err(SurveyError::OutOfRange {
            question: "Q5",
            value: 0
        })
    );
    assert_eq!(
        high.validate(),
        Err(SurveyError::OutOfRange {
            question: "Q2",
            value: 11
        })
    );
    assert_eq!(answers([1, 10, 1, 10, 1, 10]).validate(), Ok(()));
}

#[test]
fn suggested_approach_falls_back_to_authoritative() {
    let result = ParentingScoreResult {
        scores: Default::default(),
        dominant_styles: vec![
            ParentingStyle::Mindful,
            ParentingStyle::Montessori,
            ParentingStyle::AttachmentBased,
        ],
        report: None,
    };
    assert_eq!(result.suggested_approach(), ParentingApproach::Authoritative);

    let permissive_first = ParentingScoreResult {
        dominant_styles: vec![
            ParentingStyle::Mindful,
            ParentingStyle::Permissive,
            ParentingStyle::Authoritarian,
        ],
        ..result
    };
    assert_eq!(
        permissive_first.suggested_approach(),
        ParentingApproach::Permissive
    );
}

#[test]
fn survey_payloads_ignore_unknown_keys() {
    let survey: SurveyAnswers = serde_json::from_value(serde_json::json!({
        "Q1": 4, "Q2": 6, "Q3": 8, "Q4": 2, "Q5": 9, "Q6": 1, "Q7": 10
    }))
    .expect("survey payload");

    assert_eq!(survey.validate(), Ok(()));
    assert_eq!(survey.get(Q3), Some(8));

    let result = serde_json::to_value(analyze_parenting_styles(&survey)).expect("serialize");
    assert_eq!(result["scores"]["montessori"], 4.5);
    assert!(result.get("report").is_none());
}
