use std::collections::BTreeSet;

use super::common::*;
use crate::workflows::screening::completeness::{
    CompletenessPolicy, CompletenessValidator, ValidationIssue, SUPERVISOR_REFERENCES_MESSAGE,
};
use crate::workflows::screening::questionnaire::{QuestionRole, Questionnaire};
use crate::workflows::screening::ScreeningEngine;

#[test]
fn complete_application_has_no_issues() {
    let engine = engine();
    let (schema, answers) = exact_intake(&cna_answers());

    let validation = engine.validate(&engine.resolve(&schema, &answers));

    assert!(validation.is_complete());
    assert!(validation.messages().is_empty());
}

#[test]
fn missing_answers_are_reported_in_questionnaire_order() {
    let engine = engine();
    let answers: Vec<_> = cna_answers()
        .into_iter()
        .filter(|(role, _)| {
            !matches!(role, QuestionRole::PayRate | QuestionRole::DrugScreen)
        })
        .collect();
    let (schema, set) = exact_intake(&answers);

    let validation = engine.validate(&engine.resolve(&schema, &set));

    assert_eq!(
        validation.messages(),
        vec![
            "Are you able to pass a drug screen?".to_string(),
            "What was/ is your most recent pay rate?".to_string(),
        ]
    );
    assert!(validation
        .issues()
        .iter()
        .all(|issue| matches!(issue, ValidationIssue::Missing { .. })));
}

#[test]
fn single_reference_gets_dedicated_message() {
    let engine = engine();
    let (schema, set) = exact_intake(&with_answer(
        QuestionRole::SupervisorReferences,
        "Jane Smith 555-123-4567",
    ));

    let validation = engine.validate(&engine.resolve(&schema, &set));

    assert_eq!(validation.len(), 1);
    assert_eq!(validation.messages(), vec![SUPERVISOR_REFERENCES_MESSAGE.to_string()]);
    assert!(matches!(
        &validation.issues()[0],
        ValidationIssue::InvalidFormat { question, .. }
            if Some(question) == Questionnaire::caregiving().question(QuestionRole::SupervisorReferences)
    ));
}

#[test]
fn repeated_phone_number_counts_once() {
    let engine = engine();
    let (schema, set) = exact_intake(&with_answer(
        QuestionRole::SupervisorReferences,
        "Jane Smith 555-123-4567, John Doe 555 123 4567",
    ));

    let validation = engine.validate(&engine.resolve(&schema, &set));

    assert_eq!(validation.messages(), vec![SUPERVISOR_REFERENCES_MESSAGE.to_string()]);
}

#[test]
fn ignored_questions_may_be_left_blank() {
    let questionnaire = Questionnaire::caregiving();
    let pay_rate = questionnaire
        .question(QuestionRole::PayRate)
        .expect("pay rate question")
        .clone();
    let validator = CompletenessValidator::new(
        questionnaire,
        CompletenessPolicy {
            ignored_questions: BTreeSet::from([pay_rate]),
            ..CompletenessPolicy::default()
        },
    );
    let answers: Vec<_> = cna_answers()
        .into_iter()
        .filter(|(role, _)| *role != QuestionRole::PayRate)
        .collect();
    let (schema, set) = exact_intake(&answers);

    let validation = validator.validate(&engine().resolve(&schema, &set));

    assert!(validation.is_complete());
}

#[test]
fn unanswered_application_lists_every_question() {
    let engine = ScreeningEngine::default();
    let (schema, set) = exact_intake(&[]);

    let validation = engine.validate(&engine.resolve(&schema, &set));

    assert_eq!(validation.len(), engine.questionnaire().len());
}
