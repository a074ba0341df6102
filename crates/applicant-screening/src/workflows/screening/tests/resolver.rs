use super::common::*;
use crate::workflows::screening::domain::{
    AnswerSet, CanonicalQuestion, QuestionId, QuestionSchema, ResolvedAnswer,
};
use crate::workflows::screening::questionnaire::{QuestionRole, Questionnaire};
use crate::workflows::screening::resolver::{match_label, resolve, LabelMatch};

fn canonical(text: &str) -> CanonicalQuestion {
    CanonicalQuestion::new(text)
}

#[test]
fn resolved_keys_equal_the_canonical_set() {
    let questionnaire = Questionnaire::caregiving();
    let mut schema = QuestionSchema::new();
    schema.insert("Unrelated marketing question", QuestionId::from("x1"));
    schema.insert("Are you able to pass a drug screen? ", QuestionId::from("q3"));
    let answers: AnswerSet = [
        (QuestionId::from("x1"), Some("Saw an ad".to_string())),
        (QuestionId::from("q3"), Some("yes".to_string())),
    ]
    .into_iter()
    .collect();

    let resolved = resolve(&schema, &answers, questionnaire.questions());

    let keys: Vec<&CanonicalQuestion> = resolved.questions().collect();
    let expected: Vec<&CanonicalQuestion> = questionnaire.questions().collect();
    assert_eq!(keys, expected);
    assert_eq!(resolved.len(), questionnaire.len());
    let drug_screen = questionnaire
        .question(QuestionRole::DrugScreen)
        .expect("drug screen question");
    assert_eq!(resolved.text(drug_screen), Some("yes"));
    assert_eq!(
        resolved
            .iter()
            .filter(|(_, answer)| answer.is_absent())
            .count(),
        questionnaire.len() - 1
    );
}

#[test]
fn duplicate_canonical_questions_resolve_once() {
    let schema = QuestionSchema::new();
    let answers = AnswerSet::new();
    let questions = [canonical("Pay rate?"), canonical("Pay rate?"), canonical("Start?")];

    let resolved = resolve(&schema, &answers, questions.iter());

    assert_eq!(resolved.len(), 2);
}

#[test]
fn exact_label_beats_earlier_fuzzy_candidate() {
    let schema: QuestionSchema = [
        ("Pay rate? (hourly)", QuestionId::from("fuzzy")),
        ("Pay rate?", QuestionId::from("exact")),
    ]
    .into_iter()
    .collect();
    let answers: AnswerSet = [
        (QuestionId::from("fuzzy"), Some("$15".to_string())),
        (QuestionId::from("exact"), Some("$18".to_string())),
    ]
    .into_iter()
    .collect();
    let question = canonical("Pay rate?");

    let (label, id, kind) = match_label(&schema, &question).expect("label matches");
    assert_eq!((label, id, kind), ("Pay rate?", &QuestionId::from("exact"), LabelMatch::Exact));

    let resolved = resolve(&schema, &answers, [&question]);
    assert_eq!(resolved.text(&question), Some("$18"));
}

#[test]
fn fuzzy_match_uses_trimmed_text_in_both_directions() {
    let question = canonical("Are you able to pass a drug screen? ");

    let longer: QuestionSchema =
        [("3. Are you able to pass a drug screen? (required)", QuestionId::from("a"))]
            .into_iter()
            .collect();
    let shorter: QuestionSchema = [("pass a drug screen", QuestionId::from("b"))]
        .into_iter()
        .collect();

    assert!(matches!(
        match_label(&longer, &question),
        Some((_, _, LabelMatch::Fuzzy))
    ));
    assert!(matches!(
        match_label(&shorter, &question),
        Some((_, id, LabelMatch::Fuzzy)) if id == &QuestionId::from("b")
    ));
}

#[test]
fn fuzzy_match_takes_first_label_in_form_order() {
    let schema: QuestionSchema = [
        ("Section A: Pay rate? ", QuestionId::from("first")),
        ("Section B: Pay rate? ", QuestionId::from("second")),
    ]
    .into_iter()
    .collect();

    let (_, id, _) = match_label(&schema, &canonical("Pay rate?")).expect("fuzzy match");

    assert_eq!(id, &QuestionId::from("first"));
}

#[test]
fn whitespace_question_matches_no_label() {
    let schema: QuestionSchema = [("Pay rate?", QuestionId::from("p"))].into_iter().collect();
    let answers: AnswerSet = [(QuestionId::from("p"), Some("$18".to_string()))]
        .into_iter()
        .collect();
    let blank = canonical("   ");

    assert!(match_label(&schema, &blank).is_none());
    assert_eq!(
        resolve(&schema, &answers, [&blank]).answer(&blank),
        Some(&ResolvedAnswer::Absent)
    );
}

#[test]
fn blank_or_unanswered_matches_resolve_absent() {
    let schema: QuestionSchema = [
        ("Pay rate?", QuestionId::from("p")),
        ("Start?", QuestionId::from("s")),
    ]
    .into_iter()
    .collect();
    let answers: AnswerSet = [(QuestionId::from("p"), Some("   ".to_string()))]
        .into_iter()
        .collect();
    let pay = canonical("Pay rate?");
    let start = canonical("Start?");

    let resolved = resolve(&schema, &answers, [&pay, &start]);

    assert_eq!(resolved.answer(&pay), Some(&ResolvedAnswer::Absent));
    assert_eq!(resolved.answer(&start), Some(&ResolvedAnswer::Absent));
}

#[test]
fn exact_intake_fixture_resolves_every_answer() {
    let (schema, answers) = exact_intake(&cna_answers());

    let resolved = engine().resolve(&schema, &answers);

    assert!(resolved.iter().all(|(_, answer)| !answer.is_absent()));
}
