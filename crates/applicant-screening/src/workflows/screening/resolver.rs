use std::collections::HashSet;

use tracing::{debug, trace};

use super::domain::{
    AnswerSet, CanonicalQuestion, QuestionId, QuestionSchema, ResolvedAnswer, ResolvedAnswers,
};

/// How a canonical question was tied to a form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    Exact,
    Fuzzy,
}

/// Resolve every canonical question against one application's form schema and answers.
///
/// The result always holds one entry per distinct canonical question. A question whose label
/// cannot be found, or whose matched answer is blank, resolves to [`ResolvedAnswer::Absent`].
pub fn resolve<'q, I>(schema: &QuestionSchema, answers: &AnswerSet, canonical: I) -> ResolvedAnswers
where
    I: IntoIterator<Item = &'q CanonicalQuestion>,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for question in canonical {
        if !seen.insert(question) {
            continue;
        }

        let resolved = match match_label(schema, question) {
            Some((label, id, LabelMatch::Exact)) => {
                trace!(question = question.display_text(), label, "exact form label");
                answer_for(answers, id)
            }
            Some((label, id, LabelMatch::Fuzzy)) => {
                debug!(question = question.display_text(), label, "fuzzy form label");
                answer_for(answers, id)
            }
            None => ResolvedAnswer::Absent,
        };

        entries.push((question.clone(), resolved));
    }

    ResolvedAnswers::from_entries(entries)
}

/// Find the form label for `question`: an exact label wins, otherwise the first label (in form
/// order) that contains, or is contained in, the trimmed question text.
pub fn match_label<'s>(
    schema: &'s QuestionSchema,
    question: &CanonicalQuestion,
) -> Option<(&'s str, &'s QuestionId, LabelMatch)> {
    if let Some((label, id)) = schema
        .entries()
        .find(|(label, _)| *label == question.text())
    {
        return Some((label, id, LabelMatch::Exact));
    }

    let needle = question.text().trim();
    if needle.is_empty() {
        return None;
    }

    schema
        .entries()
        .find(|(label, _)| !label.is_empty() && (label.contains(needle) || needle.contains(label)))
        .map(|(label, id)| (label, id, LabelMatch::Fuzzy))
}

fn answer_for(answers: &AnswerSet, id: &QuestionId) -> ResolvedAnswer {
    match answers.get(id) {
        Some(text) if !text.trim().is_empty() => ResolvedAnswer::Answered(text.to_string()),
        _ => ResolvedAnswer::Absent,
    }
}
