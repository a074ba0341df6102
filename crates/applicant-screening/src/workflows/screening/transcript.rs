//! Phone-screen transcripts as an alternative answer source.
//!
//! A voice agent transcript alternates `bot:` prompts and `human:` replies. Each prompt becomes
//! a schema label and each reply its answer, so the regular resolver can match canonical
//! questions against whatever wording the agent used on the call.

use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, QuestionId, QuestionSchema};

const BOT_PREFIX: &str = "bot:";
const HUMAN_PREFIX: &str = "human:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Split a transcript into question/answer pairs.
///
/// Consecutive prompts are joined into one question and consecutive replies into one answer.
/// A prompt that never receives a reply is dropped.
pub fn parse_transcript(transcript: &str) -> Vec<QaPair> {
    let mut pairs = Vec::new();
    let mut question: Vec<&str> = Vec::new();
    let mut answer: Vec<&str> = Vec::new();

    for line in transcript.lines().map(str::trim) {
        if let Some(prompt) = line.strip_prefix(BOT_PREFIX) {
            if !question.is_empty() && !answer.is_empty() {
                pairs.push(QaPair {
                    question: question.join(" "),
                    answer: answer.join(" "),
                });
                question.clear();
                answer.clear();
            }
            let prompt = prompt.trim();
            if !prompt.is_empty() {
                question.push(prompt);
            }
        } else if let Some(reply) = line.strip_prefix(HUMAN_PREFIX) {
            let reply = reply.trim();
            if !reply.is_empty() && !question.is_empty() {
                answer.push(reply);
            }
        }
    }

    if !question.is_empty() && !answer.is_empty() {
        pairs.push(QaPair {
            question: question.join(" "),
            answer: answer.join(" "),
        });
    }

    pairs
}

/// Schema and answers for a parsed transcript, with ids assigned in call order.
pub fn transcript_intake(pairs: &[QaPair]) -> (QuestionSchema, AnswerSet) {
    let mut schema = QuestionSchema::new();
    let mut answers = AnswerSet::new();

    for (index, pair) in pairs.iter().enumerate() {
        let id = QuestionId(format!("call-{}", index + 1));
        schema.insert(pair.question.clone(), id.clone());
        answers.insert(id, Some(pair.answer.clone()));
    }

    (schema, answers)
}
