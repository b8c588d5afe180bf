//! Stubbed submission of questions, answers and votes.
//!
//! Nothing here changes the store. The `send_*` functions check their input
//! against the store and hand it to a [`SubmissionSink`]; the shipped sink,
//! [`DiscardingSink`], logs the submission and acknowledges it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::draft::QuestionDraft;
use crate::error::{AskError, EntityKind};
use crate::model::{AnswerId, QuestionId};
use crate::store::FixtureStore;

/// Confirmation shown to the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// An answer being posted to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerDraft {
    pub question_id: QuestionId,
    pub body: String,
}

/// What a vote is cast on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum VoteTarget {
    Question(QuestionId),
    Answer(AnswerId),
}

/// Up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => f.write_str("up"),
            VoteDirection::Down => f.write_str("down"),
        }
    }
}

impl FromStr for VoteDirection {
    type Err = AskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            _ => Err(AskError::invalid_args(format!(
                "unknown vote direction '{}' (expected up or down)",
                s
            ))),
        }
    }
}

/// A single vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub target: VoteTarget,
    pub direction: VoteDirection,
}

/// Receiver of user submissions.
pub trait SubmissionSink {
    fn submit_question(&self, draft: &QuestionDraft) -> Result<Acknowledgement, AskError>;
    fn submit_answer(&self, answer: &AnswerDraft) -> Result<Acknowledgement, AskError>;
    fn cast_vote(&self, vote: &Vote) -> Result<Acknowledgement, AskError>;
}

/// Logs each submission and throws it away.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardingSink;

impl SubmissionSink for DiscardingSink {
    fn submit_question(&self, draft: &QuestionDraft) -> Result<Acknowledgement, AskError> {
        let tags: Vec<&str> = draft.tags().iter().map(|t| t.name.as_str()).collect();
        info!(title = %draft.title, tags = ?tags, "question submitted (discarded)");
        Ok(Acknowledgement::new("Your question has been submitted!"))
    }

    fn submit_answer(&self, answer: &AnswerDraft) -> Result<Acknowledgement, AskError> {
        info!(
            question = %answer.question_id,
            chars = answer.body.chars().count(),
            "answer submitted (discarded)"
        );
        Ok(Acknowledgement::new("Your answer has been submitted!"))
    }

    fn cast_vote(&self, vote: &Vote) -> Result<Acknowledgement, AskError> {
        info!(on = ?vote.target, direction = %vote.direction, "vote cast (discarded)");
        Ok(Acknowledgement::new("Your vote has been recorded!"))
    }
}

/// Validate a draft and pass it to `sink`.
pub fn send_question(
    sink: &dyn SubmissionSink,
    draft: &QuestionDraft,
) -> Result<Acknowledgement, AskError> {
    if let Err(problems) = draft.validate() {
        let messages: Vec<String> = problems.iter().map(ToString::to_string).collect();
        return Err(AskError::invalid_args_with_details(
            format!("question draft is incomplete: {}", messages.join(", ")),
            json!({ "problems": problems }),
        ));
    }
    sink.submit_question(draft)
}

/// Check the answer's question exists and its body is not blank, then pass it on.
pub fn send_answer(
    store: &FixtureStore,
    sink: &dyn SubmissionSink,
    answer: &AnswerDraft,
) -> Result<Acknowledgement, AskError> {
    if store.query().find_question_by_id(&answer.question_id).is_none() {
        return Err(AskError::not_found(
            EntityKind::Question,
            answer.question_id.as_str(),
        ));
    }
    if answer.body.trim().is_empty() {
        return Err(AskError::invalid_args("answer body is required"));
    }
    sink.submit_answer(answer)
}

/// Check the vote target exists, then pass the vote on.
pub fn send_vote(
    store: &FixtureStore,
    sink: &dyn SubmissionSink,
    vote: &Vote,
) -> Result<Acknowledgement, AskError> {
    let exists = match &vote.target {
        VoteTarget::Question(id) => store.all_questions().iter().any(|q| &q.id == id),
        VoteTarget::Answer(id) => store
            .all_questions()
            .iter()
            .flat_map(|q| q.answers.iter())
            .any(|a| &a.id == id),
    };
    if !exists {
        return Err(match &vote.target {
            VoteTarget::Question(id) => AskError::not_found(EntityKind::Question, id.as_str()),
            VoteTarget::Answer(id) => AskError::not_found(EntityKind::Answer, id.as_str()),
        });
    }
    sink.cast_vote(vote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingSink {
        calls: Cell<usize>,
    }

    impl SubmissionSink for CountingSink {
        fn submit_question(&self, _: &QuestionDraft) -> Result<Acknowledgement, AskError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Acknowledgement::new("q"))
        }
        fn submit_answer(&self, _: &AnswerDraft) -> Result<Acknowledgement, AskError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Acknowledgement::new("a"))
        }
        fn cast_vote(&self, _: &Vote) -> Result<Acknowledgement, AskError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Acknowledgement::new("v"))
        }
    }

    #[test]
    fn incomplete_draft_never_reaches_the_sink() {
        let sink = CountingSink::default();
        let err = send_question(&sink, &QuestionDraft::new("Title", "")).unwrap_err();
        assert_eq!(err.error_code().code(), 2);
        assert!(err.to_string().contains("body is required"));
        assert_eq!(sink.calls.get(), 0);
    }

    #[test]
    fn complete_draft_is_acknowledged() {
        let store = FixtureStore::builtin();
        let mut draft = QuestionDraft::new("Title", "Body");
        draft.add_tag(store.all_tags()[1].clone());
        let ack = send_question(&DiscardingSink, &draft).unwrap();
        assert_eq!(ack.message, "Your question has been submitted!");
        // the store is untouched
        assert_eq!(store.all_questions().len(), 4);
    }

    #[test]
    fn answers_need_an_existing_question_and_a_body() {
        let store = FixtureStore::builtin();
        let sink = CountingSink::default();

        let missing = AnswerDraft {
            question_id: QuestionId::new("999"),
            body: "text".to_string(),
        };
        assert_eq!(send_answer(&store, &sink, &missing).unwrap_err().error_code().code(), 3);

        let blank = AnswerDraft {
            question_id: QuestionId::new("1"),
            body: "   ".to_string(),
        };
        assert_eq!(send_answer(&store, &sink, &blank).unwrap_err().error_code().code(), 2);
        assert_eq!(sink.calls.get(), 0);

        let ok = AnswerDraft {
            question_id: QuestionId::new("1"),
            body: "Use response.ok".to_string(),
        };
        assert_eq!(send_answer(&store, &sink, &ok).unwrap().message, "a");
    }

    #[test]
    fn votes_need_an_existing_target() {
        let store = FixtureStore::builtin();
        let vote = Vote {
            target: VoteTarget::Answer(AnswerId::new("6")),
            direction: VoteDirection::Up,
        };
        let ack = send_vote(&store, &DiscardingSink, &vote).unwrap();
        assert_eq!(ack.to_string(), "Your vote has been recorded!");

        let vote = Vote {
            target: VoteTarget::Answer(AnswerId::new("7")),
            direction: VoteDirection::Down,
        };
        let err = send_vote(&store, &DiscardingSink, &vote).unwrap_err();
        assert_eq!(err.to_string(), "answer not found: 7");

        let vote = Vote {
            target: VoteTarget::Question(QuestionId::new("0")),
            direction: VoteDirection::Down,
        };
        assert!(send_vote(&store, &DiscardingSink, &vote).is_err());
    }

    #[test]
    fn vote_direction_parses() {
        assert_eq!("UP".parse::<VoteDirection>().unwrap(), VoteDirection::Up);
        assert!("sideways".parse::<VoteDirection>().is_err());
    }
}
