//! The read-only fixture store.
//!
//! `FixtureStore` owns every entity. Collections are exposed as immutable
//! slices; derived views built by the query layer are owned copies.
//!
//! A store is built either from the builtin fixture or from a [`Dataset`]
//! (typically loaded from a JSON file). Datasets from outside the crate are
//! validated against the model invariants before a store is handed out.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::AskError;
use crate::fixture;
use crate::model::{Question, Tag, User, UserId, MAX_TAGS_PER_QUESTION};

/// A complete set of entities plus the designated current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub tags: Vec<Tag>,
    pub questions: Vec<Question>,
    pub current_user: UserId,
}

/// A single broken invariant found while validating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("dataset has no users")]
    NoUsers,

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("duplicate tag name '{name}'")]
    DuplicateTagName { name: String },

    #[error("tag name '{name}' is not a lowercase token")]
    TagNameNotLowercase { name: String },

    #[error("question '{question}' has {count} tags (max {max})", max = MAX_TAGS_PER_QUESTION)]
    TooManyTags { question: String, count: usize },

    #[error("question '{question}' has {count} accepted answers")]
    MultipleAcceptedAnswers { question: String, count: usize },

    #[error("answer '{answer}' is stored under question '{parent}' but names question '{named}'")]
    AnswerParentMismatch {
        answer: String,
        parent: String,
        named: String,
    },

    #[error("{kind} '{id}' references unknown user '{user}'")]
    UnknownAuthor {
        kind: &'static str,
        id: String,
        user: String,
    },

    #[error("current user '{user}' does not exist")]
    UnknownCurrentUser { user: String },
}

/// A dataset failed validation. Every violation found is listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid dataset: {}", summarize(.violations))]
pub struct DatasetError {
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Immutable, fully populated entity store.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    users: Vec<User>,
    tags: Vec<Tag>,
    questions: Vec<Question>,
    /// Index into `users`; always in bounds.
    current_user: usize,
}

impl FixtureStore {
    /// The builtin hand-authored dataset.
    pub fn builtin() -> Self {
        let dataset = fixture::builtin_dataset();
        let current_user = dataset
            .users
            .iter()
            .position(|user| user.id == dataset.current_user)
            .unwrap_or(0);
        Self {
            users: dataset.users,
            tags: dataset.tags,
            questions: dataset.questions,
            current_user,
        }
    }

    /// Build a store from a dataset, validating every model invariant.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, DatasetError> {
        validate(&dataset)?;
        // validate() guarantees the current user exists
        let current_user = dataset
            .users
            .iter()
            .position(|user| user.id == dataset.current_user)
            .unwrap_or(0);
        debug!(
            users = dataset.users.len(),
            tags = dataset.tags.len(),
            questions = dataset.questions.len(),
            "dataset validated"
        );
        Ok(Self {
            users: dataset.users,
            tags: dataset.tags,
            questions: dataset.questions,
            current_user,
        })
    }

    /// Load and validate a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self, AskError> {
        let content = fs::read_to_string(path).map_err(|e| AskError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let dataset: Dataset = serde_json::from_str(&content).map_err(|e| AskError::Json {
            path: path.display().to_string(),
            source: e,
        })?;
        debug!(path = %path.display(), "loaded dataset file");
        Ok(Self::from_dataset(dataset)?)
    }

    /// All users in insertion order.
    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    /// All tags in insertion order.
    pub fn all_tags(&self) -> &[Tag] {
        &self.tags
    }

    /// All questions in insertion order.
    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    /// The designated signed-in user. There is no authentication.
    pub fn current_user(&self) -> &User {
        &self.users[self.current_user]
    }

    /// Copy the store's contents back out as a dataset.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            users: self.users.clone(),
            tags: self.tags.clone(),
            questions: self.questions.clone(),
            current_user: self.current_user().id.clone(),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Check a dataset against the model invariants.
pub fn validate(dataset: &Dataset) -> Result<(), DatasetError> {
    let mut violations = Vec::new();

    if dataset.users.is_empty() {
        violations.push(Violation::NoUsers);
    }

    let mut user_ids = HashSet::new();
    for user in &dataset.users {
        if !user_ids.insert(user.id.as_str()) {
            violations.push(Violation::DuplicateId {
                kind: "user",
                id: user.id.to_string(),
            });
        }
    }

    let mut tag_ids = HashSet::new();
    let mut tag_names = HashSet::new();
    for tag in &dataset.tags {
        if !tag_ids.insert(tag.id.as_str()) {
            violations.push(Violation::DuplicateId {
                kind: "tag",
                id: tag.id.to_string(),
            });
        }
        if !tag_names.insert(tag.name.as_str()) {
            violations.push(Violation::DuplicateTagName {
                name: tag.name.clone(),
            });
        }
        if !is_lowercase_token(&tag.name) {
            violations.push(Violation::TagNameNotLowercase {
                name: tag.name.clone(),
            });
        }
    }

    let mut question_ids = HashSet::new();
    let mut answer_ids = HashSet::new();
    let mut check_author = |kind: &'static str, id: &str, user: &UserId| {
        if !user_ids.contains(user.as_str()) {
            violations.push(Violation::UnknownAuthor {
                kind,
                id: id.to_string(),
                user: user.to_string(),
            });
        }
    };

    // `check_author` holds `violations` until the loop ends
    let mut structural = Vec::new();
    for question in &dataset.questions {
        if !question_ids.insert(question.id.as_str()) {
            structural.push(Violation::DuplicateId {
                kind: "question",
                id: question.id.to_string(),
            });
        }
        if question.tags.len() > MAX_TAGS_PER_QUESTION {
            structural.push(Violation::TooManyTags {
                question: question.id.to_string(),
                count: question.tags.len(),
            });
        }
        let accepted = question.answers.iter().filter(|a| a.is_accepted).count();
        if accepted > 1 {
            structural.push(Violation::MultipleAcceptedAnswers {
                question: question.id.to_string(),
                count: accepted,
            });
        }
        check_author("question", question.id.as_str(), &question.author_id);
        for comment in &question.comments {
            check_author("comment", comment.id.as_str(), &comment.author_id);
        }
        for answer in &question.answers {
            if !answer_ids.insert(answer.id.as_str()) {
                structural.push(Violation::DuplicateId {
                    kind: "answer",
                    id: answer.id.to_string(),
                });
            }
            if answer.question_id != question.id {
                structural.push(Violation::AnswerParentMismatch {
                    answer: answer.id.to_string(),
                    parent: question.id.to_string(),
                    named: answer.question_id.to_string(),
                });
            }
            check_author("answer", answer.id.as_str(), &answer.author_id);
            for comment in &answer.comments {
                check_author("comment", comment.id.as_str(), &comment.author_id);
            }
        }
    }
    violations.extend(structural);

    if !user_ids.contains(dataset.current_user.as_str()) {
        violations.push(Violation::UnknownCurrentUser {
            user: dataset.current_user.to_string(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DatasetError { violations })
    }
}

/// Lowercase token: non-empty, no whitespace, no uppercase letters.
fn is_lowercase_token(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(char::is_whitespace)
        && !name.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerId, QuestionId};

    #[test]
    fn builtin_store_passes_validation() {
        let dataset = fixture::builtin_dataset();
        assert_eq!(validate(&dataset), Ok(()));
        let store = FixtureStore::from_dataset(dataset).unwrap();
        assert_eq!(store.current_user().name, "Jane Smith");
    }

    #[test]
    fn collections_keep_insertion_order() {
        let store = FixtureStore::builtin();
        let ids: Vec<&str> = store.all_questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        let names: Vec<&str> = store.all_tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names[0], "javascript");
        assert_eq!(names[7], "sql");
        assert_eq!(store.all_users()[3].name, "Mike Johnson");
    }

    #[test]
    fn to_dataset_round_trips_through_validation() {
        let store = FixtureStore::builtin();
        let again = FixtureStore::from_dataset(store.to_dataset()).unwrap();
        assert_eq!(again.all_questions(), store.all_questions());
    }

    #[test]
    fn reports_every_violation() {
        let mut dataset = fixture::builtin_dataset();
        // second accepted answer on question 1
        dataset.questions[0].answers[1].is_accepted = true;
        // sixth tag on question 2
        let extra: Vec<Tag> = dataset.tags[..3].to_vec();
        dataset.questions[1].tags.extend(extra);
        // duplicate question id
        dataset.questions[3].id = QuestionId::new("3");
        // dangling author
        dataset.questions[2].answers[0].author_id = UserId::new("99");

        let err = validate(&dataset).unwrap_err();
        assert!(err.violations.contains(&Violation::MultipleAcceptedAnswers {
            question: "1".to_string(),
            count: 2,
        }));
        assert!(err.violations.contains(&Violation::TooManyTags {
            question: "2".to_string(),
            count: 6,
        }));
        assert!(err.violations.contains(&Violation::DuplicateId {
            kind: "question",
            id: "3".to_string(),
        }));
        assert!(err.violations.contains(&Violation::UnknownAuthor {
            kind: "answer",
            id: "5".to_string(),
            user: "99".to_string(),
        }));
        // question 4 now claims id 3 but its answer still names question 4
        assert!(err.violations.contains(&Violation::AnswerParentMismatch {
            answer: "6".to_string(),
            parent: "3".to_string(),
            named: "4".to_string(),
        }));
        assert_eq!(err.violations.len(), 5);
    }

    #[test]
    fn rejects_bad_tag_names_and_unknown_current_user() {
        let mut dataset = fixture::builtin_dataset();
        dataset.tags[1].name = "Python".to_string();
        dataset.tags[2].name = "javascript".to_string();
        dataset.current_user = UserId::new("nobody");

        let err = FixtureStore::from_dataset(dataset).unwrap_err();
        assert!(err.violations.contains(&Violation::TagNameNotLowercase {
            name: "Python".to_string(),
        }));
        assert!(err.violations.contains(&Violation::DuplicateTagName {
            name: "javascript".to_string(),
        }));
        assert!(err.violations.contains(&Violation::UnknownCurrentUser {
            user: "nobody".to_string(),
        }));
        assert!(err.to_string().starts_with("invalid dataset: "));
    }

    #[test]
    fn duplicate_answer_ids_are_caught() {
        let mut dataset = fixture::builtin_dataset();
        dataset.questions[1].answers[1].id = AnswerId::new("1");
        let err = validate(&dataset).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::DuplicateId {
                kind: "answer",
                id: "1".to_string(),
            }]
        );
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dataset = Dataset {
            users: vec![],
            tags: vec![],
            questions: vec![],
            current_user: UserId::new("1"),
        };
        let err = validate(&dataset).unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                Violation::NoUsers,
                Violation::UnknownCurrentUser {
                    user: "1".to_string()
                }
            ]
        );
    }
}
