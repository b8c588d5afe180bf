//! Entity model for the Q&A dataset.
//!
//! Users are referenced by id from questions, answers and comments. Tags are
//! embedded by value inside questions. Answers and comments are owned by
//! their parent question (or answer, for comments).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamps are stored in UTC and serialized as RFC 3339.
pub type Timestamp = DateTime<Utc>;

/// Maximum number of tags a question may carry.
pub const MAX_TAGS_PER_QUESTION: usize = 5;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a [`User`].
    UserId
);
string_id!(
    /// Identifier of a [`Tag`].
    TagId
);
string_id!(
    /// Identifier of a [`Comment`].
    CommentId
);
string_id!(
    /// Identifier of an [`Answer`].
    AnswerId
);
string_id!(
    /// Identifier of a [`Question`].
    QuestionId
);

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Avatar image reference (URL).
    pub avatar_url: String,
    pub reputation: u32,
    pub joined_at: Timestamp,
}

/// A topic label. Names are unique lowercase tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of questions using this tag site-wide.
    pub count: u64,
    /// When the tag was introduced; drives the "new" tag ordering.
    pub created_at: Timestamp,
}

/// A short remark attached to a question or an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: Timestamp,
    pub author_id: UserId,
    pub upvotes: u32,
}

/// An answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    /// Markdown body.
    pub content: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    pub author_id: UserId,
    pub question_id: QuestionId,
    pub upvotes: u32,
    pub downvotes: u32,
    pub is_accepted: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Answer {
    /// Upvotes minus downvotes. May be negative.
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

/// A question with its embedded tags, answers and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    pub author_id: UserId,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub view_count: u64,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Question {
    /// Upvotes minus downvotes. May be negative.
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// Number of answers, always derived from the answers themselves.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Latest of the question's own creation and its answers' creation.
    pub fn last_activity(&self) -> Timestamp {
        self.answers
            .iter()
            .map(|answer| answer.created_at)
            .fold(self.created_at, |latest, at| latest.max(at))
    }

    /// The accepted answer, if any.
    pub fn accepted_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.is_accepted)
    }
}
