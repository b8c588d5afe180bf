//! Read-only queries over the fixture store.
//!
//! Lookups and per-author aggregates go through [`Query`], which borrows a
//! [`FixtureStore`]. Sorting, filtering and suggestion work on any slice of
//! entities and return fresh owned vectors; the input is never modified.
//!
//! Every sort is stable, so entities that compare equal keep their prior
//! relative order and sorting twice by the same mode changes nothing.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AskError;
use crate::model::{Question, QuestionId, Tag, User, UserId};
use crate::store::FixtureStore;

/// Number of tag suggestions offered by default.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

// ============================================================================
// Sort modes
// ============================================================================

/// Ordering of a question list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSort {
    /// Most recently asked first.
    #[default]
    Newest,
    /// Most recent activity (question or any answer) first.
    Active,
    /// Highest score first.
    Votes,
}

impl QuestionSort {
    pub const ALL: [QuestionSort; 3] = [QuestionSort::Newest, QuestionSort::Active, QuestionSort::Votes];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionSort::Newest => "newest",
            QuestionSort::Active => "active",
            QuestionSort::Votes => "votes",
        }
    }
}

impl fmt::Display for QuestionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionSort {
    type Err = AskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(QuestionSort::Newest),
            "active" => Ok(QuestionSort::Active),
            "votes" => Ok(QuestionSort::Votes),
            _ => Err(AskError::invalid_args(format!(
                "unknown question sort '{}' (expected newest, active or votes)",
                s
            ))),
        }
    }
}

/// Ordering of a tag list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSort {
    /// Highest usage count first.
    #[default]
    Popular,
    /// Alphabetical by name.
    Name,
    /// Most recently created first.
    New,
}

impl TagSort {
    pub const ALL: [TagSort; 3] = [TagSort::Popular, TagSort::Name, TagSort::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagSort::Popular => "popular",
            TagSort::Name => "name",
            TagSort::New => "new",
        }
    }
}

impl fmt::Display for TagSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagSort {
    type Err = AskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "popular" => Ok(TagSort::Popular),
            "name" => Ok(TagSort::Name),
            "new" => Ok(TagSort::New),
            _ => Err(AskError::invalid_args(format!(
                "unknown tag sort '{}' (expected popular, name or new)",
                s
            ))),
        }
    }
}

// ============================================================================
// Store-backed queries
// ============================================================================

/// Lookups and aggregates against one store.
#[derive(Debug, Clone, Copy)]
pub struct Query<'s> {
    store: &'s FixtureStore,
}

impl<'s> Query<'s> {
    pub fn new(store: &'s FixtureStore) -> Self {
        Self { store }
    }

    /// The store this query reads from.
    pub fn store(&self) -> &'s FixtureStore {
        self.store
    }

    /// Find a user by id.
    pub fn find_user_by_id(&self, id: &UserId) -> Option<User> {
        let found = self.store.all_users().iter().find(|user| &user.id == id);
        debug!(user = %id, found = found.is_some(), "user lookup");
        found.cloned()
    }

    /// Find a question by id.
    pub fn find_question_by_id(&self, id: &QuestionId) -> Option<Question> {
        let found = self
            .store
            .all_questions()
            .iter()
            .find(|question| &question.id == id);
        debug!(question = %id, found = found.is_some(), "question lookup");
        found.cloned()
    }

    /// Questions asked by a user, in store order.
    pub fn questions_by_author(&self, user_id: &UserId) -> Vec<Question> {
        self.store
            .all_questions()
            .iter()
            .filter(|question| &question.author_id == user_id)
            .cloned()
            .collect()
    }

    /// Number of answers a user has written across every question.
    pub fn answers_by_author_count(&self, user_id: &UserId) -> usize {
        self.store
            .all_questions()
            .iter()
            .flat_map(|question| question.answers.iter())
            .filter(|answer| &answer.author_id == user_id)
            .count()
    }

    /// Sum of the scores of the questions a user asked.
    pub fn votes_received(&self, user_id: &UserId) -> i64 {
        self.store
            .all_questions()
            .iter()
            .filter(|question| &question.author_id == user_id)
            .map(Question::score)
            .sum()
    }
}

impl FixtureStore {
    /// Query this store.
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }
}

// ============================================================================
// Slice derivations
// ============================================================================

/// Sort a copy of `questions` by `mode`.
pub fn sort_questions(questions: &[Question], mode: QuestionSort) -> Vec<Question> {
    let mut sorted = questions.to_vec();
    match mode {
        QuestionSort::Newest => sorted.sort_by_key(|q| Reverse(q.created_at)),
        QuestionSort::Active => sorted.sort_by_key(|q| Reverse(q.last_activity())),
        QuestionSort::Votes => sorted.sort_by_key(|q| Reverse(q.score())),
    }
    sorted
}

/// Tags whose name or description contains `query`, ignoring case.
///
/// An empty query matches every tag.
pub fn filter_tags(tags: &[Tag], query: &str) -> Vec<Tag> {
    if query.is_empty() {
        return tags.to_vec();
    }
    let needle = query.to_lowercase();
    tags.iter()
        .filter(|tag| {
            tag.name.to_lowercase().contains(&needle)
                || tag
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Sort a copy of `tags` by `mode`.
pub fn sort_tags(tags: &[Tag], mode: TagSort) -> Vec<Tag> {
    let mut sorted = tags.to_vec();
    match mode {
        TagSort::Popular => sorted.sort_by_key(|tag| Reverse(tag.count)),
        TagSort::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        TagSort::New => sorted.sort_by_key(|tag| Reverse(tag.created_at)),
    }
    sorted
}

/// Suggest tags whose name contains `input`, ignoring case.
///
/// Tags already in `selected` are skipped and at most `limit` tags are
/// returned, in the order they appear in `all_tags`. Blank input suggests
/// nothing.
pub fn suggest_tags(all_tags: &[Tag], selected: &[Tag], input: &str, limit: usize) -> Vec<Tag> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    all_tags
        .iter()
        .filter(|tag| tag.name.to_lowercase().contains(&needle))
        .filter(|tag| !selected.iter().any(|s| s.id == tag.id))
        .take(limit)
        .cloned()
        .collect()
}
