//! State of the ask-question form.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::error::{AskError, EntityKind};
use crate::model::{Tag, TagId, MAX_TAGS_PER_QUESTION};
use crate::query::suggest_tags;

/// Something that keeps a draft from being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftProblem {
    #[error("title is required")]
    MissingTitle,
    #[error("body is required")]
    MissingBody,
    #[error("at least one tag is required")]
    NoTags,
}

/// A question being written: title, markdown body and up to five tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionDraft {
    pub title: String,
    pub body: String,
    tags: Vec<Tag>,
}

impl QuestionDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags: Vec::new(),
        }
    }

    /// Selected tags, in the order they were added.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether another tag can be added.
    pub fn can_add_tag(&self) -> bool {
        self.tags.len() < MAX_TAGS_PER_QUESTION
    }

    /// Add a tag. Returns false when it is already selected or the draft is full.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if !self.can_add_tag() || self.tags.iter().any(|t| t.id == tag.id) {
            debug!(tag = %tag.name, "tag not added");
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Add the tag called `name` from `available`.
    ///
    /// Unknown names are `NotFound`; a duplicate is ignored; a sixth tag is
    /// rejected as invalid arguments.
    pub fn add_tag_named(&mut self, available: &[Tag], name: &str) -> Result<(), AskError> {
        let tag = available
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AskError::not_found(EntityKind::Tag, name))?;
        if self.tags.iter().any(|t| t.id == tag.id) {
            return Ok(());
        }
        if !self.can_add_tag() {
            return Err(AskError::invalid_args(format!(
                "a question can have at most {} tags",
                MAX_TAGS_PER_QUESTION
            )));
        }
        self.tags.push(tag.clone());
        Ok(())
    }

    /// Remove a selected tag by id. Unknown ids are ignored.
    pub fn remove_tag(&mut self, id: &TagId) {
        self.tags.retain(|t| &t.id != id);
    }

    /// Tags matching `input` that are not yet selected.
    pub fn suggestions(&self, available: &[Tag], input: &str, limit: usize) -> Vec<Tag> {
        suggest_tags(available, &self.tags, input, limit)
    }

    /// List every problem blocking submission.
    pub fn problems(&self) -> Vec<DraftProblem> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push(DraftProblem::MissingTitle);
        }
        if self.body.trim().is_empty() {
            problems.push(DraftProblem::MissingBody);
        }
        if self.tags.is_empty() {
            problems.push(DraftProblem::NoTags);
        }
        problems
    }

    /// Ok when the draft can be submitted, otherwise every problem found.
    pub fn validate(&self) -> Result<(), Vec<DraftProblem>> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
