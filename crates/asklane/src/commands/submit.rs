//! Ask-form commands: `suggest-tags`, `ask`, `answer`, `vote`
//!
//! Submissions are checked against the store, acknowledged and discarded.

use asklane_core::{
    send_answer, send_question, send_vote, suggest_tags, AnswerDraft, AnswerId, AskError,
    DiscardingSink, EntityKind, QuestionDraft, QuestionId, Tag, TagId, Vote, VoteDirection,
    VoteTarget,
};

use super::Context;
use crate::cli::VoteTargetArg;
use crate::render;

/// Suggest tags for partial input, skipping ids already selected.
pub fn run_suggest_tags(
    ctx: &Context,
    input: &str,
    selected: &[String],
    limit: Option<usize>,
) -> Result<(), AskError> {
    let all = ctx.store.all_tags();
    let selected = selected
        .iter()
        .map(|id| find_tag(all, &TagId::new(id.as_str())).cloned())
        .collect::<Result<Vec<Tag>, AskError>>()?;
    let limit = limit.unwrap_or(ctx.config.suggestion_limit);
    let suggestions = suggest_tags(all, &selected, input, limit);

    let text = if suggestions.is_empty() {
        "No matching tags.\n".to_string()
    } else {
        render::tag_lines(&suggestions)
    };
    ctx.emit("suggest-tags", &suggestions, &text)
}

fn find_tag<'a>(tags: &'a [Tag], id: &TagId) -> Result<&'a Tag, AskError> {
    tags.iter()
        .find(|t| &t.id == id)
        .ok_or_else(|| AskError::not_found(EntityKind::Tag, id.as_str()))
}

/// Build a question draft from flags and submit it.
pub fn run_ask(ctx: &Context, title: &str, body: &str, tags: &[String]) -> Result<(), AskError> {
    let mut draft = QuestionDraft::new(title, body);
    for name in tags {
        draft.add_tag_named(ctx.store.all_tags(), name)?;
    }
    let ack = send_question(&DiscardingSink, &draft)?;
    ctx.emit("ask", &ack, &render::acknowledgement(&ack))
}

/// Submit an answer to an existing question.
pub fn run_answer(ctx: &Context, question_id: &str, body: &str) -> Result<(), AskError> {
    let answer = AnswerDraft {
        question_id: QuestionId::new(question_id),
        body: body.to_string(),
    };
    let ack = send_answer(&ctx.store, &DiscardingSink, &answer)?;
    ctx.emit("answer", &ack, &render::acknowledgement(&ack))
}

/// Vote on an existing question or answer.
pub fn run_vote(
    ctx: &Context,
    target: VoteTargetArg,
    id: &str,
    direction: VoteDirection,
) -> Result<(), AskError> {
    let target = match target {
        VoteTargetArg::Question => VoteTarget::Question(QuestionId::new(id)),
        VoteTargetArg::Answer => VoteTarget::Answer(AnswerId::new(id)),
    };
    let vote = Vote { target, direction };
    let ack = send_vote(&ctx.store, &DiscardingSink, &vote)?;
    ctx.emit("vote", &ack, &render::acknowledgement(&ack))
}
