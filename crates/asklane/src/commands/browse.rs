//! Read-only page commands: `open`, `questions`, `question`, `tags`, `user`, `whoami`

use tracing::info;

use asklane_core::{
    load_question, AskError, Delay, EntityKind, NoDelay, QuestionId, QuestionSort, Route,
    TagSort, ThreadSleep, UserId, View, ViewOptions, ViewResolver,
};

use super::Context;
use crate::render;

/// Resolve a navigational path and show whatever page it lands on.
///
/// Not-found pages are pages too: this never fails on an unknown id.
pub fn run_open(ctx: &Context, path: &str) -> Result<(), AskError> {
    let route = Route::parse(path);
    info!(path, route = route.name(), "open");
    let resolver = ViewResolver::new(&ctx.store, ctx.view_options());
    let view = match &route {
        Route::QuestionDetail(id) => {
            match load_question(&ctx.store, id, &ThreadSleep, ctx.config.load_delay()) {
                Some(question) => View::QuestionDetail(resolver.question_page(&question)),
                None => resolver.resolve(&route),
            }
        }
        _ => resolver.resolve(&route),
    };
    ctx.emit_view("open", &view)
}

/// List every question.
pub fn run_questions(ctx: &Context, sort: Option<QuestionSort>) -> Result<(), AskError> {
    let options = ViewOptions {
        question_sort: sort.unwrap_or(ctx.config.question_sort),
        ..ctx.view_options()
    };
    let view = View::Home(ViewResolver::new(&ctx.store, options).home());
    ctx.emit_view("questions", &view)
}

/// Show one question after the simulated load delay.
pub fn run_question(ctx: &Context, id: &str, no_delay: bool) -> Result<(), AskError> {
    let id = QuestionId::new(id);
    let delay: &dyn Delay = if no_delay { &NoDelay } else { &ThreadSleep };
    let question = load_question(&ctx.store, &id, delay, ctx.config.load_delay())
        .ok_or_else(|| AskError::not_found(EntityKind::Question, id.as_str()))?;
    let page = ViewResolver::new(&ctx.store, ctx.view_options()).question_page(&question);
    ctx.emit_view("question", &View::QuestionDetail(page))
}

/// Browse tags, optionally filtered.
pub fn run_tags(
    ctx: &Context,
    filter: Option<String>,
    sort: Option<TagSort>,
) -> Result<(), AskError> {
    let options = ViewOptions {
        tag_query: filter.unwrap_or_default(),
        tag_sort: sort.unwrap_or(ctx.config.tag_sort),
        ..ctx.view_options()
    };
    let view = View::Tags(ViewResolver::new(&ctx.store, options).tags());
    ctx.emit_view("tags", &view)
}

/// Show a user's profile.
pub fn run_user(ctx: &Context, id: &str) -> Result<(), AskError> {
    let id = UserId::new(id);
    let page = ViewResolver::new(&ctx.store, ctx.view_options())
        .profile(&id)
        .ok_or_else(|| AskError::not_found(EntityKind::User, id.as_str()))?;
    ctx.emit_view("user", &View::UserProfile(page))
}

/// Show the designated signed-in user.
pub fn run_whoami(ctx: &Context) -> Result<(), AskError> {
    let user = ctx.store.current_user();
    ctx.emit("whoami", user, &render::user(user))
}
