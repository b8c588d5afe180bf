//! Page data assembled from the query layer.
//!
//! [`ViewResolver`] turns a [`Route`] into a [`View`]: everything one page
//! needs, with author ids joined to users. Identifiers that do not resolve
//! produce [`View::NotFound`]; an author id that does not resolve is kept as
//! `author: None` and logged, the page still renders.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::AskConfig;
use crate::error::EntityKind;
use crate::model::{
    Answer, AnswerId, Comment, CommentId, Question, QuestionId, Tag, Timestamp, User, UserId,
    MAX_TAGS_PER_QUESTION,
};
use crate::query::{
    filter_tags, sort_questions, sort_tags, Query, QuestionSort, TagSort,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::route::Route;
use crate::store::FixtureStore;
use crate::text::excerpt;

/// Per-request choices that shape a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOptions {
    pub question_sort: QuestionSort,
    /// Tag browser search text; empty shows every tag.
    pub tag_query: String,
    pub tag_sort: TagSort,
    pub suggestion_limit: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            question_sort: QuestionSort::default(),
            tag_query: String::new(),
            tag_sort: TagSort::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl From<&AskConfig> for ViewOptions {
    fn from(config: &AskConfig) -> Self {
        Self {
            question_sort: config.question_sort,
            tag_query: String::new(),
            tag_sort: config.tag_sort,
            suggestion_limit: config.suggestion_limit,
        }
    }
}

// ============================================================================
// View models
// ============================================================================

/// One resolved page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Home(HomePage),
    QuestionDetail(QuestionPage),
    AskQuestion(AskPage),
    Tags(TagsPage),
    UserProfile(ProfilePage),
    NotFound(NotFoundPage),
}

/// The question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub sort: QuestionSort,
    pub questions: Vec<QuestionSummary>,
}

/// A question as listed on the home page and profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSummary {
    pub id: QuestionId,
    pub title: String,
    pub excerpt: String,
    pub created_at: Timestamp,
    pub score: i64,
    pub answer_count: usize,
    pub view_count: u64,
    pub has_accepted_answer: bool,
    pub tags: Vec<Tag>,
    pub author_id: UserId,
    pub author: Option<User>,
}

/// A comment with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: CommentId,
    pub content: String,
    pub created_at: Timestamp,
    pub upvotes: u32,
    pub author_id: UserId,
    pub author: Option<User>,
}

/// An answer with its author and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerView {
    pub id: AnswerId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub score: i64,
    pub is_accepted: bool,
    pub author_id: UserId,
    pub author: Option<User>,
    pub comments: Vec<CommentView>,
}

/// The question detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub id: QuestionId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub score: i64,
    pub view_count: u64,
    pub tags: Vec<Tag>,
    pub author_id: UserId,
    pub author: Option<User>,
    pub comments: Vec<CommentView>,
    /// Answers in stored order.
    pub answers: Vec<AnswerView>,
}

impl QuestionPage {
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}

/// The ask-question form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskPage {
    pub available_tags: Vec<Tag>,
    pub max_tags: usize,
    pub suggestion_limit: usize,
}

/// The tag browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagsPage {
    pub query: String,
    pub sort: TagSort,
    pub tags: Vec<Tag>,
}

/// A user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePage {
    pub user: User,
    pub is_current_user: bool,
    pub question_count: usize,
    pub answer_count: usize,
    pub votes_received: i64,
    pub questions: Vec<QuestionSummary>,
}

/// Nothing lives at the requested path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl View {
    /// Short page name, matching [`Route::name`].
    pub fn name(&self) -> &'static str {
        match self {
            View::Home(_) => "home",
            View::QuestionDetail(_) => "question_detail",
            View::AskQuestion(_) => "ask_question",
            View::Tags(_) => "tags",
            View::UserProfile(_) => "user_profile",
            View::NotFound(_) => "not_found",
        }
    }

    /// Author ids on this page that did not resolve to a user, deduplicated.
    pub fn unresolved_authors(&self) -> Vec<UserId> {
        let mut bylines: Vec<(&UserId, &Option<User>)> = Vec::new();
        match self {
            View::Home(HomePage { questions, .. })
            | View::UserProfile(ProfilePage { questions, .. }) => {
                bylines.extend(questions.iter().map(|q| (&q.author_id, &q.author)));
            }
            View::QuestionDetail(page) => {
                bylines.push((&page.author_id, &page.author));
                bylines.extend(page.comments.iter().map(|c| (&c.author_id, &c.author)));
                for answer in &page.answers {
                    bylines.push((&answer.author_id, &answer.author));
                    bylines.extend(answer.comments.iter().map(|c| (&c.author_id, &c.author)));
                }
            }
            View::AskQuestion(_) | View::Tags(_) | View::NotFound(_) => {}
        }

        let mut missing: Vec<UserId> = Vec::new();
        for (id, author) in bylines {
            if author.is_none() && !missing.contains(id) {
                missing.push(id.clone());
            }
        }
        missing
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Builds views over one store.
#[derive(Debug, Clone)]
pub struct ViewResolver<'s> {
    query: Query<'s>,
    options: ViewOptions,
}

impl<'s> ViewResolver<'s> {
    pub fn new(store: &'s FixtureStore, options: ViewOptions) -> Self {
        Self {
            query: Query::new(store),
            options,
        }
    }

    /// Resolve a route to its page.
    pub fn resolve(&self, route: &Route) -> View {
        debug!(route = route.name(), path = %route, "resolving view");
        match route {
            Route::Home => View::Home(self.home()),
            Route::QuestionDetail(id) => match self.query.find_question_by_id(id) {
                Some(question) => View::QuestionDetail(self.question_page(&question)),
                None => not_found(route, EntityKind::Question, id.as_str()),
            },
            Route::AskQuestion => View::AskQuestion(self.ask()),
            Route::Tags => View::Tags(self.tags()),
            Route::UserProfile(id) => match self.profile(id) {
                Some(page) => View::UserProfile(page),
                None => not_found(route, EntityKind::User, id.as_str()),
            },
            Route::NotFound(path) => View::NotFound(NotFoundPage {
                path: path.clone(),
                kind: None,
                id: None,
            }),
        }
    }

    /// Every question, sorted by the configured mode.
    pub fn home(&self) -> HomePage {
        let sorted = sort_questions(self.query.store().all_questions(), self.options.question_sort);
        HomePage {
            sort: self.options.question_sort,
            questions: sorted.iter().map(|q| self.summarize(q)).collect(),
        }
    }

    /// Detail page for an already loaded question.
    pub fn question_page(&self, question: &Question) -> QuestionPage {
        QuestionPage {
            id: question.id.clone(),
            title: question.title.clone(),
            content: question.content.clone(),
            created_at: question.created_at,
            updated_at: question.updated_at,
            score: question.score(),
            view_count: question.view_count,
            tags: question.tags.clone(),
            author_id: question.author_id.clone(),
            author: self.author(&question.author_id),
            comments: self.comments(&question.comments),
            answers: question.answers.iter().map(|a| self.answer(a)).collect(),
        }
    }

    /// The ask form with every tag available.
    pub fn ask(&self) -> AskPage {
        AskPage {
            available_tags: self.query.store().all_tags().to_vec(),
            max_tags: MAX_TAGS_PER_QUESTION,
            suggestion_limit: self.options.suggestion_limit,
        }
    }

    /// Filtered, then sorted tags.
    pub fn tags(&self) -> TagsPage {
        let filtered = filter_tags(self.query.store().all_tags(), &self.options.tag_query);
        TagsPage {
            query: self.options.tag_query.clone(),
            sort: self.options.tag_sort,
            tags: sort_tags(&filtered, self.options.tag_sort),
        }
    }

    /// Profile for `id`, or `None` when no such user exists.
    pub fn profile(&self, id: &UserId) -> Option<ProfilePage> {
        let user = self.query.find_user_by_id(id)?;
        let questions = self.query.questions_by_author(id);
        Some(ProfilePage {
            is_current_user: self.query.store().current_user().id == user.id,
            question_count: questions.len(),
            answer_count: self.query.answers_by_author_count(id),
            votes_received: self.query.votes_received(id),
            questions: questions.iter().map(|q| self.summarize(q)).collect(),
            user,
        })
    }

    fn summarize(&self, question: &Question) -> QuestionSummary {
        QuestionSummary {
            id: question.id.clone(),
            title: question.title.clone(),
            excerpt: excerpt(&question.content),
            created_at: question.created_at,
            score: question.score(),
            answer_count: question.answer_count(),
            view_count: question.view_count,
            has_accepted_answer: question.accepted_answer().is_some(),
            tags: question.tags.clone(),
            author_id: question.author_id.clone(),
            author: self.author(&question.author_id),
        }
    }

    fn answer(&self, answer: &Answer) -> AnswerView {
        AnswerView {
            id: answer.id.clone(),
            content: answer.content.clone(),
            created_at: answer.created_at,
            updated_at: answer.updated_at,
            score: answer.score(),
            is_accepted: answer.is_accepted,
            author_id: answer.author_id.clone(),
            author: self.author(&answer.author_id),
            comments: self.comments(&answer.comments),
        }
    }

    fn comments(&self, comments: &[Comment]) -> Vec<CommentView> {
        comments
            .iter()
            .map(|c| CommentView {
                id: c.id.clone(),
                content: c.content.clone(),
                created_at: c.created_at,
                upvotes: c.upvotes,
                author_id: c.author_id.clone(),
                author: self.author(&c.author_id),
            })
            .collect()
    }

    fn author(&self, id: &UserId) -> Option<User> {
        let user = self.query.find_user_by_id(id);
        if user.is_none() {
            warn!(user = %id, "author does not resolve to a user");
        }
        user
    }
}

fn not_found(route: &Route, kind: EntityKind, id: &str) -> View {
    debug!(%kind, id, "route target not found");
    View::NotFound(NotFoundPage {
        path: route.path(),
        kind: Some(kind),
        id: Some(id.to_string()),
    })
}
