//! asklane-core: data and query layer for the asklane Q&A browser.
//!
//! This crate provides everything below the presentation layer:
//! - Entity model (users, tags, comments, answers, questions)
//! - The builtin fixture dataset and the read-only fixture store
//! - Pure query/derivation functions (lookups, sorts, filters, suggestions)
//! - Route table for navigational paths
//! - View models joining query results per page
//! - Question drafts and the stub submission collaborator
//! - Injectable load delay and clock
//! - Error types, configuration and JSON output types for the CLI

pub mod clock;
pub mod config;
pub mod delay;
pub mod draft;
pub mod error;
pub mod fixture;
pub mod model;
pub mod output;
pub mod query;
pub mod route;
pub mod store;
pub mod submit;
pub mod text;
pub mod view;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AskConfig, Config};
pub use delay::{load_question, Delay, NoDelay, RecordingDelay, ThreadSleep, DEFAULT_LOAD_DELAY};
pub use draft::{DraftProblem, QuestionDraft};
pub use error::{AskError, EntityKind, OutputErrorCode};
pub use model::{
    Answer, AnswerId, Comment, CommentId, Question, QuestionId, Tag, TagId, Timestamp, User,
    UserId, MAX_TAGS_PER_QUESTION,
};
pub use query::{
    filter_tags, sort_questions, sort_tags, suggest_tags, Query, QuestionSort, TagSort,
    DEFAULT_SUGGESTION_LIMIT,
};
pub use route::{NavItem, Route};
pub use store::{Dataset, DatasetError, FixtureStore, Violation};
pub use submit::{
    send_answer, send_question, send_vote, Acknowledgement, AnswerDraft, DiscardingSink,
    SubmissionSink, Vote, VoteDirection, VoteTarget,
};
pub use view::{
    AnswerView, AskPage, CommentView, HomePage, NotFoundPage, ProfilePage, QuestionPage,
    QuestionSummary, TagsPage, View, ViewOptions, ViewResolver,
};
