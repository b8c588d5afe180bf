//! Compile-only test to verify public API surface.
//!
//! If this file fails to compile, the public API has regressed.

#![allow(unused_imports)]

// ============================================================================
// Model, store and fixture
// ============================================================================

use asklane_core::fixture::{builtin_dataset, CURRENT_USER_ID};
use asklane_core::model::{
    Answer, AnswerId, Comment, CommentId, Question, QuestionId, Tag, TagId, Timestamp, User,
    UserId, MAX_TAGS_PER_QUESTION,
};
use asklane_core::store::{validate, Dataset, DatasetError, FixtureStore, Violation};

// ============================================================================
// Queries, routes and views
// ============================================================================

use asklane_core::query::{
    filter_tags, sort_questions, sort_tags, suggest_tags, Query, QuestionSort, TagSort,
    DEFAULT_SUGGESTION_LIMIT,
};
use asklane_core::route::{NavItem, Route};
use asklane_core::text::{excerpt, format_date, format_long_date, group_thousands, time_ago};
use asklane_core::view::{
    AnswerView, AskPage, CommentView, HomePage, NotFoundPage, ProfilePage, QuestionPage,
    QuestionSummary, TagsPage, View, ViewOptions, ViewResolver,
};

// ============================================================================
// Drafts, submissions, delay and clock
// ============================================================================

use asklane_core::clock::{Clock, FixedClock, SystemClock};
use asklane_core::delay::{load_question, Delay, NoDelay, RecordingDelay, ThreadSleep, DEFAULT_LOAD_DELAY};
use asklane_core::draft::{DraftProblem, QuestionDraft};
use asklane_core::submit::{
    send_answer, send_question, send_vote, Acknowledgement, AnswerDraft, DiscardingSink,
    SubmissionSink, Vote, VoteDirection, VoteTarget,
};

// ============================================================================
// Errors, config and output
// ============================================================================

use asklane_core::config::{AskConfig, Config, CONFIG_FILE_NAME};
use asklane_core::error::{AskError, EntityKind, OutputErrorCode};
use asklane_core::output::{
    emit_response, ErrorInfo, ErrorResponse, JsonIssue, JsonResponse,
    SCHEMA_VERSION,
};

// ============================================================================
// Test
// ============================================================================

#[test]
fn api_surface_compiles() {
    let _ = std::any::type_name::<FixtureStore>();
    let _ = std::any::type_name::<Query<'static>>();
    let _ = std::any::type_name::<ViewResolver<'static>>();
    let _ = std::any::type_name::<AskError>();
    let _ = std::any::type_name::<JsonResponse<View>>();
    let _ = std::any::type_name::<Box<dyn SubmissionSink>>();
    let _ = std::any::type_name::<Box<dyn Delay>>();
    let _ = std::any::type_name::<Box<dyn Clock>>();
}

#[test]
fn schema_version_is_stable() {
    assert_eq!(SCHEMA_VERSION, "1");
}
