//! Navigational routes.
//!
//! | Path             | Route            |
//! |------------------|------------------|
//! | `/`              | `Home`           |
//! | `/questions/ask` | `AskQuestion`    |
//! | `/questions/:id` | `QuestionDetail` |
//! | `/tags`          | `Tags`           |
//! | `/users/:id`     | `UserProfile`    |
//! | anything else    | `NotFound`       |

use std::fmt;

use serde::Serialize;

use crate::fixture::CURRENT_USER_ID;
use crate::model::{QuestionId, UserId};

/// A parsed navigational path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    Home,
    QuestionDetail(QuestionId),
    AskQuestion,
    Tags,
    UserProfile(UserId),
    /// Unmatched path, kept as given.
    NotFound(String),
}

impl Route {
    /// Parse a path. Never fails: unmatched paths become [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        // empty segments never match
        if bare.contains("//") {
            return Route::NotFound(path.to_string());
        }
        let trimmed = bare.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .strip_prefix('/')
            .unwrap_or(trimmed)
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["questions", "ask"] => Route::AskQuestion,
            ["questions", id] => Route::QuestionDetail(QuestionId::new(*id)),
            ["tags"] => Route::Tags,
            ["users", id] => Route::UserProfile(UserId::new(*id)),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::QuestionDetail(id) => format!("/questions/{id}"),
            Route::AskQuestion => "/questions/ask".to_string(),
            Route::Tags => "/tags".to_string(),
            Route::UserProfile(id) => format!("/users/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Short page name, used in logs and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::QuestionDetail(_) => "question_detail",
            Route::AskQuestion => "ask_question",
            Route::Tags => "tags",
            Route::UserProfile(_) => "user_profile",
            Route::NotFound(_) => "not_found",
        }
    }

    /// Sidebar entries, in display order.
    pub fn navigation() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", Route::Home),
            NavItem::new("Tags", Route::Tags),
            NavItem::new("Users", Route::UserProfile(UserId::new(CURRENT_USER_ID))),
            NavItem::new("Ask Question", Route::AskQuestion),
        ]
    }

    /// Path patterns understood by [`Route::parse`], in match order.
    pub fn patterns() -> &'static [(&'static str, &'static str)] {
        &[
            ("/", "home"),
            ("/questions/ask", "ask_question"),
            ("/questions/:id", "question_detail"),
            ("/tags", "tags"),
            ("/users/:id", "user_profile"),
            ("*", "not_found"),
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: String,
}

impl NavItem {
    fn new(label: &'static str, route: Route) -> Self {
        Self {
            label,
            path: route.path(),
        }
    }
}
