//! CLI command implementations

pub mod browse;
pub mod routes;
pub mod submit;

use std::env;
use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use asklane_core::output::{emit_response, JsonIssue, JsonResponse};
use asklane_core::{
    AskConfig, AskError, Clock, Config, FixtureStore, SystemClock, UserId, View, ViewOptions,
};

use crate::cli::GlobalArgs;

pub use browse::{run_open, run_question, run_questions, run_tags, run_user, run_whoami};
pub use routes::run_routes;
pub use submit::{run_answer, run_ask, run_suggest_tags, run_vote};

/// Everything a command needs: data, settings and output mode.
pub struct Context {
    pub store: FixtureStore,
    pub config: AskConfig,
    pub json: bool,
    pub clock: Box<dyn Clock>,
}

impl Context {
    /// Load configuration and the dataset named by the global flags.
    ///
    /// `--config` must exist when given; otherwise `./asklane.toml` is read
    /// if present. `--fixture` wins over the config's `fixture`.
    pub fn load(global: &GlobalArgs) -> Result<Self, AskError> {
        let config = match &global.config {
            Some(path) => Config::load(path)?,
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    AskError::config(format!("failed to get current directory: {}", e))
                })?;
                Config::load_or_default(&cwd)?
            }
        };

        let fixture = global.fixture.as_ref().or(config.asklane.fixture.as_ref());
        let store = match fixture {
            Some(path) => FixtureStore::load(path)?,
            None => FixtureStore::builtin(),
        };
        debug!(
            fixture = ?fixture,
            questions = store.all_questions().len(),
            "context ready"
        );

        Ok(Self {
            store,
            config: config.asklane,
            json: global.json,
            clock: Box::new(SystemClock),
        })
    }

    /// View options seeded from configuration.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::from(&self.config)
    }

    /// Print a view as text, or as a JSON envelope with unresolved authors as issues.
    pub fn emit_view(&self, command: &str, view: &View) -> Result<(), AskError> {
        if self.json {
            let issues = unresolved_author_issues(&view.unresolved_authors());
            self.emit_json(&JsonResponse::ok_with_issues(command, view, issues))
        } else {
            self.emit_text(&crate::render::view(view, self.clock.now()))
        }
    }

    /// Print `data` as a JSON envelope, or `text` as is.
    pub fn emit<T: Serialize>(&self, command: &str, data: &T, text: &str) -> Result<(), AskError> {
        if self.json {
            self.emit_json(&JsonResponse::ok(command, data))
        } else {
            self.emit_text(text)
        }
    }

    fn emit_json<T: Serialize>(&self, response: &T) -> Result<(), AskError> {
        let mut stdout = io::stdout().lock();
        emit_response(response, &mut stdout)
            .map_err(|e| AskError::internal(format!("failed to write output: {}", e)))
    }

    fn emit_text(&self, text: &str) -> Result<(), AskError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| AskError::internal(format!("failed to write output: {}", e)))
    }
}

fn unresolved_author_issues(ids: &[UserId]) -> Vec<JsonIssue> {
    ids.iter()
        .map(|id| JsonIssue::warning("W001", format!("author '{}' does not resolve to a user", id)))
        .collect()
}
