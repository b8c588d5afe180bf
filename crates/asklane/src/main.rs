//! Binary entry point for the asklane CLI.
//!
//! ## Usage
//!
//! ```bash
//! # The question list, highest score first
//! asklane questions --sort votes
//!
//! # Any page by path, as JSON
//! asklane --json open /questions/2
//!
//! # Ask a question (acknowledged, then discarded)
//! asklane ask --title "How?" --body "Details" --tag javascript
//! ```
//!
//! Exit codes: 0 success, 2 invalid arguments, 3 not found, 4 dataset or
//! configuration error, 10 internal error.

mod cli;
mod commands;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use asklane_core::output::{emit_response, ErrorResponse};
use asklane_core::{AskError, OutputErrorCode};

use cli::{Cli, Command, LogLevel};
use commands::Context;

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = cli::parse();

    init_tracing(cli.global.log_level);

    let json = cli.global.json;
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            if json {
                // errors go to stdout when JSON was asked for
                let response = ErrorResponse::from_error(&err);
                let _ = emit_response(&response, &mut io::stdout());
                let _ = io::stdout().flush();
            } else {
                eprintln!("error: {}", err);
            }
            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the CLI command.
fn execute(cli: Cli) -> Result<(), AskError> {
    let ctx = Context::load(&cli.global)?;
    match cli.command {
        Command::Open { path } => commands::run_open(&ctx, &path),
        Command::Questions { sort } => commands::run_questions(&ctx, sort.map(Into::into)),
        Command::Question { id, no_delay } => commands::run_question(&ctx, &id, no_delay),
        Command::Tags { filter, sort } => commands::run_tags(&ctx, filter, sort.map(Into::into)),
        Command::User { id } => commands::run_user(&ctx, &id),
        Command::Whoami => commands::run_whoami(&ctx),
        Command::SuggestTags {
            input,
            selected,
            limit,
        } => commands::run_suggest_tags(&ctx, &input, &selected, limit),
        Command::Ask { title, body, tags } => commands::run_ask(&ctx, &title, &body, &tags),
        Command::Answer { question_id, body } => commands::run_answer(&ctx, &question_id, &body),
        Command::Vote {
            target,
            id,
            direction,
        } => commands::run_vote(&ctx, target, &id, direction.into()),
        Command::Routes => commands::run_routes(&ctx),
    }
}
