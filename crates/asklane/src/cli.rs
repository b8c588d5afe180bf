//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use asklane_core::{QuestionSort, TagSort, VoteDirection};

/// Browse a mock Q&A site: questions, answers, tags and profiles.
///
/// All data comes from a builtin fixture (or a JSON dataset via --fixture).
/// Nothing is ever written: asking, answering and voting are acknowledged
/// and discarded.
#[derive(Parser, Debug)]
#[command(name = "asklane", version, about = "Browse a mock Q&A site from the command line")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Load the dataset from a JSON file instead of the builtin fixture
    #[arg(long, global = true, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Configuration file (default: ./asklane.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for tracing output (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Question list ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum QuestionSortArg {
    /// Most recently asked first
    Newest,
    /// Most recent answer first
    Active,
    /// Highest score first
    Votes,
}

impl From<QuestionSortArg> for QuestionSort {
    fn from(arg: QuestionSortArg) -> Self {
        match arg {
            QuestionSortArg::Newest => QuestionSort::Newest,
            QuestionSortArg::Active => QuestionSort::Active,
            QuestionSortArg::Votes => QuestionSort::Votes,
        }
    }
}

/// Tag browser ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TagSortArg {
    /// Most used first
    Popular,
    /// Alphabetical
    Name,
    /// Most recently created first
    New,
}

impl From<TagSortArg> for TagSort {
    fn from(arg: TagSortArg) -> Self {
        match arg {
            TagSortArg::Popular => TagSort::Popular,
            TagSortArg::Name => TagSort::Name,
            TagSortArg::New => TagSort::New,
        }
    }
}

/// What a vote is cast on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VoteTargetArg {
    Question,
    Answer,
}

/// Vote direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VoteDirectionArg {
    Up,
    Down,
}

impl From<VoteDirectionArg> for VoteDirection {
    fn from(arg: VoteDirectionArg) -> Self {
        match arg {
            VoteDirectionArg::Up => VoteDirection::Up,
            VoteDirectionArg::Down => VoteDirection::Down,
        }
    }
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a path (e.g. /questions/2) and show its page
    ///
    /// Unknown paths show the not-found page and still succeed.
    Open {
        /// Navigational path
        path: String,
    },

    /// List all questions
    Questions {
        /// Ordering (default from config, else newest)
        #[arg(long, value_enum)]
        sort: Option<QuestionSortArg>,
    },

    /// Show one question with its answers and comments
    Question {
        /// Question id
        id: String,

        /// Skip the simulated load delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Browse tags
    Tags {
        /// Only tags whose name or description contains this text
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,

        /// Ordering (default from config, else popular)
        #[arg(long, value_enum)]
        sort: Option<TagSortArg>,
    },

    /// Show a user's profile
    User {
        /// User id
        id: String,
    },

    /// Show the signed-in user
    Whoami,

    /// Suggest tags for partial input, as the ask form does
    SuggestTags {
        /// Partial tag name
        input: String,

        /// Tag ids already chosen (excluded from suggestions)
        #[arg(long = "selected", value_name = "ID")]
        selected: Vec<String>,

        /// Maximum suggestions (default from config, else 5)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Ask a question (validated, acknowledged, then discarded)
    Ask {
        /// One-line summary
        #[arg(long, default_value = "")]
        title: String,

        /// Question body (markdown)
        #[arg(long, default_value = "")]
        body: String,

        /// Tag name; repeat for up to five tags
        #[arg(long = "tag", value_name = "NAME")]
        tags: Vec<String>,
    },

    /// Answer a question (acknowledged, then discarded)
    Answer {
        /// Question id
        question_id: String,

        /// Answer body (markdown)
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Vote on a question or an answer (acknowledged, then discarded)
    Vote {
        /// What to vote on
        #[arg(value_enum)]
        target: VoteTargetArg,

        /// Question or answer id
        id: String,

        /// Direction
        #[arg(value_enum)]
        direction: VoteDirectionArg,
    },

    /// List the route table and sidebar navigation
    Routes,
}

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from(["asklane", "tags", "--json", "--sort", "name"]).unwrap();
        assert!(cli.global.json);
        match cli.command {
            Command::Tags { sort, filter } => {
                assert_eq!(sort, Some(TagSortArg::Name));
                assert!(filter.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn repeated_tags_and_selected_ids() {
        let cli = Cli::try_parse_from([
            "asklane", "ask", "--title", "T", "--body", "B", "--tag", "sql", "--tag", "css",
        ])
        .unwrap();
        let Command::Ask { tags, .. } = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(tags, ["sql", "css"]);

        let cli = Cli::try_parse_from([
            "asklane", "suggest-tags", "s", "--selected", "1", "--selected", "4",
        ])
        .unwrap();
        let Command::SuggestTags { selected, limit, .. } = cli.command else {
            panic!("expected suggest-tags");
        };
        assert_eq!(selected, ["1", "4"]);
        assert_eq!(limit, None);
    }

    #[test]
    fn vote_arguments_are_positional() {
        let cli = Cli::try_parse_from(["asklane", "vote", "answer", "3", "down"]).unwrap();
        let Command::Vote { target, id, direction } = cli.command else {
            panic!("expected vote");
        };
        assert_eq!(target, VoteTargetArg::Answer);
        assert_eq!(id, "3");
        assert_eq!(direction, VoteDirectionArg::Down);
    }

    #[test]
    fn unknown_sort_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["asklane", "questions", "--sort", "hot"]).is_err());
    }

    #[test]
    fn sort_args_map_onto_core_modes() {
        assert_eq!(QuestionSort::from(QuestionSortArg::Active), QuestionSort::Active);
        assert_eq!(TagSort::from(TagSortArg::New), TagSort::New);
        assert_eq!(VoteDirection::from(VoteDirectionArg::Up), VoteDirection::Up);
    }
}
