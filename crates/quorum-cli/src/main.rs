// Rust guideline compliant 2026-10-16

//! Quorum CLI Application
//!
//! Command-line interface for the Quorum question-and-answer service.

use clap::Parser;
use quorum_app::repo::QUORUM_DIR;
use quorum_cli::logging::init_tracing;
use quorum_cli::terminal::print_error;
use quorum_cli::{commands, create_formatter, should_use_color, OutputFormatter, Session};
use quorum_core::Config;
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "qrm",
    version,
    about = "Quorum: questions, answers and votes for a team",
    long_about = "Quorum stores questions and answers in JSONL under .quorum/. Anyone can answer and vote; the asker accepts one answer.",
    after_help = "Examples:\n  qrm init\n  qrm ask \"How do I pin a future?\" --content \"Details...\" --tag rust,async\n  qrm answer q-a1b \"Use Box::pin\"\n  qrm vote ans-c3d up\n  qrm accept ans-c3d\n  qrm show q-a1b\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Act as this user instead of QUORUM_USER, the configured default or the OS user
    #[arg(long, global = true)]
    user: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Display timestamps as absolute UTC times
    #[arg(long, global = true)]
    absolute_time: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for quorum_core::OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
            FormatArg::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Quorum repository
    Init,

    /// Ask a question
    Ask {
        /// Question title
        title: String,

        /// Question body
        #[arg(long)]
        content: Option<String>,

        /// Question body from file ('-' for stdin)
        #[arg(long)]
        content_file: Option<String>,

        /// Tags to attach
        #[arg(long, value_delimiter = ',')]
        tag: Vec<String>,
    },

    /// List questions, newest first
    List {
        /// Only questions with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only questions by this author
        #[arg(long)]
        author: Option<String>,
    },

    /// Show a question with its answers
    Show {
        /// Question ID (full or partial)
        id: String,
    },

    /// Edit a question you asked
    Edit {
        /// Question ID (full or partial)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New body
        #[arg(long)]
        content: Option<String>,

        /// New body from file ('-' for stdin)
        #[arg(long)]
        content_file: Option<String>,

        /// Replacement tags
        #[arg(long, value_delimiter = ',')]
        tag: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tag")]
        clear_tags: bool,
    },

    /// Delete a question you asked, with all of its answers
    Delete {
        /// Question ID (full or partial)
        id: String,
    },

    /// Answer a question
    Answer {
        /// Question ID (full or partial)
        question_id: String,

        /// Answer text
        content: Option<String>,

        /// Answer text from file ('-' for stdin)
        #[arg(long)]
        content_file: Option<String>,
    },

    /// Edit an answer you wrote
    EditAnswer {
        /// Answer ID (full or partial)
        id: String,

        /// New answer text
        content: Option<String>,

        /// New answer text from file ('-' for stdin)
        #[arg(long)]
        content_file: Option<String>,
    },

    /// Delete an answer you wrote
    DeleteAnswer {
        /// Answer ID (full or partial)
        id: String,
    },

    /// Vote on a question or answer; repeating a vote withdraws it
    Vote {
        /// Question or answer ID (full or partial, with its q- or ans- prefix)
        id: String,

        /// up or down; anything else leaves the votes unchanged
        direction: String,
    },

    /// Accept an answer to a question you asked
    Accept {
        /// Answer ID (full or partial)
        answer_id: String,
    },

    /// Run integrity checks
    Doctor {
        /// Automatically fix detected issues
        #[arg(long)]
        fix: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(err) => {
            print_error(&format!("Cannot resolve current directory: {err}"), use_color);
            return ExitCode::FAILURE;
        }
    };

    let (config, config_error) = match Config::load(&root.join(QUORUM_DIR)) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let format = match cli.format {
        Some(format) => format.into(),
        None if cli.json => quorum_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format, use_color, cli.absolute_time);

    let result: anyhow::Result<()> = match config_error {
        Some(err) => Err(quorum_app::AppError::from(err).into()),
        None => run(cli, &root, config, formatter.as_ref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if format == quorum_core::OutputFormat::Json {
                if err.downcast_ref::<commands::ReportedFailure>().is_none() {
                    println!("{}", formatter.format_error(&err));
                }
            } else {
                print_error(&format!("{err:#}"), use_color);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, root: &Path, config: Config, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    init_tracing(&level, cli.log_json)?;

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let open = move || Session::open(root, config, cli.user);
    match command {
        Commands::Init => commands::init::execute(root, formatter),
        Commands::Ask {
            title,
            content,
            content_file,
            tag,
        } => commands::ask::execute(&open()?, title, content, content_file, tag, formatter),
        Commands::List { tag, author } => commands::list::execute(&open()?, tag, author, formatter),
        Commands::Show { id } => commands::show::execute(&open()?, id, formatter),
        Commands::Edit {
            id,
            title,
            content,
            content_file,
            tag,
            clear_tags,
        } => commands::edit::question(
            &open()?,
            id,
            title,
            content,
            content_file,
            tag,
            clear_tags,
            formatter,
        ),
        Commands::Delete { id } => commands::delete::question(&open()?, id, formatter),
        Commands::Answer {
            question_id,
            content,
            content_file,
        } => commands::answer::execute(&open()?, question_id, content, content_file, formatter),
        Commands::EditAnswer {
            id,
            content,
            content_file,
        } => commands::edit::answer(&open()?, id, content, content_file, formatter),
        Commands::DeleteAnswer { id } => commands::delete::answer(&open()?, id, formatter),
        Commands::Vote { id, direction } => {
            commands::vote::execute(&open()?, id, direction, formatter)
        }
        Commands::Accept { answer_id } => commands::accept::execute(&open()?, answer_id, formatter),
        Commands::Doctor { fix } => commands::doctor::execute(&open()?, fix, formatter),
    }
}
