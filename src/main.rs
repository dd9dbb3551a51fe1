//! quiz-tui CLI
//!
//! Interactive multiple-choice quiz in the terminal, plus scripted and
//! listing commands for automation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use quiz_tui::logging::{LogSink, init_logging};
use quiz_tui::report::{format_outcome, format_questions};
use quiz_tui::script::run_script;
use quiz_tui::session::QuizSession;
use quiz_tui::types::{OutputFormat, PlayConfig, builtin_questions};

#[derive(Parser)]
#[command(name = "quiz-tui")]
#[command(about = "Multiple-choice quiz with shuffled questions and answers")]
#[command(version)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz interactively (default)
    Play(SeedArg),

    /// Play through non-interactively with preselected answers
    Script {
        /// 1-based option number for each question, in session order (e.g. 1,3,2,4)
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<usize>,

        #[command(flatten)]
        seed: SeedArg,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the built-in question set with correct answers
    Questions {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Args, Default)]
struct SeedArg {
    /// Seed for the shuffle, for a reproducible question/option order
    #[arg(long)]
    seed: Option<u64>,
}

impl From<SeedArg> for PlayConfig {
    fn from(arg: SeedArg) -> Self {
        PlayConfig { seed: arg.seed }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play(SeedArg::default()));

    // The TUI owns the terminal: log only to a file there.
    let (default_level, sink) = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => (LevelFilter::Info, LogSink::File(path)),
        (Commands::Play(_), None) => (LevelFilter::Off, LogSink::Off),
        (_, None) => (LevelFilter::Warn, LogSink::Stderr),
    };
    if let Err(e) = init_logging(cli.verbose, cli.quiet, default_level, sink) {
        eprintln!("Error: cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match command {
        Commands::Play(seed) => cmd_play(seed.into()),
        Commands::Script { answers, seed, format } => cmd_script(&answers, seed.into(), format.into()),
        Commands::Questions { format } => cmd_questions(format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(config: PlayConfig) -> Result<(), String> {
    let mut rng = config.rng();
    quiz_tui::tui::run(&mut rng).map_err(|e| format!("terminal error: {}", e))
}

fn cmd_script(answers: &[usize], config: PlayConfig, format: OutputFormat) -> Result<(), String> {
    let mut rng = config.rng();
    let mut session = QuizSession::load(&mut rng);
    let outcome = run_script(&mut session, answers).map_err(|e| e.to_string())?;
    print!("{}", format_outcome(&outcome, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_questions(format: OutputFormat) -> Result<(), String> {
    let questions = builtin_questions();
    for question in &questions {
        question.validate().map_err(|e| e.to_string())?;
    }
    print!("{}", format_questions(&questions, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
