// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use evidence_align::alignment::{segment_located_blocks, AlignmentRequest, PunctuationMode};
use evidence_align::app_config::{self, Config};
use evidence_align::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for PunctuationMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliPunctuation {
    Drop,
    Space,
}

impl From<CliPunctuation> for PunctuationMode {
    fn from(cli_mode: CliPunctuation) -> Self {
        match cli_mode {
            CliPunctuation::Drop => PunctuationMode::Drop,
            CliPunctuation::Space => PunctuationMode::Space,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Segment a document and highlight its evidence excerpts
    Align(AlignArgs),

    /// Segment a document into paragraph and table blocks only
    Blocks(BlocksArgs),

    /// Generate shell completions for evidence-align
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AlignArgs {
    /// Extracted document text file
    #[arg(value_name = "TEXT_FILE")]
    text_path: PathBuf,

    /// JSON file with excerpts (a list, or {"excerpts": [...]})
    #[arg(short, long)]
    excerpts: Option<PathBuf>,

    /// Report the first highlighted segment for scroll/focus
    #[arg(short, long)]
    focus: bool,

    /// Punctuation handling for approximate matching
    #[arg(short, long, value_enum)]
    punctuation: Option<CliPunctuation>,

    /// Write JSON output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BlocksArgs {
    /// Extracted document text file
    #[arg(value_name = "TEXT_FILE")]
    text_path: PathBuf,

    /// Write JSON output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// evidence-align - locate evidence quotes in extracted document text
#[derive(Parser, Debug)]
#[command(name = "evidence-align")]
#[command(version)]
#[command(about = "Segment extracted documents and highlight evidence quotes")]
#[command(long_about = "evidence-align splits extracted document text into paragraphs and tables and \
highlights every evidence excerpt inside them, tolerating whitespace reflow, case and punctuation \
differences.

EXAMPLES:
    evidence-align align report.txt -e excerpts.json          # Highlight excerpts
    evidence-align align report.txt -e excerpts.json --focus  # Also report the first highlight
    evidence-align blocks report.txt                          # Show paragraph/table blocks
    evidence-align completions bash > evidence-align.bash     # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    config file with --config-path. A missing file means defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Install the logger at trace and narrow it with the max level once config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "evidence-align", &mut std::io::stdout());
            Ok(())
        }
        Commands::Align(args) => {
            let config = load_config(&cli.config_path, cli.log_level.is_some())?;
            run_align(args, config)
        }
        Commands::Blocks(args) => {
            let config = load_config(&cli.config_path, cli.log_level.is_some())?;
            run_blocks(args, config)
        }
    }
}

// Load and validate configuration, applying its log level unless the CLI set one
fn load_config(path: &Path, log_level_from_cli: bool) -> Result<Config> {
    let config = Config::load_or_default(path)?;
    config.validate().context("Configuration validation failed")?;

    if !log_level_from_cli {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn run_align(args: AlignArgs, mut config: Config) -> Result<()> {
    if let Some(punctuation) = args.punctuation {
        config.matching.punctuation = punctuation.into();
    }

    let raw_text = FileManager::read_text(&args.text_path)?;
    let excerpts = match &args.excerpts {
        Some(path) => FileManager::load_excerpts(path)?,
        None => Vec::new(),
    };
    debug!("Loaded {} excerpt(s) for {:?}", excerpts.len(), args.text_path);

    let aligner = config.build_aligner();
    let request = AlignmentRequest::new(raw_text, excerpts).with_focus(args.focus);
    let document = aligner.align(&request);

    info!(
        "{} block(s), {} highlight(s), {}/{} excerpt(s) located",
        document.blocks.len(),
        document.highlight_count(),
        document.coverage.located,
        document.coverage.total
    );

    let json = FileManager::to_json(&document, config.output.pretty)?;
    emit(json, args.output.as_deref())
}

fn run_blocks(args: BlocksArgs, config: Config) -> Result<()> {
    let raw_text = FileManager::read_text(&args.text_path)?;
    let blocks = segment_located_blocks(&raw_text);

    info!("{} block(s) in {:?}", blocks.len(), args.text_path);

    let json = FileManager::to_json(&blocks, config.output.pretty)?;
    emit(json, args.output.as_deref())
}

fn emit(json: String, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            FileManager::write_to_file(path, &json)?;
            info!("Success: {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
