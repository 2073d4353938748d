// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;

use translation_judge::app_config::{Config, LogLevel};
use translation_judge::comparison::ComparisonService;
use translation_judge::evaluation::evaluate;
use translation_judge::language_utils::LanguageId;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate with both providers and recommend the better result
    Compare(CompareArgs),

    /// Score a back-translation against its original without any provider
    Score(ScoreArgs),

    /// Generate shell completions for translation-judge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CompareArgs {
    /// Text to translate
    #[arg(long)]
    text: String,

    /// Source language id (1-4) or code (ja, en, zh, ko)
    #[arg(short, long, value_parser = parse_language_arg)]
    source: i64,

    /// Target language id (1-4) or code (ja, en, zh, ko)
    #[arg(short, long, value_parser = parse_language_arg)]
    target: i64,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Dictionary file path, overriding the config file
    #[arg(long)]
    dictionary: Option<String>,

    /// Google Apps Script URL, overriding the config file
    #[arg(long, env = "GOOGLE_SCRIPT_URL")]
    google_script_url: Option<String>,

    /// DeepL endpoint URL, overriding the config file
    #[arg(long, env = "DEEPL_API_URL")]
    deepl_api_url: Option<String>,

    /// DeepL API key, overriding the config file
    #[arg(long, env = "DEEPL_API_KEY", hide_env_values = true)]
    deepl_api_key: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ScoreArgs {
    /// Original text
    #[arg(long)]
    original: String,

    /// Back-translated text
    #[arg(long)]
    back: String,

    /// Target language id (1-4) or code; selects the metric weights
    #[arg(short, long)]
    target: LanguageId,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Translation Judge - pick the better of two machine translations
///
/// Both providers translate the text, then translate their own output back.
/// Each back-translation is scored against the original and the provider
/// with the higher score is recommended.
#[derive(Parser, Debug)]
#[command(name = "translation-judge")]
#[command(version)]
#[command(about = "Back-translation based comparison of machine translation providers")]
#[command(long_about = "translation-judge translates a text with Google and DeepL, back-translates both results and recommends the provider whose back-translation best matches the original.

EXAMPLES:
    translation-judge compare --text 'こんにちは' -s ja -t en
    translation-judge compare --text '天ぷら定食' -s 1 -t 4 --log-level debug
    translation-judge score --original 'こんにちは' --back 'こんにちわ' -t en
    translation-judge completions bash > translation-judge.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. GOOGLE_SCRIPT_URL, DEEPL_API_URL and
    DEEPL_API_KEY override the matching settings.

LANGUAGES:
    1 / ja - Japanese
    2 / en - English
    3 / zh - Chinese
    4 / ko - Korean")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Accept a numeric id as is, or translate a language code to its id.
/// Out-of-range ids are passed through and rejected by the comparison.
fn parse_language_arg(value: &str) -> Result<i64, String> {
    if let Ok(id) = value.trim().parse::<i64>() {
        return Ok(id);
    }
    LanguageId::from_code(value)
        .map(|lang| lang.id())
        .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set via max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "translation-judge", &mut std::io::stdout());
            Ok(())
        }
        Commands::Compare(args) => run_compare(args).await,
        Commands::Score(args) => run_score(args),
    }
}

async fn run_compare(options: CompareArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options and environment if provided
    if let Some(path) = &options.dictionary {
        config.dictionary.path = path.clone();
    }
    if let Some(url) = &options.google_script_url {
        config.providers.google.script_url = url.clone();
    }
    if let Some(url) = &options.deepl_api_url {
        config.providers.deepl.api_url = url.clone();
    }
    if let Some(key) = &options.deepl_api_key {
        config.providers.deepl.api_key = key.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    debug!("Using dictionary {}", config.dictionary.path);
    let service = ComparisonService::from_config(&config)
        .map_err(|e| anyhow!("Failed to initialize comparison service: {}", e))?;

    let response = service.respond(&options.text, options.source, options.target).await;
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to serialize comparison response")?
    );

    if response.success {
        Ok(())
    } else {
        Err(anyhow!(
            "Comparison failed: {}",
            response.error.unwrap_or_else(|| "unknown error".to_string())
        ))
    }
}

fn run_score(options: ScoreArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let breakdown = evaluate(&options.original, &options.back, options.target);
    info!("{} (weakest: {})", breakdown.summary(), breakdown.weakest_metric());

    println!(
        "{}",
        serde_json::to_string_pretty(&breakdown).context("Failed to serialize score breakdown")?
    );

    Ok(())
}
