//! LexVi CLI - Command line interface
//!
//! Tokenizes a source file (or stdin) and prints the token stream in the
//! configured format. Scan errors go to stderr with source context.

use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod logging;
mod platform;

use crate::config::{parse_log_level, LogConfig};
use crate::logging::{LogFormat, TracingSink};
use crate::platform::print_error_with_source;
use lexvi_config::{ConfigError, ExportConfig, ExportFormat, LexviConfig, LogLevel};
use lexvi_core::{
    render_report, render_table, to_csv, to_json, Automaton, ExportError, ScanOutput, Scanner,
    StateMap, Stepper, Transition,
};
use lexvi_log::{FileSink, Logger};
use std::sync::Arc;

/// Errors that stop the CLI before or after scanning
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read input '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot open log file: {0}")]
    LogFile(#[from] lexvi_log::Error),

    #[error("cannot install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Output format flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum FormatArg {
    Table,
    Csv,
    Json,
    Report,
    Dot,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => ExportFormat::Table,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Report => ExportFormat::Report,
            FormatArg::Dot => ExportFormat::Dot,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "lexvi",
    about = "LexVi - tokenize source text and show the token stream",
    version
)]
struct Cli {
    /// Source file to scan (`-` reads stdin)
    #[arg(value_name = "INPUT", default_value = "-")]
    input: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Step through the tokens and show the classifier state for each
    #[arg(long)]
    steps: bool,

    /// Print the numbered source before the tokens
    #[arg(long)]
    show_source: bool,

    /// Log level for all phases: trace, debug, info, warn, error, silent
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Also append scanner log records to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Exit with status 1 when the input contains unrecognized characters
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = load_config(cli)?;
    let log_config = LogConfig::from_logging(&config.logging).with_override(cli.log_level);
    logging::init(&log_config, cli.log_format)?;

    let source = read_source(&cli.input)?;
    tracing::debug!(target: "lexvi::cli", input = %cli.input.display(), bytes = source.len(), "Read input");

    let scanner = Scanner::with_logger(build_logger(&log_config, cli.log_file.as_deref())?);
    let output = scanner.tokenize(&source);

    let mut stdout = io::stdout().lock();

    if cli.show_source {
        writeln!(stdout, "[Source]")?;
        write!(stdout, "{}", render_numbered_source(&source))?;
        writeln!(stdout, "[Tokens]")?;
    }

    if cli.steps {
        write!(stdout, "{}", render_steps(&output))?;
    }

    let rendered = render_output(&output, &config.export)?;
    tracing::info!(
        target: "lexvi::export",
        format = ?config.export.format,
        tokens = output.tokens().len(),
        "Exported tokens"
    );
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    for error in output.errors() {
        print_error_with_source(error, &source);
    }

    if cli.strict && output.has_errors() {
        tracing::warn!(
            target: "lexvi::cli",
            errors = output.errors().len(),
            "Strict mode: input contains unrecognized characters"
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Configuration file (if any) with flag overrides applied
fn load_config(cli: &Cli) -> Result<LexviConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => LexviConfig::load(path)?,
        None => LexviConfig::default(),
    };
    if let Some(format) = cli.format {
        config.export.format = format.into();
    }
    Ok(config)
}

/// lexvi-log logger forwarding to tracing, plus an optional log file
fn build_logger(log_config: &LogConfig, log_file: Option<&Path>) -> Result<Arc<Logger>, CliError> {
    let logger = Logger::new(log_config.most_verbose()).with_sink(TracingSink);
    if let Some(path) = log_file {
        logger.add_sink(FileSink::new(path)?);
    }
    Ok(logger)
}

/// Read the whole input; `-` means stdin. Invalid UTF-8 is an I/O error.
fn read_source(input: &Path) -> Result<String, CliError> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Input {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(source);
    }

    std::fs::read_to_string(input).map_err(|source| CliError::Input {
        path: input.display().to_string(),
        source,
    })
}

fn render_output(output: &ScanOutput<'_>, export: &ExportConfig) -> Result<String, ExportError> {
    Ok(match export.format {
        ExportFormat::Table => render_table(output.tokens()),
        ExportFormat::Csv => to_csv(output.tokens(), export),
        ExportFormat::Json => {
            let mut json = to_json(output.tokens())?;
            json.push('\n');
            json
        }
        ExportFormat::Report => render_report(output),
        ExportFormat::Dot => Automaton::standard().to_dot(),
    })
}

fn render_numbered_source(source: &str) -> String {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:3} | {}\n", i + 1, line))
        .collect()
}

/// `START -letter-> IDENTIFIER -letter/digit-> IDENTIFIER`
fn describe_path(path: &[&Transition]) -> String {
    let Some(first) = path.first() else {
        return String::new();
    };
    let mut text = first.from.to_string();
    for t in path {
        text.push_str(&format!(" -{}-> {}", t.label, t.to));
    }
    text
}

fn render_steps(output: &ScanOutput<'_>) -> String {
    let states = StateMap::standard();
    let automaton = Automaton::standard();

    let mut text = String::from("[LexVi - Step Through]\n======================\n");
    for step in Stepper::new(output.tokens(), &states) {
        let path = automaton.path_for(step.state);
        text.push_str(&format!(
            "[{:>3}] {:<10} {:<16} {}:{}  {}\n",
            step.index + 1,
            step.token.kind,
            format!("{:?}", step.token.text),
            step.token.line,
            step.token.column,
            describe_path(&path)
        ));
    }
    text.push_str(&format!(
        "Done: {} tokens, {} errors\n",
        output.tokens().len(),
        output.errors().len()
    ));
    text
}
