//! Command dispatch for the `pickler` entrypoint.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser as CliParser, Subcommand};
use eyre::{bail, eyre, Context, Result};
use pickler::{feature_grammar, ErrorPolicy, ParseFailure, Parser};
use pickler_lexer::{KeywordSet, Lexer};

use crate::diagnostics::Diagnostics;
use crate::report::{ErrorReport, FileReport};

/// Feature-document checker built on the pickler engine.
#[derive(CliParser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate feature files against the feature-document grammar.
    Check(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Feature files to validate.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Language code selecting the keyword table.
    #[arg(long, default_value = "en")]
    language: String,
    /// Stop at the first violation in each file instead of collecting all.
    #[arg(long)]
    strict: bool,
    /// Emit a JSON report instead of human-readable text.
    #[arg(long)]
    json: bool,
}

/// Parse the command line and run the selected command.
///
/// # Errors
///
/// Returns an error when a file cannot be read, the language is not built
/// in, or any file contains grammar violations.
pub fn run() -> Result<()> {
    match Cli::parse().command {
        Commands::Check(args) => handle_check(&args),
    }
}

fn handle_check(args: &CheckArgs) -> Result<()> {
    let keywords = KeywordSet::for_code(&args.language).ok_or_else(|| {
        eyre!(
            "unsupported language `{}`; built in: {}",
            args.language,
            KeywordSet::supported_codes().join(", "),
        )
    })?;
    let lexer = Lexer::new(keywords);
    let grammar = feature_grammar();
    let policy = if args.strict {
        ErrorPolicy::Strict
    } else {
        ErrorPolicy::Recovering
    };

    let mut reports = Vec::new();
    for path in &args.paths {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let mut sink = Diagnostics::default();
        let outcome = Parser::new(grammar, &mut sink, policy).run(lexer.scan(&source));
        let mut errors: Vec<ErrorReport> = sink
            .errors()
            .iter()
            .map(ErrorReport::from_parse_error)
            .collect();
        match outcome {
            Ok(()) => {}
            Err(ParseFailure::Syntax(error)) => {
                errors.push(ErrorReport::from_parse_error(&error));
            }
            Err(failure @ ParseFailure::SourceExhausted { .. }) => {
                let message = failure.to_string();
                if let ParseFailure::SourceExhausted { line, expected } = failure {
                    errors.push(ErrorReport::from_exhaustion(line, &expected, message));
                }
            }
            Err(ParseFailure::Aborted(abort)) => {
                // The diagnostics listener never aborts; treat this as a bug.
                return Err(eyre::Report::new(abort))
                    .wrap_err_with(|| format!("unexpected abort while checking {}", path.display()));
            }
        }
        log::debug!(
            "{}: {} violation(s) under the {:?} policy",
            path.display(),
            errors.len(),
            policy,
        );
        reports.push(FileReport::new(path.display().to_string(), errors));
    }

    write_reports(&reports, args.json)?;

    let total: usize = reports.iter().map(FileReport::error_count).sum();
    if total > 0 {
        let files = reports.iter().filter(|report| report.has_errors()).count();
        bail!("{total} parse error(s) in {files} file(s)");
    }
    Ok(())
}

fn write_reports(reports: &[FileReport], json: bool) -> Result<()> {
    let mut stdout = io::stdout();
    if json {
        serde_json::to_writer(&mut stdout, reports)
            .wrap_err("failed to serialise the report to JSON")?;
        stdout
            .write_all(b"\n")
            .wrap_err("failed to terminate JSON output with newline")?;
    } else {
        for report in reports {
            for line in report.render_lines() {
                writeln!(stdout, "{line}").wrap_err("failed to write report line")?;
            }
        }
    }
    stdout.flush().wrap_err("failed to flush the report")
}
