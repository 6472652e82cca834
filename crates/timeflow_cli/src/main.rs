//! CLI entry point for the scheduling command interpreter.
//!
//! # Responsibility
//! - Interpret one command from the shell and print the resulting draft.
//! - Keep output deterministic when `--now` is given, for scripting and checks.

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use timeflow_core::{
    default_log_level, init_logging, interpret, logging_status, ParsedDraft,
    NOT_UNDERSTOOD_MESSAGE,
};

const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const EXIT_LOGGING_FAILED: u8 = 1;
const EXIT_NOT_UNDERSTOOD: u8 = 3;
const EXIT_RENDER_FAILED: u8 = 4;

/// Turn a free-text scheduling command into a draft entry
#[derive(Parser, Debug)]
#[command(name = "timeflow", version)]
struct Cli {
    /// Command text, e.g. Meeting tomorrow at 3pm
    #[arg(required = true)]
    text: Vec<String>,

    /// Reference instant as local wall-clock YYYY-MM-DDTHH:MM:SS (default: now)
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Output in JSON format for scripting
    #[arg(long)]
    json: bool,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, env = "TIMEFLOW_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "TIMEFLOW_LOG_LEVEL")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_LOGGING_FAILED);
        }
    }
    if let Some((level, _)) = logging_status() {
        info!("event=cli_start module=cli status=ok level={level} json={}", cli.json);
    }

    let input = cli.text.join(" ");
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());

    match interpret(&input, now) {
        Some(draft) => match render(&draft, cli.json) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("event=cli_render module=cli status=error reason=serialize");
                eprintln!("error: failed to render draft: {err}");
                ExitCode::from(EXIT_RENDER_FAILED)
            }
        },
        None => {
            info!("event=cli_interpret module=cli status=no_match");
            eprintln!("{NOT_UNDERSTOOD_MESSAGE}");
            ExitCode::from(EXIT_NOT_UNDERSTOOD)
        }
    }
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value.trim(), NOW_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DDTHH:MM:SS: {err}"))
}

fn render(draft: &ParsedDraft, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(draft);
    }
    Ok(format!(
        "title: {}\ndate:  {}\ntime:  {}-{}\nnote:  {}",
        draft.title, draft.date, draft.start_time, draft.end_time, draft.note
    ))
}
