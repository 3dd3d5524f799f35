//! `callboard` CLI — validate unavailability constraints and check slot
//! availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate constraint rows (stdin → diagnostics + summary)
//! echo 'm, w 2-4, f after 5pm' | callboard validate
//!
//! # Validate from a file, write a JSON error report
//! callboard validate -i availability.txt -o errors.json
//!
//! # Check who conflicts with a concrete slot and what time remains
//! callboard check --date 2/2/2026 --start '6:00 PM' --end '9:00 PM' -i members.txt
//! ```
//!
//! `validate` input is one free-text constraint cell per line. `check`
//! input is `member: constraint text` per line. Rows that fail to parse
//! are reported and skipped; the batch continues.

use anyhow::{Context, Result};
use availability_engine::{
    check_conflict, group_windows, member_windows, parse_slot_date, parse_time, MemberConstraints,
    RehearsalSlot, TimeInterval,
};
use callboard_core::{Constraint, ConstraintParser, MilitaryTime, ParseOptions};
use chrono::Timelike;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "callboard", version, about = "Rehearsal constraint validation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug tracing of the grammar transform
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate constraint rows and report per-token errors
    Validate {
        /// Input file, one constraint cell per line (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Write invalid tokens as a JSON report to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check member constraints against a concrete rehearsal slot
    Check {
        /// Slot date, M/D/YYYY or M/D/YY
        #[arg(long)]
        date: String,
        /// Slot start time, e.g. "6:00 PM" or "18:00"
        #[arg(long)]
        start: String,
        /// Slot end time, e.g. "9:00 PM" or "21:00"
        #[arg(long)]
        end: String,
        /// Input file, one "member: constraint text" line each
        /// (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// One invalid token in the JSON error report.
#[derive(Serialize)]
struct ErrorRecord {
    row: usize,
    token_num: usize,
    token: String,
    error: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(io::stderr)
            .init();
    }

    let parser = ConstraintParser::with_options(ParseOptions { trace: cli.verbose });

    match cli.command {
        Commands::Validate { input, output } => {
            let text = read_input(input.as_deref())?;
            let clean = run_validate(&parser, &text, output.as_deref())?;
            if !clean {
                process::exit(1);
            }
        }
        Commands::Check {
            date,
            start,
            end,
            input,
        } => {
            let slot = build_slot(&date, &start, &end)?;
            let text = read_input(input.as_deref())?;
            run_check(&parser, &text, &slot);
        }
    }

    Ok(())
}

/// Validate every comma token of every row. Returns true when no token
/// was invalid.
fn run_validate(parser: &ConstraintParser, text: &str, report_path: Option<&str>) -> Result<bool> {
    let mut total_rows = 0usize;
    let mut empty_rows = 0usize;
    let mut total_tokens = 0usize;
    let mut valid_tokens = 0usize;
    let mut errors: Vec<ErrorRecord> = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let row = line_idx + 1;
        total_rows += 1;
        let cell = line.trim();

        if cell.is_empty() {
            empty_rows += 1;
            continue;
        }

        // Comma splitting happens one level above the grammar: each token
        // is validated on its own, as the catalog generators do.
        for (token_idx, token) in cell.split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            total_tokens += 1;

            match validate(parser, token) {
                Ok(_) => valid_tokens += 1,
                Err(message) => {
                    eprintln!("row {row}, token {}: '{token}'", token_idx + 1);
                    for detail in message.lines() {
                        eprintln!("  {detail}");
                    }
                    errors.push(ErrorRecord {
                        row,
                        token_num: token_idx + 1,
                        token: token.to_string(),
                        error: message.replace('\n', " | "),
                    });
                }
            }
        }
    }

    let invalid_tokens = errors.len();
    let success_rate = if total_tokens == 0 {
        100.0
    } else {
        (valid_tokens as f64 / total_tokens as f64) * 100.0
    };

    println!("Rows:         {total_rows} ({empty_rows} empty)");
    println!("Tokens:       {total_tokens}");
    println!("Valid:        {valid_tokens}");
    println!("Invalid:      {invalid_tokens}");
    println!("Success rate: {success_rate:.1}%");

    if let Some(path) = report_path {
        let report = serde_json::to_string_pretty(&errors)?;
        std::fs::write(path, report).with_context(|| format!("Failed to write report: {path}"))?;
    }

    Ok(invalid_tokens == 0)
}

/// Report per-member conflicts and remaining windows, then the group window.
fn run_check(parser: &ConstraintParser, text: &str, slot: &RehearsalSlot) {
    println!(
        "Slot: {} ({}) {}",
        slot.date,
        slot.weekday,
        slot.interval()
    );

    let mut members: Vec<MemberConstraints> = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let row = line_idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((member_id, cell)) = line.split_once(':') else {
            eprintln!("row {row}: expected 'member: constraints', got '{line}'");
            continue;
        };
        let member_id = member_id.trim();

        let mut constraints: Vec<Constraint> = Vec::new();
        let mut conflicting: Vec<String> = Vec::new();

        for token in cell.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            // A bad token invalidates itself, not the member's whole row.
            match validate(parser, token) {
                Ok(parsed) => {
                    if parsed.iter().any(|c| check_conflict(c, slot)) {
                        conflicting.push(token.to_string());
                    }
                    constraints.extend(parsed);
                }
                Err(message) => {
                    eprintln!("row {row} ({member_id}): skipping '{token}'");
                    for detail in message.lines() {
                        eprintln!("  {detail}");
                    }
                }
            }
        }

        let windows = member_windows(&constraints, slot);
        println!(
            "{member_id}: conflicts [{}] available [{}]",
            conflicting.join("; "),
            format_windows(&windows)
        );

        members.push(MemberConstraints {
            member_id: member_id.to_string(),
            constraints,
        });
    }

    let group = group_windows(&members, slot);
    println!("group: [{}]", format_windows(&group));
}

/// Parse a token, rendering any failure as the facade's error string.
fn validate(parser: &ConstraintParser, token: &str) -> std::result::Result<Vec<Constraint>, String> {
    parser.parse(token).map_err(|e| e.render(token))
}

fn build_slot(date: &str, start: &str, end: &str) -> Result<RehearsalSlot> {
    let date = parse_slot_date(date).with_context(|| format!("Invalid --date: {date}"))?;
    let start = to_military(start).with_context(|| format!("Invalid --start: {start}"))?;
    let end = to_military(end).with_context(|| format!("Invalid --end: {end}"))?;
    let slot = RehearsalSlot::from_date(date, start, end)
        .context("Invalid slot: start must be before end")?;
    Ok(slot)
}

fn to_military(text: &str) -> Result<MilitaryTime> {
    let t = parse_time(text)?;
    let value = (t.hour() * 100 + t.minute()) as u16;
    Ok(MilitaryTime::new(value)?)
}

fn format_windows(windows: &[TimeInterval]) -> String {
    if windows.is_empty() {
        return "none".to_string();
    }
    windows
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
