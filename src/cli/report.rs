//! Report formatting and printing for command results.
//!
//! This module is separate from the pipeline logic so testport can be
//! used as a library without printing side effects.

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, FileStatus, GenerateSummary, InitSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary),
        CommandSummary::Stats(summary) => print_stats(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_generate(summary: &GenerateSummary) {
    let mut total_active = 0;
    let mut total_todo = 0;
    let mut failed = 0;

    for file in &summary.files {
        match &file.status {
            FileStatus::Protected => {
                println!("  {} {} (protected)", "SKIP".yellow(), file.out_name);
            }
            FileStatus::Failed(err) => {
                failed += 1;
                eprintln!("{} {}: {}", "error:".bold().red(), file.out_name, err);
            }
            FileStatus::Written {
                active,
                todo,
                content,
            } => {
                total_active += active;
                total_todo += todo;
                if let Some(content) = content {
                    println!("=== {} ===", file.out_name);
                    println!("{}", content);
                    println!();
                } else {
                    println!(
                        "  {} {:<40}  active={:4}  todo={:4}",
                        "WRITE".green(),
                        file.out_name,
                        active,
                        todo
                    );
                }
            }
        }
    }

    let verb = if summary.dry_run {
        "Rendered"
    } else {
        "Generated"
    };
    if failed == 0 {
        println!(
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} {} active and {} todo cases (combined {})",
                verb,
                total_active,
                total_todo,
                total_active + total_todo
            )
            .green()
        );
    } else {
        println!(
            "\n{} {} active={} todo={}, {} {} failed",
            FAILURE_MARK.red(),
            verb,
            total_active,
            total_todo,
            failed,
            if failed == 1 { "file" } else { "files" },
        );
    }
}

fn print_stats(summary: &StatsSummary) {
    let mut total_active = 0;
    let mut total_todo = 0;

    for row in &summary.rows {
        total_active += row.active;
        total_todo += row.todo;
        println!(
            "  {:<20}  methods={:3}  calls={:4}  active={:4}  todo={:4}",
            row.dialect, row.methods, row.calls, row.active, row.todo
        );
    }

    for (out_name, err) in &summary.failures {
        eprintln!("{} {}: {}", "error:".bold().red(), out_name, err);
    }

    println!(
        "\nTotal: active={}  todo={}  combined={}",
        total_active,
        total_todo,
        total_active + total_todo
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
