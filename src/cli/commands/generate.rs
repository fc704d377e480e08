use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::super::args::GenerateCommand;
use super::{
    CommandResult, CommandSummary, FileReport, FileStatus, GenerateSummary,
    helper::{OriginFile, discover_origin_files, filter_dialect, load_merged_config, process_file},
};
use crate::emit::EmitOptions;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = load_merged_config(&args.common)?;
    let files = discover_origin_files(&config, args.common.verbose)?;
    let files = filter_dialect(files, args.dialect.as_deref())?;

    let options = EmitOptions {
        transpile_import: config.transpile_import.clone(),
    };

    // Each file is independent; render in parallel, then write
    // sequentially in discovery order so output and I/O stay
    // deterministic. A failed file becomes a report entry, never an
    // abort.
    let rendered: Vec<FileReport> = files
        .par_iter()
        .map(|file| render_one(file, &config, &options))
        .collect();

    let mut reports = Vec::with_capacity(rendered.len());
    let mut failed_count = 0;
    for (file, mut report) in files.iter().zip(rendered) {
        if let FileStatus::Written { content, .. } = &mut report.status
            && !args.dry_run
            && let Some(content) = content.take()
            && let Err(err) = write_output(&config.out_root, &file.out_name, &content)
        {
            report.status = FileStatus::Failed(format!("{:#}", err));
        }
        if matches!(report.status, FileStatus::Failed(_)) {
            failed_count += 1;
        }
        reports.push(report);
    }

    Ok(CommandResult::new(
        CommandSummary::Generate(GenerateSummary {
            files: reports,
            dry_run: args.dry_run,
        }),
        failed_count,
    ))
}

fn render_one(
    file: &OriginFile,
    config: &crate::config::Config,
    options: &EmitOptions,
) -> FileReport {
    if config.is_protected(&file.out_name) {
        return FileReport {
            dialect: file.dialect.clone(),
            out_name: file.out_name.clone(),
            status: FileStatus::Protected,
        };
    }

    match process_file(file, options) {
        Ok(processed) => FileReport {
            dialect: processed.dialect,
            out_name: file.out_name.clone(),
            status: FileStatus::Written {
                active: processed.active,
                todo: processed.todo,
                // Kept for dry-run printing, or for the sequential write
                // pass.
                content: Some(processed.content),
            },
        },
        Err(err) => FileReport {
            dialect: file.dialect.clone(),
            out_name: file.out_name.clone(),
            status: FileStatus::Failed(format!("{:#}", err)),
        },
    }
}

fn write_output(out_root: &str, out_name: &str, content: &str) -> Result<()> {
    let out_dir = Path::new(out_root);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    let out_path = out_dir.join(out_name);
    fs::write(&out_path, content)
        .with_context(|| format!("Failed to write {}", out_path.display()))
}
