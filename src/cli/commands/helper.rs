//! Shared driver plumbing: file discovery, config merging, and the
//! per-file pipeline run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use walkdir::WalkDir;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::extract_from_source;
use crate::emit::render::render_groups;
use crate::emit::{EmitOptions, build_groups, case_counts};

/// One discovered origin test file.
#[derive(Debug, Clone)]
pub struct OriginFile {
    /// Dialect name derived from the filename (`test_<dialect>.py`).
    pub dialect: String,
    pub path: PathBuf,
    /// Destination filename (`test_<dialect>.test.ts`).
    pub out_name: String,
}

/// The rendered result of running the pipeline on one origin file.
#[derive(Debug)]
pub struct ProcessedFile {
    /// Dialect used inside the file (class attribute or filename).
    pub dialect: String,
    pub methods: usize,
    pub calls: usize,
    pub active: usize,
    pub todo: usize,
    pub content: String,
}

/// Configuration merged with CLI overrides (CLI > file > defaults).
pub fn load_merged_config(common: &CommonArgs) -> Result<Config> {
    let mut config = load_config(common.config.as_deref())?;
    if let Some(root) = &common.origin_root {
        config.origin_root = root.display().to_string();
    }
    if let Some(root) = &common.out_root {
        config.out_root = root.display().to_string();
    }
    Ok(config)
}

/// Enumerate origin test files under the configured root, applying the
/// skip list, in sorted order for deterministic runs.
pub fn discover_origin_files(config: &Config, verbose: bool) -> Result<Vec<OriginFile>> {
    let root = Path::new(&config.origin_root);
    if !root.is_dir() {
        bail!("Origin test directory not found: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                }
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(dialect) = name
            .strip_prefix("test_")
            .and_then(|rest| rest.strip_suffix(".py"))
        else {
            continue;
        };
        if config.is_skipped(name) {
            continue;
        }
        files.push(OriginFile {
            dialect: dialect.to_string(),
            path: path.to_path_buf(),
            out_name: format!("test_{}.test.ts", dialect),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Restrict discovery to one dialect. An unknown name is a hard error,
/// reported immediately.
pub fn filter_dialect(files: Vec<OriginFile>, dialect: Option<&str>) -> Result<Vec<OriginFile>> {
    let Some(name) = dialect else {
        return Ok(files);
    };
    let filtered: Vec<OriginFile> = files.into_iter().filter(|f| f.dialect == name).collect();
    if filtered.is_empty() {
        bail!("dialect '{}' not found", name);
    }
    Ok(filtered)
}

/// Run extract -> classify -> emit for one origin file.
pub fn process_file(file: &OriginFile, options: &EmitOptions) -> Result<ProcessedFile> {
    let source = fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read {}", file.path.display()))?;
    let extraction = extract_from_source(&source, &file.path.to_string_lossy(), &file.dialect)?;
    let groups = build_groups(&extraction.dialect, &extraction.calls);
    let (active, todo) = case_counts(&groups);
    let content = render_groups(&extraction.dialect, &groups, options);
    Ok(ProcessedFile {
        dialect: extraction.dialect,
        methods: groups.len(),
        calls: extraction.calls.len(),
        active,
        todo,
        content,
    })
}
