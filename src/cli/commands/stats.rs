use anyhow::Result;
use rayon::prelude::*;

use super::super::args::StatsCommand;
use super::{
    CommandResult, CommandSummary, StatsRow, StatsSummary,
    helper::{discover_origin_files, filter_dialect, load_merged_config, process_file},
};
use crate::emit::EmitOptions;

/// Count portable vs needs-manual-port cases per dialect without writing
/// anything. The counts come from the same built case lists that
/// `generate` renders, so the two commands always agree.
pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = load_merged_config(&args.common)?;
    let files = discover_origin_files(&config, args.common.verbose)?;
    let files = filter_dialect(files, args.dialect.as_deref())?;

    let options = EmitOptions {
        transpile_import: config.transpile_import.clone(),
    };

    let mut rows = Vec::new();
    let mut failures = Vec::new();
    let results: Vec<_> = files
        .par_iter()
        // Protected destinations are excluded from the numbers too:
        // they are never regenerated, so counting them would overstate
        // what a generate run covers.
        .filter(|file| !config.is_protected(&file.out_name))
        .map(|file| (file.out_name.clone(), process_file(file, &options)))
        .collect();

    for (out_name, result) in results {
        match result {
            Ok(processed) => rows.push(StatsRow {
                dialect: processed.dialect,
                methods: processed.methods,
                calls: processed.calls,
                active: processed.active,
                todo: processed.todo,
            }),
            Err(err) => failures.push((out_name, format!("{:#}", err))),
        }
    }

    let failed_count = failures.len();
    Ok(CommandResult::new(
        CommandSummary::Stats(StatsSummary { rows, failures }),
        failed_count,
    ))
}
