/// Outcome of processing one origin test file.
#[derive(Debug)]
pub enum FileStatus {
    /// A destination file was rendered. `content` is kept only in
    /// dry-run mode, for printing instead of writing.
    Written {
        active: usize,
        todo: usize,
        content: Option<String>,
    },
    /// The destination filename is protected; nothing was touched.
    Protected,
    /// The origin file could not be read or parsed.
    Failed(String),
}

#[derive(Debug)]
pub struct FileReport {
    pub dialect: String,
    pub out_name: String,
    pub status: FileStatus,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub files: Vec<FileReport>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct StatsRow {
    pub dialect: String,
    pub methods: usize,
    pub calls: usize,
    pub active: usize,
    pub todo: usize,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<StatsRow>,
    /// Origin files that could not be processed, with their errors.
    pub failures: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Stats(StatsSummary),
    Init(InitSummary),
}

/// Result of running testport commands.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of origin files that could not be processed.
    /// Per-file failures never abort the run; they are summarized here.
    pub failed_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, failed_count: usize) -> Self {
        Self {
            summary,
            failed_count,
        }
    }
}
