use std::path::PathBuf;

use quota_clipboard::CopyOutcome;

/// What a copy command produced, for outcome rendering.
#[derive(Debug)]
pub struct CopyResult {
    pub title: String,
    pub rows: usize,
    pub outcome: CopyOutcome,
}

/// What an export command wrote, and what it failed to write.
#[derive(Debug)]
pub struct ExportResult {
    pub written: Vec<PathBuf>,
    pub errors: Vec<String>,
}
