use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub enum Extracted {
    Found(SourceText),
    Missing(String),
}

#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: String,
    pub content: String,
    pub hits: usize,
}

#[derive(Debug, Clone)]
pub enum FileAction {
    Write(FileChange),
    Skip { path: String },
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub actions: Vec<FileAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed { path: String, hits: usize },
    SkippedMissing { path: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepReport {
    pub outcomes: Vec<FileOutcome>,
}

impl SweepReport {
    pub fn processed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Processed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::SkippedMissing { .. }))
            .count()
    }

    pub fn total_hits(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Processed { hits, .. } => *hits,
                FileOutcome::SkippedMissing { .. } => 0,
            })
            .sum()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} file(s) processed, {} skipped, {} change(s)",
            self.processed_count(),
            self.skipped_count(),
            self.total_hits()
        )
    }
}
