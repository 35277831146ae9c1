use crate::core::{
    ConfigProvider, Extracted, FileAction, FileChange, FileOutcome, Pipeline, SourceText, Storage,
    SweepReport, TransformResult,
};
use crate::utils::error::Result;

/// 預設要移除的分隔線 (40 個 '=')
pub const SEPARATOR_LINE: &str = "// ========================================";

pub const DEFAULT_SEPARATOR_FILES: &[&str] = &[
    "script.js",
    "boot.js",
    "portfolio.js",
    "settings.js",
    "mediaplayer.js",
    "paint.js",
    "minesweeper.js",
    "solitaire.js",
];

/// 刪除修剪後與分隔線完全相同的行，回傳保留的內容與刪除行數。
///
/// 以 '\n' 切割再重組：檔尾換行會產生一個空的尾元素，重組時原樣保留，
/// 所以原本以換行結尾的檔案處理後仍以換行結尾。
pub fn strip_separator_lines(content: &str, separator: &str) -> (String, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let total = lines.len();

    let retained: Vec<&str> = lines
        .into_iter()
        .filter(|line| line.trim() != separator)
        .collect();

    let removed = total - retained.len();
    (retained.join("\n"), removed)
}

pub struct SeparatorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    separator: String,
}

impl<S: Storage, C: ConfigProvider> SeparatorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_separator(storage, config, SEPARATOR_LINE.to_string())
    }

    pub fn with_separator(storage: S, config: C, separator: String) -> Self {
        Self {
            storage,
            config,
            separator,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SeparatorPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Extracted>> {
        let mut extracted = Vec::new();

        for path in self.config.files() {
            if !self.storage.exists(path).await {
                tracing::warn!("Source file not found, skipping: {}", path);
                extracted.push(Extracted::Missing(path.clone()));
                continue;
            }

            let data = self.storage.read_file(path).await?;
            tracing::debug!("Read {} bytes from {}", data.len(), path);

            let content = String::from_utf8(data)?;
            extracted.push(Extracted::Found(SourceText {
                path: path.clone(),
                content,
            }));
        }

        Ok(extracted)
    }

    async fn transform(&self, files: Vec<Extracted>) -> Result<TransformResult> {
        let mut actions = Vec::new();

        for entry in files {
            match entry {
                Extracted::Found(source) => {
                    let (content, hits) = strip_separator_lines(&source.content, &self.separator);
                    tracing::debug!("{}: {} separator line(s) removed", source.path, hits);
                    actions.push(FileAction::Write(FileChange {
                        path: source.path,
                        content,
                        hits,
                    }));
                }
                Extracted::Missing(path) => actions.push(FileAction::Skip { path }),
            }
        }

        Ok(TransformResult { actions })
    }

    async fn load(&self, result: TransformResult) -> Result<SweepReport> {
        let mut report = SweepReport::default();

        for action in result.actions {
            match action {
                FileAction::Write(change) => {
                    if self.config.dry_run() {
                        println!(
                            "🔍 [dry-run] Would rewrite {} ({} separator line(s))",
                            change.path, change.hits
                        );
                    } else {
                        self.storage
                            .write_file(&change.path, change.content.as_bytes())
                            .await?;
                        println!("✓ Processed {}", change.path);
                    }
                    report.outcomes.push(FileOutcome::Processed {
                        path: change.path,
                        hits: change.hits,
                    });
                }
                FileAction::Skip { path } => {
                    println!("⚠ Skipped (not found): {}", path);
                    report.outcomes.push(FileOutcome::SkippedMissing { path });
                }
            }
        }

        Ok(report)
    }
}
