use crate::core::scanner::{find_comment_start, CommentPolicy};
use crate::core::{
    ConfigProvider, Extracted, FileAction, FileChange, FileOutcome, Pipeline, SourceText, Storage,
    SweepReport, TransformResult,
};
use crate::utils::error::Result;
use regex::Regex;

pub const DEFAULT_UPPERCASE_FILES: &[&str] = &[
    "script.js",
    "boot.js",
    "settings.js",
    "mediaplayer.js",
    "paint.js",
    "minesweeper.js",
    "solitaire.js",
];

/// 原始啟發式：每行第一個 "//" 之後的文字都當成註解
const NAIVE_COMMENT_PATTERN: &str = r"(?m)//(.+?)$";

/// 將單行註解文字轉成大寫，保留 "//" 標記與標記前的程式碼。
/// 回傳改寫後的內容與被改寫的註解數。
pub fn uppercase_comments(content: &str, policy: CommentPolicy) -> (String, usize) {
    match policy {
        CommentPolicy::Naive => uppercase_naive(content),
        CommentPolicy::QuoteAware => uppercase_quote_aware(content),
    }
}

fn uppercase_naive(content: &str) -> (String, usize) {
    let re = Regex::new(NAIVE_COMMENT_PATTERN).unwrap();

    let mut hits = 0usize;
    let result = re.replace_all(content, |caps: &regex::Captures| {
        hits += 1;
        format!("//{}", caps[1].to_uppercase())
    });

    (result.into_owned(), hits)
}

fn uppercase_quote_aware(content: &str) -> (String, usize) {
    let mut hits = 0usize;

    let rewritten: Vec<String> = content
        .split('\n')
        .map(|line| match find_comment_start(line) {
            Some(idx) => {
                let (code, comment) = line.split_at(idx + 2);
                if comment.is_empty() {
                    // 與啟發式一致："//" 後沒有文字就不算一次改寫
                    line.to_string()
                } else {
                    hits += 1;
                    format!("{}{}", code, comment.to_uppercase())
                }
            }
            None => line.to_string(),
        })
        .collect();

    (rewritten.join("\n"), hits)
}

pub struct UppercasePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    policy: CommentPolicy,
}

impl<S: Storage, C: ConfigProvider> UppercasePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_policy(storage, config, CommentPolicy::default())
    }

    pub fn with_policy(storage: S, config: C, policy: CommentPolicy) -> Self {
        Self {
            storage,
            config,
            policy,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for UppercasePipeline<S, C> {
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
                    let (content, hits) = uppercase_comments(&source.content, self.policy);
                    tracing::debug!("{}: {} comment(s) uppercased", source.path, hits);
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
                            "🔍 [dry-run] Would rewrite {} ({} comment(s))",
                            change.path, change.hits
                        );
                    } else {
                        self.storage
                            .write_file(&change.path, change.content.as_bytes())
                            .await?;
                        println!("✓ Converted comments to uppercase in {}", change.path);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SweepError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn exists(&self, path: &str) -> bool {
            let files = self.files.lock().await;
            files.contains_key(path)
        }

        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                SweepError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        root_path: String,
        files: Vec<String>,
        dry_run: bool,
    }

    impl MockConfig {
        fn new(files: Vec<&str>) -> Self {
            Self {
                root_path: ".".to_string(),
                files: files.into_iter().map(String::from).collect(),
                dry_run: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn root_path(&self) -> &str {
            &self.root_path
        }

        fn files(&self) -> &[String] {
            &self.files
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }
    }

    #[test]
    fn test_trailing_comment_uppercased() {
        let (output, hits) =
            uppercase_comments("let x = 1; // hello world", CommentPolicy::QuoteAware);
        assert_eq!(output, "let x = 1; // HELLO WORLD");
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_code_before_marker_untouched() {
        let (output, _) =
            uppercase_comments("const value = compute(); // result", CommentPolicy::QuoteAware);
        assert!(output.starts_with("const value = compute(); //"));
        assert!(output.ends_with("// RESULT"));
    }

    #[test]
    fn test_line_without_marker_unchanged() {
        let input = "const x = 1;\nconst y = 2;\n";
        let (output, hits) = uppercase_comments(input, CommentPolicy::QuoteAware);
        assert_eq!(output, input);
        assert_eq!(hits, 0);
    }

    #[test]
    fn test_full_line_comment() {
        let (output, hits) = uppercase_comments("// draggable windows", CommentPolicy::QuoteAware);
        assert_eq!(output, "// DRAGGABLE WINDOWS");
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_bare_marker_not_counted() {
        let (output, hits) = uppercase_comments("//", CommentPolicy::QuoteAware);
        assert_eq!(output, "//");
        assert_eq!(hits, 0);

        let (output, hits) = uppercase_comments("//", CommentPolicy::Naive);
        assert_eq!(output, "//");
        assert_eq!(hits, 0);
    }

    #[test]
    fn test_second_marker_swallowed_by_first() {
        let (output, _) = uppercase_comments("// one // two", CommentPolicy::QuoteAware);
        assert_eq!(output, "// ONE // TWO");

        let (output, _) = uppercase_comments("// one // two", CommentPolicy::Naive);
        assert_eq!(output, "// ONE // TWO");
    }

    #[test]
    fn test_idempotent() {
        let input = "function f() {} // already processed\nconst x = 1; // AND THIS\n";
        let (once, _) = uppercase_comments(input, CommentPolicy::QuoteAware);
        let (twice, _) = uppercase_comments(&once, CommentPolicy::QuoteAware);
        assert_eq!(once, twice);

        let (once, _) = uppercase_comments(input, CommentPolicy::Naive);
        let (twice, _) = uppercase_comments(&once, CommentPolicy::Naive);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multiline_content() {
        let input = "// first\nconst a = 1;\nconst b = 2; // second\n";
        let (output, hits) = uppercase_comments(input, CommentPolicy::QuoteAware);
        assert_eq!(output, "// FIRST\nconst a = 1;\nconst b = 2; // SECOND\n");
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_naive_policy_hits_marker_inside_string() {
        // 已知的誤判案例：啟發式會把字串內的 "//" 當成註解起點
        let input = "const y = \"//not a real comment\";";
        let (output, hits) = uppercase_comments(input, CommentPolicy::Naive);
        assert_eq!(output, "const y = \"//NOT A REAL COMMENT\";");
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_quote_aware_policy_skips_marker_inside_string() {
        let input = "const y = \"//not a real comment\";";
        let (output, hits) = uppercase_comments(input, CommentPolicy::QuoteAware);
        assert_eq!(output, input);
        assert_eq!(hits, 0);
    }

    #[test]
    fn test_quote_aware_comment_after_string() {
        let input = "const url = 'http://a'; // fetch target";
        let (output, hits) = uppercase_comments(input, CommentPolicy::QuoteAware);
        assert_eq!(output, "const url = 'http://a'; // FETCH TARGET");
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_non_ascii_comment_text() {
        let (output, _) = uppercase_comments("// café menü", CommentPolicy::QuoteAware);
        assert_eq!(output, "// CAFÉ MENÜ");
    }

    #[tokio::test]
    async fn test_extract_records_missing_file_as_skip() {
        let storage = MockStorage::new();
        storage.put_file("script.js", b"// hi\n").await;

        let config = MockConfig::new(vec!["boot.js", "script.js"]);
        let pipeline = UppercasePipeline::new(storage, config);

        let extracted = pipeline.extract().await.unwrap();

        assert_eq!(extracted.len(), 2);
        assert!(matches!(&extracted[0], Extracted::Missing(path) if path == "boot.js"));
        assert!(matches!(&extracted[1], Extracted::Found(source) if source.path == "script.js"));
    }

    #[tokio::test]
    async fn test_transform_counts_rewritten_comments() {
        let storage = MockStorage::new();
        let config = MockConfig::new(vec!["script.js"]);
        let pipeline = UppercasePipeline::new(storage, config);

        let extracted = vec![Extracted::Found(SourceText {
            path: "script.js".to_string(),
            content: "// one\nconst a = 1; // two\nconst b = 2;\n".to_string(),
        })];

        let result = pipeline.transform(extracted).await.unwrap();

        match &result.actions[0] {
            FileAction::Write(change) => {
                assert_eq!(change.content, "// ONE\nconst a = 1; // TWO\nconst b = 2;\n");
                assert_eq!(change.hits, 2);
            }
            other => panic!("Expected write action, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_writes_rewritten_content() {
        let storage = MockStorage::new();
        let config = MockConfig::new(vec!["script.js"]);
        let pipeline = UppercasePipeline::new(storage.clone(), config);

        let result = TransformResult {
            actions: vec![FileAction::Write(FileChange {
                path: "script.js".to_string(),
                content: "// DONE\n".to_string(),
                hits: 1,
            })],
        };

        let report = pipeline.load(result).await.unwrap();

        assert_eq!(report.processed_count(), 1);
        assert_eq!(storage.get_file("script.js").await.unwrap(), b"// DONE\n");
    }

    #[tokio::test]
    async fn test_load_dry_run_writes_nothing() {
        let storage = MockStorage::new();
        storage.put_file("script.js", b"// original\n").await;

        let mut config = MockConfig::new(vec!["script.js"]);
        config.dry_run = true;
        let pipeline = UppercasePipeline::new(storage.clone(), config);

        let result = TransformResult {
            actions: vec![FileAction::Write(FileChange {
                path: "script.js".to_string(),
                content: "// ORIGINAL\n".to_string(),
                hits: 1,
            })],
        };

        pipeline.load(result).await.unwrap();

        assert_eq!(
            storage.get_file("script.js").await.unwrap(),
            b"// original\n"
        );
    }
}
