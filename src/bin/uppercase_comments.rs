use clap::Parser;
use comment_sweep::config::toml_config::TomlConfig;
use comment_sweep::core::uppercase::DEFAULT_UPPERCASE_FILES;
use comment_sweep::utils::{logger, validation::Validate};
use comment_sweep::{
    CommentPolicy, LocalStorage, SweepConfig, SweepEngine, UppercasePipeline,
};

#[derive(Parser)]
#[command(name = "uppercase-comments")]
#[command(about = "Uppercases the text of single-line comments in source files")]
struct Args {
    /// Root directory the file list is resolved against
    #[arg(long)]
    root: Option<String>,

    /// Comma-separated list of files to process (defaults to the built-in list)
    #[arg(long, value_delimiter = ',')]
    files: Vec<String>,

    /// Path to optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Comment detection policy: naive or quote-aware
    #[arg(long)]
    policy: Option<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs in JSON format
    #[arg(long)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting uppercase-comments");

    // 載入 TOML 配置（若有指定）
    let toml_config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    if let Some(config) = &toml_config {
        if let Err(e) = config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    // 註解判定策略優先序：--policy > TOML > 預設 (quote-aware)
    let policy = match &args.policy {
        Some(value) => match CommentPolicy::parse(value) {
            Some(policy) => policy,
            None => {
                eprintln!("❌ Unknown policy '{}'. Valid policies: naive, quote-aware", value);
                std::process::exit(1);
            }
        },
        None => toml_config
            .as_ref()
            .and_then(|c| c.uppercase_policy())
            .unwrap_or_default(),
    };

    // 檔案清單優先序：--files > TOML > 內建預設
    let files: Vec<String> = if !args.files.is_empty() {
        args.files.clone()
    } else if let Some(list) = toml_config.as_ref().and_then(|c| c.uppercase_files()) {
        list.to_vec()
    } else {
        DEFAULT_UPPERCASE_FILES.iter().map(|s| s.to_string()).collect()
    };

    let root = args
        .root
        .clone()
        .or_else(|| toml_config.as_ref().and_then(|c| c.root().map(String::from)))
        .unwrap_or_else(|| ".".to_string());

    let config = SweepConfig::new(root, files, args.dry_run);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be rewritten");
    }
    tracing::info!("Comment policy: {}", policy.as_str());

    // 創建存儲和管道
    let storage = LocalStorage::new(config.root_path.clone());
    let pipeline = UppercasePipeline::with_policy(storage, config, policy);

    // 創建引擎並運行
    let engine = SweepEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            tracing::info!("✅ Sweep completed: {}", report.summary());
            println!("\n✅ Done! All comments converted to uppercase.");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Sweep failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                comment_sweep::utils::error::ErrorSeverity::Low => 0,
                comment_sweep::utils::error::ErrorSeverity::Medium => 2,
                comment_sweep::utils::error::ErrorSeverity::High => 1,
                comment_sweep::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
