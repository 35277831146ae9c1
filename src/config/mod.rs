pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// 兩支工具共用的副檔名白名單（以 "//" 為單行註解的原始檔）
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub root_path: String,
    pub files: Vec<String>,
    pub dry_run: bool,
}

impl SweepConfig {
    pub fn new(root_path: String, files: Vec<String>, dry_run: bool) -> Self {
        Self {
            root_path,
            files,
            dry_run,
        }
    }
}

impl ConfigProvider for SweepConfig {
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

impl Validate for SweepConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root_path", &self.root_path)?;
        validation::validate_file_list("files", &self.files)?;
        validation::validate_file_extensions("files", &self.files, SOURCE_EXTENSIONS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SweepConfig::new(
            ".".to_string(),
            vec!["script.js".to_string(), "boot.js".to_string()],
            false,
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_list_rejected() {
        let config = SweepConfig::new(".".to_string(), vec![], false);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let config = SweepConfig::new(".".to_string(), vec!["notes.txt".to_string()], false);
        assert!(config.validate().is_err());
    }
}
