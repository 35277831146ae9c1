use crate::core::scanner::CommentPolicy;
use crate::utils::error::{Result, SweepError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sweep: SweepMeta,
    pub separator: Option<SeparatorSection>,
    pub uppercase: Option<UppercaseSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepMeta {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparatorSection {
    pub files: Vec<String>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UppercaseSection {
    pub files: Vec<String>,
    pub policy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub root: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SweepError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SweepError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROJECT_ROOT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得檔案清單解析的根目錄
    pub fn root(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.root.as_deref())
    }

    pub fn separator_files(&self) -> Option<&[String]> {
        self.separator.as_ref().map(|s| s.files.as_slice())
    }

    pub fn separator_pattern(&self) -> Option<&str> {
        self.separator.as_ref().and_then(|s| s.pattern.as_deref())
    }

    pub fn uppercase_files(&self) -> Option<&[String]> {
        self.uppercase.as_ref().map(|u| u.files.as_slice())
    }

    pub fn uppercase_policy(&self) -> Option<CommentPolicy> {
        self.uppercase
            .as_ref()
            .and_then(|u| u.policy.as_deref())
            .and_then(CommentPolicy::parse)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("sweep.name", &self.sweep.name)?;

        if let Some(separator) = &self.separator {
            validation::validate_file_list("separator.files", &separator.files)?;
            if let Some(pattern) = &separator.pattern {
                validation::validate_non_empty_string("separator.pattern", pattern)?;
            }
        }

        if let Some(uppercase) = &self.uppercase {
            validation::validate_file_list("uppercase.files", &uppercase.files)?;
            if let Some(policy) = &uppercase.policy {
                if CommentPolicy::parse(policy).is_none() {
                    return Err(SweepError::InvalidConfigValueError {
                        field: "uppercase.policy".to_string(),
                        value: policy.clone(),
                        reason: "Valid policies: naive, quote-aware".to_string(),
                    });
                }
            }
        }

        if let Some(output) = &self.output {
            if let Some(root) = &output.root {
                validation::validate_path("output.root", root)?;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
