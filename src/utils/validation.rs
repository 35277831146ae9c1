use crate::utils::error::{Result, SweepError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SweepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_list(field_name: &str, files: &[String]) -> Result<()> {
    if files.is_empty() {
        return Err(SweepError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for file in files {
        validate_path(field_name, file)?;
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(SweepError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(SweepError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("root_path", ".").is_ok());
        assert!(validate_path("root_path", "./src").is_ok());
        assert!(validate_path("root_path", "").is_err());
        assert!(validate_path("root_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("separator.pattern", "// ====").is_ok());
        assert!(validate_non_empty_string("separator.pattern", "   ").is_err());
    }

    #[test]
    fn test_validate_file_list() {
        let files = vec!["script.js".to_string(), "boot.js".to_string()];
        assert!(validate_file_list("files", &files).is_ok());
        assert!(validate_file_list("files", &[]).is_err());

        let bad = vec!["".to_string()];
        assert!(validate_file_list("files", &bad).is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["script.js".to_string(), "widget.mjs".to_string()];
        assert!(validate_file_extensions("files", &files, &["js", "mjs"]).is_ok());

        let invalid_files = vec!["data.csv".to_string()];
        assert!(validate_file_extensions("files", &invalid_files, &["js", "mjs"]).is_err());

        let no_extension = vec!["Makefile".to_string()];
        assert!(validate_file_extensions("files", &no_extension, &["js"]).is_err());
    }
}
