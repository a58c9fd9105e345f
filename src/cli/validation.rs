//! CLI argument validation functions
//!
//! Custom value parsers for arguments clap cannot validate on its own.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::settings::parse_interval;

/// Largest number of entries `preview` renders
pub const MAX_PREVIEW_LIMIT: usize = 50;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate a polling interval such as "15m" or "3600"
pub fn validate_interval(interval_str: &str) -> Result<Duration, String> {
    let interval = parse_interval(interval_str).map_err(|e| e.to_string())?;

    if interval.is_zero() {
        return Err("Interval must be greater than zero".to_string());
    }

    Ok(interval)
}

/// Validate the preview entry count
pub fn validate_limit(limit_str: &str) -> Result<usize, String> {
    let limit: usize = limit_str
        .parse()
        .map_err(|_| format!("Limit must be a positive number, got: '{}'", limit_str))?;

    if limit == 0 {
        return Err("Limit must be greater than 0".to_string());
    }

    if limit > MAX_PREVIEW_LIMIT {
        return Err(format!("Limit cannot exceed {}", MAX_PREVIEW_LIMIT));
    }

    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_file_path_validation_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "refresh_frequency = \"1h\"").unwrap();

        let path_str = temp_file.path().to_str().unwrap();
        assert!(validate_config_file_path(path_str).is_ok());
    }

    #[test]
    fn test_config_file_path_validation_nonexistent_file() {
        let result = validate_config_file_path("/nonexistent/path/bot.toml");
        assert!(result.unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_config_file_path_validation_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_config_file_path(temp_dir.path().to_str().unwrap());
        assert!(result.unwrap_err().contains("not a file"));
    }

    #[test]
    fn test_interval_validation() {
        assert_eq!(validate_interval("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(validate_interval("90").unwrap(), Duration::from_secs(90));
        assert_eq!(validate_interval("PT2M").unwrap(), Duration::from_secs(120));

        for invalid in ["0", "0s", "-5m", "soon", ""] {
            assert!(validate_interval(invalid).is_err(), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_limit_validation() {
        assert_eq!(validate_limit("1").unwrap(), 1);
        assert_eq!(validate_limit("50").unwrap(), 50);

        for invalid in ["0", "51", "-1", "many", ""] {
            assert!(validate_limit(invalid).is_err(), "{} should be invalid", invalid);
        }
    }
}
