//! File sink for the logger

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;

/// Open the configured log file, creating parent directories as needed.
///
/// The handle is wrapped in a `Mutex` so it can be used directly as a
/// `MakeWriter` by `tracing-subscriber`.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)?;

    Ok(Mutex::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::config::LogFormat;
    use std::io::Write;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir, append: bool) -> FileConfig {
        FileConfig::new(true, dir.path().join("nested/dir/bot.log"), append, LogFormat::Full)
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        open_log_file(&config).unwrap();
        assert!(config.path.exists());
    }

    #[test]
    fn test_append_keeps_previous_lines() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        writeln!(open_log_file(&config).unwrap().lock().unwrap(), "first").unwrap();
        writeln!(open_log_file(&config).unwrap().lock().unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&config.path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_truncate_discards_previous_lines() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, false);

        writeln!(open_log_file(&config).unwrap().lock().unwrap(), "first").unwrap();
        writeln!(open_log_file(&config).unwrap().lock().unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&config.path).unwrap();
        assert_eq!(contents, "second\n");
    }
}
