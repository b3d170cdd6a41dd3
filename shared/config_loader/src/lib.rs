//! # Config Loader
//!
//! Finds, reads and splits `key=value` configuration files. Interpreting the
//! values is left to the caller.
//!
//! ```no_run
//! use config_loader::{find_and_load, parse_entries};
//!
//! let content = find_and_load("snapsort.conf")?;
//! for entry in parse_entries(&content)? {
//!     println!("{} = {}", entry.key, entry.value);
//! }
//! # Ok::<(), config_loader::ConfigError>(())
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "SNAPSORT_CONFIG";

/// One `key=value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    /// 1-based line number in the source text
    pub line: usize,
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    /// Parses the value with [`FromStr`], mapping failures to
    /// [`ConfigError::InvalidValue`].
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.value
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(&self.key, &self.value, e.to_string()))
    }

    /// Parses `true/false`, `yes/no`, `on/off` and `1/0`.
    pub fn parse_bool(&self) -> Result<bool> {
        match self.value.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(ConfigError::invalid(
                &self.key,
                &self.value,
                "expected true or false",
            )),
        }
    }
}

/// Reads the whole file at `path`.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Looks for `filename` in, in order:
/// 1. the path in `SNAPSORT_CONFIG`
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_VAR) {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    let candidates = [
        PathBuf::from("./config").join(filename),
        PathBuf::from("./").join(filename),
    ];

    candidates
        .into_iter()
        .find(|candidate| candidate.exists())
        .ok_or_else(|| {
            ConfigError::FileNotFound(format!(
                "'{}' not found. Searched: ${}, ./config/{}, ./{}",
                filename, CONFIG_PATH_VAR, filename, filename
            ))
        })
}

/// [`find_config_file`] followed by [`load_config_file`].
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_config_file(path)
}

/// Splits config text into entries.
///
/// Blank lines and lines starting with `#` are skipped; keys and values are
/// trimmed. Everything after the first `=` belongs to the value.
pub fn parse_entries(content: &str) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };

        entries.push(ConfigEntry {
            line: index + 1,
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config_file("/path/that/does/not/exist.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_find_nonexistent_file() {
        let result = find_config_file("file_that_definitely_does_not_exist_12345.conf");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "log_level=debug\n").unwrap();

        assert_eq!(load_config_file(&path).unwrap(), "log_level=debug\n");
    }

    #[test]
    fn test_parse_entries_skips_comments_and_blanks() {
        let content = "\
            # camera\n\
            \n\
            camera_device = 2\n\
            log_path=/tmp/a=b.log\n";

        let entries = parse_entries(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "camera_device");
        assert_eq!(entries[0].value, "2");
        assert_eq!(entries[0].line, 3);
        assert_eq!(entries[1].value, "/tmp/a=b.log");
    }

    #[test]
    fn test_parse_entries_rejects_line_without_equals() {
        let err = parse_entries("camera_device 2").unwrap_err();
        assert_eq!(
            err,
            ConfigError::MalformedLine {
                line: 1,
                content: "camera_device 2".to_string()
            }
        );
    }

    #[test]
    fn test_entry_parse_number() {
        let entry = ConfigEntry {
            line: 1,
            key: "capture_max_frames".to_string(),
            value: "25".to_string(),
        };
        assert_eq!(entry.parse::<usize>().unwrap(), 25);

        let bad = ConfigEntry {
            value: "many".to_string(),
            ..entry
        };
        assert!(matches!(
            bad.parse::<usize>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_entry_parse_bool() {
        let entry = |value: &str| ConfigEntry {
            line: 1,
            key: "log_console".to_string(),
            value: value.to_string(),
        };
        assert!(entry("yes").parse_bool().unwrap());
        assert!(!entry("OFF").parse_bool().unwrap());
        assert!(entry("maybe").parse_bool().is_err());
    }
}
