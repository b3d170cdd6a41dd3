//! Application Configuration
//!
//! Maps `snapsort.conf` keys onto camera, detector, pipeline and logging
//! settings. A missing file means defaults; a bad value is an error.

use config_loader::{ConfigEntry, ConfigError, find_and_load, parse_entries};
use logging::{LogLevel, LogSettings};
use media::{CameraConfig, DetectorSettings};
use pipeline::PipelineConfig;
use std::path::PathBuf;
use std::time::Duration;

/// File looked up by [`AppConfig::load`].
pub const CONFIG_FILE_NAME: &str = "snapsort.conf";

/// Application configuration structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub camera: CameraConfig,
    pub detector: DetectorSettings,
    pub pipeline: PipelineConfig,
    pub log: LogSettings,
}

impl AppConfig {
    /// Loads `snapsort.conf` from the usual locations.
    ///
    /// Returns the config and the keys that were not recognized.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or holds an
    /// invalid value.
    pub fn load() -> Result<(Self, Vec<String>), ConfigError> {
        match find_and_load(CONFIG_FILE_NAME) {
            Ok(content) => Self::parse(&content),
            Err(ConfigError::FileNotFound(_)) => Ok((Self::default(), Vec::new())),
            Err(e) => Err(e),
        }
    }

    /// Parses config text over the defaults.
    ///
    /// Format:
    /// ```text
    /// camera_device=auto
    /// capture_max_frames=25
    /// log_level=debug
    /// ```
    pub fn parse(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = Self::default();
        let mut unknown = Vec::new();

        for entry in parse_entries(content)? {
            if !config.apply(&entry)? {
                unknown.push(entry.key);
            }
        }

        config
            .pipeline
            .validate()
            .map_err(|e| ConfigError::invalid("pipeline", "", e.to_string()))?;

        Ok((config, unknown))
    }

    /// Applies one entry. Returns `false` for unknown keys.
    fn apply(&mut self, entry: &ConfigEntry) -> Result<bool, ConfigError> {
        match entry.key.as_str() {
            "camera_device" => {
                self.camera.device_id = if entry.value.eq_ignore_ascii_case("auto") {
                    None
                } else {
                    Some(entry.parse()?)
                };
            }
            "camera_fps" => {
                let fps: f64 = entry.parse()?;
                if !fps.is_finite() || fps <= 0.0 {
                    return Err(invalid(entry, "expected a positive frame rate"));
                }
                self.camera.fps = fps;
            }
            "camera_width" => self.camera.width = Some(positive(entry)?),
            "camera_height" => self.camera.height = Some(positive(entry)?),
            "capture_max_frames" => self.pipeline.capture.max_frames = positive(entry)? as usize,
            "capture_time_limit_ms" => {
                self.pipeline.capture.time_limit = Duration::from_millis(positive(entry)?.into());
            }
            "capture_pull_interval_ms" => {
                self.pipeline.capture.pull_interval = Duration::from_millis(entry.parse()?);
            }
            "capture_seed" => {
                self.pipeline.seed = if entry.value.is_empty() {
                    None
                } else {
                    Some(entry.parse()?)
                };
            }
            "detection_interval_ms" => {
                self.pipeline.detection_interval = Duration::from_millis(positive(entry)?.into());
            }
            "history_limit" => self.pipeline.history_limit = entry.parse()?,
            "detector_model" => self.detector.model = PathBuf::from(&entry.value),
            "detector_config" => {
                self.detector.config = if entry.value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(&entry.value))
                };
            }
            "detector_min_score" => {
                let score: f32 = entry.parse()?;
                if !(0.0..=1.0).contains(&score) {
                    return Err(invalid(entry, "expected a value between 0 and 1"));
                }
                self.detector.min_score = score;
            }
            "detector_input_size" => self.detector.input_size = positive(entry)? as i32,
            "log_path" => self.log.path = PathBuf::from(&entry.value),
            "log_level" => {
                self.log.level = entry
                    .value
                    .parse::<LogLevel>()
                    .map_err(|e| invalid(entry, e.to_string()))?;
            }
            "log_console" => self.log.console = entry.parse_bool()?,
            "log_file" => self.log.file = entry.parse_bool()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn positive(entry: &ConfigEntry) -> Result<u32, ConfigError> {
    let value: u32 = entry.parse()?;
    if value == 0 {
        return Err(invalid(entry, "must be greater than 0"));
    }
    Ok(value)
}

fn invalid(entry: &ConfigEntry, reason: impl Into<String>) -> ConfigError {
    ConfigError::invalid(&entry.key, &entry.value, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_loader::load_config_file;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera.device_id, Some(0));
        assert_eq!(config.pipeline.capture.max_frames, 25);
        assert_eq!(config.pipeline.detection_interval, Duration::from_millis(100));
        assert_eq!(config.log.path, PathBuf::from("snapsort.log"));
    }

    #[test]
    fn test_parse_overrides() {
        let content = "\
            # Test config\n\
            camera_device=auto\n\
            camera_width=1280\n\
            camera_height=720\n\
            capture_max_frames=10\n\
            capture_time_limit_ms=4000\n\
            capture_seed=42\n\
            detection_interval_ms=250\n\
            detector_model=/models/ssd.pb\n\
            detector_config=\n\
            detector_min_score=0.6\n\
            log_level=debug\n\
            log_console=yes\n\
        ";

        let (config, unknown) = AppConfig::parse(content).unwrap();

        assert!(unknown.is_empty());
        assert_eq!(config.camera.device_id, None);
        assert_eq!(config.camera.resolution(), Some((1280, 720)));
        assert_eq!(config.pipeline.capture.max_frames, 10);
        assert_eq!(config.pipeline.capture.time_limit, Duration::from_secs(4));
        assert_eq!(config.pipeline.seed, Some(42));
        assert_eq!(config.pipeline.detection_interval, Duration::from_millis(250));
        assert_eq!(config.detector.model, PathBuf::from("/models/ssd.pb"));
        assert_eq!(config.detector.config, None);
        assert_eq!(config.detector.min_score, 0.6);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert!(config.log.console);
    }

    #[test]
    fn test_unknown_keys_reported() {
        let (config, unknown) = AppConfig::parse("server_address=1.2.3.4\nhistory_limit=9").unwrap();
        assert_eq!(unknown, vec!["server_address".to_string()]);
        assert_eq!(config.pipeline.history_limit, 9);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AppConfig::parse("capture_max_frames=lots"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(AppConfig::parse("capture_max_frames=0").is_err());
        assert!(AppConfig::parse("capture_max_frames=40").is_err());
        assert!(AppConfig::parse("capture_max_frames=25").is_ok());
        assert!(AppConfig::parse("detector_min_score=2").is_err());
        assert!(AppConfig::parse("log_level=chatty").is_err());
        assert!(AppConfig::parse("log_file=maybe").is_err());
        assert!(AppConfig::parse("camera_fps=-5").is_err());
        assert!(matches!(
            AppConfig::parse("no equals sign"),
            Err(ConfigError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "log_path=/tmp/snap.log\nlog_file=off\n").unwrap();

        let content = load_config_file(&path).unwrap();
        let (config, _) = AppConfig::parse(&content).unwrap();

        assert_eq!(config.log.path, PathBuf::from("/tmp/snap.log"));
        assert!(!config.log.file);
    }
}
