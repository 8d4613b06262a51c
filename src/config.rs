use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    /// String written before each read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Line written once at startup; `null` suppresses it.
    #[serde(default = "default_greeting")]
    pub greeting: Option<String>,

    /// Bound of each engine channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            greeting: default_greeting(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_greeting() -> Option<String> {
    Some("Type 'h' for help".to_string())
}

fn default_channel_capacity() -> usize {
    32
}

pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ReplConfig> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.greeting.as_deref(), Some("Type 'h' for help"));
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ReplConfig = serde_json::from_str(r#"{"prompt": "$ "}"#).unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_null_greeting_suppresses_it() {
        let config: ReplConfig = serde_json::from_str(r#"{"greeting": null}"#).unwrap();
        assert_eq!(config.greeting, None);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"prompt": ">> ", "channel_capacity": 4}"#)
            .unwrap();

        let config = from_file(file.path()).unwrap();
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.channel_capacity, 4);
    }

    #[test]
    fn test_from_file_missing_path_is_config_error() {
        let result = from_file("/nonexistent/porthole.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
