use anyhow::{Context, Result};
use serde::Deserialize;

use std::path::Path;

////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_LOG_LEVEL: usize = 2;

/// Defaults read from a TOML file. Command-line flags take precedence.
#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_level: Option<usize>,
    pub trials: Option<usize>,
}

pub fn read_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let buffer =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;

    toml::from_str(&buffer).with_context(|| format!("failed to parse config {path:?}"))
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn reads_all_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42\nlog_level = 3\ntrials = 500").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(
            config,
            Config {
                seed: Some(42),
                log_level: Some(3),
                trials: Some(500),
            }
        );
    }

    #[test]
    fn missing_keys_stay_unset() {
        let config: Config = toml::from_str("seed = 7").unwrap();
        assert_eq!(
            config,
            Config {
                seed: Some(7),
                ..Config::default()
            }
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("size = 10").is_err());
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
