// Suite settings read from a TOML file

use crate::reporter::TestReporter;
use serde::Deserialize;
use std::fmt::Display;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub suite_name: String,

    pub expected_count: usize,

    // print actual and expected values of failed tests
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub color: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse suite config")?;
                if let Some(path) = path {
                    write!(f, " {}", path.display())?;
                }
                write!(f, ": {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl ReporterConfig {
    pub fn new(suite_name: impl Into<String>, expected_count: usize) -> Self {
        Self {
            suite_name: suite_name.into(),
            expected_count,
            debug: false,
            color: false,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse { path: None, source })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&s).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    pub fn reporter(&self) -> TestReporter<Stdout> {
        self.reporter_with_writer(std::io::stdout())
    }

    pub fn reporter_with_writer<W: Write>(&self, out: W) -> TestReporter<W> {
        TestReporter::with_writer(self.suite_name.clone(), self.expected_count, out)
            .with_debug(self.debug)
            .with_color(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_off() {
        let config = ReporterConfig::from_toml_str(
            r#"
            suite_name = "parser"
            expected_count = 12
            "#,
        )
        .unwrap();

        assert_eq!(config, ReporterConfig::new("parser", 12));
    }

    #[test]
    fn builds_a_configured_reporter() {
        let config = ReporterConfig::from_toml_str(
            r#"
            suite_name = "lexer"
            expected_count = 3
            debug = true
            "#,
        )
        .unwrap();

        let reporter = config.reporter_with_writer(Vec::new());
        assert_eq!(reporter.suite_name(), "lexer");
        assert_eq!(reporter.expected_count(), 3);
        assert!(reporter.debug());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let error = ReporterConfig::from_toml_str(
            r#"
            suite_name = "lexer"
            expected_count = -1
            "#,
        )
        .unwrap_err();

        assert!(matches!(error, ConfigError::Parse { path: None, .. }));
        assert!(error.to_string().starts_with("failed to parse suite config: "));
    }

    #[test]
    fn missing_file_names_the_path() {
        let file_name = format!("suite-reporter-{}-missing.toml", std::process::id());
        let path = std::env::temp_dir().join(&file_name);
        let error = ReporterConfig::load(&path).unwrap_err();

        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains(&file_name));
    }
}
