//! Plot configuration, loadable from YAML or JSON.

use std::path::Path;

use gp_process::ProcessConfig;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::window::{Position, WindowSize};

/// Everything a plot needs before its first command is sent.
///
/// Missing fields take their defaults, so an empty document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub process: ProcessConfig,
    /// Terminal kind, e.g. `qt`, `wxt` or `x11`.
    pub terminal: String,
    pub font: String,
    pub font_size: u32,
    /// Maximum number of points sent per write by bulk appends.
    pub batch_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<WindowSize>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            process: ProcessConfig::default(),
            terminal: "qt".to_string(),
            font: "Sans".to_string(),
            font_size: 9,
            batch_size: 64,
            position: None,
            size: None,
        }
    }
}

impl PlotConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> PlotResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::load_yaml(path),
            Some("json") => Self::load_json(path),
            _ => Err(PlotError::Config {
                what: format!("unsupported config file {}", path.display()),
            }),
        }
    }

    pub fn load_yaml(path: &Path) -> PlotResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn load_json(path: &Path) -> PlotResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> PlotResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PlotResult<()> {
        let invalid = |what: &str| {
            Err(PlotError::Config {
                what: what.to_string(),
            })
        };
        if self.process.program.trim().is_empty() {
            return invalid("process.program must not be empty");
        }
        if self.terminal.trim().is_empty() {
            return invalid("terminal must not be empty");
        }
        // The terminal kind is sent unquoted.
        if self.terminal.contains(char::is_whitespace) {
            return invalid("terminal must be a single word");
        }
        if self.font_size == 0 {
            return invalid("font_size must be positive");
        }
        if self.batch_size == 0 {
            return invalid("batch_size must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = PlotConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PlotConfig::default());
        assert_eq!(config.process.program, "gnuplot");
        assert_eq!(config.terminal, "qt");
        assert_eq!(config.batch_size, 64);
    }

    #[test]
    fn partial_yaml_overrides() {
        let config = PlotConfig::from_yaml_str(
            "terminal: wxt\nfont_size: 12\nprocess:\n  program: /usr/bin/gnuplot\nsize:\n  width: 800\n  height: 600\n",
        )
        .unwrap();
        assert_eq!(config.terminal, "wxt");
        assert_eq!(config.font_size, 12);
        assert_eq!(config.process.program, "/usr/bin/gnuplot");
        assert_eq!(config.process.args, ["-d"]);
        assert_eq!(config.size, Some(WindowSize::from((800, 600))));
        assert_eq!(config.position, None);
    }

    #[test]
    fn zero_batch_is_rejected() {
        let err = PlotConfig::from_yaml_str("batch_size: 0").unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
    }

    #[test]
    fn terminal_with_line_break_is_rejected() {
        let err = PlotConfig::from_yaml_str("terminal: \"qt\\nsystem 'ls'\"").unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
    }

    #[test]
    fn empty_program_is_rejected() {
        let mut config = PlotConfig::default();
        config.process.program = " ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = PlotConfig::load(Path::new("plot.toml")).unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
    }
}
