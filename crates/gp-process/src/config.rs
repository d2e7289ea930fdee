use serde::{Deserialize, Serialize};

/// Which program to launch and with which arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_program() -> String {
    "gnuplot".to_string()
}

// -d: start from default settings, skip the user's init files
fn default_args() -> Vec<String> {
    vec!["-d".to_string()]
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl ProcessConfig {
    /// A program with no arguments.
    pub fn program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_launches_gnuplot_with_default_settings() {
        let config = ProcessConfig::default();
        assert_eq!(config.program, "gnuplot");
        assert_eq!(config.args, ["-d"]);
    }

    #[test]
    fn bare_program_has_no_args() {
        let config = ProcessConfig::program("cat");
        assert_eq!(config.program, "cat");
        assert!(config.args.is_empty());
    }
}
