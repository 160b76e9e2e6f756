// Run configuration for a single wordsplit invocation
// Defaults match the behaviour of running with no arguments

use std::path::PathBuf;

/// Default input path when none is given.
pub const DEFAULT_INPUT: &str = "example.txt";

/// Where token lines are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    /// Opened in append mode, created if missing.
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: OutputTarget,

    /// Echo the input and check every token for empty/whitespace content
    pub test_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: OutputTarget::Stdout,
            test_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("example.txt"));
        assert_eq!(config.output, OutputTarget::Stdout);
        assert!(!config.test_mode);
    }

    #[test]
    fn test_output_target_from_optional_path() {
        assert_eq!(OutputTarget::from(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from(Some(PathBuf::from("out.txt"))),
            OutputTarget::File(PathBuf::from("out.txt"))
        );
    }
}
