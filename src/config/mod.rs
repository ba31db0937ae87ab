mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem,
    USER_CONFIG_NAME,
};
pub use model::{Config, DEFAULT_EXAMPLES_DIR, OutputConfig, ScannerConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.scanner.examples_dir, DEFAULT_EXAMPLES_DIR);
    }

    #[test]
    fn config_parses_partial_tables() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.scanner, ScannerConfig::default());
        assert_eq!(config.output.format, crate::output::OutputFormat::Json);
    }
}
