pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "iss-flyover")]
#[command(about = "Show the next ISS passes over your current location")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// User-Agent header sent to the lookup services
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Only show the next N passes
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (or defaults), applies command-line overrides and
    /// validates the result.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut TomlConfig) {
        if let Some(timeout) = self.timeout_seconds {
            settings.http.timeout_seconds = timeout;
        }
        if let Some(agent) = &self.user_agent {
            settings.http.user_agent = agent.clone();
        }
        if let Some(limit) = self.limit {
            settings.output.limit = Some(limit);
        }
        if let Some(format) = self.format {
            settings.output.format = format;
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_cli_flags() {
        let cli = CliConfig::parse_from([
            "iss-flyover",
            "--timeout-seconds",
            "20",
            "-n",
            "5",
            "--format",
            "json",
            "--verbose",
        ]);

        assert_eq!(cli.timeout_seconds, Some(20));
        assert_eq!(cli.limit, Some(5));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(!cli.log_json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_defaults_without_file() {
        let cli = CliConfig::parse_from(["iss-flyover"]);
        let settings = cli.load_settings().unwrap();

        assert_eq!(settings.pass_limit(), None);
        assert_eq!(settings.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[http]\ntimeout_seconds = 30\n\n[output]\nlimit = 3\nformat = \"json\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["iss-flyover", "--config", &path, "--limit", "7"]);
        let settings = cli.load_settings().unwrap();

        assert_eq!(settings.timeout_seconds(), 30);
        assert_eq!(settings.pass_limit(), Some(7));
        assert_eq!(settings.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::parse_from(["iss-flyover", "--timeout-seconds", "0"]);
        assert!(cli.load_settings().is_err());
    }
}
