//! CLI command implementations

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::profile_source::ProfileSource;

pub mod generate_config;
pub mod info;
pub mod list;
pub mod punct;
pub mod split;
pub mod validate;

/// Sentence splitting and punctuation conventions for translated text
#[derive(Debug, Parser)]
#[command(name = "langprof", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    ///
    /// `RUST_LOG` still takes precedence over the verbosity flags.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into sentences
    Split(split::SplitArgs),

    /// Convert punctuation to a language's conventions
    Punct(punct::PunctArgs),

    /// Show the rules of a language profile
    Info(info::InfoArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Validate a language profile file
    Validate(validate::ValidateArgs),

    /// Generate a language profile template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Punct(args) => args.execute(),
            Commands::Info(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options selecting the language profile, shared by several commands
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// Locale code of a built-in profile (e.g. zh, zh_CN)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// External language profile (TOML)
    #[arg(short = 'c', long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,

    /// CLI configuration file with defaults
    #[arg(long, value_name = "FILE", env = "LANGPROF_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ProfileArgs {
    pub fn cli_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Resolve where the profile comes from; flags win over the config file
    pub fn source(&self, config: &CliConfig) -> ProfileSource {
        if let Some(path) = &self.language_config {
            return ProfileSource::External { path: path.clone() };
        }

        let code = self
            .language
            .clone()
            .unwrap_or_else(|| config.profile.default_language.clone());
        ProfileSource::BuiltIn(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::parse_from(["langprof", "split", "-i", "a.txt", "-l", "zh", "-v"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.input, vec!["a.txt".to_string()]);
                assert_eq!(args.profile.language.as_deref(), Some("zh"));
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_language_and_config_conflict() {
        let result = Cli::try_parse_from(["langprof", "info", "-l", "zh", "-c", "x.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_source_resolution() {
        let config = CliConfig::default();

        let args = ProfileArgs::default();
        assert_eq!(args.source(&config), ProfileSource::BuiltIn("zh".to_string()));

        let args = ProfileArgs {
            language: Some("common".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.source(&config),
            ProfileSource::BuiltIn("common".to_string())
        );

        let args = ProfileArgs {
            language_config: Some(PathBuf::from("custom.toml")),
            ..Default::default()
        };
        assert_eq!(
            args.source(&config),
            ProfileSource::External {
                path: PathBuf::from("custom.toml")
            }
        );
    }
}
