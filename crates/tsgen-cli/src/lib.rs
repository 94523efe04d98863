mod config;
mod generate;

pub use config::*;
pub use generate::GenerateCommand;

use anyhow::Result;
use clap::Parser;

/// tsgen CLI library for building custom command-line tools
pub struct TsgenCli {
    config: Config,
}

impl TsgenCli {
    /// Create a new TsgenCli instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new TsgenCli instance with a custom configuration, used when
    /// no config file is given or found
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Generate(cmd) => cmd.run(&self.config),
        }
    }
}

impl Default for TsgenCli {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Parser, Debug)]
#[command(name = "tsgen")]
#[command(about = "tsgen - TypeScript declarations for a database schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate table types from a JSON document model
    Generate(GenerateCommand),
}
