use anyhow::Result;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tsgen_syntax::Serializer;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tsgen.toml";

/// Configuration for tsgen CLI operations, as read from `tsgen.toml`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Options passed to the generator
    pub generator: tsgen_core::Config,

    /// Where and how the generated file is written
    pub output: OutputConfig,
}

/// Output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// File to write; stdout when unset
    pub path: Option<PathBuf>,

    /// Spaces per indentation level
    pub indent: usize,

    /// Quote style for string literals
    pub quote: QuoteStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator configuration
    pub fn generator(mut self, generator: tsgen_core::Config) -> Self {
        self.generator = generator;
        self
    }

    /// Set the output configuration
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }
}

impl OutputConfig {
    /// Serializer matching these settings
    pub fn serializer(&self) -> Serializer {
        let serializer = Serializer::new().indent(self.indent);

        match self.quote {
            QuoteStyle::Double => serializer,
            QuoteStyle::Single => serializer.single_quotes(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            indent: 4,
            quote: QuoteStyle::Double,
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.generator.validate()?;
        Ok(config)
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Double => "double",
            Self::Single => "single",
        })
    }
}
