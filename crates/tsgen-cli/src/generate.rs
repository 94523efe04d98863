use crate::{Config, CONFIG_FILE_NAME};
use anyhow::Result;
use clap::Parser;
use console::style;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use tsgen_core::Datamodel;

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Path to the JSON document model
    #[arg(short, long)]
    schema: PathBuf,

    /// Config file to use instead of `tsgen.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File to write the declarations to; stdout when neither this nor the
    /// config file sets one
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Case convention for column and table names
    #[arg(long)]
    case: Option<String>,

    /// Database whose scalar mapping is used
    #[arg(long)]
    provider: Option<String>,

    /// Mark id columns as never writable
    #[arg(long)]
    read_only_ids: bool,

    /// Name of the generated database interface
    #[arg(long)]
    db_type_name: Option<String>,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let config = self.resolve_config(config)?;

        let src = fs::read_to_string(&self.schema)?;
        let datamodel = Datamodel::from_json(&src)?;
        debug!(
            "loaded {}: {} models, {} enums",
            self.schema.display(),
            datamodel.models.len(),
            datamodel.enums.len()
        );

        let module = tsgen_codegen::generate(&datamodel, &config.generator)?;
        let output = config.output.serializer().serialize(&module);

        let Some(path) = &config.output.path else {
            print!("{output}");
            return Ok(());
        };

        println!();
        println!("  {}", style("Generate Types").cyan().bold().underlined());
        println!();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &output)?;
        info!("wrote {} bytes to {}", output.len(), path.display());

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!(
                "Read {} models and {} enums from {}",
                datamodel.models.len(),
                datamodel.enums.len(),
                self.schema.display()
            ))
            .dim()
        );
        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Created {}", path.display())).dim()
        );
        println!();

        Ok(())
    }

    /// Layers the config file and the command line flags over `defaults`.
    fn resolve_config(&self, defaults: &Config) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None if fs::exists(CONFIG_FILE_NAME)? => Config::load(CONFIG_FILE_NAME)?,
            None => defaults.clone(),
        };

        if let Some(case) = &self.case {
            config.generator.case = case.parse()?;
        }

        if let Some(provider) = &self.provider {
            config.generator.provider = provider.parse()?;
        }

        if self.read_only_ids {
            config.generator.read_only_ids = true;
        }

        if let Some(name) = &self.db_type_name {
            config.generator.db_type_name = name.clone();
        }

        if let Some(out) = &self.out {
            config.output.path = Some(out.clone());
        }

        config.generator.validate()?;

        debug!(
            "config: provider={}; case={:?}; quote={}",
            config.generator.provider, config.generator.case, config.output.quote
        );

        Ok(config)
    }
}
