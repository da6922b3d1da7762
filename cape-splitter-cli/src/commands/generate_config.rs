//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Use it for splitting:");
        println!("   cape-split split -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# cape-split configuration\n\
             #\n\
             # [grouping]     window sizes in words (overlap is taken in whole sentences)\n\
             # [performance]  execution_mode = \"sequential\" | \"parallel\" | \"adaptive\",\n\
             #                worker_threads = 0 uses every core\n\
             # [output]       default_format = \"text\" | \"json\" | \"markdown\"\n\
             \n{body}"
        ))
    }
}
