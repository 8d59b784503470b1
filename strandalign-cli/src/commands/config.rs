//! Config command implementation - print or write the default configuration

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

pub fn execute(output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            Config::default().save_to_file(&path)?;
            log::info!("Default configuration written to: {}", path.display());
        }
        None => print!("{}", Config::example_toml()?),
    }
    Ok(())
}
