// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, SceneConfig};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pyramid-walk")]
#[command(about = "Walk around a daylight pyramid plaza", long_about = None)]
pub struct Cli {
    /// JSON scene configuration; missing fields use built-in defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the tree layout
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding the texture images
    #[arg(long, value_name = "DIR")]
    pub textures: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<SceneConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.layout.seed = Some(seed);
        }
        if let Some(dir) = &self.textures {
            config.textures.directory = dir.clone();
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}
