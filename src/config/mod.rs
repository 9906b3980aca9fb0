pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use toml_config::ServiceConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "file-compare")]
#[command(version, about = "Compare two text files and report the lines unique to each")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP comparison service
    Serve(ServeArgs),
    /// Compare two local files and write the result artifacts
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Override server.bind_address
    #[arg(long)]
    pub bind: Option<String>,

    /// Override storage.output_path
    #[arg(long)]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,

    /// Where lines starting with a special character go: top or bottom
    #[arg(long, default_value = "top")]
    pub sort_order: String,

    /// Override storage.output_path
    #[arg(long)]
    pub output_path: Option<String>,
}

impl CliConfig {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        match &self.command {
            Command::Serve(args) => {
                if let Some(bind) = &args.bind {
                    config.server.bind_address = bind.clone();
                }
                if let Some(output_path) = &args.output_path {
                    config.storage.output_path = output_path.clone();
                }
            }
            Command::Compare(args) => {
                if let Some(output_path) = &args.output_path {
                    config.storage.output_path = output_path.clone();
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}
