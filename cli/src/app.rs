use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[clap(about, author, version)]
pub struct Command {
    /// Path to load the configuration file. Default to ~/.config/merkaz.json. If not found, loading from environment.
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: crate::cmd::Command,
}

impl Command {
    pub fn config(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("merkaz.json")
        } else {
            PathBuf::from(".merkaz.json")
        }
    }

    /// Loads the configuration file, the default one being optional.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config();
        if self.config.is_none() && !path.exists() {
            tracing::debug!("no configuration found at {path:?}, using environment");
            return Ok(Config::default());
        }
        Config::from_path(&path)
    }

    pub async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        self.subcmd.execute(client).await
    }

    pub fn set_log_level(&self) {
        let filter = if self.verbose {
            "merkaz=info,merkaz_cli=info".to_string()
        } else {
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
        };
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err:?}");
        }
    }
}
