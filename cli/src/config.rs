use anyhow::Context;
use merkaz::builder::ClientBuilder;
use merkaz::token::FileTokenStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Address of the Merkaz server
    base_url: Option<String>,
    /// Request timeout, in seconds
    timeout: Option<u64>,
    /// File keeping the session token
    token_path: Option<PathBuf>,
}

impl Config {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let reader = std::fs::File::open(path)
            .with_context(|| format!("unable to open configuration file {path:?}"))?;
        serde_json::from_reader(reader)
            .with_context(|| format!("unable to parse configuration file {path:?}"))
    }

    pub fn token_path(&self) -> PathBuf {
        if let Some(ref path) = self.token_path {
            path.clone()
        } else if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("merkaz").join("session.json")
        } else {
            PathBuf::from(".merkaz-session.json")
        }
    }

    pub fn builder(&self) -> ClientBuilder {
        let mut builder = ClientBuilder::from_env();
        if let Some(ref base_url) = self.base_url {
            builder.set_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout.map(Duration::from_secs) {
            builder.set_timeout(timeout);
        }
        builder.with_token_store(FileTokenStore::new(self.token_path()))
    }

    pub fn build(self) -> Result<merkaz::Client, merkaz::builder::Error> {
        self.builder().build()
    }
}
