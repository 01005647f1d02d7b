use crate::domain::contract::{Universe, UniverseFeed};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Supplies the securities for one screening run.
#[async_trait::async_trait]
pub trait SecurityDataSource: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn fetch_universe(&self) -> Result<Universe>;
}

/// Reads a `UniverseFeed` JSON document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SecurityDataSource for FileDataSource {
    fn provider_name(&self) -> &'static str {
        "file"
    }

    async fn fetch_universe(&self) -> Result<Universe> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read universe file {}", self.path.display()))?;
        parse_feed(&text)
            .with_context(|| format!("{} is not a valid universe feed", self.path.display()))?
            .validate_and_into_universe()
    }
}

fn parse_feed(text: &str) -> Result<UniverseFeed> {
    Ok(serde_json::from_str::<UniverseFeed>(text)?)
}
