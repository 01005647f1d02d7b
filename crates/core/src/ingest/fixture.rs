use crate::domain::contract::{Universe, UniverseFeed};
use crate::ingest::provider::SecurityDataSource;
use anyhow::{Context, Result};

const DEMO_UNIVERSE_JSON: &str = include_str!("../../fixtures/demo_universe.json");

/// The built-in ten-security demo universe, including its pinned recommendations.
pub fn demo_universe() -> Result<Universe> {
    let feed: UniverseFeed =
        serde_json::from_str(DEMO_UNIVERSE_JSON).context("embedded demo universe is not valid")?;
    feed.validate_and_into_universe()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDataSource;

#[async_trait::async_trait]
impl SecurityDataSource for FixtureDataSource {
    fn provider_name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_universe(&self) -> Result<Universe> {
        demo_universe()
    }
}
