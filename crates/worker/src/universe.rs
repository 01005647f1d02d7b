use std::path::PathBuf;

use screener_core::config::Settings;
use screener_core::ingest::{FileDataSource, FixtureDataSource, SecurityDataSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Fixture,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct UniverseOptions {
    pub source: SourceKind,
}

impl Default for UniverseOptions {
    fn default() -> Self {
        Self {
            source: SourceKind::Fixture,
        }
    }
}

impl UniverseOptions {
    /// `--input` first, then SCREENER_UNIVERSE_PATH, then the demo fixture.
    pub fn resolve(input: Option<PathBuf>, settings: &Settings) -> Self {
        let source = match input {
            Some(path) => SourceKind::File(path),
            None => match settings.universe_path.as_deref() {
                Some(path) => SourceKind::File(PathBuf::from(path)),
                None => SourceKind::Fixture,
            },
        };
        Self { source }
    }
}

pub fn build_source(opts: &UniverseOptions) -> Box<dyn SecurityDataSource> {
    match &opts.source {
        SourceKind::Fixture => Box::new(FixtureDataSource),
        SourceKind::File(path) => Box::new(FileDataSource::new(path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(universe_path: Option<&str>) -> Settings {
        Settings {
            sentry_dsn: None,
            universe_path: universe_path.map(str::to_string),
            overrides: None,
            port: 3000,
        }
    }

    #[test]
    fn defaults_to_fixture() {
        let opts = UniverseOptions::resolve(None, &settings(None));
        assert_eq!(opts.source, UniverseOptions::default().source);
    }

    #[test]
    fn cli_input_beats_configured_path() {
        let opts = UniverseOptions::resolve(Some("cli.json".into()), &settings(Some("env.json")));
        assert_eq!(opts.source, SourceKind::File(PathBuf::from("cli.json")));

        let opts = UniverseOptions::resolve(None, &settings(Some("env.json")));
        assert_eq!(opts.source, SourceKind::File(PathBuf::from("env.json")));
    }

    #[test]
    fn file_source_is_named_file() {
        let opts = UniverseOptions::resolve(Some("cli.json".into()), &settings(None));
        assert_eq!(build_source(&opts).provider_name(), "file");
    }

    #[tokio::test]
    async fn fixture_source_loads_demo_universe() {
        let source = build_source(&UniverseOptions::default());
        assert_eq!(source.provider_name(), "fixture");
        let universe = source.fetch_universe().await.unwrap();
        assert_eq!(universe.securities.len(), 10);
    }
}
