pub mod domain;
pub mod ingest;
pub mod screening;

pub mod config {
    use crate::screening::overrides::RecommendationOverrides;
    use anyhow::Context;

    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub universe_path: Option<String>,
        pub overrides: Option<String>,
        pub port: u16,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(s) => s
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number (got {s:?})"))?,
                Err(_) => DEFAULT_PORT,
            };

            Ok(Self {
                sentry_dsn: non_empty_var("SENTRY_DSN"),
                universe_path: non_empty_var("SCREENER_UNIVERSE_PATH"),
                overrides: non_empty_var("SCREENER_OVERRIDES"),
                port,
            })
        }

        /// Override table configured through `SCREENER_OVERRIDES`; empty when unset.
        pub fn recommendation_overrides(&self) -> anyhow::Result<RecommendationOverrides> {
            match self.overrides.as_deref() {
                Some(raw) => {
                    RecommendationOverrides::parse(raw).context("invalid SCREENER_OVERRIDES")
                }
                None => Ok(RecommendationOverrides::default()),
            }
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::recommendation::Recommendation;

        fn settings(overrides: Option<&str>) -> Settings {
            Settings {
                sentry_dsn: None,
                universe_path: None,
                overrides: overrides.map(str::to_string),
                port: DEFAULT_PORT,
            }
        }

        #[test]
        fn missing_overrides_yield_empty_table() {
            let table = settings(None).recommendation_overrides().unwrap();
            assert!(table.is_empty());
        }

        #[test]
        fn parses_configured_overrides() {
            let table = settings(Some("ESGC=dont_buy, GNK=Hold"))
                .recommendation_overrides()
                .unwrap();
            assert_eq!(table.get("ESGC"), Some(Recommendation::DontBuy));
            assert_eq!(table.get("GNK"), Some(Recommendation::Hold));
        }

        #[test]
        fn rejects_malformed_overrides() {
            assert!(settings(Some("ESGC")).recommendation_overrides().is_err());
        }
    }
}
