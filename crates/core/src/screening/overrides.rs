use crate::domain::recommendation::Recommendation;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbols whose recommendation is pinned regardless of score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationOverrides {
    forced: BTreeMap<String, Recommendation>,
}

impl RecommendationOverrides {
    /// Parses `SYMBOL=Label` pairs separated by commas, e.g. `ESGC=dont_buy,GNK=Hold`.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut out = Self::default();
        for part in raw.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (symbol, label) = part
                .split_once('=')
                .with_context(|| format!("override must look like SYMBOL=LABEL (got {part:?})"))?;
            let symbol = symbol.trim();
            ensure!(!symbol.is_empty(), "override symbol must be non-empty in {part:?}");
            out.insert(symbol, label.parse()?);
        }
        Ok(out)
    }

    pub fn insert(&mut self, symbol: impl Into<String>, forced: Recommendation) {
        self.forced.insert(symbol.into(), forced);
    }

    pub fn get(&self, symbol: &str) -> Option<Recommendation> {
        self.forced.get(symbol).copied()
    }

    /// The forced label when `symbol` is pinned, otherwise `computed`.
    pub fn resolve(&self, symbol: &str, computed: Recommendation) -> Recommendation {
        self.get(symbol).unwrap_or(computed)
    }

    /// Entries from `other` win over entries already present.
    pub fn merged_with(&self, other: &Self) -> Self {
        let mut forced = self.forced.clone();
        forced.extend(other.forced.iter().map(|(k, v)| (k.clone(), *v)));
        Self { forced }
    }

    pub fn is_empty(&self) -> bool {
        self.forced.is_empty()
    }

    pub fn len(&self) -> usize {
        self.forced.len()
    }
}

impl FromIterator<(String, Recommendation)> for RecommendationOverrides {
    fn from_iter<I: IntoIterator<Item = (String, Recommendation)>>(iter: I) -> Self {
        Self {
            forced: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_label_beats_computed() {
        let table = RecommendationOverrides::parse("ESGC=Don't Buy,GNK=hold").unwrap();
        assert_eq!(table.resolve("ESGC", Recommendation::Buy), Recommendation::DontBuy);
        assert_eq!(table.resolve("GNK", Recommendation::DontBuy), Recommendation::Hold);
        assert_eq!(table.resolve("TX", Recommendation::Buy), Recommendation::Buy);
    }

    #[test]
    fn parse_skips_empty_segments() {
        let table = RecommendationOverrides::parse(" , GRIN = dont_buy ,").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("GRIN"), Some(Recommendation::DontBuy));
        assert!(RecommendationOverrides::parse("").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_bad_entries() {
        assert!(RecommendationOverrides::parse("GRIN").is_err());
        assert!(RecommendationOverrides::parse("=Hold").is_err());
        assert!(RecommendationOverrides::parse("GRIN=Sell").is_err());
    }

    #[test]
    fn merge_prefers_right_hand_side() {
        let feed: RecommendationOverrides = [
            ("ESCA".to_string(), Recommendation::Hold),
            ("GNK".to_string(), Recommendation::Hold),
        ]
        .into_iter()
        .collect();
        let configured = RecommendationOverrides::parse("ESCA=buy").unwrap();

        let merged = feed.merged_with(&configured);
        assert_eq!(merged.get("ESCA"), Some(Recommendation::Buy));
        assert_eq!(merged.get("GNK"), Some(Recommendation::Hold));
    }

    #[test]
    fn deserializes_from_plain_map() {
        let table: RecommendationOverrides =
            serde_json::from_str(r#"{"GRIN": "Don't Buy"}"#).unwrap();
        assert_eq!(table.get("GRIN"), Some(Recommendation::DontBuy));
    }
}
