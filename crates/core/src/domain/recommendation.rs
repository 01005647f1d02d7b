use crate::domain::security::SecurityRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Hold,
    #[serde(rename = "Don't Buy")]
    DontBuy,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] = [Self::Buy, Self::Hold, Self::DontBuy];

    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::DontBuy => "Don't Buy",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Recommendation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-' | '\''))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "buy" => Ok(Self::Buy),
            "hold" => Ok(Self::Hold),
            "dontbuy" => Ok(Self::DontBuy),
            _ => anyhow::bail!("unknown recommendation label: {s:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32,
    /// Labels in rubric evaluation order.
    pub matched_criteria: Vec<String>,
}

/// A security augmented with its score and final recommendation. Serializes flat, the same
/// shape as the input record plus `score`, `matchedCriteria` and `recommendation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSecurity {
    #[serde(flatten)]
    pub security: SecurityRecord,
    #[serde(flatten)]
    pub result: ScoreResult,
    pub recommendation: Recommendation,
}

impl ScoredSecurity {
    pub fn symbol(&self) -> &str {
        &self.security.symbol
    }

    pub fn score(&self) -> u32 {
        self.result.score
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningSnapshot {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub as_of_date: Option<NaiveDate>,
    /// Every screened security, score descending.
    pub universe: Vec<ScoredSecurity>,
    pub shortlist: Vec<ScoredSecurity>,
}

impl ScreeningSnapshot {
    /// Default highlighted entry; `None` means there is nothing to show yet.
    pub fn selected(&self) -> Option<&ScoredSecurity> {
        self.shortlist.first()
    }

    pub fn find(&self, symbol: &str) -> Option<&ScoredSecurity> {
        self.universe
            .iter()
            .find(|s| s.symbol().eq_ignore_ascii_case(symbol.trim()))
    }
}
