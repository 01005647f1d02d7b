use crate::domain::recommendation::Recommendation;
use crate::domain::security::SecurityRecord;
use crate::screening::overrides::RecommendationOverrides;
use anyhow::ensure;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Wire shape every data source produces before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseFeed {
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
    #[serde(default)]
    pub overrides: Option<BTreeMap<String, Recommendation>>,
    pub securities: Vec<SecurityRecord>,
}

/// A validated screening input. Scoring code may assume every record is well-formed.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    pub as_of_date: Option<NaiveDate>,
    pub securities: Vec<SecurityRecord>,
    pub overrides: RecommendationOverrides,
}

impl UniverseFeed {
    pub fn validate_and_into_universe(self) -> anyhow::Result<Universe> {
        let mut seen = BTreeSet::<String>::new();
        let mut securities = Vec::with_capacity(self.securities.len());
        for record in self.securities {
            securities.push(validate_record(record, &mut seen)?);
        }

        let mut overrides = RecommendationOverrides::default();
        for (symbol, forced) in self.overrides.unwrap_or_default() {
            ensure!(!symbol.trim().is_empty(), "override symbol must be non-empty");
            ensure!(
                symbol == symbol.trim(),
                "override symbol has surrounding whitespace: {symbol:?}"
            );
            overrides.insert(symbol, forced);
        }

        Ok(Universe {
            as_of_date: self.as_of_date,
            securities,
            overrides,
        })
    }
}

/// Records pass through unchanged; the rating in particular is scored verbatim, so a padded
/// `" Buy "` earns no analyst points.
fn validate_record(
    record: SecurityRecord,
    seen: &mut BTreeSet<String>,
) -> anyhow::Result<SecurityRecord> {
    let symbol = &record.symbol;
    ensure!(!symbol.trim().is_empty(), "symbol must be non-empty");
    ensure!(
        symbol == symbol.trim(),
        "symbol has surrounding whitespace: {symbol:?}"
    );
    ensure!(seen.insert(symbol.clone()), "duplicate symbol: {symbol}");

    let ratios = [
        ("priceToBook", record.price_to_book),
        ("priceToEarnings", record.price_to_earnings),
        ("dividendYield", record.dividend_yield),
        ("currentRatio", record.current_ratio),
        ("debtToEquity", record.debt_to_equity),
        ("payoutRatio", record.payout_ratio),
    ];
    for (field, value) in ratios {
        ensure!(
            value.is_finite(),
            "{field} must be a finite number for {symbol} (got {value})"
        );
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::scorer::score;
    use serde_json::json;

    fn record(symbol: &str) -> serde_json::Value {
        json!({
            "symbol": symbol,
            "priceToBook": 0.9,
            "priceToEarnings": 8.0,
            "dividendYield": 0.04,
            "currentRatio": 2.5,
            "debtToEquity": 0.5,
            "analystRating": "Buy",
            "payoutRatio": 0.3
        })
    }

    fn feed(v: serde_json::Value) -> UniverseFeed {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn validates_records_and_overrides() {
        let universe = feed(json!({
            "asOfDate": "2026-10-16",
            "overrides": {"GNK": "Hold", "ESGC": "Don't Buy"},
            "securities": [record("ALCO"), record("GNK")]
        }))
        .validate_and_into_universe()
        .unwrap();

        assert_eq!(universe.as_of_date, NaiveDate::from_ymd_opt(2026, 10, 16));
        assert_eq!(universe.securities.len(), 2);
        assert_eq!(universe.securities[0].symbol, "ALCO");
        assert_eq!(universe.overrides.get("ESGC"), Some(Recommendation::DontBuy));
        assert_eq!(universe.overrides.get("GNK"), Some(Recommendation::Hold));
    }

    #[test]
    fn padded_rating_is_kept_verbatim_and_earns_no_points() {
        let mut padded = record("ALCO");
        padded["analystRating"] = json!(" Buy ");
        let universe = feed(json!({"securities": [record("GNK"), padded]}))
            .validate_and_into_universe()
            .unwrap();

        let exact = score(&universe.securities[0]);
        let validated = score(&universe.securities[1]);
        assert_eq!(universe.securities[1].analyst_rating, " Buy ");
        assert_eq!(exact.score - validated.score, 10);
        assert!(!validated
            .matched_criteria
            .iter()
            .any(|label| label.starts_with("Analyst Rating")));
    }

    #[test]
    fn rejects_padded_symbols() {
        let err = feed(json!({"securities": [record(" ALCO ")]}))
            .validate_and_into_universe()
            .unwrap_err();
        assert!(err.to_string().contains("whitespace"));

        let res = feed(json!({
            "overrides": {" ESGC ": "Don't Buy"},
            "securities": [record("ESGC")]
        }))
        .validate_and_into_universe();
        assert!(res.is_err());
    }

    #[test]
    fn empty_universe_is_valid() {
        let universe = feed(json!({"securities": []}))
            .validate_and_into_universe()
            .unwrap();
        assert!(universe.securities.is_empty());
        assert!(universe.overrides.is_empty());
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let err = feed(json!({"securities": [record("TX"), record("TX")]}))
            .validate_and_into_universe()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate symbol: TX"));
    }

    #[test]
    fn rejects_blank_symbol() {
        let res = feed(json!({"securities": [record("  ")]})).validate_and_into_universe();
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_finite_ratio() {
        let mut universe = feed(json!({"securities": [record("CMRE")]}));
        universe.securities[0].price_to_earnings = f64::NAN;
        let err = universe.validate_and_into_universe().unwrap_err();
        assert!(err.to_string().contains("priceToEarnings"));
    }
}
