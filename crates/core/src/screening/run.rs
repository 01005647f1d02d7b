use crate::domain::contract::Universe;
use crate::domain::recommendation::{ScoredSecurity, ScreeningSnapshot};
use crate::domain::security::SecurityRecord;
use crate::screening::classifier::classify;
use crate::screening::overrides::RecommendationOverrides;
use crate::screening::ranker::{rank, Ranking};
use crate::screening::scorer::score;

/// Scores, classifies and ranks one snapshot of the universe. Overrides are applied after
/// classification and win over it.
pub fn screen(securities: Vec<SecurityRecord>, overrides: &RecommendationOverrides) -> Ranking {
    let entries: Vec<ScoredSecurity> = securities
        .into_iter()
        .map(|security| {
            let result = score(&security);
            let computed = classify(&security, result.score);
            let recommendation = overrides.resolve(&security.symbol, computed);

            tracing::debug!(
                symbol = %security.symbol,
                score = result.score,
                matched = result.matched_criteria.len(),
                %computed,
                %recommendation,
                "scored security"
            );

            ScoredSecurity {
                security,
                result,
                recommendation,
            }
        })
        .collect();

    let ranking = rank(entries);

    tracing::info!(
        universe_len = ranking.universe.len(),
        shortlist_len = ranking.shortlist.len(),
        top = ranking.shortlist.first().map(|s| s.symbol()).unwrap_or("-"),
        "screening complete"
    );

    ranking
}

/// Runs a full screening pass and stamps it. `overrides` are merged over the universe's own.
pub fn snapshot(
    source: &str,
    universe: Universe,
    overrides: &RecommendationOverrides,
) -> ScreeningSnapshot {
    let table = universe.overrides.merged_with(overrides);
    let ranking = screen(universe.securities, &table);

    ScreeningSnapshot {
        run_id: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        source: source.to_string(),
        as_of_date: universe.as_of_date,
        universe: ranking.universe,
        shortlist: ranking.shortlist,
    }
}
