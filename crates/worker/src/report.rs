use std::fmt::Write;

use screener_core::domain::recommendation::{ScoredSecurity, ScreeningSnapshot};

pub fn render_text(snapshot: &ScreeningSnapshot, shortlist_only: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Screening run {} (source: {}, generated {})",
        snapshot.run_id,
        snapshot.source,
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    let Some(selected) = snapshot.selected() else {
        let _ = writeln!(out, "No securities to screen.");
        return out;
    };

    let _ = writeln!(out, "\nTop {} recommendations", snapshot.shortlist.len());
    write_table(&mut out, &snapshot.shortlist);

    if !shortlist_only {
        let _ = writeln!(out, "\nRanked universe");
        write_table(&mut out, &snapshot.universe);
    }

    let _ = writeln!(
        out,
        "\nSelected: {} ({}, score {})",
        selected.symbol(),
        selected.recommendation,
        selected.score()
    );
    for label in &selected.result.matched_criteria {
        let _ = writeln!(out, "  + {label}");
    }

    out
}

fn write_table(out: &mut String, entries: &[ScoredSecurity]) {
    let _ = writeln!(out, "{:>3}  {:<8} {:>5}  {}", "#", "SYMBOL", "SCORE", "RECOMMENDATION");
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<8} {:>5}  {}",
            i + 1,
            entry.symbol(),
            entry.score(),
            entry.recommendation
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::domain::contract::Universe;
    use screener_core::ingest::fixture::demo_universe;
    use screener_core::screening::overrides::RecommendationOverrides;
    use screener_core::screening::snapshot;

    fn demo_snapshot() -> ScreeningSnapshot {
        snapshot(
            "fixture",
            demo_universe().unwrap(),
            &RecommendationOverrides::default(),
        )
    }

    #[test]
    fn renders_shortlist_and_selection() {
        let snap = demo_snapshot();
        let text = render_text(&snap, true);

        assert!(text.contains("Top 5 recommendations"));
        assert!(!text.contains("Ranked universe"));
        assert!(text.contains("  5  ESGC        10  Don't Buy"));
        assert!(text.contains("Selected: ALCO (Buy, score 120)"));
        assert!(text.contains("  + Analyst Rating: Buy"));
    }

    #[test]
    fn renders_full_universe() {
        let snap = demo_snapshot();
        let text = render_text(&snap, false);
        assert!(text.contains("Ranked universe"));
        assert!(text.contains(" 10  GRIN        10  Don't Buy"));
    }

    #[test]
    fn renders_empty_state() {
        let snap = snapshot("file", Universe::default(), &RecommendationOverrides::default());
        let text = render_text(&snap, false);
        assert!(text.contains("No securities to screen."));
        assert!(!text.contains("Selected"));
    }
}
