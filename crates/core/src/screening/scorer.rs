use crate::domain::recommendation::ScoreResult;
use crate::domain::security::SecurityRecord;

pub const PRICE_TO_BOOK: &str = "Price to Book < 1.0";
pub const DIVIDEND_YIELD_IN_BAND: &str = "Dividend Yield 3-6%";
pub const DIVIDEND_YIELD_ABOVE_BAND: &str = "Dividend Yield > 6%";
pub const CURRENT_RATIO_IN_BAND: &str = "Current Ratio 2-4";
pub const CURRENT_RATIO_ABOVE_BAND: &str = "Current Ratio > 4";
pub const PRICE_TO_EARNINGS: &str = "P/E < 10";
pub const DEBT_TO_EQUITY: &str = "Debt to Equity < 1";
pub const SUSTAINABLE_PAYOUT: &str = "Sustainable Payout Ratio";

const FAVORABLE_RATINGS: [&str; 2] = ["Buy", "Outperform"];

/// Scores one security against the value rubric. The total is the raw additive sum and is
/// not clamped to 100.
pub fn score(security: &SecurityRecord) -> ScoreResult {
    let mut card = Scorecard::default();

    if security.price_to_book < 1.0 {
        card.award(20, PRICE_TO_BOOK);
    }

    if security.dividend_yield >= 0.03 {
        if security.dividend_yield <= 0.06 {
            card.award(20, DIVIDEND_YIELD_IN_BAND);
        } else {
            // High yields may not be sustainable.
            card.award(15, DIVIDEND_YIELD_ABOVE_BAND);
        }
    }

    if security.current_ratio >= 2.0 {
        if security.current_ratio <= 4.0 {
            card.award(20, CURRENT_RATIO_IN_BAND);
        } else {
            card.award(10, CURRENT_RATIO_ABOVE_BAND);
        }
    }

    if security.price_to_earnings < 10.0 {
        card.award(20, PRICE_TO_EARNINGS);
    }

    if security.debt_to_equity < 1.0 {
        card.award(20, DEBT_TO_EQUITY);
    }

    if is_favorable_rating(&security.analyst_rating) {
        card.award(10, format!("Analyst Rating: {}", security.analyst_rating));
    }

    if security.payout_ratio < 0.5 {
        card.award(10, SUSTAINABLE_PAYOUT);
    }

    card.finish()
}

pub fn is_favorable_rating(rating: &str) -> bool {
    FAVORABLE_RATINGS.contains(&rating)
}

// Points and labels only move together.
#[derive(Default)]
struct Scorecard {
    score: u32,
    matched: Vec<String>,
}

impl Scorecard {
    fn award(&mut self, points: u32, label: impl Into<String>) {
        self.score += points;
        self.matched.push(label.into());
    }

    fn finish(self) -> ScoreResult {
        ScoreResult {
            score: self.score,
            matched_criteria: self.matched,
        }
    }
}
