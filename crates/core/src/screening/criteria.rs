//! Per-criterion breakdown for a security's detail view.
//!
//! Unlike the scorer, each check here is pass/fail against the ideal band: a 7% dividend
//! yield earns scorer points but does not meet "Dividend Yield 3-6%".

use crate::domain::security::SecurityRecord;
use crate::screening::scorer::is_favorable_rating;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionCheck {
    pub name: &'static str,
    pub description: &'static str,
    pub met: bool,
    pub value: String,
    pub target: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaMatch {
    pub symbol: String,
    pub checks: Vec<CriterionCheck>,
    pub met_count: usize,
    pub total: usize,
    pub percent_met: f64,
}

pub fn analyze(security: &SecurityRecord) -> CriteriaMatch {
    let s = security;
    let checks = vec![
        CriterionCheck {
            name: "Price to Book < 1.0",
            description: "Buying below tangible book value is a discount to liquidation value.",
            met: s.price_to_book < 1.0,
            value: format!("{:.2}", s.price_to_book),
            target: "< 1.0",
        },
        CriterionCheck {
            name: "Dividend Yield 3-6%",
            description: "Steady dividends pay income while waiting for appreciation.",
            met: (0.03..=0.06).contains(&s.dividend_yield),
            value: percent(s.dividend_yield),
            target: "3-6%",
        },
        CriterionCheck {
            name: "Current Ratio 2-4",
            description: "Current assets at twice liabilities mark a conservative balance sheet.",
            met: (2.0..=4.0).contains(&s.current_ratio),
            value: format!("{:.2}", s.current_ratio),
            target: "2-4",
        },
        CriterionCheck {
            name: "Price to Earnings < 10",
            description: "Paying under ten times earnings leaves a margin of safety.",
            met: s.price_to_earnings < 10.0,
            value: format!("{:.2}", s.price_to_earnings),
            target: "< 10",
        },
        CriterionCheck {
            name: "Debt to Equity < 1",
            description: "Low leverage reduces risk during downturns.",
            met: s.debt_to_equity < 1.0,
            value: format!("{:.2}", s.debt_to_equity),
            target: "< 1",
        },
        CriterionCheck {
            name: "Analyst Rating: Buy/Outperform",
            description: "Buy or Outperform ratings add outside validation of the thesis.",
            met: is_favorable_rating(&s.analyst_rating),
            value: s.analyst_rating.clone(),
            target: "Buy/Outperform",
        },
        CriterionCheck {
            name: "Payout Ratio < 50%",
            description: "A low payout ratio means the dividend is well covered by earnings.",
            met: s.payout_ratio < 0.5,
            value: percent(s.payout_ratio),
            target: "< 50%",
        },
    ];

    let met_count = checks.iter().filter(|c| c.met).count();
    let total = checks.len();

    CriteriaMatch {
        symbol: s.symbol.clone(),
        percent_met: met_count as f64 / total as f64 * 100.0,
        checks,
        met_count,
        total,
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
