use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One equity as supplied by a data source. Only `symbol` and the seven
/// scoring ratios are required; everything else is display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRecord {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,

    pub price_to_book: f64,
    pub price_to_earnings: f64,
    pub dividend_yield: f64,
    pub current_ratio: f64,
    pub debt_to_equity: f64,
    pub analyst_rating: String,
    pub payout_ratio: f64,

    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default, rename = "low52Week")]
    pub low_52_week: f64,
    #[serde(default, rename = "high52Week")]
    pub high_52_week: f64,
    #[serde(default)]
    pub eps: f64,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub return_on_equity: f64,
    #[serde(default)]
    pub profit_margin: f64,
    #[serde(default)]
    pub annual_dividend: f64,
    #[serde(default, rename = "dividendGrowth5Year")]
    pub dividend_growth_5_year: f64,
    #[serde(default)]
    pub dividend_years: u32,
    #[serde(default)]
    pub next_earnings_date: Option<NaiveDate>,
    #[serde(default)]
    pub quarterly_data: Vec<QuarterlyResult>,
    #[serde(default)]
    pub dividend_history: Vec<DividendPayment>,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyResult {
    pub quarter: String,
    pub revenue: f64,
    pub eps: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendPayment {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}
