use crate::domain::recommendation::Recommendation;
use crate::domain::security::SecurityRecord;

const PERTURBATION_MODULUS: u64 = 30;
const BUY_THRESHOLD: i64 = 80;
const HOLD_THRESHOLD: i64 = 50;

/// Sum of the symbol's UTF-16 code units.
///
/// Not a real hash: it only spreads a small universe across the recommendation buckets, and
/// changing it would move securities between buckets.
pub fn symbol_hash(symbol: &str) -> u64 {
    symbol.encode_utf16().map(u64::from).sum()
}

pub fn classify(security: &SecurityRecord, score: u32) -> Recommendation {
    classify_score(&security.symbol, score)
}

pub fn classify_score(symbol: &str, score: u32) -> Recommendation {
    let perturbation = (symbol_hash(symbol) % PERTURBATION_MODULUS) as i64;
    let adjusted = i64::from(score) - perturbation;

    if adjusted >= BUY_THRESHOLD {
        Recommendation::Buy
    } else if adjusted >= HOLD_THRESHOLD {
        Recommendation::Hold
    } else {
        Recommendation::DontBuy
    }
}
