use crate::domain::recommendation::{Recommendation, ScoredSecurity};

/// How many entries of each label the shortlist may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortlistPolicy {
    pub buy: usize,
    pub hold: usize,
    pub dont_buy: usize,
    pub max_len: usize,
}

impl Default for ShortlistPolicy {
    fn default() -> Self {
        Self {
            buy: 2,
            hold: 2,
            dont_buy: 1,
            max_len: 5,
        }
    }
}

impl ShortlistPolicy {
    fn quota(&self, label: Recommendation) -> usize {
        match label {
            Recommendation::Buy => self.buy,
            Recommendation::Hold => self.hold,
            Recommendation::DontBuy => self.dont_buy,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// All entries, score descending; equal scores keep input order.
    pub universe: Vec<ScoredSecurity>,
    pub shortlist: Vec<ScoredSecurity>,
}

pub fn rank(entries: Vec<ScoredSecurity>) -> Ranking {
    rank_with_policy(entries, ShortlistPolicy::default())
}

pub fn rank_with_policy(mut entries: Vec<ScoredSecurity>, policy: ShortlistPolicy) -> Ranking {
    sort_by_score(&mut entries);

    // No backfill: a short bucket just leaves the shortlist short.
    let mut shortlist = Vec::with_capacity(policy.max_len);
    for label in Recommendation::ALL {
        shortlist.extend(
            entries
                .iter()
                .filter(|e| e.recommendation == label)
                .take(policy.quota(label))
                .cloned(),
        );
    }
    sort_by_score(&mut shortlist);
    shortlist.truncate(policy.max_len);

    Ranking {
        universe: entries,
        shortlist,
    }
}

// `sort_by` is stable.
fn sort_by_score(entries: &mut [ScoredSecurity]) {
    entries.sort_by(|a, b| b.score().cmp(&a.score()));
}
