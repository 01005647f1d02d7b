pub mod classifier;
pub mod criteria;
pub mod overrides;
pub mod ranker;
pub mod run;
pub mod scorer;

pub use classifier::classify;
pub use ranker::{rank, Ranking, ShortlistPolicy};
pub use run::{screen, snapshot};
pub use scorer::score;
