pub mod fixture;
pub mod provider;

pub use fixture::FixtureDataSource;
pub use provider::{FileDataSource, SecurityDataSource};
