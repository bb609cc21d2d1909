pub mod error;
pub mod fixtures;
pub mod scorers;
pub mod standings;
pub mod stats;
pub mod validation;

pub use error::ChampionshipError;
pub use fixtures::FixtureService;
pub use scorers::ScorerService;
pub use standings::StandingsService;
pub use stats::StatsService;
pub use validation::ChampionshipValidator;
