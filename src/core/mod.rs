pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod standings;

pub use crate::domain::model::{LeagueReport, MatchRecord, RankingEntry, StandingsSnapshot};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
