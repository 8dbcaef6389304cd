pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{normalize_legacy_flags, CliConfig};

pub use adapters::http::HttpNotifier;
pub use config::{
    cli::{InputSource, OutputTarget},
    env::AppConfig,
    Settings,
};
pub use core::{etl::SumEngine, pipeline::SumPipeline};
pub use domain::model::{NumberList, RunReport, Sum};
pub use utils::error::{Result, SumError};
