pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{NumberList, RunReport, Sum};
pub use crate::domain::ports::{ConfigProvider, InputReader, Notifier, OutputWriter, Pipeline};
pub use crate::utils::error::Result;
