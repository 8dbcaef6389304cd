use crate::domain::model::{NumberList, RunReport, Sum};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait InputReader: Send + Sync {
    fn read_all(&self) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// `File: <path>` or `Stdin`.
    fn describe(&self) -> String;
}

pub trait OutputWriter: Send + Sync {
    fn write_sum(&self, sum: Sum) -> impl std::future::Future<Output = Result<()>> + Send;

    fn describe(&self) -> String;
}

pub trait Notifier: Send + Sync {
    fn notify(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn http_url(&self) -> &str;
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<NumberList>;
    async fn transform(&self, data: NumberList) -> Result<Sum>;
    async fn notify(&self) -> Result<()>;
    async fn load(&self, sum: Sum) -> Result<RunReport>;
}
