use crate::adapters::http::HttpNotifier;
use crate::config::cli::{InputSource, OutputTarget};
use crate::core::{ConfigProvider, InputReader, Notifier, OutputWriter, Pipeline};
use crate::domain::model::{NumberList, RunReport, Sum};
use crate::utils::error::Result;

pub struct SumPipeline<I: InputReader, N: Notifier, O: OutputWriter> {
    input: I,
    notifier: N,
    output: O,
}

impl<I: InputReader, N: Notifier, O: OutputWriter> SumPipeline<I, N, O> {
    pub fn new(input: I, notifier: N, output: O) -> Self {
        Self {
            input,
            notifier,
            output,
        }
    }
}

impl SumPipeline<InputSource, HttpNotifier, OutputTarget> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            InputSource::from_path(config.input_path()),
            HttpNotifier::new(config.http_url()),
            OutputTarget::from_path(config.output_path()),
        )
    }
}

#[async_trait::async_trait]
impl<I: InputReader, N: Notifier, O: OutputWriter> Pipeline for SumPipeline<I, N, O> {
    async fn extract(&self) -> Result<NumberList> {
        let source = self.input.describe();
        tracing::debug!("Reading input from {}", source);

        let bytes = self.input.read_all().await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), source);

        NumberList::from_slice(&bytes, &source)
    }

    async fn transform(&self, data: NumberList) -> Result<Sum> {
        let sum = data.sum()?;
        tracing::info!("Sum of numbers: {}", sum);
        Ok(sum)
    }

    async fn notify(&self) -> Result<()> {
        self.notifier.notify().await
    }

    async fn load(&self, sum: Sum) -> Result<RunReport> {
        self.output.write_sum(sum).await?;

        Ok(RunReport {
            sum,
            source: self.input.describe(),
            destination: self.output.describe(),
        })
    }
}
