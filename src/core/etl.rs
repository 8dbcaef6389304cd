use crate::core::Pipeline;
use crate::domain::model::RunReport;
use crate::utils::error::Result;

/// Runs a pipeline once: extract, transform, notify, load. The first error
/// stops the run, so nothing is written after a failed notification.
pub struct SumEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SumEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::debug!("Extracting numbers...");
        let numbers = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} values", numbers.len());

        let sum = self.pipeline.transform(numbers).await?;

        tracing::debug!("Sending notification...");
        self.pipeline.notify().await?;

        tracing::debug!("Writing output...");
        let report = self.pipeline.load(sum).await?;
        tracing::debug!("Output saved to: {}", report.destination);

        Ok(report)
    }
}
