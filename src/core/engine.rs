use crate::core::{Extracted, Pipeline, SweepReport};
use crate::utils::error::Result;

pub struct SweepEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SweepEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SweepReport> {
        println!("Starting sweep...");

        // Extract
        println!("Reading source files...");
        let extracted = self.pipeline.extract().await?;
        let found = extracted
            .iter()
            .filter(|e| matches!(e, Extracted::Found(_)))
            .count();
        println!("Loaded {} of {} file(s)", found, extracted.len());

        // Transform
        println!("Transforming...");
        let result = self.pipeline.transform(extracted).await?;
        println!("Prepared {} action(s)", result.actions.len());

        // Load
        println!("Writing files...");
        let report = self.pipeline.load(result).await?;
        println!("{}", report.summary());

        Ok(report)
    }
}
