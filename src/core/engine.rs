use crate::core::{CompareOutcome, CompareRequest, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct CompareEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CompareEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self, request: CompareRequest) -> Result<CompareOutcome> {
        let started = Instant::now();
        tracing::debug!("Starting comparison (sort: {})", request.sort_mode);

        // Extract
        let inputs = self.pipeline.extract(request).await?;
        tracing::debug!(
            "Extracted {} + {} distinct lines",
            inputs.a.len(),
            inputs.b.len()
        );

        // Transform
        let result = self.pipeline.transform(inputs).await?;
        tracing::debug!(
            "Found {} lines unique to file1, {} unique to file2",
            result.unique_to_a.len(),
            result.unique_to_b.len()
        );

        // Load
        let outcome = self.pipeline.load(result).await?;
        tracing::debug!("Comparison finished in {:?}", started.elapsed());

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComparisonResult, ExtractedInputs, SortMode};
    use crate::utils::error::CompareError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records how far a run got.
    #[derive(Default)]
    struct CountingPipeline {
        stages: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self, request: CompareRequest) -> Result<ExtractedInputs> {
            self.stages.fetch_add(1, Ordering::SeqCst);
            if request.file_b.is_none() {
                return Err(CompareError::invalid_input("file2", "file is missing"));
            }
            Ok(ExtractedInputs {
                a: Default::default(),
                b: Default::default(),
                sort_mode: request.sort_mode,
            })
        }

        async fn transform(&self, _inputs: ExtractedInputs) -> Result<ComparisonResult> {
            self.stages.fetch_add(1, Ordering::SeqCst);
            Ok(ComparisonResult {
                unique_to_a: vec![],
                unique_to_b: vec![],
            })
        }

        async fn load(&self, result: ComparisonResult) -> Result<CompareOutcome> {
            self.stages.fetch_add(1, Ordering::SeqCst);
            assert!(result.identical());
            Ok(CompareOutcome::Identical)
        }
    }

    #[tokio::test]
    async fn test_run_executes_all_stages() {
        let engine = CompareEngine::new(CountingPipeline::default());
        let outcome = engine
            .run(CompareRequest::new("", "", SortMode::Top))
            .await
            .unwrap();

        assert!(outcome.is_identical());
        assert_eq!(engine.pipeline().stages.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_run_stops_after_failed_extract() {
        let engine = CompareEngine::new(CountingPipeline::default());
        let request = CompareRequest {
            file_a: Some(vec![]),
            file_b: None,
            sort_mode: SortMode::Top,
        };

        let result = engine.run(request).await;

        assert!(matches!(result, Err(CompareError::InvalidInput { .. })));
        assert_eq!(engine.pipeline().stages.load(Ordering::SeqCst), 1);
    }
}
