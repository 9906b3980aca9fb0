use crate::domain::model::{
    ClassificationPolicy, CompareOutcome, CompareRequest, ComparisonResult, ExtractedInputs,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn classification(&self) -> ClassificationPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, request: CompareRequest) -> Result<ExtractedInputs>;
    async fn transform(&self, inputs: ExtractedInputs) -> Result<ComparisonResult>;
    async fn load(&self, result: ComparisonResult) -> Result<CompareOutcome>;
}
