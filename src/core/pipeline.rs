use crate::core::diff_engine::DiffEngine;
use crate::core::extractor::extract_lines;
use crate::core::{
    CompareOutcome, CompareRequest, ComparisonResult, ConfigProvider, ExtractedInputs, LineSet,
    Pipeline, Storage,
};
use crate::utils::error::{CompareError, Result};

pub const FILE_A_FIELD: &str = "file1";
pub const FILE_B_FIELD: &str = "file2";
pub const OUTPUT_A_NAME: &str = "unique_to_file1.txt";
pub const OUTPUT_B_NAME: &str = "unique_to_file2.txt";

pub struct ComparePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    engine: DiffEngine,
}

impl<S: Storage, C: ConfigProvider> ComparePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let engine = DiffEngine::new(config.classification());
        Self {
            storage,
            config,
            engine,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// 將輸出行序列轉成以換行結尾的文字檔內容
pub fn render_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

async fn extract_in_background(field: &'static str, raw: Option<Vec<u8>>) -> Result<LineSet> {
    tokio::task::spawn_blocking(move || extract_lines(field, raw.as_deref()))
        .await
        .map_err(|e| CompareError::processing(format!("extraction of {} aborted: {}", field, e)))?
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ComparePipeline<S, C> {
    async fn extract(&self, request: CompareRequest) -> Result<ExtractedInputs> {
        // 缺少檔案時直接拒絕，不啟動任何計算
        if request.file_a.is_none() {
            return Err(CompareError::invalid_input(FILE_A_FIELD, "file is missing"));
        }
        if request.file_b.is_none() {
            return Err(CompareError::invalid_input(FILE_B_FIELD, "file is missing"));
        }

        let CompareRequest {
            file_a,
            file_b,
            sort_mode,
        } = request;

        let (a, b) = tokio::try_join!(
            extract_in_background(FILE_A_FIELD, file_a),
            extract_in_background(FILE_B_FIELD, file_b)
        )?;

        Ok(ExtractedInputs { a, b, sort_mode })
    }

    async fn transform(&self, inputs: ExtractedInputs) -> Result<ComparisonResult> {
        tracing::debug!(
            "Comparing {} vs {} distinct lines (sort: {}, classification: {})",
            inputs.a.len(),
            inputs.b.len(),
            inputs.sort_mode,
            self.engine.policy().as_str()
        );

        Ok(self.engine.compare(&inputs.a, &inputs.b, inputs.sort_mode))
    }

    async fn load(&self, result: ComparisonResult) -> Result<CompareOutcome> {
        if result.identical() {
            tracing::debug!("No differences, skipping artifact creation");
            return Ok(CompareOutcome::Identical);
        }

        let id = uuid::Uuid::new_v4().simple().to_string();
        let output_a = format!("{}/{}", id, OUTPUT_A_NAME);
        let output_b = format!("{}/{}", id, OUTPUT_B_NAME);

        self.storage
            .write_file(&output_a, render_lines(&result.unique_to_a).as_bytes())
            .await?;

        if let Err(e) = self
            .storage
            .write_file(&output_b, render_lines(&result.unique_to_b).as_bytes())
            .await
        {
            // 不保留不完整的結果
            if let Err(cleanup) = self.storage.remove_file(&output_a).await {
                tracing::warn!("Failed to remove partial artifact {}: {}", output_a, cleanup);
            }
            return Err(e);
        }

        tracing::debug!(
            "Artifacts written under {}/{}",
            self.config.output_path(),
            id
        );

        Ok(CompareOutcome::Differences {
            id,
            output_a,
            output_b,
            unique_to_a_count: result.unique_to_a.len(),
            unique_to_b_count: result.unique_to_b.len(),
        })
    }
}
