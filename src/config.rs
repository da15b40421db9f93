use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_CODE_MODEL: &str = "codellama:7b";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// The top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub generation: GenerationConfig,
    pub export: ExportConfig,
    pub include_code: bool,
}

impl PipelineConfig {
    pub fn trace_loaded(&self) {
        info!(
            endpoint = %self.generation.endpoint,
            model = %self.generation.model,
            code_model = %self.generation.code_model,
            output_dir = %self.export.output_dir.display(),
            include_code = self.include_code,
            "Loaded PipelineConfig"
        );
        debug!(?self, "PipelineConfig loaded (full debug)");
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            export: ExportConfig::default(),
            include_code: true,
        }
    }
}

/// Generation configuration - which endpoint and models to call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    pub code_model: String,
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: with_default_tag(DEFAULT_MODEL),
            code_model: with_default_tag(DEFAULT_CODE_MODEL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Export configuration - where artifacts land on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Append `:latest` to model names that carry no explicit tag.
pub fn with_default_tag(model: &str) -> String {
    if model.contains(':') {
        model.to_string()
    } else {
        format!("{model}:latest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagless_model_gets_latest() {
        assert_eq!(with_default_tag("mistral"), "mistral:latest");
    }

    #[test]
    fn tagged_model_is_kept() {
        assert_eq!(with_default_tag("codellama:7b"), "codellama:7b");
    }
}
