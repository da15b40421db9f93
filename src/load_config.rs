use crate::config::{with_default_tag, ExportConfig, GenerationConfig, PipelineConfig};
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

#[derive(Deserialize, Default)]
struct StaticConfig {
    #[serde(default)]
    generation: GenerationSection,
    #[serde(default)]
    export: ExportSection,
}

#[derive(Deserialize, Default)]
struct GenerationSection {
    endpoint: Option<String>,
    model: Option<String>,
    code_model: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize, Default)]
struct ExportSection {
    output_dir: Option<std::path::PathBuf>,
}

/// Loads a static YAML config file and merges it over the built-in defaults.
/// When no path is given the defaults are used as-is. The
/// `GENERATION_ENDPOINT` environment variable, when set, overrides the
/// endpoint from either source.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let static_conf = match path {
        Some(path_ref) => {
            info!(config_path = ?path_ref, "Loading configuration from file");

            let config_content = match fs::read_to_string(path_ref) {
                Ok(content) => {
                    info!(config_path = ?path_ref, "Config file read successfully");
                    content
                }
                Err(e) => {
                    error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
                    return Err(anyhow::anyhow!(
                        "Failed to read config file {:?}: {}",
                        path_ref,
                        e
                    ));
                }
            };

            match serde_yaml::from_str::<StaticConfig>(&config_content) {
                Ok(conf) => {
                    info!(config_path = ?path_ref, "Parsed config YAML successfully");
                    conf
                }
                Err(e) => {
                    error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
                    return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
                }
            }
        }
        None => {
            info!("No config file given, using built-in defaults");
            StaticConfig::default()
        }
    };

    let defaults = GenerationConfig::default();
    let mut generation = GenerationConfig {
        endpoint: static_conf.generation.endpoint.unwrap_or(defaults.endpoint),
        model: static_conf
            .generation
            .model
            .as_deref()
            .map(with_default_tag)
            .unwrap_or(defaults.model),
        code_model: static_conf
            .generation
            .code_model
            .as_deref()
            .map(with_default_tag)
            .unwrap_or(defaults.code_model),
        timeout_secs: static_conf
            .generation
            .timeout_secs
            .unwrap_or(defaults.timeout_secs),
    };

    if let Ok(endpoint) = std::env::var("GENERATION_ENDPOINT") {
        info!(endpoint = %endpoint, "GENERATION_ENDPOINT found in env, overriding endpoint");
        generation.endpoint = endpoint;
    }

    let export = ExportConfig {
        output_dir: static_conf
            .export
            .output_dir
            .unwrap_or_else(|| ExportConfig::default().output_dir),
    };

    info!(
        endpoint = %generation.endpoint,
        output_dir = %export.output_dir.display(),
        "Config loaded and merged successfully"
    );

    Ok(PipelineConfig {
        generation,
        export,
        include_code: true,
    })
}
