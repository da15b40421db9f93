//! Coordinating module for the analyse-generate-format-export pipeline.
//!
//! Fixed sequence, strictly forward, string to string: topic analysis,
//! content generation, optional code snippets, formatting, export. No
//! retries; any failed step returns immediately with a formatted error.

use std::path::PathBuf;

use tracing::{error, info};

use crate::analyse::analyse_topic;
use crate::config::PipelineConfig;
use crate::export::Exporter;
use crate::format::{extract_title, format};
use crate::generate::generate_content;
use crate::llm::GenerationClient;
use crate::snippet::generate_snippets;

/// Result of a full pipeline run: the final content and artifact paths.
#[derive(Debug)]
pub struct PipelineReport {
    pub title: String,
    pub content: String,
    pub pdf_path: PathBuf,
    pub docx_path: PathBuf,
}

/// Entrypoint: run the pipeline for one topic according to config.
pub async fn run_pipeline<C>(
    client: &C,
    config: &PipelineConfig,
    topic: &str,
) -> Result<PipelineReport, String>
where
    C: GenerationClient + Sync,
{
    info!(topic = topic, "[PIPELINE] Starting article generation");

    // Step 1: Topic analysis
    info!("[PIPELINE] Step 1: Analysing topic");
    let topic_analysis = analyse_topic(client, &config.generation.model, topic).await;
    if topic_analysis.trim().is_empty() {
        error!("[PIPELINE][ERROR] Topic analysis returned an empty response");
        return Err("Topic analysis returned an empty response".to_string());
    }
    info!(analysis_len = topic_analysis.len(), "[PIPELINE] Topic analysis completed");

    // Step 2: Content generation
    info!("[PIPELINE] Step 2: Generating content");
    let article_content =
        generate_content(client, &config.generation.model, &topic_analysis).await;
    if article_content.trim().is_empty() {
        error!("[PIPELINE][ERROR] Content generation returned an empty response");
        return Err("Content generation returned an empty response".to_string());
    }
    info!(content_len = article_content.len(), "[PIPELINE] Content generation completed");

    // Step 3: Code snippets (optional; an empty response only skips insertion)
    let code_snippets = if config.include_code {
        info!("[PIPELINE] Step 3: Generating code snippets");
        let snippets =
            generate_snippets(client, &config.generation.code_model, &article_content).await;
        if snippets.trim().is_empty() {
            info!("[PIPELINE] Code snippet stage returned nothing, continuing without snippets");
        } else {
            info!(snippets_len = snippets.len(), "[PIPELINE] Code snippet generation completed");
        }
        snippets
    } else {
        info!("[PIPELINE] Step 3 skipped: code snippets disabled");
        String::new()
    };

    // Step 4: Formatting
    info!("[PIPELINE] Step 4: Formatting content");
    let formatted_content = format(&article_content, &code_snippets);
    let title = extract_title(&formatted_content);
    info!(title = %title, "[PIPELINE] Formatting completed");

    // Step 5: Export
    info!("[PIPELINE] Step 5: Exporting to PDF and DOCX");
    let exporter = Exporter::new(config.export.output_dir.clone());
    let (pdf_path, docx_path) = match exporter.export(&formatted_content, &title) {
        Ok(paths) => paths,
        Err(e) => {
            error!(error = %e, "[PIPELINE][ERROR] Export failed");
            return Err(format!("Export failed: {e}"));
        }
    };
    info!(
        pdf = %pdf_path.display(),
        docx = %docx_path.display(),
        "[PIPELINE] Export completed"
    );

    Ok(PipelineReport {
        title,
        content: formatted_content,
        pdf_path,
        docx_path,
    })
}
