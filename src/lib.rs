pub mod analyse;
pub mod config;
pub mod docx;
pub mod export;
pub mod format;
pub mod generate;
pub mod llm;
pub mod load_config;
pub mod markdown;
pub mod pdf;
pub mod pipeline;
pub mod snippet;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use llm::OllamaClient;
use load_config::load_config;
use pipeline::run_pipeline;

#[derive(Parser)]
#[clap(
    name = "article-forge",
    version,
    about = "Generate a technical article from a topic via a local LLM and export it to DOCX/PDF"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analyse/generate/format/export pipeline for a topic
    Generate {
        /// The topic to write the article about
        #[clap(long)]
        topic: String,
        /// Path to an optional YAML config file
        #[clap(long)]
        config: Option<PathBuf>,
        /// Skip the code-snippet generation stage
        #[clap(long)]
        no_code: bool,
        /// Override the model used for analysis and content
        #[clap(long)]
        model: Option<String>,
        /// Override the model used for code snippets
        #[clap(long)]
        code_model: Option<String>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Generate {
            topic,
            config,
            no_code,
            model,
            code_model,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(model) = model {
                config.generation.model = config::with_default_tag(&model);
            }
            if let Some(code_model) = code_model {
                config.generation.code_model = config::with_default_tag(&code_model);
            }
            config.include_code = !no_code;
            config.trace_loaded();

            let client = OllamaClient::new(
                &config.generation.endpoint,
                config.generation.timeout_secs,
            )?;

            println!("Generation starting...");
            match run_pipeline(&client, &config, &topic).await {
                Ok(report) => {
                    println!("Generation complete.\nReport:");
                    println!("{:#?}", report);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("[ERROR] Generation failed: {}", e);
                    Err(anyhow::Error::msg(e))
                }
            }
        }
    }
}
