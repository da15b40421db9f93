//! Content generation stage: turns a topic analysis into a long-form article.

use crate::llm::GenerationClient;
use tracing::info;

const CONTENT_PROMPT: &str = r#"You are a technical writer creating a detailed article based on topic analysis.

Use the following topic analysis to create a comprehensive technical article (1000-1500 words):

{topic_analysis}

Your article should include:

1. Introduction (150-200 words)
   - Brief overview of the topic
   - Why it's important/interesting

2. Main Content (700-1100 words)
   - Detailed explanation of each sub-topic
   - Technical concepts with clear explanations
   - Practical applications and examples

3. Conclusion (100-150 words)
   - Summary of key points
   - Future outlook or implications

Format your response in Markdown with appropriate headers (# for main title, ## for sections, ### for subsections).
"#;

/// Generate the article body from the structured topic analysis.
pub async fn generate_content<C>(client: &C, model: &str, topic_analysis: &str) -> String
where
    C: GenerationClient + ?Sized,
{
    let prompt = CONTENT_PROMPT.replace("{topic_analysis}", topic_analysis);
    info!(model = model, analysis_len = topic_analysis.len(), "Generating article content");
    client.generate(model, &prompt).await
}
