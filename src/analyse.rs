//! Topic analysis stage: one prompt fill-in, one generation call.

use crate::llm::GenerationClient;
use tracing::info;

const TOPIC_ANALYSIS_PROMPT: &str = r#"You are a technical research assistant.
Analyze the given research topic: "{topic}".

Provide output in the following structured format:

### Refined Description
- (2-3 sentences refining the topic scope)

### Key Sub-Topics
- List of important dimensions

### Related Fields
- Disciplines or domains connected

### Practical Applications
- Real-world use cases
"#;

/// Turn a raw topic string into a structured analysis text.
pub async fn analyse_topic<C>(client: &C, model: &str, topic: &str) -> String
where
    C: GenerationClient + ?Sized,
{
    let prompt = TOPIC_ANALYSIS_PROMPT.replace("{topic}", topic);
    info!(model = model, topic = topic, "Analysing topic");
    client.generate(model, &prompt).await
}
