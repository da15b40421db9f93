//! Code-snippet stage: asks the code model for supplementary examples.

use crate::llm::GenerationClient;
use tracing::info;

const SNIPPET_PROMPT: &str = r#"You are an expert programmer reviewing a technical article.

Article content:
{article_content}

Your task is to enhance this article by adding relevant code examples where appropriate.
Follow these guidelines:

1. Identify 2-4 places where code examples would significantly improve understanding
2. For each location:
   - Add a brief explanation of what the code demonstrates
   - Provide a relevant code example in the appropriate language (Python, JavaScript, etc.)
   - Add a short explanation of the code's key components

Format your response as a list of code examples in Markdown format:

## Code Examples

### Example 1: [Brief Title]
Brief explanation of what this code demonstrates.

```python
# Sample code here
def example_function():
    pass
```

Explanation of key components in the code.

(Repeat for each example)
"#;

/// Generate supplementary code examples for an article.
pub async fn generate_snippets<C>(client: &C, model: &str, article_content: &str) -> String
where
    C: GenerationClient + ?Sized,
{
    let prompt = SNIPPET_PROMPT.replace("{article_content}", article_content);
    info!(model = model, content_len = article_content.len(), "Generating code snippets");
    client.generate(model, &prompt).await
}
