//! LLM prompt for proposition decomposition

/// Placeholder replaced by the chunk content
const CONTENT_PLACEHOLDER: &str = "{content}";

/// Builds the decomposition prompt for one chunk
pub struct PromptBuilder<'a> {
    content: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Render the complete prompt
    ///
    /// The content is inserted exactly once; braces inside it are left alone.
    pub fn build(&self) -> String {
        PROPOSITION_TEMPLATE.replacen(CONTENT_PLACEHOLDER, self.content, 1)
    }
}

const PROPOSITION_TEMPLATE: &str = r#"Decompose the "Content" into clear and simple propositions, following these rules:
1. Split compound sentences into simple sentences. Maintain the original phrasing from the input whenever possible.
2. For any named entity that is accompanied by additional descriptive information, separate this information into its own distinct proposition.
3. Decontextualize each proposition by adding necessary modifiers to nouns or entire sentences and replacing pronouns (e.g., "it", "he", "she", "they", "this", "that") with the full name of the entities they refer to.
4. Format the output as a JSON list of strings. Return only the list.

Example:

Content: "The earliest evidence for the Easter Hare was recorded in 1678 by Georg Franck von Franckenau, a professor of medicine. He went to the park. He likes walking."
Output: ["The earliest evidence for the Easter Hare was recorded in 1678 by Georg Franck von Franckenau.", "Georg Franck von Franckenau was a professor of medicine.", "Georg Franck von Franckenau went to the park.", "Georg Franck von Franckenau likes walking."]

### Content:
{content}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_content() {
        let prompt = PromptBuilder::new("Alice works at Acme Corp").build();
        assert!(prompt.contains("### Content:\nAlice works at Acme Corp\n"));
        assert!(!prompt.contains(CONTENT_PLACEHOLDER));
    }

    #[test]
    fn test_prompt_includes_rules() {
        let prompt = PromptBuilder::new("x").build();
        assert!(prompt.contains("Split compound sentences"));
        assert!(prompt.contains("replacing pronouns"));
        assert!(prompt.contains("JSON list of strings"));
    }

    #[test]
    fn test_example_output_is_valid_json() {
        let line = PROPOSITION_TEMPLATE
            .lines()
            .find_map(|l| l.strip_prefix("Output: "))
            .unwrap();
        let parsed: Vec<String> = serde_json::from_str(line).unwrap();
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_placeholder_in_content_not_expanded() {
        let prompt = PromptBuilder::new("literal {content} braces").build();
        assert!(prompt.contains("literal {content} braces"));
        assert_eq!(prompt.matches("literal").count(), 1);
    }

    #[test]
    fn test_empty_content() {
        let prompt = PromptBuilder::new("").build();
        assert!(prompt.ends_with("### Content:\n\n"));
    }
}
