//! Prompt templates for text simplification

/// Maximum number of input characters embedded in the outbound prompt
pub const MAX_INPUT_CHARS: usize = 3000;

/// Fixed instruction preceding the user text
pub const SIMPLIFY_INSTRUCTION: &str = "Simplify the following text into short, easy-to-read bullet points. \
Keep only the essential information. \
Do not add any introduction or filler such as \"Here is\" or \"Sure\". \
Do not use markdown headers.";

/// Build the simplification prompt, truncating the input to
/// [`MAX_INPUT_CHARS`] characters first
pub fn simplify_prompt(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_INPUT_CHARS).collect();
    format!("{}\n\nText:\n{}", SIMPLIFY_INSTRUCTION, truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_kept_verbatim() {
        let prompt = simplify_prompt("Photosynthesis converts light to energy.");
        assert!(prompt.starts_with(SIMPLIFY_INSTRUCTION));
        assert!(prompt.ends_with("Text:\nPhotosynthesis converts light to energy."));
    }

    #[test]
    fn test_long_text_truncated_to_limit() {
        let input = "a".repeat(MAX_INPUT_CHARS + 1000);
        let prompt = simplify_prompt(&input);
        let embedded = prompt.split("Text:\n").nth(1).unwrap();
        assert_eq!(embedded.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Multi-byte characters must not be split mid-boundary
        let input = "é".repeat(MAX_INPUT_CHARS + 10);
        let prompt = simplify_prompt(&input);
        let embedded = prompt.split("Text:\n").nth(1).unwrap();
        assert_eq!(embedded.chars().count(), MAX_INPUT_CHARS);
    }
}
