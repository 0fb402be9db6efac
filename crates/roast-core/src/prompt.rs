//! The fixed persona/instruction template for the critique call.

/// Maximum critique length hint (characters) embedded in the prompt.
pub const MAX_CRITIQUE_CHARS: usize = 200;

/// System persona for the generation call.
pub const CRITIQUE_PERSONA: &str = "You are a sharp-tongued critique assistant.";

/// Build the single user prompt embedding the aggregated feed text.
pub fn build_critique_prompt(feed_text: &str) -> String {
    format!(
        "In at most {MAX_CRITIQUE_CHARS} characters, write a pointed, merciless critique of this \
         creator based on their public feed. Make it precise and well-grounded in the material, \
         sharp enough to sting, and feel free to go after the personality the posts reveal. \
         Feed content:\n{feed_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_feed_text_and_length_hint() {
        let prompt = build_critique_prompt("post one\npost two");
        assert!(prompt.contains("post one\npost two"));
        assert!(prompt.contains("200 characters"));
    }
}
