//! Prompt construction
//!
//! The system prompt carries the full behavioral contract for all three
//! variations; the user prompt restates the request fields and repeats
//! the JSON-only instruction.

use domain::{DraftLength, EmailRequest, Relationship, Tone};

/// Hard formatting rules appended to every system prompt
const CRITICAL_RULES: &str = "CRITICAL RULES:
- Return ONLY valid JSON, no markdown formatting, no code blocks
- No placeholder text like [Name], [Date], [Company]
- Use \\n\\n for paragraph breaks in body text
- Subject lines must be 6-8 words, specific and clear
- End emails with sign-off word only (no \"Sincerely, John Smith\" - just \"Sincerely,\")
- Make each variation GENUINELY different, not just word-swapped
- Every email must be copy-paste ready";

/// System prompt for single-turn providers (Gemini path)
///
/// Expects the completion to be a JSON object with an `emails` array.
pub fn system_prompt() -> String {
    let tone_guidelines = bullet_list(Tone::all().iter().map(Tone::style_guide));
    let length_guidelines = bullet_list(DraftLength::all().iter().map(DraftLength::guideline));
    let relationship_rules =
        bullet_list(Relationship::all().iter().map(Relationship::formality_rule));

    format!(
        "You are an expert email writing assistant. Generate exactly 3 email variations based on the user's input.\n\n\
         TONE GUIDELINES:\n{tone_guidelines}\n\n\
         LENGTH GUIDELINES:\n{length_guidelines}\n\n\
         RELATIONSHIP affects formality:\n{relationship_rules}\n\n\
         {CRITICAL_RULES}\n\n\
         Return in this EXACT JSON format:\n\
         {{\n  \"emails\": [\n    {{\n      \"id\": 1,\n      \"tone\": \"professional\",\n      \"subject\": \"Clear subject line here\",\n      \"body\": \"Email body with proper formatting.\\n\\nUse double line breaks for paragraphs.\\n\\nEnd with sign-off word,\"\n    }},\n    {{ \"id\": 2, \"tone\": \"friendly\", \"subject\": \"Subject line\", \"body\": \"Body text...\" }},\n    {{ \"id\": 3, \"tone\": \"firm\", \"subject\": \"Subject line\", \"body\": \"Body text...\" }}\n  ]\n}}"
    )
}

/// User prompt restating the four request fields
pub fn user_prompt(request: &EmailRequest) -> String {
    format!(
        "Generate 3 email variations for:\n\n\
         Context: {}\n\
         Tone preference: {}\n\
         Relationship: {}\n\
         Length: {}\n\n\
         Remember: Return ONLY valid JSON with the exact structure specified. No markdown, no code blocks, just pure JSON.",
        request.context, request.tone, request.relationship, request.length
    )
}

/// Combined single-turn prompt: system text followed by the user block
pub fn combined_prompt(request: &EmailRequest) -> String {
    format!("{}\n\n{}", system_prompt(), user_prompt(request))
}

/// System prompt for the gateway path
///
/// The gateway carries the request fields in the system message and the
/// raw context as the user message; its completion uses a `variations`
/// array and omits per-entry tone.
pub fn gateway_system_prompt(request: &EmailRequest) -> String {
    format!(
        "You are an expert email writer. Generate exactly 3 email variations based on the user's requirements.\n\
         - Tone: {}\n\
         - Relationship with recipient: {}\n\
         - Length: {}\n\n\
         {CRITICAL_RULES}\n\n\
         Return ONLY a JSON object with this exact structure (no markdown, no code blocks):\n\
         {{\n  \"variations\": [\n    {{ \"subject\": \"Email subject line\", \"body\": \"Email body text with proper paragraphs\" }},\n    {{ \"subject\": \"Email subject line\", \"body\": \"Email body text with proper paragraphs\" }},\n    {{ \"subject\": \"Email subject line\", \"body\": \"Email body text with proper paragraphs\" }}\n  ]\n}}\n\n\
         Each variation should be distinct and well-formatted. Use appropriate greeting and closing based on the relationship.",
        request.tone, request.relationship, request.length
    )
}

fn bullet_list<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest::new(
            "The bug fix has been deployed and tested successfully.",
            Tone::Professional,
            Relationship::Colleague,
            DraftLength::Short,
        )
    }

    #[test]
    fn system_prompt_lists_every_tone() {
        let prompt = system_prompt();
        for tone in Tone::all() {
            assert!(prompt.contains(tone.style_guide()), "missing {tone}");
        }
    }

    #[test]
    fn system_prompt_lists_every_relationship() {
        let prompt = system_prompt();
        for rel in Relationship::all() {
            assert!(prompt.contains(rel.formality_rule()), "missing {rel}");
        }
    }

    #[test]
    fn system_prompt_lists_every_length_band() {
        let prompt = system_prompt();
        for length in DraftLength::all() {
            assert!(prompt.contains(length.guideline()), "missing {length}");
        }
    }

    #[test]
    fn system_prompt_demands_emails_array() {
        assert!(system_prompt().contains("\"emails\""));
    }

    #[test]
    fn system_prompt_forbids_markdown_and_placeholders() {
        let prompt = system_prompt();
        assert!(prompt.contains("no markdown formatting"));
        assert!(prompt.contains("[Name]"));
        assert!(prompt.contains("6-8 words"));
    }

    #[test]
    fn user_prompt_carries_all_four_fields() {
        let prompt = user_prompt(&request());
        assert!(prompt.contains("The bug fix has been deployed"));
        assert!(prompt.contains("professional"));
        assert!(prompt.contains("colleague"));
        assert!(prompt.contains("short"));
    }

    #[test]
    fn user_prompt_repeats_json_only_instruction() {
        assert!(user_prompt(&request()).contains("ONLY valid JSON"));
    }

    #[test]
    fn combined_prompt_is_system_then_user() {
        let combined = combined_prompt(&request());
        let system = system_prompt();
        assert!(combined.starts_with(&system));
        assert!(combined.ends_with("just pure JSON."));
    }

    #[test]
    fn combined_prompt_is_deterministic_for_identical_input() {
        assert_eq!(combined_prompt(&request()), combined_prompt(&request()));
    }

    #[test]
    fn gateway_prompt_demands_variations_array() {
        let prompt = gateway_system_prompt(&request());
        assert!(prompt.contains("\"variations\""));
        assert!(!prompt.contains("\"emails\""));
    }

    #[test]
    fn gateway_prompt_carries_request_fields_but_not_context() {
        let prompt = gateway_system_prompt(&request());
        assert!(prompt.contains("professional"));
        assert!(prompt.contains("colleague"));
        assert!(prompt.contains("short"));
        // Context travels as the user message on the gateway path
        assert!(!prompt.contains("bug fix"));
    }
}
